use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::screenposition::ScreenPosition;
use crate::components::shape::{Shape, ShapeKind};
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::exitprompt::ExitPrompt;
use crate::resources::playfield::PlayField;
use crate::resources::session::Session;
use crate::resources::texturestore::TextureStore;

enum Drawable {
    Sprite(Sprite),
    Shape(Shape),
}

/// Draw one frame. Exclusive so it can borrow the Raylib handle out of the
/// world while still reading components.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let cam = world.resource::<Camera2DRes>().0;
        {
            let mut d2 = d.begin_mode2D(cam);
            render_pass(world, &mut d2);
        }
        render_screen_texts(world, &mut d);
        render_debug_ui(world, &mut d);
        render_exit_prompt(world, &mut d);
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// World-space pass: sprites and shapes sorted by z, then collider outlines
/// in debug mode.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let mut to_draw: Vec<(ZIndex, Vector2, Drawable)> = Vec::new();
    {
        let mut sprites = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        for (s, p, z) in sprites.iter(world) {
            to_draw.push((*z, p.pos, Drawable::Sprite(s.clone())));
        }
        let mut shapes = world.query::<(&Shape, &MapPosition, &ZIndex)>();
        for (s, p, z) in shapes.iter(world) {
            to_draw.push((*z, p.pos, Drawable::Shape(*s)));
        }
    }
    to_draw.sort_by_key(|(z, _, _)| *z);

    let textures = world.resource::<TextureStore>();
    for (_, pos, drawable) in to_draw.iter() {
        match drawable {
            Drawable::Sprite(sprite) => match textures.get(&sprite.tex_key) {
                Some(tex) => {
                    // stretch the whole texture over the sprite size
                    let src = Rectangle {
                        x: 0.0,
                        y: 0.0,
                        width: tex.width as f32,
                        height: tex.height as f32,
                    };
                    let dest = Rectangle {
                        x: pos.x,
                        y: pos.y,
                        width: sprite.width,
                        height: sprite.height,
                    };
                    d2.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, Color::WHITE);
                }
                None => {
                    let corner = Vector2 {
                        x: pos.x - sprite.origin.x,
                        y: pos.y - sprite.origin.y,
                    };
                    let size = Vector2 {
                        x: sprite.width,
                        y: sprite.height,
                    };
                    d2.draw_rectangle_v(corner, size, sprite.fallback);
                }
            },
            Drawable::Shape(shape) => match shape.kind {
                ShapeKind::Rectangle { width, height } => {
                    let corner = Vector2 {
                        x: pos.x - width * 0.5,
                        y: pos.y - height * 0.5,
                    };
                    d2.draw_rectangle_v(corner, Vector2 { x: width, y: height }, shape.color);
                }
                ShapeKind::Circle { radius } => {
                    d2.draw_circle_v(*pos, radius, shape.color);
                }
            },
        }
    }

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        }
    }
}

/// Screen-space texts (HUD, end screen caption).
pub fn render_screen_texts(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut texts = world.query::<(&DynamicText, &ScreenPosition)>();
    for (text, position) in texts.iter(world) {
        d.draw_text(
            &text.content,
            position.pos.x as i32,
            position.pos.y as i32,
            text.font_size,
            text.color,
        );
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let field = *world.resource::<PlayField>();

    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, (field.height - 50.0) as i32, 10, Color::LIME);

    let entity_count = world.query::<Entity>().iter(world).count();
    let mut text = format!("Entities: {}", entity_count);
    if let Some(session) = world.get_resource::<Session>() {
        text.push_str(&format!(
            " | remaining: {:.2} | lives: {} | outcome: {:?}",
            session.clock().remaining(),
            session.lives().lives(),
            session.outcome()
        ));
    }
    d.draw_text(&text, 10, (field.height - 30.0) as i32, 10, Color::LIME);
}

pub fn render_exit_prompt(world: &mut World, d: &mut RaylibDrawHandle) {
    let open = world
        .get_resource::<ExitPrompt>()
        .is_some_and(|p| p.is_open());
    if !open {
        return;
    }
    let field = *world.resource::<PlayField>();
    d.draw_rectangle(
        0,
        0,
        field.width as i32,
        field.height as i32,
        Color::new(0, 0, 0, 170),
    );
    let x = (field.width * 0.5) as i32 - 170;
    let y = (field.height * 0.5) as i32 - 30;
    d.draw_text("Quit the game?", x, y, 40, Color::WHITE);
    d.draw_text("Enter: quit    Esc: keep playing", x, y + 50, 20, Color::GRAY);
}
