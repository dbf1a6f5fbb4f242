use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Sprite is identified by a texture key and its size in world units.
/// The origin selects the pivot point relative to the sprite's top-left,
/// used for placement when rendering.
///
/// When the texture key is not in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore) the
/// renderer draws a plain `fallback` rectangle of the same size instead.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
    pub fallback: Color,
}

impl Sprite {
    /// A sprite whose pivot is its center.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32, fallback: Color) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            fallback,
        }
    }
}
