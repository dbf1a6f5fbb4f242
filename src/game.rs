use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::category::Category;
use crate::components::collision::{CollisionEffect, CollisionRule};
use crate::components::dynamictext::DynamicText;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::rigidbody::RigidBody;
use crate::components::screenposition::ScreenPosition;
use crate::components::sessionbinding::SessionBinding;
use crate::components::shape::Shape;
use crate::components::sprite::Sprite;
use crate::components::timer::{Timer, TimerAction};
use crate::components::weapon::Weapon;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::exitprompt::ExitPrompt;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::playfield::PlayField;
use crate::resources::session::{Outcome, Session};
use crate::resources::spawnrng::SpawnRng;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::systems::collision::{collision_detector, collision_observer};
use crate::systems::confine::{confine_to_field, despawn_escaped};
use crate::systems::exitprompt::{exit_prompt_observer, freeze_time_while_prompting};
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::hud::update_hud;
use crate::systems::inputcontroller::input_controller;
use crate::systems::movement::movement;
use crate::systems::spawner::spawn_enemy;
use crate::systems::timer::{timer_observer, update_timers};
use crate::systems::weapon::fire_observer;

pub const PLAYER_SIZE: f32 = 40.0;
pub const ENEMY_SIZE: f32 = 50.0;
pub const PROJECTILE_SIZE: f32 = 10.0;
pub const BOUNDARY_THICKNESS: f32 = 20.0;
/// Distance below the top edge where enemies appear.
pub const ENEMY_SPAWN_DEPTH: f32 = 100.0;
/// Distance above the player's center where projectiles appear.
pub const MUZZLE_OFFSET: f32 = 30.0;
pub const PLAYER_START_Y: f32 = 250.0;
/// The countdown loses one unit per tick.
pub const COUNTDOWN_TICK: f32 = 1.0;

pub const Z_BACKGROUND: i32 = -10;
pub const Z_BOUNDARY: i32 = 0;
pub const Z_ACTORS: i32 = 5;
pub const Z_END_SCREEN: i32 = 10;

pub const STAGE_MUSIC: &str = "stage1";
pub const VICTORY_MUSIC: &str = "victory";
pub const DEFEAT_MUSIC: &str = "gameover";
pub const LASER_FX: &str = "laser_gun";

/// Texture key and file name under the assets directory.
const TEXTURES: [(&str, &str); 7] = [
    ("background", "background.png"),
    ("player", "player.png"),
    ("enemy1", "enemy1.png"),
    ("enemy2", "enemy2.png"),
    ("enemy3", "enemy3.png"),
    ("victory", "victory.png"),
    ("defeat", "defeat.png"),
];

const MUSICS: [(&str, &str); 3] = [
    (STAGE_MUSIC, "stage1.wav"),
    (VICTORY_MUSIC, "victory.wav"),
    (DEFEAT_MUSIC, "gameover.wav"),
];

/// The rule table. Several rules can match one pair; all of them apply.
pub fn collision_rules() -> [CollisionRule; 5] {
    [
        CollisionRule::new(
            Category::Projectile,
            Category::UpperBoundary,
            CollisionEffect::DespawnFirst,
        ),
        CollisionRule::new(
            Category::Enemy,
            Category::LowerBoundary,
            CollisionEffect::DespawnFirst,
        ),
        CollisionRule::new(Category::Enemy, Category::Player, CollisionEffect::DespawnFirst),
        CollisionRule::new(Category::Player, Category::Enemy, CollisionEffect::PenalizeLife),
        CollisionRule::new(
            Category::Projectile,
            Category::Enemy,
            CollisionEffect::DespawnBoth,
        ),
    ]
}

/// Register the state enter hooks and insert the [`SystemsStore`].
pub fn register_state_hooks(world: &mut World) {
    let mut systems_store = SystemsStore::new();
    systems_store.register(world, "setup", setup);
    systems_store.register(world, "enter_play", enter_play);
    systems_store.register(world, "enter_victory", enter_victory);
    systems_store.register(world, "enter_defeat", enter_defeat);
    systems_store.register(world, "quit_game", quit_game);
    world.insert_resource(systems_store);
}

/// Spawn every global observer. They are [`Persistent`] so clearing the field
/// leaves them alone.
pub fn spawn_observers(world: &mut World) {
    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(collision_observer), Persistent));
    world.spawn((Observer::new(timer_observer), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(exit_prompt_observer), Persistent));
    world.spawn((Observer::new(fire_observer), Persistent));
    world.flush();
}

/// Add the simulation systems that do not touch Raylib.
pub fn add_gameplay_systems(schedule: &mut Schedule) {
    schedule.add_systems(check_pending_state);
    schedule.add_systems(freeze_time_while_prompting.after(check_pending_state));
    schedule.add_systems(
        (
            input_controller,
            movement,
            confine_to_field,
            collision_detector,
            despawn_escaped,
        )
            .chain()
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
    schedule.add_systems(
        update_timers
            .run_if(state_is_playing)
            .after(collision_detector),
    );
    schedule.add_systems(update_hud.after(update_timers));
}

/// Load textures and audio, then start playing.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    config: Res<GameConfig>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let mut tex_store = TextureStore::new();
    for (key, file) in TEXTURES {
        let path = config.asset(file);
        match rl.load_texture(&th, &path.to_string_lossy()) {
            Ok(texture) => tex_store.insert(key, texture),
            Err(e) => warn!("Texture '{}' not loaded from {:?}: {}", key, path, e),
        }
    }
    info!("Loaded {} of {} textures", tex_store.len(), TEXTURES.len());
    commands.insert_resource(tex_store);

    for (id, file) in MUSICS {
        audio_cmd_writer.write(AudioCmd::LoadMusic {
            id: id.to_string(),
            path: config.asset(file).to_string_lossy().into_owned(),
        });
    }
    audio_cmd_writer.write(AudioCmd::LoadFx {
        id: LASER_FX.to_string(),
        path: config
            .asset("laser_gun.wav")
            .to_string_lossy()
            .into_owned(),
    });

    next_state.set(GameStates::Playing);
}

/// Build the playing field and start a fresh session.
pub fn enter_play(
    mut commands: Commands,
    config: Res<GameConfig>,
    field: Res<PlayField>,
    mut session: ResMut<Session>,
    mut rng: ResMut<SpawnRng>,
    prompt: Option<ResMut<ExitPrompt>>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    *session = config.new_session();
    if let Some(mut prompt) = prompt {
        prompt.close();
    }

    commands.spawn((
        MapPosition::new(0.0, 0.0),
        Sprite::centered("background", field.width, field.height, Color::DARKBLUE),
        ZIndex(Z_BACKGROUND),
    ));

    let boundaries = [
        (
            Category::UpperBoundary,
            field.top() + BOUNDARY_THICKNESS * 0.5,
        ),
        (
            Category::LowerBoundary,
            field.bottom() - BOUNDARY_THICKNESS * 0.5,
        ),
    ];
    for (category, y) in boundaries {
        commands.spawn((
            category,
            MapPosition::new(0.0, y),
            BoxCollider::centered(field.width, BOUNDARY_THICKNESS),
            Shape::rectangle(field.width, BOUNDARY_THICKNESS, Color::GRAY),
            ZIndex(Z_BOUNDARY),
        ));
    }

    let start_y = PLAYER_START_Y.min(field.bottom() - BOUNDARY_THICKNESS - PLAYER_SIZE);
    commands.spawn((
        Category::Player,
        MapPosition::new(0.0, start_y),
        RigidBody::new(),
        InputControlled::with_speed(config.player_speed),
        Weapon::upward(MUZZLE_OFFSET, config.projectile_speed, LASER_FX),
        BoxCollider::centered(PLAYER_SIZE, PLAYER_SIZE),
        Sprite::centered("player", PLAYER_SIZE, PLAYER_SIZE, Color::LIME),
        ZIndex(Z_ACTORS),
    ));

    commands.spawn((
        ScreenPosition::new(20.0, BOUNDARY_THICKNESS + 10.0),
        DynamicText::new(session.clock().label(), 20, Color::WHITE),
        SessionBinding::Countdown,
    ));
    commands.spawn((
        ScreenPosition::new(20.0, BOUNDARY_THICKNESS + 35.0),
        DynamicText::new(session.lives().label(), 20, Color::WHITE),
        SessionBinding::Lives,
    ));

    for rule in collision_rules() {
        commands.spawn(rule);
    }

    commands.spawn(Timer::new(COUNTDOWN_TICK, TimerAction::CountdownTick));
    commands.spawn(Timer::new(config.life_grant_interval, TimerAction::GrantLife));
    commands.spawn(Timer::new(config.spawn_interval, TimerAction::SpawnEnemy));

    spawn_enemy(&mut commands, &mut rng.0, &field, config.enemy_speed);

    audio_cmd_writer.write(AudioCmd::PlayMusic {
        id: STAGE_MUSIC.to_string(),
        looped: true,
    });
    info!(
        "Session started: {} s, {} lives",
        session.clock().display_seconds(),
        session.lives().lives()
    );
}

pub fn enter_victory(
    mut commands: Commands,
    query: Query<Entity, Without<Persistent>>,
    field: Res<PlayField>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    show_end_screen(
        Outcome::Victory,
        &mut commands,
        &query,
        &field,
        &mut audio_cmd_writer,
    );
}

pub fn enter_defeat(
    mut commands: Commands,
    query: Query<Entity, Without<Persistent>>,
    field: Res<PlayField>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    show_end_screen(
        Outcome::Defeat,
        &mut commands,
        &query,
        &field,
        &mut audio_cmd_writer,
    );
}

/// Clear the field, swap the music for the jingle and show the end image.
///
/// Despawning the timer entities is what stops the countdown, the life grant
/// and the spawner.
fn show_end_screen(
    outcome: Outcome,
    commands: &mut Commands,
    query: &Query<Entity, Without<Persistent>>,
    field: &PlayField,
    audio_cmd_writer: &mut MessageWriter<AudioCmd>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }

    let (tex_key, jingle, caption, fallback) = match outcome {
        Outcome::Victory => ("victory", VICTORY_MUSIC, "YOU SURVIVED!", Color::DARKGREEN),
        Outcome::Defeat => ("defeat", DEFEAT_MUSIC, "GAME OVER", Color::MAROON),
    };

    audio_cmd_writer.write(AudioCmd::StopMusic {
        id: STAGE_MUSIC.to_string(),
    });
    audio_cmd_writer.write(AudioCmd::PlayMusic {
        id: jingle.to_string(),
        looped: false,
    });

    commands.spawn((
        MapPosition::new(0.0, 0.0),
        Sprite::centered(tex_key, field.width, field.height, fallback),
        ZIndex(Z_END_SCREEN),
    ));
    commands.spawn((
        ScreenPosition::new(field.width * 0.5 - 160.0, field.height - 80.0),
        DynamicText::new(format!("{}  Esc to exit", caption), 30, Color::WHITE),
    ));
    info!("Session over: {:?}", outcome);
}

pub fn quit_game(mut audio_cmd_writer: MessageWriter<AudioCmd>) {
    audio_cmd_writer.write(AudioCmd::StopMusic {
        id: STAGE_MUSIC.to_string(),
    });
    info!("Quitting game");
}
