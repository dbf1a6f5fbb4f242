//! Väistä main entry point.
//!
//! A single-screen bullet hell written in Rust using:
//! - **raylib** for windowing, graphics, input and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Parse the command line and load `config.ini`
//! 2. Initialize the raylib window, the ECS world and the audio thread
//! 3. Register state hooks and observers, enter the Setup state
//! 4. Run one schedule per frame until the window closes or the player quits
//! 5. Shut the audio thread down
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 1234
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use vaista::events::gamestate::GameStateChangedEvent;
use vaista::game;
use vaista::resources::audio::{setup_audio, shutdown_audio};
use vaista::resources::camera2d::Camera2DRes;
use vaista::resources::exitprompt::ExitPrompt;
use vaista::resources::gameconfig::GameConfig;
use vaista::resources::gamestate::{GameState, GameStates, NextGameState};
use vaista::resources::input::InputState;
use vaista::resources::spawnrng::SpawnRng;
use vaista::resources::texturestore::TextureStore;
use vaista::resources::worldtime::WorldTime;
use vaista::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use vaista::systems::gamestate::check_pending_state;
use vaista::systems::input::update_input_state;
use vaista::systems::render::render_system;
use vaista::systems::time::update_world_time;

/// Väistä: dodge the falling enemies until the clock runs out.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the enemy spawner, for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    // Early-exit: dump the config (no window/audio needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            log::error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("Väistä");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape opens the exit prompt instead of closing the window
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(config.play_field());
    world.insert_resource(config.new_session());
    world.insert_resource(SpawnRng::from_seed(cli.seed));
    world.insert_resource(Camera2DRes::centered(
        window_width as f32,
        window_height as f32,
    ));
    world.insert_resource(InputState::default());
    world.insert_resource(ExitPrompt::default());
    world.insert_resource(TextureStore::new());
    world.insert_resource(config);

    // Init audio, before the Setup hook writes load commands
    setup_audio(&mut world);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::spawn_observers(&mut world);
    game::register_state_hooks(&mut world);
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // enter Setup right away
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(check_pending_state));
    game::add_gameplay_systems(&mut update);
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain(),
    );
    update.add_systems(render_system.after(vaista::systems::hud::update_hud));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && *world.resource::<GameState>().get() != GameStates::Quitting
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);
}
