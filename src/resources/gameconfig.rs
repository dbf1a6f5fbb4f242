//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for a safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1024
//! height = 768
//! target_fps = 60
//! vsync = true
//!
//! [game]
//! countdown = 50
//! starting_lives = 1
//! life_grant_interval = 10
//! spawn_interval = 1
//! player_speed = 275
//! projectile_speed = 350
//! enemy_speed = 150
//!
//! [assets]
//! path = ./assets
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};

use crate::resources::playfield::PlayField;
use crate::resources::session::Session;

const DEFAULT_WINDOW_WIDTH: u32 = 1024;
const DEFAULT_WINDOW_HEIGHT: u32 = 768;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_COUNTDOWN: f32 = 50.0;
const DEFAULT_STARTING_LIVES: u32 = 1;
const DEFAULT_LIFE_GRANT_INTERVAL: f32 = 10.0;
const DEFAULT_SPAWN_INTERVAL: f32 = 1.0;
const DEFAULT_PLAYER_SPEED: f32 = 275.0;
const DEFAULT_PROJECTILE_SPEED: f32 = 350.0;
const DEFAULT_ENEMY_SPEED: f32 = 150.0;
const DEFAULT_ASSETS_PATH: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels. Also the field width.
    pub window_width: u32,
    /// Window height in pixels. Also the field height.
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    /// Starting countdown in seconds.
    pub countdown: f32,
    pub starting_lives: u32,
    /// Seconds between granted lives.
    pub life_grant_interval: f32,
    /// Seconds between enemy spawns.
    pub spawn_interval: f32,
    pub player_speed: f32,
    pub projectile_speed: f32,
    pub enemy_speed: f32,
    /// Directory holding textures and audio files.
    pub assets_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            countdown: DEFAULT_COUNTDOWN,
            starting_lives: DEFAULT_STARTING_LIVES,
            life_grant_interval: DEFAULT_LIFE_GRANT_INTERVAL,
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            player_speed: DEFAULT_PLAYER_SPEED,
            projectile_speed: DEFAULT_PROJECTILE_SPEED,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            assets_path: PathBuf::from(DEFAULT_ASSETS_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, countdown={}, lives={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.countdown,
            self.starting_lives
        );

        Ok(())
    }

    /// Load configuration from INI text. Same merge rules as [`load_from_file`].
    ///
    /// [`load_from_file`]: GameConfig::load_from_file
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [game] section
        let float = |key: &str| config.getfloat("game", key).ok().flatten();
        if let Some(countdown) = float("countdown") {
            self.countdown = countdown.max(0.0) as f32;
        }
        // a session starting at zero lives would already be lost
        if let Some(lives) = config.getuint("game", "starting_lives").ok().flatten() {
            self.starting_lives = (lives as u32).max(1);
        }
        if let Some(interval) = float("life_grant_interval") {
            self.life_grant_interval = interval as f32;
        }
        if let Some(interval) = float("spawn_interval") {
            self.spawn_interval = interval as f32;
        }
        if let Some(speed) = float("player_speed") {
            self.player_speed = speed as f32;
        }
        if let Some(speed) = float("projectile_speed") {
            self.projectile_speed = speed as f32;
        }
        if let Some(speed) = float("enemy_speed") {
            self.enemy_speed = speed as f32;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "path") {
            self.assets_path = PathBuf::from(path);
        }
    }

    /// Save configuration to the INI file. Creates the file if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        config.set("game", "countdown", Some(self.countdown.to_string()));
        config.set("game", "starting_lives", Some(self.starting_lives.to_string()));
        config.set(
            "game",
            "life_grant_interval",
            Some(self.life_grant_interval.to_string()),
        );
        config.set("game", "spawn_interval", Some(self.spawn_interval.to_string()));
        config.set("game", "player_speed", Some(self.player_speed.to_string()));
        config.set(
            "game",
            "projectile_speed",
            Some(self.projectile_speed.to_string()),
        );
        config.set("game", "enemy_speed", Some(self.enemy_speed.to_string()));

        config.set(
            "assets",
            "path",
            Some(self.assets_path.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// The playing field matches the window.
    pub fn play_field(&self) -> PlayField {
        PlayField::new(self.window_width as f32, self.window_height as f32)
    }

    /// A fresh session with the configured countdown and lives.
    pub fn new_session(&self) -> Session {
        Session::new(self.countdown, self.starting_lives)
    }

    /// Full path of an asset file.
    pub fn asset(&self, file: impl AsRef<Path>) -> PathBuf {
        self.assets_path.join(file)
    }
}
