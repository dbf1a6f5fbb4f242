//! ECS resources made available to systems.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles optional debug overlays
//! - `exitprompt` – whether the quit confirmation is showing
//! - `gameclock` – countdown to victory
//! - `gameconfig` – INI-backed settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `lifetracker` – life counter leading to defeat
//! - `playfield` – field dimensions around the world origin
//! - `session` – the clock, the lives and the outcome of one play-through
//! - `spawnrng` – seedable randomness for the enemy spawner
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod camera2d;
pub mod debugmode;
pub mod exitprompt;
pub mod gameclock;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod lifetracker;
pub mod playfield;
pub mod session;
pub mod spawnrng;
pub mod systemsstore;
pub mod texturestore;
pub mod worldtime;
