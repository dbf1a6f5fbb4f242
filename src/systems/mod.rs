//! Game systems.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`collision`] – pairwise overlap checks and collision rule resolution
//! - [`confine`] – keep the player inside the field
//! - [`exitprompt`] – quit confirmation and the time freeze while it shows
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`hud`] – mirror the session counters into HUD texts
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputcontroller`] – translate input state into velocity on entities
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`render`] – draw world, HUD and overlays using Raylib
//! - [`spawner`] – enemy placement and creation
//! - [`time`] – update simulation time and delta
//! - [`timer`] – drive repeating timers and dispatch their actions
//! - [`weapon`] – spawn projectiles on fire

pub mod audio;
pub mod collision;
pub mod confine;
pub mod exitprompt;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod inputcontroller;
pub mod movement;
pub mod render;
pub mod spawner;
pub mod time;
pub mod timer;
pub mod weapon;
