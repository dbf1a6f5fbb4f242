//! Väistä library.
//!
//! Exposes the game's ECS components, resources, systems and events so the
//! binary and the integration tests share them.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
