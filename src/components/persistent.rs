//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when the
//! game enters a terminal state and clears the field. Observers and
//! registered state-hook systems carry it.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should survive scene clears.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
