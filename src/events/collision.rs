//! Collision event type.
//!
//! [`collision_detector`](crate::systems::collision::collision_detector)
//! triggers a [`CollisionEvent`] for every overlapping pair of colliders.
//! [`collision_observer`](crate::systems::collision::collision_observer)
//! resolves it against the spawned collision rules.
use bevy_ecs::prelude::*;

use crate::components::category::Category;

/// Event fired when two categorized entities with a `BoxCollider` overlap.
///
/// The categories are captured at detection time, so every pair found in a
/// frame resolves the same way even after an earlier pair despawned one of
/// the participants. No ordering guarantees are provided for `a` and `b`.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
    pub category_a: Category,
    pub category_b: Category,
}
