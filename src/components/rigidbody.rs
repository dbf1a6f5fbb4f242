//! Kinematic body component.
//!
//! The [`RigidBody`] stores the velocity the movement system integrates into
//! [`MapPosition`](super::mapposition::MapPosition) each frame. There is no
//! acceleration, friction or restitution: every body in the game moves at a
//! constant velocity until something assigns a new one.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Create a RigidBody already moving with `velocity`.
    pub fn with_velocity(velocity: Vector2) -> Self {
        Self { velocity }
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Zero the velocity immediately. No drift, no deceleration.
    pub fn stop(&mut self) {
        self.velocity = Vector2 { x: 0.0, y: 0.0 };
    }

    pub fn is_moving(&self) -> bool {
        self.velocity.x != 0.0 || self.velocity.y != 0.0
    }
}
