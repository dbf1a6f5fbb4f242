//! Input-controlled movement component.
//!
//! [`InputControlled`] describes how an entity responds to the direction
//! keys. The [`crate::systems::inputcontroller`] system reads it together
//! with the [`InputState`](crate::resources::input::InputState) resource and
//! assigns the entity's velocity.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Movement intent derived from player keyboard input.
///
/// Each field stores the velocity to assign while the corresponding
/// direction key is held. Velocities replace each other; they never add up.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Velocity when moving up.
    pub up_velocity: Vector2,
    /// Velocity when moving down.
    pub down_velocity: Vector2,
    /// Velocity when moving left.
    pub left_velocity: Vector2,
    /// Velocity when moving right.
    pub right_velocity: Vector2,
}

impl InputControlled {
    /// Create an InputControlled component with specified velocities.
    pub fn new(up: Vector2, down: Vector2, left: Vector2, right: Vector2) -> Self {
        Self {
            up_velocity: up,
            down_velocity: down,
            left_velocity: left,
            right_velocity: right,
        }
    }

    /// Same speed along all four axes. Up is negative y.
    pub fn with_speed(speed: f32) -> Self {
        Self::new(
            Vector2 { x: 0.0, y: -speed },
            Vector2 { x: 0.0, y: speed },
            Vector2 { x: -speed, y: 0.0 },
            Vector2 { x: speed, y: 0.0 },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_speed_points_up_as_negative_y() {
        let c = InputControlled::with_speed(275.0);
        assert_eq!(c.up_velocity, Vector2 { x: 0.0, y: -275.0 });
        assert_eq!(c.down_velocity, Vector2 { x: 0.0, y: 275.0 });
        assert_eq!(c.left_velocity, Vector2 { x: -275.0, y: 0.0 });
        assert_eq!(c.right_velocity, Vector2 { x: 275.0, y: 0.0 });
    }
}
