//! Keyboard-to-velocity controller.
//!
//! Each held direction key sets the whole velocity to that direction's
//! vector. Keys are checked in the order up, down, left, right, so with
//! several held the last one in that order wins. Releasing any direction key
//! stops the entity for that frame, even while another key is still held.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Velocity for this frame given the current one and the keyboard state.
pub fn steer(current: Vector2, controls: &InputControlled, input: &InputState) -> Vector2 {
    if input.any_direction_released() {
        return Vector2::zero();
    }
    let mut velocity = current;
    if input.move_up.active {
        velocity = controls.up_velocity;
    }
    if input.move_down.active {
        velocity = controls.down_velocity;
    }
    if input.move_left.active {
        velocity = controls.left_velocity;
    }
    if input.move_right.active {
        velocity = controls.right_velocity;
    }
    velocity
}

/// Update each controlled entity's `RigidBody` velocity based on input.
pub fn input_controller(
    mut query: Query<(&InputControlled, &mut RigidBody)>,
    input_state: Res<InputState>,
) {
    for (controls, mut rigidbody) in query.iter_mut() {
        let velocity = steer(rigidbody.velocity, controls, &input_state);
        if velocity != rigidbody.velocity {
            rigidbody.set_velocity(velocity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(input: &mut InputState, dirs: &[&str]) {
        for d in dirs {
            let state = match *d {
                "up" => &mut input.move_up,
                "down" => &mut input.move_down,
                "left" => &mut input.move_left,
                _ => &mut input.move_right,
            };
            state.update(true, false, false);
        }
    }

    #[test]
    fn test_single_key_sets_speed() {
        let controls = InputControlled::with_speed(275.0);
        let mut input = InputState::default();
        held(&mut input, &["left"]);
        assert_eq!(
            steer(Vector2::zero(), &controls, &input),
            Vector2::new(-275.0, 0.0)
        );
    }

    #[test]
    fn test_last_key_in_order_wins() {
        let controls = InputControlled::with_speed(275.0);
        let mut input = InputState::default();
        held(&mut input, &["up", "right"]);
        assert_eq!(
            steer(Vector2::zero(), &controls, &input),
            Vector2::new(275.0, 0.0)
        );
        let mut input = InputState::default();
        held(&mut input, &["down", "up"]);
        assert_eq!(
            steer(Vector2::zero(), &controls, &input),
            Vector2::new(0.0, 275.0)
        );
    }

    #[test]
    fn test_release_stops_even_with_key_held() {
        let controls = InputControlled::with_speed(275.0);
        let mut input = InputState::default();
        held(&mut input, &["up"]);
        input.move_left.update(false, false, true);
        assert_eq!(
            steer(Vector2::new(-275.0, 0.0), &controls, &input),
            Vector2::zero()
        );
    }

    #[test]
    fn test_no_input_keeps_velocity() {
        let controls = InputControlled::with_speed(275.0);
        let input = InputState::default();
        let v = Vector2::new(0.0, -275.0);
        assert_eq!(steer(v, &controls, &input), v);
    }
}
