//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`InputState`].
//! - [`trigger_input_events`] turns fresh presses/releases into
//!   [`InputEvent`]s, and `F11` into a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    for state in input.bindings_mut() {
        let key = state.key_binding;
        state.update(
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        );
    }
    trigger_input_events(&input, &mut commands);
}

/// Trigger one event per action pressed or released this frame.
pub fn trigger_input_events(input: &InputState, commands: &mut Commands) {
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    let actions = [
        (&input.move_up, InputAction::MoveUp),
        (&input.move_down, InputAction::MoveDown),
        (&input.move_left, InputAction::MoveLeft),
        (&input.move_right, InputAction::MoveRight),
        (&input.fire, InputAction::Fire),
        (&input.back, InputAction::Back),
        (&input.confirm, InputAction::Confirm),
    ];
    for (state, action) in actions {
        if state.just_pressed {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if state.just_released {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }
}
