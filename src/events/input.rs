//! Input action events.
//!
//! [`InputEvent`] is triggered when a gameplay-relevant key is pressed or
//! released. Observers react to discrete actions (firing, the exit prompt)
//! without polling [`InputState`](crate::resources::input::InputState).
//! Movement reads held keys from the resource instead.

use bevy_ecs::prelude::*;

/// Logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Up arrow.
    MoveUp,
    /// Down arrow.
    MoveDown,
    /// Left arrow.
    MoveLeft,
    /// Right arrow.
    MoveRight,
    /// `Z`.
    Fire,
    /// `Escape`.
    Back,
    /// `Enter`.
    Confirm,
    // ToggleDebug has its own event
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
    /// `true` on press, `false` on release.
    pub pressed: bool,
}
