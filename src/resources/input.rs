//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Arrow keys move, `Z` fires,
//! `Escape` opens the exit prompt, `Enter` confirms it and `F11` toggles the
//! debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// Idle state bound to `key`.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    /// Store this frame's readings for the bound key.
    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_up: BoolState,
    pub move_down: BoolState,
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub fire: BoolState,
    pub back: BoolState,
    pub confirm: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_up: BoolState::bound(KeyboardKey::KEY_UP),
            move_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            move_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            move_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            fire: BoolState::bound(KeyboardKey::KEY_Z),
            back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            confirm: BoolState::bound(KeyboardKey::KEY_ENTER),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Direction states in evaluation order: up, down, left, right.
    pub fn directions(&self) -> [&BoolState; 4] {
        [
            &self.move_up,
            &self.move_down,
            &self.move_left,
            &self.move_right,
        ]
    }

    /// Every binding, so the poller can refresh them in one pass.
    pub fn bindings_mut(&mut self) -> [&mut BoolState; 8] {
        [
            &mut self.move_up,
            &mut self.move_down,
            &mut self.move_left,
            &mut self.move_right,
            &mut self.fire,
            &mut self.back,
            &mut self.confirm,
            &mut self.mode_debug,
        ]
    }

    pub fn any_direction_released(&self) -> bool {
        self.directions().iter().any(|s| s.just_released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let input = InputState::default();
        assert_eq!(input.move_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.fire.key_binding, KeyboardKey::KEY_Z);
        assert_eq!(input.back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_any_direction_released() {
        let mut input = InputState::default();
        assert!(!input.any_direction_released());
        input.move_left.update(false, false, true);
        assert!(input.any_direction_released());
        input.move_left.update(false, false, false);
        input.fire.update(false, false, true);
        assert!(!input.any_direction_released());
    }
}
