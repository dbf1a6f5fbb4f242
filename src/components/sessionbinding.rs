//! Binds a HUD label to a session counter.
//!
//! Entities with both a [`SessionBinding`] and a
//! [`DynamicText`](super::dynamictext::DynamicText) have their text rewritten
//! by [`crate::systems::hud::update_hud`] whenever the bound counter's label
//! changes.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBinding {
    /// Remaining countdown time.
    Countdown,
    /// Current life count.
    Lives,
}
