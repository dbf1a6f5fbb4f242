//! HUD text binding.
//!
//! Entities with a [`SessionBinding`] show one of the session counters in
//! their [`DynamicText`].
use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::sessionbinding::SessionBinding;
use crate::resources::session::Session;

pub fn update_hud(session: Res<Session>, mut query: Query<(&SessionBinding, &mut DynamicText)>) {
    for (binding, mut text) in query.iter_mut() {
        let label = match binding {
            SessionBinding::Countdown => session.clock().label(),
            SessionBinding::Lives => session.lives().label(),
        };
        if text.content != label {
            text.set_content(label);
        }
    }
}
