//! Exit confirmation prompt state.
//!
//! The back key opens the prompt and a second press closes it; the confirm
//! key quits while it is open. Simulation time is frozen while the prompt is
//! showing. See [`crate::systems::exitprompt`].

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitPrompt {
    open: bool,
}

impl ExitPrompt {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
