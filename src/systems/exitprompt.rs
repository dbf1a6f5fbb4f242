//! Exit confirmation prompt.
//!
//! `Escape` toggles the prompt, `Enter` quits while it is showing. Time is
//! frozen while the prompt is open: [`freeze_time_while_prompting`] drops
//! the world time scale to zero, which stops movement and timers.
use bevy_ecs::prelude::*;
use log::info;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::exitprompt::ExitPrompt;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::worldtime::WorldTime;

pub fn exit_prompt_observer(
    trigger: On<InputEvent>,
    mut prompt: ResMut<ExitPrompt>,
    mut next_state: ResMut<NextGameState>,
) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    match event.action {
        InputAction::Back => {
            prompt.toggle();
            info!("Exit prompt {}", if prompt.is_open() { "opened" } else { "closed" });
        }
        InputAction::Confirm if prompt.is_open() => {
            prompt.close();
            next_state.set(GameStates::Quitting);
        }
        _ => {}
    }
}

pub fn freeze_time_while_prompting(prompt: Res<ExitPrompt>, mut time: ResMut<WorldTime>) {
    let scale = if prompt.is_open() { 0.0 } else { 1.0 };
    if time.time_scale != scale {
        time.time_scale = scale;
    }
}
