//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and runs the enter hook registered in
//! [`crate::resources::systemsstore::SystemsStore`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Signals that a pending game state transition should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], resets
///   [`NextGameState`] to [`Unchanged`] and runs the enter hook of the new
///   state.
/// - A terminal state never leaves for anything but [`GameStates::Quitting`];
///   such requests are dropped.
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    if next_game_state.is_none() || game_state.is_none() {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    }
    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        return;
    };

    let next_state_value = next_game_state.get().clone();
    match next_state_value {
        Pending(new_state) => {
            next_game_state.reset();
            let old_state = game_state.get().clone();
            if old_state == new_state {
                debug!("Already in {:?}", new_state);
                return;
            }
            if old_state.is_terminal() && new_state != GameStates::Quitting {
                debug!("Ignoring {:?} request after {:?}", new_state, old_state);
                return;
            }
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state.clone());
            match systems_store {
                Some(store) => on_state_enter(&new_state, &mut commands, &store),
                None => warn!("SystemsStore missing, no enter hook for {:?}", new_state),
            }
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Run the "enter" system registered for `state`, if any.
fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let hook = match state {
        GameStates::None => return,
        GameStates::Setup => "setup",
        GameStates::Playing => "enter_play",
        GameStates::Victory => "enter_victory",
        GameStates::Defeat => "enter_defeat",
        GameStates::Quitting => "quit_game",
    };
    match systems_store.get(hook) {
        Some(id) => commands.run_system(*id),
        None => warn!("No '{}' system registered for {:?}", hook, state),
    }
}
