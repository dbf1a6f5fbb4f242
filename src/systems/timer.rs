//! Session timer systems.
//!
//! - [`update_timers`] advances every [`Timer`] by the scaled frame delta and
//!   triggers one [`TimerEvent`] per completed period.
//! - [`timer_observer`] dispatches those events on their [`TimerAction`].
//!
//! Only runs while playing; a frozen `WorldTime` (exit prompt open) never
//! fires anything.
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::timer::{Timer, TimerAction};
use crate::events::timer::TimerEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::NextGameState;
use crate::resources::playfield::PlayField;
use crate::resources::session::Session;
use crate::resources::spawnrng::SpawnRng;
use crate::resources::worldtime::WorldTime;
use crate::systems::spawner::spawn_enemy;

pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        let fired = timer.advance(world_time.delta);
        for _ in 0..fired {
            commands.trigger(TimerEvent {
                entity,
                action: timer.action,
            });
        }
    }
}

pub fn timer_observer(
    trigger: On<TimerEvent>,
    mut commands: Commands,
    mut session: ResMut<Session>,
    mut next_state: ResMut<NextGameState>,
    mut rng: ResMut<SpawnRng>,
    field: Res<PlayField>,
    config: Res<GameConfig>,
) {
    match trigger.event().action {
        TimerAction::CountdownTick => {
            if let Some(outcome) = session.tick_clock() {
                info!("Countdown expired: {:?}", outcome);
                next_state.set(outcome.into());
            }
        }
        TimerAction::GrantLife => {
            session.grant_life();
            debug!("Life granted, now {}", session.lives().lives());
        }
        TimerAction::SpawnEnemy => {
            if session.is_over() {
                return;
            }
            let enemy = spawn_enemy(&mut commands, &mut rng.0, &field, config.enemy_speed);
            debug!("Spawned enemy {:?}", enemy);
        }
    }
}
