//! Timer firing events.
//!
//! Each time a [`Timer`](crate::components::timer::Timer) completes a period,
//! [`update_timers`](crate::systems::timer::update_timers) triggers a
//! [`TimerEvent`]. [`timer_observer`](crate::systems::timer::timer_observer)
//! dispatches it on the timer's action.

use bevy_ecs::prelude::*;

use crate::components::timer::TimerAction;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity carrying the timer.
    pub entity: Entity,
    pub action: TimerAction,
}
