//! Repeating timer component.
//!
//! A [`Timer`] accumulates scaled frame time. Every time the accumulated
//! time reaches `duration`, the [`update_timers`](crate::systems::timer::update_timers)
//! system triggers a [`TimerEvent`](crate::events::timer::TimerEvent) carrying
//! the timer's [`TimerAction`] and subtracts one period, so the timer keeps
//! firing at a fixed rate until its entity is despawned.
//!
//! Despawning the entity is the only way to cancel a timer. Session timers
//! live on plain entities of their own, so clearing the field at the end of a
//! session cancels them.

use bevy_ecs::prelude::Component;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerAction {
    /// Take one unit off the session countdown.
    CountdownTick,
    /// Give the player one extra life.
    GrantLife,
    /// Spawn one enemy at the top of the field.
    SpawnEnemy,
}

#[derive(Component, Debug, Clone)]
pub struct Timer {
    /// Period in seconds.
    pub duration: f32,
    /// Elapsed time since the last firing.
    pub elapsed: f32,
    pub action: TimerAction,
}

impl Timer {
    pub fn new(duration: f32, action: TimerAction) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            action,
        }
    }

    /// Accumulate `dt` and return how many periods completed.
    ///
    /// Subtracts whole periods instead of zeroing, so long frames do not
    /// lose time. A non-positive duration never fires.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.duration <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.duration {
            self.elapsed -= self.duration;
            fired += 1;
        }
        fired
    }
}
