//! Session state resource.
//!
//! [`Session`] owns the two counters of a play-through, the
//! [`GameClock`] and the [`LifeTracker`], and the outcome once one of them
//! hits its terminal condition. The counters are only reachable through
//! [`Session::tick_clock`], [`Session::grant_life`] and
//! [`Session::penalize_life`]; each reports the outcome at most once, and the
//! first terminal condition wins. After that every mutation is a no-op.

use bevy_ecs::prelude::Resource;

use crate::resources::gameclock::{ClockStatus, GameClock};
use crate::resources::lifetracker::{LifeStatus, LifeTracker};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The countdown expired with lives left.
    Victory,
    /// The lives ran out before the countdown did.
    Defeat,
}

#[derive(Resource, Debug, Clone)]
pub struct Session {
    clock: GameClock,
    lives: LifeTracker,
    outcome: Option<Outcome>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(50.0, 1)
    }
}

impl Session {
    pub fn new(countdown: f32, lives: u32) -> Self {
        Self {
            clock: GameClock::new(countdown),
            lives: LifeTracker::new(lives),
            outcome: None,
        }
    }

    /// Advance the countdown by one tick. Returns `Some(Victory)` on the
    /// tick that expires it.
    pub fn tick_clock(&mut self) -> Option<Outcome> {
        if self.outcome.is_some() {
            return None;
        }
        match self.clock.tick() {
            ClockStatus::Expired => self.conclude(Outcome::Victory),
            ClockStatus::Running | ClockStatus::Stopped => None,
        }
    }

    pub fn grant_life(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        self.lives.grant();
    }

    /// Take one life. Returns `Some(Defeat)` on the penalty that takes the
    /// last one.
    pub fn penalize_life(&mut self) -> Option<Outcome> {
        if self.outcome.is_some() {
            return None;
        }
        match self.lives.penalize() {
            LifeStatus::Exhausted => self.conclude(Outcome::Defeat),
            LifeStatus::Alive | LifeStatus::Gone => None,
        }
    }

    fn conclude(&mut self, outcome: Outcome) -> Option<Outcome> {
        self.outcome = Some(outcome);
        self.outcome
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn lives(&self) -> &LifeTracker {
        &self.lives
    }
}
