//! Session countdown.
//!
//! The [`GameClock`] counts down once per tick and expires when the
//! remaining time first reaches zero. It never goes negative and it reports
//! expiry exactly once.

/// Result of a single [`GameClock::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    /// Time remains.
    Running,
    /// This tick brought the remaining time to zero.
    Expired,
    /// The clock had already expired; nothing changed.
    Stopped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameClock {
    remaining: f32,
    expired: bool,
}

impl GameClock {
    pub fn new(initial: f32) -> Self {
        let remaining = initial.max(0.0);
        Self {
            remaining,
            expired: false,
        }
    }

    /// Take one unit off the countdown.
    pub fn tick(&mut self) -> ClockStatus {
        if self.expired {
            return ClockStatus::Stopped;
        }
        self.remaining -= 1.0;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.expired = true;
            return ClockStatus::Expired;
        }
        ClockStatus::Running
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Whole seconds left, fractional part truncated.
    pub fn display_seconds(&self) -> i64 {
        self.remaining.trunc() as i64
    }

    pub fn label(&self) -> String {
        format!("Time: {}", self.display_seconds())
    }
}
