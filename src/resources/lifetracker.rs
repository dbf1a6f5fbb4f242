//! Player life count.

/// Result of a [`LifeTracker::penalize`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStatus {
    /// Lives remain.
    Alive,
    /// This penalty took the last life.
    Exhausted,
    /// Lives were already exhausted; nothing changed.
    Gone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeTracker {
    lives: u32,
    exhausted: bool,
}

impl LifeTracker {
    pub fn new(initial: u32) -> Self {
        Self {
            lives: initial,
            exhausted: false,
        }
    }

    /// One extra life. No effect once lives are exhausted.
    pub fn grant(&mut self) {
        if self.exhausted {
            return;
        }
        self.lives = self.lives.saturating_add(1);
    }

    /// Take one life.
    pub fn penalize(&mut self) -> LifeStatus {
        if self.exhausted {
            return LifeStatus::Gone;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.exhausted = true;
            return LifeStatus::Exhausted;
        }
        LifeStatus::Alive
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn label(&self) -> String {
        format!("Lives: {}", self.lives)
    }
}
