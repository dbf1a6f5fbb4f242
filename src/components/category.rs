//! Entity category tag used by collision rules.
//!
//! Every collidable entity carries exactly one [`Category`]. Collision rules
//! are written against categories, so adding a variant forces every
//! exhaustive `match` over them to be revisited.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Player,
    Enemy,
    Projectile,
    /// Static bar along the top edge of the field.
    UpperBoundary,
    /// Static bar along the bottom edge of the field.
    LowerBoundary,
}

impl Category {
    /// Static entities never move and never collide with each other.
    pub fn is_static(&self) -> bool {
        match self {
            Category::UpperBoundary | Category::LowerBoundary => true,
            Category::Player | Category::Enemy | Category::Projectile => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Player => "player",
            Category::Enemy => "enemy",
            Category::Projectile => "projectile",
            Category::UpperBoundary => "upper_boundary",
            Category::LowerBoundary => "lower_boundary",
        }
    }
}
