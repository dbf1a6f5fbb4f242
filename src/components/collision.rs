//! Declarative collision rules.
//!
//! A [`CollisionRule`] is a data-only component spawned on its own entity.
//! When two entities overlap, the collision observer looks up every rule
//! whose category pair matches and applies its [`CollisionEffect`]. Several
//! rules may match the same pair; they all fire, and their effects are
//! independent of the order they run in.
//!
//! # Related
//!
//! - [`crate::systems::collision`] – detection and the observer applying effects
//! - [`crate::components::category::Category`] – the tags rules match on

use bevy_ecs::prelude::*;

use crate::components::category::Category;

/// What happens when a rule matches. "First" and "second" refer to the
/// rule's own category order, not the order the detector saw the entities in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEffect {
    DespawnFirst,
    DespawnBoth,
    /// Take one life from the session.
    PenalizeLife,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct CollisionRule {
    pub first: Category,
    pub second: Category,
    pub effect: CollisionEffect,
}

impl CollisionRule {
    pub fn new(first: Category, second: Category, effect: CollisionEffect) -> Self {
        Self {
            first,
            second,
            effect,
        }
    }

    /// Check if this rule matches the given categories and return entities in order.
    ///
    /// Returns `Some((first, second))` with entities ordered to match the
    /// rule's `first` and `second` categories respectively.
    pub fn match_and_order(
        &self,
        ent_a: Entity,
        ent_b: Entity,
        cat_a: Category,
        cat_b: Category,
    ) -> Option<(Entity, Entity)> {
        if self.first == cat_a && self.second == cat_b {
            Some((ent_a, ent_b))
        } else if self.first == cat_b && self.second == cat_a {
            Some((ent_b, ent_a))
        } else {
            None
        }
    }
}
