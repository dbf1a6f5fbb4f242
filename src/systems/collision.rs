//! Collision detection and rule resolution.
//!
//! [`collision_detector`] runs every frame, tests every pair of entities with
//! a [`BoxCollider`] for overlap and triggers a [`CollisionEvent`] per pair.
//! [`collision_observer`] answers those events and applies every
//! [`CollisionRule`] that matches the pair's [`Category`] values.
//!
//! Despawns are idempotent and life penalties count pairs, so the order in
//! which the pairs of one frame are resolved does not change the result.
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::boxcollider::BoxCollider;
use crate::components::category::Category;
use crate::components::collision::{CollisionEffect, CollisionRule};
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;
use crate::resources::gamestate::NextGameState;
use crate::resources::session::Session;

/// Broad-phase free pairwise AABB test. Pairs of static entities are skipped.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider, &Category)>,
    mut commands: Commands,
) {
    let mut pairs: Vec<CollisionEvent> = Vec::new();

    for [
        (entity_a, position_a, collider_a, category_a),
        (entity_b, position_b, collider_b, category_b),
    ] in query.iter_combinations()
    {
        if category_a.is_static() && category_b.is_static() {
            continue;
        }
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            pairs.push(CollisionEvent {
                a: entity_a,
                b: entity_b,
                category_a: *category_a,
                category_b: *category_b,
            });
        }
    }

    for event in pairs {
        commands.trigger(event);
    }
}

/// Apply every collision rule matching the categories of the collided pair.
pub fn collision_observer(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    rules: Query<&CollisionRule>,
    mut session: Option<ResMut<Session>>,
    mut next_state: Option<ResMut<NextGameState>>,
) {
    let CollisionEvent {
        a,
        b,
        category_a,
        category_b,
    } = *trigger.event();

    for rule in rules.iter() {
        let Some((first, _)) = rule.match_and_order(a, b, category_a, category_b) else {
            continue;
        };
        debug!(
            "{} hit {}: {:?}",
            rule.first.name(),
            rule.second.name(),
            rule.effect
        );
        match rule.effect {
            CollisionEffect::DespawnFirst => {
                commands.entity(first).try_despawn();
            }
            CollisionEffect::DespawnBoth => {
                commands.entity(a).try_despawn();
                commands.entity(b).try_despawn();
            }
            CollisionEffect::PenalizeLife => {
                let Some(session) = session.as_deref_mut() else {
                    continue;
                };
                if let Some(outcome) = session.penalize_life() {
                    match next_state.as_deref_mut() {
                        Some(next_state) => next_state.set(outcome.into()),
                        None => warn!("NextGameState missing, {:?} not applied", outcome),
                    }
                }
            }
        }
    }
}
