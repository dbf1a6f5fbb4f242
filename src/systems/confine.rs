//! Field limits.
//!
//! [`confine_to_field`] keeps the player inside the field: it may not leave
//! sideways nor cross the boundary bars at the top and bottom. Runs after
//! movement and before collision detection.
//!
//! [`despawn_escaped`] removes projectiles and enemies that moved past the
//! field edge they fly towards. A long frame can carry them across a
//! boundary bar without ever overlapping it.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::category::Category;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::game::BOUNDARY_THICKNESS;
use crate::resources::playfield::PlayField;

pub fn confine_to_field(
    mut query: Query<(&mut MapPosition, &BoxCollider), With<InputControlled>>,
    field: Res<PlayField>,
) {
    for (mut position, collider) in query.iter_mut() {
        let (min, max) = collider.aabb(position.pos);
        let mut shift_x = 0.0;
        let mut shift_y = 0.0;

        if min.x < field.left() {
            shift_x = field.left() - min.x;
        } else if max.x > field.right() {
            shift_x = field.right() - max.x;
        }

        let top = field.top() + BOUNDARY_THICKNESS;
        let bottom = field.bottom() - BOUNDARY_THICKNESS;
        if min.y < top {
            shift_y = top - min.y;
        } else if max.y > bottom {
            shift_y = bottom - max.y;
        }

        if shift_x != 0.0 || shift_y != 0.0 {
            position.translate(shift_x, shift_y);
        }
    }
}

pub fn despawn_escaped(
    query: Query<(Entity, &MapPosition, &Category)>,
    field: Res<PlayField>,
    mut commands: Commands,
) {
    for (entity, position, category) in query.iter() {
        let escaped = match category {
            Category::Projectile => position.pos.y < field.top(),
            Category::Enemy => position.pos.y > field.bottom(),
            _ => false,
        };
        if escaped {
            debug!("{} left the field at {:?}", category.name(), position.pos);
            commands.entity(entity).try_despawn();
        }
    }
}
