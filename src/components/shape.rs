//! Untextured primitive shapes.
//!
//! Boundaries and projectiles have no image; they are drawn as a solid
//! rectangle or circle centered on the entity's
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Color,
}

impl Shape {
    pub fn rectangle(width: f32, height: f32, color: Color) -> Self {
        Self {
            kind: ShapeKind::Rectangle { width, height },
            color,
        }
    }

    pub fn circle(radius: f32, color: Color) -> Self {
        Self {
            kind: ShapeKind::Circle { radius },
            color,
        }
    }
}
