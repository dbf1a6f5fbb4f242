//! Shared 2D camera.
//!
//! The camera keeps the world origin at the center of the window, which is
//! where the field's origin lives.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera centered on the world origin for a window of the given size.
    pub fn centered(screen_width: f32, screen_height: f32) -> Self {
        Self(Camera2D {
            target: Vector2 { x: 0.0, y: 0.0 },
            offset: Vector2 {
                x: screen_width * 0.5,
                y: screen_height * 0.5,
            },
            rotation: 0.0,
            zoom: 1.0,
        })
    }
}
