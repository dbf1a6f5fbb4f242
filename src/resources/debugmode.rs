//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the collider overlay and
//! frame diagnostics should be drawn. Remove it to disable them.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws debug overlays.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
