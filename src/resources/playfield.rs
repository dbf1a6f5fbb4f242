//! Play field dimensions.
//!
//! The field is the whole window. World coordinates put the origin at its
//! center with y growing downward, so the top edge is `-height / 2`.

use bevy_ecs::prelude::Resource;

/// Field size in world units (1 unit = 1 pixel).
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn left(&self) -> f32 {
        -self.width * 0.5
    }

    pub fn right(&self) -> f32 {
        self.width * 0.5
    }

    pub fn top(&self) -> f32 {
        -self.height * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.height * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_centered_on_origin() {
        let f = PlayField::new(1024.0, 768.0);
        assert_eq!(f.left(), -512.0);
        assert_eq!(f.right(), 512.0);
        assert_eq!(f.top(), -384.0);
        assert_eq!(f.bottom(), 384.0);
    }
}
