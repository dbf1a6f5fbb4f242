//! Projectile launcher carried by the player.
//!
//! When the fire action is pressed, [`crate::systems::weapon`] spawns one
//! projectile per entity holding a [`Weapon`], offset from that entity's
//! position, and plays the weapon's sound effect.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Debug)]
pub struct Weapon {
    /// Spawn point relative to the holder's position.
    pub muzzle_offset: Vector2,
    /// Constant velocity given to every projectile.
    pub projectile_velocity: Vector2,
    /// Sound effect id played on every shot.
    pub fx: String,
}

impl Weapon {
    /// A weapon firing straight up (negative y).
    pub fn upward(muzzle_distance: f32, speed: f32, fx: impl Into<String>) -> Self {
        Self {
            muzzle_offset: Vector2 {
                x: 0.0,
                y: -muzzle_distance,
            },
            projectile_velocity: Vector2 { x: 0.0, y: -speed },
            fx: fx.into(),
        }
    }

    pub fn muzzle(&self, holder: Vector2) -> Vector2 {
        holder + self.muzzle_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upward_weapon_fires_toward_negative_y() {
        let w = Weapon::upward(30.0, 350.0, "laser");
        assert_eq!(w.projectile_velocity, Vector2 { x: 0.0, y: -350.0 });
        assert_eq!(
            w.muzzle(Vector2 { x: 12.0, y: 250.0 }),
            Vector2 { x: 12.0, y: 220.0 }
        );
    }
}
