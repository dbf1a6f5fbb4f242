//! Enemy spawning.
//!
//! Enemies enter a little below the top edge of the field, at a random x
//! within the middle two thirds of the field width, and fall straight down
//! at a constant speed. The repeating `SpawnEnemy` timer calls
//! [`spawn_enemy`] once per interval; there is no cap on live enemies.
use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::{Color, Vector2};

use crate::components::boxcollider::BoxCollider;
use crate::components::category::Category;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::game::{ENEMY_SIZE, ENEMY_SPAWN_DEPTH, Z_ACTORS};
use crate::resources::playfield::PlayField;

/// The three enemy looks. They only differ in texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyVariant {
    Saucer,
    Drone,
    Hunter,
}

impl EnemyVariant {
    pub const ALL: [EnemyVariant; 3] = [
        EnemyVariant::Saucer,
        EnemyVariant::Drone,
        EnemyVariant::Hunter,
    ];

    pub fn tex_key(&self) -> &'static str {
        match self {
            EnemyVariant::Saucer => "enemy1",
            EnemyVariant::Drone => "enemy2",
            EnemyVariant::Hunter => "enemy3",
        }
    }

    /// Uniform pick among [`EnemyVariant::ALL`].
    pub fn pick(rng: &mut Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }
}

/// Spawn position: x uniform in `[-width/3, width/3)`, y fixed below the top.
pub fn enemy_spawn_point(rng: &mut Rng, field: &PlayField) -> Vector2 {
    let third = field.width / 3.0;
    Vector2 {
        x: rng.f32() * (2.0 * third) - third,
        y: field.top() + ENEMY_SPAWN_DEPTH,
    }
}

/// Spawn one enemy moving down at `speed`.
pub fn spawn_enemy(
    commands: &mut Commands,
    rng: &mut Rng,
    field: &PlayField,
    speed: f32,
) -> Entity {
    let variant = EnemyVariant::pick(rng);
    let pos = enemy_spawn_point(rng, field);
    commands
        .spawn((
            Category::Enemy,
            MapPosition::from_vec(pos),
            RigidBody::with_velocity(Vector2 { x: 0.0, y: speed }),
            BoxCollider::centered(ENEMY_SIZE, ENEMY_SIZE),
            Sprite::centered(variant.tex_key(), ENEMY_SIZE, ENEMY_SIZE, Color::RED),
            ZIndex(Z_ACTORS),
        ))
        .id()
}
