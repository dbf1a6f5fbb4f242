//! Firing.
//!
//! Pressing the fire key spawns a projectile at the muzzle of every armed
//! entity and plays the weapon's sound. Nothing fires while the exit prompt
//! is showing or outside of play.
use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::components::boxcollider::BoxCollider;
use crate::components::category::Category;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::shape::Shape;
use crate::components::weapon::Weapon;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::events::input::{InputAction, InputEvent};
use crate::game::{PROJECTILE_SIZE, Z_ACTORS};
use crate::resources::exitprompt::ExitPrompt;
use crate::resources::gamestate::{GameState, GameStates};

pub fn fire_observer(
    trigger: On<InputEvent>,
    mut commands: Commands,
    shooters: Query<(&MapPosition, &Weapon)>,
    state: Res<GameState>,
    prompt: Option<Res<ExitPrompt>>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    if event.action != InputAction::Fire || !event.pressed {
        return;
    }
    if state.get() != &GameStates::Playing || prompt.is_some_and(|p| p.is_open()) {
        return;
    }

    for (position, weapon) in shooters.iter() {
        commands.spawn((
            Category::Projectile,
            MapPosition::from_vec(weapon.muzzle(position.pos)),
            RigidBody::with_velocity(weapon.projectile_velocity),
            BoxCollider::centered(PROJECTILE_SIZE, PROJECTILE_SIZE),
            Shape::circle(PROJECTILE_SIZE * 0.5, Color::YELLOW),
            ZIndex(Z_ACTORS),
        ));
        audio_cmd_writer.write(AudioCmd::PlayFx {
            id: weapon.fx.clone(),
        });
    }
}
