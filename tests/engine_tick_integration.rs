//! Tick-level integration tests for movement, collision rules, timers,
//! input steering, confinement and firing.

use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use vaista::components::boxcollider::BoxCollider;
use vaista::components::category::Category;
use vaista::components::inputcontrolled::InputControlled;
use vaista::components::mapposition::MapPosition;
use vaista::components::rigidbody::RigidBody;
use vaista::components::timer::{Timer, TimerAction};
use vaista::components::weapon::Weapon;
use vaista::events::audio::AudioCmd;
use vaista::events::input::{InputAction, InputEvent};
use vaista::events::timer::TimerEvent;
use vaista::game::{self, BOUNDARY_THICKNESS, LASER_FX, MUZZLE_OFFSET};
use vaista::resources::audio::init_audio_messages;
use vaista::resources::exitprompt::ExitPrompt;
use vaista::resources::gameconfig::GameConfig;
use vaista::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use vaista::resources::input::InputState;
use vaista::resources::playfield::PlayField;
use vaista::resources::session::{Outcome, Session};
use vaista::resources::spawnrng::SpawnRng;
use vaista::resources::worldtime::WorldTime;
use vaista::systems::collision::{collision_detector, collision_observer};
use vaista::systems::confine::{confine_to_field, despawn_escaped};
use vaista::systems::exitprompt::freeze_time_while_prompting;
use vaista::systems::inputcontroller::input_controller;
use vaista::systems::movement::movement;
use vaista::systems::time::update_world_time;
use vaista::systems::timer::{timer_observer, update_timers};
use vaista::systems::weapon::fire_observer;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(PlayField::new(1024.0, 768.0));
    world.insert_resource(Session::new(50.0, 1));
    world.insert_resource(NextGameState::new());
    world.insert_resource(GameConfig::new());
    world.insert_resource(SpawnRng::from_seed(Some(11)));
    let mut state = GameState::new();
    state.set(GameStates::Playing);
    world.insert_resource(state);
    init_audio_messages(&mut world);
    world
}

fn spawn_rules(world: &mut World) {
    for rule in game::collision_rules() {
        world.spawn(rule);
    }
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_collision_detector(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision_detector);
    schedule.run(world);
}

fn tick_timers(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(update_timers);
    schedule.run(world);
}

fn tick_freeze(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(freeze_time_while_prompting);
    schedule.run(world);
}

fn tick_input_controller(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(input_controller);
    schedule.run(world);
}

fn tick_confine(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(confine_to_field);
    schedule.run(world);
}

fn tick_despawn_escaped(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(despawn_escaped);
    schedule.run(world);
}

fn exists(world: &World, entity: Entity) -> bool {
    world.get_entity(entity).is_ok()
}

fn count_category(world: &mut World, category: Category) -> usize {
    world
        .query::<&Category>()
        .iter(world)
        .filter(|c| **c == category)
        .count()
}

fn drain_audio(world: &mut World) -> Vec<AudioCmd> {
    world
        .resource_mut::<Messages<AudioCmd>>()
        .drain()
        .collect()
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world(0.0);
    let entity = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            RigidBody::with_velocity(Vector2 { x: 10.0, y: -4.0 }),
        ))
        .id();

    update_world_time(&mut world, 0.5);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 5.0));
    assert!(approx_eq(pos.pos.y, -2.0));
}

#[test]
fn time_scale_zero_freezes_movement() {
    let mut world = make_world(0.0);
    world.resource_mut::<WorldTime>().time_scale = 0.0;
    let entity = world
        .spawn((
            MapPosition::new(3.0, 3.0),
            RigidBody::with_velocity(Vector2 { x: 100.0, y: 100.0 }),
        ))
        .id();

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 3.0));
    assert!(approx_eq(pos.pos.y, 3.0));
}

// =============================================================================
// Collision rules
// =============================================================================

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Category::Player,
            MapPosition::new(x, y),
            BoxCollider::centered(40.0, 40.0),
            RigidBody::new(),
        ))
        .id()
}

fn spawn_enemy_at(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Category::Enemy,
            MapPosition::new(x, y),
            BoxCollider::centered(50.0, 50.0),
            RigidBody::with_velocity(Vector2 { x: 0.0, y: 150.0 }),
        ))
        .id()
}

fn spawn_boundary(world: &mut World, category: Category, y: f32) -> Entity {
    world
        .spawn((
            category,
            MapPosition::new(0.0, y),
            BoxCollider::centered(1024.0, BOUNDARY_THICKNESS),
        ))
        .id()
}

#[test]
fn last_life_lost_to_enemy_requests_defeat() {
    let mut world = make_world(0.0);
    spawn_rules(&mut world);
    world.add_observer(collision_observer);
    world.flush();

    let player = spawn_player(&mut world, 0.0, 250.0);
    let enemy = spawn_enemy_at(&mut world, 10.0, 240.0);

    tick_collision_detector(&mut world);

    assert!(exists(&world, player));
    assert!(!exists(&world, enemy));
    assert_eq!(world.resource::<Session>().outcome(), Some(Outcome::Defeat));
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::Defeat)
    );
}

#[test]
fn enemy_hit_with_lives_to_spare_only_costs_one() {
    let mut world = make_world(0.0);
    world.insert_resource(Session::new(50.0, 3));
    spawn_rules(&mut world);
    world.add_observer(collision_observer);
    world.flush();

    spawn_player(&mut world, 0.0, 250.0);
    spawn_enemy_at(&mut world, 0.0, 250.0);

    tick_collision_detector(&mut world);

    let session = world.resource::<Session>();
    assert_eq!(session.lives().lives(), 2);
    assert!(!session.is_over());
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Unchanged
    );
    assert_eq!(count_category(&mut world, Category::Enemy), 0);
}

#[test]
fn two_enemies_hitting_at_once_cost_two_lives() {
    let mut world = make_world(0.0);
    world.insert_resource(Session::new(50.0, 5));
    spawn_rules(&mut world);
    world.add_observer(collision_observer);
    world.flush();

    spawn_player(&mut world, 0.0, 250.0);
    spawn_enemy_at(&mut world, -30.0, 250.0);
    spawn_enemy_at(&mut world, 30.0, 250.0);

    tick_collision_detector(&mut world);

    assert_eq!(world.resource::<Session>().lives().lives(), 3);
    assert_eq!(count_category(&mut world, Category::Enemy), 0);
}

#[test]
fn projectile_and_enemy_destroy_each_other() {
    let mut world = make_world(0.0);
    spawn_rules(&mut world);
    world.add_observer(collision_observer);
    world.flush();

    let enemy = spawn_enemy_at(&mut world, 0.0, 0.0);
    let projectile = world
        .spawn((
            Category::Projectile,
            MapPosition::new(5.0, 20.0),
            BoxCollider::centered(10.0, 10.0),
        ))
        .id();

    tick_collision_detector(&mut world);

    assert!(!exists(&world, enemy));
    assert!(!exists(&world, projectile));
    assert_eq!(world.resource::<Session>().lives().lives(), 1);
}

#[test]
fn enemy_reaching_lower_boundary_is_removed() {
    let mut world = make_world(0.0);
    spawn_rules(&mut world);
    world.add_observer(collision_observer);
    world.flush();

    let lower = spawn_boundary(&mut world, Category::LowerBoundary, 374.0);
    let enemy = spawn_enemy_at(&mut world, 100.0, 350.0);

    tick_collision_detector(&mut world);

    assert!(!exists(&world, enemy));
    assert!(exists(&world, lower));
}

#[test]
fn enemies_overlapping_each_other_are_left_alone() {
    let mut world = make_world(0.0);
    spawn_rules(&mut world);
    world.add_observer(collision_observer);
    world.flush();

    spawn_enemy_at(&mut world, 0.0, 0.0);
    spawn_enemy_at(&mut world, 10.0, 10.0);

    tick_collision_detector(&mut world);

    assert_eq!(count_category(&mut world, Category::Enemy), 2);
}

#[test]
fn static_pairs_are_never_reported() {
    let mut world = make_world(0.0);
    spawn_boundary(&mut world, Category::UpperBoundary, 0.0);
    spawn_boundary(&mut world, Category::LowerBoundary, 5.0);

    let hits = Arc::new(Mutex::new(0));
    let hits_clone = hits.clone();
    world.add_observer(
        move |_trigger: On<vaista::events::collision::CollisionEvent>| {
            *hits_clone.lock().unwrap() += 1;
        },
    );
    world.flush();

    tick_collision_detector(&mut world);

    assert_eq!(*hits.lock().unwrap(), 0);
}

#[test]
fn projectile_removed_on_upper_boundary_contact_and_not_before() {
    let mut world = make_world(0.0);
    spawn_rules(&mut world);
    world.add_observer(collision_observer);
    world.flush();

    spawn_boundary(&mut world, Category::UpperBoundary, -374.0);
    let projectile = world
        .spawn((
            Category::Projectile,
            MapPosition::new(0.0, 220.0),
            BoxCollider::centered(10.0, 10.0),
            RigidBody::with_velocity(Vector2 { x: 0.0, y: -350.0 }),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems((movement, collision_detector).chain());

    let boundary_bottom = -374.0 + BOUNDARY_THICKNESS * 0.5;
    let mut last_y = 220.0;
    let mut removed = false;
    for _ in 0..200 {
        update_world_time(&mut world, 0.02);
        schedule.run(&mut world);
        match world.get::<MapPosition>(projectile) {
            Some(pos) => {
                // still alive, so its box must not reach the bar yet
                assert!(pos.pos.y - 5.0 >= boundary_bottom);
                last_y = pos.pos.y;
            }
            None => {
                // removed on the step that made it touch the bar
                assert!(last_y - 7.0 - 5.0 < boundary_bottom);
                removed = true;
                break;
            }
        }
    }
    assert!(removed);
}

fn spawn_projectile_at(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Category::Projectile,
            MapPosition::new(x, y),
            BoxCollider::centered(10.0, 10.0),
            RigidBody::with_velocity(Vector2 { x: 0.0, y: -350.0 }),
        ))
        .id()
}

#[test]
fn enemy_hitting_projectile_and_player_at_once_still_costs_a_life() {
    // every spawn order, so every order the detector can report the pairs in
    for order in 0..3 {
        let mut world = make_world(0.0);
        world.insert_resource(Session::new(50.0, 3));
        spawn_rules(&mut world);
        world.add_observer(collision_observer);
        world.flush();

        let (player, enemy, projectile) = match order {
            0 => {
                let p = spawn_player(&mut world, 0.0, 250.0);
                let e = spawn_enemy_at(&mut world, 0.0, 250.0);
                (p, e, spawn_projectile_at(&mut world, 0.0, 228.0))
            }
            1 => {
                let pr = spawn_projectile_at(&mut world, 0.0, 228.0);
                let e = spawn_enemy_at(&mut world, 0.0, 250.0);
                (spawn_player(&mut world, 0.0, 250.0), e, pr)
            }
            _ => {
                let e = spawn_enemy_at(&mut world, 0.0, 250.0);
                let pr = spawn_projectile_at(&mut world, 0.0, 228.0);
                (spawn_player(&mut world, 0.0, 250.0), e, pr)
            }
        };

        tick_collision_detector(&mut world);

        assert_eq!(world.resource::<Session>().lives().lives(), 2, "order {}", order);
        assert!(exists(&world, player));
        assert!(!exists(&world, enemy));
        assert!(!exists(&world, projectile));
    }
}

#[test]
fn projectile_crossing_the_bar_in_one_long_frame_is_removed() {
    let mut world = make_world(0.0);
    spawn_rules(&mut world);
    world.add_observer(collision_observer);
    world.flush();

    spawn_boundary(&mut world, Category::UpperBoundary, -374.0);
    let projectile = spawn_projectile_at(&mut world, 0.0, -355.0);

    let mut schedule = Schedule::default();
    schedule.add_systems((movement, collision_detector, despawn_escaped).chain());

    // 35 px in one step: from just below the bar to fully above it
    update_world_time(&mut world, 0.1);
    schedule.run(&mut world);

    assert!(!exists(&world, projectile));
}

#[test]
fn enemy_crossing_the_bar_in_one_long_frame_is_removed() {
    let mut world = make_world(0.0);
    spawn_rules(&mut world);
    world.add_observer(collision_observer);
    world.flush();

    spawn_boundary(&mut world, Category::LowerBoundary, 374.0);
    let enemy = spawn_enemy_at(&mut world, 0.0, 330.0);

    let mut schedule = Schedule::default();
    schedule.add_systems((movement, collision_detector, despawn_escaped).chain());

    update_world_time(&mut world, 0.6);
    schedule.run(&mut world);

    assert!(!exists(&world, enemy));
}

#[test]
fn only_escaped_projectiles_and_enemies_are_culled() {
    let mut world = make_world(0.0);

    let inside_enemy = spawn_enemy_at(&mut world, 0.0, 380.0);
    let inside_projectile = spawn_projectile_at(&mut world, 0.0, -380.0);
    let low_projectile = spawn_projectile_at(&mut world, 0.0, 400.0);
    let high_enemy = spawn_enemy_at(&mut world, 0.0, -400.0);
    let player = spawn_player(&mut world, 0.0, 400.0);
    let escaped_enemy = spawn_enemy_at(&mut world, 0.0, 390.0);
    let escaped_projectile = spawn_projectile_at(&mut world, 0.0, -390.0);

    tick_despawn_escaped(&mut world);

    assert!(exists(&world, inside_enemy));
    assert!(exists(&world, inside_projectile));
    // each category only leaves through the edge it flies towards
    assert!(exists(&world, low_projectile));
    assert!(exists(&world, high_enemy));
    assert!(exists(&world, player));
    assert!(!exists(&world, escaped_enemy));
    assert!(!exists(&world, escaped_projectile));
}

// =============================================================================
// Timers
// =============================================================================

#[test]
fn timer_fires_once_per_period() {
    let mut world = make_world(1.0);
    let entity = world
        .spawn(Timer::new(1.0, TimerAction::CountdownTick))
        .id();

    let fired: Arc<Mutex<Vec<TimerEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let fired_clone = fired.clone();
    world.add_observer(move |trigger: On<TimerEvent>| {
        fired_clone.lock().unwrap().push(*trigger.event());
    });
    world.flush();

    for _ in 0..3 {
        tick_timers(&mut world);
    }

    let fired = fired.lock().unwrap();
    assert_eq!(fired.len(), 3);
    assert!(fired.iter().all(|e| e.entity == entity));
    assert!(fired.iter().all(|e| e.action == TimerAction::CountdownTick));
}

#[test]
fn countdown_expires_on_the_fiftieth_tick() {
    let mut world = make_world(1.0);
    world.add_observer(timer_observer);
    world.spawn(Timer::new(1.0, TimerAction::CountdownTick));
    world.flush();

    for _ in 0..49 {
        tick_timers(&mut world);
    }
    assert!(!world.resource::<Session>().is_over());
    assert_eq!(world.resource::<Session>().clock().remaining(), 1.0);

    tick_timers(&mut world);
    assert_eq!(world.resource::<Session>().outcome(), Some(Outcome::Victory));
    assert_eq!(world.resource::<Session>().clock().remaining(), 0.0);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::Victory)
    );
}

#[test]
fn grant_timer_adds_lives_every_ten_seconds_despite_penalties() {
    let mut world = make_world(1.0);
    world.insert_resource(Session::new(100.0, 1));
    world.add_observer(timer_observer);
    world.spawn(Timer::new(10.0, TimerAction::GrantLife));
    world.flush();

    for _ in 0..10 {
        tick_timers(&mut world);
    }
    assert_eq!(world.resource::<Session>().lives().lives(), 2);

    world.resource_mut::<Session>().penalize_life();
    assert_eq!(world.resource::<Session>().lives().lives(), 1);

    for _ in 0..10 {
        tick_timers(&mut world);
    }
    assert_eq!(world.resource::<Session>().lives().lives(), 2);

    for _ in 0..10 {
        tick_timers(&mut world);
    }
    assert_eq!(world.resource::<Session>().lives().lives(), 3);
}

#[test]
fn spawn_timer_creates_enemies_in_the_middle_thirds() {
    let mut world = make_world(1.0);
    world.add_observer(timer_observer);
    world.spawn(Timer::new(1.0, TimerAction::SpawnEnemy));
    world.flush();

    for _ in 0..20 {
        tick_timers(&mut world);
    }

    let enemies: Vec<(MapPosition, RigidBody)> = world
        .query::<(&Category, &MapPosition, &RigidBody)>()
        .iter(&world)
        .filter(|(c, _, _)| **c == Category::Enemy)
        .map(|(_, p, r)| (*p, *r))
        .collect();
    assert_eq!(enemies.len(), 20);
    for (pos, body) in enemies {
        assert!(pos.pos.x >= -1024.0 / 3.0 && pos.pos.x < 1024.0 / 3.0);
        assert_eq!(pos.pos.y, -284.0);
        assert_eq!(body.velocity, Vector2 { x: 0.0, y: 150.0 });
    }
}

#[test]
fn open_exit_prompt_freezes_timers() {
    let mut world = make_world(0.0);
    world.insert_resource(ExitPrompt::default());
    world.add_observer(timer_observer);
    world.spawn(Timer::new(1.0, TimerAction::CountdownTick));
    world.flush();

    world.resource_mut::<ExitPrompt>().toggle();
    tick_freeze(&mut world);

    for _ in 0..5 {
        update_world_time(&mut world, 1.0);
        tick_timers(&mut world);
    }
    assert_eq!(world.resource::<Session>().clock().remaining(), 50.0);

    world.resource_mut::<ExitPrompt>().toggle();
    tick_freeze(&mut world);
    update_world_time(&mut world, 1.0);
    tick_timers(&mut world);
    assert_eq!(world.resource::<Session>().clock().remaining(), 49.0);
}

// =============================================================================
// Input, confinement and firing
// =============================================================================

#[test]
fn input_controller_sets_and_clears_velocity() {
    let mut world = make_world(0.0);
    world.insert_resource(InputState::default());
    let player = world
        .spawn((InputControlled::with_speed(275.0), RigidBody::new()))
        .id();

    world
        .resource_mut::<InputState>()
        .move_right
        .update(true, true, false);
    tick_input_controller(&mut world);
    assert_eq!(
        world.get::<RigidBody>(player).unwrap().velocity,
        Vector2 { x: 275.0, y: 0.0 }
    );

    {
        let mut input = world.resource_mut::<InputState>();
        input.move_up.update(true, true, false);
        input.move_right.update(false, false, true);
    }
    tick_input_controller(&mut world);
    assert_eq!(
        world.get::<RigidBody>(player).unwrap().velocity,
        Vector2 { x: 0.0, y: 0.0 }
    );

    world
        .resource_mut::<InputState>()
        .move_right
        .update(false, false, false);
    tick_input_controller(&mut world);
    assert_eq!(
        world.get::<RigidBody>(player).unwrap().velocity,
        Vector2 { x: 0.0, y: -275.0 }
    );
}

#[test]
fn player_is_kept_between_the_boundaries() {
    let mut world = make_world(0.0);
    let player = world
        .spawn((
            InputControlled::with_speed(275.0),
            MapPosition::new(600.0, 400.0),
            BoxCollider::centered(40.0, 40.0),
        ))
        .id();

    tick_confine(&mut world);
    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.x, 492.0));
    assert!(approx_eq(pos.y, 344.0));

    world.get_mut::<MapPosition>(player).unwrap().pos = Vector2 { x: -700.0, y: -500.0 };
    tick_confine(&mut world);
    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.x, -492.0));
    assert!(approx_eq(pos.y, -344.0));
}

fn fire(world: &mut World) {
    world.trigger(InputEvent {
        action: InputAction::Fire,
        pressed: true,
    });
    world.flush();
}

#[test]
fn firing_spawns_projectile_above_the_player() {
    let mut world = make_world(0.0);
    world.insert_resource(ExitPrompt::default());
    world.add_observer(fire_observer);
    world.flush();
    world.spawn((
        MapPosition::new(0.0, 250.0),
        Weapon::upward(MUZZLE_OFFSET, 350.0, LASER_FX),
    ));

    fire(&mut world);

    let projectiles: Vec<(MapPosition, RigidBody)> = world
        .query::<(&Category, &MapPosition, &RigidBody)>()
        .iter(&world)
        .filter(|(c, _, _)| **c == Category::Projectile)
        .map(|(_, p, r)| (*p, *r))
        .collect();
    assert_eq!(projectiles.len(), 1);
    assert_eq!(projectiles[0].0.pos, Vector2 { x: 0.0, y: 220.0 });
    assert_eq!(projectiles[0].1.velocity, Vector2 { x: 0.0, y: -350.0 });

    let audio = drain_audio(&mut world);
    assert_eq!(
        audio,
        vec![AudioCmd::PlayFx {
            id: "laser_gun".to_string()
        }]
    );
}

#[test]
fn releasing_fire_or_prompting_does_not_shoot() {
    let mut world = make_world(0.0);
    world.insert_resource(ExitPrompt::default());
    world.add_observer(fire_observer);
    world.flush();
    world.spawn((
        MapPosition::new(0.0, 250.0),
        Weapon::upward(MUZZLE_OFFSET, 350.0, LASER_FX),
    ));

    world.trigger(InputEvent {
        action: InputAction::Fire,
        pressed: false,
    });
    world.flush();
    assert_eq!(count_category(&mut world, Category::Projectile), 0);

    world.resource_mut::<ExitPrompt>().toggle();
    fire(&mut world);
    assert_eq!(count_category(&mut world, Category::Projectile), 0);

    world.resource_mut::<ExitPrompt>().close();
    world
        .resource_mut::<GameState>()
        .set(GameStates::Victory);
    fire(&mut world);
    assert_eq!(count_category(&mut world, Category::Projectile), 0);
    assert!(drain_audio(&mut world).is_empty());
}
