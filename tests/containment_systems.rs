//! Headless tests for the containment and flight systems.
//!
//! These tests use [`MinimalPlugins`]: no window, no rendering and no Rapier
//! pipeline.  The systems under test only read and write `Transform`,
//! `Velocity` and `ExternalForce`, so each `app.update()` is one regulator or
//! thrust pass with the default fixed step of 1/64 s.
//!
//! Covered scenarios:
//! 1. A body outside the volume is snapped onto the face and stops on that axis.
//! 2. A body with no volume assigned is left untouched.
//! 3. The inward push is applied as `push × step` after damping.
//! 4. Thrust at the ceiling is fully attenuated.
//! 5. Without a limiter the full thrust is applied.
//! 6. A steering intent sets the rocket's spin about +Z.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{ExternalForce, Velocity};
use rocket_boost::config::GameConfig;
use rocket_boost::containment::{
    boundary_regulation_system, AttenuatorConfig, BoundaryClamp, BoundaryVolume,
    RegulatorConfig, ThrustLimiter,
};
use rocket_boost::rocket::{apply_rocket_intent_system, Rocket, RocketIntent, ThrustOutput};

// ── Helpers ───────────────────────────────────────────────────────────────────

const STEP: f32 = 1.0 / 64.0;

fn containment_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_systems(Update, boundary_regulation_system);
    app
}

fn flight_app(intent: RocketIntent) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.insert_resource(intent);
    app.add_systems(Update, apply_rocket_intent_system);
    app
}

/// A 10×10×10 volume centred on the origin.
///
/// `TransformPlugin` is not part of `MinimalPlugins`, so the
/// `GlobalTransform` is spawned explicitly.
fn spawn_volume(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            BoundaryVolume::new(Vec3::splat(5.0)),
            Transform::IDENTITY,
            GlobalTransform::IDENTITY,
        ))
        .id()
}

fn spawn_rocket_at(app: &mut App, at: Vec3, limiter: Option<ThrustLimiter>) -> Entity {
    let mut rocket = app.world_mut().spawn((
        Rocket,
        Transform::from_translation(at),
        ExternalForce::default(),
        Velocity::zero(),
    ));
    if let Some(limiter) = limiter {
        rocket.insert(limiter);
    }
    rocket.id()
}

// ── Regulator ─────────────────────────────────────────────────────────────────

#[test]
fn body_outside_volume_is_clamped_onto_face() {
    let mut app = containment_app();
    let volume = spawn_volume(&mut app);
    let body = app
        .world_mut()
        .spawn((
            BoundaryClamp::new(volume, Vec3::ZERO, RegulatorConfig::default()),
            Transform::from_xyz(7.0, 0.0, 0.0),
            Velocity::linear(Vec3::new(3.0, 1.0, 0.0)),
        ))
        .id();

    app.update();

    let transform = app.world().get::<Transform>(body).unwrap();
    let velocity = app.world().get::<Velocity>(body).unwrap();
    assert_eq!(transform.translation, Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(velocity.linvel.x, 0.0, "outward speed must be cancelled");
    assert_eq!(velocity.linvel.y, 1.0, "axes away from any face are untouched");
}

#[test]
fn body_in_soft_zone_loses_outward_speed_but_keeps_position() {
    let mut app = containment_app();
    let volume = spawn_volume(&mut app);
    let body = app
        .world_mut()
        .spawn((
            BoundaryClamp::new(volume, Vec3::ZERO, RegulatorConfig::default()),
            Transform::from_xyz(4.5, 0.0, 0.0),
            Velocity::linear(Vec3::new(3.0, 0.0, 0.0)),
        ))
        .id();

    app.update();

    let transform = app.world().get::<Transform>(body).unwrap();
    let velocity = app.world().get::<Velocity>(body).unwrap();
    assert_eq!(transform.translation, Vec3::new(4.5, 0.0, 0.0));
    assert!(velocity.linvel.x < 3.0, "got {:?}", velocity.linvel);
    assert!(velocity.linvel.x >= 0.0, "damping must not reverse the body");
}

#[test]
fn inward_push_is_added_on_top_of_damping() {
    let mut app = containment_app();
    let volume = spawn_volume(&mut app);
    let config = RegulatorConfig {
        soft_zone_distance: 1.5,
        outward_velocity_damping: 10.0,
        inward_push_acceleration: 8.0,
    };
    let body = app
        .world_mut()
        .spawn((
            BoundaryClamp::new(volume, Vec3::ZERO, config),
            Transform::from_xyz(-4.0, 0.0, 0.0),
            Velocity::linear(Vec3::new(-2.0, 0.0, 0.0)),
        ))
        .id();

    app.update();

    // One unit from the min face in a 1.5 zone: t_min = 1/3.
    let t = 1.0 / 3.0;
    let damped = -2.0 + 10.0 * t * STEP;
    let expected = damped + 8.0 * t * STEP;
    let velocity = app.world().get::<Velocity>(body).unwrap();
    assert!(
        (velocity.linvel.x - expected).abs() < 1e-5,
        "expected {expected}, got {}",
        velocity.linvel.x
    );
    assert_eq!(velocity.linvel.y, 0.0);
    assert_eq!(velocity.linvel.z, 0.0);
}

#[test]
fn body_without_volume_is_left_alone() {
    let mut app = containment_app();
    let body = app
        .world_mut()
        .spawn((
            BoundaryClamp {
                volume: None,
                padding: Vec3::ZERO,
                config: RegulatorConfig::default(),
            },
            Transform::from_xyz(100.0, -40.0, 3.0),
            Velocity::linear(Vec3::new(9.0, -9.0, 0.0)),
        ))
        .id();

    app.update();

    let transform = app.world().get::<Transform>(body).unwrap();
    let velocity = app.world().get::<Velocity>(body).unwrap();
    assert_eq!(transform.translation, Vec3::new(100.0, -40.0, 3.0));
    assert_eq!(velocity.linvel, Vec3::new(9.0, -9.0, 0.0));
}

#[test]
fn despawned_volume_disables_the_clamp() {
    let mut app = containment_app();
    let volume = spawn_volume(&mut app);
    let body = app
        .world_mut()
        .spawn((
            BoundaryClamp::new(volume, Vec3::ZERO, RegulatorConfig::default()),
            Transform::from_xyz(7.0, 0.0, 0.0),
            Velocity::linear(Vec3::X),
        ))
        .id();
    app.world_mut().despawn(volume);

    app.update();

    let transform = app.world().get::<Transform>(body).unwrap();
    assert_eq!(transform.translation.x, 7.0);
}

// ── Attenuated thrust ─────────────────────────────────────────────────────────

#[test]
fn thrust_at_ceiling_is_zero() {
    let mut app = flight_app(RocketIntent {
        thrust: 1.0,
        rotation: 0.0,
    });
    let volume = spawn_volume(&mut app);
    let limiter = ThrustLimiter::new(volume, Vec3::ZERO, AttenuatorConfig::default());
    let rocket = spawn_rocket_at(&mut app, Vec3::new(0.0, 5.0, 0.0), Some(limiter));

    app.update();

    let force = app.world().get::<ExternalForce>(rocket).unwrap();
    let output = app.world().get::<ThrustOutput>(rocket).unwrap();
    assert_eq!(output.scale, 0.0);
    assert_eq!(force.force, Vec3::ZERO);
}

#[test]
fn thrust_without_limiter_is_full_strength() {
    let mut app = flight_app(RocketIntent {
        thrust: 1.0,
        rotation: 0.0,
    });
    let rocket = spawn_rocket_at(&mut app, Vec3::ZERO, None);

    app.update();

    let expected = Vec3::Y * GameConfig::default().thrust_strength * STEP;
    let force = app.world().get::<ExternalForce>(rocket).unwrap();
    let output = app.world().get::<ThrustOutput>(rocket).unwrap();
    assert_eq!(output.scale, 1.0);
    assert!(
        (force.force - expected).length() < 1e-3,
        "expected {expected:?}, got {:?}",
        force.force
    );
}

#[test]
fn steering_sets_spin_about_z() {
    let mut app = flight_app(RocketIntent {
        thrust: 0.0,
        rotation: 1.0,
    });
    let rocket = spawn_rocket_at(&mut app, Vec3::ZERO, None);

    app.update();

    let velocity = app.world().get::<Velocity>(rocket).unwrap();
    let expected = GameConfig::default().rotation_strength.to_radians();
    assert!((velocity.angvel.z - expected).abs() < 1e-5);
    let force = app.world().get::<ExternalForce>(rocket).unwrap();
    assert_eq!(force.force, Vec3::ZERO, "no thrust without throttle");
}
