//! Default level: playable volume, pads, fuel and moving obstacles.
//!
//! ```text
//!   y
//!  16 ┌───────────────────────────────────────────────┐  ceiling (volume max.y)
//!     │           ◯ orbiting block                     │
//!     │   ║                    ═╪═ spinning bar        │
//!     │   ║ patrol      ◇ fuel                         │
//!     │   ║                          ▪ floating debris │
//!   0 └─[launch]───────────────────────────[landing]──┘  floor / ground
//!      −12                     0                     12   x
//! ```
//!
//! The ground under the pads is untagged, so touching it is a crash.

use crate::config::GameConfig;
use crate::containment::BoundaryVolume;
use crate::motion::{
    Bobbing, Orbit, PathMode, PerlinFloat, Spin, VolumeWander, WaypointMover,
};
use crate::rocket::{spawn_rocket, ContactTag};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Horizontal position of the launch pad.
const LAUNCH_X: f32 = -8.0;
/// Horizontal position of the landing pad.
const LANDING_X: f32 = 8.0;
const PAD_HALF: Vec3 = Vec3::new(1.5, 0.25, 1.5);

pub fn spawn_level(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let half = config.level_half_extents();

    // Playable volume sits on the ground plane.
    let volume = commands
        .spawn((
            BoundaryVolume::new(half),
            Transform::from_xyz(0.0, half.y, 0.0),
        ))
        .id();

    // Ground
    let ground_half = Vec3::new(half.x + 4.0, 0.5, half.z + 2.0);
    commands.spawn((
        RigidBody::Fixed,
        Collider::cuboid(ground_half.x, ground_half.y, ground_half.z),
        Mesh3d(meshes.add(Cuboid::from_size(ground_half * 2.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.25, 0.22, 0.2))),
        Transform::from_xyz(0.0, -ground_half.y, 0.0),
    ));

    // Pads
    let pad_mesh = meshes.add(Cuboid::from_size(PAD_HALF * 2.0));
    for (x, tag, color) in [
        (LAUNCH_X, ContactTag::Friendly, Color::srgb(0.2, 0.4, 0.9)),
        (LANDING_X, ContactTag::Finish, Color::srgb(0.2, 0.85, 0.3)),
    ] {
        commands.spawn((
            tag,
            RigidBody::Fixed,
            Collider::cuboid(PAD_HALF.x, PAD_HALF.y, PAD_HALF.z),
            Mesh3d(pad_mesh.clone()),
            MeshMaterial3d(materials.add(color)),
            Transform::from_xyz(x, PAD_HALF.y, 0.0),
        ));
    }

    // Rocket rests on the launch pad.
    let rocket_half = config.rocket_half_extents();
    let rocket = spawn_rocket(
        &mut commands,
        &config,
        volume,
        Vec3::new(LAUNCH_X, PAD_HALF.y * 2.0 + rocket_half.y + 0.01, 0.0),
    );
    commands.entity(rocket).insert((
        Mesh3d(meshes.add(Cuboid::from_size(rocket_half * 2.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.95))),
    ));

    // Fuel pickup bobbing in the middle of the level.
    let mut rng = rand::thread_rng();
    commands.spawn((
        ContactTag::Fuel,
        Sensor,
        Collider::ball(0.4),
        Bobbing::new(Vec3::Y, 0.6, 0.5).with_random_phase(&mut rng),
        Mesh3d(meshes.add(Sphere::new(0.4))),
        MeshMaterial3d(materials.add(Color::srgb(1.0, 0.8, 0.1))),
        Transform::from_xyz(0.0, 6.0, 0.0),
    ));

    let hazard = materials.add(Color::srgb(0.85, 0.2, 0.2));

    // Patrolling pillar.
    match WaypointMover::new(
        vec![Vec3::new(-3.0, 3.0, 0.0), Vec3::new(-3.0, 11.0, 0.0)],
        2.0,
        PathMode::PingPong,
    ) {
        Ok(mover) => {
            commands.spawn((
                mover.with_wait_time(0.5),
                RigidBody::KinematicPositionBased,
                Collider::cuboid(0.4, 1.5, 0.4),
                Mesh3d(meshes.add(Cuboid::new(0.8, 3.0, 0.8))),
                MeshMaterial3d(hazard.clone()),
                Transform::from_xyz(-3.0, 3.0, 0.0),
            ));
        }
        Err(e) => warn!("Skipping patrol obstacle: {e}"),
    }

    // Spinning bar.
    commands.spawn((
        Spin {
            degrees_per_second: Vec3::new(0.0, 0.0, 45.0),
        },
        RigidBody::KinematicPositionBased,
        Collider::cuboid(2.5, 0.2, 0.3),
        Mesh3d(meshes.add(Cuboid::new(5.0, 0.4, 0.6))),
        MeshMaterial3d(hazard.clone()),
        Transform::from_xyz(4.0, 8.0, 0.0),
    ));

    // Orbiting block.
    commands.spawn((
        Orbit::new(30.0, 2.5),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(0.5, 0.5, 0.5),
        Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
        MeshMaterial3d(hazard.clone()),
        Transform::from_xyz(0.0, 12.0, 0.0),
    ));

    // Debris drifting through the upper half of the volume, kept off the pads.
    // The collider follows the wander target; only the visual floats.
    let debris_mesh = meshes.add(Sphere::new(0.5));
    let float = PerlinFloat::new(
        Vec3::new(0.15, 0.15, 0.0),
        0.35,
        Vec3::new(5.0, 15.0, 5.0),
        0.25,
        &mut rng,
    );
    commands
        .spawn((
            VolumeWander::new(volume, 1.5).with_padding(Vec3::new(2.0, 4.0, half.z)),
            RigidBody::KinematicPositionBased,
            Collider::ball(0.5),
            Transform::from_xyz(8.0, 10.0, 0.0),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                float,
                Mesh3d(debris_mesh),
                MeshMaterial3d(hazard),
                Transform::default(),
            ));
        });

    info!("Level spawned");
}
