//! Scripted motion for obstacles and decorations.
//!
//! | Module | Behaviour |
//! |--------|-----------|
//! | [`oscillate`] | `Bobbing` sine bob, `Orbit` circle, `Spin` constant rotation |
//! | [`perlin`] | `PerlinFloat` noise drift and wobble |
//! | [`waypoint`] | `WaypointMover` patrols (loop / once / ping-pong / random) |
//! | [`wander`] | `VolumeWander` random drift inside a `BoundaryVolume` |
//!
//! Moving colliders should be `RigidBody::KinematicPositionBased` so Rapier
//! picks up the new `Transform` each step.  Every system runs in
//! `FixedUpdate`, the same schedule Rapier steps in, so each physics step sees
//! exactly one step of scripted motion.

pub mod oscillate;
pub mod perlin;
pub mod wander;
pub mod waypoint;

pub use oscillate::{
    bobbing_system, euler_degrees, orbit_system, spin_system, Bobbing, Orbit, Spin,
};
pub use perlin::{noise_offset, perlin_float_system, PerlinFloat};
pub use wander::{smooth_damp, volume_wander_system, VolumeWander};
pub use waypoint::{waypoint_system, PathMode, WaypointMover};

use bevy::prelude::*;

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                bobbing_system,
                orbit_system,
                spin_system,
                perlin_float_system,
                waypoint_system,
                volume_wander_system,
            ),
        );
    }
}
