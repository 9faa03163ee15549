//! Soft boundary containment.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`volume`] | `Volume` AABB, padding, clamp helpers |
//! | [`regulator`] | Boundary Regulator: outward damping, inward push, hard clamp |
//! | [`attenuator`] | Thrust Attenuator: thrust scale near faces |
//! | [`systems`] | ECS components and systems wiring the two into Bevy + Rapier |
//!
//! ## Schedule
//!
//! | System | Schedule | Order |
//! |--------|----------|-------|
//! | thrust (see [`crate::rocket`]) | `FixedUpdate` | before physics |
//! | [`boundary_regulation_system`] | `FixedPostUpdate` | after `PhysicsSet::Writeback` |
//! | [`boundary_gizmo_system`] | `Update` | any |

pub mod attenuator;
pub mod regulator;
pub mod systems;
pub mod volume;

pub use attenuator::{attenuate, AttenuatorConfig};
pub use regulator::{regulate, Regulation, RegulatorConfig};
pub use systems::{
    boundary_gizmo_system, boundary_regulation_system, limiter_scale, resolve_volume,
    toggle_boundary_overlay_system, BoundaryClamp, BoundaryOverlay, BoundaryVolume,
    ThrustLimiter,
};
pub use volume::Volume;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

pub struct ContainmentPlugin;

impl Plugin for ContainmentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoundaryOverlay>()
            .add_systems(
                FixedPostUpdate,
                boundary_regulation_system.after(PhysicsSet::Writeback),
            )
            .add_systems(
                Update,
                (toggle_boundary_overlay_system, boundary_gizmo_system).chain(),
            );
    }
}
