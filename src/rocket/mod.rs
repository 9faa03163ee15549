//! Rocket module: ship entity, flight controls and contact outcomes.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | Components (`Rocket`, `LaunchPose`, `ThrustOutput`, `ContactTag`), `RocketIntent`, `FlightEvent` |
//! | [`control`] | Keyboard → intent → thrust/steering, thrust scaled by the attenuator |
//! | [`contact`] | Collision classification, fuel pickup, crash reset |

pub mod contact;
pub mod control;
pub mod state;

pub use contact::{classify_contact, reset_to_launch, rocket_contact_system};
pub use control::{
    apply_rocket_intent_system, keyboard_to_intent_system, rocket_intent_clear_system,
    steering_angvel, thrust_force,
};
pub use state::{
    ContactOutcome, ContactTag, FlightEvent, LaunchPose, Rocket, RocketIntent, ThrustOutput,
};

use crate::config::GameConfig;
use crate::containment::{BoundaryClamp, ThrustLimiter};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

pub struct RocketPlugin;

impl Plugin for RocketPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RocketIntent>()
            .add_message::<FlightEvent>()
            .add_systems(
                FixedUpdate,
                (
                    rocket_intent_clear_system,
                    keyboard_to_intent_system,
                    apply_rocket_intent_system,
                )
                    .chain(),
            )
            .add_systems(Update, rocket_contact_system);
    }
}

// ── Rocket spawn ───────────────────────────────────────────────────────────────

/// Spawn the rocket at `at`, contained by the boundary volume on `volume`.
///
/// Motion is confined to the XY plane: Z translation and X/Y rotation are
/// locked, so steering is a pure spin about +Z.  Both regulators point at the
/// same volume but keep their own padding and soft-zone widths from
/// [`GameConfig`].  Visuals are attached by the caller.
pub fn spawn_rocket(commands: &mut Commands, config: &GameConfig, volume: Entity, at: Vec3) -> Entity {
    let half = config.rocket_half_extents();
    let transform = Transform::from_translation(at);
    let padding = config.level_padding();

    let id = commands
        .spawn((
            Rocket,
            LaunchPose::from_transform(&transform),
            // Physics
            RigidBody::Dynamic,
            Collider::cuboid(half.x, half.y, half.z),
            Velocity::zero(),
            ExternalForce::default(),
            Damping {
                linear_damping: config.rocket_linear_damping,
                angular_damping: config.rocket_angular_damping,
            },
            LockedAxes::TRANSLATION_LOCKED_Z
                | LockedAxes::ROTATION_LOCKED_X
                | LockedAxes::ROTATION_LOCKED_Y,
            ActiveEvents::COLLISION_EVENTS,
            // Containment
            BoundaryClamp::new(volume, padding, config.regulator),
            ThrustLimiter::new(volume, padding, config.attenuator),
            // Transform / visibility
            transform,
            Visibility::default(),
        ))
        .id();

    info!("Rocket spawned at {at}");
    id
}
