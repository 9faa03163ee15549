//! Rocket components, resources and messages.
//!
//! Systems that mutate this state are in the sibling modules:
//! - [`super::control`] — input + thrust + steering
//! - [`super::contact`] — collision outcomes

use bevy::prelude::*;

// ── Components ─────────────────────────────────────────────────────────────────

/// Marker component for the player rocket.
#[derive(Component, Debug, Default)]
#[require(ThrustOutput)]
pub struct Rocket;

/// Where the rocket returns to after a crash.
#[derive(Component, Debug, Clone, Copy)]
pub struct LaunchPose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl LaunchPose {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            translation: transform.translation,
            rotation: transform.rotation,
        }
    }
}

/// Last thrust actually applied, for HUD and debugging.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ThrustOutput {
    /// Attenuator scale used this step, in `[0, 1]`.
    pub scale: f32,
    /// World-space force written to `ExternalForce`.
    pub force: Vec3,
}

/// What touching this entity means for the rocket.  Untagged colliders are
/// hazards.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTag {
    Friendly,
    Fuel,
    Finish,
}

// ── Resources ──────────────────────────────────────────────────────────────────

/// Per-step flight commands, cleared at the start of every fixed step.
///
/// Input systems only write here; [`super::control::apply_rocket_intent_system`]
/// is the only system that turns intent into physics.  Tests populate this
/// directly.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct RocketIntent {
    /// Main engine throttle in `[0, 1]`.
    pub thrust: f32,
    /// Steering in `[-1, 1]`; positive turns counter-clockwise.  0 leaves
    /// angular velocity to the physics engine.
    pub rotation: f32,
}

// ── Messages ───────────────────────────────────────────────────────────────────

/// Outcome of the rocket touching something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Friendly,
    FuelCollected,
    LevelComplete,
    Crashed,
}

/// Emitted once per contact the rocket starts.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightEvent {
    pub rocket: Entity,
    pub other: Entity,
    pub outcome: ContactOutcome,
}
