//! Rocket input and movement systems.
//!
//! ## Pipeline (runs in order every `FixedUpdate` step)
//!
//! 1. [`rocket_intent_clear_system`] — resets `RocketIntent` and `ExternalForce`.
//! 2. [`keyboard_to_intent_system`] — Space/W to thrust, A/D or arrows to steer.
//! 3. [`apply_rocket_intent_system`] — converts intent into `ExternalForce` /
//!    `Velocity`, scaling thrust by the rocket's [`ThrustLimiter`].
//!
//! The boundary regulator runs after physics in `FixedPostUpdate`
//! (see [`crate::containment`]), so the attenuator here always sees the
//! position the regulator just corrected.

use super::state::{Rocket, RocketIntent, ThrustOutput};
use crate::config::GameConfig;
use crate::containment::{limiter_scale, BoundaryVolume, ThrustLimiter};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

// ── Step 1: Clear ─────────────────────────────────────────────────────────────

/// Clear `ExternalForce` and `RocketIntent` at the start of every step.
pub fn rocket_intent_clear_system(
    mut q: Query<&mut ExternalForce, With<Rocket>>,
    mut intent: ResMut<RocketIntent>,
) {
    for mut force in q.iter_mut() {
        force.force = Vec3::ZERO;
        force.torque = Vec3::ZERO;
    }
    *intent = RocketIntent::default();
}

// ── Step 2: Keyboard → Intent ─────────────────────────────────────────────────

/// Translate keys into [`RocketIntent`].
///
/// - **Space / W** → `thrust = 1.0`
/// - **A / Left** → `rotation = +1.0` (CCW)
/// - **D / Right** → `rotation = −1.0` (CW)
///
/// Holding both directions cancels out.
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<RocketIntent>,
) {
    if keys.any_pressed([KeyCode::Space, KeyCode::KeyW]) {
        intent.thrust = 1.0;
    }
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        intent.rotation += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        intent.rotation -= 1.0;
    }
}

// ── Step 3: Apply intent → physics ───────────────────────────────────────────

/// Main-engine force for one step along the rocket's local +Y.
///
/// `strength × step × throttle × scale`; throttle and scale are clamped to
/// `[0, 1]`.
pub fn thrust_force(rotation: Quat, strength: f32, step: f32, throttle: f32, scale: f32) -> Vec3 {
    let magnitude = strength * step * throttle.clamp(0.0, 1.0) * scale.clamp(0.0, 1.0);
    rotation * Vec3::Y * magnitude
}

/// Angular speed about +Z (rad/s) for a steering input in `[-1, 1]` and a
/// strength in degrees per second.
pub fn steering_angvel(rotation: f32, strength_degrees: f32) -> f32 {
    rotation.clamp(-1.0, 1.0) * strength_degrees.to_radians()
}

/// Convert [`RocketIntent`] into `ExternalForce` and `Velocity`.
///
/// | Intent field     | Physics effect                                      |
/// |------------------|-----------------------------------------------------|
/// | `thrust > 0`     | `force += thrust_force(..)` scaled by the limiter   |
/// | `rotation != 0`  | `angvel.z = steering_angvel(..)` (overrides spin)   |
/// | `rotation == 0`  | angular velocity left to Rapier                     |
#[allow(clippy::type_complexity)]
pub fn apply_rocket_intent_system(
    time: Res<Time<Fixed>>,
    config: Res<GameConfig>,
    intent: Res<RocketIntent>,
    volumes: Query<(&BoundaryVolume, &GlobalTransform)>,
    mut q: Query<
        (
            &Transform,
            Option<&ThrustLimiter>,
            &mut ExternalForce,
            &mut Velocity,
            &mut ThrustOutput,
        ),
        With<Rocket>,
    >,
) {
    let step = time.timestep().as_secs_f32();

    for (transform, limiter, mut force, mut velocity, mut output) in q.iter_mut() {
        let scale = limiter_scale(limiter, transform.translation, &volumes);
        let thrust = if intent.thrust > 0.0 {
            thrust_force(
                transform.rotation,
                config.thrust_strength,
                step,
                intent.thrust,
                scale,
            )
        } else {
            Vec3::ZERO
        };
        force.force += thrust;

        if intent.rotation != 0.0 {
            velocity.angvel.z = steering_angvel(intent.rotation, config.rotation_strength);
        }

        *output = ThrustOutput {
            scale,
            force: thrust,
        };
    }
}
