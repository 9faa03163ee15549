//! Boundary Regulator: keeps a body inside a [`Volume`] without a hard wall.
//!
//! Each fixed step, per axis and independently:
//!
//! 1. A proximity fraction `t ∈ [0, 1]` is computed for each face: 0 at the
//!    inner edge of the soft zone, 1 on (or past) the face itself.
//! 2. Velocity heading out through a face is capped so the body cannot cross
//!    the face within one step, then bled toward zero at
//!    `outward_velocity_damping × t` per second.
//! 3. An optional inward acceleration `(t_min − t_max) × inward_push_acceleration`
//!    is reported for the caller to apply.
//! 4. As a safety net, the position is hard-clamped into the box and the
//!    velocity of every clamped axis is zeroed.
//!
//! The function is pure; [`super::systems::boundary_regulation_system`] is the
//! ECS adapter that reads and writes the body.

use super::volume::{inverse_lerp, move_towards, Volume};
use crate::constants::{INWARD_PUSH_ACCELERATION, OUTWARD_VELOCITY_DAMPING, SOFT_ZONE_DISTANCE};
use bevy::math::{BVec3, Vec3};
use serde::Deserialize;

/// Tunables for one regulator instance.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegulatorConfig {
    /// Width of the soft zone inside each face.  0 (or negative) disables the
    /// soft behaviour and leaves only the hard clamp.
    pub soft_zone_distance: f32,
    /// Outward speed removed per second at full soft-zone depth.
    pub outward_velocity_damping: f32,
    /// Inward acceleration at full soft-zone depth.  0 disables the push.
    pub inward_push_acceleration: f32,
}

impl Default for RegulatorConfig {
    fn default() -> Self {
        Self {
            soft_zone_distance: SOFT_ZONE_DISTANCE,
            outward_velocity_damping: OUTWARD_VELOCITY_DAMPING,
            inward_push_acceleration: INWARD_PUSH_ACCELERATION,
        }
    }
}

/// Result of one regulator evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regulation {
    /// Corrected velocity.
    pub velocity: Vec3,
    /// Position after the hard clamp; equal to the input when nothing fired.
    pub position: Vec3,
    /// Axes on which the hard clamp moved the body.
    pub clamped: BVec3,
    /// Inward acceleration to apply this step, mass-independent.  `None` when
    /// the push is disabled or the soft zone has zero width.
    pub push: Option<Vec3>,
}

impl Regulation {
    /// True when the hard clamp moved the body on any axis.
    pub fn position_changed(&self) -> bool {
        self.clamped.any()
    }
}

/// Proximity fraction for the min face: 0 at `min + soft` and beyond, 1 at
/// `min` and below.
pub fn min_face_proximity(pos: f32, min: f32, soft: f32) -> f32 {
    inverse_lerp(min + soft, min, pos)
}

/// Proximity fraction for the max face: 0 at `max − soft` and below, 1 at
/// `max` and above.
pub fn max_face_proximity(pos: f32, max: f32, soft: f32) -> f32 {
    inverse_lerp(max - soft, max, pos)
}

/// One-sided correction against a single face.
///
/// `outward` is the velocity component pointing through the face (positive =
/// leaving) and `gap` the distance left to the face.  Inward motion is never
/// touched.
fn damp_outward(outward: f32, gap: f32, t: f32, damping: f32, step: f32) -> f32 {
    if t <= 0.0 || outward <= 0.0 {
        return outward;
    }
    let capped = if step.is_finite() && step > 0.0 {
        outward.min(gap.max(0.0) / step)
    } else {
        outward
    };
    move_towards(capped, 0.0, damping.max(0.0) * t * step)
}

/// Soft-zone correction on one axis.  Returns `(velocity, push_acceleration)`.
fn regulate_axis(
    pos: f32,
    vel: f32,
    min: f32,
    max: f32,
    soft: f32,
    config: &RegulatorConfig,
    step: f32,
) -> (f32, f32) {
    let t_min = min_face_proximity(pos, min, soft);
    let t_max = max_face_proximity(pos, max, soft);
    let damping = config.outward_velocity_damping;

    // Min face: outward is the negative direction.
    let vel = -damp_outward(-vel, pos - min, t_min, damping, step);
    let vel = damp_outward(vel, max - pos, t_max, damping, step);

    (vel, (t_min - t_max) * config.inward_push_acceleration)
}

/// Evaluate the regulator for one body over one fixed step.
///
/// `step_duration <= 0` disables the outward-speed cap and the damping
/// rather than dividing by zero; the hard clamp still applies.
pub fn regulate(
    position: Vec3,
    velocity: Vec3,
    volume: &Volume,
    step_duration: f32,
    config: &RegulatorConfig,
) -> Regulation {
    let soft = config.soft_zone_distance.max(0.0);
    let mut corrected = velocity;
    let mut push = None;

    if soft > 0.0 {
        let mut accel = Vec3::ZERO;
        for axis in 0..3 {
            let (v, a) = regulate_axis(
                position[axis],
                velocity[axis],
                volume.min[axis],
                volume.max[axis],
                soft,
                config,
                step_duration,
            );
            corrected[axis] = v;
            accel[axis] = a;
        }
        if config.inward_push_acceleration > 0.0 {
            push = Some(accel);
        }
    }

    let (clamped_position, clamped) = volume.clamp_with_mask(position);
    // Zero clamped axes so the safety net never injects energy.
    let corrected = Vec3::select(clamped, Vec3::ZERO, corrected);

    Regulation {
        velocity: corrected,
        position: clamped_position,
        clamped,
        push,
    }
}
