//! Thrust Attenuator: fades commanded thrust to zero near the boundary.
//!
//! Unlike the regulator this never touches velocity or position; it returns a
//! scale in `[0, 1]` that the flight code multiplies into its thrust force.

use super::volume::Volume;
use crate::constants::{BOUNDARY_SOFT_ZONE_DISTANCE, SOFT_ZONE_EPSILON};
use bevy::math::Vec3;
use serde::Deserialize;

/// Tunables for one attenuator instance.
///
/// The vertical axis is world +Y.  By default both faces of X and Z are
/// considered plus the ceiling; the floor is ignored so the rocket can still
/// lift off a landing pad that sits on the bottom face.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AttenuatorConfig {
    /// Distance from a considered face at which thrust starts fading.
    pub boundary_soft_zone_distance: f32,
    /// Also fade near the ceiling (max Y face).
    pub include_ceiling: bool,
    /// Also fade near the floor (min Y face).
    pub include_floor: bool,
}

impl Default for AttenuatorConfig {
    fn default() -> Self {
        Self {
            boundary_soft_zone_distance: BOUNDARY_SOFT_ZONE_DISTANCE,
            include_ceiling: true,
            include_floor: false,
        }
    }
}

/// Signed distance from `position` to the nearest considered face.
///
/// Negative when the position is past that face.
pub fn nearest_face_distance(position: Vec3, volume: &Volume, config: &AttenuatorConfig) -> f32 {
    let mut nearest = (position.x - volume.min.x)
        .min(volume.max.x - position.x)
        .min(position.z - volume.min.z)
        .min(volume.max.z - position.z);
    if config.include_ceiling {
        nearest = nearest.min(volume.max.y - position.y);
    }
    if config.include_floor {
        nearest = nearest.min(position.y - volume.min.y);
    }
    nearest
}

/// Fraction of thrust allowed through at `position`.
///
/// 1 at or beyond the soft-zone width from every considered face, 0 at or
/// past any considered face, linear in between.  A zero-width zone is floored
/// to [`SOFT_ZONE_EPSILON`] so the fade collapses into a step.
pub fn attenuate(position: Vec3, volume: &Volume, config: &AttenuatorConfig) -> f32 {
    let soft = config.boundary_soft_zone_distance.max(SOFT_ZONE_EPSILON);
    let nearest = nearest_face_distance(position, volume, config);
    if nearest.is_nan() {
        return 1.0;
    }
    (nearest / soft).clamp(0.0, 1.0)
}
