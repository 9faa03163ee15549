//! Axis-aligned playable volume.

use bevy::math::{BVec3, Vec3};
use rand::Rng;

/// An axis-aligned box in world space.
///
/// Invariant: `min.axis <= max.axis` on every axis.  Construct through
/// [`Volume::new`] or [`Volume::from_bounds`], which normalise their inputs;
/// the fields are public for read access by debug draw and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    pub min: Vec3,
    pub max: Vec3,
}

impl Volume {
    /// Build a volume from two corners in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Build a volume from a source box shrunk by `padding` on every face.
    ///
    /// Padding is clamped to half the source extent per axis, so an oversized
    /// padding collapses that axis to the box centre instead of inverting it.
    /// Negative padding grows the box.
    pub fn from_bounds(min: Vec3, max: Vec3, padding: Vec3) -> Self {
        let source = Self::new(min, max);
        let half = source.half_extents();
        let pad = padding.min(half);
        Self {
            min: source.min + pad,
            max: source.max - pad,
        }
    }

    /// Build a volume centred on `center` with the given half extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// True when `point` lies inside or on the surface of the box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Clamp `point` into the box.  Idempotent.
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Clamp `point` into the box and report which axes moved.
    pub fn clamp_with_mask(&self, point: Vec3) -> (Vec3, BVec3) {
        let clamped = self.clamp(point);
        (clamped, clamped.cmpne(point))
    }

    /// Uniformly random point inside the box.  Degenerate axes return the
    /// shared coordinate.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            random_between(rng, self.min.x, self.max.x),
            random_between(rng, self.min.y, self.max.y),
            random_between(rng, self.min.z, self.max.z),
        )
    }
}

fn random_between<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// `t` such that `lerp(a, b, t) == value`, clamped to `[0, 1]`.
///
/// Returns 0 when `a == b`; callers that need the degenerate case handled
/// differently must check the width themselves.
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        0.0
    } else {
        ((value - a) / (b - a)).clamp(0.0, 1.0)
    }
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
///
/// A non-positive `max_delta` leaves `current` unchanged.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if max_delta.is_nan() || max_delta <= 0.0 {
        current
    } else if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}
