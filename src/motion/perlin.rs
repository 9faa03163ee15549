//! Organic drift and wobble from Perlin noise.
//!
//! Meant for the visual child of a moving obstacle: the parent follows its
//! path or wander target, the child floats around it.

use super::oscillate::euler_degrees;
use bevy::prelude::*;
use noise::{NoiseFn, Perlin};
use rand::Rng;

/// Lane spacing between the three axes sampled from one noise field.
const AXIS_LANE_OFFSET: f32 = 10.0;
/// Upper bound of the random per-axis lane coordinates.
const LANE_RANGE: f32 = 1000.0;

/// Noise-driven position and rotation offset around the pose the entity
/// had when it first moved.
///
/// Writes `Transform`, so offsets are relative to the parent when there is one.
#[derive(Component, Clone)]
pub struct PerlinFloat {
    /// Peak offset per axis (world units).
    pub position_amplitude: Vec3,
    /// Noise samples per second for the position channel.
    pub position_frequency: f32,
    /// Peak euler offset per axis (degrees).
    pub rotation_amplitude: Vec3,
    pub rotation_frequency: f32,
    noise: Perlin,
    position_lanes: Vec3,
    rotation_lanes: Vec3,
    origin: Option<(Vec3, Quat)>,
}

impl PerlinFloat {
    /// New float with a random seed so neighbours don't move in sync.
    pub fn new<R: Rng + ?Sized>(
        position_amplitude: Vec3,
        position_frequency: f32,
        rotation_amplitude: Vec3,
        rotation_frequency: f32,
        rng: &mut R,
    ) -> Self {
        let mut lanes = || {
            Vec3::new(
                rng.gen_range(0.0..LANE_RANGE),
                rng.gen_range(0.0..LANE_RANGE),
                rng.gen_range(0.0..LANE_RANGE),
            )
        };
        let position_lanes = lanes();
        let rotation_lanes = lanes();
        Self {
            position_amplitude,
            position_frequency,
            rotation_amplitude,
            rotation_frequency,
            noise: Perlin::new(rng.gen()),
            position_lanes,
            rotation_lanes,
            origin: None,
        }
    }

    /// Position offset at `elapsed` seconds.
    pub fn position_offset(&self, elapsed: f32) -> Vec3 {
        noise_offset(
            &self.noise,
            self.position_lanes,
            elapsed,
            self.position_frequency,
            self.position_amplitude,
        )
    }

    /// Euler offset in degrees at `elapsed` seconds.
    pub fn rotation_offset(&self, elapsed: f32) -> Vec3 {
        noise_offset(
            &self.noise,
            self.rotation_lanes,
            elapsed,
            self.rotation_frequency,
            self.rotation_amplitude,
        )
    }
}

/// Signed noise in `[-1, 1]` scaled per axis by `amplitude`.
///
/// Each axis walks its own lane of the field, shifted apart so the axes
/// decorrelate.  A non-positive frequency switches the channel off.
pub fn noise_offset<N: NoiseFn<f64, 2>>(
    noise: &N,
    lanes: Vec3,
    elapsed: f32,
    frequency: f32,
    amplitude: Vec3,
) -> Vec3 {
    if frequency <= 0.0 {
        return Vec3::ZERO;
    }
    let t = elapsed * frequency;
    let sample = |lane: f32, shift: f32| -> f32 {
        (noise.get([lane as f64, (t + shift) as f64]) as f32).clamp(-1.0, 1.0)
    };
    Vec3::new(
        sample(lanes.x, 0.0),
        sample(lanes.y, AXIS_LANE_OFFSET),
        sample(lanes.z, 2.0 * AXIS_LANE_OFFSET),
    ) * amplitude
}

pub fn perlin_float_system(time: Res<Time>, mut q: Query<(&mut PerlinFloat, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (mut float, mut transform) in q.iter_mut() {
        let (start_pos, start_rot) =
            *float.origin.get_or_insert((transform.translation, transform.rotation));
        transform.translation = start_pos + float.position_offset(elapsed);
        transform.rotation = start_rot * euler_degrees(float.rotation_offset(elapsed));
    }
}
