//! Periodic decorations: bobbing, orbiting and spinning.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

// ── Bobbing ───────────────────────────────────────────────────────────────────

/// Sine-wave bob along `direction` around the position the entity had when
/// it first moved.
#[derive(Component, Debug, Clone)]
pub struct Bobbing {
    pub direction: Vec3,
    pub amplitude: f32,
    /// Full up-and-down cycles per second.
    pub cycles_per_second: f32,
    /// Phase offset in radians.
    pub phase: f32,
    origin: Option<Vec3>,
}

impl Bobbing {
    pub fn new(direction: Vec3, amplitude: f32, cycles_per_second: f32) -> Self {
        Self {
            direction,
            amplitude,
            cycles_per_second,
            phase: 0.0,
            origin: None,
        }
    }

    /// Start at a random point in the cycle so neighbours don't move in sync.
    pub fn with_random_phase<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.phase = rng.gen_range(0.0..TAU);
        self
    }
}

/// Offset from the origin at `elapsed` seconds, or `None` when the bob is
/// switched off (non-positive amplitude or frequency).
///
/// A zero direction falls back to +Y.
pub fn bobbing_offset(
    direction: Vec3,
    amplitude: f32,
    cycles_per_second: f32,
    phase: f32,
    elapsed: f32,
) -> Option<Vec3> {
    if amplitude <= 0.0 || cycles_per_second <= 0.0 {
        return None;
    }
    let dir = direction.try_normalize().unwrap_or(Vec3::Y);
    let angle = elapsed * cycles_per_second * TAU + phase;
    Some(dir * (angle.sin() * amplitude))
}

pub fn bobbing_system(time: Res<Time>, mut q: Query<(&mut Bobbing, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (mut bob, mut transform) in q.iter_mut() {
        let origin = *bob.origin.get_or_insert(transform.translation);
        if let Some(offset) = bobbing_offset(
            bob.direction,
            bob.amplitude,
            bob.cycles_per_second,
            bob.phase,
            elapsed,
        ) {
            transform.translation = origin + offset;
        }
    }
}

// ── Orbit ─────────────────────────────────────────────────────────────────────

/// Circular path in the XY plane around the entity's starting position.
#[derive(Component, Debug, Clone)]
pub struct Orbit {
    /// Degrees per second; negative runs clockwise.
    pub speed: f32,
    pub radius: f32,
    angle: f32,
    center: Option<Vec3>,
}

impl Orbit {
    pub fn new(speed: f32, radius: f32) -> Self {
        Self {
            speed,
            radius,
            angle: 0.0,
            center: None,
        }
    }

    /// Advance by `dt` and return the new position around `center`.
    pub fn advance(&mut self, center: Vec3, dt: f32) -> Vec3 {
        self.angle = (self.angle + self.speed * dt) % 360.0;
        orbit_position(center, self.radius, self.angle)
    }
}

/// Point on the circle of `radius` around `center` at `angle_degrees`.
/// The centre's Z is kept.
pub fn orbit_position(center: Vec3, radius: f32, angle_degrees: f32) -> Vec3 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    center + Vec3::new(cos * radius, sin * radius, 0.0)
}

pub fn orbit_system(time: Res<Time>, mut q: Query<(&mut Orbit, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut orbit, mut transform) in q.iter_mut() {
        let center = *orbit.center.get_or_insert(transform.translation);
        transform.translation = orbit.advance(center, dt);
    }
}

// ── Spin ──────────────────────────────────────────────────────────────────────

/// Constant spin, in euler degrees per second about local X, Y and Z.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spin {
    pub degrees_per_second: Vec3,
}

/// Rotation accumulated over `dt`.
pub fn spin_delta(degrees_per_second: Vec3, dt: f32) -> Quat {
    euler_degrees(degrees_per_second * dt)
}

/// Euler angles in degrees about X, Y and Z.  Z is applied first, then X,
/// then Y.
pub fn euler_degrees(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        degrees.y.to_radians(),
        degrees.x.to_radians(),
        degrees.z.to_radians(),
    )
}

/// Runs in `FixedUpdate` so spinning kinematic obstacles stay in step with
/// the physics.
pub fn spin_system(time: Res<Time>, mut q: Query<(&Spin, &mut Transform)>) {
    let dt = time.delta_secs();
    for (spin, mut transform) in q.iter_mut() {
        transform.rotation = (transform.rotation * spin_delta(spin.degrees_per_second, dt)).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bob_peaks_at_quarter_cycle() {
        let off = bobbing_offset(Vec3::Y, 2.0, 0.5, 0.0, 0.5).unwrap();
        assert!((off - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5, "got {off:?}");
        let zero = bobbing_offset(Vec3::Y, 2.0, 0.5, 0.0, 0.0).unwrap();
        assert!(zero.length() < 1e-6);
    }

    #[test]
    fn bob_normalises_direction_and_falls_back_to_up() {
        let off = bobbing_offset(Vec3::new(10.0, 0.0, 0.0), 1.0, 0.25, 0.0, 1.0).unwrap();
        assert!((off - Vec3::X).length() < 1e-5, "got {off:?}");
        let fallback = bobbing_offset(Vec3::ZERO, 1.0, 0.25, 0.0, 1.0).unwrap();
        assert!((fallback - Vec3::Y).length() < 1e-5, "got {fallback:?}");
    }

    #[test]
    fn bob_is_off_without_amplitude_or_frequency() {
        assert_eq!(bobbing_offset(Vec3::Y, 0.0, 1.0, 0.0, 1.0), None);
        assert_eq!(bobbing_offset(Vec3::Y, 1.0, 0.0, 0.0, 1.0), None);
    }

    #[test]
    fn random_phase_stays_in_one_cycle() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let bob = Bobbing::new(Vec3::Y, 1.0, 1.0).with_random_phase(&mut rng);
            assert!((0.0..TAU).contains(&bob.phase));
        }
    }

    #[test]
    fn orbit_traces_circle_in_xy() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let mut orbit = Orbit::new(90.0, 5.0);
        let p = orbit.advance(center, 1.0);
        assert!((p - Vec3::new(1.0, 7.0, 3.0)).length() < 1e-4, "got {p:?}");
        let p = orbit.advance(center, 1.0);
        assert!((p - Vec3::new(-4.0, 2.0, 3.0)).length() < 1e-4, "got {p:?}");
    }

    #[test]
    fn spin_about_z_only_turns_in_plane() {
        let q = spin_delta(Vec3::new(0.0, 0.0, 90.0), 1.0);
        let v = q * Vec3::X;
        assert!((v - Vec3::Y).length() < 1e-5, "got {v:?}");
    }

    #[test]
    fn zero_spin_is_identity() {
        let q = spin_delta(Vec3::new(30.0, 45.0, 60.0), 0.0);
        assert!(q.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }
}
