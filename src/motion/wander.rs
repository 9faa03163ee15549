//! Debris that drifts between random points inside a boundary volume.

use crate::constants::{MIN_SMOOTH_TIME, WANDER_ARRIVE_DISTANCE, WANDER_SMOOTH_TIME};
use crate::containment::{resolve_volume, BoundaryVolume, Volume};
use bevy::prelude::*;
use rand::Rng;

#[derive(Component, Debug, Clone)]
pub struct VolumeWander {
    /// Entity carrying the [`BoundaryVolume`] to wander inside.
    pub volume: Option<Entity>,
    pub padding: Vec3,
    /// Maximum drift speed.
    pub speed: f32,
    /// Smaller = snappier direction changes, larger = floatier.
    pub smooth_time: f32,
    /// A new target is picked once within this distance of the current one.
    pub arrive_distance: f32,
    target: Option<Vec3>,
    velocity: Vec3,
}

impl VolumeWander {
    pub fn new(volume: Entity, speed: f32) -> Self {
        Self {
            volume: Some(volume),
            padding: Vec3::ZERO,
            speed,
            smooth_time: WANDER_SMOOTH_TIME,
            arrive_distance: WANDER_ARRIVE_DISTANCE,
            target: None,
            velocity: Vec3::ZERO,
        }
    }

    pub fn with_padding(mut self, padding: Vec3) -> Self {
        self.padding = padding;
        self
    }

    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Advance by `dt` inside `volume`; returns the new position.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        position: Vec3,
        volume: &Volume,
        dt: f32,
        rng: &mut R,
    ) -> Vec3 {
        if self.speed <= 0.0 {
            return position;
        }

        let arrive_sq = self.arrive_distance * self.arrive_distance;
        let target = match self.target {
            Some(t) if position.distance_squared(t) > arrive_sq => t,
            _ => {
                let t = volume.random_point(rng);
                self.target = Some(t);
                t
            }
        };

        smooth_damp(
            position,
            target,
            &mut self.velocity,
            self.smooth_time.max(MIN_SMOOTH_TIME),
            self.speed,
            dt,
        )
    }
}

/// Critically damped spring toward `target`, capped at `max_speed`.
///
/// `velocity` carries state between calls.  The result never passes the
/// target; when it would, it lands on it and the velocity is zeroed.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }

    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp_length_max(max_change);
    let goal = current - change;

    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * decay;
    let output = goal + (change + temp) * decay;

    if (target - current).dot(output - target) > 0.0 {
        *velocity = Vec3::ZERO;
        return target;
    }
    output
}

pub fn volume_wander_system(
    time: Res<Time>,
    volumes: Query<(&BoundaryVolume, &GlobalTransform)>,
    mut q: Query<(&mut VolumeWander, &mut Transform)>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();
    for (mut wander, mut transform) in q.iter_mut() {
        let Some(volume) = resolve_volume(&volumes, wander.volume, wander.padding) else {
            warn_once!("VolumeWander has no boundary volume assigned; staying put");
            continue;
        };
        transform.translation = wander.step(transform.translation, &volume, dt, &mut rng);
    }
}
