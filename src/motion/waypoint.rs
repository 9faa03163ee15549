//! Obstacles that patrol a list of world-space points.

use crate::constants::{MIN_WAYPOINTS, WAYPOINT_ARRIVE_DISTANCE};
use crate::error::{validate_waypoint_count, BoostResult};
use bevy::prelude::*;
use rand::Rng;

/// What to do after reaching a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// Last point returns to the first.
    #[default]
    Loop,
    /// Stop for good on the last point.
    Once,
    /// Walk forward, then back.
    PingPong,
    /// Any point except the current one.
    Random,
}

/// Moves its entity toward `points[index]` at `speed` units per second.
#[derive(Component, Debug, Clone)]
pub struct WaypointMover {
    points: Vec<Vec3>,
    pub speed: f32,
    pub mode: PathMode,
    /// Pause after each arrival (seconds).
    pub wait_time: f32,
    pub arrive_distance: f32,
    index: usize,
    direction: isize,
    wait_timer: f32,
    finished: bool,
}

impl WaypointMover {
    /// Fails when fewer than two points are given; there is nothing to
    /// move between.
    pub fn new(points: Vec<Vec3>, speed: f32, mode: PathMode) -> BoostResult<Self> {
        validate_waypoint_count(points.len(), MIN_WAYPOINTS)?;
        Ok(Self {
            points,
            speed,
            mode,
            wait_time: 0.0,
            arrive_distance: WAYPOINT_ARRIVE_DISTANCE,
            index: 0,
            direction: 1,
            wait_timer: 0.0,
            finished: false,
        })
    }

    pub fn with_wait_time(mut self, seconds: f32) -> Self {
        self.wait_time = seconds;
        self
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn target_index(&self) -> usize {
        self.index
    }

    /// True once a [`PathMode::Once`] path has reached its last point.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt` from `position`; returns the new position.
    pub fn step<R: Rng + ?Sized>(&mut self, position: Vec3, dt: f32, rng: &mut R) -> Vec3 {
        if self.finished {
            return position;
        }
        if self.wait_timer > 0.0 {
            self.wait_timer -= dt;
            return position;
        }
        if self.speed <= 0.0 {
            return position;
        }

        let target = self.points[self.index];
        let next = move_towards_point(position, target, self.speed * dt);
        if next.distance_squared(target) <= self.arrive_distance * self.arrive_distance {
            self.advance(rng);
        }
        next
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.wait_timer = self.wait_time.max(0.0);
        let last = self.points.len() - 1;

        match self.mode {
            PathMode::Random => {
                let mut next = rng.gen_range(0..last);
                if next >= self.index {
                    next += 1;
                }
                self.index = next;
            }
            PathMode::PingPong => {
                if self.index == last {
                    self.direction = -1;
                } else if self.index == 0 {
                    self.direction = 1;
                }
                self.index = (self.index as isize + self.direction).clamp(0, last as isize) as usize;
            }
            PathMode::Loop => {
                self.index = if self.index >= last { 0 } else { self.index + 1 };
            }
            PathMode::Once => {
                if self.index >= last {
                    self.finished = true;
                } else {
                    self.index += 1;
                }
            }
        }
    }
}

/// Move `current` toward `target` by at most `max_distance`, landing exactly
/// on the target instead of overshooting.
pub fn move_towards_point(current: Vec3, target: Vec3, max_distance: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_distance || distance == 0.0 {
        target
    } else {
        current + delta / distance * max_distance
    }
}

pub fn waypoint_system(time: Res<Time>, mut q: Query<(&mut WaypointMover, &mut Transform)>) {
    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();
    for (mut mover, mut transform) in q.iter_mut() {
        transform.translation = mover.step(transform.translation, dt, &mut rng);
    }
}
