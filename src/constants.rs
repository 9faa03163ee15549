//! Centralised flight, containment and motion constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//!
//! ## Tuning guidance
//!
//! Each constant notes the observable consequence of changing it.  Runtime
//! overrides go in `assets/boost.toml` (see [`crate::config`]); this file
//! remains the authoritative default.

// ── Rocket: Movement ──────────────────────────────────────────────────────────

/// Thrust strength applied along the rocket's local +Y while thrust is held.
///
/// The force actually applied each fixed step is
/// `THRUST_STRENGTH × step × intent × attenuation`.  At the default 64 Hz step
/// this yields ≈ 15.6 N on a ≈ 1 kg rocket, comfortably above gravity.
pub const THRUST_STRENGTH: f32 = 1000.0;

/// Rotation rate (degrees per second) while a rotate key is held.
pub const ROTATION_STRENGTH: f32 = 100.0;

/// Half extents of the rocket's cuboid collider (world units).
pub const ROCKET_HALF_EXTENTS: [f32; 3] = [0.25, 0.6, 0.25];

/// Linear damping applied to the rocket by Rapier.  Small values keep the
/// flight floaty; larger values make it feel like flying through syrup.
pub const ROCKET_LINEAR_DAMPING: f32 = 0.2;

/// Angular damping applied to the rocket.
pub const ROCKET_ANGULAR_DAMPING: f32 = 2.0;

// ── Containment: Boundary Regulator ───────────────────────────────────────────

/// Distance from each boundary face where the regulator starts damping
/// outward velocity.  0 turns the regulator into a pure hard clamp.
pub const SOFT_ZONE_DISTANCE: f32 = 1.5;

/// Rate (u/s per second) at which outward velocity is bled off deep in the
/// soft zone.  Scaled by the proximity fraction, so it ramps in linearly.
pub const OUTWARD_VELOCITY_DAMPING: f32 = 10.0;

/// Inward corrective acceleration at full soft-zone depth (u/s²).
/// 0 disables the rebound entirely.
pub const INWARD_PUSH_ACCELERATION: f32 = 0.0;

// ── Containment: Thrust Attenuator ────────────────────────────────────────────

/// Distance from the nearest considered face at which thrust starts fading.
pub const BOUNDARY_SOFT_ZONE_DISTANCE: f32 = 2.0;

/// Floor applied to the attenuator's soft-zone width before dividing.
///
/// Small enough that a zero-width zone behaves as a step function.
pub const SOFT_ZONE_EPSILON: f32 = 1e-6;

// ── Level ─────────────────────────────────────────────────────────────────────

/// Half extents of the default playable volume (world units).
pub const LEVEL_HALF_EXTENTS: [f32; 3] = [12.0, 8.0, 3.0];

/// Padding removed from every face of the playable volume.
pub const LEVEL_PADDING: [f32; 3] = [0.5, 0.5, 0.0];

// ── Motion ────────────────────────────────────────────────────────────────────

/// Default waypoint arrival radius.  Too small and a fast mover can orbit a
/// point without ever registering arrival.
pub const WAYPOINT_ARRIVE_DISTANCE: f32 = 0.05;

/// Default arrival radius for volume wanderers.
pub const WANDER_ARRIVE_DISTANCE: f32 = 0.5;

/// Default smoothing time for volume wanderers.  Smaller = snappier.
pub const WANDER_SMOOTH_TIME: f32 = 0.6;

/// Lower bound on smoothing time; avoids dividing by zero in `smooth_damp`.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Minimum number of points a waypoint path needs to be followed.
pub const MIN_WAYPOINTS: usize = 2;
