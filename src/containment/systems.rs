//! ECS adapters for the containment core.
//!
//! The pure functions in [`super::regulator`] and [`super::attenuator`] never
//! see an entity.  This module resolves the volume an entity points at, feeds
//! the body snapshot in and writes the result back.  A body whose volume is
//! unassigned or despawned is left alone: no clamp, full thrust.

use super::attenuator::{attenuate, AttenuatorConfig};
use super::regulator::{regulate, RegulatorConfig};
use super::volume::Volume;
use crate::error::validate_step_duration;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// Source box for a playable volume, centred on the entity's
/// [`GlobalTransform`].
///
/// Rotation and scale of the entity are folded into a world-space axis-aligned
/// box, so a rotated volume entity yields its enclosing AABB.
#[derive(Component, Debug, Clone, Copy)]
pub struct BoundaryVolume {
    pub half_extents: Vec3,
}

impl BoundaryVolume {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    /// World-space bounds before padding.
    pub fn world_bounds(&self, global: &GlobalTransform) -> Volume {
        let m = global.affine().matrix3;
        let h = self.half_extents.abs();
        let half = Vec3::from(m.x_axis.abs() * h.x + m.y_axis.abs() * h.y + m.z_axis.abs() * h.z);
        Volume::from_center_half_extents(global.translation(), half)
    }

    /// World-space bounds with `padding` removed from every face.
    pub fn padded_bounds(&self, global: &GlobalTransform, padding: Vec3) -> Volume {
        let source = self.world_bounds(global);
        Volume::from_bounds(source.min, source.max, padding)
    }
}

/// Boundary Regulator instance attached to a dynamic body.
#[derive(Component, Debug, Clone)]
pub struct BoundaryClamp {
    /// Entity carrying the [`BoundaryVolume`].  `None` disables the clamp.
    pub volume: Option<Entity>,
    pub padding: Vec3,
    pub config: RegulatorConfig,
}

impl BoundaryClamp {
    pub fn new(volume: Entity, padding: Vec3, config: RegulatorConfig) -> Self {
        Self {
            volume: Some(volume),
            padding,
            config,
        }
    }
}

/// Thrust Attenuator instance attached to a thrusting body.
#[derive(Component, Debug, Clone)]
pub struct ThrustLimiter {
    /// Entity carrying the [`BoundaryVolume`].  `None` means full thrust.
    pub volume: Option<Entity>,
    pub padding: Vec3,
    pub config: AttenuatorConfig,
}

impl ThrustLimiter {
    pub fn new(volume: Entity, padding: Vec3, config: AttenuatorConfig) -> Self {
        Self {
            volume: Some(volume),
            padding,
            config,
        }
    }
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Debug overlay toggle for drawing boundary volumes.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct BoundaryOverlay {
    pub visible: bool,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Look up the padded volume an instance points at.
pub fn resolve_volume(
    volumes: &Query<(&BoundaryVolume, &GlobalTransform)>,
    entity: Option<Entity>,
    padding: Vec3,
) -> Option<Volume> {
    let (boundary, global) = volumes.get(entity?).ok()?;
    Some(boundary.padded_bounds(global, padding))
}

/// Thrust scale for a body at `position`; 1.0 when unlimited or unconfigured.
pub fn limiter_scale(
    limiter: Option<&ThrustLimiter>,
    position: Vec3,
    volumes: &Query<(&BoundaryVolume, &GlobalTransform)>,
) -> f32 {
    let Some(limiter) = limiter else {
        return 1.0;
    };
    match resolve_volume(volumes, limiter.volume, limiter.padding) {
        Some(volume) => attenuate(position, &volume, &limiter.config),
        None => {
            warn_once!("ThrustLimiter has no boundary volume assigned; thrust is not attenuated");
            1.0
        }
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Run the Boundary Regulator on every clamped body.
///
/// Must run after Rapier's writeback so it sees the integrated state, and
/// before the next step's force application.  The inward push is applied as a
/// velocity change of `push × step`, i.e. an acceleration held for one step.
pub fn boundary_regulation_system(
    time: Res<Time<Fixed>>,
    volumes: Query<(&BoundaryVolume, &GlobalTransform)>,
    mut bodies: Query<(&BoundaryClamp, &mut Transform, &mut Velocity)>,
) {
    let step = time.timestep().as_secs_f32();
    if let Err(e) = validate_step_duration(step) {
        warn_once!("{e}; soft zone damping skipped");
    }

    for (clamp, mut transform, mut velocity) in bodies.iter_mut() {
        let Some(volume) = resolve_volume(&volumes, clamp.volume, clamp.padding) else {
            warn_once!("BoundaryClamp has no boundary volume assigned; containment disabled");
            continue;
        };

        let out = regulate(
            transform.translation,
            velocity.linvel,
            &volume,
            step,
            &clamp.config,
        );

        let mut linvel = out.velocity;
        if let Some(push) = out.push {
            linvel += push * step;
        }
        if velocity.linvel != linvel {
            velocity.linvel = linvel;
        }
        if out.position_changed() {
            transform.translation = out.position;
        }
    }
}

/// Flip [`BoundaryOverlay::visible`] when `B` is pressed.
pub fn toggle_boundary_overlay_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<BoundaryOverlay>,
) {
    if keys.just_pressed(KeyCode::KeyB) {
        overlay.visible = !overlay.visible;
    }
}

/// Draw every boundary volume and each instance's padded box.
///
/// Read-only: cyan for the source box, orange for regulator hard bounds,
/// yellow for attenuator bounds.
pub fn boundary_gizmo_system(
    overlay: Res<BoundaryOverlay>,
    mut gizmos: Gizmos,
    volumes: Query<(&BoundaryVolume, &GlobalTransform)>,
    clamps: Query<&BoundaryClamp>,
    limiters: Query<&ThrustLimiter>,
) {
    if !overlay.visible {
        return;
    }

    for (boundary, global) in volumes.iter() {
        draw_volume(&mut gizmos, &boundary.world_bounds(global), Color::srgb(0.0, 1.0, 1.0));
    }
    for clamp in clamps.iter() {
        if let Some(v) = resolve_volume(&volumes, clamp.volume, clamp.padding) {
            draw_volume(&mut gizmos, &v, Color::srgb(1.0, 0.5, 0.0));
        }
    }
    for limiter in limiters.iter() {
        if let Some(v) = resolve_volume(&volumes, limiter.volume, limiter.padding) {
            draw_volume(&mut gizmos, &v, Color::srgb(1.0, 0.9, 0.2));
        }
    }
}

fn draw_volume(gizmos: &mut Gizmos, volume: &Volume, color: Color) {
    gizmos.cuboid(
        Transform::from_translation(volume.center()).with_scale(volume.size()),
        color,
    );
}
