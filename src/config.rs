//! Runtime configuration loaded from `assets/boost.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every tunable in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/boost.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about:
//!
//! ```toml
//! thrust_strength = 1400.0
//!
//! [regulator]
//! inward_push_acceleration = 6.0
//! ```
//!
//! The regulator and attenuator are configured independently: one is the
//! safety net, the other is how slowing down near a wall feels.

use crate::constants::*;
use crate::containment::{AttenuatorConfig, RegulatorConfig};
use crate::error::{validate_non_negative, BoostError, BoostResult};
use bevy::prelude::*;
use serde::Deserialize;

pub const CONFIG_PATH: &str = "assets/boost.toml";

/// Runtime-tunable flight, containment and level configuration.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Rocket: Movement ──────────────────────────────────────────────────────
    pub thrust_strength: f32,
    pub rotation_strength: f32,
    pub rocket_half_extents: [f32; 3],
    pub rocket_linear_damping: f32,
    pub rocket_angular_damping: f32,

    // ── Level ─────────────────────────────────────────────────────────────────
    pub level_half_extents: [f32; 3],
    pub level_padding: [f32; 3],

    // ── Containment ───────────────────────────────────────────────────────────
    pub regulator: RegulatorConfig,
    pub attenuator: AttenuatorConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Rocket: Movement
            thrust_strength: THRUST_STRENGTH,
            rotation_strength: ROTATION_STRENGTH,
            rocket_half_extents: ROCKET_HALF_EXTENTS,
            rocket_linear_damping: ROCKET_LINEAR_DAMPING,
            rocket_angular_damping: ROCKET_ANGULAR_DAMPING,
            // Level
            level_half_extents: LEVEL_HALF_EXTENTS,
            level_padding: LEVEL_PADDING,
            // Containment
            regulator: RegulatorConfig::default(),
            attenuator: AttenuatorConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(path: &str, contents: &str) -> BoostResult<Self> {
        toml::from_str::<GameConfig>(contents).map_err(|e| BoostError::ConfigParse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Check every tunable and collect all violations.
    pub fn validate(&self) -> Vec<BoostError> {
        let checks: [(&'static str, f32); 7] = [
            ("THRUST_STRENGTH", self.thrust_strength),
            ("ROTATION_STRENGTH", self.rotation_strength),
            ("ROCKET_LINEAR_DAMPING", self.rocket_linear_damping),
            ("ROCKET_ANGULAR_DAMPING", self.rocket_angular_damping),
            ("SOFT_ZONE_DISTANCE", self.regulator.soft_zone_distance),
            ("OUTWARD_VELOCITY_DAMPING", self.regulator.outward_velocity_damping),
            ("INWARD_PUSH_ACCELERATION", self.regulator.inward_push_acceleration),
        ];
        let mut errors: Vec<BoostError> = checks
            .iter()
            .filter_map(|(name, value)| validate_non_negative(name, *value).err())
            .collect();
        if let Err(e) = validate_non_negative(
            "BOUNDARY_SOFT_ZONE_DISTANCE",
            self.attenuator.boundary_soft_zone_distance,
        ) {
            errors.push(e);
        }
        errors
    }

    pub fn rocket_half_extents(&self) -> Vec3 {
        Vec3::from_array(self.rocket_half_extents)
    }

    pub fn level_half_extents(&self) -> Vec3 {
        Vec3::from_array(self.level_half_extents)
    }

    pub fn level_padding(&self) -> Vec3 {
        Vec3::from_array(self.level_padding)
    }
}

/// Startup system: attempt to load `assets/boost.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// A missing file is not an error (defaults are already in place).  Parse
/// errors and out-of-range values are logged but never abort startup;
/// containment clamps bad values on its own.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match GameConfig::from_toml_str(CONFIG_PATH, &contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded game config from {CONFIG_PATH}");
            }
            Err(e) => warn!("{e}; using defaults"),
        },
        Err(_) => info!("No {CONFIG_PATH} found; using compiled defaults"),
    }

    for problem in config.validate() {
        warn!("{problem}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = GameConfig::from_toml_str("test.toml", "").unwrap();
        assert_eq!(cfg.thrust_strength, THRUST_STRENGTH);
        assert_eq!(cfg.regulator, RegulatorConfig::default());
        assert_eq!(cfg.attenuator, AttenuatorConfig::default());
    }

    #[test]
    fn partial_sections_override_only_named_keys() {
        let doc = r#"
            thrust_strength = 1400.0

            [regulator]
            inward_push_acceleration = 6.0

            [attenuator]
            include_floor = true
        "#;
        let cfg = GameConfig::from_toml_str("test.toml", doc).unwrap();
        assert_eq!(cfg.thrust_strength, 1400.0);
        assert_eq!(cfg.regulator.inward_push_acceleration, 6.0);
        assert_eq!(cfg.regulator.soft_zone_distance, SOFT_ZONE_DISTANCE);
        assert!(cfg.attenuator.include_floor);
        assert!(cfg.attenuator.include_ceiling);
    }

    #[test]
    fn malformed_document_reports_path() {
        let err = GameConfig::from_toml_str("bad.toml", "thrust_strength = \"fast\"").unwrap_err();
        match err {
            BoostError::ConfigParse { path, .. } => assert_eq!(path, "bad.toml"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn defaults_validate_cleanly() {
        assert!(GameConfig::default().validate().is_empty());
    }

    #[test]
    fn negative_tunables_are_reported() {
        let mut cfg = GameConfig::default();
        cfg.regulator.soft_zone_distance = -1.0;
        cfg.attenuator.boundary_soft_zone_distance = -2.0;
        let names: Vec<_> = cfg
            .validate()
            .into_iter()
            .filter_map(|e| match e {
                BoostError::UnsafeConstant { name, .. } => Some(name),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["SOFT_ZONE_DISTANCE", "BOUNDARY_SOFT_ZONE_DISTANCE"]);
    }
}
