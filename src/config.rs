//! Simulation configuration and boundary validation
//!
//! Everything coming from outside the core (config files, text fields,
//! sliders, edit dialogs) passes through the validators here before it
//! reaches the simulation.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, SimError};
use crate::sim::Arena;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena size in pixels
    pub arena: Arena,
    /// Number of obstacles (1-100)
    pub obstacle_count: usize,
    /// Global obstacle speed multiplier (0-10)
    pub global_speed: f64,
    /// RNG seed for obstacle layouts
    pub seed: u64,
    /// Robot position after construction and reset
    pub robot_start: DVec2,
    /// Initial goal position
    pub goal: DVec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            global_speed: DEFAULT_GLOBAL_SPEED,
            seed: 0,
            robot_start: crate::default_robot(),
            goal: crate::default_goal(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config (missing fields take defaults)
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        validate_arena(&self.arena)?;
        validate_obstacle_count(self.obstacle_count)?;
        validate_global_speed(self.global_speed)?;
        validate_point(self.robot_start)?;
        validate_point(self.goal)?;
        Ok(())
    }
}

/// Parse obstacle count text as typed by a user
pub fn parse_obstacle_count(text: &str) -> Result<usize, SimError> {
    let trimmed = text.trim();
    let count: i64 = trimmed
        .parse()
        .map_err(|_| SimError::InvalidNumber(trimmed.to_string()))?;
    if count < MIN_OBSTACLES as i64 || count > MAX_OBSTACLES as i64 {
        return Err(SimError::ObstacleCountOutOfRange(count));
    }
    Ok(count as usize)
}

pub fn validate_obstacle_count(count: usize) -> Result<usize, SimError> {
    if (MIN_OBSTACLES..=MAX_OBSTACLES).contains(&count) {
        Ok(count)
    } else {
        Err(SimError::count_out_of_range(count))
    }
}

/// Arena sides must be positive and finite
pub fn validate_arena(arena: &Arena) -> Result<(), SimError> {
    let valid = |side: f64| side.is_finite() && side > 0.0;
    if valid(arena.width) && valid(arena.height) {
        Ok(())
    } else {
        Err(SimError::InvalidArena {
            width: arena.width,
            height: arena.height,
        })
    }
}

pub fn validate_point(point: DVec2) -> Result<DVec2, SimError> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(SimError::NonFinitePoint {
            x: point.x,
            y: point.y,
        })
    }
}

/// Check edited obstacle attributes before they reach the field
pub fn validate_edit(radius: f64, speed_multiplier: f64) -> Result<(), SimError> {
    if !(MIN_OBSTACLE_RADIUS..=MAX_OBSTACLE_RADIUS).contains(&radius) {
        return Err(SimError::RadiusOutOfRange(radius));
    }
    if !(MIN_SPEED_MULTIPLIER..=MAX_SPEED_MULTIPLIER).contains(&speed_multiplier) {
        return Err(SimError::SpeedMultiplierOutOfRange(speed_multiplier));
    }
    Ok(())
}

pub fn validate_global_speed(speed: f64) -> Result<f64, SimError> {
    if (MIN_GLOBAL_SPEED..=MAX_GLOBAL_SPEED).contains(&speed) {
        Ok(speed)
    } else {
        Err(SimError::GlobalSpeedOutOfRange(speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_obstacle_count() {
        assert_eq!(parse_obstacle_count(" 12 "), Ok(12));
        assert_eq!(parse_obstacle_count("1"), Ok(1));
        assert_eq!(parse_obstacle_count("100"), Ok(100));
        assert_eq!(
            parse_obstacle_count("0"),
            Err(SimError::ObstacleCountOutOfRange(0))
        );
        assert_eq!(
            parse_obstacle_count("-4"),
            Err(SimError::ObstacleCountOutOfRange(-4))
        );
        assert_eq!(
            parse_obstacle_count("101"),
            Err(SimError::ObstacleCountOutOfRange(101))
        );
        assert_eq!(
            parse_obstacle_count("five"),
            Err(SimError::InvalidNumber("five".into()))
        );
        assert!(matches!(
            parse_obstacle_count(""),
            Err(SimError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_validate_edit_ranges() {
        assert!(validate_edit(5.0, 0.0).is_ok());
        assert!(validate_edit(50.0, 5.0).is_ok());
        assert_eq!(validate_edit(4.9, 1.0), Err(SimError::RadiusOutOfRange(4.9)));
        assert_eq!(validate_edit(51.0, 1.0), Err(SimError::RadiusOutOfRange(51.0)));
        assert_eq!(
            validate_edit(20.0, 5.5),
            Err(SimError::SpeedMultiplierOutOfRange(5.5))
        );
        assert!(validate_edit(f64::NAN, 1.0).is_err());
        assert!(validate_edit(20.0, f64::NAN).is_err());
    }

    #[test]
    fn test_validate_global_speed() {
        assert_eq!(validate_global_speed(0.0), Ok(0.0));
        assert_eq!(validate_global_speed(10.0), Ok(10.0));
        assert!(validate_global_speed(-0.1).is_err());
        assert!(validate_global_speed(10.5).is_err());
        assert!(validate_global_speed(f64::INFINITY).is_err());
    }

    #[test]
    fn test_config_json_defaults() {
        let config = SimConfig::from_json_str(r#"{ "obstacle_count": 12, "seed": 9 }"#).unwrap();
        assert_eq!(config.obstacle_count, 12);
        assert_eq!(config.seed, 9);
        assert_eq!(config.arena, Arena::default());
        assert_eq!(config.robot_start, DVec2::new(50.0, 550.0));
        assert_eq!(config.goal, DVec2::new(750.0, 50.0));
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        let err = SimConfig::from_json_str(r#"{ "obstacle_count": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SimError::ObstacleCountOutOfRange(0))
        ));
        let err = SimConfig::from_json_str(r#"{ "global_speed": 11.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = SimConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_arena() {
        assert!(validate_arena(&Arena::new(300.0, 200.0)).is_ok());
        assert_eq!(
            validate_arena(&Arena::new(-5.0, 0.0)),
            Err(SimError::InvalidArena {
                width: -5.0,
                height: 0.0
            })
        );
        assert!(validate_arena(&Arena::new(f64::INFINITY, 10.0)).is_err());
        assert!(validate_arena(&Arena::new(10.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_validate_point() {
        assert_eq!(validate_point(DVec2::new(-3.0, 4.0)), Ok(DVec2::new(-3.0, 4.0)));
        assert!(validate_point(DVec2::new(f64::NAN, 1.0)).is_err());
        assert!(validate_point(DVec2::new(1.0, f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn test_config_rejects_bad_geometry() {
        let err = SimConfig::from_json_str(r#"{ "arena": { "width": -5, "height": 0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SimError::InvalidArena { .. })
        ));

        let config = SimConfig {
            robot_start: DVec2::new(f64::NAN, 1.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::NonFinitePoint { .. })
        ));
        let config = SimConfig {
            goal: DVec2::new(0.0, f64::INFINITY),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_small_arena_config_accepted() {
        let config = SimConfig::from_json_str(
            r#"{ "arena": { "width": 300, "height": 200 }, "obstacle_count": 20, "seed": 3 }"#,
        )
        .unwrap();
        assert_eq!(config.arena, Arena::new(300.0, 200.0));
    }

    #[test]
    fn test_huge_count_reported_without_wrapping() {
        assert_eq!(
            validate_obstacle_count(usize::MAX),
            Err(SimError::ObstacleCountOutOfRange(i64::MAX))
        );
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = SimConfig {
            seed: 1234,
            global_speed: 2.5,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(SimConfig::from_json_str(&json).unwrap(), config);
    }
}
