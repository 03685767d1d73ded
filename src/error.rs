//! Error types for the simulation core and its configuration boundary.

use thiserror::Error;

use crate::consts::*;

/// Errors produced by simulation commands and boundary validation.
///
/// Every variant is returned before any state is touched, so a failed
/// command leaves the simulation exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Obstacle count text was not an integer.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Obstacle count outside the accepted range.
    #[error("obstacle count {0} out of range ({min}-{max})", min = MIN_OBSTACLES, max = MAX_OBSTACLES)]
    ObstacleCountOutOfRange(i64),

    /// Edited obstacle radius outside the accepted range.
    #[error(
        "obstacle radius {0} out of range ({min}-{max})",
        min = MIN_OBSTACLE_RADIUS,
        max = MAX_OBSTACLE_RADIUS
    )]
    RadiusOutOfRange(f64),

    /// Edited per-obstacle speed multiplier outside the accepted range.
    #[error(
        "speed multiplier {0} out of range ({min}-{max})",
        min = MIN_SPEED_MULTIPLIER,
        max = MAX_SPEED_MULTIPLIER
    )]
    SpeedMultiplierOutOfRange(f64),

    /// Global speed multiplier outside the accepted range (or not finite).
    #[error(
        "global speed {0} out of range ({min}-{max})",
        min = MIN_GLOBAL_SPEED,
        max = MAX_GLOBAL_SPEED
    )]
    GlobalSpeedOutOfRange(f64),

    /// An edit or placement addressed an obstacle that does not exist.
    #[error("obstacle index {index} out of range for {count} obstacles")]
    IndexOutOfRange { index: usize, count: usize },

    /// A placement arrived while the field was not awaiting one.
    #[error("obstacle field is not in placement mode")]
    NotPlacing,

    /// Arena dimensions must be positive and finite.
    #[error("invalid arena size {width}x{height}")]
    InvalidArena { width: f64, height: f64 },

    /// A point had a NaN or infinite coordinate.
    #[error("point ({x}, {y}) is not finite")]
    NonFinitePoint { x: f64, y: f64 },
}

impl SimError {
    /// Count rejection that saturates instead of wrapping for huge counts
    pub fn count_out_of_range(count: usize) -> Self {
        SimError::ObstacleCountOutOfRange(i64::try_from(count).unwrap_or(i64::MAX))
    }
}

/// Errors produced while loading a [`crate::SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] SimError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_out_of_range_mentions_bounds() {
        let msg = SimError::ObstacleCountOutOfRange(101).to_string();
        assert!(msg.contains("101"), "missing count in: {msg}");
        assert!(msg.contains("1-100"), "missing bounds in: {msg}");
    }

    #[test]
    fn test_index_out_of_range_includes_index_and_count() {
        let msg = SimError::IndexOutOfRange { index: 7, count: 3 }.to_string();
        assert!(msg.contains('7') && msg.contains('3'), "got: {msg}");
    }

    #[test]
    fn test_invalid_config_wraps_sim_error() {
        let err: ConfigError = SimError::RadiusOutOfRange(99.0).into();
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_huge_count_saturates() {
        assert_eq!(
            SimError::count_out_of_range(usize::MAX),
            SimError::ObstacleCountOutOfRange(i64::MAX)
        );
        assert_eq!(
            SimError::count_out_of_range(101),
            SimError::ObstacleCountOutOfRange(101)
        );
    }

    #[test]
    fn test_non_finite_point_displays_coordinates() {
        let msg = SimError::NonFinitePoint { x: f64::NAN, y: 2.0 }.to_string();
        assert!(msg.contains("NaN") && msg.contains('2'), "got: {msg}");
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimError>();
        assert_send_sync::<ConfigError>();
    }
}
