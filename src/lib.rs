//! Elastic Band - reactive robot navigation among moving obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacle field, navigator, state, tick)
//! - `config`: Simulation configuration and boundary validation
//! - `driver`: Frame-driven tick driver and render snapshots
//! - `error`: Error types

pub mod config;
pub mod driver;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use driver::{Frame, FrameSnapshot, TickDriver};
pub use error::{ConfigError, SimError};

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f64 = 800.0;
    pub const ARENA_HEIGHT: f64 = 600.0;

    /// Robot start position (bottom-left corner, inset 50px)
    pub const DEFAULT_ROBOT_X: f64 = 50.0;
    pub const DEFAULT_ROBOT_Y: f64 = ARENA_HEIGHT - 50.0;
    /// Goal position (top-right corner, inset 50px)
    pub const DEFAULT_GOAL_X: f64 = ARENA_WIDTH - 50.0;
    pub const DEFAULT_GOAL_Y: f64 = 50.0;
    /// Robot body radius - rendering only, the navigator treats the robot as a point
    pub const ROBOT_RADIUS: f64 = 8.0;

    /// Navigator tuning
    pub const ARRIVAL_THRESHOLD: f64 = 5.0;
    /// Distance beyond an obstacle's surface where repulsion still acts
    pub const INFLUENCE_MARGIN: f64 = 80.0;
    pub const REPULSION_GAIN: f64 = 1000.0;
    pub const REPULSION_CAP: f64 = 5.0;
    pub const BASE_STEP: f64 = 2.5;
    /// Extra robot step per unit of global obstacle speed
    pub const STEP_SPEED_GAIN: f64 = 0.5;
    pub const MAX_STEP: f64 = 6.0;
    /// Keeps 1/d² finite at d = 0
    pub const MAGNITUDE_EPSILON: f64 = 1e-3;
    /// Keeps direction normalization finite at zero length
    pub const DIRECTION_EPSILON: f64 = 1e-6;

    /// Obstacle defaults
    pub const DEFAULT_OBSTACLE_COUNT: usize = 5;
    pub const DEFAULT_OBSTACLE_RADIUS: f64 = 15.0;
    pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;
    pub const DEFAULT_GLOBAL_SPEED: f64 = 1.0;
    /// Random spawn rectangle as arena divisors: x from w/8 spanning w/2,
    /// y from h/6 spanning h/2 ([100,500) x [100,400) in the default arena)
    pub const SPAWN_X_OFFSET_DIV: f64 = 8.0;
    pub const SPAWN_Y_OFFSET_DIV: f64 = 6.0;
    pub const SPAWN_SPAN_DIV: f64 = 2.0;
    /// Per-axis random direction magnitude bound
    pub const MAX_DIRECTION_COMPONENT: f64 = 1.5;
    /// Off-arena position for obstacles awaiting manual placement
    pub const PLACEMENT_SENTINEL: f64 = -100.0;
    /// Extra click tolerance when selecting an obstacle to edit
    pub const SELECT_SLOP: f64 = 5.0;

    /// Accepted ranges at the configuration boundary
    pub const MIN_OBSTACLES: usize = 1;
    pub const MAX_OBSTACLES: usize = 100;
    pub const MIN_OBSTACLE_RADIUS: f64 = 5.0;
    pub const MAX_OBSTACLE_RADIUS: f64 = 50.0;
    pub const MIN_SPEED_MULTIPLIER: f64 = 0.0;
    pub const MAX_SPEED_MULTIPLIER: f64 = 5.0;
    pub const MIN_GLOBAL_SPEED: f64 = 0.0;
    pub const MAX_GLOBAL_SPEED: f64 = 10.0;
}

/// Default robot start position
#[inline]
pub fn default_robot() -> DVec2 {
    DVec2::new(consts::DEFAULT_ROBOT_X, consts::DEFAULT_ROBOT_Y)
}

/// Default goal position
#[inline]
pub fn default_goal() -> DVec2 {
    DVec2::new(consts::DEFAULT_GOAL_X, consts::DEFAULT_GOAL_Y)
}
