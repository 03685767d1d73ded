//! Deterministic simulation module
//!
//! All navigation and obstacle logic lives here. This module must be pure and
//! deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable obstacle order (index is identity)
//! - No rendering or platform dependencies

pub mod command;
pub mod navigator;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use command::{Command, CommandOutcome};
pub use navigator::{repulsion_magnitude, step, step_length};
pub use obstacle::{Arena, Obstacle, ObstacleField, Placement};
pub use state::{ClickOutcome, InteractionMode, SimulationState};
pub use tick::tick;
