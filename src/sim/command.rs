//! Commands from the interaction, configuration and lifecycle surfaces
//!
//! Commands are applied between ticks, one at a time. A rejected command
//! leaves the state untouched.

use glam::DVec2;

use super::state::{ClickOutcome, SimulationState};
use crate::config;
use crate::error::SimError;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Enable ticking
    Start,
    /// Disable ticking, state retained
    Pause,
    /// Reset robot and obstacles, disable ticking
    Reset,
    /// Obstacle count as typed by the user
    SetObstacleCount(String),
    SetGlobalSpeed(f64),
    BeginPlaceStart,
    BeginPlaceGoal,
    BeginPlaceObstacles,
    /// Click on the arena, routed by the current interaction mode
    Click(DVec2),
    SetStart(DVec2),
    SetGoal(DVec2),
    /// Place the next obstacle directly (placement mode only)
    PlaceObstacle(DVec2),
    EditObstacle {
        index: usize,
        radius: f64,
        speed_multiplier: f64,
    },
}

/// What an accepted command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Done,
    Click(ClickOutcome),
}

impl Command {
    /// Apply this command to the state
    pub fn apply(self, state: &mut SimulationState) -> Result<CommandOutcome, SimError> {
        match self {
            Command::Start => state.start(),
            Command::Pause => state.pause(),
            Command::Reset => state.reset(),
            Command::SetObstacleCount(text) => {
                let count = config::parse_obstacle_count(&text)?;
                state.set_obstacle_count(count)?;
            }
            Command::SetGlobalSpeed(speed) => state.set_global_speed(speed)?,
            Command::BeginPlaceStart => state.begin_place_start(),
            Command::BeginPlaceGoal => state.begin_place_goal(),
            Command::BeginPlaceObstacles => state.begin_place_obstacles(),
            Command::Click(point) => {
                let point = config::validate_point(point)?;
                return state.click(point).map(CommandOutcome::Click);
            }
            Command::SetStart(point) => state.set_start(config::validate_point(point)?),
            Command::SetGoal(point) => state.set_goal(config::validate_point(point)?),
            Command::PlaceObstacle(point) => {
                let placement = state.place_obstacle(config::validate_point(point)?)?;
                return Ok(CommandOutcome::Click(ClickOutcome::ObstaclePlaced(placement)));
            }
            Command::EditObstacle {
                index,
                radius,
                speed_multiplier,
            } => state.edit_obstacle(index, radius, speed_multiplier)?,
        }
        Ok(CommandOutcome::Done)
    }
}
