//! Simulation state and interaction modes
//!
//! All state mutated by ticks and by user interaction lives here. Nothing in
//! this module blocks or spawns work; callers serialize access.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::{ObstacleField, Placement};
use crate::config::{self, SimConfig};
use crate::consts::*;
use crate::error::SimError;

/// What the next click on the arena means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Clicks select an obstacle for editing or move the goal
    #[default]
    Idle,
    /// Next click sets the robot position
    PlacingStart,
    /// Next click sets the goal position
    PlacingGoal,
    /// Clicks place obstacles one by one until all are placed
    PlacingObstacles,
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    StartSet,
    GoalSet,
    ObstaclePlaced(Placement),
    /// An obstacle was hit; the caller should open its editor
    ObstacleSelected(usize),
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub robot: DVec2,
    pub goal: DVec2,
    pub field: ObstacleField,
    /// Gate checked by the tick driver before each tick
    pub running: bool,
    pub mode: InteractionMode,
    /// Ticks executed since construction or the last reset
    pub ticks: u64,
    robot_start: DVec2,
    obstacle_count: usize,
    rng: Pcg32,
}

impl SimulationState {
    /// Build a state from a config with a random obstacle layout
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Default configuration with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_valid_config(&SimConfig {
            seed,
            ..Default::default()
        })
    }

    fn from_valid_config(config: &SimConfig) -> Self {
        let mut state = Self {
            seed: config.seed,
            robot: config.robot_start,
            goal: config.goal,
            field: ObstacleField::new(config.arena, config.global_speed),
            running: false,
            mode: InteractionMode::Idle,
            ticks: 0,
            robot_start: config.robot_start,
            obstacle_count: config.obstacle_count,
            rng: Pcg32::seed_from_u64(config.seed),
        };
        state
            .field
            .populate(config.obstacle_count, false, &mut state.rng);

        log::info!(
            "Simulation created: seed={} obstacles={}",
            config.seed,
            config.obstacle_count
        );
        state
    }

    /// Configured obstacle count (the field may be mid-placement)
    pub fn obstacle_count(&self) -> usize {
        self.obstacle_count
    }

    /// Whether the robot is inside the arrival threshold
    pub fn arrived(&self) -> bool {
        self.robot.distance(self.goal) < ARRIVAL_THRESHOLD
    }

    // === Lifecycle ===

    /// Enable ticking (no-op if already running)
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            log::info!("Simulation started");
        }
    }

    /// Disable ticking, keeping all state
    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Simulation paused at tick {}", self.ticks);
        }
    }

    /// Stop, put the robot back at its start, and scatter fresh obstacles.
    ///
    /// The goal stays where it is.
    pub fn reset(&mut self) {
        self.running = false;
        self.mode = InteractionMode::Idle;
        self.robot = self.robot_start;
        self.ticks = 0;
        self.field.populate(self.obstacle_count, false, &mut self.rng);
        log::info!("Simulation reset");
    }

    // === Configuration ===

    /// Change the obstacle count and rebuild a random layout
    pub fn set_obstacle_count(&mut self, count: usize) -> Result<(), SimError> {
        let count = config::validate_obstacle_count(count)?;
        self.field.rebuild(count, false, &mut self.rng)?;
        self.obstacle_count = count;
        if self.mode == InteractionMode::PlacingObstacles {
            self.mode = InteractionMode::Idle;
        }
        Ok(())
    }

    pub fn set_global_speed(&mut self, speed: f64) -> Result<(), SimError> {
        self.field.global_speed = config::validate_global_speed(speed)?;
        log::debug!("Global obstacle speed set to {:.2}", speed);
        Ok(())
    }

    /// Validate and apply new radius/speed for one obstacle
    pub fn edit_obstacle(
        &mut self,
        index: usize,
        radius: f64,
        speed_multiplier: f64,
    ) -> Result<(), SimError> {
        config::validate_edit(radius, speed_multiplier)?;
        self.field.edit(index, radius, speed_multiplier)
    }

    // === Interaction ===

    fn enter_mode(&mut self, mode: InteractionMode) {
        if self.mode == InteractionMode::PlacingObstacles && mode != InteractionMode::PlacingObstacles
        {
            self.field.cancel_placement();
        }
        log::debug!("Interaction mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    pub fn begin_place_start(&mut self) {
        self.enter_mode(InteractionMode::PlacingStart);
    }

    pub fn begin_place_goal(&mut self) {
        self.enter_mode(InteractionMode::PlacingGoal);
    }

    /// Replace the field with unplaced obstacles and wait for placement clicks
    pub fn begin_place_obstacles(&mut self) {
        self.field.populate(self.obstacle_count, true, &mut self.rng);
        self.enter_mode(InteractionMode::PlacingObstacles);
    }

    pub fn set_start(&mut self, point: DVec2) {
        self.robot = point;
    }

    pub fn set_goal(&mut self, point: DVec2) {
        self.goal = point;
    }

    /// Place the next obstacle; returns to Idle after the last one
    pub fn place_obstacle(&mut self, point: DVec2) -> Result<Placement, SimError> {
        let placement = self.field.place_next(point)?;
        if placement.complete {
            self.mode = InteractionMode::Idle;
            log::info!("All obstacles placed!");
        }
        Ok(placement)
    }

    /// Route a click on the arena according to the current mode
    pub fn click(&mut self, point: DVec2) -> Result<ClickOutcome, SimError> {
        match self.mode {
            InteractionMode::PlacingStart => {
                self.set_start(point);
                self.mode = InteractionMode::Idle;
                Ok(ClickOutcome::StartSet)
            }
            InteractionMode::PlacingGoal => {
                self.set_goal(point);
                self.mode = InteractionMode::Idle;
                Ok(ClickOutcome::GoalSet)
            }
            InteractionMode::PlacingObstacles => {
                self.place_obstacle(point).map(ClickOutcome::ObstaclePlaced)
            }
            InteractionMode::Idle => match self.field.pick(point) {
                Some(index) => Ok(ClickOutcome::ObstacleSelected(index)),
                None => {
                    self.set_goal(point);
                    Ok(ClickOutcome::GoalSet)
                }
            },
        }
    }
}
