//! Frame-driven tick driver
//!
//! Owns the simulation state. Commands submitted between frames are queued
//! and applied at the start of the next frame, before the tick, so no
//! command ever lands in the middle of a tick.

use std::collections::VecDeque;

use glam::DVec2;
use serde::Serialize;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::sim::{Command, CommandOutcome, InteractionMode, SimulationState, tick};

/// What the renderer needs to draw one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub pos: DVec2,
    pub radius: f64,
}

/// Read-only view of the simulation after a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub running: bool,
    pub mode: InteractionMode,
    pub robot: DVec2,
    pub goal: DVec2,
    pub obstacles: Vec<ObstacleView>,
}

impl FrameSnapshot {
    pub fn capture(state: &SimulationState) -> Self {
        Self {
            tick: state.ticks,
            running: state.running,
            mode: state.mode,
            robot: state.robot,
            goal: state.goal,
            obstacles: state
                .field
                .obstacles()
                .iter()
                .map(|o| ObstacleView {
                    pos: o.pos,
                    radius: o.radius,
                })
                .collect(),
        }
    }
}

/// Result of one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Whether a tick ran this frame
    pub ticked: bool,
    /// Results of the commands applied this frame, in submission order
    pub results: Vec<Result<CommandOutcome, SimError>>,
    pub snapshot: FrameSnapshot,
}

pub struct TickDriver {
    state: SimulationState,
    pending: VecDeque<Command>,
}

impl TickDriver {
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        Ok(Self::from_state(SimulationState::new(config)?))
    }

    pub fn from_state(state: SimulationState) -> Self {
        Self {
            state,
            pending: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Queue a command for the next frame
    pub fn submit(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Apply a command immediately (between frames)
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, SimError> {
        let result = command.clone().apply(&mut self.state);
        if let Err(e) = &result {
            log::warn!("Rejected {:?}: {}", command, e);
        }
        result
    }

    /// Run one frame: drain queued commands, then tick once if running
    pub fn frame(&mut self) -> Frame {
        let mut results = Vec::with_capacity(self.pending.len());
        while let Some(command) = self.pending.pop_front() {
            results.push(self.apply(command));
        }

        let ticked = self.state.running;
        if ticked {
            tick(&mut self.state);
        }

        Frame {
            ticked,
            results,
            snapshot: self.snapshot(),
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }
}
