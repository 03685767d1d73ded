//! Simulation tick
//!
//! One tick moves the obstacles, then moves the robot against the
//! obstacle positions of that same tick.

use super::navigator;
use super::state::SimulationState;

/// Advance the simulation by one tick.
///
/// Does not look at `state.running`; the tick driver owns that gate.
pub fn tick(state: &mut SimulationState) {
    state.field.advance();
    state.robot = navigator::step(
        state.robot,
        state.goal,
        state.field.obstacles(),
        state.field.global_speed,
    );
    state.ticks += 1;

    log::trace!(
        "tick {} robot=({:.2}, {:.2})",
        state.ticks,
        state.robot.x,
        state.robot.y
    );
}
