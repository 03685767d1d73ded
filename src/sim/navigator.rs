//! Potential-field navigator
//!
//! Each tick the robot takes one fixed-length step along the sum of a unit
//! attraction toward the goal and capped repulsions from nearby obstacles.
//! The controller is memoryless: the next position depends only on the
//! current positions and the global speed multiplier.

use glam::DVec2;

use super::obstacle::Obstacle;
use crate::consts::*;

/// Repulsion strength for a robot `distance` away from an obstacle centre.
///
/// Inverse-square falloff capped at [`REPULSION_CAP`], finite at zero distance.
#[inline]
pub fn repulsion_magnitude(distance: f64) -> f64 {
    (REPULSION_GAIN / (distance * distance + MAGNITUDE_EPSILON)).min(REPULSION_CAP)
}

/// Repulsive push from one obstacle (zero outside its influence radius)
pub fn repulsion_from(robot: DVec2, obstacle: &Obstacle) -> DVec2 {
    let away = robot - obstacle.pos;
    let distance = away.length();
    if distance < obstacle.radius + INFLUENCE_MARGIN {
        away / (distance + DIRECTION_EPSILON) * repulsion_magnitude(distance)
    } else {
        DVec2::ZERO
    }
}

/// Sum of repulsive pushes from every obstacle in range
pub fn total_repulsion(robot: DVec2, obstacles: &[Obstacle]) -> DVec2 {
    obstacles
        .iter()
        .fold(DVec2::ZERO, |acc, o| acc + repulsion_from(robot, o))
}

/// Robot step length for the given global obstacle speed
#[inline]
pub fn step_length(global_speed: f64) -> f64 {
    (BASE_STEP + STEP_SPEED_GAIN * global_speed).min(MAX_STEP)
}

/// Compute the robot's next position.
///
/// Returns `robot` unchanged once it is within [`ARRIVAL_THRESHOLD`] of the
/// goal. Motion resumes on a later call if the goal moves away.
pub fn step(robot: DVec2, goal: DVec2, obstacles: &[Obstacle], global_speed: f64) -> DVec2 {
    let to_goal = goal - robot;
    let distance = to_goal.length();
    if distance < ARRIVAL_THRESHOLD {
        return robot;
    }

    let attraction = to_goal / distance;
    let combined = attraction + total_repulsion(robot, obstacles);
    let heading = combined / (combined.length() + DIRECTION_EPSILON);

    robot + heading * step_length(global_speed)
}
