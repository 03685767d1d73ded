//! Bouncing obstacle field
//!
//! Obstacles drift in a straight line and bounce off the arena walls. They
//! never interact with each other or with the robot.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Axis-aligned arena, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Sub-rectangle (origin, size) where random obstacles spawn
    pub fn spawn_area(&self) -> (DVec2, DVec2) {
        let origin = DVec2::new(
            self.width / SPAWN_X_OFFSET_DIV,
            self.height / SPAWN_Y_OFFSET_DIV,
        );
        let size = DVec2::new(self.width, self.height) / SPAWN_SPAN_DIV;
        (origin, size)
    }
}

/// A moving circular obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: DVec2,
    /// Raw per-tick displacement before speed scaling (not normalized)
    pub dir: DVec2,
    pub radius: f64,
    pub speed_multiplier: f64,
}

impl Obstacle {
    pub fn new(pos: DVec2, dir: DVec2) -> Self {
        Self {
            pos,
            dir,
            radius: DEFAULT_OBSTACLE_RADIUS,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
        }
    }

    /// Displacement applied on the next tick
    #[inline]
    pub fn step(&self, global_speed: f64) -> DVec2 {
        self.dir * (global_speed * self.speed_multiplier)
    }

    /// Move one tick, then reflect any axis that ended up outside the arena.
    ///
    /// The reflection happens after the move, so an obstacle can sit up to one
    /// step outside the arena for a single tick before heading back in.
    pub fn advance(&mut self, global_speed: f64, arena: &Arena) {
        self.pos += self.step(global_speed);
        if self.pos.x < 0.0 || self.pos.x > arena.width {
            self.dir.x = -self.dir.x;
        }
        if self.pos.y < 0.0 || self.pos.y > arena.height {
            self.dir.y = -self.dir.y;
        }
    }

    /// Whether `p` is close enough to the obstacle to select it
    #[inline]
    pub fn hit_test(&self, p: DVec2) -> bool {
        self.pos.distance(p) <= self.radius + SELECT_SLOP
    }
}

/// Result of placing one obstacle by hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the obstacle just placed
    pub index: usize,
    /// True once every obstacle has a position
    pub complete: bool,
}

/// Ordered obstacle collection plus the global speed multiplier.
///
/// Order is identity: edits and placements address obstacles by index.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub arena: Arena,
    pub global_speed: f64,
    obstacles: Vec<Obstacle>,
    /// Next index awaiting manual placement (None = not placing)
    placement_cursor: Option<usize>,
}

impl ObstacleField {
    /// Create an empty field; call [`ObstacleField::rebuild`] to populate it
    pub fn new(arena: Arena, global_speed: f64) -> Self {
        Self {
            arena,
            global_speed,
            obstacles: Vec::new(),
            placement_cursor: None,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// True while obstacles are waiting to be placed by hand
    pub fn is_placing(&self) -> bool {
        self.placement_cursor.is_some()
    }

    /// Advance every obstacle by one tick (no-op while placing)
    pub fn advance(&mut self) {
        if self.is_placing() {
            return;
        }
        let arena = self.arena;
        let global_speed = self.global_speed;
        for obstacle in &mut self.obstacles {
            obstacle.advance(global_speed, &arena);
        }
    }

    /// Discard all obstacles and create `count` fresh ones.
    ///
    /// Random obstacles spawn in a fixed sub-rectangle of the arena. Manual
    /// obstacles start at an off-arena sentinel and enter placement mode.
    /// Both get a random direction with each axis in ±1.5.
    pub fn rebuild<R: Rng>(
        &mut self,
        count: usize,
        manual: bool,
        rng: &mut R,
    ) -> Result<(), SimError> {
        if !(MIN_OBSTACLES..=MAX_OBSTACLES).contains(&count) {
            return Err(SimError::count_out_of_range(count));
        }
        self.populate(count, manual, rng);
        Ok(())
    }

    /// Rebuild without the count check (count already validated)
    pub(crate) fn populate<R: Rng>(&mut self, count: usize, manual: bool, rng: &mut R) {
        self.obstacles.clear();
        let (spawn_origin, spawn_size) = self.arena.spawn_area();
        for _ in 0..count {
            let pos = if manual {
                DVec2::splat(PLACEMENT_SENTINEL)
            } else {
                DVec2::new(
                    spawn_origin.x + rng.random::<f64>() * spawn_size.x,
                    spawn_origin.y + rng.random::<f64>() * spawn_size.y,
                )
            };
            let dir = DVec2::new(
                (rng.random::<f64>() - 0.5) * 2.0 * MAX_DIRECTION_COMPONENT,
                (rng.random::<f64>() - 0.5) * 2.0 * MAX_DIRECTION_COMPONENT,
            );
            self.obstacles.push(Obstacle::new(pos, dir));
        }
        self.placement_cursor = manual.then_some(0);

        log::info!(
            "Rebuilt obstacle field: {} obstacles ({})",
            count,
            if manual { "manual" } else { "random" }
        );
    }

    /// Place the next unplaced obstacle at `point`
    pub fn place_next(&mut self, point: DVec2) -> Result<Placement, SimError> {
        let index = self.placement_cursor.ok_or(SimError::NotPlacing)?;
        let count = self.obstacles.len();
        let obstacle = self
            .obstacles
            .get_mut(index)
            .ok_or(SimError::IndexOutOfRange { index, count })?;
        obstacle.pos = point;

        let complete = index + 1 >= count;
        self.placement_cursor = if complete { None } else { Some(index + 1) };
        log::debug!("Placed obstacle {} at ({:.1}, {:.1})", index, point.x, point.y);

        Ok(Placement { index, complete })
    }

    /// Leave placement mode; unplaced obstacles keep the sentinel position
    pub fn cancel_placement(&mut self) {
        if let Some(cursor) = self.placement_cursor.take() {
            log::debug!(
                "Placement abandoned after {} of {} obstacles",
                cursor,
                self.obstacles.len()
            );
        }
    }

    /// Update radius and speed multiplier of one obstacle.
    ///
    /// Ranges are checked by the caller; only the index is validated here.
    /// Position and direction are never touched.
    pub fn edit(&mut self, index: usize, radius: f64, speed_multiplier: f64) -> Result<(), SimError> {
        let count = self.obstacles.len();
        let obstacle = self
            .obstacles
            .get_mut(index)
            .ok_or(SimError::IndexOutOfRange { index, count })?;
        obstacle.radius = radius;
        obstacle.speed_multiplier = speed_multiplier;
        log::debug!(
            "Edited obstacle {}: radius={:.1} speed={:.2}",
            index,
            radius,
            speed_multiplier
        );
        Ok(())
    }

    /// First obstacle (by index) under `point`, if any
    pub fn pick(&self, point: DVec2) -> Option<usize> {
        self.obstacles.iter().position(|o| o.hit_test(point))
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}
