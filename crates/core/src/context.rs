//! Explicit ownership of the active maze and its derived data.
//!
//! One `MazeContext` replaces the process-wide maze singleton: it owns the
//! current maze, the distance field derived from it, and a generation epoch.
//! Searches capture the epoch when constructed and verify it on every step,
//! so a regeneration between steps surfaces as `StaleEpoch` instead of a
//! search silently walking a maze that no longer exists.

use crate::distance::DistanceField;
use crate::hint::build_hint_path;
use crate::mazegen::{Maze, MazeGenerator};
use crate::mazegen::seed::{WALK_STREAM, mix_seed_stream};
use crate::solve::{AStarSearch, BacktrackWalker};
use crate::types::{MazeError, Pos, START};

pub struct MazeContext {
    maze: Maze,
    field: DistanceField,
    seed: u64,
    epoch: u64,
}

impl MazeContext {
    pub fn generate(width: usize, height: usize, seed: u64) -> Result<Self, MazeError> {
        let maze = MazeGenerator::new(width, height).generate(seed)?;
        let field = DistanceField::compute(&maze, START)?;
        Ok(Self { maze, field, seed, epoch: 0 })
    }

    /// Replace the maze and its field, invalidating every captured epoch.
    /// Dimensions are kept; only the seed changes.
    pub fn regenerate(&mut self, seed: u64) -> Result<(), MazeError> {
        let generator = MazeGenerator::new(self.maze.width(), self.maze.height());
        let maze = generator.generate(seed)?;
        let field = DistanceField::compute(&maze, START)?;
        self.maze = maze;
        self.field = field;
        self.seed = seed;
        self.epoch += 1;
        Ok(())
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn field(&self) -> &DistanceField {
        &self.field
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn hint_path(&self) -> Result<Vec<Pos>, MazeError> {
        build_hint_path(&self.maze, &self.field)
    }

    pub fn astar(&self, start: Pos, goal: Pos) -> Result<AStarSearch, MazeError> {
        AStarSearch::new(self, start, goal)
    }

    /// Walker from the start to the finish, its exploration stream derived
    /// from the maze seed so a context's walk is reproducible.
    pub fn backtrack_walker(&self) -> Result<BacktrackWalker, MazeError> {
        let walk_seed = mix_seed_stream(self.seed, WALK_STREAM);
        BacktrackWalker::new(self, START, self.maze.finish(), walk_seed)
    }

    /// Walker with an explicit goal and exploration seed.
    pub fn backtrack_walker_seeded(
        &self,
        start: Pos,
        goal: Pos,
        walk_seed: u64,
    ) -> Result<BacktrackWalker, MazeError> {
        BacktrackWalker::new(self, start, goal, walk_seed)
    }

    pub(crate) fn ensure_epoch(&self, captured: u64) -> Result<(), MazeError> {
        if captured == self.epoch {
            Ok(())
        } else {
            Err(MazeError::StaleEpoch { expected: captured, actual: self.epoch })
        }
    }

    pub(crate) fn ensure_in_bounds(&self, pos: Pos) -> Result<(), MazeError> {
        if self.maze.in_bounds(pos) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                pos,
                width: self.maze.width(),
                height: self.maze.height(),
            })
        }
    }
}
