//! Uninformed depth-first walk with undo-on-dead-end.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::context::MazeContext;
use crate::types::{Direction, MazeError, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStep {
    /// Moved forward onto an unvisited cell.
    Advancing(Pos),
    /// Dead end: popped the path stack and moved back to the previous cell.
    Retreating(Pos),
    /// The current cell is the goal.
    Reached,
    /// Retreated all the way to the start with nothing left to try; all walk
    /// state was cleared. In a carved maze this cannot happen before the
    /// goal is found (the tree has a path to everywhere), so a restart
    /// signals an adjacency oracle that disagrees with the maze.
    Restarted,
}

pub struct BacktrackWalker {
    start: Pos,
    goal: Pos,
    epoch: u64,
    rng: ChaCha8Rng,
    stack: Vec<Pos>,
    visited: BTreeSet<Pos>,
    last_dir: Option<Direction>,
}

impl BacktrackWalker {
    pub fn new(
        ctx: &MazeContext,
        start: Pos,
        goal: Pos,
        walk_seed: u64,
    ) -> Result<Self, MazeError> {
        ctx.ensure_in_bounds(start)?;
        ctx.ensure_in_bounds(goal)?;
        Ok(Self {
            start,
            goal,
            epoch: ctx.epoch(),
            rng: ChaCha8Rng::seed_from_u64(walk_seed),
            stack: vec![start],
            visited: BTreeSet::from([start]),
            last_dir: None,
        })
    }

    /// One advance-or-retreat transition. Idempotent at the goal: further
    /// calls keep reporting `Reached`.
    pub fn step(&mut self, ctx: &MazeContext) -> Result<WalkStep, MazeError> {
        ctx.ensure_epoch(self.epoch)?;

        let current = *self
            .stack
            .last()
            .expect("walk stack always holds at least the start");
        if current == self.goal {
            return Ok(WalkStep::Reached);
        }

        // Forward candidates: open, unvisited, and not an immediate reversal
        // of the previous move when an alternative exists.
        let candidates: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|dir| {
                ctx.maze().is_open(current, *dir)
                    && !self.visited.contains(&current.step(*dir))
                    && Some(dir.reverse()) != self.last_dir
            })
            .collect();

        if let Some(&dir) = pick(&mut self.rng, &candidates) {
            let next = current.step(dir);
            self.visited.insert(next);
            self.stack.push(next);
            self.last_dir = Some(dir);
            return Ok(WalkStep::Advancing(next));
        }

        if self.stack.len() > 1 {
            self.stack.pop();
            let previous = *self.stack.last().expect("stack still holds the start");
            let back = Direction::ALL
                .into_iter()
                .find(|dir| current.step(*dir) == previous)
                .ok_or(MazeError::InternalInconsistency(
                    "walk stack lost cell adjacency",
                ))?;
            self.last_dir = Some(back);
            return Ok(WalkStep::Retreating(previous));
        }

        // Branch exhausted at the start. Clear everything and begin again.
        self.visited.clear();
        self.visited.insert(self.start);
        self.stack.clear();
        self.stack.push(self.start);
        self.last_dir = None;
        Ok(WalkStep::Restarted)
    }

    /// Drive the walk until the goal. The step budget is the depth-first
    /// bound of one push and one pop per cell; exceeding it means a broken
    /// invariant upstream, reported rather than looped on.
    pub fn run_to_completion(&mut self, ctx: &MazeContext) -> Result<Vec<Pos>, MazeError> {
        let budget = 2 * ctx.maze().width() * ctx.maze().height();
        let mut steps = 0;
        loop {
            if let WalkStep::Reached = self.step(ctx)? {
                return Ok(self.stack.clone());
            }
            steps += 1;
            if steps > budget {
                return Err(MazeError::InternalInconsistency(
                    "backtracking walk exceeded its step bound",
                ));
            }
        }
    }

    /// The simple path walked so far, start to current cell.
    pub fn path(&self) -> &[Pos] {
        &self.stack
    }
}

fn pick<'a, T>(rng: &mut ChaCha8Rng, slice: &'a [T]) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    slice.get(rng.next_u64() as usize % slice.len())
}
