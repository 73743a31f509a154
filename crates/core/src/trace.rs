//! Recorded solver runs and deterministic replay verification.
//!
//! A trace captures everything needed to reproduce a run: dimensions, the
//! generation seed, the solver, and its exploration seed. Replaying
//! regenerates the maze and re-runs the solver, then verifies the recorded
//! position sequence step by step. A divergence means the engine's
//! determinism contract broke between recording and replay.

use serde::{Deserialize, Serialize};

use crate::context::MazeContext;
use crate::mazegen::generate_maze;
use crate::solve::{self, WalkStep};
use crate::types::{MazeError, Pos, START};

pub const TRACE_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverKind {
    AStar,
    Backtrack,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveTrace {
    pub format_version: u16,
    pub width: usize,
    pub height: usize,
    pub maze_seed: u64,
    pub solver: SolverKind,
    /// Exploration stream seed; zero (and ignored) for A*.
    pub walk_seed: u64,
    /// Every position the agent occupied, in order, start through goal.
    pub positions: Vec<Pos>,
}

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    Solve(MazeError),
    LengthMismatch { expected: usize, actual: usize },
    Divergence { index: usize, expected: Pos, actual: Pos },
}

#[derive(Debug, PartialEq)]
pub struct ReplayReport {
    pub steps: usize,
    pub maze_fingerprint: u64,
}

pub fn record_astar(width: usize, height: usize, maze_seed: u64) -> Result<SolveTrace, MazeError> {
    let ctx = MazeContext::generate(width, height, maze_seed)?;
    let positions = solve::find_path(&ctx, START, ctx.maze().finish())?;
    Ok(SolveTrace {
        format_version: TRACE_FORMAT_VERSION,
        width,
        height,
        maze_seed,
        solver: SolverKind::AStar,
        walk_seed: 0,
        positions,
    })
}

pub fn record_backtrack(
    width: usize,
    height: usize,
    maze_seed: u64,
    walk_seed: u64,
) -> Result<SolveTrace, MazeError> {
    let ctx = MazeContext::generate(width, height, maze_seed)?;
    let goal = ctx.maze().finish();
    let mut walker = ctx.backtrack_walker_seeded(START, goal, walk_seed)?;

    // Same budget rule as `run_to_completion`, but recording each occupied
    // position rather than only the surviving stack.
    let mut positions = vec![START];
    let budget = 2 * width * height;
    let mut steps = 0;
    loop {
        match walker.step(&ctx)? {
            WalkStep::Advancing(pos) | WalkStep::Retreating(pos) => positions.push(pos),
            WalkStep::Reached => break,
            WalkStep::Restarted => positions.push(START),
        }
        steps += 1;
        if steps > budget {
            return Err(MazeError::InternalInconsistency(
                "backtracking walk exceeded its step bound",
            ));
        }
    }

    Ok(SolveTrace {
        format_version: TRACE_FORMAT_VERSION,
        width,
        height,
        maze_seed,
        solver: SolverKind::Backtrack,
        walk_seed,
        positions,
    })
}

/// Re-run a recorded solve and verify positional equality.
pub fn replay(trace: &SolveTrace) -> Result<ReplayReport, ReplayError> {
    let fresh = match trace.solver {
        SolverKind::AStar => record_astar(trace.width, trace.height, trace.maze_seed),
        SolverKind::Backtrack => {
            record_backtrack(trace.width, trace.height, trace.maze_seed, trace.walk_seed)
        }
    }
    .map_err(ReplayError::Solve)?;

    if fresh.positions.len() != trace.positions.len() {
        return Err(ReplayError::LengthMismatch {
            expected: trace.positions.len(),
            actual: fresh.positions.len(),
        });
    }
    for (index, (expected, actual)) in
        trace.positions.iter().zip(fresh.positions.iter()).enumerate()
    {
        if expected != actual {
            return Err(ReplayError::Divergence {
                index,
                expected: *expected,
                actual: *actual,
            });
        }
    }

    let maze = generate_maze(trace.width, trace.height, trace.maze_seed)
        .map_err(ReplayError::Solve)?;
    Ok(ReplayReport { steps: trace.positions.len(), maze_fingerprint: maze.fingerprint() })
}
