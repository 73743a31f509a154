//! Pathfinding strategies over a carved maze.
//!
//! Both searches see the maze only through the local wall-adjacency oracle
//! (`Maze::is_open`); neither reads the distance field or any other global
//! view of the graph. Each is a resumable state machine: `step` performs one
//! bounded unit of work so a caller's scheduler decides the pacing, and a
//! `run_to_completion` convenience loops for callers that do not care.

mod astar;
mod backtrack;

pub use astar::{AStarSearch, SearchStep, find_path};
pub use backtrack::{BacktrackWalker, WalkStep};
