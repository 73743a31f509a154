//! Perfect-maze generation domain split into coherent submodules.

pub mod model;

mod carver;
pub(crate) mod seed;

pub use carver::MazeGenerator;
pub use model::{Cell, Maze};

use crate::types::MazeError;

pub fn generate_maze(width: usize, height: usize, seed: u64) -> Result<Maze, MazeError> {
    MazeGenerator::new(width, height).generate(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_maze_matches_generator_output() {
        let from_helper = generate_maze(7, 4, 99).expect("carve");
        let from_generator = MazeGenerator::new(7, 4).generate(99).expect("carve");
        assert_eq!(from_helper, from_generator);
    }
}
