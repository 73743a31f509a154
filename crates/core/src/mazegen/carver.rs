//! Randomized depth-first spanning-tree carving (recursive backtracker).

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::distance::DistanceField;
use crate::types::{Direction, MazeError, Pos, START};

use super::model::{Cell, Maze};

pub struct MazeGenerator {
    width: usize,
    height: usize,
}

impl MazeGenerator {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Carve a perfect maze. Same seed, same dimensions, same maze.
    pub fn generate(&self, seed: u64) -> Result<Maze, MazeError> {
        if self.width < 1 || self.height < 1 {
            return Err(MazeError::InvalidDimensions { width: self.width, height: self.height });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = vec![Cell::SOLID; self.width * self.height];
        let mut maze = Maze::from_parts(self.width, self.height, cells, START);

        let mut visited = vec![false; self.width * self.height];
        visited[self.index(START)] = true;
        let mut stack = vec![START];

        while let Some(&current) = stack.last() {
            let candidates: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|dir| {
                    let next = current.step(*dir);
                    maze.in_bounds(next) && !visited[self.index(next)]
                })
                .collect();

            let Some(&dir) = pick(&mut rng, &candidates) else {
                stack.pop();
                continue;
            };

            let next = current.step(dir);
            self.open_edge(&mut maze, current, dir);
            visited[self.index(next)] = true;
            stack.push(next);
        }

        debug_assert!(visited.iter().all(|&v| v), "carving must visit every cell");

        // The finish is the cell the start is farthest from, which maximizes
        // the hint path and is reachable by construction.
        let field = DistanceField::compute(&maze, START)?;
        maze.set_finish(field.farthest());
        Ok(maze)
    }

    fn open_edge(&self, maze: &mut Maze, from: Pos, dir: Direction) {
        let next = from.step(dir);
        match dir {
            Direction::West => maze.cell_mut(from).wall_west = false,
            Direction::South => maze.cell_mut(from).wall_south = false,
            Direction::East => maze.cell_mut(next).wall_west = false,
            Direction::North => maze.cell_mut(next).wall_south = false,
        }
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

fn pick<'a, T>(rng: &mut ChaCha8Rng, slice: &'a [T]) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    slice.get(rng.next_u64() as usize % slice.len())
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use super::*;

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            MazeGenerator::new(0, 5).generate(1),
            Err(MazeError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            MazeGenerator::new(5, 0).generate(1),
            Err(MazeError::InvalidDimensions { width: 5, height: 0 })
        );
    }

    #[test]
    fn carved_maze_is_a_spanning_tree() {
        for (width, height, seed) in [(1, 1, 0), (2, 1, 7), (5, 5, 42), (9, 4, 1_000_003)] {
            let maze = MazeGenerator::new(width, height).generate(seed).expect("carve");
            assert_eq!(
                maze.open_edge_count(),
                width * height - 1,
                "open edges for {width}x{height} seed {seed}"
            );
            assert_eq!(
                reachable_cells(&maze).len(),
                width * height,
                "connectivity for {width}x{height} seed {seed}"
            );
        }
    }

    #[test]
    fn same_seed_produces_identical_walls_and_finish() {
        let a = MazeGenerator::new(8, 6).generate(123_456).expect("carve");
        let b = MazeGenerator::new(8, 6).generate(123_456).expect("carve");
        assert_eq!(a.canonical_bytes(), b.canonical_bytes());
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn different_seeds_produce_different_walls() {
        let a = MazeGenerator::new(8, 6).generate(1).expect("carve");
        let b = MazeGenerator::new(8, 6).generate(2).expect("carve");
        assert_ne!(a.canonical_bytes(), b.canonical_bytes());
    }

    #[test]
    fn finish_is_farthest_cell_from_start() {
        let maze = MazeGenerator::new(6, 6).generate(9).expect("carve");
        let field = DistanceField::compute(&maze, START).expect("field");
        let finish_distance = field.distance(maze.finish()).expect("finish in bounds");
        assert_eq!(finish_distance, field.max_distance());
    }

    fn reachable_cells(maze: &Maze) -> BTreeSet<Pos> {
        let mut seen = BTreeSet::from([START]);
        let mut queue = VecDeque::from([START]);
        while let Some(current) = queue.pop_front() {
            for next in maze.open_neighbors(current) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }
}
