use serde::{Deserialize, Serialize};

/// Grid coordinate. `x` grows east, `y` grows north; ordering is (y, x).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

/// The fixed start cell of every maze.
pub const START: Pos = Pos { y: 0, x: 0 };

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    West,
    South,
    East,
    North,
}

impl Direction {
    /// Canonical scan order shared by carving, hint descent, and the walkers.
    /// Changing this order changes every seeded outcome.
    pub const ALL: [Direction; 4] =
        [Direction::West, Direction::South, Direction::East, Direction::North];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::West => (0, -1),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::North => (1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
        }
    }
}

impl Pos {
    pub fn step(self, dir: Direction) -> Pos {
        let (dy, dx) = dir.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimensions { width: usize, height: usize },
    OutOfBounds { pos: Pos, width: usize, height: usize },
    NotAdjacent { a: Pos, b: Pos },
    PathNotFound,
    StaleEpoch { expected: u64, actual: u64 },
    InternalInconsistency(&'static str),
}
