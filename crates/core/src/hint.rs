//! Steepest-descent hint path from the finish cell back to the start.

use crate::distance::DistanceField;
use crate::mazegen::Maze;
use crate::types::{Direction, MazeError, Pos};

/// Walk the distance field downhill from `maze.finish()` to the field's
/// source. Neighbors are tried in canonical order (west, south, east, north)
/// and the first strictly-descending open edge wins, so the path is unique
/// for a given maze. Output lists the pre-move coordinate of every step and
/// ends with the source cell; length never exceeds `width * height`.
pub fn build_hint_path(maze: &Maze, field: &DistanceField) -> Result<Vec<Pos>, MazeError> {
    let cap = maze.width() * maze.height();
    let mut path = Vec::new();
    let mut current = maze.finish();

    while current != field.source() {
        if path.len() + 1 >= cap {
            // The cap is defensive: a strict descent must reach the source
            // in fewer than `cap` moves, so hitting it means the field and
            // the walls disagree.
            return Err(MazeError::InternalInconsistency(
                "hint walk exceeded the cell-count cap",
            ));
        }
        path.push(current);

        let here = field.distance(current)?;
        let descent = Direction::ALL.into_iter().find(|dir| {
            maze.is_open(current, *dir)
                && field.distance(current.step(*dir)).is_ok_and(|d| d < here)
        });
        match descent {
            Some(dir) => current = current.step(dir),
            None => {
                return Err(MazeError::InternalInconsistency(
                    "hint walk reached a cell with no descending neighbor",
                ));
            }
        }
    }

    path.push(current);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mazegen::generate_maze;
    use crate::mazegen::model::Cell;
    use crate::types::START;

    #[test]
    fn hint_descends_strictly_to_the_start() {
        let maze = generate_maze(6, 5, 2024).expect("carve");
        let field = DistanceField::compute(&maze, START).expect("field");
        let path = build_hint_path(&maze, &field).expect("hint");

        assert_eq!(*path.first().expect("nonempty"), maze.finish());
        assert_eq!(*path.last().expect("nonempty"), START);
        assert!(path.len() <= maze.width() * maze.height());

        for pair in path.windows(2) {
            let d0 = field.distance(pair[0]).expect("in bounds");
            let d1 = field.distance(pair[1]).expect("in bounds");
            assert!(d1 < d0, "distance must strictly decrease along the hint");
            assert_eq!(maze.wall_between(pair[0], pair[1]), Ok(false));
        }
    }

    #[test]
    fn single_cell_maze_hint_is_just_the_start() {
        let maze = generate_maze(1, 1, 0).expect("carve");
        let field = DistanceField::compute(&maze, START).expect("field");
        assert_eq!(build_hint_path(&maze, &field), Ok(vec![START]));
    }

    #[test]
    fn stale_field_is_reported_not_truncated() {
        // Walls from one 2x2 tree, distances from another. At the finish the
        // only open neighbor has a larger recorded distance, so the descent
        // is stuck and must surface the inconsistency.
        let mut walls = vec![Cell::SOLID; 4];
        walls[1].wall_west = false; // (0,0)-(0,1)
        walls[2].wall_south = false; // (0,0)-(1,0)
        walls[3].wall_west = false; // (1,0)-(1,1)
        let maze = Maze::from_parts(2, 2, walls, Pos { y: 1, x: 1 });

        let mut other_walls = vec![Cell::SOLID; 4];
        other_walls[1].wall_west = false; // (0,0)-(0,1)
        other_walls[3].wall_south = false; // (0,1)-(1,1)
        other_walls[3].wall_west = false; // (1,0)-(1,1)
        let other = Maze::from_parts(2, 2, other_walls, Pos { y: 1, x: 1 });
        let stale_field = DistanceField::compute(&other, START).expect("field");

        assert!(matches!(
            build_hint_path(&maze, &stale_field),
            Err(MazeError::InternalInconsistency(_))
        ));
    }

    #[test]
    fn hint_can_cover_every_cell_of_a_corridor() {
        // 4x1 corridor: finish at the far end, hint covers all cells.
        let mut cells = vec![Cell::SOLID; 4];
        cells[1].wall_west = false;
        cells[2].wall_west = false;
        cells[3].wall_west = false;
        let maze = Maze::from_parts(4, 1, cells, Pos { y: 0, x: 3 });
        let field = DistanceField::compute(&maze, START).expect("field");
        let path = build_hint_path(&maze, &field).expect("hint");
        assert_eq!(
            path,
            vec![
                Pos { y: 0, x: 3 },
                Pos { y: 0, x: 2 },
                Pos { y: 0, x: 1 },
                START,
            ]
        );
    }
}
