mod grid;
pub mod tile;

use std::fmt;

pub use grid::Grid;
pub use tile::{PathShape, Tile, TileKind};

use crate::error::Error;

/// Cell coordinates, `(x, y)` with x the column and y the row.
pub type Coords = (u16, u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction from `from` towards an adjacent cell `to`.
    ///
    /// # Panics
    /// If the two coordinates are identical.
    pub fn towards(from: Coords, to: Coords) -> Direction {
        if to.0 < from.0 {
            Direction::Left
        } else if to.0 > from.0 {
            Direction::Right
        } else if to.1 < from.1 {
            Direction::Up
        } else if to.1 > from.1 {
            Direction::Down
        } else {
            panic!("no direction between identical coordinates")
        }
    }
}

/// The spanning-tree construction algorithm a maze was generated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dfs,
    Wilson,
    Prim,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dfs, Algorithm::Wilson, Algorithm::Prim];

    /// Canonical tag, persisted by the codec.
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Wilson => "wilson",
            Algorithm::Prim => "prim",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Algorithm> {
        match tag {
            "dfs" => Some(Algorithm::Dfs),
            "wilson" => Some(Algorithm::Wilson),
            "prim" => Some(Algorithm::Prim),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A generated labyrinth. Created wholesale by one generator call and
/// immutable afterwards; the solver works on a private copy of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    pub algorithm: Algorithm,
    pub grid: Grid,
    pub width: u16,
    pub height: u16,
    pub start: Coords,
    pub finish: Coords,
}

impl Maze {
    /// Checks the structural contract every generated maze satisfies: wall
    /// symmetry, a closed outer boundary breached only at the entrance, and
    /// a spanning tree over the open-wall graph. A failure is a programming
    /// error in whatever produced the maze and is surfaced, never patched.
    pub fn validate(&self) -> crate::Result<()> {
        fn violation(reason: &str) -> Error {
            Error::InvariantViolation(reason.into())
        }

        if self.grid.width() != self.width || self.grid.height() != self.height {
            return Err(violation("grid dimensions disagree with the maze header"));
        }
        if !self.grid.contains(self.start) || !self.grid.contains(self.finish) {
            return Err(violation("start or finish lies outside the grid"));
        }
        if self.start == self.finish {
            return Err(violation("start and finish must be distinct"));
        }
        if self.start.1 != 0 || self.grid[self.start].top {
            return Err(violation("the entrance must breach the top border"));
        }
        if !self.grid.is_wall_symmetric() {
            return Err(violation("adjacent cells disagree about their shared wall"));
        }
        for x in 0..self.width {
            if (x, 0) != self.start && !self.grid[(x, 0)].top {
                return Err(violation("top border must be closed away from the entrance"));
            }
            if !self.grid[(x, self.height - 1)].bottom {
                return Err(violation("bottom border must be closed"));
            }
        }
        for y in 0..self.height {
            if !self.grid[(0, y)].left || !self.grid[(self.width - 1, y)].right {
                return Err(violation("side borders must be closed"));
            }
        }
        let cells = self.width as usize * self.height as usize;
        if self.grid.open_edge_count() != cells - 1 {
            return Err(violation("open-wall edge count does not form a spanning tree"));
        }
        if !self.grid.fully_connected_from(self.start) {
            return Err(violation("some cells are unreachable from the entrance"));
        }
        Ok(())
    }
}

/// A hand-carved 2x2 maze used as a known-answer fixture across test
/// modules: entrance at (0, 0), finish dead end at (1, 0).
#[cfg(test)]
pub(crate) fn sample_2x2() -> Maze {
    let mut grid = Grid::new(2, 2);
    grid.carve((0, 0), (1, 0));
    grid.carve((0, 0), (0, 1));
    grid.carve((0, 1), (1, 1));
    grid[(0, 0)].top = false;
    grid[(0, 0)].kind = TileKind::Start;
    grid[(1, 0)].kind = TileKind::Finish;
    Maze {
        algorithm: Algorithm::Dfs,
        grid,
        width: 2,
        height: 2,
        start: (0, 0),
        finish: (1, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_towards_and_opposite() {
        assert_eq!(Direction::towards((1, 1), (0, 1)), Direction::Left);
        assert_eq!(Direction::towards((1, 1), (2, 1)), Direction::Right);
        assert_eq!(Direction::towards((1, 1), (1, 0)), Direction::Up);
        assert_eq!(Direction::towards((1, 1), (1, 2)), Direction::Down);
        for side in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn test_algorithm_tags_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_tag(algorithm.tag()), Some(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.tag());
        }
        assert_eq!(Algorithm::from_tag("kruskal"), None);
    }

    #[test]
    fn test_sample_maze_is_valid() {
        let maze = sample_2x2();
        maze.validate().unwrap();
        // The finish is a true dead end.
        assert_eq!(maze.grid.open_neighbours(maze.finish).count(), 1);
    }

    #[test]
    fn test_validate_rejects_wall_asymmetry() {
        let mut maze = sample_2x2();
        maze.grid[(0, 0)].right = true; // leave (1, 0).left open
        assert!(matches!(
            maze.validate(),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_swapped_endpoints() {
        let mut maze = sample_2x2();
        maze.finish = maze.start;
        assert!(matches!(
            maze.validate(),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_extra_edge() {
        let mut maze = sample_2x2();
        maze.grid.carve((1, 0), (1, 1)); // closes the cycle
        assert!(matches!(
            maze.validate(),
            Err(Error::InvariantViolation(_))
        ));
    }
}
