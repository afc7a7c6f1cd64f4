use crate::error::Error;
use crate::maze::{Coords, Direction, Grid, Maze, PathShape, TileKind};

/// One step of the solved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub coords: Coords,
    pub shape: PathShape,
}

/// The unique route through a maze, plus the private grid copy it was
/// traced on with the route tiles marked for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Copy of the maze grid: every path cell carries its segment shape,
    /// except the finish, which keeps its marker.
    pub grid: Grid,
    /// Ordered start-to-finish path.
    pub path: Vec<PathStep>,
}

/// Finds the unique start-to-finish path of a perfect maze.
///
/// The maze is validated first: wall asymmetry or a broken spanning tree is
/// surfaced as [`Error::InvariantViolation`] rather than patched. The search
/// runs on a private copy of the grid, so the input maze stays untouched.
pub fn solve(maze: &Maze) -> crate::Result<Solution> {
    maze.validate()?;

    let mut grid = maze.grid.clone();
    grid.reset_visited();

    // Depth-first search. Because the open-wall graph is a tree, every
    // fruitless branch is fully popped before the right one resumes, so
    // the stack at termination is exactly the simple path.
    let mut stack = vec![maze.start];
    grid[maze.start].visited = true;

    loop {
        let Some(&cell) = stack.last() else {
            return Err(Error::InvariantViolation(
                "finish unreachable from start".into(),
            ));
        };
        if cell == maze.finish {
            break;
        }
        let next = grid.open_neighbours(cell).find(|&c| !grid[c].visited);
        match next {
            Some(next) => {
                grid[next].visited = true;
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }

    let mut path = Vec::with_capacity(stack.len());
    for (i, &cell) in stack.iter().enumerate() {
        // The entrance comes in from above the grid; the exit leaves
        // straight on through the finish.
        let towards_prev = if i == 0 {
            Direction::Up
        } else {
            Direction::towards(cell, stack[i - 1])
        };
        let towards_next = if i + 1 == stack.len() {
            towards_prev.opposite()
        } else {
            Direction::towards(cell, stack[i + 1])
        };
        path.push(PathStep {
            coords: cell,
            shape: PathShape::from_links(towards_prev, towards_next),
        });
    }

    // Mark the route on the copy; the finish keeps its marker so the
    // renderer still shows it.
    for step in &path[..path.len() - 1] {
        grid[step.coords].kind = TileKind::Route(step.shape);
    }

    tracing::debug!("solved maze with a {}-step path", path.len());

    Ok(Solution { grid, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;
    use crate::maze::{Algorithm, sample_2x2};

    #[test]
    fn test_known_maze_path_and_annotation() {
        let maze = sample_2x2();
        let solution = solve(&maze).unwrap();

        let coords: Vec<_> = solution.path.iter().map(|s| s.coords).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0)]);
        // Entered from above, leaves to the right.
        assert_eq!(solution.path[0].shape, PathShape::UpRight);
        // The exit continues straight out.
        assert_eq!(solution.path[1].shape, PathShape::Horizontal);

        assert_eq!(
            solution.grid[(0, 0)].kind,
            TileKind::Route(PathShape::UpRight)
        );
        assert_eq!(solution.grid[(1, 0)].kind, TileKind::Finish);
        assert_eq!(solution.grid[(0, 1)].kind, TileKind::Free);
    }

    #[test]
    fn test_path_is_a_simple_open_walk() {
        for algorithm in Algorithm::ALL {
            let maze = generators::generate(algorithm, 9, 7, Some(13)).unwrap();
            let solution = solve(&maze).unwrap();

            assert_eq!(solution.path[0].coords, maze.start);
            assert_eq!(
                solution.path[solution.path.len() - 1].coords,
                maze.finish
            );
            for (i, step) in solution.path.iter().enumerate() {
                assert!(!solution.path[..i].iter().any(|s| s.coords == step.coords));
            }
            for pair in solution.path.windows(2) {
                let side = Direction::towards(pair[0].coords, pair[1].coords);
                assert!(!maze.grid[pair[0].coords].wall(side));
            }
        }
    }

    #[test]
    fn test_input_maze_is_untouched() {
        let maze = generators::generate(Algorithm::Dfs, 6, 6, Some(2)).unwrap();
        let before = maze.clone();
        solve(&maze).unwrap();
        assert_eq!(maze, before);
    }

    #[test]
    fn test_broken_maze_is_an_invariant_violation() {
        let mut maze = sample_2x2();
        maze.grid[(0, 1)].right = true;
        maze.grid[(1, 1)].left = true; // disconnects (1, 1)
        assert!(matches!(
            solve(&maze),
            Err(Error::InvariantViolation(_))
        ));
    }
}
