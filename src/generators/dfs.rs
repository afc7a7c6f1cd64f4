use rand::{Rng, rngs::StdRng};

use crate::maze::{Algorithm, Coords, Grid, Maze, TileKind};

/// Depth-first carving with an explicit stack (the recursive backtracker).
/// Biased towards long winding corridors.
pub(super) fn recursive_backtrack(width: u16, height: u16, rng: &mut StdRng) -> Maze {
    let mut grid = Grid::new(width, height);

    // The entrance breaches the top border.
    let start = (rng.random_range(0..width), 0);
    grid[start].visited = true;
    grid[start].kind = TileKind::Start;
    grid[start].top = false;

    let mut stack = vec![start];
    let mut dead_ends: Vec<Coords> = Vec::new();
    // Set while backtracking, so only the first cell of a backtracking run
    // is recorded as a dead end; the pops along the same branch are not.
    let mut met_end = false;

    while let Some(&cell) = stack.last() {
        let neighbours: Vec<Coords> = grid
            .neighbours(cell)
            .filter(|&c| !grid[c].visited)
            .collect();

        if neighbours.is_empty() {
            if cell == start {
                break;
            }
            if !met_end {
                met_end = true;
                dead_ends.push(cell);
            }
            stack.pop();
        } else {
            met_end = false;
            let next = neighbours[rng.random_range(0..neighbours.len())];
            grid.carve(cell, next);
            grid[next].visited = true;
            stack.push(next);
        }
    }

    // Any grid with at least two cells exhausts at least one non-start
    // branch tip, so the candidate list is never empty here.
    let finish = dead_ends[rng.random_range(0..dead_ends.len())];
    grid[finish].kind = TileKind::Finish;
    grid.reset_visited();

    tracing::debug!("dfs carve recorded {} dead-end candidates", dead_ends.len());

    Maze {
        algorithm: Algorithm::Dfs,
        grid,
        width,
        height,
        start,
        finish,
    }
}
