use rand::{Rng, rngs::StdRng};

use crate::maze::{Algorithm, Coords, Grid, Maze, TileKind};

/// Wilson's algorithm: loop-erased random walks attached to the growing
/// tree. Unbiased over all spanning trees, unlike the other two variants.
pub(super) fn loop_erased_walk(width: u16, height: u16, rng: &mut StdRng) -> Maze {
    let mut grid = Grid::new(width, height);

    let start = (rng.random_range(0..width), 0);
    grid[start].visited = true;
    grid[start].kind = TileKind::Start;
    grid[start].top = false;

    // Every cell except the start begins outside the tree. Draws are
    // uniform over the pool; entries carved by an earlier walk are pruned
    // lazily when drawn, which keeps seeded runs reproducible.
    let mut pool: Vec<Coords> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .filter(|&c| c != start)
        .collect();

    let mut dead_ends: Vec<Coords> = Vec::new();

    while !pool.is_empty() {
        let idx = rng.random_range(0..pool.len());
        let origin = pool[idx];
        if grid[origin].visited {
            pool.swap_remove(idx);
            continue;
        }

        dead_ends.push(origin);

        // Random walk from the origin with no visited restriction; stepping
        // onto a cell already in the trail erases the loop by truncating
        // back to that earlier occurrence.
        let mut path = vec![origin];
        loop {
            let cell = path[path.len() - 1];
            let neighbours: Vec<Coords> = grid.neighbours(cell).collect();
            let next = neighbours[rng.random_range(0..neighbours.len())];

            match path.iter().position(|&c| c == next) {
                Some(pos) => path.truncate(pos + 1),
                None => path.push(next),
            }

            // The walk stops once its tail is part of the tree.
            if grid[next].visited {
                break;
            }
        }

        // The walk attached to its tail, so the tail now has degree >= 2
        // and can no longer be a leaf.
        let tail = path[path.len() - 1];
        if let Some(pos) = dead_ends.iter().position(|&c| c == tail) {
            dead_ends.remove(pos);
        }

        for pair in path.windows(2) {
            grid.carve(pair[0], pair[1]);
            grid[pair[0]].visited = true;
        }
    }

    // The final walk's origin is never attached to by a later walk, so at
    // least one candidate always survives.
    let finish = dead_ends[rng.random_range(0..dead_ends.len())];
    grid[finish].kind = TileKind::Finish;
    grid.reset_visited();

    tracing::debug!(
        "wilson walks left {} dead-end candidates",
        dead_ends.len()
    );

    Maze {
        algorithm: Algorithm::Wilson,
        grid,
        width,
        height,
        start,
        finish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_wilson_builds_a_spanning_tree() {
        let maze = loop_erased_walk(10, 10, &mut get_rng(Some(5)));
        maze.validate().unwrap();
        assert_eq!(maze.grid.open_edge_count(), 99);
    }

    #[test]
    fn test_endpoints_across_seeds() {
        for seed in 0..20 {
            let maze = loop_erased_walk(7, 5, &mut get_rng(Some(seed)));
            assert_eq!(maze.start.1, 0);
            assert!(!maze.grid[maze.start].top);
            assert_ne!(maze.start, maze.finish);
            assert_eq!(maze.grid.open_neighbours(maze.finish).count(), 1);
        }
    }

    #[test]
    fn test_narrow_grids() {
        for seed in 0..10 {
            loop_erased_walk(1, 9, &mut get_rng(Some(seed)))
                .validate()
                .unwrap();
            loop_erased_walk(9, 1, &mut get_rng(Some(seed)))
                .validate()
                .unwrap();
        }
    }
}
