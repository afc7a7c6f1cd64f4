use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::{Rng, rngs::StdRng};

use crate::maze::{Algorithm, Coords, Grid, Maze, TileKind};

/// Frontier edge of the growing tree. Field order gives the natural
/// `(cost, from, to)` tie break when edges compare equal on cost.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Edge {
    cost: u32,
    from: Coords,
    to: Coords,
}

/// Prim's algorithm over a synthetic height map: every cell gets a random
/// level in `[1, width * height]` and an edge costs the level gap between
/// its endpoints, which biases the tree towards level plateaus.
pub(super) fn weighted_prim(width: u16, height: u16, rng: &mut StdRng) -> Maze {
    let mut grid = Grid::new(width, height);

    let max_level = width as u32 * height as u32;
    let levels: Vec<u32> = (0..width as usize * height as usize)
        .map(|_| rng.random_range(1..=max_level))
        .collect();
    let level = |c: Coords| levels[c.1 as usize * width as usize + c.0 as usize];

    // The internal root comes from an interior column; the caller already
    // rejected width < 2.
    let root = (rng.random_range(1..width), rng.random_range(0..height));
    grid[root].visited = true;

    let mut frontier = BinaryHeap::new();
    let mut dead_ends: Vec<Coords> = Vec::new();

    for neighbour in grid.neighbours(root) {
        frontier.push(Reverse(Edge {
            cost: level(root).abs_diff(level(neighbour)),
            from: root,
            to: neighbour,
        }));
    }

    while let Some(Reverse(edge)) = frontier.pop() {
        // Destinations carved since the edge was enqueued are stale;
        // skipping them here is the frontier prune.
        if grid[edge.to].visited {
            continue;
        }

        grid.carve(edge.from, edge.to);
        grid[edge.to].visited = true;

        let neighbours: Vec<Coords> = grid
            .neighbours(edge.to)
            .filter(|&c| !grid[c].visited)
            .collect();
        // A cell with nowhere left to grow at visit time keeps degree 1.
        if neighbours.is_empty() {
            dead_ends.push(edge.to);
        }
        for neighbour in neighbours {
            frontier.push(Reverse(Edge {
                cost: level(edge.to).abs_diff(level(neighbour)),
                from: edge.to,
                to: neighbour,
            }));
        }
    }

    // The entrance is chosen by position alone and may differ from the
    // internal root.
    let start = (rng.random_range(0..width), 0);
    grid[start].top = false;
    grid[start].kind = TileKind::Start;

    // An entrance is never also the exit.
    if let Some(pos) = dead_ends.iter().position(|&c| c == start) {
        dead_ends.remove(pos);
    }

    if dead_ends.is_empty() {
        // Tiny grids can lose their only recorded candidate to the start;
        // fall back to the true leaves of the finished tree. A tree with at
        // least two cells has at least two leaves, so one survives.
        dead_ends = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&c| c != start && grid.open_neighbours(c).count() == 1)
            .collect();
    }

    let finish = dead_ends[rng.random_range(0..dead_ends.len())];
    grid[finish].kind = TileKind::Finish;
    grid.reset_visited();

    tracing::debug!("prim kept {} dead-end candidates", dead_ends.len());

    Maze {
        algorithm: Algorithm::Prim,
        grid,
        width,
        height,
        start,
        finish,
    }
}
