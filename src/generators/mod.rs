use rand::{SeedableRng, rngs::StdRng};

mod dfs;
mod prim;
mod wilson;

use crate::error::Error;
use crate::maze::{Algorithm, Maze};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze with the chosen algorithm.
///
/// Dimensions must be positive and leave room for a finish distinct from
/// the entrance, so `width * height < 2` is rejected. Prim's variant also
/// needs an interior column for its root, so it rejects `width < 2`.
/// Passing a seed makes the result reproducible.
pub fn generate(
    algorithm: Algorithm,
    width: u16,
    height: u16,
    seed: Option<u64>,
) -> crate::Result<Maze> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension {
            width,
            height,
            reason: "dimensions must be positive",
        });
    }
    if width as u32 * (height as u32) < 2 {
        return Err(Error::InvalidDimension {
            width,
            height,
            reason: "a 1x1 maze has no room for a finish distinct from the start",
        });
    }
    if algorithm == Algorithm::Prim && width < 2 {
        return Err(Error::InvalidDimension {
            width,
            height,
            reason: "prim needs an interior column for its root",
        });
    }

    let mut rng = get_rng(seed);
    let maze = match algorithm {
        Algorithm::Dfs => dfs::recursive_backtrack(width, height, &mut rng),
        Algorithm::Wilson => wilson::loop_erased_walk(width, height, &mut rng),
        Algorithm::Prim => prim::weighted_prim(width, height, &mut rng),
    };
    tracing::info!("generated {}x{} maze via {}", width, height, algorithm);
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_algorithm_yields_a_perfect_maze() {
        for algorithm in Algorithm::ALL {
            for (width, height) in [(2, 2), (5, 5), (12, 7), (3, 16)] {
                let maze = generate(algorithm, width, height, Some(42)).unwrap();
                maze.validate().unwrap();
                assert_eq!(maze.algorithm, algorithm);
                assert_eq!((maze.width, maze.height), (width, height));
                // The finish is a true dead end of the spanning tree.
                assert_eq!(maze.grid.open_neighbours(maze.finish).count(), 1);
                // Visited markers are cleared before the maze is returned.
                for y in 0..height {
                    for x in 0..width {
                        assert!(!maze.grid[(x, y)].visited);
                    }
                }
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_maze() {
        for algorithm in Algorithm::ALL {
            let first = generate(algorithm, 9, 9, Some(7)).unwrap();
            let second = generate(algorithm, 9, 9, Some(7)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        for algorithm in Algorithm::ALL {
            assert!(matches!(
                generate(algorithm, 0, 5, None),
                Err(Error::InvalidDimension { .. })
            ));
            assert!(matches!(
                generate(algorithm, 5, 0, None),
                Err(Error::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn test_single_cell_maze_is_rejected() {
        // A 1x1 maze cannot satisfy start/finish distinctness.
        assert!(matches!(
            generate(Algorithm::Dfs, 1, 1, None),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_prim_needs_two_columns() {
        assert!(matches!(
            generate(Algorithm::Prim, 1, 8, None),
            Err(Error::InvalidDimension { .. })
        ));
        generate(Algorithm::Prim, 2, 8, None).unwrap();
    }

    #[test]
    fn test_single_row_and_single_column_mazes() {
        for algorithm in [Algorithm::Dfs, Algorithm::Wilson] {
            generate(algorithm, 1, 6, Some(3)).unwrap().validate().unwrap();
            generate(algorithm, 6, 1, Some(3)).unwrap().validate().unwrap();
        }
        generate(Algorithm::Prim, 6, 1, Some(3)).unwrap().validate().unwrap();
    }
}
