//! Random map generation.
//!
//! Walls are scattered uniformly with replacement, then Start and End are
//! chosen by rejection sampling over the whole grid. Randomness always comes
//! from the caller's RNG so a seeded generator reproduces the same map.

use gridsearch_core::{Grid, Pos, Role};
use log::debug;
use rand::{Rng, RngExt};

use crate::error::MapError;

/// Base number of rejection-sampling draws per endpoint.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1024;

/// Map generator operating on a [`Grid`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MapGen<R> {
    /// Create a new MapGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Consume the generator and return its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// A uniformly random position on the grid.
    ///
    /// # Panics
    ///
    /// Panics if the grid has no cells.
    pub fn random_pos(&mut self) -> Pos {
        let b = self.grid.bounds();
        Pos::new(
            self.rng.random_range(0..b.rows),
            self.rng.random_range(0..b.cols),
        )
    }

    /// Place `max_walls` walls at random positions.
    ///
    /// A position drawn twice stays a single wall. Returns the number of
    /// cells that actually became walls.
    pub fn scatter_walls(&mut self, max_walls: usize) -> Result<usize, MapError> {
        if self.grid.is_empty() {
            return Err(MapError::Degenerate {
                open: 0,
                bounds: self.grid.bounds(),
            });
        }
        let mut placed = 0;
        for _ in 0..max_walls {
            let p = self.random_pos();
            if self.grid.set_wall(p)? {
                placed += 1;
            }
        }
        Ok(placed)
    }

    /// Draw positions until one is not a wall and not already an endpoint.
    fn sample_free(&mut self, role: Role) -> Result<Pos, MapError> {
        let attempts = MAX_PLACEMENT_ATTEMPTS.max(self.grid.len().saturating_mul(16));
        for _ in 0..attempts {
            let p = self.random_pos();
            let Some(cell) = self.grid.cell(p) else {
                continue;
            };
            if cell.role() == Role::Open {
                return Ok(p);
            }
        }
        Err(MapError::PlacementExhausted { role, attempts })
    }

    /// Choose the Start cell by rejection sampling.
    pub fn place_start(&mut self) -> Result<Pos, MapError> {
        let p = self.sample_free(Role::Start)?;
        self.grid.set_start(p)?;
        Ok(p)
    }

    /// Choose the End cell by rejection sampling. Start's coordinate is
    /// never accepted.
    pub fn place_end(&mut self) -> Result<Pos, MapError> {
        let p = self.sample_free(Role::End)?;
        self.grid.set_end(p)?;
        Ok(p)
    }

    /// Generate a full map: walls, Start, End, then neighbor adjacency.
    ///
    /// Fails with [`MapError::Degenerate`] when the walls leave fewer than
    /// two open cells.
    pub fn generate_map(&mut self, max_walls: usize) -> Result<(), MapError> {
        let placed = self.scatter_walls(max_walls)?;
        let open = self.grid.open_count();
        if open < 2 {
            return Err(MapError::Degenerate {
                open,
                bounds: self.grid.bounds(),
            });
        }
        let start = self.place_start()?;
        let end = self.place_end()?;
        self.grid.compute_neighbors();
        debug!(
            "generated {} map: {placed} walls from {max_walls} placements, start {start}, end {end}",
            self.grid.bounds()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(rows: i32, cols: i32, walls: usize, seed: u64) -> Result<Grid, MapError> {
        let mut mg = MapGen::with_grid(Grid::new(rows, cols), StdRng::seed_from_u64(seed));
        mg.generate_map(walls)?;
        Ok(mg.into_grid())
    }

    #[test]
    fn exactly_one_start_and_end() {
        for seed in 0..200 {
            let g = generate(8, 10, 40, seed).unwrap();
            assert_eq!(g.count(Role::Start), 1);
            assert_eq!(g.count(Role::End), 1);
            let (s, e) = (g.start().unwrap(), g.end().unwrap());
            assert_ne!(s, e);
            assert!(!g.cell(s).unwrap().is_wall());
            assert!(!g.cell(e).unwrap().is_wall());
            assert!(g.is_ready());
        }
    }

    #[test]
    fn two_cell_grid_never_coincides() {
        for seed in 0..100 {
            let g = generate(1, 2, 0, seed).unwrap();
            assert_ne!(g.start(), g.end());
        }
    }

    #[test]
    fn same_seed_same_map() {
        let a = generate(16, 16, 60, 99).unwrap();
        let b = generate(16, 16, 60, 99).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn duplicate_walls_collapse() {
        let mut mg = MapGen::with_grid(Grid::new(2, 2), StdRng::seed_from_u64(3));
        let placed = mg.scatter_walls(100).unwrap();
        assert_eq!(placed, 4);
        assert_eq!(mg.grid.count(Role::Wall), 4);
    }

    #[test]
    fn degenerate_map_fails_instead_of_hanging() {
        let err = generate(2, 2, 1000, 1).unwrap_err();
        assert!(matches!(err, MapError::Degenerate { open: 0, .. }));
    }

    #[test]
    fn empty_grid_is_degenerate() {
        assert!(matches!(
            generate(0, 5, 0, 1),
            Err(MapError::Degenerate { open: 0, .. })
        ));
    }

    #[test]
    fn walls_never_exceed_placements() {
        let g = generate(10, 10, 30, 5).unwrap();
        assert!(g.count(Role::Wall) <= 30);
    }
}
