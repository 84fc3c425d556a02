//! Map dimensions and wall density.

use gridsearch_core::{Bounds, Grid};
use rand::Rng;

use crate::error::MapError;
use crate::mapgen::MapGen;

/// Parameters for a generated map.
///
/// Cell dimensions derive from the pixel size by integer division, so a
/// surface that is not a whole number of tiles wide is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapConfig {
    pub width_px: u32,
    pub height_px: u32,
    pub tile_size: u32,
    /// Number of wall placements; duplicates collapse, so the final wall
    /// count may be lower.
    pub walls: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width_px: 768,
            height_px: 512,
            tile_size: 16,
            walls: 500,
        }
    }
}

impl MapConfig {
    /// Grid size in cells: `height_px / tile_size` rows by
    /// `width_px / tile_size` columns.
    pub fn bounds(&self) -> Result<Bounds, MapError> {
        if self.tile_size == 0 {
            return Err(MapError::InvalidTileSize);
        }
        let rows = (self.height_px / self.tile_size).min(i32::MAX as u32) as i32;
        let cols = (self.width_px / self.tile_size).min(i32::MAX as u32) as i32;
        let bounds = Bounds::new(rows, cols);
        if bounds.is_empty() {
            return Err(MapError::EmptyGrid {
                width_px: self.width_px,
                height_px: self.height_px,
                tile_size: self.tile_size,
            });
        }
        Ok(bounds)
    }

    /// Build a fresh grid and run full map generation on it.
    pub fn generate<R: Rng>(&self, rng: R) -> Result<Grid, MapError> {
        let bounds = self.bounds()?;
        let mut mg = MapGen::with_grid(Grid::new(bounds.rows, bounds.cols), rng);
        mg.generate_map(self.walls)?;
        Ok(mg.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_dimensions() {
        let b = MapConfig::default().bounds().unwrap();
        assert_eq!(b, Bounds::new(32, 48));
    }

    #[test]
    fn truncates_partial_tiles() {
        let cfg = MapConfig {
            width_px: 50,
            height_px: 33,
            tile_size: 16,
            walls: 0,
        };
        assert_eq!(cfg.bounds().unwrap(), Bounds::new(2, 3));
    }

    #[test]
    fn rejects_zero_tile_and_empty_grid() {
        let mut cfg = MapConfig {
            tile_size: 0,
            ..MapConfig::default()
        };
        assert_eq!(cfg.bounds(), Err(MapError::InvalidTileSize));
        cfg.tile_size = 1024;
        assert!(matches!(cfg.bounds(), Err(MapError::EmptyGrid { .. })));
    }

    #[test]
    fn generate_builds_a_ready_grid() {
        let grid = MapConfig::default()
            .generate(StdRng::seed_from_u64(7))
            .unwrap();
        assert!(grid.is_ready());
        assert_eq!(grid.len(), 32 * 48);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = MapConfig {
            width_px: 320,
            height_px: 160,
            tile_size: 8,
            walls: 42,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MapConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
