use gridsearch_core::{Bounds, GridError, Role};
use thiserror::Error;

/// Errors raised while generating a map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("tile size must be positive")]
    InvalidTileSize,

    /// The pixel size divided by the tile size leaves no whole cell.
    #[error("a {width_px}x{height_px} px surface holds no {tile_size} px tile")]
    EmptyGrid {
        width_px: u32,
        height_px: u32,
        tile_size: u32,
    },

    /// Too few open cells remain for distinct Start and End.
    #[error("only {open} open cells left on the {bounds} grid, need at least 2")]
    Degenerate { open: usize, bounds: Bounds },

    /// Rejection sampling gave up.
    #[error("no free cell for {role:?} after {attempts} attempts")]
    PlacementExhausted { role: Role, attempts: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}
