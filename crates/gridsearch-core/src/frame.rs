//! Frame diffs for incremental renderers.

use crate::cell::{Paint, Role};
use crate::geom::Pos;
use crate::grid::Grid;

/// What a renderer needs to know to draw one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub role: Role,
    pub paint: Paint,
}

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub tile: Tile,
    pub pos: Pos,
}

/// A set of cell changes (a diff frame).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Remembers the last drawn tile of every cell.
#[derive(Clone, Debug, Default)]
pub struct FrameCache {
    tiles: Vec<Option<Tile>>,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything so the next [`compute_frame`](Self::compute_frame)
    /// reports every cell.
    pub fn invalidate(&mut self) {
        self.tiles.clear();
    }

    /// Compute the cells of `grid` that changed since the previous call.
    ///
    /// The first call, and the first call after the grid size changes,
    /// reports every cell.
    pub fn compute_frame(&mut self, grid: &Grid) -> Frame {
        if self.tiles.len() != grid.len() {
            self.tiles.clear();
            self.tiles.resize(grid.len(), None);
        }
        let mut cells = Vec::new();
        for (i, c) in grid.cells().iter().enumerate() {
            let tile = Tile {
                role: c.role(),
                paint: c.paint(),
            };
            if self.tiles[i] != Some(tile) {
                self.tiles[i] = Some(tile);
                cells.push(FrameCell {
                    tile,
                    pos: c.pos(),
                });
            }
        }
        Frame { cells }
    }
}
