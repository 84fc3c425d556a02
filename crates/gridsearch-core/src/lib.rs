//! **gridsearch-core**: grid graph types for search visualisation.
//!
//! This crate provides the foundational types used across the *gridsearch*
//! workspace: geometry primitives, cells with roles and paint state, the
//! arena-backed [`Grid`] with its 4-way adjacency, frame diffs for
//! renderers, and the default colour palette.

pub mod cell;
pub mod error;
pub mod frame;
pub mod geom;
pub mod grid;
pub mod style;

pub use cell::{Cell, Paint, Role};
pub use error::GridError;
pub use frame::{Frame, FrameCache, FrameCell, Tile};
pub use geom::{Bounds, Pos};
pub use grid::Grid;
pub use style::{Color, Palette};
