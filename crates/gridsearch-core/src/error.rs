use thiserror::Error;

use crate::cell::Role;
use crate::geom::{Bounds, Pos};

/// Errors raised while building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The position lies outside the grid.
    #[error("position {pos} is outside the {bounds} grid")]
    OutOfBounds { pos: Pos, bounds: Bounds },

    /// Start and End may never be placed on a wall, nor a wall on them.
    #[error("cannot combine a wall with the {role:?} cell at {pos}")]
    WallEndpoint { pos: Pos, role: Role },

    /// Start and End must be distinct cells.
    #[error("start and end cannot share position {pos}")]
    CoincidentEndpoints { pos: Pos },

    /// Roles are frozen once neighbor adjacency has been computed.
    #[error("grid roles are frozen after neighbor computation")]
    Frozen,

    /// A layout line has a different width than the first one.
    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A layout contains a character outside the layout alphabet.
    #[error("layout contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")]
    UnknownGlyph { ch: char, pos: Pos },

    /// A layout did not mark one of the endpoints.
    #[error("layout has no {0:?} cell")]
    MissingEndpoint(Role),

    /// A layout marked an endpoint more than once.
    #[error("layout marks a second {role:?} cell at {pos}")]
    DuplicateEndpoint { role: Role, pos: Pos },
}
