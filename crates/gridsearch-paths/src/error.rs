use thiserror::Error;

use crate::sink::Abort;

/// Errors that end a search run early.
///
/// An unreachable End is not an error; it is reported as
/// [`Outcome::NoPathFound`](crate::Outcome::NoPathFound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The step sink asked to stop.
    #[error("search aborted: {0}")]
    Aborted(#[from] Abort),

    /// The grid lacks adjacency or an endpoint.
    #[error("grid is not ready for searching: {0}")]
    NotReady(&'static str),
}
