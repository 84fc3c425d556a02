use std::fmt;
use std::str::FromStr;

use gridsearch_core::Grid;
use log::{debug, warn};
use thiserror::Error;

use crate::error::SearchError;
use crate::path::reconstruct_path;
use crate::report::{CostMap, Outcome, Predecessors, SearchReport};
use crate::sink::{Recorder, StepSink};
use crate::{astar, bfs, dfs, dijkstra};

/// The search strategies the engine can run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Display name, also used as the window title.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "Depth-First Search",
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
            Algorithm::AStar => "A* Search",
        }
    }

    /// Short command-line key.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }

    /// Run this algorithm on `grid`, reporting every step to `sink`.
    pub fn run<S: StepSink + ?Sized>(
        self,
        grid: &mut Grid,
        sink: &mut S,
    ) -> Result<SearchReport, SearchError> {
        match self {
            Algorithm::Dfs => run_dfs(grid, sink),
            Algorithm::Bfs => run_bfs(grid, sink),
            Algorithm::Dijkstra => run_dijkstra(grid, sink),
            Algorithm::AStar => run_astar(grid, sink),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown algorithm key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}` (expected dfs, bfs, dijkstra or astar)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key() == key || (key == "a*" && *a == Algorithm::AStar))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// Depth-first search. See [`Algorithm::Dfs`].
pub fn run_dfs<S: StepSink + ?Sized>(
    grid: &mut Grid,
    sink: &mut S,
) -> Result<SearchReport, SearchError> {
    logged(Algorithm::Dfs, dfs::search(grid, sink))
}

/// Breadth-first search. See [`Algorithm::Bfs`].
pub fn run_bfs<S: StepSink + ?Sized>(
    grid: &mut Grid,
    sink: &mut S,
) -> Result<SearchReport, SearchError> {
    logged(Algorithm::Bfs, bfs::search(grid, sink))
}

/// Dijkstra over the whole grid. See [`Algorithm::Dijkstra`].
pub fn run_dijkstra<S: StepSink + ?Sized>(
    grid: &mut Grid,
    sink: &mut S,
) -> Result<SearchReport, SearchError> {
    logged(Algorithm::Dijkstra, dijkstra::search(grid, sink))
}

/// A* with a Euclidean heuristic. See [`Algorithm::AStar`].
pub fn run_astar<S: StepSink + ?Sized>(
    grid: &mut Grid,
    sink: &mut S,
) -> Result<SearchReport, SearchError> {
    logged(Algorithm::AStar, astar::search(grid, sink))
}

fn logged(
    algorithm: Algorithm,
    res: Result<SearchReport, SearchError>,
) -> Result<SearchReport, SearchError> {
    match &res {
        Ok(r) => debug!(
            "{algorithm}: {} after {} visits, path length {:?}",
            r.summary(),
            r.visit_order.len(),
            r.path_len()
        ),
        Err(SearchError::Aborted(_)) => warn!("{algorithm}: aborted by sink"),
        Err(e) => warn!("{algorithm}: {e}"),
    }
    res
}

/// Check that `grid` can be searched and clear the marks of any previous
/// run. Returns the Start and End arena indices.
pub(crate) fn prepare(grid: &mut Grid) -> Result<(usize, usize), SearchError> {
    if !grid.has_adjacency() {
        return Err(SearchError::NotReady("neighbors have not been computed"));
    }
    let start = grid
        .start_index()
        .ok_or(SearchError::NotReady("grid has no start"))?;
    let end = grid
        .end_index()
        .ok_or(SearchError::NotReady("grid has no end"))?;
    grid.clear_marks();
    Ok((start, end))
}

/// Reconstruct the path if one was found and assemble the report.
pub(crate) fn finish<S: StepSink + ?Sized>(
    grid: &mut Grid,
    algorithm: Algorithm,
    predecessors: Predecessors,
    costs: Option<CostMap>,
    found: bool,
    mut rec: Recorder<'_, S>,
) -> Result<SearchReport, SearchError> {
    let outcome = if found {
        let path = reconstruct_path(grid, &predecessors, rec.sink())?;
        Outcome::PathFound { predecessors, path }
    } else {
        Outcome::NoPathFound
    };
    Ok(SearchReport {
        algorithm,
        visit_order: rec.into_order(),
        costs,
        outcome,
    })
}
