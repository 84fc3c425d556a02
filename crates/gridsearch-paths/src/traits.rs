use gridsearch_core::Grid;

use crate::algorithm::{Algorithm, run_astar, run_bfs, run_dfs, run_dijkstra};
use crate::error::SearchError;
use crate::report::SearchReport;
use crate::sink::StepSink;

/// A search strategy that can be run against a prepared grid.
pub trait SearchAlgorithm {
    /// Which strategy this is.
    fn algorithm(&self) -> Algorithm;

    /// Display name of the strategy.
    fn name(&self) -> &'static str {
        self.algorithm().name()
    }

    /// Clear previous marks, search from Start to End and, if End is
    /// reached, paint the path.
    fn search(
        &self,
        grid: &mut Grid,
        sink: &mut dyn StepSink,
    ) -> Result<SearchReport, SearchError>;
}

/// Iterative pre-order depth-first search.
#[derive(Copy, Clone, Debug, Default)]
pub struct DepthFirst;

/// Breadth-first search with visit-on-enqueue.
#[derive(Copy, Clone, Debug, Default)]
pub struct BreadthFirst;

/// Full-grid Dijkstra with unit weights.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra;

/// A* guided by straight-line distance.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl SearchAlgorithm for DepthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn search(
        &self,
        grid: &mut Grid,
        sink: &mut dyn StepSink,
    ) -> Result<SearchReport, SearchError> {
        run_dfs(grid, sink)
    }
}

impl SearchAlgorithm for BreadthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn search(
        &self,
        grid: &mut Grid,
        sink: &mut dyn StepSink,
    ) -> Result<SearchReport, SearchError> {
        run_bfs(grid, sink)
    }
}

impl SearchAlgorithm for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn search(
        &self,
        grid: &mut Grid,
        sink: &mut dyn StepSink,
    ) -> Result<SearchReport, SearchError> {
        run_dijkstra(grid, sink)
    }
}

impl SearchAlgorithm for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn search(
        &self,
        grid: &mut Grid,
        sink: &mut dyn StepSink,
    ) -> Result<SearchReport, SearchError> {
        run_astar(grid, sink)
    }
}

impl Algorithm {
    /// The strategy object behind this variant.
    pub fn strategy(self) -> &'static dyn SearchAlgorithm {
        match self {
            Algorithm::Dfs => &DepthFirst,
            Algorithm::Bfs => &BreadthFirst,
            Algorithm::Dijkstra => &Dijkstra,
            Algorithm::AStar => &AStar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::TraceSink;

    #[test]
    fn strategies_match_their_variant() {
        for a in Algorithm::ALL {
            let s = a.strategy();
            assert_eq!(s.algorithm(), a);
            assert_eq!(s.name(), a.name());
        }
    }

    #[test]
    fn trait_objects_search() {
        let mut g = Grid::from_layout("S..\n...\n..E").unwrap();
        let strategies: Vec<Box<dyn SearchAlgorithm>> = vec![
            Box::new(DepthFirst),
            Box::new(BreadthFirst),
            Box::new(Dijkstra),
            Box::new(AStar),
        ];
        for s in &strategies {
            let mut t = TraceSink::new();
            let r = s.search(&mut g, &mut t).unwrap();
            assert!(r.found(), "{}", s.name());
            assert_eq!(t.visits(), r.visit_order);
        }
    }
}
