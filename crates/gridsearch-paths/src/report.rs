use gridsearch_core::{Bounds, Pos};

use crate::algorithm::Algorithm;

/// Sentinel cost meaning "not reached".
pub const UNREACHABLE: u32 = u32::MAX;

/// Predecessor of each discovered cell on its best-known path, indexed by
/// arena position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessors {
    bounds: Bounds,
    parents: Vec<Option<usize>>,
}

impl Predecessors {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            parents: vec![None; bounds.len()],
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, child: usize, parent: usize) {
        self.parents[child] = Some(parent);
    }

    /// Arena index of the predecessor of arena index `idx`.
    #[inline]
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.parents.get(idx).copied().flatten()
    }

    /// Predecessor of `p`.
    pub fn get(&self, p: Pos) -> Option<Pos> {
        let i = self.bounds.index(p)?;
        self.parent(i).map(|pi| self.bounds.pos(pi))
    }

    /// Number of cells that have a predecessor.
    pub fn len(&self) -> usize {
        self.parents.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(cell, predecessor)` pairs in row-major order of the cell.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Pos)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|pi| (self.bounds.pos(i), self.bounds.pos(pi))))
    }
}

/// Best-known distance of each cell from Start, indexed by arena position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMap {
    bounds: Bounds,
    costs: Vec<u32>,
}

impl CostMap {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            costs: vec![UNREACHABLE; bounds.len()],
        }
    }

    /// Raw cost at arena index `idx`; [`UNREACHABLE`] if never reached.
    #[inline]
    pub fn cost(&self, idx: usize) -> u32 {
        self.costs[idx]
    }

    #[inline]
    pub(crate) fn set(&mut self, idx: usize, cost: u32) {
        self.costs[idx] = cost;
    }

    /// Cost at `p`, or `None` if out of bounds or unreached.
    pub fn at(&self, p: Pos) -> Option<u32> {
        let c = self.costs[self.bounds.index(p)?];
        (c != UNREACHABLE).then_some(c)
    }

    /// Every reached cell with its cost, row-major.
    pub fn reached(&self) -> impl Iterator<Item = (Pos, u32)> + '_ {
        self.costs
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != UNREACHABLE)
            .map(|(i, c)| (self.bounds.pos(i), *c))
    }
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    PathFound {
        predecessors: Predecessors,
        /// Start to End inclusive.
        path: Vec<Pos>,
    },
    NoPathFound,
}

/// Everything a search run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    /// Cells in the order they were marked visited.
    pub visit_order: Vec<Pos>,
    /// Best-known distances, for strategies that track them.
    pub costs: Option<CostMap>,
    pub outcome: Outcome,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        matches!(self.outcome, Outcome::PathFound { .. })
    }

    /// The path from Start to End, if one was found.
    pub fn path(&self) -> Option<&[Pos]> {
        match &self.outcome {
            Outcome::PathFound { path, .. } => Some(path),
            Outcome::NoPathFound => None,
        }
    }

    /// Path length in steps (edges).
    pub fn path_len(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }

    /// Human-readable result line.
    pub fn summary(&self) -> &'static str {
        if self.found() {
            "A path was found"
        } else {
            "No path could be found!!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predecessors_translate_positions() {
        let b = Bounds::new(2, 3);
        let mut p = Predecessors::new(b);
        assert!(p.is_empty());
        p.set(4, 1);
        assert_eq!(p.get(Pos::new(1, 1)), Some(Pos::new(0, 1)));
        assert_eq!(p.get(Pos::new(0, 0)), None);
        assert_eq!(p.get(Pos::new(9, 9)), None);
        assert_eq!(p.parent(4), Some(1));
        assert_eq!(p.len(), 1);
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![(Pos::new(1, 1), Pos::new(0, 1))]);
    }

    #[test]
    fn cost_map_hides_sentinel() {
        let mut c = CostMap::new(Bounds::new(1, 3));
        c.set(2, 5);
        assert_eq!(c.at(Pos::new(0, 2)), Some(5));
        assert_eq!(c.at(Pos::new(0, 0)), None);
        assert_eq!(c.cost(0), UNREACHABLE);
        assert_eq!(c.reached().collect::<Vec<_>>(), vec![(Pos::new(0, 2), 5)]);
    }

    #[test]
    fn report_path_len_counts_edges() {
        let r = SearchReport {
            algorithm: Algorithm::Bfs,
            visit_order: Vec::new(),
            costs: None,
            outcome: Outcome::PathFound {
                predecessors: Predecessors::new(Bounds::new(1, 3)),
                path: vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)],
            },
        };
        assert!(r.found());
        assert_eq!(r.path_len(), Some(2));
        assert_eq!(r.summary(), "A path was found");
    }
}
