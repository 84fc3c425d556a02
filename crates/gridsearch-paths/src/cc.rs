//! Connected-component labelling and reference distances.

use gridsearch_core::{Bounds, Grid, Pos};

use crate::bfs;
use crate::report::CostMap;

/// Component label of every non-wall cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMap {
    bounds: Bounds,
    labels: Vec<Option<u32>>,
    count: u32,
}

impl ComponentMap {
    /// Label of `p`; `None` for walls and out-of-bounds positions.
    pub fn label(&self, p: Pos) -> Option<u32> {
        self.labels[self.bounds.index(p)?]
    }

    /// Whether `a` and `b` are both passable and connected.
    pub fn same_component(&self, a: Pos, b: Pos) -> bool {
        match (self.label(a), self.label(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }

    /// Number of components.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Label every non-wall cell of `grid` with a connected-component ID.
///
/// Uses the grid's computed adjacency; on a grid without adjacency every
/// open cell is its own component.
pub fn components(grid: &Grid) -> ComponentMap {
    let mut labels: Vec<Option<u32>> = vec![None; grid.len()];
    let mut label = 0;
    let mut stack: Vec<usize> = Vec::new();

    for first in 0..grid.len() {
        if labels[first].is_some() || grid.cell_at(first).is_wall() {
            continue;
        }
        // Iterative flood fill from `first`.
        labels[first] = Some(label);
        stack.push(first);
        while let Some(ci) = stack.pop() {
            for &ni in grid.cell_at(ci).neighbors() {
                if labels[ni].is_none() {
                    labels[ni] = Some(label);
                    stack.push(ni);
                }
            }
        }
        label += 1;
    }

    ComponentMap {
        bounds: grid.bounds(),
        labels,
        count: label,
    }
}

/// Breadth-first distances from `source` to every reachable cell.
///
/// Emits no steps and leaves the grid's marks alone. A wall or
/// out-of-bounds source reaches nothing.
pub fn distances_from(grid: &Grid, source: Pos) -> CostMap {
    match grid.index(source) {
        Some(si) => bfs::distances(grid, si),
        None => bfs::distances(grid, usize::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_split_by_walls() {
        let g = Grid::from_layout(
            "\
S.#.
..#.
###E",
        )
        .unwrap();
        let cc = components(&g);
        assert_eq!(cc.count(), 2);
        assert!(cc.same_component(Pos::new(0, 0), Pos::new(1, 1)));
        assert!(cc.same_component(Pos::new(0, 3), Pos::new(2, 3)));
        assert!(!cc.same_component(Pos::new(0, 0), Pos::new(2, 3)));
        assert_eq!(cc.label(Pos::new(0, 2)), None);
        assert_eq!(cc.label(Pos::new(5, 5)), None);
    }

    #[test]
    fn distances_from_outside_reach_nothing() {
        let g = Grid::from_layout("S.E").unwrap();
        assert_eq!(distances_from(&g, Pos::new(0, 9)).reached().count(), 0);
        assert_eq!(distances_from(&g, Pos::new(0, 0)).at(Pos::new(0, 2)), Some(2));
    }
}
