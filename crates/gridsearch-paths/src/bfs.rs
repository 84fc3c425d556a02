use std::collections::VecDeque;

use gridsearch_core::Grid;

use crate::error::SearchError;
use crate::report::{CostMap, Predecessors, SearchReport};
use crate::sink::{Recorder, StepSink};
use crate::{Algorithm, finish, prepare};

/// Breadth-first search from Start.
///
/// Cells are marked visited when they are enqueued, and the search stops
/// the moment End is enqueued.
pub(crate) fn search<S: StepSink + ?Sized>(
    grid: &mut Grid,
    sink: &mut S,
) -> Result<SearchReport, SearchError> {
    let (start, end) = prepare(grid)?;
    let mut preds = Predecessors::new(grid.bounds());
    let mut costs = CostMap::new(grid.bounds());
    let mut rec = Recorder::new(sink);

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nbuf: Vec<usize> = Vec::with_capacity(4);
    costs.set(start, 0);
    rec.visit(grid, start)?;
    queue.push_back(start);
    let mut found = false;

    'search: while let Some(ci) = queue.pop_front() {
        let nd = costs.cost(ci) + 1;
        nbuf.clear();
        nbuf.extend_from_slice(grid.cell_at(ci).neighbors());

        for &ni in nbuf.iter() {
            if grid.cell_at(ni).visited() {
                continue;
            }
            preds.set(ni, ci);
            costs.set(ni, nd);
            rec.visit(grid, ni)?;
            if ni == end {
                found = true;
                break 'search;
            }
            queue.push_back(ni);
        }
    }

    finish(grid, Algorithm::Bfs, preds, Some(costs), found, rec)
}

/// Plain BFS distances from `source` over the grid's adjacency.
///
/// Does not touch the grid's marks and emits no steps.
pub(crate) fn distances(grid: &Grid, source: usize) -> CostMap {
    let mut costs = CostMap::new(grid.bounds());
    if source >= grid.len() || grid.cell_at(source).is_wall() {
        return costs;
    }
    let mut queue = VecDeque::from([source]);
    costs.set(source, 0);
    while let Some(ci) = queue.pop_front() {
        let nd = costs.cost(ci) + 1;
        for &ni in grid.cell_at(ci).neighbors() {
            if costs.at(grid.pos(ni)).is_some() {
                continue;
            }
            costs.set(ni, nd);
            queue.push_back(ni);
        }
    }
    costs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::TraceSink;
    use gridsearch_core::Pos;

    #[test]
    fn marks_at_enqueue_and_stops_on_end() {
        let mut g = Grid::from_layout("S.E\n...").unwrap();
        let r = search(&mut g, &mut TraceSink::new()).unwrap();
        // (0,0) then its neighbours (0,1), (1,0), then (0,2) from (0,1).
        assert_eq!(
            r.visit_order,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(0, 2)]
        );
        assert!(!g.cell(Pos::new(1, 1)).unwrap().visited());
        assert_eq!(r.path_len(), Some(2));
    }

    #[test]
    fn distances_leave_grid_untouched() {
        let g = Grid::from_layout("S#.\n..E").unwrap();
        let d = distances(&g, 0);
        assert_eq!(d.at(Pos::new(1, 2)), Some(3));
        assert_eq!(d.at(Pos::new(0, 2)), Some(4));
        assert_eq!(d.at(Pos::new(0, 1)), None);
        assert!(g.cells().iter().all(|c| !c.visited()));
    }
}
