use gridsearch_core::Grid;

use crate::distance::euclidean;
use crate::error::SearchError;
use crate::queue::PriorityQueue;
use crate::report::{CostMap, Predecessors, SearchReport};
use crate::sink::{Recorder, StepSink};
use crate::{Algorithm, finish, prepare};

/// A* from Start to End with the straight-line distance as heuristic.
///
/// A cell may sit in the frontier several times with different priorities;
/// only its first dequeue is expanded.
pub(crate) fn search<S: StepSink + ?Sized>(
    grid: &mut Grid,
    sink: &mut S,
) -> Result<SearchReport, SearchError> {
    let (start, end) = prepare(grid)?;
    let goal = grid.pos(end);
    let mut preds = Predecessors::new(grid.bounds());
    let mut g_score = CostMap::new(grid.bounds());
    let mut rec = Recorder::new(sink);

    let mut open: PriorityQueue<usize> = PriorityQueue::new();
    let mut nbuf: Vec<usize> = Vec::with_capacity(4);
    g_score.set(start, 0);
    open.enqueue(start, 0.0);
    let mut found = false;

    while let Some(ci) = open.dequeue() {
        if grid.cell_at(ci).visited() {
            continue;
        }
        rec.visit(grid, ci)?;
        if ci == end {
            found = true;
            break;
        }

        let ng = g_score.cost(ci) + 1;
        nbuf.clear();
        nbuf.extend_from_slice(grid.cell_at(ci).neighbors());
        for &ni in nbuf.iter() {
            if ng < g_score.cost(ni) {
                g_score.set(ni, ng);
                preds.set(ni, ci);
                open.enqueue(ni, f64::from(ng) + euclidean(grid.pos(ni), goal));
            }
        }
    }

    finish(grid, Algorithm::AStar, preds, Some(g_score), found, rec)
}
