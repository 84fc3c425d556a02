use gridsearch_core::Grid;

use crate::error::SearchError;
use crate::report::{Predecessors, SearchReport};
use crate::sink::{Recorder, StepSink};
use crate::{Algorithm, finish, prepare};

/// Depth-first search from Start, pre-order.
///
/// Equivalent to the recursive formulation: a cell is visited when it is
/// first entered, the search stops as soon as End is visited, and the
/// neighbours of a cell are tried in `(row, col)` order. An explicit stack
/// of `(cell, next neighbour slot)` frames replaces the call stack.
pub(crate) fn search<S: StepSink + ?Sized>(
    grid: &mut Grid,
    sink: &mut S,
) -> Result<SearchReport, SearchError> {
    let (start, end) = prepare(grid)?;
    let mut preds = Predecessors::new(grid.bounds());
    let mut rec = Recorder::new(sink);

    rec.visit(grid, start)?;
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    let mut found = false;

    while let Some(frame) = stack.last_mut() {
        let (ci, k) = *frame;
        let next = grid.cell_at(ci).neighbors()[k..]
            .iter()
            .position(|&ni| !grid.cell_at(ni).visited());
        let Some(offset) = next else {
            stack.pop();
            continue;
        };
        let ni = grid.cell_at(ci).neighbors()[k + offset];
        frame.1 = k + offset + 1;

        preds.set(ni, ci);
        rec.visit(grid, ni)?;
        if ni == end {
            found = true;
            break;
        }
        stack.push((ni, 0));
    }

    finish(grid, Algorithm::Dfs, preds, None, found, rec)
}
