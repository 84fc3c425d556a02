use gridsearch_core::{Grid, Pos};

use crate::error::SearchError;
use crate::report::Predecessors;
use crate::sink::{Step, StepSink};

/// Paint the path recorded in `preds` and return it ordered Start to End.
///
/// Start is painted first, then the chain is walked from End back towards
/// Start, emitting a [`Step::Path`] for every painted cell.
///
/// # Panics
///
/// Panics if the chain from End is broken before reaching Start, or loops.
pub fn reconstruct_path<S: StepSink + ?Sized>(
    grid: &mut Grid,
    preds: &Predecessors,
    sink: &mut S,
) -> Result<Vec<Pos>, SearchError> {
    let (Some(start), Some(end)) = (grid.start_index(), grid.end_index()) else {
        return Err(SearchError::NotReady("grid has no start or end"));
    };

    paint(grid, start, sink)?;
    let mut path = vec![grid.pos(start)];
    let mut cur = end;
    while cur != start {
        assert!(
            path.len() <= grid.len(),
            "predecessor chain from {} loops",
            grid.pos(end)
        );
        paint(grid, cur, sink)?;
        path.push(grid.pos(cur));
        cur = preds
            .parent(cur)
            .unwrap_or_else(|| panic!("predecessor chain broken at {}", grid.pos(cur)));
    }
    path[1..].reverse();
    Ok(path)
}

fn paint<S: StepSink + ?Sized>(grid: &mut Grid, idx: usize, sink: &mut S) -> Result<(), SearchError> {
    grid.cell_at_mut(idx).mark_path();
    sink.on_step(grid, Step::Path(grid.pos(idx)))?;
    Ok(())
}
