use gridsearch_core::Grid;

use crate::error::SearchError;
use crate::report::{CostMap, Predecessors, SearchReport, UNREACHABLE};
use crate::sink::{Recorder, StepSink};
use crate::{Algorithm, finish, prepare};

/// Single-source Dijkstra over the whole grid, with unit edge weights.
///
/// The next cell is chosen by a linear scan of the remaining set for the
/// smallest tentative distance; ties go to the lowest arena index. Walls are
/// dropped from the set without being visited. There is no early exit at
/// End: every reachable cell is visited. Once only unreachable cells remain
/// they are discarded without being visited.
pub(crate) fn search<S: StepSink + ?Sized>(
    grid: &mut Grid,
    sink: &mut S,
) -> Result<SearchReport, SearchError> {
    let (start, end) = prepare(grid)?;
    let mut preds = Predecessors::new(grid.bounds());
    let mut costs = CostMap::new(grid.bounds());
    let mut rec = Recorder::new(sink);
    costs.set(start, 0);

    // Kept in ascending index order so the first minimum is the lowest index.
    let mut remaining: Vec<usize> = (0..grid.len()).collect();
    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    while !remaining.is_empty() {
        let mut best = 0;
        for (k, &i) in remaining.iter().enumerate().skip(1) {
            if costs.cost(i) < costs.cost(remaining[best]) {
                best = k;
            }
        }
        let ci = remaining.remove(best);
        if grid.cell_at(ci).is_wall() {
            continue;
        }
        let cd = costs.cost(ci);
        if cd == UNREACHABLE {
            break;
        }

        rec.visit(grid, ci)?;
        nbuf.clear();
        nbuf.extend_from_slice(grid.cell_at(ci).neighbors());
        for &ni in nbuf.iter() {
            if cd + 1 < costs.cost(ni) {
                costs.set(ni, cd + 1);
                preds.set(ni, ci);
            }
        }
    }

    let found = preds.parent(end).is_some();
    finish(grid, Algorithm::Dijkstra, preds, Some(costs), found, rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::TraceSink;
    use gridsearch_core::Pos;

    #[test]
    fn visits_every_reachable_cell_in_distance_order() {
        let mut g = Grid::from_layout("S.#\n..#\n#.E").unwrap();
        let r = search(&mut g, &mut TraceSink::new()).unwrap();
        assert_eq!(
            r.visit_order,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(2, 1),
                Pos::new(2, 2),
            ]
        );
        let costs = r.costs.as_ref().unwrap();
        assert_eq!(costs.at(Pos::new(2, 2)), Some(4));
        assert_eq!(costs.at(Pos::new(0, 2)), None);
        assert_eq!(r.path_len(), Some(4));
    }

    #[test]
    fn unreachable_cells_are_not_visited() {
        let mut g = Grid::from_layout("S.#.\n..#E").unwrap();
        let r = search(&mut g, &mut TraceSink::new()).unwrap();
        assert!(!r.found());
        assert_eq!(r.visit_order.len(), 4);
        assert!(!g.cell(Pos::new(0, 3)).unwrap().visited());
        assert!(!g.cell(Pos::new(1, 3)).unwrap().visited());
    }
}
