//! Step-by-step search algorithms on a [`Grid`](gridsearch_core::Grid).
//!
//! Every run clears the marks of the previous one, searches from Start to
//! End, and, when End is reached, paints the path back. After each cell is
//! marked, the run reports a [`Step`] to a [`StepSink`], which can render,
//! record or abort.
//!
//! | Strategy | Entry point | Frontier | Stops at End | Costs |
//! |---|---|---|---|---|
//! | Depth-first | [`run_dfs`] | explicit stack | on visit | no |
//! | Breadth-first | [`run_bfs`] | FIFO queue | on enqueue | yes |
//! | Dijkstra | [`run_dijkstra`] | linear scan | no | yes |
//! | A\* | [`run_astar`] | [`PriorityQueue`] | on dequeue | yes |
//!
//! All four are also available as [`SearchAlgorithm`] trait objects and
//! through the [`Algorithm`] enum.

mod algorithm;
mod astar;
mod bfs;
mod cc;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod path;
mod queue;
mod report;
mod sink;
mod traits;

pub(crate) use algorithm::{finish, prepare};

pub use algorithm::{
    Algorithm, ParseAlgorithmError, run_astar, run_bfs, run_dfs, run_dijkstra,
};
pub use cc::{ComponentMap, components, distances_from};
pub use distance::{euclidean, manhattan};
pub use error::SearchError;
pub use path::reconstruct_path;
pub use queue::{Order, PriorityQueue};
pub use report::{CostMap, Outcome, Predecessors, SearchReport, UNREACHABLE};
pub use sink::{Abort, LogSink, NoopSink, Step, StepSink, TraceSink};
pub use traits::{AStar, BreadthFirst, DepthFirst, Dijkstra, SearchAlgorithm};

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::{Grid, Paint, Pos, Role};
    use gridsearch_mapgen::MapConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_config() -> MapConfig {
        MapConfig {
            width_px: 24 * 16,
            height_px: 16 * 16,
            tile_size: 16,
            walls: 120,
        }
    }

    fn seeded_grid(seed: u64) -> Grid {
        small_config()
            .generate(StdRng::seed_from_u64(seed))
            .unwrap()
    }

    fn assert_path_is_walkable(grid: &Grid, path: &[Pos]) {
        assert_eq!(path.first().copied(), grid.start());
        assert_eq!(path.last().copied(), grid.end());
        for w in path.windows(2) {
            assert_eq!(w[0].manhattan(w[1]), 1, "{} -> {}", w[0], w[1]);
        }
        for p in path {
            let c = grid.cell(*p).unwrap();
            assert!(!c.is_wall());
            assert_eq!(c.paint(), Paint::Path);
        }
    }

    #[test]
    fn open_three_by_three() {
        for a in Algorithm::ALL {
            let mut g = Grid::from_layout("S..\n...\n..E").unwrap();
            let r = a.run(&mut g, &mut NoopSink).unwrap();
            assert!(r.found(), "{a}");
            assert_path_is_walkable(&g, r.path().unwrap());
            if a != Algorithm::Dfs {
                assert_eq!(r.path_len(), Some(4), "{a}");
            }
        }
        let mut g = Grid::from_layout("S..\n...\n..E").unwrap();
        let r = run_dijkstra(&mut g, &mut NoopSink).unwrap();
        assert_eq!(r.costs.unwrap().at(Pos::new(2, 2)), Some(4));
    }

    #[test]
    fn walled_middle_row_has_no_path() {
        for a in Algorithm::ALL {
            let mut g = Grid::from_layout("S..\n###\n..E").unwrap();
            let mut t = TraceSink::new();
            let r = a.run(&mut g, &mut t).unwrap();
            assert_eq!(r.outcome, Outcome::NoPathFound, "{a}");
            assert!(t.path_steps().is_empty());
            assert!(g.cells().iter().all(|c| c.paint() != Paint::Path));
        }
    }

    #[test]
    fn lengths_match_reference_distances() {
        for seed in 0..40 {
            let mut g = seeded_grid(seed);
            let (start, end) = (g.start().unwrap(), g.end().unwrap());
            let reference = distances_from(&g, start);
            let expected = reference.at(end).map(|d| d as usize);

            for a in [Algorithm::Bfs, Algorithm::AStar, Algorithm::Dijkstra] {
                let r = a.run(&mut g, &mut NoopSink).unwrap();
                assert_eq!(r.path_len(), expected, "seed {seed}, {a}");
            }

            let r = run_dijkstra(&mut g, &mut NoopSink).unwrap();
            let costs = r.costs.unwrap();
            for (p, d) in reference.reached() {
                assert_eq!(costs.at(p), Some(d), "seed {seed} at {p}");
            }
            assert_eq!(costs.reached().count(), reference.reached().count());
        }
    }

    #[test]
    fn no_path_iff_disconnected() {
        let mut cfg = small_config();
        cfg.walls = 220;
        for seed in 0..60 {
            let mut g = cfg.generate(StdRng::seed_from_u64(seed)).unwrap();
            let cc = components(&g);
            let connected = cc.same_component(g.start().unwrap(), g.end().unwrap());
            for a in Algorithm::ALL {
                let r = a.run(&mut g, &mut NoopSink).unwrap();
                assert_eq!(r.found(), connected, "seed {seed}, {a}");
                if let Some(path) = r.path() {
                    assert_path_is_walkable(&g, path);
                }
            }
        }
    }

    #[test]
    fn visit_steps_match_marks() {
        let mut g = seeded_grid(7);
        for a in Algorithm::ALL {
            let mut t = TraceSink::new();
            let r = a.run(&mut g, &mut t).unwrap();
            assert_eq!(t.visits(), r.visit_order, "{a}");
            let visited = g.cells().iter().filter(|c| c.visited()).count();
            assert_eq!(visited, r.visit_order.len(), "{a}");
            for p in &r.visit_order {
                assert_ne!(g.cell(*p).unwrap().role(), Role::Wall);
            }
        }
    }

    #[test]
    fn abort_stops_the_run() {
        for a in Algorithm::ALL {
            let mut g = Grid::from_layout("S...\n....\n...E").unwrap();
            let mut seen = 0;
            let mut sink = |_: &Grid, _: Step| -> Result<(), Abort> {
                seen += 1;
                if seen == 3 { Err(Abort) } else { Ok(()) }
            };
            let res = a.run(&mut g, &mut sink);
            assert_eq!(res, Err(SearchError::Aborted(Abort)), "{a}");
            assert_eq!(seen, 3);
            assert_eq!(g.cells().iter().filter(|c| c.visited()).count(), 3);
        }
    }

    #[test]
    fn runs_can_share_a_map() {
        let mut g = seeded_grid(3);
        let first = run_bfs(&mut g, &mut NoopSink).unwrap();
        run_dfs(&mut g, &mut NoopSink).unwrap();
        let again = run_bfs(&mut g, &mut NoopSink).unwrap();
        assert_eq!(first, again);
    }
}
