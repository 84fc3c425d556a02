//! Running the selected algorithms, headless or in the terminal.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use gridsearch_core::Grid;
use gridsearch_crossterm::TerminalSink;
use gridsearch_paths::{Algorithm, LogSink, SearchError, SearchReport, distances_from};

use crate::cli::Cli;

/// Generate the map described by `cli` and run every requested algorithm
/// on it.
pub fn run(cli: &Cli) -> Result<()> {
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let cfg = cli.map_config();
    let mut grid = cfg.generate(StdRng::seed_from_u64(seed)).with_context(|| {
        format!(
            "failed to generate a {}x{} px map with {} px tiles",
            cfg.width_px, cfg.height_px, cfg.tile_size
        )
    })?;
    info!("map {} from seed {seed}", grid.bounds());

    let algorithms = cli.algorithms();
    if cli.headless {
        let stdout = io::stdout();
        run_headless(&mut grid, &algorithms, &mut stdout.lock())?;
    } else {
        let frame = Duration::from_millis(cli.frame_ms);
        let delay = Duration::from_millis(cli.delay_ms);
        let reports = run_terminal(&mut grid, &algorithms, frame, delay)?;
        for r in &reports {
            println!("{}", summary_line(&grid, r));
        }
        println!("seed {seed}");
    }
    Ok(())
}

/// Run each algorithm with a logging sink and print its summary and the
/// final grid to `out`.
pub fn run_headless<W: Write>(
    grid: &mut Grid,
    algorithms: &[Algorithm],
    out: &mut W,
) -> Result<Vec<SearchReport>> {
    let mut reports = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let mut sink = LogSink::default();
        let report = algorithm
            .run(grid, &mut sink)
            .with_context(|| format!("{algorithm} failed"))?;
        debug!(
            "{algorithm}: {} visit steps, {} path steps",
            sink.visits, sink.path_steps
        );
        writeln!(out, "{}", summary_line(grid, &report))?;
        writeln!(out, "{grid}")?;
        reports.push(report);
    }
    Ok(reports)
}

/// Animate each algorithm in the terminal, one after another. Stops early
/// when the user quits.
pub fn run_terminal(
    grid: &mut Grid,
    algorithms: &[Algorithm],
    frame: Duration,
    delay: Duration,
) -> Result<Vec<SearchReport>> {
    let mut sink = TerminalSink::new();
    sink.init().context("failed to set up the terminal")?;
    let mut reports = Vec::with_capacity(algorithms.len());

    for &algorithm in algorithms {
        sink.begin(algorithm, frame)?;
        grid.clear_marks();
        sink.draw(grid)?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        let report = match algorithm.run(grid, &mut sink) {
            Ok(r) => r,
            Err(SearchError::Aborted(_)) => {
                info!("{algorithm}: stopped by user");
                break;
            }
            Err(e) => {
                sink.close();
                return Err(e).with_context(|| format!("{algorithm} failed"));
            }
        };
        sink.show_status(grid, &report)?;
        reports.push(report);
        if !sink.wait_for_key(None)? {
            break;
        }
    }

    sink.close();
    Ok(reports)
}

/// One-line result: outcome, visit count and path length against the
/// shortest possible.
pub fn summary_line(grid: &Grid, report: &SearchReport) -> String {
    let visited = report.visit_order.len();
    match report.path_len() {
        Some(len) => {
            let optimal = grid
                .start()
                .and_then(|s| distances_from(grid, s).at(grid.end()?));
            let optimal = optimal.map_or_else(|| "?".to_string(), |d| d.to_string());
            format!(
                "{}: {}; {visited} cells visited, path length {len} (shortest {optimal})",
                report.algorithm,
                report.summary()
            )
        }
        None => format!(
            "{}: {}; {visited} cells visited",
            report.algorithm,
            report.summary()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_paths::Outcome;

    #[test]
    fn headless_prints_each_run() {
        let mut g = Grid::from_layout("S..\n.#.\n..E").unwrap();
        let mut out = Vec::new();
        let reports = run_headless(&mut g, &Algorithm::ALL, &mut out).unwrap();
        assert_eq!(reports.len(), 4);
        let text = String::from_utf8(out).unwrap();
        for a in Algorithm::ALL {
            assert!(text.contains(a.name()), "{a}");
        }
        assert_eq!(text.matches("A path was found").count(), 4);
        assert!(text.contains("path length 4 (shortest 4)"));
    }

    #[test]
    fn headless_reports_unreachable_end() {
        let mut g = Grid::from_layout("S.#\n.##\n##E").unwrap();
        let mut out = Vec::new();
        let reports = run_headless(&mut g, &[Algorithm::Bfs], &mut out).unwrap();
        assert_eq!(reports[0].outcome, Outcome::NoPathFound);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Breadth-First Search: No path could be found!!; 3 cells visited"));
    }

    #[test]
    fn generated_maps_are_reproducible() {
        let cli = <Cli as clap::Parser>::try_parse_from([
            "gridsearch",
            "--width",
            "160",
            "--height",
            "96",
            "--walls",
            "30",
        ])
        .unwrap();
        let cfg = cli.map_config();
        let a = cfg.generate(StdRng::seed_from_u64(9)).unwrap();
        let b = cfg.generate(StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }
}
