//! Command-line arguments.

use clap::{Parser, ValueEnum};
use gridsearch_mapgen::MapConfig;
use gridsearch_paths::Algorithm;

/// Algorithm selector as typed on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Dfs,
    Bfs,
    Dijkstra,
    Astar,
    /// All four, in order.
    All,
}

impl AlgorithmArg {
    fn expand(self) -> &'static [Algorithm] {
        match self {
            AlgorithmArg::Dfs => &[Algorithm::Dfs],
            AlgorithmArg::Bfs => &[Algorithm::Bfs],
            AlgorithmArg::Dijkstra => &[Algorithm::Dijkstra],
            AlgorithmArg::Astar => &[Algorithm::AStar],
            AlgorithmArg::All => &Algorithm::ALL,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Watch DFS, BFS, Dijkstra and A* explore a random grid")]
pub struct Cli {
    /// Algorithm to run. Repeat to run several on the same map.
    #[arg(short, long = "algorithm", value_enum, default_value = "all")]
    pub algorithms: Vec<AlgorithmArg>,

    /// Map width in pixels.
    #[arg(long, default_value_t = 768)]
    pub width: u32,

    /// Map height in pixels.
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Side of one cell in pixels.
    #[arg(long, default_value_t = 16)]
    pub tile_size: u32,

    /// Number of walls to scatter (duplicates are absorbed).
    #[arg(long, default_value_t = 500)]
    pub walls: usize,

    /// Seed for map generation; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay after each step, in milliseconds.
    #[arg(long, default_value_t = 50)]
    pub frame_ms: u64,

    /// Delay before each run starts, in milliseconds.
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Print results instead of drawing in the terminal.
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    pub fn map_config(&self) -> MapConfig {
        MapConfig {
            width_px: self.width,
            height_px: self.height,
            tile_size: self.tile_size,
            walls: self.walls,
        }
    }

    /// Requested algorithms in order, without repeats.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        let mut out = Vec::new();
        for a in self.algorithms.iter().flat_map(|arg| arg.expand()) {
            if !out.contains(a) {
                out.push(*a);
            }
        }
        out
    }
}
