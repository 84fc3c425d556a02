//! gridsearch: watch classic graph searches explore a random grid.

pub mod cli;
pub mod run;

pub use cli::{AlgorithmArg, Cli};
pub use run::{run, run_headless, run_terminal, summary_line};
