//! The step-observer interface between the engine and renderers.
//!
//! Every algorithm mutates the grid for one step and only then calls
//! [`StepSink::on_step`] with a shared borrow of the grid, so a renderer
//! always sees a consistent state and never overlaps a mutation.

use gridsearch_core::{Grid, Pos};
use log::trace;
use thiserror::Error;

/// One observable step of a search run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// A cell was marked visited.
    Visit(Pos),
    /// A cell was painted as part of the final path.
    Path(Pos),
}

impl Step {
    pub fn pos(self) -> Pos {
        match self {
            Step::Visit(p) | Step::Path(p) => p,
        }
    }
}

/// Returned by a sink to stop the running search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("abort requested by the step sink")]
pub struct Abort;

/// Observer invoked after every state-changing step.
pub trait StepSink {
    /// Called once per step. Returning `Err(Abort)` ends the run.
    fn on_step(&mut self, grid: &Grid, step: Step) -> Result<(), Abort>;
}

impl<F> StepSink for F
where
    F: FnMut(&Grid, Step) -> Result<(), Abort>,
{
    fn on_step(&mut self, grid: &Grid, step: Step) -> Result<(), Abort> {
        self(grid, step)
    }
}

/// Ignores every step.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopSink;

impl StepSink for NoopSink {
    fn on_step(&mut self, _grid: &Grid, _step: Step) -> Result<(), Abort> {
        Ok(())
    }
}

/// Records every step in order.
#[derive(Clone, Debug, Default)]
pub struct TraceSink {
    pub steps: Vec<Step>,
}

impl TraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions of the `Visit` steps.
    pub fn visits(&self) -> Vec<Pos> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                Step::Visit(p) => Some(*p),
                Step::Path(_) => None,
            })
            .collect()
    }

    /// Positions of the `Path` steps.
    pub fn path_steps(&self) -> Vec<Pos> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                Step::Path(p) => Some(*p),
                Step::Visit(_) => None,
            })
            .collect()
    }
}

impl StepSink for TraceSink {
    fn on_step(&mut self, _grid: &Grid, step: Step) -> Result<(), Abort> {
        self.steps.push(step);
        Ok(())
    }
}

/// Logs each step at `trace` level and counts them.
#[derive(Clone, Debug, Default)]
pub struct LogSink {
    pub visits: usize,
    pub path_steps: usize,
}

impl StepSink for LogSink {
    fn on_step(&mut self, _grid: &Grid, step: Step) -> Result<(), Abort> {
        match step {
            Step::Visit(p) => {
                self.visits += 1;
                trace!("visit #{} at {p}", self.visits);
            }
            Step::Path(p) => {
                self.path_steps += 1;
                trace!("path #{} at {p}", self.path_steps);
            }
        }
        Ok(())
    }
}

/// Marks cells visited, records the order, and forwards the step.
pub(crate) struct Recorder<'s, S: StepSink + ?Sized> {
    sink: &'s mut S,
    order: Vec<Pos>,
}

impl<'s, S: StepSink + ?Sized> Recorder<'s, S> {
    pub(crate) fn new(sink: &'s mut S) -> Self {
        Self {
            sink,
            order: Vec::new(),
        }
    }

    pub(crate) fn visit(&mut self, grid: &mut Grid, idx: usize) -> Result<(), Abort> {
        grid.cell_at_mut(idx).visit();
        let p = grid.pos(idx);
        self.order.push(p);
        self.sink.on_step(grid, Step::Visit(p))
    }

    pub(crate) fn sink(&mut self) -> &mut S {
        self.sink
    }

    pub(crate) fn into_order(self) -> Vec<Pos> {
        self.order
    }
}
