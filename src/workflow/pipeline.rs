use std::fmt;
use tracing::{debug, warn};

use crate::error::{Result, Warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Failure aborts the run
    Required,
    /// Failure becomes a [`Warning`] and the run goes on
    BestEffort,
}

/// Ordered run of workflow steps.
///
/// Records which steps ran and collects the warnings of best-effort steps.
#[derive(Debug)]
pub struct Pipeline<S> {
    completed: Vec<(S, Requirement)>,
    warnings: Vec<Warning>,
}

impl<S: Copy + fmt::Display> Pipeline<S> {
    pub fn new() -> Self {
        Self {
            completed: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn required<T, F>(&mut self, step: S, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        debug!(%step, "running");
        let value = f()?;
        debug!(%step, "done");
        self.completed.push((step, Requirement::Required));
        Ok(value)
    }

    pub fn best_effort<F>(&mut self, step: S, f: F)
    where
        F: FnOnce() -> std::result::Result<(), Warning>,
    {
        debug!(%step, "running");
        match f() {
            Ok(()) => debug!(%step, "done"),
            Err(warning) => self.warn(warning),
        }
        self.completed.push((step, Requirement::BestEffort));
    }

    /// Record a warning that is not tied to a failing step.
    pub fn warn(&mut self, warning: Warning) {
        warn!("WARNING: {warning}! Continuing anyway...");
        self.warnings.push(warning);
    }

    #[cfg(test)]
    fn completed(&self) -> &[(S, Requirement)] {
        &self.completed
    }

    /// Hand back the collected warnings.
    pub fn finish(self) -> Vec<Warning> {
        let best_effort = self
            .completed
            .iter()
            .filter(|(_, r)| *r == Requirement::BestEffort)
            .count();
        debug!(
            required = self.completed.len() - best_effort,
            best_effort,
            warnings = self.warnings.len(),
            "pipeline finished"
        );
        self.warnings
    }
}

impl<S: Copy + fmt::Display> Default for Pipeline<S> {
    fn default() -> Self {
        Self::new()
    }
}
