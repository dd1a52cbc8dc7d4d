//! Procedure selection and run entry point

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::algorithm::bubble::bubble_sort;
use crate::algorithm::counting::counting_sort;
use crate::algorithm::insertion::insertion_sort;
use crate::algorithm::merge::merge_sort;
use crate::algorithm::stepper::{RunOutcome, Scheduler, Stepper};
use crate::io::error::{AnimationError, Result};

/// Sorting procedure animated by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Procedure {
    /// Adjacent-exchange bubble sort
    #[value(alias = "bubbleSort")]
    Bubble,
    /// Shift-based insertion sort
    #[value(alias = "insertionSort")]
    Insertion,
    /// Recursive merge sort
    #[value(alias = "mergeSort")]
    Merge,
    /// Counting sort, non-negative values only
    #[value(aliases = ["countSort", "counting"])]
    Count,
}

impl Procedure {
    /// All procedures in menu order
    pub const ALL: [Self; 4] = [Self::Bubble, Self::Insertion, Self::Merge, Self::Count];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Count => "count",
        }
    }

    /// Run this procedure to completion over the stepper's values
    ///
    /// # Errors
    ///
    /// Returns an error if the procedure rejects the input or the scheduler fails
    pub fn run<S: Scheduler>(self, mut stepper: Stepper<S>) -> Result<RunOutcome> {
        match self {
            Self::Bubble => bubble_sort(&mut stepper)?,
            Self::Insertion => insertion_sort(&mut stepper)?,
            Self::Merge => merge_sort(&mut stepper)?,
            Self::Count => counting_sort(&mut stepper)?,
        }
        stepper.finish()
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Procedure {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s.trim(), true).map_err(|reason| {
            crate::io::error::invalid_parameter("procedure", &s, &reason)
        })
    }
}

/// Procedure and initial values for one run
///
/// Fixed once the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Procedure to animate
    pub procedure: Procedure,
    /// Values in input order
    pub values: Vec<i64>,
}

impl RunConfig {
    /// Create a run configuration
    pub const fn new(procedure: Procedure, values: Vec<i64>) -> Self {
        Self { procedure, values }
    }

    /// Execute the run, driving `scheduler` one step at a time
    ///
    /// # Errors
    ///
    /// Returns an error if the procedure rejects the input or the scheduler fails
    pub fn run<S: Scheduler>(&self, scheduler: S) -> Result<RunOutcome> {
        tracing::info!(
            procedure = %self.procedure,
            n = self.values.len(),
            "run started"
        );
        let outcome = self
            .procedure
            .run(Stepper::new(self.values.clone(), scheduler))?;
        tracing::info!(
            comparisons = outcome.stats.comparisons,
            swaps = outcome.stats.swaps,
            frames = outcome.stats.frames,
            "run finished"
        );
        Ok(outcome)
    }
}
