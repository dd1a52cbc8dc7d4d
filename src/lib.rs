//! Step-by-step animation of classic sorting algorithms
//!
//! A run sorts a small integer sequence with one of four procedures
//! (bubble, insertion, merge, counting) and mirrors every meaningful
//! mutation onto a bar chart. Each animated step is handed to a
//! scheduler, which decides how it is shown: drawn in the terminal with a
//! real delay, captured into an animated GIF, recorded for replay, or
//! skipped entirely in tests.

#![forbid(unsafe_code)]

/// Sorting procedures and the stepper that drives them
pub mod algorithm;
/// Input collection, command-line interface, rendering, and error handling
pub mod io;
/// Bars, markers, and animated step events
pub mod model;

pub use algorithm::procedure::{Procedure, RunConfig};
pub use algorithm::stepper::{RunOutcome, RunStats, Scheduler, Stepper};
pub use io::error::{AnimationError, Result};
