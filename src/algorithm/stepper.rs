//! Run state shared by all sorting procedures
//!
//! A [`Stepper`] owns the value sequence and its bar chart for exactly one
//! run. Procedures mutate both through it, and every delay-bearing step is
//! handed to a [`Scheduler`] as a [`Frame`]. The scheduler decides what a
//! pause means: a real sleep, a captured GIF frame, or nothing at all.

use std::cmp::Ordering;

use crate::io::error::{AnimationError, Result};
use crate::model::{Bar, BarChart, Marker, StepEvent};

/// Snapshot handed to a scheduler after each animated step
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// What the step did
    pub event: &'a StepEvent,
    /// Bars as they should be displayed now
    pub bars: &'a [Bar],
    /// Value sequence at the same instant
    pub values: &'a [i64],
}

/// Consumer of animated steps
///
/// `frame` is the only suspension point of a run. Implementations pace the
/// animation; they never change its outcome.
pub trait Scheduler {
    /// Present one step and pause for as long as the medium requires
    ///
    /// # Errors
    ///
    /// Returns an error if the step cannot be presented; the run stops
    fn frame(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Called once when the run completes, with the final bars
    ///
    /// # Errors
    ///
    /// Returns an error if the final state cannot be presented
    fn finish(&mut self, _bars: &[Bar]) -> Result<()> {
        Ok(())
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        (**self).frame(frame)
    }

    fn finish(&mut self, bars: &[Bar]) -> Result<()> {
        (**self).finish(bars)
    }
}

// Drives two schedulers from one run, left first
impl<A: Scheduler, B: Scheduler> Scheduler for (A, B) {
    fn frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.0.frame(frame)?;
        self.1.frame(frame)
    }

    fn finish(&mut self, bars: &[Bar]) -> Result<()> {
        self.0.finish(bars)?;
        self.1.finish(bars)
    }
}

impl<S: Scheduler> Scheduler for Option<S> {
    fn frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.as_mut().map_or(Ok(()), |inner| inner.frame(frame))
    }

    fn finish(&mut self, bars: &[Bar]) -> Result<()> {
        self.as_mut().map_or(Ok(()), |inner| inner.finish(bars))
    }
}

/// Scheduler that never pauses
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Scheduler for Immediate {
    fn frame(&mut self, _frame: &Frame<'_>) -> Result<()> {
        Ok(())
    }
}

/// One frame kept by a [`Recorder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFrame {
    /// Step that produced the frame
    pub event: StepEvent,
    /// Bars at that moment
    pub bars: Vec<Bar>,
    /// Values at that moment
    pub values: Vec<i64>,
}

impl RecordedFrame {
    /// Whether every bar shows the value at its index
    pub fn is_consistent(&self) -> bool {
        self.bars.len() == self.values.len()
            && self
                .bars
                .iter()
                .zip(&self.values)
                .all(|(bar, &value)| {
                    bar.value == value && bar.magnitude == crate::model::chart::magnitude_for(value)
                })
    }
}

/// Scheduler that keeps every frame for later replay
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    frames: Vec<RecordedFrame>,
    final_bars: Vec<Bar>,
}

impl Recorder {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self {
            frames: Vec::new(),
            final_bars: Vec::new(),
        }
    }

    /// Frames in the order they were produced
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// Events in the order they were produced
    pub fn events(&self) -> impl Iterator<Item = &StepEvent> {
        self.frames.iter().map(|frame| &frame.event)
    }

    /// Bars handed to `finish`, empty until the run completes
    pub fn final_bars(&self) -> &[Bar] {
        &self.final_bars
    }

    /// Replay the recorded frames into another scheduler
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `target`
    pub fn replay<S: Scheduler>(&self, target: &mut S) -> Result<()> {
        for recorded in &self.frames {
            target.frame(&Frame {
                event: &recorded.event,
                bars: &recorded.bars,
                values: &recorded.values,
            })?;
        }
        target.finish(&self.final_bars)
    }
}

impl Scheduler for Recorder {
    fn frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.frames.push(RecordedFrame {
            event: frame.event.clone(),
            bars: frame.bars.to_vec(),
            values: frame.values.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self, bars: &[Bar]) -> Result<()> {
        self.final_bars = bars.to_vec();
        Ok(())
    }
}

/// Counters collected during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Value comparisons performed
    pub comparisons: usize,
    /// Element moves: bubble exchanges and insertion shifts
    pub swaps: usize,
    /// Values written into place
    pub writes: usize,
    /// Animated steps handed to the scheduler
    pub frames: usize,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Sorted value sequence
    pub values: Vec<i64>,
    /// Bars as left by the procedure
    pub bars: Vec<Bar>,
    /// Counters for the run
    pub stats: RunStats,
}

/// Values, bars, and scheduler for a single run
pub struct Stepper<S: Scheduler> {
    values: Vec<i64>,
    chart: BarChart,
    scheduler: S,
    stats: RunStats,
}

impl<S: Scheduler> Stepper<S> {
    /// Start a run over `values`, creating one neutral bar per value
    pub fn new(values: Vec<i64>, scheduler: S) -> Self {
        let mut chart = BarChart::new();
        chart.initialize(&values);
        Self {
            values,
            chart,
            scheduler,
            stats: RunStats::default(),
        }
    }

    /// Current value sequence
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Current chart
    pub const fn chart(&self) -> &BarChart {
        &self.chart
    }

    /// Counters so far
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Number of values
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the run has no values
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds
    pub fn value(&self, index: usize) -> Result<i64> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Values in `low..=high`
    ///
    /// # Errors
    ///
    /// Returns an error if the range is out of bounds
    pub fn range(&self, low: usize, high: usize) -> Result<&[i64]> {
        self.values
            .get(low..=high)
            .ok_or_else(|| self.out_of_bounds(high))
    }

    /// Compare the values at two indices, counting one comparison
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds
    pub fn compare(&mut self, left: usize, right: usize) -> Result<Ordering> {
        let right_value = self.value(right)?;
        self.compare_with(left, right_value)
    }

    /// Compare the value at `index` with `key`, counting one comparison
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds
    pub fn compare_with(&mut self, index: usize, key: i64) -> Result<Ordering> {
        let value = self.value(index)?;
        self.stats.comparisons += 1;
        Ok(value.cmp(&key))
    }

    /// Add comparisons made outside [`Self::compare`]
    pub const fn record_comparisons(&mut self, count: usize) {
        self.stats.comparisons += count;
    }

    /// Set markers on the listed bars, then pause
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of bounds or the scheduler fails
    pub fn highlight(&mut self, indices: &[usize], marker: Marker) -> Result<()> {
        self.chart.apply_marker(indices, marker)?;
        self.emit(StepEvent::Highlight {
            indices: indices.to_vec(),
            marker,
        })
    }

    /// Swap the values at two indices without touching the bars
    ///
    /// Must be followed by [`Self::exchange_visual`] on the same pair before
    /// the next highlight.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds
    pub fn swap_values(&mut self, first: usize, second: usize) -> Result<()> {
        if first >= self.values.len() || second >= self.values.len() {
            return Err(self.out_of_bounds(first.max(second)));
        }
        self.values.swap(first, second);
        self.stats.swaps += 1;
        Ok(())
    }

    /// Swap magnitude and label of two bars, markers unchanged, then pause
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds or the scheduler fails
    pub fn exchange_visual(&mut self, first: usize, second: usize) -> Result<()> {
        self.chart.exchange(first, second)?;
        self.emit(StepEvent::Exchange { first, second })
    }

    /// Copy the value and bar at `from` into `to`, without pausing
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds
    pub fn shift(&mut self, from: usize, to: usize) -> Result<()> {
        let value = self.value(from)?;
        self.store(to, value)?;
        self.chart.copy_bar(from, to)?;
        self.stats.swaps += 1;
        Ok(())
    }

    /// Write `value` at `index` and update its bar, without pausing
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds
    pub fn set_value(&mut self, index: usize, value: i64) -> Result<()> {
        self.store(index, value)?;
        self.chart.set_value(index, value)?;
        self.stats.writes += 1;
        Ok(())
    }

    /// Set a marker without pausing; shown with the next frame
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds
    pub fn mark(&mut self, index: usize, marker: Marker) -> Result<()> {
        self.chart.mark(index, marker)
    }

    /// End the run and hand the final bars to the scheduler
    ///
    /// # Errors
    ///
    /// Returns an error if the scheduler fails to present the final state
    pub fn finish(mut self) -> Result<RunOutcome> {
        self.scheduler.finish(self.chart.bars())?;
        Ok(RunOutcome {
            values: self.values,
            bars: self.chart.bars().to_vec(),
            stats: self.stats,
        })
    }

    fn store(&mut self, index: usize, value: i64) -> Result<()> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(AnimationError::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    fn emit(&mut self, event: StepEvent) -> Result<()> {
        self.stats.frames += 1;
        self.scheduler.frame(&Frame {
            event: &event,
            bars: self.chart.bars(),
            values: &self.values,
        })
    }

    const fn out_of_bounds(&self, index: usize) -> AnimationError {
        AnimationError::IndexOutOfBounds {
            index,
            len: self.values.len(),
        }
    }
}
