//! Bar chart mirroring the value sequence of a run
//!
//! The chart holds one bar per value. Its mutators never pause; the
//! stepper pairs each delay-bearing mutation with a scheduler frame so the
//! chart and the value sequence agree whenever a frame is observed.

use crate::io::configuration::BAR_HEIGHT_SCALE;
use crate::io::error::{AnimationError, Result};
use crate::model::marker::Marker;

/// Visual element for one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    /// Label shown on the bar
    pub value: i64,
    /// Displayed height, proportional to the value
    pub magnitude: u32,
    /// Current highlight
    pub marker: Marker,
}

impl Bar {
    /// Create a neutral bar for `value`
    pub fn new(value: i64) -> Self {
        Self {
            value,
            magnitude: magnitude_for(value),
            marker: Marker::Neutral,
        }
    }
}

/// Height of a bar showing `value`
///
/// Negative values have no height; they are still labelled.
pub fn magnitude_for(value: i64) -> u32 {
    let scaled = value.max(0).saturating_mul(i64::from(BAR_HEIGHT_SCALE));
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Tallest magnitude among `bars`, zero when empty
pub fn max_magnitude(bars: &[Bar]) -> u32 {
    bars.iter().map(|bar| bar.magnitude).max().unwrap_or(0)
}

/// Ordered collection of bars, one per value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarChart {
    bars: Vec<Bar>,
}

impl BarChart {
    /// Create an empty chart
    pub const fn new() -> Self {
        Self { bars: Vec::new() }
    }

    /// Replace all bars with one neutral bar per value, in order
    pub fn initialize(&mut self, values: &[i64]) {
        self.bars = values.iter().copied().map(Bar::new).collect();
    }

    /// All bars in display order
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Number of bars
    pub const fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the chart has no bars
    pub const fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Set the marker of every listed bar
    ///
    /// # Errors
    ///
    /// Returns an error if any index is out of bounds; no marker changes in that case
    pub fn apply_marker(&mut self, indices: &[usize], marker: Marker) -> Result<()> {
        if let Some(&index) = indices.iter().find(|&&index| index >= self.bars.len()) {
            return Err(self.out_of_bounds(index));
        }
        for &index in indices {
            if let Some(bar) = self.bars.get_mut(index) {
                bar.marker = marker;
            }
        }
        Ok(())
    }

    /// Set a single marker
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds
    pub fn mark(&mut self, index: usize, marker: Marker) -> Result<()> {
        self.apply_marker(&[index], marker)
    }

    /// Swap magnitude and label of two bars, leaving their markers in place
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds
    pub fn exchange(&mut self, first: usize, second: usize) -> Result<()> {
        let (a, b) = (self.bar(first)?, self.bar(second)?);
        self.write(first, b.value, b.magnitude)?;
        self.write(second, a.value, a.magnitude)
    }

    /// Overwrite the label and magnitude of a bar to show `value`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds
    pub fn set_value(&mut self, index: usize, value: i64) -> Result<()> {
        self.write(index, value, magnitude_for(value))
    }

    /// Copy label and magnitude from one bar to another
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds
    pub fn copy_bar(&mut self, from: usize, to: usize) -> Result<()> {
        let source = self.bar(from)?;
        self.write(to, source.value, source.magnitude)
    }

    fn bar(&self, index: usize) -> Result<Bar> {
        self.bars
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    fn write(&mut self, index: usize, value: i64, magnitude: u32) -> Result<()> {
        let len = self.bars.len();
        let bar = self
            .bars
            .get_mut(index)
            .ok_or(AnimationError::IndexOutOfBounds { index, len })?;
        bar.value = value;
        bar.magnitude = magnitude;
        Ok(())
    }

    const fn out_of_bounds(&self, index: usize) -> AnimationError {
        AnimationError::IndexOutOfBounds {
            index,
            len: self.bars.len(),
        }
    }
}
