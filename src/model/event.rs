//! Delay-bearing steps reported to schedulers

use crate::model::marker::Marker;

/// One animated step of a run
///
/// Every event is followed by exactly one pause in the active scheduler.
/// Value writes without a pause (`set_value`, settle marks) are not events;
/// they become visible with the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// Bars at `indices` switched to `marker`
    Highlight {
        /// Affected bar indices, in the order the procedure listed them
        indices: Vec<usize>,
        /// New marker for every listed bar
        marker: Marker,
    },
    /// Bars `first` and `second` traded magnitude and label
    Exchange {
        /// Left bar
        first: usize,
        /// Right bar
        second: usize,
    },
}

impl StepEvent {
    /// Indices touched by this event
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Self::Highlight { indices, .. } => indices.clone(),
            Self::Exchange { first, second } => vec![*first, *second],
        }
    }

    /// Marker applied by a highlight, `None` for exchanges
    pub const fn marker(&self) -> Option<Marker> {
        match self {
            Self::Highlight { marker, .. } => Some(*marker),
            Self::Exchange { .. } => None,
        }
    }
}
