//! Shift-based insertion sort

use std::cmp::Ordering;

use crate::algorithm::stepper::{Scheduler, Stepper};
use crate::io::error::Result;
use crate::model::Marker;

/// Sort by inserting each value into the sorted prefix before it
///
/// Larger predecessors shift right one slot at a time; each shift
/// highlights the vacated slot as swapping. The key's final slot is
/// highlighted as settled.
///
/// # Errors
///
/// Returns an error if the scheduler fails
pub fn insertion_sort<S: Scheduler>(stepper: &mut Stepper<S>) -> Result<()> {
    let n = stepper.len();
    tracing::debug!(n, "insertion sort started");

    for i in 1..n {
        let key = stepper.value(i)?;
        stepper.highlight(&[i], Marker::Comparing)?;

        let mut slot = i;
        while slot > 0 && stepper.compare_with(slot - 1, key)? == Ordering::Greater {
            stepper.shift(slot - 1, slot)?;
            stepper.highlight(&[slot - 1], Marker::Swapping)?;
            slot -= 1;
        }

        stepper.set_value(slot, key)?;
        stepper.highlight(&[slot], Marker::Settled)?;
    }

    tracing::debug!(shifts = stepper.stats().swaps, "insertion sort finished");
    Ok(())
}
