//! Adjacent-exchange bubble sort

use std::cmp::Ordering;

use crate::algorithm::stepper::{Scheduler, Stepper};
use crate::io::error::Result;
use crate::model::Marker;

/// Sort by repeatedly exchanging adjacent out-of-order pairs
///
/// Each pair is highlighted as comparing, exchanged and highlighted as
/// swapping when the left value is strictly greater, then released to
/// neutral. After each pass the last unsorted index is marked settled.
/// Index 0 is marked settled once the passes are done.
///
/// # Errors
///
/// Returns an error if the scheduler fails
pub fn bubble_sort<S: Scheduler>(stepper: &mut Stepper<S>) -> Result<()> {
    let n = stepper.len();
    tracing::debug!(n, "bubble sort started");

    for pass in 0..n.saturating_sub(1) {
        let boundary = n - pass - 1;
        for j in 0..boundary {
            let pair = [j, j + 1];
            stepper.highlight(&pair, Marker::Comparing)?;
            if stepper.compare(j, j + 1)? == Ordering::Greater {
                stepper.swap_values(j, j + 1)?;
                stepper.exchange_visual(j, j + 1)?;
                stepper.highlight(&pair, Marker::Swapping)?;
            }
            stepper.highlight(&pair, Marker::Neutral)?;
        }
        stepper.mark(boundary, Marker::Settled)?;
    }

    if n > 0 {
        stepper.mark(0, Marker::Settled)?;
    }

    tracing::debug!(swaps = stepper.stats().swaps, "bubble sort finished");
    Ok(())
}
