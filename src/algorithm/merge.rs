//! Top-down merge sort built on an animated merge step

use crate::algorithm::stepper::{Scheduler, Stepper};
use crate::io::error::{AnimationError, Result};
use crate::model::Marker;

/// Merge the sorted runs `low..=mid` and `mid + 1..=high`
///
/// Ties take the left value, so the merge is stable. The merged run is
/// written back one index at a time, each write highlighted as swapping.
///
/// # Errors
///
/// Returns an error if the bounds do not describe two adjacent non-empty
/// runs inside the sequence, or if the scheduler fails
pub fn merge<S: Scheduler>(
    stepper: &mut Stepper<S>,
    low: usize,
    mid: usize,
    high: usize,
) -> Result<()> {
    let len = stepper.len();
    if low > mid || mid >= high || high >= len {
        return Err(AnimationError::InvalidRange {
            low,
            mid,
            high,
            len,
        });
    }

    let left = stepper.range(low, mid)?.to_vec();
    let right = stepper.range(mid + 1, high)?.to_vec();

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    let mut comparisons = 0;
    while let (Some(&a), Some(&b)) = (left.get(i), right.get(j)) {
        comparisons += 1;
        if a <= b {
            merged.push(a);
            i += 1;
        } else {
            merged.push(b);
            j += 1;
        }
    }
    merged.extend(left.iter().skip(i));
    merged.extend(right.iter().skip(j));
    stepper.record_comparisons(comparisons);

    for (offset, value) in merged.into_iter().enumerate() {
        let k = low + offset;
        stepper.set_value(k, value)?;
        stepper.highlight(&[k], Marker::Swapping)?;
    }

    Ok(())
}

/// Sort by recursively halving the sequence and merging the halves
///
/// # Errors
///
/// Returns an error if the scheduler fails
pub fn merge_sort<S: Scheduler>(stepper: &mut Stepper<S>) -> Result<()> {
    let n = stepper.len();
    tracing::debug!(n, "merge sort started");
    if n > 1 {
        sort_range(stepper, 0, n - 1)?;
    }
    tracing::debug!(writes = stepper.stats().writes, "merge sort finished");
    Ok(())
}

fn sort_range<S: Scheduler>(stepper: &mut Stepper<S>, low: usize, high: usize) -> Result<()> {
    if low >= high {
        return Ok(());
    }
    let mid = low + (high - low) / 2;
    sort_range(stepper, low, mid)?;
    sort_range(stepper, mid + 1, high)?;
    merge(stepper, low, mid, high)
}
