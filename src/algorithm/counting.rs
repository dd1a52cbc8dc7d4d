//! Counting sort over non-negative integers

use crate::algorithm::stepper::{Scheduler, Stepper};
use crate::io::configuration::MAX_COUNTING_VALUE;
use crate::io::error::{AnimationError, Result, unsupported_input};
use crate::model::Marker;

const PROCEDURE: &str = "counting";

/// Check that every value can index a frequency table
///
/// # Errors
///
/// Returns an unsupported input error for the first negative value, or for
/// a maximum above [`MAX_COUNTING_VALUE`]
pub fn validate_counting_input(values: &[i64]) -> Result<()> {
    if let Some(negative) = values.iter().find(|&&value| value < 0) {
        return Err(unsupported_input(
            PROCEDURE,
            &format!("value {negative} is negative"),
        ));
    }
    if let Some(max) = values.iter().max().filter(|&&max| max > MAX_COUNTING_VALUE) {
        return Err(unsupported_input(
            PROCEDURE,
            &format!("value {max} exceeds the limit of {MAX_COUNTING_VALUE}"),
        ));
    }
    Ok(())
}

/// Stable placement of `items` by a small integer key
///
/// Builds a frequency table of `max_key + 1` slots, turns it into running
/// totals, and places items scanning from the end so equal keys keep their
/// input order.
///
/// # Errors
///
/// Returns an error if any key exceeds `max_key`
pub fn stable_counting_order<T: Copy>(
    items: &[T],
    max_key: usize,
    key: impl Fn(&T) -> usize,
) -> Result<Vec<T>> {
    let table_len = max_key.saturating_add(1);
    let mut counts = vec![0usize; table_len];
    for item in items {
        let k = key(item);
        let count = counts.get_mut(k).ok_or(AnimationError::IndexOutOfBounds {
            index: k,
            len: table_len,
        })?;
        *count += 1;
    }

    let mut running = 0;
    for count in &mut counts {
        running += *count;
        *count = running;
    }

    let mut placed: Vec<Option<T>> = vec![None; items.len()];
    for item in items.iter().rev() {
        let k = key(item);
        let count = counts.get_mut(k).ok_or(AnimationError::IndexOutOfBounds {
            index: k,
            len: table_len,
        })?;
        *count -= 1;
        if let Some(slot) = placed.get_mut(*count) {
            *slot = Some(*item);
        }
    }

    Ok(placed.into_iter().flatten().collect())
}

/// Sort with a frequency table, then write the result back left to right
///
/// Every write is highlighted as swapping. Input is validated before any
/// value or bar changes.
///
/// # Errors
///
/// Returns an unsupported input error for negative or oversized values, or
/// an error from the scheduler
pub fn counting_sort<S: Scheduler>(stepper: &mut Stepper<S>) -> Result<()> {
    let values = stepper.values().to_vec();
    tracing::debug!(n = values.len(), "counting sort started");

    if let Err(err) = validate_counting_input(&values) {
        tracing::warn!(%err, "counting sort rejected input");
        return Err(err);
    }
    let Some(&max) = values.iter().max() else {
        return Ok(());
    };

    let max_key = usize::try_from(max).map_err(|err| unsupported_input(PROCEDURE, &err))?;
    let output = stable_counting_order(&values, max_key, |&value| {
        usize::try_from(value).unwrap_or(usize::MAX)
    })?;

    for (index, value) in output.into_iter().enumerate() {
        stepper.set_value(index, value)?;
        stepper.highlight(&[index], Marker::Swapping)?;
    }

    tracing::debug!(writes = stepper.stats().writes, "counting sort finished");
    Ok(())
}
