//! Input collection and validation ahead of a run
//!
//! Everything a run can reject up front is rejected here, so a run that
//! starts always has a non-empty, correctly sized value list.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::counting::validate_counting_input;
use crate::algorithm::procedure::{Procedure, RunConfig};
use crate::io::configuration::MAX_VALUES;
use crate::io::error::{AnimationError, Result, invalid_parameter};

/// Parse a comma-separated list of integers
///
/// Surrounding whitespace is ignored per token. Empty tokens are invalid.
///
/// # Errors
///
/// Returns an error if the list is blank or any token is not an integer
pub fn parse_values(text: &str) -> Result<Vec<i64>> {
    if text.trim().is_empty() {
        return Err(AnimationError::EmptyInput);
    }

    text.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<i64>().map_err(|_err| AnimationError::InvalidValue {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Check supplied values against the declared count and the procedure
///
/// # Errors
///
/// Returns an error if:
/// - No values were supplied, or the declared count is zero
/// - The declared count differs from the number of values
/// - More than [`MAX_VALUES`] values were supplied
/// - Counting sort was chosen and a value is negative or too large
pub fn validate(count: Option<usize>, values: &[i64], procedure: Procedure) -> Result<()> {
    if count == Some(0) {
        return Err(invalid_parameter("count", &0, &"must be at least 1"));
    }
    if values.is_empty() {
        return Err(AnimationError::EmptyInput);
    }
    if let Some(expected) = count.filter(|&expected| expected != values.len()) {
        return Err(AnimationError::InputMismatch {
            expected,
            actual: values.len(),
        });
    }
    if values.len() > MAX_VALUES {
        return Err(invalid_parameter(
            "values",
            &values.len(),
            &format!("at most {MAX_VALUES} values are supported"),
        ));
    }
    if procedure == Procedure::Count {
        validate_counting_input(values)?;
    }
    Ok(())
}

/// Build a run configuration from user-supplied text
///
/// # Errors
///
/// Returns an error if parsing or validation fails; see [`validate`]
pub fn collect(count: Option<usize>, text: &str, procedure: Procedure) -> Result<RunConfig> {
    let values = parse_values(text)?;
    validate(count, &values, procedure)?;
    Ok(RunConfig::new(procedure, values))
}

/// Generate `count` reproducible values in `0..=max`
///
/// # Errors
///
/// Returns an error if `count` is zero or above [`MAX_VALUES`], or `max` is negative
pub fn random_values(count: usize, max: i64, seed: u64) -> Result<Vec<i64>> {
    if count == 0 || count > MAX_VALUES {
        return Err(invalid_parameter(
            "random",
            &count,
            &format!("must be between 1 and {MAX_VALUES}"),
        ));
    }
    if max < 0 {
        return Err(invalid_parameter("max_value", &max, &"must not be negative"));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..count).map(|_| rng.random_range(0..=max)).collect())
}
