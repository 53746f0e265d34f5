use std::fmt;

use crate::{ProgramConfig, format_weight, round_to_nearest};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NewOneRepMax {
    Estimated(f64),
    /// The load of bodyweight exercises changes with the lifter, so no formula applies.
    Manual,
}

impl fmt::Display for NewOneRepMax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NewOneRepMax::Estimated(value) => write!(f, "{}", format_weight(*value)),
            NewOneRepMax::Manual => write!(f, "Calculate manually"),
        }
    }
}

/// Estimate a new 1RM from the weight and reps of the final training week (Epley formula).
#[must_use]
pub fn estimate_new_one_rep_max(
    config: &ProgramConfig,
    exercise: &str,
    weight: f64,
    reps: u32,
) -> NewOneRepMax {
    if config.is_pullup(exercise) {
        return NewOneRepMax::Manual;
    }
    NewOneRepMax::Estimated(round_to_nearest(
        weight * (1.0 + f64::from(reps) / 30.0),
        config.weight_rounding,
    ))
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EstimateError {
    #[error("Weight must be a decimal and reps must be an integer")]
    InvalidInput,
}

/// Estimate a new 1RM from text entered by the lifter.
///
/// Unlike log entries, invalid input is reported instead of replaced by a default.
pub fn estimate_new_one_rep_max_from_input(
    config: &ProgramConfig,
    exercise: &str,
    weight: &str,
    reps: &str,
) -> Result<NewOneRepMax, EstimateError> {
    let weight = weight
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
        .ok_or(EstimateError::InvalidInput)?;
    let reps = reps
        .trim()
        .parse::<u32>()
        .map_err(|_| EstimateError::InvalidInput)?;
    Ok(estimate_new_one_rep_max(config, exercise, weight, reps))
}
