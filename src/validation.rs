//! Input validation for line datasets.
//!
//! Checks the structural invariants raw survey data must satisfy
//! before the numeric pipeline runs:
//! - Exactly eight stops per line (tabular import only; the dataset
//!   arrays fix the length at the type level)
//! - Zero origin elements (times, distance, segment cost)
//! - Non-decreasing cumulative times and distances
//! - Non-negative inter-stop times and segment costs
//! - Passenger loads within vehicle capacity

use std::error::Error;
use std::fmt;

use crate::models::{FleetConfig, LineDataset, STOP_COUNT};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A line did not accumulate exactly eight stops.
    WrongStopCount,
    /// A passenger load exceeds vehicle capacity.
    CapacityExceeded,
    /// A cumulative sequence (times, distances) decreases.
    NonMonotonicSequence,
    /// An origin element that must be zero is not.
    NonZeroOrigin,
    /// A duration or cost is negative.
    NegativeValue,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ValidationError {}

/// Validates a single line dataset against the fleet configuration.
///
/// Checks:
/// 1. Origin elements are zero (inter-stop time, cumulative time,
///    distance, segment cost)
/// 2. Cumulative times and distances are non-decreasing
/// 3. Inter-stop times and segment costs are non-negative
/// 4. Every passenger load is within `config.capacity`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_dataset(line: &LineDataset, config: &FleetConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let label = line.id.label();

    check_zero_origin(&mut errors, label, "inter_stop_times", line.inter_stop_times[0]);
    check_zero_origin(&mut errors, label, "cumulative_times", line.cumulative_times[0]);
    check_zero_origin(&mut errors, label, "distances", line.distances[0]);
    check_zero_origin(&mut errors, label, "segment_costs", line.segment_costs[0]);

    check_non_decreasing(&mut errors, label, "cumulative_times", &line.cumulative_times);
    check_non_decreasing(&mut errors, label, "distances", &line.distances);

    check_non_negative(&mut errors, label, "inter_stop_times", &line.inter_stop_times);
    check_non_negative(&mut errors, label, "segment_costs", &line.segment_costs);

    for (i, &load) in line.passengers.iter().enumerate() {
        if load > config.capacity {
            errors.push(ValidationError::new(
                ValidationErrorKind::CapacityExceeded,
                format!(
                    "Line {label} stop {i}: passenger load {load} exceeds capacity {}",
                    config.capacity
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_zero_origin(errors: &mut Vec<ValidationError>, label: &str, field: &str, value: f64) {
    if value != 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonZeroOrigin,
            format!("Line {label}: {field}[0] must be 0, got {value}"),
        ));
    }
}

fn check_non_decreasing(
    errors: &mut Vec<ValidationError>,
    label: &str,
    field: &str,
    values: &[f64; STOP_COUNT],
) {
    for i in 1..STOP_COUNT {
        if values[i] < values[i - 1] {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonMonotonicSequence,
                format!(
                    "Line {label}: {field} decreases at stop {i} ({} -> {})",
                    values[i - 1],
                    values[i]
                ),
            ));
        }
    }
}

fn check_non_negative(
    errors: &mut Vec<ValidationError>,
    label: &str,
    field: &str,
    values: &[f64; STOP_COUNT],
) {
    for (i, &value) in values.iter().enumerate() {
        if value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeValue,
                format!("Line {label}: {field}[{i}] is negative ({value})"),
            ));
        }
    }
}
