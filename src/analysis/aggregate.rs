//! Weighted travel-time aggregates.
//!
//! Reduces the time matrix against the per-stop passenger and cost
//! vectors, then collapses both into a single composite figure per
//! line:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Weighted time | row i reduced by passenger loads: passenger-minutes generated from stop i |
//! | A-prime | row i reduced by segment costs: cost-scaled minutes from stop i |
//! | Final result | A-prime reduced by passenger loads: cost-weighted passenger-minutes |
//!
//! All three are pure functions of their inputs.

use serde::{Deserialize, Serialize};

use crate::analysis::TimeMatrix;
use crate::models::{LineDataset, STOP_COUNT};

/// Passenger-weighted time vector.
///
/// Element i is `sum over j of matrix[i][j] * passengers[j]`: the
/// passenger-minutes generated from stop i to every other stop.
pub fn weighted_time(matrix: &TimeMatrix, passengers: &[u32; STOP_COUNT]) -> [f64; STOP_COUNT] {
    let mut result = [0.0; STOP_COUNT];
    for (i, row) in matrix.iter().enumerate() {
        result[i] = row
            .iter()
            .zip(passengers.iter())
            .map(|(&time, &load)| time * f64::from(load))
            .sum();
    }
    result
}

/// Cost-weighted time vector ("A-prime").
///
/// Same reduction as [`weighted_time`] with the monetary segment cost
/// as the destination weight instead of passenger load.
pub fn a_prime(matrix: &TimeMatrix, segment_costs: &[f64; STOP_COUNT]) -> [f64; STOP_COUNT] {
    let mut result = [0.0; STOP_COUNT];
    for (i, row) in matrix.iter().enumerate() {
        result[i] = row
            .iter()
            .zip(segment_costs.iter())
            .map(|(&time, &cost)| time * cost)
            .sum();
    }
    result
}

/// Composite cost-weighted passenger-minutes for a line.
///
/// `sum over i of a_prime[i] * passengers[i]`, a single scalar ranking
/// how expensive the line's travel time is under current loads.
pub fn final_result(a_prime: &[f64; STOP_COUNT], passengers: &[u32; STOP_COUNT]) -> f64 {
    a_prime
        .iter()
        .zip(passengers.iter())
        .map(|(&value, &load)| value * f64::from(load))
        .sum()
}

/// The three aggregates for one line, computed together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineAggregates {
    /// Passenger-weighted time per origin stop.
    pub weighted_time: [f64; STOP_COUNT],
    /// Cost-weighted time per origin stop.
    pub a_prime: [f64; STOP_COUNT],
    /// Composite cost-weighted passenger-minutes.
    pub final_result: f64,
}

impl LineAggregates {
    /// Computes all three aggregates from a line's time matrix and raw
    /// vectors.
    pub fn calculate(matrix: &TimeMatrix, line: &LineDataset) -> Self {
        let weighted = weighted_time(matrix, &line.passengers);
        let a_prime = a_prime(matrix, &line.segment_costs);
        let final_result = final_result(&a_prime, &line.passengers);
        Self {
            weighted_time: weighted,
            a_prime,
            final_result,
        }
    }
}
