//! Optimization run assembly.
//!
//! [`RouteOptimizer`] owns the two line datasets and the fleet
//! configuration, and composes the analysis and frequency layers into
//! an [`OptimizationReport`]. Each run returns a fresh report by value;
//! the optimizer holds no derived state between runs.

use log::debug;

use crate::frequency::FrequencyPlan;
use crate::import::{build_from_records, StopRecord};
use crate::models::{
    transfer_points, FleetConfig, LinePair, LineResult, OptimizationReport,
};
use crate::validation::ValidationError;

/// Computes optimization reports for the two fixed lines.
///
/// Starts from the built-in reference datasets and the default fleet
/// configuration; both are injectable.
///
/// # Example
///
/// ```
/// use line_optim::optimizer::RouteOptimizer;
///
/// let report = RouteOptimizer::new().optimize();
/// assert!((report.line74.time_matrix[0][7] - 54.0).abs() < 1e-10);
/// assert!(report.frequencies.f74 >= 8.0);
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer {
    lines: LinePair,
    config: FleetConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer over the reference datasets with the
    /// default fleet configuration.
    pub fn new() -> Self {
        Self {
            lines: LinePair::reference(),
            config: FleetConfig::default(),
        }
    }

    /// Replaces the line datasets.
    pub fn with_lines(mut self, lines: LinePair) -> Self {
        self.lines = lines;
        self
    }

    /// Replaces the fleet configuration.
    pub fn with_config(mut self, config: FleetConfig) -> Self {
        self.config = config;
        self
    }

    /// The datasets the next run will use.
    pub fn lines(&self) -> &LinePair {
        &self.lines
    }

    /// The active fleet configuration.
    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Replaces the datasets from imported survey rows.
    ///
    /// All-or-nothing: on any validation error the existing datasets
    /// are left untouched.
    pub fn load_records(&mut self, records: &[StopRecord]) -> Result<(), Vec<ValidationError>> {
        let lines = build_from_records(records, &self.config)?;
        debug!("Replacing line datasets from {} imported rows", records.len());
        self.lines = lines;
        Ok(())
    }

    /// Runs the full pipeline and assembles the report.
    pub fn optimize(&self) -> OptimizationReport {
        OptimizationReport {
            line74: LineResult::calculate(&self.lines.line74),
            line75: LineResult::calculate(&self.lines.line75),
            frequencies: FrequencyPlan::calculate(&self.lines, &self.config),
            intersections: transfer_points(),
        }
    }
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineId, STOP_COUNT};
    use crate::validation::ValidationErrorKind;

    fn reference_records() -> Vec<StopRecord> {
        let pair = LinePair::reference();
        let mut rows = Vec::new();
        for line in [&pair.line74, &pair.line75] {
            let mut previous_load = 0i64;
            for i in 0..STOP_COUNT {
                let target = i64::from(line.passengers[i]);
                let delta = target - previous_load;
                previous_load = target;
                rows.push(StopRecord {
                    line_id: line.id.label().to_owned(),
                    stop_index: i as u32,
                    stop_name: line.stop_names[i].clone(),
                    distance_km: line.distances[i],
                    inter_stop_minutes: line.inter_stop_times[i],
                    boarding: delta.max(0) as u32,
                    alighting: (-delta).max(0) as u32,
                });
            }
        }
        rows
    }

    #[test]
    fn test_reference_run_end_to_end() {
        let report = RouteOptimizer::new().optimize();

        assert!((report.line74.time_matrix[0][7] - 54.0).abs() < 1e-10);
        assert!((report.line74.time_matrix[3][5] - 24.0).abs() < 1e-10);
        assert_eq!(report.line74.passenger_vector, [15, 13, 14, 20, 13, 18, 21, 16]);
        assert!((report.frequencies.f74 - 8.0).abs() < 1e-10);
        assert!((report.frequencies.f75 - 8.0).abs() < 1e-10);
        assert_eq!(report.intersections.len(), 3);
    }

    #[test]
    fn test_line_accessor() {
        let report = RouteOptimizer::new().optimize();
        assert_eq!(report.line(LineId::Line74).id, LineId::Line74);
        assert_eq!(report.line(LineId::Line75).id, LineId::Line75);
    }

    #[test]
    fn test_load_records_replaces_datasets() {
        let mut optimizer = RouteOptimizer::new();
        let mut rows = reference_records();
        for row in rows.iter_mut().filter(|r| r.line_id == "74") {
            row.inter_stop_minutes *= 2.0;
        }

        optimizer.load_records(&rows).unwrap();
        assert!((optimizer.lines().line74.total_time_minutes() - 108.0).abs() < 1e-10);
    }

    #[test]
    fn test_failed_import_leaves_datasets_untouched() {
        let mut optimizer = RouteOptimizer::new();
        let before = optimizer.lines().clone();

        let mut rows = reference_records();
        rows.truncate(10); // Line 74 complete, line 75 cut short

        let errors = optimizer.load_records(&rows).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::WrongStopCount));
        assert_eq!(optimizer.lines().line75.passengers, before.line75.passengers);
        assert_eq!(
            optimizer.lines().line75.stop_names,
            before.line75.stop_names
        );
    }

    #[test]
    fn test_config_threads_into_frequencies() {
        // A 5-seat fleet pushes both lines past the 8 trips/h floor:
        // peak demands 42 and 74 need 8.4 and 14.8 trips/h
        let optimizer =
            RouteOptimizer::new().with_config(FleetConfig::default().with_capacity(5));
        let report = optimizer.optimize();
        assert!((report.frequencies.f74 - 8.4).abs() < 1e-10);
        assert!((report.frequencies.f75 - 14.8).abs() < 1e-10);
    }

    #[test]
    fn test_report_serializes_with_line_keys() {
        let report = RouteOptimizer::new().optimize();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("74").is_some());
        assert!(json.get("75").is_some());
        assert!(json.get("frequencies").is_some());
        assert!(json.get("intersections").is_some());
        assert_eq!(json["intersections"][0]["name"], "Hospital Japones");
    }
}
