//! Tabular import of stop-level survey rows.
//!
//! Consumes ordered row records (one per stop observation) and
//! accumulates them into a validated [`LinePair`]:
//! - passenger load as a running `max(0, previous + boarding - alighting)`
//! - cumulative time as a running sum of inter-stop minutes
//! - segment cost from the distance delta and the fleet fuel price
//!
//! Recoverable anomalies (unrecognized line ids, negative load swings,
//! out-of-order distances) are logged and absorbed; only a wrong stop
//! count or a capacity violation fails the import, and then with every
//! detected issue collected.

use std::io;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::frequency::FUEL_FACTOR;
use crate::models::{FleetConfig, LineDataset, LineId, LinePair, STOP_COUNT};
use crate::validation::{ValidationError, ValidationErrorKind};

/// One imported survey row.
///
/// Wire names follow the upload template headers (`lineId`,
/// `distanceKm`, `boardingCount`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopRecord {
    /// External line label (`"74"` or `"75"`; anything else is skipped).
    pub line_id: String,
    /// Stop position as recorded by the surveyor.
    pub stop_index: u32,
    /// Stop name.
    pub stop_name: String,
    /// Cumulative distance from the origin (km).
    pub distance_km: f64,
    /// Travel minutes from the previous stop.
    pub inter_stop_minutes: f64,
    /// Passengers boarding at this stop.
    #[serde(rename = "boardingCount")]
    pub boarding: u32,
    /// Passengers alighting at this stop.
    #[serde(rename = "alightingCount")]
    pub alighting: u32,
}

/// Reads survey rows from delimited data with a header row.
pub fn read_stop_records<R: io::Read>(reader: R) -> Result<Vec<StopRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(reader);
    reader.deserialize().collect()
}

/// Builds both line datasets from ordered survey rows.
///
/// Rows are grouped by line id in input order; rows for unrecognized
/// lines are discarded, not errored. Fails when either line does not
/// accumulate exactly [`STOP_COUNT`] stops or when any accumulated
/// passenger load exceeds `config.capacity`, collecting all issues.
/// Has no side effects on failure.
pub fn build_from_records(
    records: &[StopRecord],
    config: &FleetConfig,
) -> Result<LinePair, Vec<ValidationError>> {
    let mut acc74 = LineAccumulator::default();
    let mut acc75 = LineAccumulator::default();

    for record in records {
        match LineId::from_label(&record.line_id) {
            Some(LineId::Line74) => acc74.push(record, config),
            Some(LineId::Line75) => acc75.push(record, config),
            None => {
                debug!(
                    "Discarding row for unrecognized line id {:?} (stop {:?})",
                    record.line_id, record.stop_name
                );
            }
        }
    }

    let mut errors = Vec::new();
    let line74 = acc74.finish(LineId::Line74, config, &mut errors);
    let line75 = acc75.finish(LineId::Line75, config, &mut errors);

    match (line74, line75) {
        (Some(line74), Some(line75)) if errors.is_empty() => Ok(LinePair { line74, line75 }),
        _ => Err(errors),
    }
}

/// Per-line accumulation state, in row order.
#[derive(Debug, Default)]
struct LineAccumulator {
    stop_names: Vec<String>,
    inter_stop_times: Vec<f64>,
    cumulative_times: Vec<f64>,
    distances: Vec<f64>,
    passengers: Vec<u32>,
    segment_costs: Vec<f64>,
    load: u32,
    elapsed_minutes: f64,
    previous_distance: f64,
}

impl LineAccumulator {
    fn push(&mut self, record: &StopRecord, config: &FleetConfig) {
        let swing = i64::from(self.load) + i64::from(record.boarding) - i64::from(record.alighting);
        if swing < 0 {
            debug!(
                "Line {} stop {:?}: alighting exceeds on-board count, clamping load to 0",
                record.line_id, record.stop_name
            );
        }
        self.load = swing.max(0) as u32;

        self.elapsed_minutes += record.inter_stop_minutes;

        let distance_delta = record.distance_km - self.previous_distance;
        let segment_cost = if distance_delta >= 0.0 {
            distance_delta * FUEL_FACTOR * config.fuel_cost_per_unit
        } else {
            warn!(
                "Line {} stop {:?}: distance goes backwards ({} -> {} km), costing segment at 0",
                record.line_id, record.stop_name, self.previous_distance, record.distance_km
            );
            0.0
        };
        self.previous_distance = record.distance_km;

        self.stop_names.push(record.stop_name.clone());
        self.inter_stop_times.push(record.inter_stop_minutes);
        self.cumulative_times.push(self.elapsed_minutes);
        self.distances.push(record.distance_km);
        self.passengers.push(self.load);
        self.segment_costs.push(segment_cost);
    }

    fn finish(
        self,
        id: LineId,
        config: &FleetConfig,
        errors: &mut Vec<ValidationError>,
    ) -> Option<LineDataset> {
        if self.stop_names.len() != STOP_COUNT {
            errors.push(ValidationError::new(
                ValidationErrorKind::WrongStopCount,
                format!(
                    "Line {}: expected {STOP_COUNT} stops, got {}",
                    id.label(),
                    self.stop_names.len()
                ),
            ));
            return None;
        }

        for (i, &load) in self.passengers.iter().enumerate() {
            if load > config.capacity {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CapacityExceeded,
                    format!(
                        "Line {} stop {i}: accumulated load {load} exceeds capacity {}",
                        id.label(),
                        config.capacity
                    ),
                ));
            }
        }

        Some(LineDataset {
            id,
            stop_names: std::array::from_fn(|i| self.stop_names[i].clone()),
            inter_stop_times: std::array::from_fn(|i| self.inter_stop_times[i]),
            cumulative_times: std::array::from_fn(|i| self.cumulative_times[i]),
            distances: std::array::from_fn(|i| self.distances[i]),
            passengers: std::array::from_fn(|i| self.passengers[i]),
            segment_costs: std::array::from_fn(|i| self.segment_costs[i]),
        })
    }
}
