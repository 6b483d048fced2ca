//! Optimization report model.
//!
//! The read-only result structure handed to presentation collaborators
//! (heatmaps, route plots, HTML summaries, delimited export). One
//! derived block per line plus the frequency plan and the fixed
//! transfer-point metadata. Created fresh on every optimization run;
//! owns copies of everything it carries.
//!
//! Serialized field names follow the established report contract
//! (`timeMatrix`, `aPrime`, line keys `"74"`/`"75"`, ...).

use std::array;

use serde::{Deserialize, Serialize};

use crate::analysis::{build_time_matrix, LineAggregates, TimeMatrix};
use crate::frequency::FrequencyPlan;
use crate::models::{LineDataset, LineId, STOP_COUNT};

/// 2-D projection of one stop for route plotting.
///
/// `x` is the cumulative distance from the origin; `y` is the line's
/// lane offset so the two routes plot on parallel tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StopCoordinate {
    /// Cumulative distance from the origin (km).
    pub x: f64,
    /// Lane offset of the owning line.
    pub y: f64,
}

/// A named transfer point shared by both lines.
///
/// Fixed domain knowledge, not computed: the `stops` labels use the
/// surveyors' 1-based `"<line>-<stop>"` convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intersection {
    /// Transfer point name.
    pub name: String,
    /// Matching stop labels, one per line.
    pub stops: [String; 2],
}

/// The three transfer points where lines 74 and 75 meet.
pub fn transfer_points() -> Vec<Intersection> {
    [
        ("Hospital Japones", "74-2", "75-2"),
        ("Mercado Abasto", "74-6", "75-6"),
        ("Av. Santos Dumont", "74-8", "75-8"),
    ]
    .into_iter()
    .map(|(name, on74, on75)| Intersection {
        name: name.to_owned(),
        stops: [on74.to_owned(), on75.to_owned()],
    })
    .collect()
}

/// All derived results for one line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResult {
    /// The line these results describe.
    pub id: LineId,
    /// Stop-to-stop travel minutes.
    pub time_matrix: TimeMatrix,
    /// Hourly passenger load per stop.
    pub passenger_vector: [u32; STOP_COUNT],
    /// Segment operating cost per stop.
    pub cost_vector: [f64; STOP_COUNT],
    /// Passenger-weighted time per origin stop.
    pub weighted_time: [f64; STOP_COUNT],
    /// Cost-weighted time per origin stop.
    pub a_prime: [f64; STOP_COUNT],
    /// Composite cost-weighted passenger-minutes.
    pub final_result: f64,
    /// 2-D stop projection for route plotting.
    pub coordinates: [StopCoordinate; STOP_COUNT],
    /// Stop visiting order (always `0..7`; the routes are linear).
    #[serde(rename = "route")]
    pub stop_order: [usize; STOP_COUNT],
    /// Stop names in route order.
    pub stop_names: [String; STOP_COUNT],
    /// Travel minutes from the origin to each stop.
    pub cumulative_times: [f64; STOP_COUNT],
    /// Kilometers from the origin to each stop.
    pub distances: [f64; STOP_COUNT],
    /// Travel minutes from the previous stop.
    pub inter_stop_times: [f64; STOP_COUNT],
}

impl LineResult {
    /// Derives the full result block for one line.
    pub fn calculate(line: &LineDataset) -> Self {
        let time_matrix = build_time_matrix(&line.cumulative_times);
        let aggregates = LineAggregates::calculate(&time_matrix, line);
        let coordinates = array::from_fn(|i| StopCoordinate {
            x: line.distances[i],
            y: line.id.lane_offset(),
        });

        Self {
            id: line.id,
            time_matrix,
            passenger_vector: line.passengers,
            cost_vector: line.segment_costs,
            weighted_time: aggregates.weighted_time,
            a_prime: aggregates.a_prime,
            final_result: aggregates.final_result,
            coordinates,
            stop_order: array::from_fn(|i| i),
            stop_names: line.stop_names.clone(),
            cumulative_times: line.cumulative_times,
            distances: line.distances,
            inter_stop_times: line.inter_stop_times,
        }
    }
}

/// The complete result of one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Derived results for line 74.
    #[serde(rename = "74")]
    pub line74: LineResult,
    /// Derived results for line 75.
    #[serde(rename = "75")]
    pub line75: LineResult,
    /// Optimal frequencies and economics for both lines.
    pub frequencies: FrequencyPlan,
    /// Fixed transfer-point metadata.
    pub intersections: Vec<Intersection>,
}

impl OptimizationReport {
    /// Returns the result block for the given line.
    pub fn line(&self, id: LineId) -> &LineResult {
        match id {
            LineId::Line74 => &self.line74,
            LineId::Line75 => &self.line75,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LinePair;

    #[test]
    fn test_line_result_copies_raw_arrays() {
        let line = LinePair::reference().line74;
        let result = LineResult::calculate(&line);

        assert_eq!(result.id, LineId::Line74);
        assert_eq!(result.passenger_vector, line.passengers);
        assert_eq!(result.stop_names, line.stop_names);
        for i in 0..STOP_COUNT {
            assert!((result.cost_vector[i] - line.segment_costs[i]).abs() < 1e-10);
            assert!((result.cumulative_times[i] - line.cumulative_times[i]).abs() < 1e-10);
            assert!((result.distances[i] - line.distances[i]).abs() < 1e-10);
            assert!((result.inter_stop_times[i] - line.inter_stop_times[i]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_line_result_coordinates() {
        let line = LinePair::reference().line75;
        let result = LineResult::calculate(&line);
        for i in 0..STOP_COUNT {
            assert!((result.coordinates[i].x - line.distances[i]).abs() < 1e-10);
            assert!((result.coordinates[i].y - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_stop_order_is_identity() {
        let result = LineResult::calculate(&LinePair::reference().line74);
        assert_eq!(result.stop_order, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_transfer_points() {
        let points = transfer_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].name, "Hospital Japones");
        assert_eq!(points[0].stops, ["74-2".to_owned(), "75-2".to_owned()]);
        assert_eq!(points[2].stops[1], "75-8");
    }

    #[test]
    fn test_line_result_wire_names() {
        let result = LineResult::calculate(&LinePair::reference().line74);
        let json = serde_json::to_value(&result).unwrap();
        for field in [
            "timeMatrix",
            "passengerVector",
            "costVector",
            "weightedTime",
            "aPrime",
            "finalResult",
            "coordinates",
            "route",
            "stopNames",
            "cumulativeTimes",
            "distances",
            "interStopTimes",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["id"], "74");
    }
}
