//! Line (route) model.
//!
//! A line is one of two fixed bus routes, each with exactly
//! [`STOP_COUNT`] ordered stops. The dataset holds the raw per-stop
//! observations everything else is derived from: inter-stop and
//! cumulative travel times, cumulative distances, hourly passenger
//! loads, and per-segment operating costs.
//!
//! # Reference
//! Ceder (2016), "Public Transit Planning and Operation", Ch. 2

use serde::{Deserialize, Serialize};

/// Number of stops on every line.
///
/// Both routes run the same third-ring corridor and are surveyed at the
/// same eight checkpoints, so the stop count is fixed at the type level.
pub const STOP_COUNT: usize = 8;

/// Identifier of one of the two fixed routes.
///
/// The core works exclusively with this enum; the string labels `"74"`
/// and `"75"` appear only at the import/export boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineId {
    /// Line 74 (inner third ring).
    #[serde(rename = "74")]
    Line74,
    /// Line 75 (outer third ring).
    #[serde(rename = "75")]
    Line75,
}

impl LineId {
    /// Both lines, in report order.
    pub const ALL: [LineId; 2] = [LineId::Line74, LineId::Line75];

    /// The external label used in tabular data and exports.
    pub fn label(self) -> &'static str {
        match self {
            LineId::Line74 => "74",
            LineId::Line75 => "75",
        }
    }

    /// Parses an external label. Unrecognized labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "74" => Some(LineId::Line74),
            "75" => Some(LineId::Line75),
            _ => None,
        }
    }

    /// Vertical lane offset used when projecting stops to 2-D
    /// coordinates (line 74 plots on y = 0, line 75 on y = 1).
    pub fn lane_offset(self) -> f64 {
        match self {
            LineId::Line74 => 0.0,
            LineId::Line75 => 1.0,
        }
    }
}

/// Raw per-stop observations for one line.
///
/// All six sequences are indexed by physical stop order along the
/// route. Element 0 is the origin stop, so `inter_stop_times[0]`,
/// `cumulative_times[0]`, `distances[0]`, and `segment_costs[0]` are
/// all zero; `cumulative_times` and `distances` are non-decreasing and
/// every passenger count stays within vehicle capacity. These
/// invariants are checked by [`crate::validation::validate_dataset`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineDataset {
    /// Which route these observations belong to.
    pub id: LineId,
    /// Stop names in route order. Unique in practice, not enforced.
    pub stop_names: [String; STOP_COUNT],
    /// Travel minutes from the previous stop (0 at the origin).
    pub inter_stop_times: [f64; STOP_COUNT],
    /// Travel minutes from the origin to each stop.
    pub cumulative_times: [f64; STOP_COUNT],
    /// Kilometers from the origin to each stop.
    pub distances: [f64; STOP_COUNT],
    /// Hourly passenger load observed at each stop.
    pub passengers: [u32; STOP_COUNT],
    /// Operating cost attributed to the segment ending at each stop.
    pub segment_costs: [f64; STOP_COUNT],
}

impl LineDataset {
    /// Route length: distance from the origin to the last stop (km).
    pub fn total_distance_km(&self) -> f64 {
        self.distances[STOP_COUNT - 1]
    }

    /// End-to-end travel time (minutes).
    pub fn total_time_minutes(&self) -> f64 {
        self.cumulative_times[STOP_COUNT - 1]
    }

    /// Largest hourly passenger load observed on the line.
    pub fn peak_load(&self) -> u32 {
        self.passengers.iter().copied().max().unwrap_or(0)
    }
}

/// The two datasets an optimization run operates on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinePair {
    /// Line 74 observations.
    pub line74: LineDataset,
    /// Line 75 observations.
    pub line75: LineDataset,
}

impl LinePair {
    /// Returns the dataset for the given line.
    pub fn get(&self, id: LineId) -> &LineDataset {
        match id {
            LineId::Line74 => &self.line74,
            LineId::Line75 => &self.line75,
        }
    }
}
