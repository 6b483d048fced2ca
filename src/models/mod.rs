//! Transit line domain models.
//!
//! Core data types for the optimization pipeline: the raw per-stop
//! datasets, the fleet configuration, and the derived report structure
//! consumed by presentation collaborators.
//!
//! # Domain Mappings
//!
//! | line-optim | Survey sheet | Report |
//! |------------|--------------|--------|
//! | LineDataset | One line's eight stop rows | — |
//! | FleetConfig | Vehicle & cost parameters | — |
//! | LineResult | — | One line's derived block |
//! | OptimizationReport | — | Full run output |

mod config;
mod defaults;
mod line;
mod report;

pub use config::FleetConfig;
pub use line::{LineDataset, LineId, LinePair, STOP_COUNT};
pub use report::{
    transfer_points, Intersection, LineResult, OptimizationReport, StopCoordinate,
};
