//! Schedule-optimization metrics for two fixed bus routes.
//!
//! Turns stop-level survey data (times, distances, passenger loads,
//! segment costs) for lines 74 and 75 into pairwise travel-time
//! matrices, passenger- and cost-weighted aggregates, and optimal
//! dispatch frequencies, assembled into one read-only report for
//! presentation collaborators.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `LineDataset`, `LinePair`,
//!   `FleetConfig`, `LineResult`, `OptimizationReport`
//! - **`validation`**: Dataset integrity checks (stop count, capacity,
//!   monotonicity)
//! - **`import`**: Tabular survey-row accumulation and csv reading
//! - **`analysis`**: Time matrices and weighted aggregates
//! - **`frequency`**: Operating cost, peak demand, dispatch frequencies
//! - **`optimizer`**: `RouteOptimizer`, the composition root
//! - **`export`**: Delimited report writer
//!
//! # Architecture
//!
//! The pipeline is pure and synchronous: `LineDataset` values flow
//! through `analysis` and `frequency` into an `OptimizationReport`
//! that owns all of its derived arrays. The only fallible step is
//! import validation; everything downstream is total over validated
//! eight-stop data. Rendering, DOM wiring, and file transport belong
//! to the consumers of the report, not to this crate.
//!
//! # References
//!
//! - Ceder (2016), "Public Transit Planning and Operation"
//! - Vuchic (2005), "Urban Transit: Operations, Planning, and Economics"

pub mod analysis;
pub mod export;
pub mod frequency;
pub mod import;
pub mod models;
pub mod optimizer;
pub mod validation;
