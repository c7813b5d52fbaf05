//! Core decoding engine for CellScope
//!
//! Decodes crowdsourced LTE measurement rows into classified base-station
//! records with a timing-advance based radius estimate, then aggregates them
//! per cell for listing and map display.
//!
//! Key properties:
//! - Pure, synchronous functions over immutable input
//! - Row-level failures skip the row, never the batch
//! - Absent RSRP/TA values propagate as `None` instead of defaulting to 0
//!
//! ```no_run
//! use cellscope_core::{CellPipeline, DecoderConfig, RawMeasurement};
//!
//! let pipeline = CellPipeline::new(DecoderConfig::tower_collector()).unwrap();
//! let rows: Vec<RawMeasurement> = Vec::new(); // from a CSV loader
//!
//! let report = pipeline.run(&rows);
//! for cell in &report.cells {
//!     println!("{} psc={:?} rsrp={:?}", cell.key.station_key, cell.key.psc, cell.max_rsrp);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod errors;
pub mod filter;
pub mod pipeline;
pub mod records;
pub mod registry;
pub mod station;
pub mod time;
pub mod traits;

// Public API
pub use aggregate::aggregate_by_cell;
pub use config::{CellIdRange, CellMask, ConfigLoadError, DecoderConfig};
pub use decoder::{
    adjust_timing_advance, compute_calibration_offset, decode_cell_number, estimate_radius,
    CellRecordDecoder,
};
pub use errors::{DecodeError, DecodeResult};
pub use filter::{
    filter_cell_id_range, filter_known_stations, filter_seen_since, filter_station_type,
    filter_within_bounds, sort_by_cell_id,
};
pub use pipeline::{BatchReport, CellPipeline};
pub use records::{AggregatedCell, CellKey, DecodedRecord, GeoBounds, RawMeasurement};
pub use registry::{expand_station_identifier_ranges, ExpandedStation, RegistryEntry};
pub use station::{classify_station_type, StationType};
pub use traits::{CellIdentified, Observed, Positioned};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
