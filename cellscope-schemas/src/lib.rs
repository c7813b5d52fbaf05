//! Source Row Schemas for CellScope
//!
//! ## Overview
//!
//! The decoder in `cellscope-core` works on typed [`RawMeasurement`] rows.
//! This crate describes what the upstream exports actually look like and
//! converts them:
//!
//! - [`tower_collector::TowerCollectorRow`]: per-sighting rows from the
//!   TowerCollector app (14-bit cell-number mask, TA present)
//! - [`mls::MlsExportRow`]: per-cell rows in the MLS CSV layout (legacy
//!   mask, no TA)
//! - [`registry::StationRegistryRecord`]: known-station registries used for
//!   exclusion
//!
//! Rows arrive already parsed by whatever loader the caller uses; any serde
//! format works. The JSON helpers below cover the common case.
//!
//! ## Usage Example
//!
//! ```rust
//! use cellscope_core::CellPipeline;
//! use cellscope_schemas::{measurements_from_json, SourceFormat};
//!
//! let json = r#"[
//!   {"cell": 188783628, "unit": "301", "lon": 132.77, "lat": 33.84,
//!    "created": 1704067200, "updated": 1714555800, "averageSignal": -97}
//! ]"#;
//!
//! let format = SourceFormat::MlsExport;
//! let config = format.default_config();
//! let rows = measurements_from_json(format, json, config.timezone)?;
//!
//! let report = CellPipeline::new(config)?.run(&rows);
//! assert_eq!(report.cells[0].key.station_key, "737436-12");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use cellscope_core::{DecodeError, DecoderConfig, RawMeasurement};
use chrono_tz::Tz;
use log::{debug, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

mod lenient;
pub mod mls;
pub mod registry;
pub mod tower_collector;

pub use mls::MlsExportRow;
pub use registry::{StationRegistryRecord, StationSite};
pub use tower_collector::TowerCollectorRow;

/// Schema-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse row: {0}")]
    Parse(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Upstream dataset variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// TowerCollector per-sighting export
    TowerCollector,
    /// MLS-compatible per-cell export
    MlsExport,
}

impl SourceFormat {
    /// Decoder preset matching this variant
    pub fn default_config(&self) -> DecoderConfig {
        match self {
            SourceFormat::TowerCollector => DecoderConfig::tower_collector(),
            SourceFormat::MlsExport => DecoderConfig::mls_export(),
        }
    }
}

/// Deserialize a JSON array of rows
pub fn rows_from_json<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, SchemaError> {
    Ok(serde_json::from_str(json)?)
}

/// Deserialize and convert a JSON array of rows into measurements
///
/// Rows that fail conversion are logged and skipped; a malformed document
/// is an error.
pub fn measurements_from_json(
    format: SourceFormat,
    json: &str,
    tz: Tz,
) -> Result<Vec<RawMeasurement>, SchemaError> {
    match format {
        SourceFormat::TowerCollector => {
            let rows: Vec<TowerCollectorRow> = rows_from_json(json)?;
            Ok(convert_rows(rows, |row| row.into_measurement(tz)))
        }
        SourceFormat::MlsExport => {
            let rows: Vec<MlsExportRow> = rows_from_json(json)?;
            Ok(convert_rows(rows, |row| row.into_measurement(tz)))
        }
    }
}

fn convert_rows<T, F>(rows: Vec<T>, convert: F) -> Vec<RawMeasurement>
where
    F: Fn(T) -> Result<RawMeasurement, SchemaError>,
{
    let total = rows.len();
    let converted: Vec<RawMeasurement> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match convert(row) {
            Ok(measurement) => Some(measurement),
            Err(err) => {
                warn!("Skipping source row {}: {}", index, err);
                None
            }
        })
        .collect();

    debug!("Converted {} of {} source rows", converted.len(), total);
    converted
}
