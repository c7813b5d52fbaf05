//! TowerCollector export rows
//!
//! One row per cell sighting, as written by the TowerCollector Android app.
//! Timestamps are ISO-8601 strings in UTC; `ta` is frequently blank or
//! non-numeric and is coerced leniently.
//!
//! ```rust
//! use cellscope_schemas::tower_collector::TowerCollectorRow;
//!
//! let row: TowerCollectorRow = serde_json::from_str(r#"{
//!     "cell_id": 188783628, "short_cell_id": 737436, "rnc": 12, "psc": 301,
//!     "rsrp": -97, "ta": "5", "lat": 33.84, "lon": 132.77,
//!     "measured_at": "2024-05-01T09:30:00Z"
//! }"#)?;
//!
//! let raw = row.into_measurement(chrono_tz::Asia::Tokyo)?;
//! assert_eq!(raw.ta, Some(5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use cellscope_core::{
    decoder::decode_cell_number_f64, time::parse_timestamp, CellMask, RawMeasurement,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{lenient, SchemaError};

/// One TowerCollector CSV row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TowerCollectorRow {
    #[serde(default, deserialize_with = "lenient::optional_i64")]
    pub cell_id: Option<i64>,

    /// Kept as a float so non-integral values can be reported
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub short_cell_id: Option<f64>,

    #[serde(default, deserialize_with = "lenient::optional_u32")]
    pub rnc: Option<u32>,

    #[serde(default, deserialize_with = "lenient::optional_u16")]
    pub psc: Option<u16>,

    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub rsrp: Option<f64>,

    #[serde(default, deserialize_with = "lenient::optional_i32")]
    pub ta: Option<i32>,

    pub lat: f64,
    pub lon: f64,

    #[serde(default)]
    pub measured_at: Option<String>,

    #[serde(default)]
    pub discovered_at: Option<String>,
}

impl TowerCollectorRow {
    /// Convert into a core measurement, normalizing timestamps into `tz`
    ///
    /// Fails when `short_cell_id` is missing, negative or non-integral, or a
    /// present timestamp cannot be parsed.
    pub fn into_measurement(self, tz: Tz) -> Result<RawMeasurement, SchemaError> {
        let short = self
            .short_cell_id
            .ok_or(cellscope_core::DecodeError::missing("short_cell_id"))?;
        // Validates integrality and sign; the mask here is irrelevant
        decode_cell_number_f64(short, CellMask::TOWER_COLLECTOR)?;

        let cell_id = self.cell_id.and_then(|id| u64::try_from(id).ok());
        let measured_at = self
            .measured_at
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| parse_timestamp(s, tz))
            .transpose()?;
        let discovered_at = self
            .discovered_at
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| parse_timestamp(s, tz))
            .transpose()?;

        Ok(RawMeasurement {
            cell_id,
            short_cell_id: Some(short as i64),
            rnc: self.rnc,
            psc: self.psc,
            rsrp: self.rsrp,
            ta: self.ta,
            lat: self.lat,
            lon: self.lon,
            measured_at,
            discovered_at,
        })
    }
}
