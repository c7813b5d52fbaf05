//! Record types flowing through the decoder
//!
//! ```text
//! RawMeasurement ──decode──▶ DecodedRecord ──aggregate──▶ AggregatedCell
//! ```
//!
//! Every field that a source export may leave empty is an `Option`. Derived
//! values (`cell_number`, `station_type`, ...) exist only on
//! [`DecodedRecord`] and are always recomputed from the raw row.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::station::StationType;
use crate::traits::{CellIdentified, Observed, Positioned};

/// One row of a crowdsourced measurement export
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawMeasurement {
    /// Full packed cell identifier
    pub cell_id: Option<u64>,

    /// Site identifier whose low bits carry the cell number
    pub short_cell_id: Option<i64>,

    /// Radio network controller / local cell id
    pub rnc: Option<u32>,

    /// Physical cell id (PCI) or scrambling code
    pub psc: Option<u16>,

    /// Reference signal received power (dBm)
    pub rsrp: Option<f64>,

    /// Raw timing advance in TA units
    pub ta: Option<i32>,

    /// Latitude (WGS84 degrees)
    pub lat: f64,

    /// Longitude (WGS84 degrees)
    pub lon: f64,

    /// Last measurement time, local and offset-free
    pub measured_at: Option<NaiveDateTime>,

    /// First discovery time, local and offset-free
    pub discovered_at: Option<NaiveDateTime>,
}

impl RawMeasurement {
    /// Label identifying the station+sector, e.g. `"737436-12"`
    ///
    /// Falls back to the bare short id when no `rnc` is present.
    pub fn station_key(&self) -> Option<String> {
        let short = self.short_cell_id?;
        Some(match self.rnc {
            Some(rnc) => format!("{short}-{rnc}"),
            None => short.to_string(),
        })
    }
}

/// A measurement with its derived classification and TA model applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedRecord {
    /// The source row, untouched
    #[serde(flatten)]
    pub measurement: RawMeasurement,

    /// `short_cell_id` label used for grouping and display
    pub station_key: String,

    /// `short_cell_id & mask`
    pub cell_number: u32,

    /// Category binned from `cell_number`
    pub station_type: StationType,

    /// TA correction applied for this station type
    pub calibration_offset: i32,

    /// `ta - calibration_offset`, absent when `ta` is absent
    pub ta_adjusted: Option<i32>,

    /// Clamped radius estimate, 0 when `ta` is absent
    pub estimated_radius_meters: f64,
}

/// Grouping key for aggregation
///
/// Ordering is by `cell_id` first, which gives the ascending output order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellKey {
    /// Full packed cell identifier
    pub cell_id: u64,
    /// Station label (`"<short_cell_id>-<rnc>"`)
    pub station_key: String,
    /// Physical cell id
    pub psc: Option<u16>,
}

/// Strongest signal and shortest TA seen for one cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedCell {
    /// Group key
    #[serde(flatten)]
    pub key: CellKey,

    /// Maximum non-null RSRP in the group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rsrp: Option<f64>,

    /// Minimum non-null raw TA in the group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_ta: Option<i32>,
}

/// Inclusive latitude/longitude box, typically the visible map viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Southern edge
    pub south: f64,
    /// Western edge
    pub west: f64,
    /// Northern edge
    pub north: f64,
    /// Eastern edge
    pub east: f64,
}

impl GeoBounds {
    /// Build from south-west and north-east corners
    pub fn new(south_west: (f64, f64), north_east: (f64, f64)) -> Self {
        Self {
            south: south_west.0,
            west: south_west.1,
            north: north_east.0,
            east: north_east.1,
        }
    }

    /// True when the point lies inside or on the edge of the box
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.south && lat <= self.north && lon >= self.west && lon <= self.east
    }
}

impl CellIdentified for RawMeasurement {
    fn cell_id(&self) -> Option<u64> {
        self.cell_id
    }
}

impl CellIdentified for DecodedRecord {
    fn cell_id(&self) -> Option<u64> {
        self.measurement.cell_id
    }
}

impl CellIdentified for AggregatedCell {
    fn cell_id(&self) -> Option<u64> {
        Some(self.key.cell_id)
    }
}

impl Positioned for RawMeasurement {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl Positioned for DecodedRecord {
    fn lat(&self) -> f64 {
        self.measurement.lat
    }

    fn lon(&self) -> f64 {
        self.measurement.lon
    }
}

impl Observed for RawMeasurement {
    fn measured_at(&self) -> Option<NaiveDateTime> {
        self.measured_at
    }
}

impl Observed for DecodedRecord {
    fn measured_at(&self) -> Option<NaiveDateTime> {
        self.measurement.measured_at
    }
}
