//! MLS-compatible cell export rows
//!
//! Aggregated cell exports in the Mozilla Location Service CSV layout. Each
//! row is already one cell; `cell` is the full packed identifier and
//! `created`/`updated` are unix seconds.
//!
//! Mapping onto [`RawMeasurement`]:
//!
//! | MLS column | Measurement field |
//! |------------|-------------------|
//! | `cell >> 8` | `short_cell_id` (site id) |
//! | `cell & 0xFF` | `rnc` (local id) |
//! | `unit` | `psc` |
//! | `averageSignal` (0 = unknown) | `rsrp` |
//! | `created` | `discovered_at` |
//! | `updated` | `measured_at` |

use cellscope_core::{registry::unpack_cell_id, time::from_epoch_seconds, RawMeasurement};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{lenient, SchemaError};

/// One MLS export row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlsExportRow {
    #[serde(default)]
    pub radio: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_u16")]
    pub mcc: Option<u16>,
    #[serde(default, deserialize_with = "lenient::optional_u16")]
    pub net: Option<u16>,
    #[serde(default, deserialize_with = "lenient::optional_u32")]
    pub area: Option<u32>,
    pub cell: u64,
    #[serde(default, deserialize_with = "lenient::optional_u16")]
    pub unit: Option<u16>,
    pub lon: f64,
    pub lat: f64,
    #[serde(default, deserialize_with = "lenient::optional_u32")]
    pub range: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_u32")]
    pub samples: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_i64")]
    pub created: Option<i64>,
    #[serde(default, deserialize_with = "lenient::optional_i64")]
    pub updated: Option<i64>,
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub average_signal: Option<f64>,
}

impl MlsExportRow {
    /// Site and local id unpacked from `cell`
    pub fn site_and_local(&self) -> (u32, u8) {
        unpack_cell_id(self.cell)
    }

    /// Convert into a core measurement, normalizing timestamps into `tz`
    pub fn into_measurement(self, tz: Tz) -> Result<RawMeasurement, SchemaError> {
        let (site_id, local_id) = self.site_and_local();

        let epoch = |field: &'static str, value: Option<i64>| -> Result<_, SchemaError> {
            value
                .map(|secs| {
                    from_epoch_seconds(secs, tz).ok_or_else(|| {
                        SchemaError::Parse(format!("{field} = {secs} is not a valid instant"))
                    })
                })
                .transpose()
        };
        let discovered_at = epoch("created", self.created)?;
        let measured_at = epoch("updated", self.updated)?;

        Ok(RawMeasurement {
            cell_id: Some(self.cell),
            short_cell_id: Some(i64::from(site_id)),
            rnc: Some(u32::from(local_id)),
            psc: self.unit,
            rsrp: self.average_signal.filter(|signal| *signal != 0.0),
            ta: None,
            lat: self.lat,
            lon: self.lon,
            measured_at,
            discovered_at,
        })
    }
}
