//! Decoder configuration
//!
//! The two source variants disagree on the cell-number mask and on which
//! cell ids are of interest, so both are configuration rather than constants.
//! Presets cover the known variants:
//!
//! ```rust
//! use cellscope_core::{CellMask, DecoderConfig};
//!
//! let tc = DecoderConfig::tower_collector();
//! assert_eq!(tc.mask, CellMask::TOWER_COLLECTOR);
//!
//! let mls = DecoderConfig::mls_export().with_satellite_offset(6)?;
//! assert_eq!(mls.satellite_offset, 6);
//! # Ok::<(), cellscope_core::DecodeError>(())
//! ```

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    identifiers::{
        CELL_NUMBER_MASK_MLS, CELL_NUMBER_MASK_TOWER_COLLECTOR, TOWER_COLLECTOR_CELL_ID_MAX,
        TOWER_COLLECTOR_CELL_ID_MIN,
    },
    time::DEFAULT_TIMEZONE,
    timing::{
        DEFAULT_METERS_PER_TA_UNIT, DEFAULT_SATELLITE_OFFSET_TA, MAX_METERS_PER_TA_UNIT,
        MAX_SATELLITE_OFFSET_TA,
    },
};
use crate::errors::{DecodeError, DecodeResult};

/// Bit mask isolating the cell number from a site identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellMask(pub u32);

impl CellMask {
    /// Newer TowerCollector exports (14 bits)
    pub const TOWER_COLLECTOR: CellMask = CellMask(CELL_NUMBER_MASK_TOWER_COLLECTOR);

    /// Legacy MLS-compatible exports
    pub const MLS_LEGACY: CellMask = CellMask(CELL_NUMBER_MASK_MLS);

    /// Raw mask bits
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// Half-open window of full cell ids, `start <= cell_id < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellIdRange {
    /// Inclusive lower bound
    pub start: u64,
    /// Exclusive upper bound
    pub end: u64,
}

impl CellIdRange {
    /// Create a window; bounds are swapped if given in reverse
    pub fn new(start: u64, end: u64) -> Self {
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        Self { start, end }
    }

    /// Window of cell ids kept from TowerCollector exports
    pub const fn tower_collector() -> Self {
        Self {
            start: TOWER_COLLECTOR_CELL_ID_MIN,
            end: TOWER_COLLECTOR_CELL_ID_MAX,
        }
    }

    /// True when `cell_id` falls inside the window
    pub fn contains(&self, cell_id: u64) -> bool {
        cell_id >= self.start && cell_id < self.end
    }
}

/// Operator-tunable decoder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Mask applied to `short_cell_id`
    pub mask: CellMask,

    /// Optional window of cell ids to keep
    pub cell_id_range: Option<CellIdRange>,

    /// Radius per TA unit in meters, [0, 999]
    pub meters_per_ta_unit: u32,

    /// TA correction for satellite-backhauled stations, [0, 150]
    pub satellite_offset: u32,

    /// Zone timestamps are normalized into
    pub timezone: Tz,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::tower_collector()
    }
}

impl DecoderConfig {
    /// Settings for TowerCollector CSV exports
    pub fn tower_collector() -> Self {
        Self {
            mask: CellMask::TOWER_COLLECTOR,
            cell_id_range: Some(CellIdRange::tower_collector()),
            meters_per_ta_unit: DEFAULT_METERS_PER_TA_UNIT,
            satellite_offset: DEFAULT_SATELLITE_OFFSET_TA,
            timezone: DEFAULT_TIMEZONE,
        }
    }

    /// Settings for MLS-compatible CSV exports
    pub fn mls_export() -> Self {
        Self {
            mask: CellMask::MLS_LEGACY,
            cell_id_range: None,
            ..Self::tower_collector()
        }
    }

    /// Parse and validate a JSON configuration document
    ///
    /// Missing fields take their TowerCollector defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigLoadError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check tunables against their documented ranges
    pub fn validate(&self) -> DecodeResult<()> {
        check_tunable(
            "meters_per_ta_unit",
            self.meters_per_ta_unit,
            MAX_METERS_PER_TA_UNIT,
        )?;
        check_tunable(
            "satellite_offset",
            self.satellite_offset,
            MAX_SATELLITE_OFFSET_TA,
        )?;
        Ok(())
    }

    /// Replace the meters-per-TA-unit setting
    pub fn with_meters_per_ta_unit(mut self, meters: u32) -> DecodeResult<Self> {
        check_tunable("meters_per_ta_unit", meters, MAX_METERS_PER_TA_UNIT)?;
        self.meters_per_ta_unit = meters;
        Ok(self)
    }

    /// Replace the satellite TA correction
    pub fn with_satellite_offset(mut self, offset: u32) -> DecodeResult<Self> {
        check_tunable("satellite_offset", offset, MAX_SATELLITE_OFFSET_TA)?;
        self.satellite_offset = offset;
        Ok(self)
    }

    /// Replace the cell-number mask
    pub fn with_mask(mut self, mask: CellMask) -> Self {
        self.mask = mask;
        self
    }

    /// Replace (or clear) the cell-id window
    pub fn with_cell_id_range(mut self, range: Option<CellIdRange>) -> Self {
        self.cell_id_range = range;
        self
    }

    /// Replace the normalization time zone
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}

fn check_tunable(name: &'static str, value: u32, max: u32) -> DecodeResult<()> {
    if value > max {
        return Err(DecodeError::ParameterOutOfRange {
            name,
            value: i64::from(value),
            min: 0,
            max: i64::from(max),
        });
    }
    Ok(())
}

/// Errors raised while loading a configuration document
#[derive(Debug, thiserror_no_std::Error)]
pub enum ConfigLoadError {
    /// Document is not valid JSON for `DecoderConfig`
    #[error("Failed to parse config: {0}")]
    Json(serde_json::Error),

    /// Document parsed but a tunable is out of range
    #[error("Invalid config: {0}")]
    Invalid(DecodeError),
}

impl From<DecodeError> for ConfigLoadError {
    fn from(err: DecodeError) -> Self {
        Self::Invalid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_in_mask_and_range() {
        let tc = DecoderConfig::tower_collector();
        let mls = DecoderConfig::mls_export();

        assert_eq!(tc.mask.bits(), 0x3FFF);
        assert_eq!(mls.mask.bits(), 0x2FFF);
        assert!(tc.cell_id_range.is_some());
        assert!(mls.cell_id_range.is_none());
        assert_eq!(tc.meters_per_ta_unit, 150);
        assert_eq!(tc.satellite_offset, 4);
        assert_eq!(tc.timezone, chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn tunables_are_range_checked() {
        let config = DecoderConfig::default();
        assert!(config.clone().with_meters_per_ta_unit(999).is_ok());
        assert!(matches!(
            config.clone().with_meters_per_ta_unit(1_000),
            Err(DecodeError::ParameterOutOfRange { name: "meters_per_ta_unit", .. })
        ));
        assert!(config.clone().with_satellite_offset(150).is_ok());
        assert!(config.with_satellite_offset(151).is_err());
    }

    #[test]
    fn range_window_is_half_open() {
        let range = CellIdRange::tower_collector();
        assert!(range.contains(188_743_680));
        assert!(range.contains(190_023_679));
        assert!(!range.contains(190_023_680));
        assert!(!range.contains(188_743_679));
    }

    #[test]
    fn reversed_range_is_normalized() {
        let range = CellIdRange::new(10, 5);
        assert_eq!((range.start, range.end), (5, 10));
    }

    #[test]
    fn json_fills_missing_fields() {
        let config = DecoderConfig::from_json(
            r#"{"mask": 12287, "cell_id_range": null, "satellite_offset": 8}"#,
        )
        .unwrap();
        assert_eq!(config.mask, CellMask::MLS_LEGACY);
        assert_eq!(config.cell_id_range, None);
        assert_eq!(config.satellite_offset, 8);
        assert_eq!(config.meters_per_ta_unit, 150);
    }

    #[test]
    fn json_rejects_out_of_range_tunables() {
        let err = DecoderConfig::from_json(r#"{"meters_per_ta_unit": 5000}"#).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));

        let err = DecoderConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Json(_)));
    }
}
