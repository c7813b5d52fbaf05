//! Cell Record Decoder
//!
//! ## Overview
//!
//! Turns raw measurement rows into classified, TA-adjusted records. Each step
//! is a pure function so it can be tested (and reused) on its own:
//!
//! ```text
//! short_cell_id ──mask──▶ cell_number ──bin──▶ station_type
//!                                                   │
//!                          satellite_offset ──▶ calibration_offset
//!                                                   │
//!                     ta ──subtract──▶ ta_adjusted ──scale/clamp──▶ radius
//! ```
//!
//! ## Null Handling
//!
//! A missing `ta` stays missing through adjustment; it is never treated as
//! zero before the offset is subtracted. Only the final radius collapses an
//! absent TA to 0 m, since a circle needs a concrete radius.
//!
//! ## Usage Example
//!
//! ```rust
//! use cellscope_core::{CellRecordDecoder, DecoderConfig, RawMeasurement, StationType};
//!
//! let decoder = CellRecordDecoder::new(DecoderConfig::tower_collector())?;
//! let row = RawMeasurement {
//!     cell_id: Some(188_800_000),
//!     short_cell_id: Some(4_500),
//!     rnc: Some(1),
//!     ta: Some(10),
//!     ..Default::default()
//! };
//!
//! let record = decoder.decode(&row)?;
//! assert_eq!(record.station_type, StationType::SatelliteBackhaul);
//! assert_eq!(record.ta_adjusted, Some(6));
//! assert_eq!(record.estimated_radius_meters, 900.0);
//! # Ok::<(), cellscope_core::DecodeError>(())
//! ```

use crate::{
    config::{CellMask, DecoderConfig},
    errors::{DecodeError, DecodeResult},
    records::{DecodedRecord, RawMeasurement},
    station::{classify_station_type, StationType},
};

/// Isolate the cell number from a site identifier
///
/// Output lies in `[0, mask]`. Negative identifiers are rejected.
pub fn decode_cell_number(short_cell_id: i64, mask: CellMask) -> DecodeResult<u32> {
    if short_cell_id < 0 {
        return Err(DecodeError::InvalidInput {
            field: "short_cell_id",
            reason: "identifier must be non-negative",
        });
    }

    // Masked value fits in u32 since the mask does
    Ok((short_cell_id as u64 & u64::from(mask.bits())) as u32)
}

/// Decode an identifier that arrived as a float
///
/// Fails with `InvalidInput` when the value has a fractional part or is not
/// finite.
pub fn decode_cell_number_f64(short_cell_id: f64, mask: CellMask) -> DecodeResult<u32> {
    if !short_cell_id.is_finite() || short_cell_id.fract() != 0.0 {
        return Err(DecodeError::InvalidInput {
            field: "short_cell_id",
            reason: "identifier must be integral",
        });
    }
    if short_cell_id > i64::MAX as f64 {
        return Err(DecodeError::InvalidInput {
            field: "short_cell_id",
            reason: "identifier too large",
        });
    }
    decode_cell_number(short_cell_id as i64, mask)
}

/// TA correction for a station type
///
/// Only satellite-backhauled stations are corrected; everything else gets 0.
pub fn compute_calibration_offset(station_type: StationType, satellite_offset: i32) -> i32 {
    match station_type {
        StationType::SatelliteBackhaul => satellite_offset,
        _ => 0,
    }
}

/// Subtract the calibration offset, propagating absence
pub fn adjust_timing_advance(raw_ta: Option<i32>, calibration_offset: i32) -> Option<i32> {
    raw_ta.map(|ta| ta.saturating_sub(calibration_offset))
}

/// Radius estimate in meters, never negative
///
/// An absent TA yields 0.
pub fn estimate_radius(ta_adjusted: Option<i32>, meters_per_ta_unit: f64) -> f64 {
    match ta_adjusted {
        Some(ta) => (f64::from(ta) * meters_per_ta_unit).max(0.0),
        None => 0.0,
    }
}

/// Stateless decoder bound to one configuration
#[derive(Debug, Clone)]
pub struct CellRecordDecoder {
    config: DecoderConfig,
}

impl Default for CellRecordDecoder {
    fn default() -> Self {
        Self {
            config: DecoderConfig::default(),
        }
    }
}

impl CellRecordDecoder {
    /// Create a decoder; fails if a tunable is out of range
    pub fn new(config: DecoderConfig) -> DecodeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a single row
    ///
    /// Fails with `InvalidInput` when `short_cell_id` is missing or negative.
    pub fn decode(&self, raw: &RawMeasurement) -> DecodeResult<DecodedRecord> {
        let short_cell_id = raw
            .short_cell_id
            .ok_or(DecodeError::missing("short_cell_id"))?;

        let cell_number = decode_cell_number(short_cell_id, self.config.mask)?;
        let station_type = classify_station_type(i64::from(cell_number));

        // satellite_offset is validated to be <= 150
        let satellite_offset = self.config.satellite_offset as i32;
        let calibration_offset = compute_calibration_offset(station_type, satellite_offset);
        let ta_adjusted = adjust_timing_advance(raw.ta, calibration_offset);
        let estimated_radius_meters =
            estimate_radius(ta_adjusted, f64::from(self.config.meters_per_ta_unit));

        let station_key = raw
            .station_key()
            .unwrap_or_else(|| short_cell_id.to_string());

        Ok(DecodedRecord {
            measurement: raw.clone(),
            station_key,
            cell_number,
            station_type,
            calibration_offset,
            ta_adjusted,
            estimated_radius_meters,
        })
    }

    /// Decode a batch, skipping rows that fail
    ///
    /// Returns the decoded records and the number of rows skipped.
    pub fn decode_batch<'a, I>(&self, rows: I) -> (Vec<DecodedRecord>, usize)
    where
        I: IntoIterator<Item = &'a RawMeasurement>,
    {
        let mut decoded = Vec::new();
        let mut skipped = 0;

        for (index, row) in rows.into_iter().enumerate() {
            match self.decode(row) {
                Ok(record) => decoded.push(record),
                Err(err) => {
                    skipped += 1;
                    log_warn!("Skipping row {}: {}", index, err);
                }
            }
        }

        log_debug!("Decoded {} rows, skipped {}", decoded.len(), skipped);
        (decoded, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(short_cell_id: i64, ta: Option<i32>) -> RawMeasurement {
        RawMeasurement {
            cell_id: Some(188_800_000),
            short_cell_id: Some(short_cell_id),
            rnc: Some(3),
            psc: Some(101),
            rsrp: Some(-95.0),
            ta,
            lat: 33.84,
            lon: 132.77,
            ..Default::default()
        }
    }

    #[test]
    fn masks_select_low_bits() {
        assert_eq!(decode_cell_number(0x1_1234, CellMask::TOWER_COLLECTOR), Ok(0x1234));
        assert_eq!(decode_cell_number(0x3FFF, CellMask::MLS_LEGACY), Ok(0x2FFF));
        assert_eq!(decode_cell_number(4_500, CellMask::TOWER_COLLECTOR), Ok(4_500));
    }

    #[test]
    fn negative_identifier_is_invalid() {
        assert!(matches!(
            decode_cell_number(-5, CellMask::TOWER_COLLECTOR),
            Err(DecodeError::InvalidInput { field: "short_cell_id", .. })
        ));
    }

    #[test]
    fn fractional_identifier_is_rejected() {
        assert_eq!(
            decode_cell_number_f64(4_500.0, CellMask::TOWER_COLLECTOR),
            Ok(4_500)
        );
        assert!(matches!(
            decode_cell_number_f64(4_500.5, CellMask::TOWER_COLLECTOR),
            Err(DecodeError::InvalidInput {
                field: "short_cell_id",
                reason: "identifier must be integral",
            })
        ));
        assert!(decode_cell_number_f64(f64::NAN, CellMask::TOWER_COLLECTOR).is_err());
    }

    #[test]
    fn calibration_only_for_satellite() {
        assert_eq!(compute_calibration_offset(StationType::SatelliteBackhaul, 4), 4);
        assert_eq!(compute_calibration_offset(StationType::Macro, 4), 0);
        assert_eq!(compute_calibration_offset(StationType::Unclassified, 4), 0);
    }

    #[test]
    fn absent_ta_propagates() {
        assert_eq!(adjust_timing_advance(None, 4), None);
        assert_eq!(adjust_timing_advance(Some(10), 4), Some(6));
        assert_eq!(estimate_radius(None, 150.0), 0.0);
    }

    #[test]
    fn radius_is_clamped() {
        assert_eq!(estimate_radius(Some(-3), 150.0), 0.0);
        assert_eq!(estimate_radius(Some(2), 150.0), 300.0);
    }

    #[test]
    fn satellite_scenario() {
        let decoder = CellRecordDecoder::default();
        let record = decoder.decode(&row(4_500, Some(10))).unwrap();

        assert_eq!(record.cell_number, 4_500);
        assert_eq!(record.station_type, StationType::SatelliteBackhaul);
        assert_eq!(record.calibration_offset, 4);
        assert_eq!(record.ta_adjusted, Some(6));
        assert_eq!(record.estimated_radius_meters, 900.0);
        assert_eq!(record.station_key, "4500-3");
    }

    #[test]
    fn satellite_scenario_without_ta() {
        let decoder = CellRecordDecoder::default();
        let record = decoder.decode(&row(4_500, None)).unwrap();

        assert_eq!(record.ta_adjusted, None);
        assert_eq!(record.estimated_radius_meters, 0.0);
    }

    #[test]
    fn ta_below_offset_gives_zero_radius() {
        let decoder = CellRecordDecoder::default();
        let record = decoder.decode(&row(4_600, Some(1))).unwrap();

        assert_eq!(record.ta_adjusted, Some(-3));
        assert_eq!(record.estimated_radius_meters, 0.0);
    }

    #[test]
    fn macro_uses_raw_ta() {
        let decoder = CellRecordDecoder::default();
        let record = decoder.decode(&row(1_200, Some(3))).unwrap();

        assert_eq!(record.station_type, StationType::Macro);
        assert_eq!(record.calibration_offset, 0);
        assert_eq!(record.estimated_radius_meters, 450.0);
    }

    #[test]
    fn batch_skips_bad_rows() {
        let decoder = CellRecordDecoder::default();
        let mut missing = row(1, Some(1));
        missing.short_cell_id = None;
        let rows = vec![row(1_000, Some(2)), missing, row(-1, None)];

        let (decoded, skipped) = decoder.decode_batch(&rows);
        assert_eq!(decoded.len(), 1);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = DecoderConfig::default();
        config.satellite_offset = 500;
        assert!(CellRecordDecoder::new(config).is_err());
    }
}
