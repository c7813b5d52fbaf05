//! Batch processing pipeline
//!
//! ## Overview
//!
//! Runs a full batch through every step in one pass. The pipeline holds no
//! state between runs; each new input batch is processed from scratch.
//!
//! ```text
//! rows → cell-id window → decode → drop known stations → aggregate
//!                           ↓                 ↓              ↓
//!                        skipped          records          cells
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use cellscope_core::{CellPipeline, DecoderConfig, RawMeasurement};
//!
//! let pipeline = CellPipeline::new(DecoderConfig::mls_export())?;
//! let report = pipeline.run(&[RawMeasurement {
//!     cell_id: Some(188_783_628),
//!     short_cell_id: Some(737_436),
//!     rnc: Some(12),
//!     rsrp: Some(-97.0),
//!     ..Default::default()
//! }]);
//!
//! assert_eq!(report.records.len(), 1);
//! assert_eq!(report.cells[0].max_rsrp, Some(-97.0));
//! # Ok::<(), cellscope_core::DecodeError>(())
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    aggregate::aggregate_by_cell,
    config::DecoderConfig,
    decoder::CellRecordDecoder,
    errors::DecodeResult,
    filter::{filter_cell_id_range, filter_known_stations},
    records::{AggregatedCell, DecodedRecord, RawMeasurement},
};

/// Output of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// Decoded records not matching a known station
    pub records: Vec<DecodedRecord>,
    /// Per-cell aggregates over `records`
    pub cells: Vec<AggregatedCell>,
    /// Rows outside the configured cell-id window
    pub out_of_range: usize,
    /// Rows that failed to decode
    pub skipped: usize,
    /// Records dropped because they match a known station
    pub known: usize,
}

impl BatchReport {
    /// True when nothing survived the pipeline
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.cells.is_empty()
    }
}

/// Decoder plus the known-station set, applied to whole batches
#[derive(Debug, Clone, Default)]
pub struct CellPipeline {
    decoder: CellRecordDecoder,
    known_cells: HashSet<u64>,
}

impl CellPipeline {
    /// Create a pipeline with no known stations
    pub fn new(config: DecoderConfig) -> DecodeResult<Self> {
        Ok(Self {
            decoder: CellRecordDecoder::new(config)?,
            known_cells: HashSet::new(),
        })
    }

    /// Exclude these cell ids from the output
    pub fn with_known_cells(mut self, known_cells: HashSet<u64>) -> Self {
        self.known_cells = known_cells;
        self
    }

    /// The underlying decoder
    pub fn decoder(&self) -> &CellRecordDecoder {
        &self.decoder
    }

    /// Process one batch
    ///
    /// Empty input yields an empty report rather than an error.
    pub fn run(&self, rows: &[RawMeasurement]) -> BatchReport {
        if rows.is_empty() {
            log_debug!("Empty batch, nothing to decode");
            return BatchReport::default();
        }

        let windowed: Vec<&RawMeasurement> = match self.decoder.config().cell_id_range {
            Some(range) => filter_cell_id_range(rows, range),
            None => rows.iter().collect(),
        };
        let out_of_range = rows.len() - windowed.len();

        let (decoded, skipped) = self.decoder.decode_batch(windowed);
        let decoded_count = decoded.len();

        let records = filter_known_stations(decoded, &self.known_cells);
        let known = decoded_count - records.len();

        let cells = aggregate_by_cell(&records);

        log_debug!(
            "Batch of {} rows: {} records, {} cells ({} out of range, {} skipped, {} known)",
            rows.len(),
            records.len(),
            cells.len(),
            out_of_range,
            skipped,
            known
        );

        BatchReport {
            records,
            cells,
            out_of_range,
            skipped,
            known,
        }
    }
}
