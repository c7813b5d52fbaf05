//! Error Types for Cell Record Decoding
//!
//! ## Design
//!
//! Decoding errors are row-level: a failing row is excluded from the output
//! and the batch carries on. Because errors are produced once per bad row and
//! may be collected into reports, every variant is kept small:
//!
//! 1. **No Heap Allocation**: payloads are `&'static str` or plain numbers.
//! 2. **Copy Semantics**: errors are returned by value from hot loops.
//!
//! Absent `rsrp`/`ta` values are *not* errors. They propagate as `None`
//! through calibration, adjustment and aggregation.
//!
//! ## Error Categories
//!
//! ### Input Violations
//! - `InvalidInput`: a field needed unconditionally is missing, negative or
//!   non-integral
//! - `MalformedIdentifier`: a registry identifier list could not be parsed
//! - `InvalidTimestamp`: a timestamp string matched none of the accepted formats
//!
//! ### Configuration Violations
//! - `ParameterOutOfRange`: an operator tunable is outside its documented range
//!
//! ```rust
//! use cellscope_core::{decoder::decode_cell_number, CellMask, DecodeError};
//!
//! match decode_cell_number(-1, CellMask::TOWER_COLLECTOR) {
//!     Err(DecodeError::InvalidInput { field, .. }) => assert_eq!(field, "short_cell_id"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Decoding errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DecodeError {
    /// Required field missing or outside its legal domain
    #[error("Invalid input in '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// Short description of the violation
        reason: &'static str,
    },

    /// Registry identifier list did not match `<siteId>-<localId>[,<localId>...]`
    #[error("Malformed station identifier: {reason}")]
    MalformedIdentifier {
        /// Which part of the identifier failed
        reason: &'static str,
    },

    /// Operator-tunable parameter outside its allowed range
    #[error("Parameter '{name}' = {value} outside range [{min}, {max}]")]
    ParameterOutOfRange {
        /// Parameter name as used in configuration
        name: &'static str,
        /// The rejected value
        value: i64,
        /// Minimum accepted value
        min: i64,
        /// Maximum accepted value
        max: i64,
    },

    /// Timestamp string could not be parsed
    #[error("Invalid timestamp: {reason}")]
    InvalidTimestamp {
        /// Why parsing failed
        reason: &'static str,
    },
}

impl DecodeError {
    /// Shorthand for a missing required field
    pub const fn missing(field: &'static str) -> Self {
        Self::InvalidInput {
            field,
            reason: "required field is absent",
        }
    }

    /// True when the error concerns a single row rather than configuration
    pub fn is_row_level(&self) -> bool {
        !matches!(self, Self::ParameterOutOfRange { .. })
    }
}
