//! Identifier Layout
//!
//! An LTE E-UTRAN cell identifier packs the eNB (site) id in its high bits and
//! the local cell id in the low 8 bits:
//!
//! ```text
//! cell_id = (site_id << 8) | local_id
//! ```
//!
//! The low bits of the site id in turn encode a deployment category, which is
//! what the cell-number masks isolate.

/// Mask applied to `short_cell_id` for TowerCollector exports.
///
/// Keeps the low 14 bits, giving cell numbers in [0, 16383].
pub const CELL_NUMBER_MASK_TOWER_COLLECTOR: u32 = 0x3FFF;

/// Mask applied to the site id for MLS-compatible CSV exports.
///
/// Bit 12 is cleared by this mask, so cell numbers stay below 12288.
pub const CELL_NUMBER_MASK_MLS: u32 = 0x2FFF;

/// Width of the local cell id inside a packed cell identifier.
pub const LOCAL_ID_BITS: u32 = 8;

/// Mask extracting the local cell id from a packed cell identifier.
pub const LOCAL_ID_MASK: u64 = 0xFF;

/// Lowest cell id (inclusive) kept from TowerCollector exports.
///
/// Equals site id 737280 shifted into place.
pub const TOWER_COLLECTOR_CELL_ID_MIN: u64 = 188_743_680;

/// Upper bound (exclusive) of cell ids kept from TowerCollector exports.
pub const TOWER_COLLECTOR_CELL_ID_MAX: u64 = 190_023_680;
