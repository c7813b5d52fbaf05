//! Constants for CellScope Core
//!
//! Centralized numeric values used by the decoder. Every constant carries its
//! unit or domain in its name.
//!
//! ## Organization
//!
//! - **Identifiers**: bit masks, packing widths and known cell-id windows
//! - **Stations**: station-type breakpoints over the cell-number range
//! - **Timing**: timing-advance defaults and operator-tunable limits
//! - **Time**: time zone and lookback window defaults

/// Bit masks, packing widths and cell-id windows.
pub mod identifiers;

/// Station-type breakpoints.
pub mod stations;

/// Timing-advance defaults and limits.
pub mod timing;

/// Time zone and lookback defaults.
pub mod time;

// Re-export commonly used constants for convenience
pub use identifiers::{
    CELL_NUMBER_MASK_MLS, CELL_NUMBER_MASK_TOWER_COLLECTOR, LOCAL_ID_BITS, LOCAL_ID_MASK,
    TOWER_COLLECTOR_CELL_ID_MAX, TOWER_COLLECTOR_CELL_ID_MIN,
};

pub use stations::{CELL_NUMBER_LIMIT, STATION_BREAKPOINTS};

pub use timing::{
    DEFAULT_METERS_PER_TA_UNIT, DEFAULT_SATELLITE_OFFSET_TA, MAX_METERS_PER_TA_UNIT,
    MAX_SATELLITE_OFFSET_TA,
};

pub use time::{DEFAULT_LOOKBACK_DAYS, DEFAULT_TIMEZONE, MAX_LOOKBACK_DAYS};
