//! Timing-Advance Parameters
//!
//! LTE timing advance is quantized in steps of 16 Ts, roughly 78 m of one-way
//! distance. Crowdsourced exports are coarser in practice, so the dashboards
//! used an empirical 150 m per unit.

/// Default meters of radius per timing-advance unit.
pub const DEFAULT_METERS_PER_TA_UNIT: u32 = 150;

/// Largest accepted meters-per-unit setting.
pub const MAX_METERS_PER_TA_UNIT: u32 = 999;

/// Default TA correction for satellite-backhauled stations.
///
/// The satellite hop adds fixed delay which shows up as extra TA units.
pub const DEFAULT_SATELLITE_OFFSET_TA: u32 = 4;

/// Largest accepted satellite TA correction.
pub const MAX_SATELLITE_OFFSET_TA: u32 = 150;
