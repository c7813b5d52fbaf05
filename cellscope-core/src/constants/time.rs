//! Time Defaults

/// Zone timestamps are normalized into before the offset is dropped.
pub const DEFAULT_TIMEZONE: chrono_tz::Tz = chrono_tz::Asia::Tokyo;

/// Default "updated within" window for station listings (days).
pub const DEFAULT_LOOKBACK_DAYS: u32 = 90;

/// Largest accepted lookback window (days).
pub const MAX_LOOKBACK_DAYS: u32 = 180;
