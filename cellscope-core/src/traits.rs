//! Core traits for record filtering
//!
//! Filters work over anything that exposes the fields they inspect, so the
//! same function serves raw measurements, decoded records and aggregates.
//! Keep them small - each trait answers one question about a record.

use chrono::NaiveDateTime;

/// Records that may carry a full cell identifier
pub trait CellIdentified {
    /// Packed `(site_id << 8) | local_id`, if known
    fn cell_id(&self) -> Option<u64>;
}

/// Records observed at a WGS84 position
pub trait Positioned {
    /// Latitude in degrees
    fn lat(&self) -> f64;

    /// Longitude in degrees
    fn lon(&self) -> f64;
}

/// Records with a local (offset-free) observation time
pub trait Observed {
    /// When the row was last measured, normalized to the configured zone
    fn measured_at(&self) -> Option<NaiveDateTime>;
}

/// Values that can take part in numeric aggregation
pub trait Measurable {
    /// False for NaN and infinities
    fn is_valid(&self) -> bool;
}

impl Measurable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

// Filters also run over borrowed records

impl<T: CellIdentified> CellIdentified for &T {
    fn cell_id(&self) -> Option<u64> {
        (**self).cell_id()
    }
}

impl<T: Positioned> Positioned for &T {
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lon(&self) -> f64 {
        (**self).lon()
    }
}

impl<T: Observed> Observed for &T {
    fn measured_at(&self) -> Option<NaiveDateTime> {
        (**self).measured_at()
    }
}
