//! Station-type classification
//!
//! The low bits of a site identifier encode how the station is deployed. The
//! classifier bins a decoded cell number against the fixed breakpoint table in
//! [`crate::constants::stations`].

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::stations::{CELL_NUMBER_LIMIT, STATION_BREAKPOINTS};

/// Deployment category of a base station
///
/// Variants are listed in breakpoint order; `Unclassified` covers anything
/// outside [0, 16384).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StationType {
    /// Rooftop or tower macro cell
    Macro = 0,
    /// Reduced-power macro
    MiniMacro = 1,
    /// Macro whose backhaul runs over a satellite link
    SatelliteBackhaul = 2,
    /// Indoor small cell (Casa Systems hardware)
    IndoorSmallCell = 3,
    /// Indoor unit
    IndoorUnit = 4,
    /// Picocell
    Picocell = 5,
    /// Cell number outside the classifiable range
    Unclassified = 6,
}

impl StationType {
    /// The six classifiable categories in breakpoint order
    pub const ALL: [StationType; 6] = [
        StationType::Macro,
        StationType::MiniMacro,
        StationType::SatelliteBackhaul,
        StationType::IndoorSmallCell,
        StationType::IndoorUnit,
        StationType::Picocell,
    ];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            StationType::Macro => "macro",
            StationType::MiniMacro => "mini-macro",
            StationType::SatelliteBackhaul => "satellite-backhaul",
            StationType::IndoorSmallCell => "indoor-small-cell",
            StationType::IndoorUnit => "indoor-unit",
            StationType::Picocell => "picocell",
            StationType::Unclassified => "unclassified",
        }
    }

    /// Label used by the Japanese station listings
    pub const fn label_ja(&self) -> &'static str {
        match self {
            StationType::Macro => "マクロセル",
            StationType::MiniMacro => "ミニマクロ",
            StationType::SatelliteBackhaul => "衛星エントランス",
            StationType::IndoorSmallCell => "Casa",
            StationType::IndoorUnit => "屋内局",
            StationType::Picocell => "ピコセル",
            StationType::Unclassified => "不明",
        }
    }

    /// Half-open cell-number range covered by this category
    pub fn cell_number_range(&self) -> Option<core::ops::Range<u32>> {
        let idx = Self::ALL.iter().position(|t| t == self)?;
        let end = STATION_BREAKPOINTS
            .get(idx + 1)
            .copied()
            .unwrap_or(CELL_NUMBER_LIMIT);
        Some(STATION_BREAKPOINTS[idx]..end)
    }

    /// Look a category up by its `name()`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .chain(core::iter::once(&StationType::Unclassified))
            .find(|t| t.name() == name)
            .copied()
    }
}

impl fmt::Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bin a cell number into its station category
///
/// Buckets are closed on the left: a value on a breakpoint belongs to the
/// bucket starting there, so 4000 is `MiniMacro` and 4500 is
/// `SatelliteBackhaul`. Values below 0 or at/above 16384 are `Unclassified`.
pub fn classify_station_type(cell_number: i64) -> StationType {
    if cell_number < 0 || cell_number >= i64::from(CELL_NUMBER_LIMIT) {
        return StationType::Unclassified;
    }

    // Last breakpoint not above the value
    let idx = STATION_BREAKPOINTS
        .iter()
        .rposition(|&lower| i64::from(lower) <= cell_number)
        .unwrap_or(0);

    StationType::ALL[idx]
}
