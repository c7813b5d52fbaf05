//! Station-Type Breakpoints
//!
//! Cell numbers are binned into deployment categories. A value equal to a
//! breakpoint belongs to the bucket that starts there.

/// Exclusive upper bound of the classifiable cell-number range.
pub const CELL_NUMBER_LIMIT: u32 = 16_384;

/// Lower edges of the six station buckets, in category order.
///
/// | Bucket | Range |
/// |--------|-------|
/// | Macro | [0, 4000) |
/// | MiniMacro | [4000, 4500) |
/// | SatelliteBackhaul | [4500, 5000) |
/// | IndoorSmallCell | [5000, 10000) |
/// | IndoorUnit | [10000, 15000) |
/// | Picocell | [15000, 16384) |
pub const STATION_BREAKPOINTS: [u32; 6] = [0, 4_000, 4_500, 5_000, 10_000, 15_000];
