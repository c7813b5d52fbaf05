//! Record filters
//!
//! Each filter consumes a sequence and returns the kept records with their
//! field values untouched. They are generic over the traits in
//! [`crate::traits`], so the same filter applies to raw rows, decoded records
//! and (where it makes sense) aggregated cells.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::{
    config::CellIdRange,
    records::{DecodedRecord, GeoBounds},
    station::StationType,
    traits::{CellIdentified, Observed, Positioned},
};

/// Drop records whose `cell_id` is in the known-station set
///
/// Records without a `cell_id` cannot match and are kept.
pub fn filter_known_stations<R, I>(records: I, known_cell_ids: &HashSet<u64>) -> Vec<R>
where
    R: CellIdentified,
    I: IntoIterator<Item = R>,
{
    records
        .into_iter()
        .filter(|record| {
            record
                .cell_id()
                .map_or(true, |id| !known_cell_ids.contains(&id))
        })
        .collect()
}

/// Keep records with `range.start <= cell_id < range.end`
///
/// Records without a `cell_id` are dropped.
pub fn filter_cell_id_range<R, I>(records: I, range: CellIdRange) -> Vec<R>
where
    R: CellIdentified,
    I: IntoIterator<Item = R>,
{
    records
        .into_iter()
        .filter(|record| record.cell_id().is_some_and(|id| range.contains(id)))
        .collect()
}

/// Keep records of one station category
pub fn filter_station_type<I>(records: I, station_type: StationType) -> Vec<DecodedRecord>
where
    I: IntoIterator<Item = DecodedRecord>,
{
    records
        .into_iter()
        .filter(|record| record.station_type == station_type)
        .collect()
}

/// Keep records measured at or after `cutoff`
///
/// Records with no measurement time are dropped.
pub fn filter_seen_since<R, I>(records: I, cutoff: NaiveDateTime) -> Vec<R>
where
    R: Observed,
    I: IntoIterator<Item = R>,
{
    records
        .into_iter()
        .filter(|record| record.measured_at().is_some_and(|at| at >= cutoff))
        .collect()
}

/// Keep records inside the (inclusive) viewport
pub fn filter_within_bounds<R, I>(records: I, bounds: &GeoBounds) -> Vec<R>
where
    R: Positioned,
    I: IntoIterator<Item = R>,
{
    records
        .into_iter()
        .filter(|record| bounds.contains(record.lat(), record.lon()))
        .collect()
}

/// Stable ascending sort on `cell_id`; records without one go last
pub fn sort_by_cell_id<R: CellIdentified>(records: &mut [R]) {
    records.sort_by_key(|record| (record.cell_id().is_none(), record.cell_id()));
}
