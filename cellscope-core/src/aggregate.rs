//! Per-cell aggregation
//!
//! Collapses decoded records into one row per `(cell_id, station_key, psc)`
//! holding the strongest RSRP and the shortest raw TA observed. Both
//! reductions are commutative and associative, so input order never changes
//! the result; output is sorted by the key (ascending `cell_id` first).
//!
//! Records without a `cell_id` cannot be keyed and are left out. A group is
//! emitted when it has at least one usable RSRP or TA value.

use std::collections::BTreeMap;

use crate::{
    records::{AggregatedCell, CellKey, DecodedRecord},
    traits::Measurable,
};

/// Running reduction for one group
#[derive(Debug, Default, Clone, Copy)]
struct CellSummary {
    max_rsrp: Option<f64>,
    min_ta: Option<i32>,
}

impl CellSummary {
    fn absorb(&mut self, rsrp: Option<f64>, ta: Option<i32>) {
        // NaN / infinite readings count as absent
        if let Some(rsrp) = rsrp.filter(|value| value.is_valid()) {
            self.max_rsrp = Some(self.max_rsrp.map_or(rsrp, |current| current.max(rsrp)));
        }
        if let Some(ta) = ta {
            self.min_ta = Some(self.min_ta.map_or(ta, |current| current.min(ta)));
        }
    }

    fn is_empty(&self) -> bool {
        self.max_rsrp.is_none() && self.min_ta.is_none()
    }
}

/// Group records by cell and reduce RSRP (max) and TA (min)
pub fn aggregate_by_cell<'a, I>(records: I) -> Vec<AggregatedCell>
where
    I: IntoIterator<Item = &'a DecodedRecord>,
{
    let mut groups: BTreeMap<CellKey, CellSummary> = BTreeMap::new();
    let mut unkeyed = 0usize;

    for record in records {
        let Some(cell_id) = record.measurement.cell_id else {
            unkeyed += 1;
            continue;
        };

        let key = CellKey {
            cell_id,
            station_key: record.station_key.clone(),
            psc: record.measurement.psc,
        };

        groups
            .entry(key)
            .or_default()
            .absorb(record.measurement.rsrp, record.measurement.ta);
    }

    if unkeyed > 0 {
        log_debug!("Aggregation ignored {} records without cell_id", unkeyed);
    }

    groups
        .into_iter()
        .filter(|(_, summary)| !summary.is_empty())
        .map(|(key, summary)| AggregatedCell {
            key,
            max_rsrp: summary.max_rsrp,
            min_ta: summary.min_ta,
        })
        .collect()
}
