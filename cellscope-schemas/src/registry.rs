//! Station registry rows
//!
//! Community-maintained lists of already-located base stations. Rows carry
//! a place name and coordinates; the `eNB-LCID` field lists the cells the
//! site serves (see [`cellscope_core::registry`] for the identifier syntax).
//! Column names from the original Japanese registry are accepted as aliases.

use std::collections::HashSet;

use cellscope_core::registry::{
    expand_station_identifier_ranges, known_cell_ids, ExpandedStation, RegistryEntry,
};
use serde::{Deserialize, Serialize};

use crate::lenient;

/// Descriptive fields of a registered site
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StationSite {
    #[serde(default, alias = "場所")]
    pub place: Option<String>,

    #[serde(default, alias = "緯度", deserialize_with = "lenient::optional_f64")]
    pub lat: Option<f64>,

    #[serde(default, alias = "経度", deserialize_with = "lenient::optional_f64")]
    pub lon: Option<f64>,

    /// Number of LTE sectors
    #[serde(default, deserialize_with = "lenient::optional_u32")]
    pub sector: Option<u32>,

    /// Number of sub-6 GHz NR sectors
    #[serde(default, deserialize_with = "lenient::optional_u32")]
    pub sub6: Option<u32>,

    /// Number of millimetre-wave sectors
    #[serde(default, alias = "ミリ波", deserialize_with = "lenient::optional_u32")]
    pub mmwave: Option<u32>,
}

/// One registry row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StationRegistryRecord {
    /// `"<eNB>-<LCID>[,<LCID>...]"` groups, space separated
    #[serde(default, rename = "eNB-LCID")]
    pub enb_lcid: Option<String>,

    #[serde(flatten)]
    pub site: StationSite,
}

impl StationRegistryRecord {
    /// Core registry entry carrying the site description
    pub fn into_entry(self) -> RegistryEntry<StationSite> {
        // Blank fields behave like missing ones
        let identifiers = self.enb_lcid.filter(|s| !s.trim().is_empty());
        RegistryEntry::new(identifiers, self.site)
    }
}

/// Expand registry rows into one entry per packed cell id
pub fn expand_registry(records: Vec<StationRegistryRecord>) -> Vec<ExpandedStation<StationSite>> {
    let entries: Vec<_> = records
        .into_iter()
        .map(StationRegistryRecord::into_entry)
        .collect();
    expand_station_identifier_ranges(&entries)
}

/// Cell ids already covered by the registry
pub fn registry_cell_ids(records: Vec<StationRegistryRecord>) -> HashSet<u64> {
    known_cell_ids(&expand_registry(records))
}
