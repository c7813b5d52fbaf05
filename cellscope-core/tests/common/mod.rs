//! Shared fixtures for integration tests
//!
//! Builds measurement rows the way a TowerCollector export would deliver them
//! for a handful of sites around Matsuyama. All site ids sit inside the
//! TowerCollector cell-id window.

#![allow(dead_code)]

use cellscope_core::{registry::pack_cell_id, RawMeasurement};
use chrono::{NaiveDate, NaiveDateTime};

/// Macro site (cell number 156 under 0x3FFF)
pub const MACRO_SITE: u32 = 737_436;

/// Satellite-backhauled site (cell number 4600)
pub const SATELLITE_SITE: u32 = 741_880;

/// Mini-macro site (cell number 4200)
pub const MINI_MACRO_SITE: u32 = 741_480;

/// Builder for measurement rows
#[derive(Debug, Clone)]
pub struct RowBuilder {
    row: RawMeasurement,
}

impl RowBuilder {
    pub fn new(site_id: u32, local_id: u8) -> Self {
        Self {
            row: RawMeasurement {
                cell_id: Some(pack_cell_id(site_id, local_id)),
                short_cell_id: Some(i64::from(site_id)),
                rnc: Some(u32::from(local_id)),
                psc: Some(256),
                rsrp: None,
                ta: None,
                lat: 33.8391,
                lon: 132.7655,
                measured_at: Some(at(2024, 6, 1, 12)),
                discovered_at: Some(at(2024, 5, 1, 12)),
            },
        }
    }

    pub fn psc(mut self, psc: u16) -> Self {
        self.row.psc = Some(psc);
        self
    }

    pub fn rsrp(mut self, rsrp: f64) -> Self {
        self.row.rsrp = Some(rsrp);
        self
    }

    pub fn ta(mut self, ta: i32) -> Self {
        self.row.ta = Some(ta);
        self
    }

    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.row.lat = lat;
        self.row.lon = lon;
        self
    }

    pub fn measured(mut self, when: NaiveDateTime) -> Self {
        self.row.measured_at = Some(when);
        self
    }

    pub fn build(self) -> RawMeasurement {
        self.row
    }
}

/// Local timestamp at the top of an hour
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid fixture date")
}

/// A drive past three sites with repeated sightings
pub fn drive_session() -> Vec<RawMeasurement> {
    vec![
        RowBuilder::new(MACRO_SITE, 1).rsrp(-101.0).ta(9).build(),
        RowBuilder::new(MACRO_SITE, 1).rsrp(-94.0).ta(6).build(),
        RowBuilder::new(MACRO_SITE, 1).ta(5).build(),
        RowBuilder::new(SATELLITE_SITE, 2).psc(17).rsrp(-110.0).ta(10).build(),
        RowBuilder::new(SATELLITE_SITE, 2).psc(17).rsrp(-106.0).ta(3).build(),
        RowBuilder::new(MINI_MACRO_SITE, 3).psc(402).rsrp(-88.0).build(),
    ]
}
