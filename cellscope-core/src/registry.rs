//! Station registry identifier expansion
//!
//! Registries list the cells of a known site compactly:
//!
//! ```text
//! "737436-1,2,3 737440-11"
//! ```
//!
//! Space-separated groups of `<siteId>-<localId>[,<localId>...]`. Each
//! `(siteId, localId)` pair expands to one packed cell id
//! `(siteId << 8) | localId`, the inverse of [`unpack_cell_id`].
//!
//! ```rust
//! use cellscope_core::registry::{expand_station_identifier_ranges, RegistryEntry};
//!
//! let entries = vec![RegistryEntry::new(Some("100-1,2".to_string()), "shrine")];
//! let cells = expand_station_identifier_ranges(&entries);
//! assert_eq!(cells[0].cell_id, (100 << 8) | 1);
//! assert_eq!(cells[1].cell_id, (100 << 8) | 2);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    constants::identifiers::{LOCAL_ID_BITS, LOCAL_ID_MASK},
    errors::{DecodeError, DecodeResult},
};

/// One registry row: an optional identifier field plus caller metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry<M> {
    /// `"<siteId>-<localIdList>"` groups, space separated
    pub identifiers: Option<String>,
    /// Anything the caller wants carried through expansion
    pub metadata: M,
}

impl<M> RegistryEntry<M> {
    /// Entry with an optional identifier field
    pub fn new(identifiers: Option<String>, metadata: M) -> Self {
        Self {
            identifiers,
            metadata,
        }
    }
}

/// One cell produced by expanding a registry entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedStation<M> {
    /// Packed `(site_id << 8) | local_id`
    pub cell_id: u64,
    /// eNB / site identifier
    pub site_id: u32,
    /// Local cell identifier
    pub local_id: u8,
    /// Metadata copied from the source entry
    pub metadata: M,
}

/// Pack a site id and local id into a full cell id
pub const fn pack_cell_id(site_id: u32, local_id: u8) -> u64 {
    ((site_id as u64) << LOCAL_ID_BITS) | local_id as u64
}

/// Split a full cell id into `(site_id, local_id)`
///
/// Site ids wider than 32 bits are truncated; LTE eNB ids are 20 bits.
pub const fn unpack_cell_id(cell_id: u64) -> (u32, u8) {
    ((cell_id >> LOCAL_ID_BITS) as u32, (cell_id & LOCAL_ID_MASK) as u8)
}

/// Parse one `<siteId>-<localId>[,<localId>...]` group
pub fn parse_identifier_group(group: &str) -> DecodeResult<Vec<(u32, u8)>> {
    let (site, locals) = group.split_once('-').ok_or(DecodeError::MalformedIdentifier {
        reason: "missing '-' between site id and local ids",
    })?;

    let site_id: u32 = site
        .trim()
        .parse()
        .map_err(|_| DecodeError::MalformedIdentifier {
            reason: "site id is not an unsigned integer",
        })?;

    locals
        .split(',')
        .map(|local| {
            let local: u32 = local
                .trim()
                .parse()
                .map_err(|_| DecodeError::MalformedIdentifier {
                    reason: "local id is not an unsigned integer",
                })?;
            // Ids of 256 and above would bleed into the site bits
            let local = u8::try_from(local).map_err(|_| DecodeError::MalformedIdentifier {
                reason: "local id does not fit in 8 bits",
            })?;
            Ok((site_id, local))
        })
        .collect()
}

/// Parse a whole identifier field into `(site_id, local_id)` pairs
///
/// Fails on the first malformed group.
pub fn parse_identifier_list(field: &str) -> DecodeResult<Vec<(u32, u8)>> {
    let mut pairs = Vec::new();
    for group in field.split_whitespace() {
        pairs.extend(parse_identifier_group(group)?);
    }
    Ok(pairs)
}

/// Expand registry entries into one row per packed cell id
///
/// Entries without identifiers are skipped, as are malformed groups (logged).
/// Output is sorted by `cell_id`.
pub fn expand_station_identifier_ranges<M: Clone>(
    entries: &[RegistryEntry<M>],
) -> Vec<ExpandedStation<M>> {
    let mut expanded = Vec::new();

    for entry in entries {
        let Some(field) = entry.identifiers.as_deref() else {
            continue;
        };

        for group in field.split_whitespace() {
            match parse_identifier_group(group) {
                Ok(pairs) => expanded.extend(pairs.into_iter().map(|(site_id, local_id)| {
                    ExpandedStation {
                        cell_id: pack_cell_id(site_id, local_id),
                        site_id,
                        local_id,
                        metadata: entry.metadata.clone(),
                    }
                })),
                Err(err) => {
                    log_warn!("Skipping registry identifier '{}': {}", group, err);
                }
            }
        }
    }

    expanded.sort_by_key(|station| station.cell_id);
    expanded
}

/// Collect the packed ids of expanded stations for exclusion filtering
pub fn known_cell_ids<M>(stations: &[ExpandedStation<M>]) -> HashSet<u64> {
    stations.iter().map(|station| station.cell_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_round_trips() {
        let cell_id = pack_cell_id(737_436, 12);
        assert_eq!(cell_id, 188_783_628);
        assert_eq!(unpack_cell_id(cell_id), (737_436, 12));
    }

    #[test]
    fn expands_multiple_groups() {
        let entries = vec![
            RegistryEntry::new(Some("100-1,2 200-3".to_string()), "a"),
            RegistryEntry::new(None, "b"),
            RegistryEntry::new(Some("50-9".to_string()), "c"),
        ];

        let expanded = expand_station_identifier_ranges(&entries);
        let ids: Vec<(u64, &str)> = expanded.iter().map(|s| (s.cell_id, s.metadata)).collect();
        assert_eq!(
            ids,
            vec![
                (pack_cell_id(50, 9), "c"),
                (pack_cell_id(100, 1), "a"),
                (pack_cell_id(100, 2), "a"),
                (pack_cell_id(200, 3), "a"),
            ]
        );
    }

    #[test]
    fn malformed_groups_are_skipped() {
        let entries = vec![RegistryEntry::new(
            Some("100-1 bogus 300-x 400-256 500-7".to_string()),
            (),
        )];

        let ids: Vec<u64> = expand_station_identifier_ranges(&entries)
            .iter()
            .map(|s| s.cell_id)
            .collect();
        assert_eq!(ids, vec![pack_cell_id(100, 1), pack_cell_id(500, 7)]);
    }

    #[test]
    fn strict_parse_reports_errors() {
        assert_eq!(parse_identifier_list("7-1,2"), Ok(vec![(7, 1), (7, 2)]));
        assert!(matches!(
            parse_identifier_list("7-1 8"),
            Err(DecodeError::MalformedIdentifier { .. })
        ));
        assert!(parse_identifier_list("7-300").is_err());
        assert_eq!(parse_identifier_list("   "), Ok(vec![]));
    }

    #[test]
    fn known_ids_collect_into_set() {
        let entries = vec![RegistryEntry::new(Some("1-1,1".to_string()), ())];
        let expanded = expand_station_identifier_ranges(&entries);
        assert_eq!(expanded.len(), 2);
        assert_eq!(known_cell_ids(&expanded).len(), 1);
    }
}
