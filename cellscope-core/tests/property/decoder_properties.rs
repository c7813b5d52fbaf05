use std::collections::HashSet;

use cellscope_core::{
    adjust_timing_advance, aggregate_by_cell, classify_station_type, compute_calibration_offset,
    decode_cell_number, estimate_radius, filter_known_stations,
    registry::{pack_cell_id, parse_identifier_list, unpack_cell_id},
    CellMask, CellRecordDecoder, RawMeasurement, StationType,
};
use proptest::prelude::*;

fn any_mask() -> impl Strategy<Value = CellMask> {
    prop_oneof![Just(CellMask::TOWER_COLLECTOR), Just(CellMask::MLS_LEGACY)]
}

fn any_station_type() -> impl Strategy<Value = StationType> {
    prop_oneof![
        Just(StationType::Macro),
        Just(StationType::MiniMacro),
        Just(StationType::SatelliteBackhaul),
        Just(StationType::IndoorSmallCell),
        Just(StationType::IndoorUnit),
        Just(StationType::Picocell),
        Just(StationType::Unclassified),
    ]
}

fn sighting() -> impl Strategy<Value = RawMeasurement> {
    (
        0u8..4,
        prop::option::of(-140.0f64..-40.0),
        prop::option::of(0i32..64),
    )
        .prop_map(|(local, rsrp, ta)| RawMeasurement {
            cell_id: Some(pack_cell_id(737_436, local)),
            short_cell_id: Some(737_436),
            rnc: Some(u32::from(local)),
            psc: Some(100),
            rsrp,
            ta,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn decode_is_idempotent_under_mask(id in 0i64..=i64::MAX, mask in any_mask()) {
        let once = decode_cell_number(id, mask).unwrap();
        prop_assert_eq!(once & mask.bits(), once);
        prop_assert_eq!(decode_cell_number(i64::from(once), mask).unwrap(), once);
        prop_assert!(once <= mask.bits());
    }

    #[test]
    fn classification_partitions_range(cell_number in 0i64..16_384) {
        let station = classify_station_type(cell_number);
        prop_assert_ne!(station, StationType::Unclassified);

        let matching: Vec<_> = StationType::ALL
            .iter()
            .filter(|t| {
                let range = t.cell_number_range().unwrap();
                range.contains(&(cell_number as u32))
            })
            .collect();
        prop_assert_eq!(matching, vec![&station]);
    }

    #[test]
    fn classification_outside_range(cell_number in prop_oneof![i64::MIN..0, 16_384i64..i64::MAX]) {
        prop_assert_eq!(classify_station_type(cell_number), StationType::Unclassified);
    }

    #[test]
    fn calibration_policy(station in any_station_type(), offset in 0i32..=150) {
        let expected = if station == StationType::SatelliteBackhaul { offset } else { 0 };
        prop_assert_eq!(compute_calibration_offset(station, offset), expected);
    }

    #[test]
    fn radius_never_negative(
        ta in prop::option::of(-1_000i32..1_000),
        offset in 0i32..=150,
        meters in 0u32..=999,
    ) {
        let adjusted = adjust_timing_advance(ta, offset);
        prop_assert_eq!(adjusted.is_some(), ta.is_some());
        prop_assert!(estimate_radius(adjusted, f64::from(meters)) >= 0.0);
    }

    #[test]
    fn registry_pack_round_trips(site in 0u32..(1 << 20), locals in prop::collection::vec(any::<u8>(), 1..5)) {
        let list = locals.iter().map(u8::to_string).collect::<Vec<_>>().join(",");
        let pairs = parse_identifier_list(&format!("{site}-{list}")).unwrap();

        for ((parsed_site, local), expected_local) in pairs.into_iter().zip(&locals) {
            prop_assert_eq!(parsed_site, site);
            prop_assert_eq!(local, *expected_local);
            prop_assert_eq!(unpack_cell_id(pack_cell_id(site, local)), (site, local));
        }
    }

    #[test]
    fn aggregation_is_order_independent(mut rows in prop::collection::vec(sighting(), 0..24)) {
        let decoder = CellRecordDecoder::default();
        let (forward, _) = decoder.decode_batch(&rows);
        rows.reverse();
        let (backward, _) = decoder.decode_batch(&rows);

        prop_assert_eq!(aggregate_by_cell(&forward), aggregate_by_cell(&backward));
    }

    #[test]
    fn known_filter_preserves_others(rows in prop::collection::vec(sighting(), 0..24), known_local in 0u8..4) {
        let known: HashSet<u64> = [pack_cell_id(737_436, known_local)].into_iter().collect();
        let expected: Vec<RawMeasurement> = rows
            .iter()
            .filter(|r| r.cell_id != Some(pack_cell_id(737_436, known_local)))
            .cloned()
            .collect();

        prop_assert_eq!(filter_known_stations(rows, &known), expected);
    }
}
