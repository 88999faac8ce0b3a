use hermes_simplify::{
    Coordinate, RoadNetwork, SimplifyParams, io, simplify, simplify_records,
};

use crate::setup::{self, FIXTURE_NETWORK, assert_pairing};

//
//                U (0.01, 0.01) --- S
//              /   \
//  P (0, 0) -- M1 -- Q (0.02, 0) -- T
//              \   /
//                L (0.01, -0.01)
//

#[test]
fn test_fixture_keeps_the_three_paths() {
    let records = io::parse_geojson(FIXTURE_NETWORK).unwrap();
    assert_eq!(records.len(), 8);

    let mut network = RoadNetwork::from_records(records).unwrap();
    let report = simplify(&mut network, &SimplifyParams::default());

    assert_eq!(report.before.edges, 8);
    assert_eq!(report.merged, 2);
    let stubs = report.stub_removal.unwrap();
    assert_eq!(stubs.removed, 2);
    assert_eq!(stubs.merged, 1);
    assert_eq!(report.compacted_nodes, 5);
    assert_eq!(report.after.nodes, 2);
    assert_eq!(report.after.edges, 3);
    assert_pairing(&network);

    let p = Coordinate::new(0.0, 0.0);
    let q = Coordinate::new(0.02, 0.0);
    let mut visits = Vec::new();
    for (_, edge) in network.main_edges() {
        assert_eq!(edge.start_coordinate(), p);
        assert_eq!(edge.end_coordinate(), q);
        assert_eq!(edge.coordinates().len(), 3);
        visits.push(edge.visits());
    }
    visits.sort();
    assert_eq!(visits, vec![2, 10, 20]);
}

#[test]
fn test_simplified_records_survive_geojson() {
    let records = io::parse_geojson(FIXTURE_NETWORK).unwrap();
    let (simplified, _) = simplify_records(records, &SimplifyParams::default()).unwrap();

    let mut buffer = Vec::new();
    io::write_geojson(&mut buffer, &simplified).unwrap();
    let written = io::read_geojson(buffer.as_slice()).unwrap();

    assert_eq!(written, simplified);
}

#[test]
fn test_visit_filter_without_stub_removal() {
    let records = io::parse_geojson(FIXTURE_NETWORK).unwrap();
    let params = SimplifyParams {
        min_visits: Some(3.0),
        remove_stubs: false,
        ..SimplifyParams::default()
    };

    let (simplified, report) = simplify_records(records, &params).unwrap();

    // The spur and the lower path go, P is left with two paths to Q which
    // become a loop at Q
    let filtered = report.visit_filter.unwrap();
    assert_eq!(filtered.removed, 2);
    assert_eq!(filtered.merged, 2);
    assert!(report.stub_removal.is_none());
    assert_eq!(simplified.len(), 2);

    let ring = simplified
        .iter()
        .find(|record| record.start == record.end)
        .unwrap();
    assert_eq!(ring.start, Coordinate::new(0.02, 0.0));
    assert_eq!(ring.visits, 14);
    assert_eq!(ring.polyline.len(), 5);

    let tail = simplified
        .iter()
        .find(|record| record.start != record.end)
        .unwrap();
    assert_eq!(tail.visits, 5);
}

#[test]
fn test_opposite_directions_are_combined_before_simplifying() {
    let records = vec![
        setup::record(&[(0.0, 0.0), (0.001, 0.0)], 1.0, 3),
        setup::record(&[(0.001, 0.0), (0.0, 0.0)], 1.0, 4),
        setup::record(&[(0.001, 0.0), (0.002, 0.0)], 1.0, 6),
    ];
    let params = SimplifyParams {
        remove_stubs: false,
        combine_opposite_directions: true,
        ..SimplifyParams::default()
    };

    let (simplified, report) = simplify_records(records, &params).unwrap();

    assert_eq!(report.before.edges, 2);
    assert_eq!(simplified.len(), 1);
    // (7 + 6) / 2
    assert_eq!(simplified[0].visits, 6);
    assert_eq!(simplified[0].length, 2.0);
}

#[test]
fn test_invalid_records_are_rejected() {
    let mut record = setup::record(&[(0.0, 0.0), (1.0, 0.0)], 1.0, 1);
    record.length = f64::NAN;

    assert!(simplify_records(vec![record], &SimplifyParams::default()).is_err());
}

//
//             D (0.01, 0.01)
//           /   \
//  A ---- B ---- C (0.02, 0)
//           \   /
//          (0.015, -0.005)
//
// B is an interior vertex of the A -> C line
const INTERIOR_JUNCTION_NETWORK: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": { "visits": 8 },
            "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [0.01, 0.0], [0.02, 0.0]] }
        },
        {
            "type": "Feature",
            "properties": { "visits": 4 },
            "geometry": { "type": "LineString", "coordinates": [[0.01, 0.0], [0.01, 0.01]] }
        },
        {
            "type": "Feature",
            "properties": { "visits": 4 },
            "geometry": { "type": "LineString", "coordinates": [[0.01, 0.01], [0.02, 0.0]] }
        },
        {
            "type": "Feature",
            "properties": { "visits": 2 },
            "geometry": { "type": "LineString", "coordinates": [[0.01, 0.0], [0.015, -0.005], [0.02, 0.0]] }
        },
        {
            "type": "Feature",
            "properties": { "visits": 1 },
            "geometry": { "type": "LineString", "coordinates": [[0.03, 0.0], [0.03, 0.0]] }
        }
    ]
}"#;

#[test]
fn test_interior_junctions_become_nodes() {
    let records = io::parse_geojson(INTERIOR_JUNCTION_NETWORK).unwrap();

    let (simplified, report) = simplify_records(records, &SimplifyParams::default()).unwrap();

    // A -> B and B -> C are split apart, the collapsed line is dropped
    assert_eq!(report.before.edges, 5);
    assert_eq!(report.merged, 1);
    assert_eq!(report.stub_removal.unwrap().removed, 1);
    assert_eq!(simplified.len(), 3);

    let b = Coordinate::new(0.01, 0.0);
    let c = Coordinate::new(0.02, 0.0);
    for record in &simplified {
        assert!(
            (record.start == b && record.end == c) || (record.start == c && record.end == b)
        );
    }
    let mut visits: Vec<_> = simplified.iter().map(|record| record.visits).collect();
    visits.sort();
    assert_eq!(visits, vec![2, 4, 8]);
}

#[test]
fn test_interior_junctions_are_ignored_without_noding() {
    let records = io::parse_geojson(INTERIOR_JUNCTION_NETWORK).unwrap();
    let params = SimplifyParams {
        node_lines: false,
        ..SimplifyParams::default()
    };

    let (simplified, report) = simplify_records(records, &params).unwrap();

    // The zero length loop at (0.03, 0) is kept as an edge, then pruned
    assert_eq!(report.before.edges, 5);
    assert!(simplified.is_empty());
}
