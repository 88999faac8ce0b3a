use std::collections::BTreeSet;

use hermes_simplify::{
    Coordinate, EdgeRecord, RoadNetwork, geometry::canonical_polyline, types::EdgeId,
};

pub const FIXTURE_NETWORK: &str = include_str!("../fixtures/small_network.geojson");

pub fn record(polyline: &[(f64, f64)], length: f64, visits: u64) -> EdgeRecord {
    let polyline: Vec<_> = polyline
        .iter()
        .map(|&(lon, lat)| Coordinate::new(lon, lat))
        .collect();

    EdgeRecord {
        start: polyline[0],
        end: polyline[polyline.len() - 1],
        polyline,
        length,
        visits,
    }
}

pub fn create_network(edges: &[(&[(f64, f64)], f64, u64)]) -> RoadNetwork {
    let records = edges
        .iter()
        .map(|&(polyline, length, visits)| record(polyline, length, visits));

    RoadNetwork::from_records(records).unwrap()
}

/// Chain of unit length edges along the equator, one per visit count.
pub fn create_chain_network(visits: &[u64]) -> RoadNetwork {
    let records = visits.iter().enumerate().map(|(index, &visits)| {
        record(
            &[
                (index as f64 * 0.001, 0.0),
                ((index + 1) as f64 * 0.001, 0.0),
            ],
            1.0,
            visits,
        )
    });

    RoadNetwork::from_records(records).unwrap()
}

/// Star around `(0, 0)` with one unit length spoke per visit count.
pub fn create_star_network(visits: &[u64]) -> RoadNetwork {
    let spokes = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0), (1.0, 1.0)];

    let records = visits
        .iter()
        .zip(spokes)
        .map(|(&visits, tip)| record(&[(0.0, 0.0), tip], 1.0, visits));

    RoadNetwork::from_records(records).unwrap()
}

/// Surviving edges as orientation independent polylines, in 1e-7 degrees.
pub fn surviving_polylines(network: &RoadNetwork) -> BTreeSet<Vec<(i64, i64)>> {
    network
        .main_edges()
        .map(|(_, edge)| {
            canonical_polyline(edge.coordinates())
                .iter()
                .map(|coordinate| {
                    (
                        (coordinate.lon() * 1e7).round() as i64,
                        (coordinate.lat() * 1e7).round() as i64,
                    )
                })
                .collect()
        })
        .collect()
}

pub fn assert_pairing(network: &RoadNetwork) {
    for (edge_id, edge) in network.main_edges() {
        let reversed = network.edge(edge.reversed());

        assert_eq!(reversed.reversed(), edge_id);
        assert_eq!(reversed.start_node(), edge.end_node());
        assert_eq!(reversed.end_node(), edge.start_node());
        assert!(
            reversed
                .coordinates()
                .iter()
                .eq(edge.coordinates().iter().rev())
        );
        assert!(!reversed.is_removed());
    }

    assert!(network.validate().is_ok());
}

pub fn is_attached(network: &RoadNetwork, edge: EdgeId) -> bool {
    let start = network.edge(edge).start_node();
    network.node(start).edges().contains(&edge)
}
