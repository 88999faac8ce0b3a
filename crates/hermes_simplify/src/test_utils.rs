use crate::{coordinate::Coordinate, meters, network::RoadNetwork};

pub const CHAIN_STEP: f64 = 0.001;

pub fn coordinate(lon: f64, lat: f64) -> Coordinate {
    Coordinate::new(lon, lat)
}

/// Builds a network from `(polyline, length in meters, visits)` triples.
pub fn create_network(edges: &[(Vec<(f64, f64)>, f64, u64)]) -> RoadNetwork {
    let mut network = RoadNetwork::new();

    for (polyline, length, visits) in edges {
        let coordinates = polyline
            .iter()
            .map(|&(lon, lat)| coordinate(lon, lat))
            .collect();
        network.insert_edge(coordinates, meters!(*length), *visits);
    }

    network
}

/// Straight chain along the equator with one edge of 1 meter per visit
/// count, starting at `(0, 0)`.
pub fn create_chain_network(visits: &[u64]) -> RoadNetwork {
    let edges: Vec<_> = visits
        .iter()
        .enumerate()
        .map(|(index, visits)| {
            (
                vec![
                    (index as f64 * CHAIN_STEP, 0.0),
                    ((index + 1) as f64 * CHAIN_STEP, 0.0),
                ],
                1.0,
                *visits,
            )
        })
        .collect();

    create_network(&edges)
}
