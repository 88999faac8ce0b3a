use crate::{
    coordinate::Coordinate,
    distance::{Distance, Meters},
    meters,
};

pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> Distance<Meters> {
    meters!(a.haversine_distance(b))
}

/// Length of a polyline, summing the great-circle distance of each segment.
pub fn compute_geometry_distance(geometry: &[Coordinate]) -> Distance<Meters> {
    geometry
        .windows(2)
        .map(|segment| haversine_distance(&segment[0], &segment[1]))
        .sum()
}

/// Orientation independent form of a polyline, used to compare edges that
/// may have been stored in either direction.
pub fn canonical_polyline(geometry: &[Coordinate]) -> Vec<Coordinate> {
    let forward = geometry.iter().map(|c| <[f64; 2]>::from(*c));
    let backward = geometry.iter().rev().map(|c| <[f64; 2]>::from(*c));

    if backward.lt(forward) {
        geometry.iter().rev().copied().collect()
    } else {
        geometry.to_vec()
    }
}
