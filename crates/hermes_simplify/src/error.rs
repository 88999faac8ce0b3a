use thiserror::Error;

use crate::coordinate::Coordinate;

#[derive(Error, Debug)]
pub enum SimplifyError {
    #[error("Edge polyline needs at least two coordinates, found {0}")]
    DegeneratePolyline(usize),
    #[error("Edge from {start} to {end} does not match its polyline")]
    EndpointMismatch { start: Coordinate, end: Coordinate },
    #[error("Invalid edge length: {0}")]
    InvalidLength(f64),
    #[error("Invalid visit count: {0}")]
    InvalidVisits(String),
    #[error("Invalid feature: {0}")]
    InvalidFeature(String),
    #[error("Network invariant violated: {0}")]
    InvariantViolation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
