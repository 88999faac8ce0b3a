use std::io::Read;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::debug;

use crate::{coordinate::Coordinate, error::SimplifyError, records::EdgeRecord};

const COORDINATE_SCALE: f64 = 1e7;

/// One way segment of a CSV dump, coordinates in 1e-7 degrees. Columns after
/// `visits` are ignored.
#[derive(Debug, Deserialize)]
struct WaySegmentRow {
    way_id: i64,
    start_lon: i64,
    start_lat: i64,
    end_lon: i64,
    end_lat: i64,
    visits: u64,
}

fn scaled(lon: i64, lat: i64) -> Coordinate {
    Coordinate::new(lon as f64 / COORDINATE_SCALE, lat as f64 / COORDINATE_SCALE)
}

/// Reads straight way segments. Segments starting and ending at the same
/// coordinate are skipped.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<EdgeRecord>, SimplifyError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0;

    for row in reader.deserialize() {
        let row: WaySegmentRow = row?;

        let start = scaled(row.start_lon, row.start_lat);
        let end = scaled(row.end_lon, row.end_lat);

        if start == end {
            debug!(way_id = row.way_id, "skipping zero length segment");
            skipped += 1;
            continue;
        }

        records.push(EdgeRecord::from_polyline(vec![start, end], row.visits)?);
    }

    debug!(records = records.len(), skipped, "read csv segments");

    Ok(records)
}
