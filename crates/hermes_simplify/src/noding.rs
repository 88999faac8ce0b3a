//! Noding of raw records: a vertex shared by several lines must be a node of
//! the network even when it sits in the middle of a polyline.

use fxhash::FxHashMap;
use tracing::debug;

use crate::{coordinate::Coordinate, geometry::compute_geometry_distance, records::EdgeRecord};

/// Drops repeated consecutive vertices, then the records left with fewer than
/// two vertices, then splits every record at each interior vertex that occurs
/// more than once across all records.
///
/// Split parts keep the visits of their record and get the great-circle length
/// of their own polyline. Records that are not split keep their length.
pub fn node_records(records: Vec<EdgeRecord>) -> Vec<EdgeRecord> {
    let mut vertex_counts: FxHashMap<Coordinate, usize> = FxHashMap::default();
    let mut deduplicated = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for mut record in records {
        record.polyline.dedup();
        if record.polyline.len() < 2 {
            dropped += 1;
            continue;
        }

        for coordinate in &record.polyline {
            *vertex_counts.entry(*coordinate).or_default() += 1;
        }
        deduplicated.push(record);
    }

    let mut noded = Vec::with_capacity(deduplicated.len());
    let mut splits = 0;

    for record in deduplicated {
        let last = record.polyline.len() - 1;
        let cuts: Vec<usize> = (1..last)
            .filter(|&index| vertex_counts[&record.polyline[index]] > 1)
            .collect();

        if cuts.is_empty() {
            noded.push(record);
            continue;
        }

        splits += cuts.len();
        let mut start = 0;
        for end in cuts.into_iter().chain(std::iter::once(last)) {
            let polyline = record.polyline[start..=end].to_vec();
            noded.push(EdgeRecord {
                start: polyline[0],
                end: polyline[polyline.len() - 1],
                length: compute_geometry_distance(&polyline).value(),
                polyline,
                visits: record.visits,
            });
            start = end;
        }
    }

    debug!(records = noded.len(), dropped, splits, "noded records");

    noded
}
