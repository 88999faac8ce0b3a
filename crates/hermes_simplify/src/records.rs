//! Flat edge records, the shape the network is loaded from and written back
//! to.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    coordinate::Coordinate, error::SimplifyError, geometry::compute_geometry_distance, meters,
    network::RoadNetwork,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub start: Coordinate,
    pub end: Coordinate,
    pub polyline: Vec<Coordinate>,
    /// Meters
    pub length: f64,
    pub visits: u64,
}

impl EdgeRecord {
    /// Record whose length is the great-circle length of `polyline`.
    pub fn from_polyline(polyline: Vec<Coordinate>, visits: u64) -> Result<Self, SimplifyError> {
        if polyline.len() < 2 {
            return Err(SimplifyError::DegeneratePolyline(polyline.len()));
        }

        Ok(Self {
            start: polyline[0],
            end: polyline[polyline.len() - 1],
            length: compute_geometry_distance(&polyline).value(),
            polyline,
            visits,
        })
    }

    fn validate(&self) -> Result<(), SimplifyError> {
        if self.polyline.len() < 2 {
            return Err(SimplifyError::DegeneratePolyline(self.polyline.len()));
        }

        if self.polyline[0] != self.start || self.polyline[self.polyline.len() - 1] != self.end {
            return Err(SimplifyError::EndpointMismatch {
                start: self.start,
                end: self.end,
            });
        }

        if !self.length.is_finite() || self.length < 0.0 {
            return Err(SimplifyError::InvalidLength(self.length));
        }

        Ok(())
    }
}

impl RoadNetwork {
    /// Builds a network from edge records. Records repeating the polyline of
    /// an earlier one, in either direction, are ignored.
    pub fn from_records<I>(records: I) -> Result<Self, SimplifyError>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut network = RoadNetwork::new();
        let mut duplicates = 0;

        for record in records {
            record.validate()?;

            if network
                .insert_edge(record.polyline, meters!(record.length), record.visits)
                .is_none()
            {
                duplicates += 1;
            }
        }

        debug!(
            nodes = network.node_count(),
            edges = network.edge_count(),
            duplicates,
            "built network from records"
        );

        Ok(network)
    }

    /// One record per live edge pair, in its main direction.
    pub fn to_records(&self) -> Vec<EdgeRecord> {
        let mut records = Vec::with_capacity(self.edge_count());

        for node in self.node_ids() {
            for edge_id in self.node(node).edges() {
                let edge = self.edge(*edge_id);
                if !edge.is_main() {
                    continue;
                }

                records.push(EdgeRecord {
                    start: edge.start_coordinate(),
                    end: edge.end_coordinate(),
                    polyline: edge.coordinates().to_vec(),
                    length: edge.length().value(),
                    visits: edge.visits(),
                });
            }
        }

        records
    }
}

/// Folds every record travelling the exact reverse polyline of an earlier
/// record into it, summing their visits (saturating).
///
/// Routes driven in both directions produce one record per direction, the
/// network keeps a single edge per polyline.
pub fn combine_opposite_directions(records: Vec<EdgeRecord>) -> Vec<EdgeRecord> {
    let mut combined: Vec<EdgeRecord> = Vec::with_capacity(records.len());
    let mut positions: FxHashMap<Vec<Coordinate>, usize> = FxHashMap::default();

    for record in records {
        let reversed: Vec<Coordinate> = record.polyline.iter().rev().copied().collect();

        if let Some(&position) = positions.get(&reversed) {
            let existing = &mut combined[position];
            existing.visits = existing.visits.saturating_add(record.visits);
            continue;
        }

        positions.entry(record.polyline.clone()).or_insert(combined.len());
        combined.push(record);
    }

    combined
}
