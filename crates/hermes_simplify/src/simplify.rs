use std::time::Duration;

use tracing::info;

use crate::{
    contraction::merge_degree_two,
    distance::{Distance, Meters},
    error::SimplifyError,
    network::RoadNetwork,
    noding::node_records,
    params::SimplifyParams,
    pruning::{PruneStats, filter_by_visits, remove_stubs},
    records::{EdgeRecord, combine_opposite_directions},
    stopwatch::{Stopwatch, timed},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkSize {
    pub nodes: usize,
    pub edges: usize,
    pub length: Distance<Meters>,
}

impl NetworkSize {
    pub fn of(network: &RoadNetwork) -> Self {
        Self {
            nodes: network.node_count(),
            edges: network.edge_count(),
            length: network.total_length(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimplifyReport {
    pub before: NetworkSize,
    pub after: NetworkSize,
    pub merged: usize,
    pub visit_filter: Option<PruneStats>,
    pub stub_removal: Option<PruneStats>,
    pub compacted_nodes: usize,
    /// Time spent in the merge and pruning stages.
    pub elapsed: Duration,
}

/// Runs the simplification stages enabled in `params`: degree two merge,
/// visit filtering, stub removal, then compaction of the arenas.
pub fn simplify(network: &mut RoadNetwork, params: &SimplifyParams) -> SimplifyReport {
    let before = NetworkSize::of(network);
    info!(
        nodes = before.nodes,
        edges = before.edges,
        length = %before.length,
        "simplifying network"
    );

    let mut elapsed = Duration::ZERO;

    let mut merged = 0;
    if params.merge_degree_two {
        let mut stopwatch = Stopwatch::new("merge_degree_two");
        merged = timed!(stopwatch, { merge_degree_two(network) });
        stopwatch.report();
        elapsed += stopwatch.total_duration();
        info!(merged, edges = network.edge_count(), "merged degree two nodes");
    }

    let visit_filter = params.min_visits.map(|min_visits| {
        let mut stopwatch = Stopwatch::new("filter_by_visits");
        let stats = timed!(stopwatch, { filter_by_visits(network, min_visits) });
        stopwatch.report();
        elapsed += stopwatch.total_duration();
        info!(
            min_visits,
            removed = stats.removed,
            merged = stats.merged,
            edges = network.edge_count(),
            "filtered by visits"
        );
        stats
    });

    let stub_removal = params.remove_stubs.then(|| {
        let mut stopwatch = Stopwatch::new("remove_stubs");
        let stats = timed!(stopwatch, { remove_stubs(network) });
        stopwatch.report();
        elapsed += stopwatch.total_duration();
        info!(
            removed = stats.removed,
            merged = stats.merged,
            edges = network.edge_count(),
            "removed stubs"
        );
        stats
    });

    let compacted_nodes = network.compact();

    let after = NetworkSize::of(network);
    info!(
        nodes = after.nodes,
        edges = after.edges,
        length = %after.length,
        ?elapsed,
        "simplified network"
    );

    SimplifyReport {
        before,
        after,
        merged,
        visit_filter,
        stub_removal,
        compacted_nodes,
        elapsed,
    }
}

/// Builds the network from `records`, simplifies it and returns the records of
/// the remaining edges. Opposite directions are combined before noding.
pub fn simplify_records(
    records: Vec<EdgeRecord>,
    params: &SimplifyParams,
) -> Result<(Vec<EdgeRecord>, SimplifyReport), SimplifyError> {
    let records = if params.combine_opposite_directions {
        combine_opposite_directions(records)
    } else {
        records
    };
    let records = if params.node_lines {
        node_records(records)
    } else {
        records
    };

    let mut network = RoadNetwork::from_records(records)?;
    let report = simplify(&mut network, params);

    Ok((network.to_records(), report))
}
