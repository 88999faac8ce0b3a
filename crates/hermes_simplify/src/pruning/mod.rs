mod cascade_queue;
pub mod stub_removal;
pub mod visit_filter;

use crate::{
    contraction::merge_at_node,
    network::RoadNetwork,
    types::{EdgeId, NodeId},
};

pub use stub_removal::remove_stubs;
pub use visit_filter::filter_by_visits;

/// Outcome of a pruning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Edges removed because they matched the pruning predicate.
    pub removed: usize,
    /// Degree two merges triggered by the removals.
    pub merged: usize,
    /// Queue entries skipped because the edge was already gone.
    pub stale: usize,
}

/// End points of a removed edge, the end node only when it differs.
fn former_end_points(network: &RoadNetwork, edge: EdgeId) -> [Option<NodeId>; 2] {
    let edge = network.edge(edge);
    let end = (!edge.is_loop()).then_some(edge.end_node());
    [Some(edge.start_node()), end]
}

fn try_merge(network: &mut RoadNetwork, node: NodeId, stats: &mut PruneStats) -> Option<EdgeId> {
    let merged = merge_at_node(network, node)?;
    stats.merged += 1;
    Some(merged)
}
