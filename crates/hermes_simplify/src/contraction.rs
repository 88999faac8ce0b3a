use tracing::{debug, trace};

use crate::{
    network::{Edge, RoadNetwork},
    types::{EdgeId, NodeId},
};

/// Collapses a pass-through node: when `node` has exactly two edges and none
/// of them is a loop, both are replaced by a single edge between the two
/// neighbours. Returns the new edge.
pub fn merge_at_node(network: &mut RoadNetwork, node: NodeId) -> Option<EdgeId> {
    let &[first, second] = network.node(node).edges() else {
        return None;
    };

    // A loop counts as one edge but makes the node a junction
    if network.edge(first).is_loop() || network.edge(second).is_loop() {
        return None;
    }

    Some(merge_two_edges(network, node, first, second))
}

/// Walks `a` backwards then `b` forwards: `p <- node -> q` becomes `p -> q`.
fn merge_two_edges(network: &mut RoadNetwork, node: NodeId, a: EdgeId, b: EdgeId) -> EdgeId {
    let edge_a = network.edge(a);
    let edge_b = network.edge(b);

    let p = edge_a.end_node();
    let q = edge_b.end_node();

    let mut coordinates =
        Vec::with_capacity(edge_a.coordinates().len() + edge_b.coordinates().len() - 1);
    coordinates.extend(edge_a.coordinates().iter().rev().copied());
    coordinates.extend(edge_b.coordinates().iter().skip(1).copied());

    let length = edge_a.length() + edge_b.length();
    let visits = merged_visits(edge_a, edge_b);

    let merged = network.create_edge_pair(coordinates, length, visits);
    network.add_edge(p, merged);
    if p != q {
        let reversed = network.edge(merged).reversed();
        network.add_edge(q, reversed);
    }

    network.remove_edge(a);
    network.remove_edge(b);

    trace!(%node, %merged, %p, %q, visits, "merged degree two node");

    merged
}

/// Length weighted average of the visits of both edges, truncated.
///
/// The computation is done on the nanometer representation of the lengths in
/// `u128`, so that equal visit counts always average to themselves.
pub(crate) fn merged_visits(a: &Edge, b: &Edge) -> u64 {
    let length_a = a.length().nanometers().max(0) as u128;
    let length_b = b.length().nanometers().max(0) as u128;
    let total = length_a + length_b;

    let weighted = if total == 0 {
        (a.visits() as u128 + b.visits() as u128) / 2
    } else {
        (a.visits() as u128 * length_a + b.visits() as u128 * length_b) / total
    };

    // Never above the larger of both visit counts
    weighted as u64
}

/// Runs [`merge_at_node`] once on every node of the network.
///
/// Nodes emptied by a merge are left in place, see [`RoadNetwork::compact`].
pub fn merge_degree_two(network: &mut RoadNetwork) -> usize {
    let mut merges = 0;
    for node in network.node_ids() {
        if merge_at_node(network, node).is_some() {
            merges += 1;
        }
    }

    debug!(merges, edges = network.edge_count(), "degree two merge pass");

    merges
}
