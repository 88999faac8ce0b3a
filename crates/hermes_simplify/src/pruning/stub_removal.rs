use tracing::debug;

use crate::{
    distance::{Distance, Meters},
    network::RoadNetwork,
    types::{EdgeId, NodeId},
};

use super::{PruneStats, cascade_queue::CascadeQueue, former_end_points, try_merge};

/// Removes every dead end of the network, shortest first.
///
/// Each removal can turn a neighbour into a pass-through node, which is then
/// merged, or leave a neighbour with a single edge, which becomes a stub in
/// turn. Both are pushed back in the queue until no stub remains. Rings are
/// never broken since none of their nodes drops to degree one.
pub fn remove_stubs(network: &mut RoadNetwork) -> PruneStats {
    let mut stats = PruneStats::default();
    let mut queue = CascadeQueue::<Distance<Meters>>::new();

    let stubs: Vec<_> = network
        .main_edges()
        .map(|(edge_id, edge)| (edge_id, edge.length()))
        .collect();
    for (edge, length) in stubs {
        if network.is_stub(edge) {
            queue.push(edge, length);
        }
    }

    debug!(stubs = queue.len(), "removing stubs");

    while let Some(edge) = queue.pop() {
        if network.edge(edge).is_removed() {
            stats.stale += 1;
            continue;
        }

        if !network.is_stub(edge) {
            continue;
        }

        network.remove_edge(edge);
        stats.removed += 1;

        for node in former_end_points(network, edge).into_iter().flatten() {
            cascade(network, &mut queue, node, &mut stats);
        }
    }

    debug!(
        removed = stats.removed,
        merged = stats.merged,
        stale = stats.stale,
        edges = network.edge_count(),
        "stub removal done"
    );

    stats
}

fn cascade(
    network: &mut RoadNetwork,
    queue: &mut CascadeQueue<Distance<Meters>>,
    node: NodeId,
    stats: &mut PruneStats,
) {
    if let Some(merged) = try_merge(network, node, stats) {
        queue.push(merged, network.edge(merged).length());
    }

    if let &[remaining] = network.node(node).edges() {
        push_if_stub(network, queue, remaining);
    }
}

fn push_if_stub(
    network: &RoadNetwork,
    queue: &mut CascadeQueue<Distance<Meters>>,
    edge: EdgeId,
) {
    if network.is_stub(edge) {
        queue.push(edge, network.edge(edge).length());
    }
}
