use tracing::debug;

use crate::{network::RoadNetwork, types::EdgeId};

use super::{PruneStats, cascade_queue::CascadeQueue, former_end_points, try_merge};

/// Removes every edge visited less than `min_visits` times, least visited
/// first.
///
/// The neighbours of a removed edge are merged when they become pass-through
/// nodes. A merged edge takes the length weighted average of the visits of
/// its parts and is queued again when that average is still below the
/// threshold.
pub fn filter_by_visits(network: &mut RoadNetwork, min_visits: f64) -> PruneStats {
    let mut stats = PruneStats::default();
    let mut queue = CascadeQueue::<u64>::new();

    for (edge_id, edge) in network.main_edges() {
        if is_below(edge.visits(), min_visits) {
            queue.push(edge_id, edge.visits());
        }
    }

    debug!(min_visits, candidates = queue.len(), "filtering by visits");

    while let Some(edge) = queue.pop() {
        if network.edge(edge).is_removed() {
            stats.stale += 1;
            continue;
        }

        if !is_below(network.edge(edge).visits(), min_visits) {
            continue;
        }

        network.remove_edge(edge);
        stats.removed += 1;

        for node in former_end_points(network, edge).into_iter().flatten() {
            if let Some(merged) = try_merge(network, node, &mut stats) {
                push_if_below(network, &mut queue, merged, min_visits);
            }
        }
    }

    debug!(
        removed = stats.removed,
        merged = stats.merged,
        stale = stats.stale,
        edges = network.edge_count(),
        "visit filter done"
    );

    stats
}

fn is_below(visits: u64, min_visits: f64) -> bool {
    (visits as f64) < min_visits
}

fn push_if_below(
    network: &RoadNetwork,
    queue: &mut CascadeQueue<u64>,
    edge: EdgeId,
    min_visits: f64,
) {
    let visits = network.edge(edge).visits();
    if is_below(visits, min_visits) {
        queue.push(edge, visits);
    }
}
