use fxhash::FxHashMap;
use tracing::debug;

use crate::types::{EdgeId, NodeId};

use super::road_network::RoadNetwork;

impl RoadNetwork {
    /// Deletes every node without edges and reclaims the removed edges.
    ///
    /// Node and edge ids are renumbered, ids obtained before the call must
    /// not be used afterwards. Returns the number of deleted nodes.
    pub fn compact(&mut self) -> usize {
        let mut node_ids: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut live_nodes = 0;
        for (index, node) in self.nodes.iter().enumerate() {
            if !node.is_empty() {
                node_ids[index] = Some(NodeId::new(live_nodes));
                live_nodes += 1;
            }
        }

        let mut edge_ids: Vec<Option<EdgeId>> = vec![None; self.edges.len()];
        let mut live_edges = 0;
        for (index, edge) in self.edges.iter().enumerate() {
            if !edge.removed {
                edge_ids[index] = Some(EdgeId::new(live_edges));
                live_edges += 1;
            }
        }

        let deleted_nodes = self.nodes.len() - live_nodes;
        let reclaimed_edges = self.edges.len() - live_edges;

        let remap_node = |node: NodeId| node_ids[node.get()].expect("live edge ends at a live node");
        let remap_edge = |edge: EdgeId| edge_ids[edge.get()].expect("live edge points to a live edge");

        let mut edges = Vec::with_capacity(live_edges);
        for mut edge in std::mem::take(&mut self.edges) {
            if edge.removed {
                continue;
            }
            edge.start_node = remap_node(edge.start_node);
            edge.end_node = remap_node(edge.end_node);
            edge.reversed = remap_edge(edge.reversed);
            edges.push(edge);
        }

        let mut nodes = Vec::with_capacity(live_nodes);
        let mut node_index = FxHashMap::default();
        node_index.reserve(live_nodes);
        for mut node in std::mem::take(&mut self.nodes) {
            if node.is_empty() {
                continue;
            }
            for edge in node.edges.iter_mut() {
                *edge = remap_edge(*edge);
            }
            node_index.insert(node.coordinate, NodeId::new(nodes.len()));
            nodes.push(node);
        }

        self.nodes = nodes;
        self.edges = edges;
        self.node_index = node_index;

        debug!(
            deleted_nodes,
            reclaimed_edges,
            nodes = self.nodes.len(),
            edges = self.edge_count(),
            "compacted network"
        );

        deleted_nodes
    }
}
