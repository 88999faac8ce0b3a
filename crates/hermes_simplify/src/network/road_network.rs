use fxhash::FxHashMap;
use tracing::trace;

use crate::{
    coordinate::Coordinate,
    distance::{Distance, Meters},
    error::SimplifyError,
    types::{EdgeId, NodeId},
};

use super::{edge::Edge, node::Node};

/// Road network keyed by coordinate.
///
/// Nodes and edges live in two arenas and reference each other by index.
/// Edges are never dropped from the arena while the network is being
/// mutated, only flagged as removed; [`RoadNetwork::compact`] reclaims them
/// and renumbers every id.
#[derive(Default, Debug, Clone)]
pub struct RoadNetwork {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) node_index: FxHashMap<Coordinate, NodeId>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes, including the ones left without edges until the next
    /// [`RoadNetwork::compact`].
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edge pairs.
    pub fn edge_count(&self) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.main && !edge.removed)
            .count()
    }

    pub fn node(&self, node: NodeId) -> &Node {
        &self.nodes[node]
    }

    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge]
    }

    pub fn node_id(&self, coordinate: &Coordinate) -> Option<NodeId> {
        self.node_index.get(coordinate).copied()
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes[node].degree()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Live edges in the direction they were created in, one per pair.
    pub fn main_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.main && !edge.removed)
            .map(|(index, edge)| (EdgeId::new(index), edge))
    }

    pub fn total_length(&self) -> Distance<Meters> {
        self.main_edges().map(|(_, edge)| edge.length).sum()
    }

    pub fn get_or_create_node(&mut self, coordinate: Coordinate) -> NodeId {
        if let Some(node) = self.node_index.get(&coordinate) {
            return *node;
        }

        let node = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(coordinate));
        self.node_index.insert(coordinate, node);
        node
    }

    /// Creates an edge and its reversed counterpart, cross-linked, without
    /// attaching either of them to a node. Returns the main edge.
    ///
    /// `coordinates` must hold at least two points.
    pub(crate) fn create_edge_pair(
        &mut self,
        coordinates: Vec<Coordinate>,
        length: Distance<Meters>,
        visits: u64,
    ) -> EdgeId {
        debug_assert!(coordinates.len() >= 2, "an edge needs two coordinates");

        let start_node = self.get_or_create_node(coordinates[0]);
        let end_node = self.get_or_create_node(coordinates[coordinates.len() - 1]);

        let main = EdgeId::new(self.edges.len());
        let reversed = EdgeId::new(self.edges.len() + 1);
        let reversed_coordinates = coordinates.iter().rev().copied().collect();

        self.edges.push(Edge {
            start_node,
            end_node,
            coordinates,
            length,
            visits,
            removed: false,
            main: true,
            reversed,
        });
        self.edges.push(Edge {
            start_node: end_node,
            end_node: start_node,
            coordinates: reversed_coordinates,
            length,
            visits,
            removed: false,
            main: false,
            reversed: main,
        });

        main
    }

    /// Creates an edge pair and attaches it to its end points. Loops are only
    /// attached once, in their main direction.
    ///
    /// Returns `None` when the polyline has fewer than two coordinates, or
    /// when the start node already has an edge with the same polyline.
    pub fn insert_edge(
        &mut self,
        coordinates: Vec<Coordinate>,
        length: Distance<Meters>,
        visits: u64,
    ) -> Option<EdgeId> {
        if coordinates.len() < 2 {
            return None;
        }

        let duplicate = self
            .node_id(&coordinates[0])
            .and_then(|start_node| self.find_edge(start_node, &coordinates));
        if duplicate.is_some() {
            return None;
        }

        let edge = self.create_edge_pair(coordinates, length, visits);
        let Edge {
            start_node,
            end_node,
            reversed,
            ..
        } = self.edges[edge];

        self.add_edge(start_node, edge);
        if start_node != end_node {
            self.add_edge(end_node, reversed);
        }

        Some(edge)
    }

    /// Edge of `node` whose polyline equals `coordinates`.
    pub fn find_edge(&self, node: NodeId, coordinates: &[Coordinate]) -> Option<EdgeId> {
        self.nodes[node]
            .edges
            .iter()
            .copied()
            .find(|edge| self.edges[*edge].coordinates == coordinates)
    }

    /// Attaches `edge` to `node` unless the node already holds an edge with
    /// the identical polyline.
    pub fn add_edge(&mut self, node: NodeId, edge: EdgeId) -> bool {
        if self.find_edge(node, &self.edges[edge].coordinates).is_some() {
            return false;
        }

        self.nodes[node].edges.push(edge);
        true
    }

    /// Detaches the first edge of `node` whose polyline matches the one of
    /// `edge`.
    pub fn remove_edge_from_node(&mut self, node: NodeId, edge: EdgeId) -> bool {
        let coordinates = &self.edges[edge].coordinates;
        let edges = &self.edges;
        let position = self.nodes[node]
            .edges
            .iter()
            .position(|other| edges[*other].coordinates == *coordinates);

        match position {
            Some(position) => {
                self.nodes[node].edges.remove(position);
                true
            }
            None => false,
        }
    }

    /// Removes an edge and its reversed counterpart from the network. Calling
    /// it on an already removed edge does nothing.
    pub fn remove_edge(&mut self, edge: EdgeId) -> bool {
        if self.edges[edge].removed {
            return false;
        }

        let Edge {
            start_node,
            end_node,
            reversed,
            ..
        } = self.edges[edge];

        self.remove_edge_from_node(start_node, edge);
        self.remove_edge_from_node(end_node, reversed);

        self.edges[edge].removed = true;
        self.edges[reversed].removed = true;

        trace!(%edge, %start_node, %end_node, "removed edge");

        true
    }

    /// An edge hanging off a node of degree one, or a loop.
    pub fn is_stub(&self, edge: EdgeId) -> bool {
        let edge = &self.edges[edge];
        !edge.removed
            && (self.degree(edge.start_node) == 1
                || self.degree(edge.end_node) == 1
                || edge.is_loop())
    }

    /// Checks the pairing and attachment invariants of the whole network.
    pub fn validate(&self) -> Result<(), SimplifyError> {
        for (index, node) in self.nodes.iter().enumerate() {
            let node_id = NodeId::new(index);

            if self.node_index.get(&node.coordinate) != Some(&node_id) {
                return Err(violation(format!(
                    "node {node_id} at {} is not indexed by its coordinate",
                    node.coordinate
                )));
            }

            for (position, edge_id) in node.edges.iter().enumerate() {
                let edge = &self.edges[*edge_id];
                let reversed = &self.edges[edge.reversed];

                if edge.removed {
                    return Err(violation(format!(
                        "node {node_id} holds removed edge {edge_id}"
                    )));
                }
                if edge.start_node != node_id {
                    return Err(violation(format!(
                        "edge {edge_id} is attached to {node_id} but starts at {}",
                        edge.start_node
                    )));
                }
                if edge.coordinates.len() < 2
                    || edge.start_coordinate() != node.coordinate
                    || edge.end_coordinate() != self.nodes[edge.end_node].coordinate
                {
                    return Err(violation(format!(
                        "edge {edge_id} polyline does not match its end points"
                    )));
                }
                if reversed.reversed != *edge_id
                    || reversed.start_node != edge.end_node
                    || reversed.end_node != edge.start_node
                    || !reversed.coordinates.iter().eq(edge.coordinates.iter().rev())
                {
                    return Err(violation(format!(
                        "edge {edge_id} and {} are not a reversed pair",
                        edge.reversed
                    )));
                }
                if !edge.is_loop() && !self.nodes[edge.end_node].edges.contains(&edge.reversed)
                {
                    return Err(violation(format!(
                        "node {} does not hold {}, the reverse of {edge_id}",
                        edge.end_node, edge.reversed
                    )));
                }
                if node.edges[position + 1..]
                    .iter()
                    .any(|other| self.edges[*other].coordinates == edge.coordinates)
                {
                    return Err(violation(format!(
                        "node {node_id} holds duplicate edge {edge_id}"
                    )));
                }
            }
        }

        Ok(())
    }
}

fn violation(message: String) -> SimplifyError {
    SimplifyError::InvariantViolation(message)
}
