use crate::{
    coordinate::Coordinate,
    distance::{Distance, Meters},
    types::{EdgeId, NodeId},
};

/// Directed road segment. Every edge lives in the arena next to its reversed
/// counterpart; the `main` one is the direction the polyline was created in.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) start_node: NodeId,
    pub(crate) end_node: NodeId,
    pub(crate) coordinates: Vec<Coordinate>,
    pub(crate) length: Distance<Meters>,
    pub(crate) visits: u64,
    pub(crate) removed: bool,
    pub(crate) main: bool,
    pub(crate) reversed: EdgeId,
}

impl Edge {
    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn start_coordinate(&self) -> Coordinate {
        self.coordinates[0]
    }

    pub fn end_coordinate(&self) -> Coordinate {
        self.coordinates[self.coordinates.len() - 1]
    }

    pub fn length(&self) -> Distance<Meters> {
        self.length
    }

    pub fn visits(&self) -> u64 {
        self.visits
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn is_main(&self) -> bool {
        self.main
    }

    pub fn reversed(&self) -> EdgeId {
        self.reversed
    }

    pub fn is_loop(&self) -> bool {
        self.start_node == self.end_node
    }
}
