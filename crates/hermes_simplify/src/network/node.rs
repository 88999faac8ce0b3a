use crate::{coordinate::Coordinate, types::EdgeId};

/// Intersection of the road network. Only holds the edges that start here.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) coordinate: Coordinate,
    pub(crate) edges: Vec<EdgeId>,
}

impl Node {
    pub(crate) fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            edges: Vec::new(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
