mod compact;
pub mod edge;
pub mod node;
pub mod road_network;

pub use edge::Edge;
pub use node::Node;
pub use road_network::RoadNetwork;
