pub mod contraction;
pub mod coordinate;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod io;
pub mod network;
pub mod noding;
pub mod params;
pub mod pruning;
pub mod records;
pub mod simplify;
mod stopwatch;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use coordinate::Coordinate;
pub use error::SimplifyError;
pub use network::RoadNetwork;
pub use noding::node_records;
pub use params::SimplifyParams;
pub use records::{EdgeRecord, combine_opposite_directions};
pub use simplify::{NetworkSize, SimplifyReport, simplify, simplify_records};
