pub mod adj_list;
pub mod snapshot;
pub mod traversal;

pub use adj_list::{Graph, GraphError};
pub use snapshot::GraphSnapshot;
