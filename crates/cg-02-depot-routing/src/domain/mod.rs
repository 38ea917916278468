//! Domain layer: the depot network and the algorithms over it.

pub mod errors;
pub mod graph;
pub mod mst;

pub use errors::RoutingError;
pub use graph::{DepotGraph, Edge};
pub use mst::{prim, MstEdge, MstResult};
