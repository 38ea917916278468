//! # Depot Routing Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Models the fixed network of municipal depots as a weighted undirected
//! graph and answers two kinds of questions about it: reachability order
//! (breadth-first and depth-first traversal) and minimum-cost
//! connectivity (Prim's algorithm).
//!
//! The network is built once at runtime construction and never mutated
//! afterwards; vertex ids are dense zero-based indices, stable for the
//! graph's lifetime.
//!
//! ## Module Structure
//!
//! ```text
//! src/domain/
//! ├── graph.rs  - DepotGraph, Bfs, Dfs
//! ├── mst.rs    - prim, MstResult
//! └── errors.rs - RoutingError
//! ```

pub mod domain;

pub use domain::*;
