//! # Request Indexing Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Maintains the authoritative list of municipal service requests and
//! keeps four derived indices consistent with it on every insert, so the
//! presentation layer can answer each of its queries along the dimension
//! that is fast for it.
//!
//! ## Index Map
//!
//! | Query | Index | Structure |
//! |-------|-------|-----------|
//! | Exact ticket lookup | `by_ticket` | `OrderedKeyTree` (unbalanced BST) |
//! | Ordered by creation instant | `by_created_at` | `BalancedHeightTree` (AVL) |
//! | Ordered by location string | `by_location` | `BalancedColorTree` (left-leaning red-black) |
//! | Most urgent first | `urgent` | `MaxPriorityHeap` + [`urgency_order`] |
//!
//! All four indices hold `Arc` clones of the same store-owned record, so a
//! hit through any index yields the identical logical entity. The category
//! taxonomy is built once at store construction and never mutated.
//!
//! Alongside the indexed store sits [`IssueLog`], the flat capture log
//! for resident-reported issues awaiting triage.
//!
//! ## Module Structure
//!
//! ```text
//! src/
//! ├── domain/
//! │   ├── bst.rs           - OrderedKeyTree
//! │   ├── avl.rs           - BalancedHeightTree
//! │   ├── rbtree.rs        - BalancedColorTree
//! │   ├── heap.rs          - MaxPriorityHeap
//! │   ├── taxonomy.rs      - TaxonomyNode + municipal shape
//! │   ├── value_objects.rs - urgency_order, StoreStatus
//! │   ├── issues.rs        - IssueLog (flat capture log)
//! │   └── store.rs         - RequestIndexStore
//! └── ports/
//!     └── inbound.rs       - RequestIndexApi trait
//! ```

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
