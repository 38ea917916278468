//! Domain layer: the ordered containers and the store that composes them.

pub mod avl;
pub mod bst;
pub mod heap;
pub mod issues;
pub mod rbtree;
pub mod store;
pub mod taxonomy;
pub mod value_objects;

pub use avl::BalancedHeightTree;
pub use bst::OrderedKeyTree;
pub use heap::MaxPriorityHeap;
pub use issues::IssueLog;
pub use rbtree::BalancedColorTree;
pub use store::RequestIndexStore;
pub use taxonomy::{municipal_taxonomy, TaxonomyNode};
pub use value_objects::{urgency_order, StoreStatus};
