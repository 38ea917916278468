//! N-ary category taxonomy.
//!
//! A static, read-mostly hierarchy used for categorising requests in the
//! presentation layer. Built once from the fixed municipal shape and
//! exposed read-only; no search operations beyond direct enumeration.

use serde::{Deserialize, Serialize};

/// A labelled node with an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    label: String,
    children: Vec<TaxonomyNode>,
}

impl TaxonomyNode {
    /// Creates a leaf node.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child and returns a mutable handle to it so callers can
    /// keep building under it.
    pub fn add_child(&mut self, label: impl Into<String>) -> &mut TaxonomyNode {
        self.children.push(TaxonomyNode::new(label));
        self.children.last_mut().expect("child appended above")
    }

    /// The node's display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The node's children in insertion order.
    pub fn children(&self) -> &[TaxonomyNode] {
        &self.children
    }
}

/// Builds the fixed municipal category tree.
pub fn municipal_taxonomy() -> TaxonomyNode {
    let mut root = TaxonomyNode::new("Root");

    let water = root.add_child("Water");
    water.add_child("Leak");
    water.add_child("Burst");
    water.add_child("Low Pressure");

    let electricity = root.add_child("Electricity");
    electricity.add_child("Outage");
    electricity.add_child("Fault");
    electricity.add_child("Meter");

    let roads = root.add_child("Roads");
    roads.add_child("Pothole");
    roads.add_child("Resurfacing");
    roads.add_child("Signage");

    let safety = root.add_child("Community Safety");
    safety.add_child("Streetlight");
    safety.add_child("Vandalism");

    root
}
