//! Minimum spanning tree via Prim's algorithm.
//!
//! The frontier is an ordered set of candidate edges keyed by
//! (weight, origin id, destination id); the secondary and tertiary keys
//! exist purely to make edge selection deterministic when weights tie.
//! The set is not eagerly pruned: entries whose destination has since
//! been absorbed are discarded on extraction (lazy deletion).

use super::errors::RoutingError;
use super::graph::DepotGraph;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

/// An accepted spanning-tree edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MstEdge {
    /// Vertex already in the tree when the edge was accepted.
    pub from: usize,
    /// Vertex the edge brought into the tree.
    pub to: usize,
    /// Edge weight.
    pub weight: f64,
}

/// Result of a Prim run.
///
/// When the graph is disconnected from the start vertex the result is
/// partial: fewer than `vertex_count - 1` edges and a partial total.
/// [`MstResult::spans`] makes that case explicit; callers must not
/// assume a complete spanning tree without checking it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResult {
    /// Accepted edges in acceptance order.
    pub edges: Vec<MstEdge>,
    /// Sum of accepted edge weights.
    pub total_weight: f64,
}

impl MstResult {
    /// True if the result connects every vertex of `graph`.
    pub fn spans(&self, graph: &DepotGraph) -> bool {
        self.edges.len() + 1 == graph.vertex_count()
    }
}

/// Frontier entry ordered by (weight, from, to).
#[derive(Debug, Clone, Copy)]
struct FrontierEdge {
    weight: f64,
    from: usize,
    to: usize,
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs Prim's algorithm from `start`.
///
/// Terminates when the result holds `vertex_count - 1` edges or the
/// frontier is exhausted, whichever comes first.
pub fn prim(graph: &DepotGraph, start: usize) -> Result<MstResult, RoutingError> {
    let n = graph.vertex_count();
    if start >= n {
        return Err(RoutingError::StartOutOfRange {
            start,
            vertex_count: n,
        });
    }

    let mut used = vec![false; n];
    let mut frontier: BTreeSet<FrontierEdge> = BTreeSet::new();
    let mut edges: Vec<MstEdge> = Vec::new();
    let mut total_weight = 0.0;

    absorb(graph, start, &mut used, &mut frontier);

    while edges.len() < n - 1 {
        let Some(best) = frontier.pop_first() else {
            break;
        };
        if used[best.to] {
            // Stale entry: a cheaper edge absorbed this vertex already.
            continue;
        }

        edges.push(MstEdge {
            from: best.from,
            to: best.to,
            weight: best.weight,
        });
        total_weight += best.weight;
        absorb(graph, best.to, &mut used, &mut frontier);
    }

    debug!(
        edges = edges.len(),
        total_weight, "computed minimum spanning tree"
    );
    Ok(MstResult {
        edges,
        total_weight,
    })
}

/// Marks `u` used and enqueues its edges to still-unused vertices.
fn absorb(graph: &DepotGraph, u: usize, used: &mut [bool], frontier: &mut BTreeSet<FrontierEdge>) {
    used[u] = true;
    for e in graph.neighbours(u) {
        if !used[e.to] {
            frontier.insert(FrontierEdge {
                weight: e.weight,
                from: u,
                to: e.to,
            });
        }
    }
}
