//! Weighted undirected graph over named depots.
//!
//! Adjacency-list representation. Undirected edges are stored
//! symmetrically in both lists with equal weight; neighbour order is
//! edge-insertion order, which fixes the traversal orders below. Weights
//! must be non-negative; the graph does not validate this.

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// An outgoing adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Destination vertex id.
    pub to: usize,
    /// Edge weight, e.g. distance in kilometres.
    pub weight: f64,
}

/// Weighted undirected graph with dense zero-based vertex ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepotGraph {
    names: Vec<String>,
    adjacency: Vec<Vec<Edge>>,
}

impl DepotGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named vertex and returns its id.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> usize {
        self.names.push(name.into());
        self.adjacency.push(Vec::new());
        self.names.len() - 1
    }

    /// Appends a symmetric weighted edge between `u` and `v`.
    ///
    /// Panics if either vertex id is out of range.
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, weight: f64) {
        self.adjacency[u].push(Edge { to: v, weight });
        self.adjacency[v].push(Edge { to: u, weight });
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Display name of a vertex. Panics if `id` is out of range.
    pub fn name_of(&self, id: usize) -> &str {
        &self.names[id]
    }

    /// Adjacency list of a vertex in insertion order. Panics if `u` is
    /// out of range.
    pub fn neighbours(&self, u: usize) -> &[Edge] {
        &self.adjacency[u]
    }

    /// Every undirected edge reported once as `(u, v, weight)`.
    pub fn all_edges(&self) -> Vec<(usize, usize, f64)> {
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut edges = Vec::new();
        for (u, list) in self.adjacency.iter().enumerate() {
            for e in list {
                if !seen.contains(&(e.to, u)) {
                    seen.insert((u, e.to));
                    edges.push((u, e.to, e.weight));
                }
            }
        }
        edges
    }

    /// Breadth-first traversal from `start`, yielding vertex names.
    ///
    /// Vertices are marked visited on enqueue and neighbours are taken
    /// in adjacency insertion order. Restartable: each call produces an
    /// independent traversal. Panics if `start` is out of range.
    pub fn bfs(&self, start: usize) -> Bfs<'_> {
        let mut seen = vec![false; self.vertex_count()];
        let mut queue = VecDeque::new();
        seen[start] = true;
        queue.push_back(start);
        Bfs {
            graph: self,
            seen,
            queue,
        }
    }

    /// Depth-first preorder traversal from `start`, yielding vertex
    /// names.
    ///
    /// Explores neighbours in adjacency insertion order; the explicit
    /// stack reproduces the recursive visit order without recursion
    /// depth tracking the path length. Restartable per call. Panics if
    /// `start` is out of range.
    pub fn dfs(&self, start: usize) -> Dfs<'_> {
        assert!(start < self.vertex_count(), "start vertex out of range");
        Dfs {
            graph: self,
            seen: vec![false; self.vertex_count()],
            stack: Vec::new(),
            start: Some(start),
        }
    }

    /// The fixed Cape Town depot network used by the demo runtime:
    /// five depots, six corridors with illustrative distances.
    pub fn cape_town_demo() -> Self {
        let mut g = Self::new();
        let bellville = g.add_vertex("Bellville Depot");
        let athlone = g.add_vertex("Athlone Depot");
        let mitchells = g.add_vertex("Mitchells Plain Depot");
        let khayelitsha = g.add_vertex("Khayelitsha Depot");
        let durbanville = g.add_vertex("Durbanville Depot");

        g.add_undirected_edge(bellville, athlone, 18.0);
        g.add_undirected_edge(bellville, durbanville, 13.0);
        g.add_undirected_edge(athlone, mitchells, 20.0);
        g.add_undirected_edge(athlone, khayelitsha, 22.0);
        g.add_undirected_edge(mitchells, khayelitsha, 17.0);
        g.add_undirected_edge(durbanville, khayelitsha, 29.0);
        g
    }
}

/// Queue-based breadth-first traversal.
#[derive(Debug)]
pub struct Bfs<'g> {
    graph: &'g DepotGraph,
    seen: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'g> Iterator for Bfs<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for e in self.graph.neighbours(u) {
            if !self.seen[e.to] {
                self.seen[e.to] = true;
                self.queue.push_back(e.to);
            }
        }
        Some(self.graph.name_of(u))
    }
}

/// Stack-based depth-first preorder traversal.
///
/// Each stack frame is a vertex plus a cursor into its adjacency list,
/// so a vertex is yielded exactly when it is first discovered.
#[derive(Debug)]
pub struct Dfs<'g> {
    graph: &'g DepotGraph,
    seen: Vec<bool>,
    stack: Vec<(usize, usize)>,
    start: Option<usize>,
}

impl<'g> Iterator for Dfs<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.seen[start] = true;
            self.stack.push((start, 0));
            return Some(self.graph.name_of(start));
        }

        while let Some((u, cursor)) = self.stack.last_mut() {
            let u = *u;
            match self.graph.neighbours(u).get(*cursor) {
                Some(edge) => {
                    *cursor += 1;
                    if !self.seen[edge.to] {
                        self.seen[edge.to] = true;
                        self.stack.push((edge.to, 0));
                        return Some(self.graph.name_of(edge.to));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_vertex_assigns_dense_ids() {
        let mut g = DepotGraph::new();
        assert_eq!(g.add_vertex("A"), 0);
        assert_eq!(g.add_vertex("B"), 1);
        assert_eq!(g.add_vertex("C"), 2);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.name_of(1), "B");
    }

    #[test]
    fn test_undirected_edge_is_symmetric() {
        let mut g = DepotGraph::new();
        let a = g.add_vertex("A");
        let b = g.add_vertex("B");
        g.add_undirected_edge(a, b, 4.5);

        assert_eq!(g.neighbours(a), &[Edge { to: b, weight: 4.5 }]);
        assert_eq!(g.neighbours(b), &[Edge { to: a, weight: 4.5 }]);
    }

    #[test]
    fn test_all_edges_reports_each_once() {
        let g = DepotGraph::cape_town_demo();
        let edges = g.all_edges();
        assert_eq!(edges.len(), 6);

        let total: f64 = edges.iter().map(|(_, _, w)| w).sum();
        assert!((total - 119.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bfs_order_on_demo_network() {
        let g = DepotGraph::cape_town_demo();
        let order: Vec<_> = g.bfs(0).collect();
        assert_eq!(
            order,
            vec![
                "Bellville Depot",
                "Athlone Depot",
                "Durbanville Depot",
                "Mitchells Plain Depot",
                "Khayelitsha Depot",
            ]
        );
    }

    #[test]
    fn test_dfs_order_on_demo_network() {
        let g = DepotGraph::cape_town_demo();
        let order: Vec<_> = g.dfs(0).collect();
        assert_eq!(
            order,
            vec![
                "Bellville Depot",
                "Athlone Depot",
                "Mitchells Plain Depot",
                "Khayelitsha Depot",
                "Durbanville Depot",
            ]
        );
    }

    #[test]
    fn test_traversals_visit_each_vertex_once_and_start_first() {
        let g = DepotGraph::cape_town_demo();
        for start in 0..g.vertex_count() {
            for order in [
                g.bfs(start).collect::<Vec<_>>(),
                g.dfs(start).collect::<Vec<_>>(),
            ] {
                assert_eq!(order.len(), g.vertex_count());
                assert_eq!(order[0], g.name_of(start));
                let distinct: HashSet<_> = order.iter().collect();
                assert_eq!(distinct.len(), order.len());
            }
        }
    }

    #[test]
    fn test_traversals_are_restartable() {
        let g = DepotGraph::cape_town_demo();
        assert_eq!(g.bfs(2).collect::<Vec<_>>(), g.bfs(2).collect::<Vec<_>>());
        assert_eq!(g.dfs(2).collect::<Vec<_>>(), g.dfs(2).collect::<Vec<_>>());
    }

    #[test]
    fn test_traversal_stops_at_component_boundary() {
        let mut g = DepotGraph::new();
        let a = g.add_vertex("A");
        let b = g.add_vertex("B");
        g.add_vertex("C"); // isolated
        g.add_undirected_edge(a, b, 1.0);

        assert_eq!(g.bfs(a).count(), 2);
        assert_eq!(g.dfs(a).count(), 2);
    }

    #[test]
    fn test_network_snapshot_serializes() {
        let g = DepotGraph::cape_town_demo();
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.contains("Bellville Depot"));
    }

    #[test]
    fn test_single_vertex_traversal() {
        let mut g = DepotGraph::new();
        let only = g.add_vertex("Solo");
        assert_eq!(g.bfs(only).collect::<Vec<_>>(), vec!["Solo"]);
        assert_eq!(g.dfs(only).collect::<Vec<_>>(), vec!["Solo"]);
    }
}
