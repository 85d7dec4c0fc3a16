//! Union-Find (Disjoint Sets) forest driving the edge contraction

use log::debug;

use crate::edge::Edge;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

/// Outcome of one `contract_to` run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContractionStats {
    /// Edges pulled from the sorted sequence before stopping.
    pub edges_examined: usize,
    /// Edges that joined two separate components.
    pub merges: usize,
    /// Edges whose endpoints were already joined.
    pub skipped: usize,
    /// Weight of the last merging edge, if any merge happened.
    pub last_merge_weight: Option<f64>,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton components
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Find the root of element x with path compression
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Union the sets containing x and y. Returns false when they were already joined.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        // Union by size; on equal size the root of y goes under the root of x.
        let (big, small) = if self.size[root_x] < self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.components -= 1;
        true
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of elements in the set containing x
    pub fn size_of(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Merge components along `edges` (ascending weight) until exactly `k` remain.
    ///
    /// Edges after the one that reaches `k` components are never pulled from the iterator.
    /// Running out of edges with more than `k` components left means the edge sequence was
    /// not a complete graph, which is reported as `Error::InternalInvariant`.
    pub fn contract_to<I>(&mut self, edges: I, k: usize) -> Result<ContractionStats>
    where
        I: IntoIterator<Item = Edge>,
    {
        if k == 0 || k > self.len() {
            return Err(Error::InvalidGroupCount {
                requested: k,
                n_points: self.len(),
            });
        }

        let mut stats = ContractionStats::default();
        if self.components <= k {
            return Ok(stats);
        }

        for edge in edges {
            stats.edges_examined += 1;
            if self.union(edge.i, edge.j) {
                stats.merges += 1;
                stats.last_merge_weight = Some(edge.weight);
                if self.components == k {
                    debug!(
                        "reached {} components after {} edges ({} skipped)",
                        k, stats.edges_examined, stats.skipped
                    );
                    return Ok(stats);
                }
            } else {
                stats.skipped += 1;
            }
        }

        Err(Error::InternalInvariant(format!(
            "edges exhausted with {} components left, expected {}",
            self.components, k
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(i: usize, j: usize, weight: f64) -> Edge {
        Edge { i, j, weight }
    }

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.component_count(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
            assert_eq!(uf.size_of(i), 1);
        }
    }

    #[test]
    fn test_union_reports_merge_and_noop() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.component_count(), 3);
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));
        assert_eq!(uf.component_count(), 2);
        assert!(uf.connected(0, 3));
        assert!(!uf.connected(0, 4));
        assert_eq!(uf.size_of(2), 4);
    }

    #[test]
    fn test_smaller_root_goes_under_larger() {
        let mut uf = UnionFind::new(4);
        uf.union(1, 2);
        uf.union(1, 3);
        let big_root = uf.find(1);
        // Singleton 0 is the x side but is smaller, so it hangs under the big root.
        uf.union(0, 1);
        assert_eq!(uf.find(0), big_root);
    }

    #[test]
    fn test_path_compression_points_to_root() {
        let mut uf = UnionFind::new(6);
        for i in 0..5 {
            uf.union(i, i + 1);
        }
        let root = uf.find(5);
        for i in 0..6 {
            uf.find(i);
            assert_eq!(uf.parent[i], root);
        }
    }

    #[test]
    fn test_contract_stops_at_k_without_pulling_more_edges() {
        let mut uf = UnionFind::new(4);
        let edges = vec![
            edge(0, 1, 1.0),
            edge(2, 3, 1.0),
            edge(1, 2, 9.0),
            edge(0, 3, 11.0),
        ];
        let mut pulled = 0;
        let stats = uf
            .contract_to(edges.into_iter().inspect(|_| pulled += 1), 2)
            .unwrap();
        assert_eq!(pulled, 2);
        assert_eq!(stats.merges, 2);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.last_merge_weight, Some(1.0));
        assert_eq!(uf.component_count(), 2);
        assert!(uf.connected(0, 1));
        assert!(uf.connected(2, 3));
        assert!(!uf.connected(1, 2));
    }

    #[test]
    fn test_contract_skips_joined_edges() {
        let mut uf = UnionFind::new(3);
        let edges = vec![edge(0, 1, 1.0), edge(1, 2, 1.0), edge(0, 2, 2.0)];
        let stats = uf.contract_to(edges, 1).unwrap();
        assert_eq!(stats.edges_examined, 2);
        assert_eq!(stats.skipped, 0);

        let mut uf = UnionFind::new(3);
        let reordered = vec![edge(0, 1, 1.0), edge(0, 1, 1.0), edge(1, 2, 2.0)];
        let stats = uf.contract_to(reordered, 1).unwrap();
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.merges, 2);
    }

    #[test]
    fn test_contract_k_equals_n_is_noop() {
        let mut uf = UnionFind::new(3);
        let stats = uf.contract_to(vec![edge(0, 1, 0.5)], 3).unwrap();
        assert_eq!(stats, ContractionStats::default());
        assert_eq!(uf.component_count(), 3);
    }

    #[test]
    fn test_contract_rejects_bad_k() {
        let mut uf = UnionFind::new(3);
        assert!(matches!(
            uf.contract_to(Vec::new(), 0),
            Err(Error::InvalidGroupCount { requested: 0, n_points: 3 })
        ));
        assert!(matches!(
            uf.contract_to(Vec::new(), 4),
            Err(Error::InvalidGroupCount { requested: 4, n_points: 3 })
        ));
    }

    #[test]
    fn test_contract_incomplete_graph_is_invariant_violation() {
        let mut uf = UnionFind::new(4);
        let result = uf.contract_to(vec![edge(0, 1, 1.0)], 1);
        assert!(matches!(result, Err(Error::InternalInvariant(_))));
    }
}
