//! Complete distance graph over a point set.

use ordered_float::OrderedFloat;

use crate::point_set::PointSet;

/// Undirected edge between points `i < j` weighted by their Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub i: usize,
    pub j: usize,
    pub weight: f64,
}

impl Edge {
    /// Total order: weight ascending, then `(i, j)` ascending.
    pub fn sort_key(&self) -> (OrderedFloat<f64>, usize, usize) {
        (OrderedFloat(self.weight), self.i, self.j)
    }
}

#[inline]
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Number of edges in the complete graph on `n` points.
pub fn edge_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Emit one edge per unordered pair, in row-major `(i, j)` order.
pub fn build_edges(points: &PointSet) -> Vec<Edge> {
    let n = points.len();
    let mut edges = Vec::with_capacity(edge_count(n));
    for i in 0..n {
        let a = points.coords(i);
        for j in (i + 1)..n {
            edges.push(Edge {
                i,
                j,
                weight: euclidean(a, points.coords(j)),
            });
        }
    }
    edges
}

/// Sort by weight; equal weights keep pair order via the explicit `(i, j)` key.
pub fn sort_edges(edges: &mut [Edge]) {
    edges.sort_unstable_by_key(Edge::sort_key);
}
