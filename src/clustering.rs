//! Spanning-forest grouping into exactly K groups.
//!
//! The complete distance graph is sorted by weight and contracted with a union-find forest,
//! Kruskal style, until K components remain. Stopping there is the same as building the
//! minimum spanning tree and cutting its K-1 heaviest edges, without ever finishing the tree.
//!
//! Ordering is fixed so output is reproducible:
//! - edges: weight ascending, then `(i, j)` ascending
//! - groups: by smallest member index
//! - members: ascending index

use log::{debug, info};

use crate::edge::{build_edges, sort_edges};
use crate::error::{Error, Result};
use crate::groups::{materialize, Group};
use crate::point_set::PointSet;
use crate::timing::{timed, Phase, PhaseObserver};
use crate::union_find::{ContractionStats, UnionFind};

/// Configured grouping run for a fixed `k`.
#[derive(Debug, Clone, Copy)]
pub struct SpanningForestClustering {
    k: usize,
}

/// Result of one run.
#[derive(Debug, Clone)]
pub struct Clustering {
    pub groups: Vec<Group>,
    pub stats: ContractionStats,
}

impl Clustering {
    /// Group index per point. Groups partition the points, so their sizes sum to `n`.
    pub fn labels(&self) -> Vec<usize> {
        let n: usize = self.groups.iter().map(Group::len).sum();
        let mut labels = vec![0; n];
        for group in &self.groups {
            for &m in &group.members {
                labels[m] = group.index;
            }
        }
        labels
    }
}

impl SpanningForestClustering {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Check `1 <= k <= n` before any edge work.
    pub fn validate(&self, points: &PointSet) -> Result<()> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > points.len() {
            return Err(Error::InvalidGroupCount {
                requested: self.k,
                n_points: points.len(),
            });
        }
        Ok(())
    }

    pub fn run<O>(&self, points: &PointSet, observer: &mut O) -> Result<Clustering>
    where
        O: PhaseObserver + ?Sized,
    {
        self.validate(points)?;
        let n = points.len();

        let mut edges = timed(observer, Phase::BuildEdges, || build_edges(points));
        debug!("built {} edges over {} points", edges.len(), n);

        timed(observer, Phase::SortEdges, || sort_edges(&mut edges));

        let mut forest = UnionFind::new(n);
        // The edge vector is consumed here; anything past the K-th component is dropped unread.
        let stats = timed(observer, Phase::Contract, || {
            forest.contract_to(edges, self.k)
        })?;
        info!(
            "contracted {} points into {} groups using {} merges ({} edges examined)",
            n, self.k, stats.merges, stats.edges_examined
        );

        let groups = timed(observer, Phase::Materialize, || {
            materialize(&mut forest, points, self.k)
        })?;

        Ok(Clustering { groups, stats })
    }

    /// `run` without an observer.
    pub fn fit(&self, points: &PointSet) -> Result<Clustering> {
        self.run(points, &mut crate::timing::NoopObserver)
    }
}
