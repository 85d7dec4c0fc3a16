//! Materialize the frozen forest into canonically ordered groups.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::point_set::PointSet;
use crate::union_find::UnionFind;

/// One output group: its position in the output and its members, ascending by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub index: usize,
    pub members: Vec<usize>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Smallest member index; the key groups are ordered by.
    pub fn representative(&self) -> usize {
        self.members[0]
    }
}

/// Bucket every point by its root.
///
/// Points are visited in ascending index order and buckets are kept in first-seen order, so
/// groups come out sorted by their smallest member and members come out ascending. Only
/// `find` is called; the partition itself is not changed.
pub fn materialize(forest: &mut UnionFind, points: &PointSet, k: usize) -> Result<Vec<Group>> {
    if forest.len() != points.len() {
        return Err(Error::InternalInvariant(format!(
            "forest covers {} points but the point set has {}",
            forest.len(),
            points.len()
        )));
    }

    let mut buckets: IndexMap<usize, Vec<usize>> = IndexMap::with_capacity(k);
    for i in 0..points.len() {
        let root = forest.find(i);
        buckets.entry(root).or_default().push(i);
    }

    if buckets.len() != k {
        return Err(Error::InternalInvariant(format!(
            "forest has {} components, expected {}",
            buckets.len(),
            k
        )));
    }

    Ok(buckets
        .into_values()
        .enumerate()
        .map(|(index, members)| Group { index, members })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> PointSet {
        PointSet::from_coords((0..n).map(|i| vec![i as f64]).collect()).unwrap()
    }

    #[test]
    fn test_groups_ordered_by_smallest_member() {
        let points = line(6);
        let mut uf = UnionFind::new(6);
        uf.union(5, 1);
        uf.union(4, 0);
        uf.union(3, 2);
        uf.union(0, 5);

        let groups = materialize(&mut uf, &points, 2).unwrap();
        assert_eq!(
            groups,
            vec![
                Group {
                    index: 0,
                    members: vec![0, 1, 4, 5]
                },
                Group {
                    index: 1,
                    members: vec![2, 3]
                },
            ]
        );
        assert_eq!(groups[1].representative(), 2);
    }

    #[test]
    fn test_singletons_when_no_unions() {
        let points = line(3);
        let mut uf = UnionFind::new(3);
        let groups = materialize(&mut uf, &points, 3).unwrap();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.len() == 1));
        assert_eq!(uf.component_count(), 3);
    }

    #[test]
    fn test_wrong_component_count_is_invariant_violation() {
        let points = line(3);
        let mut uf = UnionFind::new(3);
        assert!(matches!(
            materialize(&mut uf, &points, 2),
            Err(Error::InternalInvariant(_))
        ));

        let mut small = UnionFind::new(2);
        assert!(matches!(
            materialize(&mut small, &points, 2),
            Err(Error::InternalInvariant(_))
        ));
    }
}
