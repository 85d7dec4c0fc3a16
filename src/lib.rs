// Library exports for kgroup
pub mod clustering;
pub mod edge;
pub mod error;
pub mod groups;
pub mod point_set;
pub mod report;
pub mod timing;
pub mod union_find;

pub use clustering::{Clustering, SpanningForestClustering};
pub use error::{Error, Result};
pub use groups::Group;
pub use point_set::{LabelMode, PointSet};
