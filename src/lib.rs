#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # kdplane
//!
//! A two-dimensional k-d tree (2d-tree) over a bounded region of the plane.
//!
//! Each node of the tree stores a point and the rectangle of the plane it is responsible
//! for. Nodes split their rectangle by a vertical line through their point, and their
//! children by a horizontal one, alternating with depth. Keeping those rectangles around
//! lets queries skip whole subtrees:
//!
//! * [`KdTree::range`] only descends into subtrees whose rectangle intersects the query window;
//! * [`KdTree::nearest`] only descends into subtrees whose rectangle is no further away than
//!   the best point found so far, and searches the side of each split containing the query
//!   point first.
//!
//! The tree is insert-only and never rebalanced, so its shape follows insertion order.
//! Inserting points in random order gives logarithmic expected depth; inserting them
//! sorted gives a path.
//!
//! ## Usage
//! ```rust
//! use kdplane::{KdTree, Point, Rect};
//!
//! let mut tree: KdTree = KdTree::new();
//!
//! tree.insert(Point::new(0.5, 0.5));
//! tree.insert(Point::new(0.25, 0.25));
//! tree.insert(Point::new(0.25, 0.25));
//!
//! assert_eq!(tree.size(), 2);
//! assert!(tree.contains(&Point::new(0.25, 0.25)));
//! assert!(!tree.contains(&Point::new(0.75, 0.75)));
//!
//! assert_eq!(tree.range(&Rect::new(0.0, 0.0, 0.3, 0.3)), vec![Point::new(0.25, 0.25)]);
//! assert_eq!(tree.nearest(&Point::new(0.9, 0.6)), Some(Point::new(0.5, 0.5)));
//! ```
//!
//! ## Optional features
//!
//! * `tracing` (default): emits `TRACE` events on node creation and duplicate insertion,
//!   and `TRACE` spans around queries recording how many nodes were visited.
//! * `serde`: `Serialize` / `Deserialize` for [`Point`], [`Rect`] and [`NearestNeighbour`].
//! * `test_utils`: random data generators used by the tests and benchmarks.

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod construction;
pub mod error;
pub mod iter;
pub mod kdtree;
pub mod nearest_neighbour;
pub mod point;
pub mod point_set;
mod query;
pub mod rect;
#[doc(hidden)]
#[cfg(feature = "test_utils")]
pub mod test_utils;
pub mod traits;
pub mod types;

pub use crate::error::GeometryError;
pub use crate::kdtree::{Axis, KdTree, Orientation};
pub use crate::nearest_neighbour::NearestNeighbour;
pub use crate::point::Point;
pub use crate::point_set::PointSet;
pub use crate::rect::Rect;
pub use crate::traits::PointIndex;
