//! The query surface shared by [`KdTree`] and [`PointSet`]
use az::Cast;

use crate::kdtree::{Axis, KdTree};
use crate::point::Point;
use crate::point_set::PointSet;
use crate::rect::Rect;
use crate::types::Index;

/// A dynamic set of points in the plane that answers membership, range and
/// nearest neighbour queries.
///
/// Lets the same workload run against a [`KdTree`] and the brute-force [`PointSet`],
/// e.g. to check one against the other.
///
/// # Examples
///
/// ```rust
/// use kdplane::{KdTree, Point, PointIndex, PointSet};
///
/// fn load<I: PointIndex<f64>>(index: &mut I) {
///     index.insert(Point::new(0.1, 0.1));
///     index.insert(Point::new(0.9, 0.9));
/// }
///
/// let mut tree: KdTree = KdTree::new();
/// let mut set: PointSet = PointSet::new();
/// load(&mut tree);
/// load(&mut set);
///
/// let query = Point::new(0.05, 0.05);
/// assert_eq!(tree.nearest(&query), set.nearest(&query));
/// ```
pub trait PointIndex<A: Axis> {
    /// Adds a point; a point that is already present is ignored.
    fn insert(&mut self, point: Point<A>);

    /// Returns true if `point` is present.
    fn contains(&self, point: &Point<A>) -> bool;

    /// Number of distinct points present.
    fn size(&self) -> usize;

    /// Returns true if no point is present.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// All present points inside `rect`, boundary included, in unspecified order.
    fn range(&self, rect: &Rect<A>) -> Vec<Point<A>>;

    /// A present point nearest to `query`, or `None` if there are none.
    fn nearest(&self, query: &Point<A>) -> Option<Point<A>>;
}

impl<A, IDX> PointIndex<A> for KdTree<A, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    fn insert(&mut self, point: Point<A>) {
        KdTree::insert(self, point)
    }

    fn contains(&self, point: &Point<A>) -> bool {
        KdTree::contains(self, point)
    }

    fn size(&self) -> usize {
        KdTree::size(self)
    }

    fn is_empty(&self) -> bool {
        KdTree::is_empty(self)
    }

    fn range(&self, rect: &Rect<A>) -> Vec<Point<A>> {
        KdTree::range(self, rect)
    }

    fn nearest(&self, query: &Point<A>) -> Option<Point<A>> {
        KdTree::nearest(self, query)
    }
}

impl<A: Axis> PointIndex<A> for PointSet<A> {
    fn insert(&mut self, point: Point<A>) {
        PointSet::insert(self, point);
    }

    fn contains(&self, point: &Point<A>) -> bool {
        PointSet::contains(self, point)
    }

    fn size(&self) -> usize {
        PointSet::size(self)
    }

    fn is_empty(&self) -> bool {
        PointSet::is_empty(self)
    }

    fn range(&self, rect: &Rect<A>) -> Vec<Point<A>> {
        PointSet::range(self, rect)
    }

    fn nearest(&self, query: &Point<A>) -> Option<Point<A>> {
        PointSet::nearest(self, query)
    }
}
