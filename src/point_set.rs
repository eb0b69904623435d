//! Brute-force point set, used as a reference for checking [`KdTree`](crate::KdTree) results.

use std::collections::BTreeSet;

use crate::kdtree::Axis;
use crate::nearest_neighbour::NearestNeighbour;
use crate::point::Point;
use crate::rect::Rect;

/// A set of points in an ordered set. Every query is a linear scan.
///
/// Answers the same questions as [`KdTree`](crate::KdTree), with no domain restriction,
/// and is slow enough that it should only be used to verify a tree's answers.
///
/// # Examples
///
/// ```rust
/// use kdplane::{Point, PointSet, Rect};
///
/// let mut set = PointSet::new();
///
/// set.insert(Point::new(0.2, 0.3));
/// set.insert(Point::new(0.9, 0.1));
///
/// assert_eq!(set.range(&Rect::new(0.0, 0.0, 0.5, 0.5)), vec![Point::new(0.2, 0.3)]);
/// assert_eq!(set.nearest(&Point::new(1.0, 0.0)), Some(Point::new(0.9, 0.1)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet<A: Axis = f64> {
    points: BTreeSet<Point<A>>,
}

impl<A: Axis> PointSet<A> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Returns true if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points in the set.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Adds a point. Returns false if it was already present.
    pub fn insert(&mut self, point: Point<A>) -> bool {
        self.points.insert(point)
    }

    /// Returns true if the set holds `point`.
    pub fn contains(&self, point: &Point<A>) -> bool {
        self.points.contains(point)
    }

    /// All points inside `rect`, boundary included, in ascending point order.
    pub fn range(&self, rect: &Rect<A>) -> Vec<Point<A>> {
        self.points
            .iter()
            .filter(|point| rect.contains(point))
            .copied()
            .collect()
    }

    /// The point nearest to `query` and its squared distance. Of several equally near
    /// points, the smallest in point order wins.
    pub fn nearest_one(&self, query: &Point<A>) -> Option<NearestNeighbour<A>> {
        self.points.iter().fold(None, |best, point| {
            let distance = point.distance_squared_to(query);
            match best {
                Some(NearestNeighbour { distance: best_distance, .. })
                    if best_distance <= distance =>
                {
                    best
                }
                _ => Some(NearestNeighbour {
                    distance,
                    point: *point,
                }),
            }
        })
    }

    /// The point nearest to `query`, or `None` if the set is empty.
    pub fn nearest(&self, query: &Point<A>) -> Option<Point<A>> {
        self.nearest_one(query).map(|neighbour| neighbour.point)
    }

    /// Iterates over the points in ascending point order.
    pub fn iter(&self) -> impl Iterator<Item = Point<A>> + '_ {
        self.points.iter().copied()
    }
}

impl<A: Axis> FromIterator<Point<A>> for PointSet<A> {
    fn from_iter<I: IntoIterator<Item = Point<A>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<A: Axis> Extend<Point<A>> for PointSet<A> {
    fn extend<I: IntoIterator<Item = Point<A>>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}
