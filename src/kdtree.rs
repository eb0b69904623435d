//! Two-dimensional k-d tree over a bounded domain of the plane.
//!
//! Nodes live in a single `Vec` owned by the tree and refer to their children by index.
//! Every node also stores the region of the plane it is responsible for, computed once
//! when the node is created, so queries never have to rebuild regions while descending.

use az::{Az, Cast};
use num_traits::float::FloatCore;
use std::fmt::Debug;

use crate::iter::{Iter, PartitionIter};
use crate::point::Point;
use crate::rect::Rect;
use crate::types::Index;

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the first generic parameter, `A`,
/// on [`KdTree`], [`Point`] and [`Rect`]. This will be [`f64`] or [`f32`].
pub trait Axis: FloatCore + Default + Debug + Copy + Sync + Send + std::ops::AddAssign {
    /// returns the squared difference between two values along a single axis
    fn dist1(self, other: Self) -> Self;
}
impl<T: FloatCore + Default + Debug + Copy + Sync + Send + std::ops::AddAssign> Axis for T {
    #[inline]
    fn dist1(self, other: Self) -> Self {
        (self - other) * (self - other)
    }
}

/// The line a node splits its region along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Splits by x: points to the left of the node's x go down the lower slot.
    Vertical,
    /// Splits by y: points below the node's y go down the lower slot.
    Horizontal,
}

impl Orientation {
    /// The orientation used by children of a node with this orientation.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// The coordinate of `point` that this orientation compares.
    #[inline]
    pub fn coord<A: Axis>(self, point: &Point<A>) -> A {
        match self {
            Orientation::Vertical => point.x(),
            Orientation::Horizontal => point.y(),
        }
    }
}

/// Two-dimensional k-d tree
///
/// Stores a set of distinct [`Point`]s lying inside a fixed domain rectangle
/// (by default the unit square). Insertion never rebalances, so the shape of the
/// tree, and with it query cost, depends on the order in which points arrive.
///
/// `IDX` selects the integer type used to address nodes; see [`Index`].
///
/// # Examples
///
/// ```rust
/// use kdplane::{KdTree, Point, Rect};
///
/// let mut tree: KdTree = KdTree::new();
///
/// tree.insert(Point::new(0.2, 0.3));
/// tree.insert(Point::new(0.4, 0.7));
/// tree.insert(Point::new(0.9, 0.1));
///
/// assert_eq!(tree.size(), 3);
/// assert!(tree.contains(&Point::new(0.4, 0.7)));
/// assert_eq!(tree.range(&Rect::new(0.0, 0.0, 0.5, 0.5)), vec![Point::new(0.2, 0.3)]);
/// assert_eq!(tree.nearest(&Point::new(0.8, 0.2)), Some(Point::new(0.9, 0.1)));
/// ```
#[derive(Clone, Debug)]
pub struct KdTree<A: Copy + Default = f64, IDX = u32> {
    pub(crate) nodes: Vec<Node<A, IDX>>,
    pub(crate) domain: Rect<A>,
}

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct Node<A, IDX> {
    pub(crate) point: Point<A>,
    pub(crate) region: Rect<A>,
    pub(crate) orientation: Orientation,
    pub(crate) lower: IDX,
    pub(crate) upper: IDX,
}

impl<A: Axis, IDX: Index> Node<A, IDX> {
    /// Returns `[closer, further]` child slots: the one on the same side of this
    /// node's splitting line as `query` comes first.
    #[inline]
    pub(crate) fn children_by_proximity(&self, query: &Point<A>) -> [IDX; 2] {
        if self.orientation.coord(query) < self.orientation.coord(&self.point) {
            [self.lower, self.upper]
        } else {
            [self.upper, self.lower]
        }
    }
}

impl<A, IDX> Default for KdTree<A, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, IDX> KdTree<A, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Creates an empty tree over the unit square.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdplane::KdTree;
    ///
    /// let tree: KdTree = KdTree::new();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.size(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_domain(Rect::unit())
    }

    /// Creates an empty tree over the unit square and reserves space for `capacity` points.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds what `IDX` can address.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_domain_and_capacity(Rect::unit(), capacity)
    }

    /// Creates an empty tree that partitions `domain`. Only points inside `domain` may
    /// be inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdplane::{KdTree, Point, Rect};
    ///
    /// let mut tree: KdTree = KdTree::with_domain(Rect::new(-180.0, -90.0, 180.0, 90.0));
    ///
    /// tree.insert(Point::new(-0.1278, 51.5074));
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub fn with_domain(domain: Rect<A>) -> Self {
        Self {
            nodes: Vec::new(),
            domain,
        }
    }

    /// Creates an empty tree that partitions `domain` and reserves space for
    /// `capacity` points.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds what `IDX` can address.
    pub fn with_domain_and_capacity(domain: Rect<A>, capacity: usize) -> Self {
        assert!(capacity <= <IDX as Index>::capacity());
        Self {
            nodes: Vec::with_capacity(capacity),
            domain,
        }
    }

    /// Returns the number of points stored in the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdplane::{KdTree, Point};
    ///
    /// let mut tree: KdTree = KdTree::new();
    ///
    /// tree.insert(Point::new(0.5, 0.5));
    /// tree.insert(Point::new(0.5, 0.5));
    /// tree.insert(Point::new(0.25, 0.5));
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no point has been inserted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The rectangle partitioned by the root node.
    #[inline]
    pub fn domain(&self) -> &Rect<A> {
        &self.domain
    }

    /// Number of nodes on the longest path from the root to a leaf. Zero for an empty tree.
    ///
    /// Inserting points in sorted order degrades the tree into a path,
    /// in which case `depth() == size()`.
    pub fn depth(&self) -> usize {
        self.partitions()
            .map(|partition| partition.depth + 1)
            .max()
            .unwrap_or(0)
    }

    /// Iterates over all stored points, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdplane::{KdTree, Point};
    ///
    /// let tree: KdTree = [[0.5, 0.5], [0.25, 0.75]].into_iter().map(Point::from).collect();
    ///
    /// let points: Vec<_> = tree.iter().collect();
    /// assert_eq!(points, vec![Point::new(0.5, 0.5), Point::new(0.25, 0.75)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, A, IDX> {
        Iter::new(&self.nodes)
    }

    /// Walks the tree breadth-first, yielding for every node its point, the region it
    /// partitions, its splitting orientation and its depth.
    ///
    /// The splitting segment of a node runs through its point across its region: for a
    /// [`Orientation::Vertical`] node, from `(x, region.ymin())` to `(x, region.ymax())`.
    pub fn partitions(&self) -> PartitionIter<'_, A, IDX> {
        PartitionIter::new(&self.nodes)
    }

    #[inline]
    pub(crate) fn node(&self, idx: IDX) -> &Node<A, IDX> {
        &self.nodes[idx.az::<usize>()]
    }

    #[inline]
    pub(crate) fn root_index(&self) -> Option<IDX> {
        (!self.nodes.is_empty()).then(IDX::zero)
    }
}

impl<A, IDX> FromIterator<Point<A>> for KdTree<A, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Builds a tree over the unit square.
    ///
    /// # Panics
    ///
    /// Panics if any point lies outside the unit square.
    fn from_iter<I: IntoIterator<Item = Point<A>>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<A, IDX> Extend<Point<A>> for KdTree<A, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    fn extend<I: IntoIterator<Item = Point<A>>>(&mut self, iter: I) {
        iter.into_iter().for_each(|point| self.insert(point));
    }
}
