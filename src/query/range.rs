use az::Cast;
#[cfg(feature = "tracing")]
use tracing::{span, Level};

use crate::kdtree::{Axis, KdTree};
use crate::point::Point;
use crate::rect::Rect;
use crate::types::Index;

impl<A, IDX> KdTree<A, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Finds all stored points inside `rect`, boundary included.
    ///
    /// Results are returned in arbitrary order. A subtree is only descended into when
    /// the region it covers intersects `rect`.
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
    /// let found = tree.range(&Rect::new(0.0, 0.0, 0.5, 0.5));
    ///
    /// assert_eq!(found, vec![Point::new(0.2, 0.3)]);
    /// ```
    pub fn range(&self, rect: &Rect<A>) -> Vec<Point<A>> {
        let mut matching_points = Vec::new();
        self.range_for_each(rect, |point| matching_points.push(point));
        matching_points
    }

    /// Calls `f` once for every stored point inside `rect`, boundary included,
    /// without collecting them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdplane::{KdTree, Point, Rect};
    ///
    /// let tree: KdTree = [[0.1, 0.1], [0.2, 0.2], [0.8, 0.8]]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    ///
    /// let mut count = 0;
    /// tree.range_for_each(&Rect::new(0.0, 0.0, 0.5, 0.5), |_| count += 1);
    ///
    /// assert_eq!(count, 2);
    /// ```
    pub fn range_for_each<F>(&self, rect: &Rect<A>, f: F)
    where
        F: FnMut(Point<A>),
    {
        #[cfg(feature = "tracing")]
        let span = span!(Level::TRACE, "range", visited = tracing::field::Empty);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let visited = self.range_visit(rect, f);

        #[cfg(feature = "tracing")]
        span.record("visited", visited);
        #[cfg(not(feature = "tracing"))]
        let _ = visited;
    }

    /// Range search returning the number of nodes examined.
    pub(crate) fn range_visit<F>(&self, rect: &Rect<A>, mut f: F) -> usize
    where
        F: FnMut(Point<A>),
    {
        let Some(root_idx) = self.root_index() else {
            return 0;
        };
        if !self.domain.intersects(rect) {
            return 0;
        }

        let mut visited: usize = 0;
        let mut pending = vec![root_idx];

        while let Some(curr_idx) = pending.pop() {
            let node = self.node(curr_idx);
            visited += 1;

            if rect.contains(&node.point) {
                f(node.point);
            }

            for child_idx in [node.upper, node.lower] {
                if child_idx != IDX::vacant() && self.node(child_idx).region.intersects(rect) {
                    pending.push(child_idx);
                }
            }
        }

        visited
    }
}
