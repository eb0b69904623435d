use az::{Az, Cast};
#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::error::GeometryError;
use crate::kdtree::{Axis, KdTree, Node, Orientation};
use crate::point::Point;
use crate::rect::Rect;
use crate::types::Index;

impl<A, IDX> KdTree<A, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Adds a point to the tree. Inserting a point that is already present does nothing.
    ///
    /// # Panics
    ///
    /// Panics if `point` lies outside the tree's domain, or if the tree already holds as
    /// many points as `IDX` can address. Use [`KdTree::try_insert`] to handle the former as
    /// an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdplane::{KdTree, Point};
    ///
    /// let mut tree: KdTree = KdTree::new();
    ///
    /// tree.insert(Point::new(0.5, 0.5));
    /// tree.insert(Point::new(0.25, 0.25));
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn insert(&mut self, point: Point<A>) {
        if let Err(err) = self.try_insert(point) {
            panic!("cannot insert {point:?}: {err}");
        }
    }

    /// Adds a point to the tree, returning `Ok(true)` if a new node was created and
    /// `Ok(false)` if the point was already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdplane::{GeometryError, KdTree, Point};
    ///
    /// let mut tree: KdTree = KdTree::new();
    ///
    /// assert_eq!(tree.try_insert(Point::new(0.5, 0.5)), Ok(true));
    /// assert_eq!(tree.try_insert(Point::new(0.5, 0.5)), Ok(false));
    /// assert_eq!(tree.try_insert(Point::new(1.5, 0.5)), Err(GeometryError::OutsideDomain));
    /// ```
    pub fn try_insert(&mut self, point: Point<A>) -> Result<bool, GeometryError> {
        if !self.domain.contains(&point) {
            return Err(GeometryError::OutsideDomain);
        }

        let Some(mut curr_idx) = self.root_index() else {
            self.push_node(point, self.domain, Orientation::Vertical, 0);
            return Ok(true);
        };
        let mut depth = 0;

        loop {
            let node = self.node(curr_idx);
            if node.point == point {
                #[cfg(feature = "tracing")]
                event!(Level::TRACE, ?point, depth, "duplicate point ignored");
                return Ok(false);
            }

            let split_val = node.orientation.coord(&node.point);
            let is_lower = node.orientation.coord(&point) < split_val;
            let next_idx = if is_lower { node.lower } else { node.upper };
            depth += 1;

            if next_idx == IDX::vacant() {
                let (lower_region, upper_region) = node.region.split(node.orientation, split_val);
                let region = if is_lower { lower_region } else { upper_region };
                let orientation = node.orientation.flip();

                let new_idx = self.push_node(point, region, orientation, depth);

                let parent = &mut self.nodes[curr_idx.az::<usize>()];
                if is_lower {
                    parent.lower = new_idx;
                } else {
                    parent.upper = new_idx;
                }
                return Ok(true);
            }

            curr_idx = next_idx;
        }
    }

    /// Returns true if the tree holds `point`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdplane::{KdTree, Point};
    ///
    /// let mut tree: KdTree = KdTree::new();
    ///
    /// tree.insert(Point::new(0.5, 0.5));
    /// tree.insert(Point::new(0.25, 0.25));
    ///
    /// assert!(tree.contains(&Point::new(0.25, 0.25)));
    /// assert!(!tree.contains(&Point::new(0.75, 0.75)));
    /// ```
    pub fn contains(&self, point: &Point<A>) -> bool {
        let Some(mut curr_idx) = self.root_index() else {
            return false;
        };

        while curr_idx != IDX::vacant() {
            let node = self.node(curr_idx);
            if node.point == *point {
                return true;
            }

            curr_idx = if node.orientation.coord(point) < node.orientation.coord(&node.point) {
                node.lower
            } else {
                node.upper
            };
        }

        false
    }

    fn push_node(
        &mut self,
        point: Point<A>,
        region: Rect<A>,
        orientation: Orientation,
        depth: usize,
    ) -> IDX {
        assert!(
            self.nodes.len() < <IDX as Index>::capacity(),
            "tree is full: the index type cannot address another node"
        );
        debug_assert!(region.contains(&point));

        let idx = self.nodes.len().az::<IDX>();
        self.nodes.push(Node {
            point,
            region,
            orientation,
            lower: IDX::vacant(),
            upper: IDX::vacant(),
        });

        #[cfg(feature = "tracing")]
        event!(
            Level::TRACE,
            idx = self.nodes.len() - 1,
            depth,
            ?orientation,
            "node created"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = depth;

        idx
    }
}
