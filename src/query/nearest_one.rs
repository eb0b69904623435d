use az::Cast;
#[cfg(feature = "tracing")]
use tracing::{span, Level};

use crate::kdtree::{Axis, KdTree};
use crate::nearest_neighbour::NearestNeighbour;
use crate::point::Point;
use crate::types::Index;

impl<A, IDX> KdTree<A, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Queries the tree to find the stored point nearest to `query`, along with its
    /// squared euclidean distance from `query`.
    ///
    /// Returns `None` if the tree is empty. When several points are equally near,
    /// the first one reached by the search wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdplane::{KdTree, Point};
    ///
    /// let mut tree: KdTree = KdTree::new();
    ///
    /// tree.insert(Point::new(0.1, 0.1));
    /// tree.insert(Point::new(0.9, 0.9));
    ///
    /// let nearest = tree.nearest_one(&Point::new(0.1, 0.2)).unwrap();
    ///
    /// assert!((nearest.distance - 0.01f64).abs() < f64::EPSILON);
    /// assert_eq!(nearest.point, Point::new(0.1, 0.1));
    /// ```
    pub fn nearest_one(&self, query: &Point<A>) -> Option<NearestNeighbour<A>> {
        #[cfg(feature = "tracing")]
        let span = span!(Level::TRACE, "nearest_one", visited = tracing::field::Empty);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (best_neighbour, visited) = self.nearest_one_visit(query);

        #[cfg(feature = "tracing")]
        span.record("visited", visited);
        #[cfg(not(feature = "tracing"))]
        let _ = visited;

        best_neighbour
    }

    /// Queries the tree to find the stored point nearest to `query`.
    ///
    /// Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdplane::{KdTree, Point};
    ///
    /// let mut tree: KdTree = KdTree::new();
    /// assert_eq!(tree.nearest(&Point::new(0.5, 0.5)), None);
    ///
    /// tree.insert(Point::new(0.1, 0.1));
    /// tree.insert(Point::new(0.9, 0.9));
    ///
    /// assert_eq!(tree.nearest(&Point::new(0.05, 0.05)), Some(Point::new(0.1, 0.1)));
    /// ```
    #[inline]
    pub fn nearest(&self, query: &Point<A>) -> Option<Point<A>> {
        self.nearest_one(query).map(|neighbour| neighbour.point)
    }

    /// Nearest search returning the number of nodes examined alongside the result.
    pub(crate) fn nearest_one_visit(
        &self,
        query: &Point<A>,
    ) -> (Option<NearestNeighbour<A>>, usize) {
        let Some(root_idx) = self.root_index() else {
            return (None, 0);
        };
        let root = self.node(root_idx);
        let mut best_neighbour = NearestNeighbour {
            distance: root.point.distance_squared_to(query),
            point: root.point,
        };
        let mut visited: usize = 1;

        let [closer_node_idx, further_node_idx] = root.children_by_proximity(query);
        self.nearest_one_recurse(query, closer_node_idx, &mut best_neighbour, &mut visited);
        self.nearest_one_recurse(query, further_node_idx, &mut best_neighbour, &mut visited);

        (Some(best_neighbour), visited)
    }

    fn nearest_one_recurse(
        &self,
        query: &Point<A>,
        curr_node_idx: IDX,
        best_neighbour: &mut NearestNeighbour<A>,
        visited: &mut usize,
    ) {
        if curr_node_idx == IDX::vacant() {
            return;
        }
        let node = self.node(curr_node_idx);

        // nothing in this region can beat the current best
        if node.region.distance_squared_to(query) > best_neighbour.distance {
            return;
        }
        *visited += 1;

        let distance = node.point.distance_squared_to(query);
        if distance < best_neighbour.distance {
            best_neighbour.distance = distance;
            best_neighbour.point = node.point;
        }

        let [closer_node_idx, further_node_idx] = node.children_by_proximity(query);
        self.nearest_one_recurse(query, closer_node_idx, best_neighbour, visited);
        self.nearest_one_recurse(query, further_node_idx, best_neighbour, visited);
    }
}
