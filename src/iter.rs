//! Iterators over the contents and the structure of a [`KdTree`](crate::KdTree)
use std::collections::VecDeque;

use az::Az;

use crate::kdtree::{Axis, Node, Orientation};
use crate::point::Point;
use crate::rect::Rect;
use crate::types::Index;

/// Iterator over the points of a tree, in insertion order.
///
/// Returned by [`KdTree::iter`](crate::KdTree::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, A, IDX> {
    nodes: std::slice::Iter<'a, Node<A, IDX>>,
}

impl<'a, A, IDX> Iter<'a, A, IDX> {
    pub(crate) fn new(nodes: &'a [Node<A, IDX>]) -> Self {
        Self {
            nodes: nodes.iter(),
        }
    }
}

impl<A: Axis, IDX> Iterator for Iter<'_, A, IDX> {
    type Item = Point<A>;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<A: Axis, IDX> ExactSizeIterator for Iter<'_, A, IDX> {}

/// One node of a tree as seen by [`KdTree::partitions`](crate::KdTree::partitions).
#[derive(Debug, Clone, Copy)]
pub struct Partition<A> {
    /// the point stored at the node
    pub point: Point<A>,
    /// the region of the plane the node splits
    pub region: Rect<A>,
    /// whether the node splits its region by x or by y
    pub orientation: Orientation,
    /// distance from the root, which is at depth 0
    pub depth: usize,
}

impl<A: Axis> PartialEq for Partition<A> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
            && self.region == other.region
            && self.orientation == other.orientation
            && self.depth == other.depth
    }
}

/// Breadth-first walk over the nodes of a tree.
#[derive(Debug, Clone)]
pub struct PartitionIter<'a, A, IDX> {
    nodes: &'a [Node<A, IDX>],
    pending: VecDeque<(IDX, usize)>,
}

impl<'a, A, IDX: Index> PartitionIter<'a, A, IDX> {
    pub(crate) fn new(nodes: &'a [Node<A, IDX>]) -> Self {
        let mut pending = VecDeque::new();
        if !nodes.is_empty() {
            pending.push_back((IDX::zero(), 0));
        }
        Self { nodes, pending }
    }
}

impl<A: Axis, IDX: Index> Iterator for PartitionIter<'_, A, IDX> {
    type Item = Partition<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, depth) = self.pending.pop_front()?;
        let node = &self.nodes[idx.az::<usize>()];

        for child in [node.lower, node.upper] {
            if child != IDX::vacant() {
                self.pending.push_back((child, depth + 1));
            }
        }

        Some(Partition {
            point: node.point,
            region: node.region,
            orientation: node.orientation,
            depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::iter::Partition;
    use crate::kdtree::{KdTree, Orientation};
    use crate::point::Point;
    use crate::rect::Rect;

    #[test]
    fn iter_yields_points_in_insertion_order() {
        let points = [
            Point::new(0.3, 0.3),
            Point::new(0.1, 0.9),
            Point::new(0.8, 0.2),
        ];
        let tree: KdTree<f64> = points.into_iter().collect();

        let iter = tree.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), points.to_vec());
    }

    #[test]
    fn partitions_compare_by_value() {
        let points = [
            Point::new(0.7, 0.2),
            Point::new(0.5, 0.4),
            Point::new(0.9, 0.6),
        ];
        let tree: KdTree<f32, u16> = points.into_iter().collect();
        let same_tree: KdTree<f32, u16> = points.into_iter().collect();

        let partitions: Vec<Partition<f32>> = tree.partitions().collect();

        assert_eq!(partitions, same_tree.partitions().collect::<Vec<_>>());
        assert_eq!(
            partitions[1],
            Partition {
                point: Point::new(0.5, 0.4),
                region: Rect::new(0.0, 0.0, 0.7, 1.0),
                orientation: Orientation::Horizontal,
                depth: 1,
            }
        );
        assert_ne!(partitions[1], partitions[2]);
    }
}
