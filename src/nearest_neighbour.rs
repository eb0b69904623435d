//! A result item returned by a nearest neighbour query
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::kdtree::Axis;
use crate::point::Point;

/// The stored point closest to a query, together with its squared euclidean
/// distance from the query point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "A: Axis + Deserialize<'de>"))
)]
#[derive(Debug, Copy, Clone)]
pub struct NearestNeighbour<A> {
    /// the squared euclidean distance of `point` from the query point
    pub distance: A,
    /// the stored point that was found
    pub point: Point<A>,
}

impl<A: Axis> PartialOrd for NearestNeighbour<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl<A: Axis> PartialEq for NearestNeighbour<A> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.point == other.point
    }
}

impl<A: Axis> From<NearestNeighbour<A>> for (A, Point<A>) {
    fn from(elem: NearestNeighbour<A>) -> Self {
        (elem.distance, elem.point)
    }
}

#[cfg(test)]
mod tests {
    use crate::nearest_neighbour::NearestNeighbour;
    use crate::point::Point;
    use std::cmp::Ordering;

    #[test]
    fn test_into_tuple() {
        let nn: (f32, Point<f32>) = NearestNeighbour {
            distance: 1.0f32,
            point: Point::new(0.5, 0.5),
        }
        .into();

        assert_eq!(nn.0, 1.0f32);
        assert_eq!(nn.1, Point::new(0.5, 0.5));
    }

    #[test]
    fn test_partial_cmp() {
        let a = NearestNeighbour {
            distance: 1.0f32,
            point: Point::new(0.9, 0.9),
        };
        let b = NearestNeighbour {
            distance: 2.0f32,
            point: Point::new(0.1, 0.1),
        };

        assert_eq!(a.partial_cmp(&b).unwrap(), Ordering::Less)
    }
}
