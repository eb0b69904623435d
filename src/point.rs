//! An immutable point in the plane.

use std::cmp::Ordering;
use std::fmt;

use ordered_float::OrderedFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::kdtree::Axis;

/// A point `(x, y)` in the plane.
///
/// Points compare lexicographically, by `x` and then by `y`. Coordinates must be
/// finite, so the ordering is total and distances between points are never NaN.
///
/// # Examples
///
/// ```rust
/// use kdplane::Point;
///
/// let a = Point::new(0.25, 0.75);
/// let b = Point::new(0.25, 0.5);
///
/// assert!(b < a);
/// assert_eq!(a.distance_squared_to(&b), 0.0625);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawPoint<A>",
        bound(deserialize = "A: Axis + Deserialize<'de>")
    )
)]
#[derive(Clone, Copy, Debug)]
pub struct Point<A = f64> {
    x: A,
    y: A,
}

/// Unvalidated wire form of a [`Point`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPoint<A> {
    x: A,
    y: A,
}

#[cfg(feature = "serde")]
impl<A: Axis> TryFrom<RawPoint<A>> for Point<A> {
    type Error = GeometryError;

    fn try_from(raw: RawPoint<A>) -> Result<Self, Self::Error> {
        Point::try_new(raw.x, raw.y)
    }
}

impl<A: Axis> Point<A> {
    /// Creates a point.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is NaN or infinite. Use [`Point::try_new`] to handle
    /// this as an error.
    #[inline]
    pub fn new(x: A, y: A) -> Self {
        assert!(
            x.is_finite() && y.is_finite(),
            "point coordinates must be finite"
        );
        Self { x, y }
    }

    /// Creates a point, returning [`GeometryError::NonFiniteCoordinate`] if either
    /// coordinate is NaN or infinite.
    pub fn try_new(x: A, y: A) -> Result<Self, GeometryError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        Ok(Self { x, y })
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> A {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> A {
        self.y
    }

    /// Returns the squared euclidean distance between two points.
    ///
    /// Cheaper than the euclidean distance, and preserves the same ordering.
    #[inline]
    pub fn distance_squared_to(&self, other: &Point<A>) -> A {
        self.x.dist1(other.x) + self.y.dist1(other.y)
    }
}

impl<A: Axis> PartialEq for Point<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A: Axis> Eq for Point<A> {}

impl<A: Axis> PartialOrd for Point<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Axis> Ord for Point<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.x)
            .cmp(&OrderedFloat(other.x))
            .then_with(|| OrderedFloat(self.y).cmp(&OrderedFloat(other.y)))
    }
}

impl<A: Axis> From<[A; 2]> for Point<A> {
    fn from([x, y]: [A; 2]) -> Self {
        Point::new(x, y)
    }
}

impl<A: Axis> From<(A, A)> for Point<A> {
    fn from((x, y): (A, A)) -> Self {
        Point::new(x, y)
    }
}

impl<A: Axis> From<Point<A>> for [A; 2] {
    fn from(point: Point<A>) -> Self {
        [point.x, point.y]
    }
}

impl<A: Axis + fmt::Display> fmt::Display for Point<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GeometryError;
    use crate::point::Point;
    use rstest::rstest;
    use std::cmp::Ordering;

    #[rstest]
    #[case((0.5, 0.5), (0.5, 0.5), Ordering::Equal)]
    #[case((0.1, 0.9), (0.2, 0.0), Ordering::Less)]
    #[case((0.2, 0.0), (0.1, 0.9), Ordering::Greater)]
    #[case((0.3, 0.1), (0.3, 0.2), Ordering::Less)]
    #[case((0.3, 0.2), (0.3, 0.1), Ordering::Greater)]
    #[case((0.0, 0.0), (-0.0, 0.0), Ordering::Equal)]
    fn points_order_lexicographically(
        #[case] a: (f64, f64),
        #[case] b: (f64, f64),
        #[case] expected: Ordering,
    ) {
        let a: Point = a.into();
        let b: Point = b.into();

        assert_eq!(a.cmp(&b), expected);
        assert_eq!(a == b, expected == Ordering::Equal);
    }

    #[test]
    fn distance_is_squared_euclidean() {
        let a = Point::new(1.0f32, 2.0f32);
        let b = Point::new(4.0f32, 6.0f32);

        assert_eq!(a.distance_squared_to(&b), 25.0);
        assert_eq!(b.distance_squared_to(&a), 25.0);
        assert_eq!(a.distance_squared_to(&a), 0.0);
    }

    #[rstest]
    #[case(f64::NAN, 0.5)]
    #[case(0.5, f64::NAN)]
    #[case(f64::INFINITY, 0.0)]
    #[case(0.0, f64::NEG_INFINITY)]
    #[case(f64::NEG_INFINITY, f64::INFINITY)]
    fn non_finite_coordinates_are_rejected(#[case] x: f64, #[case] y: f64) {
        assert_eq!(
            Point::try_new(x, y),
            Err(GeometryError::NonFiniteCoordinate)
        );
    }

    #[test]
    fn finite_coordinates_are_accepted() {
        assert!(Point::try_new(0.5, 0.5).is_ok());
        assert!(Point::try_new(f64::MAX, f64::MIN).is_ok());
    }

    #[test]
    #[should_panic(expected = "must be finite")]
    fn new_panics_on_nan() {
        let _ = Point::new(f64::NAN, 0.0);
    }

    #[test]
    #[should_panic(expected = "must be finite")]
    fn new_panics_on_infinity() {
        let _ = Point::new(0.0f32, f32::INFINITY);
    }

    #[test]
    fn converts_to_and_from_arrays() {
        let p: Point = [0.125, 0.875].into();
        assert_eq!(p.x(), 0.125);
        assert_eq!(p.y(), 0.875);

        let back: [f64; 2] = p.into();
        assert_eq!(back, [0.125, 0.875]);
    }

    #[test]
    fn displays_as_a_pair() {
        assert_eq!(Point::new(0.5, 0.25).to_string(), "(0.5, 0.25)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn can_serde() {
        let p = Point::new(0.5f64, 0.25f64);

        let serialized = serde_json::to_string(&p).unwrap();
        assert_eq!(serialized, r#"{"x":0.5,"y":0.25}"#);

        let deserialized: Point = serde_json::from_str(&serialized).unwrap();
        assert_eq!(p, deserialized);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_rejects_non_finite_coordinates() {
        // out of range for f32, so it deserializes to infinity
        let overflowing = r#"{"x":1e300,"y":0.0}"#;

        assert!(serde_json::from_str::<Point<f32>>(overflowing).is_err());
    }
}
