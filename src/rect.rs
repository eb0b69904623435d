//! Axis-aligned rectangles: tree node regions and range query windows.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::kdtree::{Axis, Orientation};
use crate::point::Point;

/// A closed axis-aligned rectangle `[xmin, xmax] × [ymin, ymax]`.
///
/// Zero-width and zero-height rectangles are valid. All predicates are
/// boundary-inclusive.
///
/// # Examples
///
/// ```rust
/// use kdplane::{Point, Rect};
///
/// let rect = Rect::new(0.0, 0.0, 0.5, 0.5);
///
/// assert!(rect.contains(&Point::new(0.5, 0.25)));
/// assert!(!rect.contains(&Point::new(0.75, 0.25)));
/// assert_eq!(rect.distance_squared_to(&Point::new(0.75, 0.25)), 0.0625);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawRect<A>",
        bound(deserialize = "A: Axis + Deserialize<'de>")
    )
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect<A = f64> {
    xmin: A,
    ymin: A,
    xmax: A,
    ymax: A,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRect<A> {
    xmin: A,
    ymin: A,
    xmax: A,
    ymax: A,
}

#[cfg(feature = "serde")]
impl<A: Axis> TryFrom<RawRect<A>> for Rect<A> {
    type Error = GeometryError;

    fn try_from(raw: RawRect<A>) -> Result<Self, Self::Error> {
        Rect::try_new(raw.xmin, raw.ymin, raw.xmax, raw.ymax)
    }
}

impl<A: Axis> Rect<A> {
    /// Creates a rectangle from its bounds.
    ///
    /// # Panics
    ///
    /// Panics if any bound is NaN or infinite, or if `xmin > xmax` or `ymin > ymax`. Use
    /// [`Rect::try_new`] to handle these as errors.
    pub fn new(xmin: A, ymin: A, xmax: A, ymax: A) -> Self {
        match Self::try_new(xmin, ymin, xmax, ymax) {
            Ok(rect) => rect,
            Err(err) => panic!("invalid rectangle: {err}"),
        }
    }

    /// Creates a rectangle from its bounds, validating them.
    pub fn try_new(xmin: A, ymin: A, xmax: A, ymax: A) -> Result<Self, GeometryError> {
        if [xmin, ymin, xmax, ymax].iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        if xmin > xmax {
            return Err(GeometryError::InvertedBounds { axis: 'x' });
        }
        if ymin > ymax {
            return Err(GeometryError::InvertedBounds { axis: 'y' });
        }

        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// The unit square `[0, 1] × [0, 1]`, the default domain of a [`KdTree`](crate::KdTree).
    pub fn unit() -> Self {
        Self {
            xmin: A::zero(),
            ymin: A::zero(),
            xmax: A::one(),
            ymax: A::one(),
        }
    }

    /// Smallest x value.
    #[inline]
    pub fn xmin(&self) -> A {
        self.xmin
    }

    /// Smallest y value.
    #[inline]
    pub fn ymin(&self) -> A {
        self.ymin
    }

    /// Largest x value.
    #[inline]
    pub fn xmax(&self) -> A {
        self.xmax
    }

    /// Largest y value.
    #[inline]
    pub fn ymax(&self) -> A {
        self.ymax
    }

    /// Returns true if `point` lies inside the rectangle or on its boundary.
    #[inline]
    pub fn contains(&self, point: &Point<A>) -> bool {
        self.xmin <= point.x()
            && point.x() <= self.xmax
            && self.ymin <= point.y()
            && point.y() <= self.ymax
    }

    /// Returns true if the two rectangles overlap. Touching along an edge or at a
    /// corner counts as overlapping.
    #[inline]
    pub fn intersects(&self, other: &Rect<A>) -> bool {
        self.xmax >= other.xmin
            && self.ymax >= other.ymin
            && other.xmax >= self.xmin
            && other.ymax >= self.ymin
    }

    /// Squared euclidean distance from `point` to the closest point of the rectangle.
    ///
    /// Zero if `point` is inside the rectangle or on its boundary.
    #[inline]
    pub fn distance_squared_to(&self, point: &Point<A>) -> A {
        let dx = if point.x() < self.xmin {
            self.xmin.dist1(point.x())
        } else if point.x() > self.xmax {
            point.x().dist1(self.xmax)
        } else {
            A::zero()
        };
        let dy = if point.y() < self.ymin {
            self.ymin.dist1(point.y())
        } else if point.y() > self.ymax {
            point.y().dist1(self.ymax)
        } else {
            A::zero()
        };

        dx + dy
    }

    /// Cuts the rectangle along the line `orientation.coord == at`, returning the
    /// `(left or bottom, right or top)` halves. Both halves keep the cutting line.
    pub(crate) fn split(&self, orientation: Orientation, at: A) -> (Rect<A>, Rect<A>) {
        match orientation {
            Orientation::Vertical => (
                Rect { xmax: at, ..*self },
                Rect { xmin: at, ..*self },
            ),
            Orientation::Horizontal => (
                Rect { ymax: at, ..*self },
                Rect { ymin: at, ..*self },
            ),
        }
    }
}

impl<A: Axis> Default for Rect<A> {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GeometryError;
    use crate::kdtree::Orientation;
    use crate::point::Point;
    use crate::rect::Rect;
    use rstest::rstest;

    #[rstest]
    #[case((0.25, 0.25), true)]
    #[case((0.0, 0.0), true)]
    #[case((0.5, 0.5), true)]
    #[case((0.5, 0.0), true)]
    #[case((0.5000001, 0.25), false)]
    #[case((0.25, -0.0000001), false)]
    #[case((0.75, 0.75), false)]
    fn contains_is_boundary_inclusive(#[case] point: (f64, f64), #[case] expected: bool) {
        let rect = Rect::new(0.0, 0.0, 0.5, 0.5);

        assert_eq!(rect.contains(&point.into()), expected);
    }

    #[rstest]
    #[case(Rect::new(0.25, 0.25, 0.75, 0.75), true)]
    #[case(Rect::new(0.5, 0.0, 1.0, 0.5), true)]
    #[case(Rect::new(0.5, 0.5, 1.0, 1.0), true)]
    #[case(Rect::new(0.1, 0.1, 0.2, 0.2), true)]
    #[case(Rect::new(-1.0, -1.0, 2.0, 2.0), true)]
    #[case(Rect::new(0.6, 0.0, 1.0, 0.5), false)]
    #[case(Rect::new(0.0, 0.6, 0.5, 1.0), false)]
    #[case(Rect::new(0.25, 0.6, 0.25, 0.6), false)]
    fn intersects_is_boundary_inclusive(#[case] other: Rect, #[case] expected: bool) {
        let rect = Rect::new(0.0, 0.0, 0.5, 0.5);

        assert_eq!(rect.intersects(&other), expected);
        assert_eq!(other.intersects(&rect), expected);
    }

    #[rstest]
    #[case((0.25, 0.25), 0.0)]
    #[case((0.5, 0.5), 0.0)]
    #[case((0.75, 0.25), 0.0625)]
    #[case((0.25, -0.5), 0.25)]
    #[case((1.0, 1.5), 1.25)]
    #[case((-0.5, 1.0), 0.5)]
    fn distance_to_point(#[case] point: (f64, f64), #[case] expected: f64) {
        let rect = Rect::new(0.0, 0.0, 0.5, 0.5);

        assert_eq!(rect.distance_squared_to(&point.into()), expected);
    }

    #[test]
    fn degenerate_rectangles_are_valid() {
        let line = Rect::new(0.25, 0.0, 0.25, 1.0);
        assert!(line.contains(&Point::new(0.25, 0.5)));
        assert!(!line.contains(&Point::new(0.2500001, 0.5)));

        let dot = Rect::new(0.5, 0.5, 0.5, 0.5);
        assert!(dot.contains(&Point::new(0.5, 0.5)));
        assert!(dot.intersects(&Rect::unit()));
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        assert_eq!(
            Rect::try_new(0.6, 0.0, 0.5, 1.0),
            Err(GeometryError::InvertedBounds { axis: 'x' })
        );
        assert_eq!(
            Rect::try_new(0.0, 0.6, 1.0, 0.5),
            Err(GeometryError::InvertedBounds { axis: 'y' })
        );
        assert_eq!(
            Rect::try_new(0.0, f64::NAN, 1.0, 0.5),
            Err(GeometryError::NonFiniteCoordinate)
        );
    }

    #[rstest]
    #[case(f64::NEG_INFINITY, 0.0, 1.0, 1.0)]
    #[case(0.0, 0.0, f64::INFINITY, 1.0)]
    #[case(0.0, f64::NEG_INFINITY, 1.0, f64::INFINITY)]
    fn infinite_bounds_are_rejected(
        #[case] xmin: f64,
        #[case] ymin: f64,
        #[case] xmax: f64,
        #[case] ymax: f64,
    ) {
        assert_eq!(
            Rect::try_new(xmin, ymin, xmax, ymax),
            Err(GeometryError::NonFiniteCoordinate)
        );
    }

    #[test]
    #[should_panic(expected = "invalid rectangle")]
    fn new_panics_on_inverted_bounds() {
        let _ = Rect::new(1.0, 0.0, 0.0, 1.0);
    }

    #[test]
    fn split_partitions_along_the_cut() {
        let rect: Rect<f32> = Rect::new(0.0, 0.0, 1.0, 1.0);

        let (left, right) = rect.split(Orientation::Vertical, 0.25);
        assert_eq!(left, Rect::new(0.0, 0.0, 0.25, 1.0));
        assert_eq!(right, Rect::new(0.25, 0.0, 1.0, 1.0));

        let (bottom, top) = rect.split(Orientation::Horizontal, 0.75);
        assert_eq!(bottom, Rect::new(0.0, 0.0, 1.0, 0.75));
        assert_eq!(top, Rect::new(0.0, 0.75, 1.0, 1.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates_bounds() {
        let valid = r#"{"xmin":0.0,"ymin":0.0,"xmax":0.5,"ymax":1.0}"#;
        let rect: Rect = serde_json::from_str(valid).unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 0.5, 1.0));

        let inverted = r#"{"xmin":0.6,"ymin":0.0,"xmax":0.5,"ymax":1.0}"#;
        assert!(serde_json::from_str::<Rect>(inverted).is_err());
    }
}
