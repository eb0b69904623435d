//! Error types for rejected geometry and insertion arguments.

use thiserror::Error;

/// Precondition violations reported by the checked constructors and by
/// [`KdTree::try_insert`](crate::KdTree::try_insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A coordinate was NaN or infinite.
    #[error("coordinate is not finite")]
    NonFiniteCoordinate,

    /// A rectangle's minimum exceeded its maximum on some axis.
    #[error("rectangle bounds are inverted on the {axis} axis")]
    InvertedBounds {
        /// `'x'` or `'y'`.
        axis: char,
    },

    /// The point lies outside the region the tree partitions.
    #[error("point lies outside the tree's domain")]
    OutsideDomain,
}
