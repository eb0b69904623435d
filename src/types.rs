//! Integer types that may be used to address nodes inside a [`KdTree`](crate::KdTree)
use az::Cast;
use num_traits::{PrimInt, Unsigned, Zero};
use std::fmt::Debug;

/// Implemented on `u16`, `u32`, `u64` and `usize` so that they can be used internally to
/// index the `Vec` of tree nodes.
///
/// Allows a smaller integer to be used as the second generic parameter of
/// [`KdTree`](crate::KdTree). If you will be storing fewer than ~65k points in the tree,
/// selecting `u16` shrinks every node by a few bytes, which lets more of them stay in the
/// CPU cache.
///
/// The maximum value of the type is reserved to mark a vacant child slot, so a tree
/// indexed by `IDX` holds at most `IDX::max()` points.
pub trait Index: PrimInt + Unsigned + Zero + Cast<usize> + Debug + Sync + Send {
    #[doc(hidden)]
    fn vacant() -> Self;
    #[doc(hidden)]
    fn capacity() -> usize;
}

macro_rules! impl_index {
    ($t:ty) => {
        impl Index for $t {
            #[inline]
            fn vacant() -> $t {
                <$t>::MAX
            }
            #[inline]
            fn capacity() -> usize {
                usize::try_from(<$t>::MAX).unwrap_or(usize::MAX)
            }
        }
    };
}

impl_index!(u16);
impl_index!(u32);
impl_index!(u64);
impl_index!(usize);
