//! Range and nearest neighbour queries over a [`KdTree`](crate::KdTree)

mod nearest_one;
mod range;
