//! Random data generation shared by the integration tests and the benchmarks.
use az::{Az, Cast};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::kdtree::{Axis, KdTree};
use crate::point::Point;
use crate::rect::Rect;
use crate::types::Index;

/// Deterministic generator for a given seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn rand_coord<A: Axis, R: Rng>(rng: &mut R, min: A, max: A) -> A
where
    f64: Cast<A>,
{
    let t: f64 = rng.random();
    let v = min + (max - min) * t.az::<A>();
    // rounding can overshoot the upper bound
    v.min(max)
}

/// A uniformly distributed point inside `domain`, which must be finite.
pub fn rand_point<A: Axis, R: Rng>(rng: &mut R, domain: &Rect<A>) -> Point<A>
where
    f64: Cast<A>,
{
    Point::new(
        rand_coord(rng, domain.xmin(), domain.xmax()),
        rand_coord(rng, domain.ymin(), domain.ymax()),
    )
}

/// A point on a `steps` × `steps` lattice spanning `domain`. Lattice points share
/// coordinates with each other and repeat often, which exercises split ties and
/// duplicate insertion.
pub fn rand_lattice_point<A: Axis, R: Rng>(rng: &mut R, domain: &Rect<A>, steps: u32) -> Point<A>
where
    f64: Cast<A>,
{
    let lattice = |rng: &mut R, min: A, max: A| {
        let t = rng.random_range(0..=steps) as f64 / steps as f64;
        (min + (max - min) * t.az::<A>()).min(max)
    };
    Point::new(
        lattice(rng, domain.xmin(), domain.xmax()),
        lattice(rng, domain.ymin(), domain.ymax()),
    )
}

/// A random rectangle whose corners are uniformly distributed over `bounds`.
pub fn rand_rect<A: Axis, R: Rng>(rng: &mut R, bounds: &Rect<A>) -> Rect<A>
where
    f64: Cast<A>,
{
    let a = rand_point(rng, bounds);
    let b = rand_point(rng, bounds);
    Rect::new(
        a.x().min(b.x()),
        a.y().min(b.y()),
        a.x().max(b.x()),
        a.y().max(b.y()),
    )
}

/// `count` random points inside `domain`.
pub fn rand_points<A: Axis, R: Rng>(rng: &mut R, domain: &Rect<A>, count: usize) -> Vec<Point<A>>
where
    f64: Cast<A>,
{
    (0..count).map(|_| rand_point(rng, domain)).collect()
}

/// Builds a tree over the unit square holding `tree_size` random points, plus
/// `query_point_qty` random query points.
pub fn build_populated_tree_and_query_points<A: Axis, IDX: Index>(
    tree_size: usize,
    query_point_qty: usize,
    seed: u64,
) -> (KdTree<A, IDX>, Vec<Point<A>>)
where
    f64: Cast<A>,
    usize: Cast<IDX>,
{
    let mut rng = seeded_rng(seed);
    let domain = Rect::unit();

    let mut tree = KdTree::with_capacity(tree_size);
    tree.extend(rand_points(&mut rng, &domain, tree_size));

    let query_points = rand_points(&mut rng, &domain, query_point_qty);

    (tree, query_points)
}
