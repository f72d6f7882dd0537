//! Random shape selection for operand pairs.

use std::ops::RangeInclusive;

use rand::Rng;
use tg_tensor::Shape;

use crate::config::check_range;
use crate::error::Result;

/// Ranks drawn for generated tensors.
pub const DEFAULT_RANKS: RangeInclusive<usize> = 2..=5;

/// Extents drawn for every axis.
pub const DEFAULT_EXTENTS: RangeInclusive<usize> = 1..=10;

/// How the two shapes of an operand pair relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePolicy {
    /// Both operands share one shape.
    Identical,
    /// `[..., m, n]` paired with `[..., n, p]`.
    Matmul,
}

/// Draws ranks and extents uniformly from fixed inclusive ranges.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    ranks: RangeInclusive<usize>,
    extents: RangeInclusive<usize>,
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        ShapeGenerator {
            ranks: DEFAULT_RANKS,
            extents: DEFAULT_EXTENTS,
        }
    }
}

impl ShapeGenerator {
    /// Create a generator over custom ranges.
    pub fn new(ranks: RangeInclusive<usize>, extents: RangeInclusive<usize>) -> Result<Self> {
        check_range("rank", &ranks, 2)?;
        check_range("extent", &extents, 1)?;
        Ok(ShapeGenerator { ranks, extents })
    }

    /// One shape shared by both operands of an element-wise pair.
    pub fn identical_shape_policy<R: Rng>(&self, rng: &mut R) -> Shape {
        let rank = rng.gen_range(self.ranks.clone());
        Shape::new((0..rank).map(|_| self.extent(rng)).collect())
    }

    /// Operand shapes for a batched matmul pair.
    ///
    /// The right shape copies the left's batch axes, takes the left's last
    /// axis as its second-to-last, and draws its own last axis.
    pub fn matmul_shape_policy<R: Rng>(&self, rng: &mut R) -> (Shape, Shape) {
        let lhs = self.identical_shape_policy(rng);
        let ndim = lhs.ndim();

        let mut rhs = lhs.dims().to_vec();
        rhs[ndim - 2] = lhs.dim(ndim - 1);
        rhs[ndim - 1] = self.extent(rng);

        (lhs, Shape::new(rhs))
    }

    /// Shapes for one operand pair under `policy`.
    pub fn pair<R: Rng>(&self, policy: ShapePolicy, rng: &mut R) -> (Shape, Shape) {
        match policy {
            ShapePolicy::Identical => {
                let shape = self.identical_shape_policy(rng);
                (shape.clone(), shape)
            }
            ShapePolicy::Matmul => self.matmul_shape_policy(rng),
        }
    }

    fn extent<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.extents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_identical_shapes_in_range() {
        let shapes = ShapeGenerator::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let s = shapes.identical_shape_policy(&mut rng);
            assert!((2..=5).contains(&s.ndim()), "rank {} out of range", s.ndim());
            assert!(s.dims().iter().all(|d| (1..=10).contains(d)), "{:?}", s);
        }
    }

    #[test]
    fn test_identical_pair_shapes_equal() {
        let shapes = ShapeGenerator::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let (a, b) = shapes.pair(ShapePolicy::Identical, &mut rng);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_matmul_pairs_compatible() {
        let shapes = ShapeGenerator::default();
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..1000 {
            let (a, b) = shapes.pair(ShapePolicy::Matmul, &mut rng);
            let n = a.ndim();
            assert_eq!(n, b.ndim());
            assert_eq!(a.batch_dims(), b.batch_dims());
            assert_eq!(a.dim(n - 1), b.dim(n - 2));
            assert!((1..=10).contains(&b.dim(n - 1)));
            assert!(a.matmul_with(&b).is_some());
        }
    }

    #[test]
    fn test_every_rank_drawn() {
        let shapes = ShapeGenerator::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 6];
        for _ in 0..500 {
            seen[shapes.identical_shape_policy(&mut rng).ndim()] = true;
        }
        assert_eq!(&seen[2..], &[true; 4]);
    }

    #[test]
    fn test_fixed_ranges() {
        let shapes = ShapeGenerator::new(3..=3, 4..=4).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let (a, b) = shapes.matmul_shape_policy(&mut rng);
        assert_eq!(a, Shape::new(vec![4, 4, 4]));
        assert_eq!(b, Shape::new(vec![4, 4, 4]));
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(ShapeGenerator::new(1..=3, 1..=10).is_err());
        assert!(ShapeGenerator::new(2..=3, 0..=10).is_err());
    }
}
