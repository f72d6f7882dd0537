//! Random tensor materialization.

use rand::Rng;
use rand_distr::StandardNormal;
use tg_tensor::prelude::*;
use tracing::debug;

use crate::shapes::{ShapeGenerator, ShapePolicy};

/// Fill a tensor of `shape` with independent standard-normal draws.
pub fn materialize<B: Backend, R: Rng>(shape: &Shape, rng: &mut R) -> B::Tensor {
    let data: Vec<f64> = (0..shape.numel())
        .map(|_| rng.sample::<f64, _>(StandardNormal))
        .collect();
    B::from_vec(data, shape.clone())
}

/// Generate `pairs` operand pairs, stored consecutively as `[a0, b0, a1, b1, ...]`.
pub fn operand_pool<B: Backend, R: Rng>(
    shapes: &ShapeGenerator,
    policy: ShapePolicy,
    pairs: usize,
    rng: &mut R,
) -> Vec<B::Tensor> {
    debug!(?policy, pairs, "generating operand pool");
    let mut pool = Vec::with_capacity(pairs * 2);
    for _ in 0..pairs {
        let (lhs, rhs) = shapes.pair(policy, rng);
        pool.push(materialize::<B, _>(&lhs, rng));
        pool.push(materialize::<B, _>(&rhs, rng));
    }
    pool
}
