//! The reference operation catalog.

use std::fmt;

use tg_tensor::prelude::*;

use crate::error::{FixtureError, Result};
use crate::shapes::ShapePolicy;

/// One operation the tensor library under test is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceOp {
    Add,
    Sub,
    Mult,
    Div,
    Neg,
    Exp,
    Relu,
    Matmul,
}

impl ReferenceOp {
    /// Every op, in the order the suite writes their fixtures.
    pub const ALL: [ReferenceOp; 8] = [
        ReferenceOp::Add,
        ReferenceOp::Sub,
        ReferenceOp::Mult,
        ReferenceOp::Div,
        ReferenceOp::Neg,
        ReferenceOp::Exp,
        ReferenceOp::Relu,
        ReferenceOp::Matmul,
    ];

    /// Lowercase name, also the stem of the op's fixture file.
    pub fn name(self) -> &'static str {
        match self {
            ReferenceOp::Add => "add",
            ReferenceOp::Sub => "sub",
            ReferenceOp::Mult => "mult",
            ReferenceOp::Div => "div",
            ReferenceOp::Neg => "neg",
            ReferenceOp::Exp => "exp",
            ReferenceOp::Relu => "relu",
            ReferenceOp::Matmul => "matmul",
        }
    }

    /// File name of the op's result fixture.
    pub fn file_name(self) -> String {
        format!("{}.txt", self.name())
    }

    /// Number of operands consumed per result.
    pub fn arity(self) -> usize {
        match self {
            ReferenceOp::Neg | ReferenceOp::Exp | ReferenceOp::Relu => 1,
            _ => 2,
        }
    }

    /// Operand pool the op draws from.
    pub fn policy(self) -> ShapePolicy {
        match self {
            ReferenceOp::Matmul => ShapePolicy::Matmul,
            _ => ShapePolicy::Identical,
        }
    }

    /// Compute the op's result on `operands`.
    ///
    /// Operand count and shapes are checked before the backend runs, so a
    /// misuse surfaces as an error rather than a backend panic.
    pub fn apply<B: Backend>(self, operands: &[&B::Tensor]) -> Result<B::Tensor> {
        match (self, operands) {
            (ReferenceOp::Neg, [x]) => Ok(B::neg(x)),
            (ReferenceOp::Exp, [x]) => Ok(B::exp(x)),
            (ReferenceOp::Relu, [x]) => Ok(B::relu(x)),
            (ReferenceOp::Matmul, [a, b]) => {
                if a.shape().matmul_with(b.shape()).is_none() {
                    return Err(FixtureError::MatmulIncompatible {
                        left: a.shape().clone(),
                        right: b.shape().clone(),
                    });
                }
                Ok(B::matmul(a, b))
            }
            (op, [a, b]) if op.arity() == 2 => {
                if a.shape() != b.shape() {
                    return Err(FixtureError::ShapeMismatch {
                        op,
                        left: a.shape().clone(),
                        right: b.shape().clone(),
                    });
                }
                Ok(match op {
                    ReferenceOp::Add => B::add(a, b),
                    ReferenceOp::Sub => B::sub(a, b),
                    ReferenceOp::Mult => B::mul(a, b),
                    _ => B::div(a, b),
                })
            }
            (op, _) => Err(FixtureError::Arity {
                op,
                expected: op.arity(),
                got: operands.len(),
            }),
        }
    }
}

impl fmt::Display for ReferenceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
