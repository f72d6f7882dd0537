//! Errors raised while building tensors from raw buffers.

use thiserror::Error;

use crate::shape::Shape;

/// Result alias used by tensor constructors.
pub type Result<T> = std::result::Result<T, TensorError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TensorError {
    /// The flat buffer does not hold exactly `product(shape)` elements.
    #[error("data length {got} doesn't match shape {shape} (numel={expected})")]
    DataLength {
        expected: usize,
        got: usize,
        shape: Shape,
    },
    /// A shape with a zero-length axis was supplied where extents must be positive.
    #[error("shape {0} has an empty axis")]
    EmptyAxis(Shape),
}
