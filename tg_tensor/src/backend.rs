//! Backend trait - abstraction for the numeric library the reference ops run on.

use crate::shape::Shape;
use crate::tensor::TensorData;

/// Backend trait for tensor computation.
///
/// Binary element-wise operations require operands of identical shape; there
/// is no broadcasting. Implementations may panic when a precondition is
/// violated, so callers handling untrusted shapes must check first.
pub trait Backend: Clone + Send + Sync + 'static {
    /// The tensor type for this backend.
    type Tensor: TensorData;

    // === Creation ===

    /// Create a tensor from a flat row-major data vector and shape.
    fn from_vec(data: Vec<f64>, shape: Shape) -> Self::Tensor;

    /// Create a tensor of zeros with the given shape.
    fn zeros(shape: &Shape) -> Self::Tensor;

    // === Element-wise unary operations ===

    /// Negate: -x
    fn neg(x: &Self::Tensor) -> Self::Tensor;

    /// Exponential: e^x
    fn exp(x: &Self::Tensor) -> Self::Tensor;

    /// ReLU: max(0, x)
    fn relu(x: &Self::Tensor) -> Self::Tensor;

    // === Element-wise binary operations ===

    /// Addition: a + b
    fn add(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor;

    /// Subtraction: a - b
    fn sub(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor;

    /// Multiplication: a * b
    fn mul(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor;

    /// Division: a / b
    fn div(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor;

    // === Linear algebra ===

    /// Matrix multiplication: a @ b
    /// Batched over identical leading axes: (..., M, K) @ (..., K, N) -> (..., M, N)
    fn matmul(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor;
}
