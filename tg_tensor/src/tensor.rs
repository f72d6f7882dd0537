//! TensorData trait - the core abstraction for tensor storage.

use crate::shape::{Shape, Strides};

/// Core trait for tensor data storage.
///
/// Tensors are immutable once built: backends produce new tensors from
/// their operands and never write through a shared handle.
pub trait TensorData: Clone + Send + Sync + 'static {
    /// Get the shape of this tensor.
    fn shape(&self) -> &Shape;

    /// Get the strides of this tensor.
    fn strides(&self) -> &Strides;

    /// Number of axes.
    fn rank(&self) -> usize {
        self.shape().ndim()
    }

    /// Get the total number of elements.
    fn numel(&self) -> usize {
        self.shape().numel()
    }

    /// Check if data is contiguous in memory.
    fn is_contiguous(&self) -> bool {
        self.strides() == &self.shape().contiguous_strides()
    }

    /// Get data as a contiguous row-major f64 slice.
    fn as_slice(&self) -> &[f64];
}
