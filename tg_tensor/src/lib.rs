//! # tg_tensor - Tensor Storage and Backend Abstractions
//!
//! This crate defines the vocabulary shared by the fixture generator and the
//! compute backends it delegates to.
//!
//! ## Overview
//!
//! The core abstractions are:
//! - [`Shape`] and [`Strides`] - Tensor shape and row-major memory layout
//! - [`TensorData`] - Trait for read-only tensor storage
//! - [`Backend`] - Trait for compute backends implementing the reference operations
//! - [`TensorError`] - Errors raised when constructing tensors from raw data
//!
//! ## Example
//!
//! ```ignore
//! use tg_tensor::prelude::*;
//! use tg_backend_cpu::CpuBackend;
//!
//! let a = CpuBackend::from_vec(vec![1.0, 2.0, 3.0, 4.0], Shape::new(vec![2, 2]));
//! let b = CpuBackend::from_vec(vec![1.0, 0.0, 0.0, 1.0], Shape::new(vec![2, 2]));
//!
//! let c = CpuBackend::matmul(&a, &b);
//! assert_eq!(c.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
//! ```

pub mod backend;
pub mod error;
pub mod shape;
pub mod tensor;

pub use backend::Backend;
pub use error::{Result, TensorError};
pub use shape::{Shape, Strides};
pub use tensor::TensorData;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::backend::Backend;
    pub use crate::error::TensorError;
    pub use crate::shape::{Shape, Strides};
    pub use crate::tensor::TensorData;
}
