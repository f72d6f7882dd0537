//! Shape and stride utilities for tensors.

use std::fmt;

/// A tensor shape (per-axis extents).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Shape(pub Vec<usize>);

impl Shape {
    /// Create a new shape from dimensions.
    pub fn new(dims: Vec<usize>) -> Self {
        Shape(dims)
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Get dimension at index.
    pub fn dim(&self, idx: usize) -> usize {
        self.0[idx]
    }

    /// Get dimensions as slice.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }

    /// True when some axis has extent zero.
    pub fn has_empty_axis(&self) -> bool {
        self.0.iter().any(|&d| d == 0)
    }

    /// Compute row-major (C-contiguous) strides for this shape.
    pub fn contiguous_strides(&self) -> Strides {
        let ndim = self.0.len();
        if ndim == 0 {
            return Strides(vec![]);
        }

        let mut strides = vec![1usize; ndim];
        for i in (0..ndim - 1).rev() {
            strides[i] = strides[i + 1] * self.0[i + 1];
        }
        Strides(strides)
    }

    /// Leading (batch) axes, i.e. everything but the trailing matrix axes.
    /// Empty for shapes of rank < 2.
    pub fn batch_dims(&self) -> &[usize] {
        &self.0[..self.ndim().saturating_sub(2)]
    }

    /// Result shape of `self @ other` if the pair is matmul-compatible.
    ///
    /// Both shapes need rank >= 2 and the same rank, identical batch axes,
    /// and `self`'s last axis equal to `other`'s second-to-last.
    pub fn matmul_with(&self, other: &Shape) -> Option<Shape> {
        let ndim = self.ndim();
        if ndim < 2 || other.ndim() != ndim {
            return None;
        }
        if self.batch_dims() != other.batch_dims() {
            return None;
        }
        if self.0[ndim - 1] != other.0[ndim - 2] {
            return None;
        }

        let mut dims = self.batch_dims().to_vec();
        dims.push(self.0[ndim - 2]);
        dims.push(other.0[ndim - 1]);
        Some(Shape(dims))
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({:?})", self.0)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

/// Tensor strides (step size in each dimension).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Strides(pub Vec<usize>);

impl Strides {
    pub fn new(strides: Vec<usize>) -> Self {
        Strides(strides)
    }

    /// Compute flat index from multi-dimensional indices.
    pub fn index(&self, indices: &[usize]) -> usize {
        debug_assert_eq!(self.0.len(), indices.len());
        self.0.iter().zip(indices.iter()).map(|(s, i)| s * i).sum()
    }
}
