//! CPU Backend for tg_tensor.

use tg_tensor::prelude::*;

/// CPU tensor storage: a contiguous row-major f64 buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct CpuTensor {
    data: Vec<f64>,
    shape: Shape,
    strides: Strides,
}

impl CpuTensor {
    /// Create a new CPU tensor from data and shape.
    ///
    /// Panics if `data.len()` does not match the shape; see [`CpuTensor::try_new`].
    pub fn new(data: Vec<f64>, shape: Shape) -> Self {
        assert_eq!(
            data.len(),
            shape.numel(),
            "Data length {} doesn't match shape {:?} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        let strides = shape.contiguous_strides();
        CpuTensor { data, shape, strides }
    }

    /// Fallible constructor for buffers coming from outside the backend.
    pub fn try_new(data: Vec<f64>, shape: Shape) -> tg_tensor::Result<Self> {
        if shape.has_empty_axis() {
            return Err(TensorError::EmptyAxis(shape));
        }
        if data.len() != shape.numel() {
            return Err(TensorError::DataLength {
                expected: shape.numel(),
                got: data.len(),
                shape,
            });
        }
        Ok(Self::new(data, shape))
    }

    /// Get flat index from multi-dimensional indices.
    pub fn flat_index(&self, indices: &[usize]) -> usize {
        self.strides.index(indices)
    }

    /// Element at a multi-dimensional index.
    pub fn get(&self, indices: &[usize]) -> f64 {
        self.data[self.flat_index(indices)]
    }

    /// Iterate over all indices in the tensor, in row-major order.
    pub fn indices(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        TensorIndices::new(&self.shape)
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> CpuTensor {
        let data: Vec<f64> = self.data.iter().map(|&v| f(v)).collect();
        CpuTensor::new(data, self.shape.clone())
    }
}

impl TensorData for CpuTensor {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn strides(&self) -> &Strides {
        &self.strides
    }

    fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Iterator over all multi-dimensional indices of a tensor.
struct TensorIndices<'a> {
    shape: &'a Shape,
    current: Vec<usize>,
    done: bool,
}

impl<'a> TensorIndices<'a> {
    fn new(shape: &'a Shape) -> Self {
        TensorIndices {
            shape,
            current: vec![0; shape.ndim()],
            done: shape.ndim() == 0 || shape.numel() == 0,
        }
    }
}

impl Iterator for TensorIndices<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current.clone();

        // Increment indices (rightmost first, like odometer)
        let mut i = self.shape.ndim() - 1;
        loop {
            self.current[i] += 1;
            if self.current[i] < self.shape.dim(i) {
                break;
            }
            self.current[i] = 0;
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}

/// CPU backend marker type.
#[derive(Clone, Copy, Debug)]
pub struct CpuBackend;

impl Backend for CpuBackend {
    type Tensor = CpuTensor;

    // === Creation ===

    fn from_vec(data: Vec<f64>, shape: Shape) -> CpuTensor {
        CpuTensor::new(data, shape)
    }

    fn zeros(shape: &Shape) -> CpuTensor {
        CpuTensor::new(vec![0.0; shape.numel()], shape.clone())
    }

    // === Unary element-wise ===

    fn neg(x: &CpuTensor) -> CpuTensor {
        x.map(|v| -v)
    }

    fn exp(x: &CpuTensor) -> CpuTensor {
        x.map(f64::exp)
    }

    fn relu(x: &CpuTensor) -> CpuTensor {
        // f64::max would turn NaN into 0.0
        x.map(|v| if v.is_nan() { v } else { v.max(0.0) })
    }

    // === Binary element-wise, identical shapes ===

    fn add(a: &CpuTensor, b: &CpuTensor) -> CpuTensor {
        zip_with(a, b, |x, y| x + y)
    }

    fn sub(a: &CpuTensor, b: &CpuTensor) -> CpuTensor {
        zip_with(a, b, |x, y| x - y)
    }

    fn mul(a: &CpuTensor, b: &CpuTensor) -> CpuTensor {
        zip_with(a, b, |x, y| x * y)
    }

    fn div(a: &CpuTensor, b: &CpuTensor) -> CpuTensor {
        zip_with(a, b, |x, y| x / y)
    }

    // === Linear algebra ===

    fn matmul(a: &CpuTensor, b: &CpuTensor) -> CpuTensor {
        matmul_impl(a, b)
    }
}

/// Binary operation over two tensors of the same shape.
fn zip_with<F>(a: &CpuTensor, b: &CpuTensor, op: F) -> CpuTensor
where
    F: Fn(f64, f64) -> f64,
{
    assert_eq!(
        a.shape, b.shape,
        "Element-wise operands must share a shape"
    );

    let data: Vec<f64> = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(&x, &y)| op(x, y))
        .collect();

    CpuTensor::new(data, a.shape.clone())
}

/// Batched matrix multiplication: (..., M, K) @ (..., K, N) -> (..., M, N).
fn matmul_impl(a: &CpuTensor, b: &CpuTensor) -> CpuTensor {
    let out_shape = match a.shape.matmul_with(&b.shape) {
        Some(shape) => shape,
        None => panic!(
            "Shapes {:?} and {:?} are not matmul compatible",
            a.shape, b.shape
        ),
    };

    let ndim = a.shape.ndim();
    let m = a.shape.dim(ndim - 2);
    let k = a.shape.dim(ndim - 1);
    let n = b.shape.dim(ndim - 1);

    // Batch axes are identical, so each batch is a contiguous block in
    // all three buffers.
    let batches: usize = a.shape.batch_dims().iter().product();
    let mut data = vec![0.0f64; out_shape.numel()];

    for batch in 0..batches {
        let a_offset = batch * m * k;
        let b_offset = batch * k * n;
        let out_offset = batch * m * n;

        for i in 0..m {
            for j in 0..n {
                let mut sum = 0.0;
                for l in 0..k {
                    sum += a.data[a_offset + i * k + l] * b.data[b_offset + l * n + j];
                }
                data[out_offset + i * n + j] = sum;
            }
        }
    }

    CpuTensor::new(data, out_shape)
}
