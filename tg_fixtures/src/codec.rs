//! Text encoding of a single tensor.
//!
//! One tensor per line, fields separated by single spaces:
//!
//! ```text
//! <rank> <extent_1> ... <extent_rank> <value_1> ... <value_K>
//! ```
//!
//! `K` is the product of the extents and values follow row-major order. Values
//! use the `Display` form of `f64`, the shortest decimal that parses back to
//! the same number; non-finite values appear as `inf`, `-inf` or `NaN`.

use std::fmt;

use tg_tensor::TensorData;

/// Display adapter producing the encoded line, newline included.
pub struct Encoded<'a, T>(pub &'a T);

impl<T: TensorData> fmt::Display for Encoded<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tensor = self.0;
        write!(f, "{}", tensor.rank())?;
        for d in tensor.shape().dims() {
            write!(f, " {}", d)?;
        }
        for v in tensor.as_slice() {
            write!(f, " {}", v)?;
        }
        writeln!(f)
    }
}

/// Encode a tensor as one newline-terminated line.
pub fn encode<T: TensorData>(tensor: &T) -> String {
    Encoded(tensor).to_string()
}
