//! Fixture file writing.
//!
//! A fixture file is a decimal count header followed by that many encoded
//! tensors, one per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tg_tensor::prelude::*;
use tracing::info;

use crate::codec::Encoded;
use crate::error::{FixtureError, Result};
use crate::ops::ReferenceOp;

/// Number of results `op` yields for a pool of `count` operands.
pub fn result_count(op: ReferenceOp, count: usize) -> Result<usize> {
    let arity = op.arity();
    if count % arity != 0 {
        return Err(FixtureError::UnpairedOperand { op, count });
    }
    Ok(count / arity)
}

/// Apply `op` to consecutive operand groups and write the results to `sink`.
///
/// Returns the number of tensors written.
pub fn write_fixture_to<B: Backend, W: Write>(
    mut sink: W,
    op: ReferenceOp,
    operands: &[B::Tensor],
) -> Result<usize> {
    let count = result_count(op, operands.len())?;
    writeln!(sink, "{}", count)?;
    for group in operands.chunks(op.arity()) {
        let refs: Vec<&B::Tensor> = group.iter().collect();
        let result = op.apply::<B>(&refs)?;
        write!(sink, "{}", Encoded(&result))?;
    }
    Ok(count)
}

/// Write the operands themselves, header equal to the operand count.
pub fn write_raw_to<T: TensorData, W: Write>(mut sink: W, tensors: &[T]) -> Result<usize> {
    writeln!(sink, "{}", tensors.len())?;
    for tensor in tensors {
        write!(sink, "{}", Encoded(tensor))?;
    }
    Ok(tensors.len())
}

/// Create (or overwrite) `path` with the results of `op` over `operands`.
///
/// The operand count is checked before the file is created. A failure after
/// that point leaves a truncated file behind.
pub fn write_fixture<B: Backend>(
    path: impl AsRef<Path>,
    op: ReferenceOp,
    operands: &[B::Tensor],
) -> Result<usize> {
    let path = path.as_ref();
    result_count(op, operands.len())?;

    let mut sink = create(path)?;
    let count = write_fixture_to::<B, _>(&mut sink, op, operands).map_err(|e| e.at(path))?;
    sink.flush().map_err(|e| FixtureError::io(path, e))?;

    info!(path = %path.display(), %op, tensors = count, "wrote fixture");
    Ok(count)
}

/// Create (or overwrite) `path` with a raw dump of `tensors`.
pub fn write_raw<T: TensorData>(path: impl AsRef<Path>, tensors: &[T]) -> Result<usize> {
    let path = path.as_ref();

    let mut sink = create(path)?;
    let count = write_raw_to(&mut sink, tensors).map_err(|e| e.at(path))?;
    sink.flush().map_err(|e| FixtureError::io(path, e))?;

    info!(path = %path.display(), tensors = count, "wrote operand dump");
    Ok(count)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| FixtureError::io(path, e))
}
