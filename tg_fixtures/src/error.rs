//! Error type for fixture generation.

use std::io;
use std::path::{Path, PathBuf};

use tg_tensor::Shape;
use thiserror::Error;

use crate::ops::ReferenceOp;

/// Result alias used throughout the fixture crate.
pub type Result<T> = std::result::Result<T, FixtureError>;

#[derive(Debug, Error)]
pub enum FixtureError {
    /// An op was applied to the wrong number of operands.
    #[error("{op} takes {expected} operand(s), got {got}")]
    Arity {
        op: ReferenceOp,
        expected: usize,
        got: usize,
    },
    /// Element-wise operands must have identical shapes.
    #[error("{op}: operand shapes {left} and {right} differ")]
    ShapeMismatch {
        op: ReferenceOp,
        left: Shape,
        right: Shape,
    },
    /// Matmul operands need equal batch axes and matching inner dimensions.
    #[error("matmul: shapes {left} and {right} are not matmul compatible")]
    MatmulIncompatible { left: Shape, right: Shape },
    /// A binary op was handed an operand pool that does not split into pairs.
    #[error("{op} groups operands in pairs but the pool holds {count}")]
    UnpairedOperand { op: ReferenceOp, count: usize },
    /// A configured rank or extent range cannot produce valid shapes.
    #[error("invalid {what} range {min}..={max}")]
    InvalidRange {
        what: &'static str,
        min: usize,
        max: usize,
    },
    /// Creating or writing a fixture file failed.
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing to an in-memory or caller-provided sink failed.
    #[error(transparent)]
    Write(#[from] io::Error),
}

impl FixtureError {
    /// Attach a file path to a sink-level write error.
    pub(crate) fn at(self, path: &Path) -> Self {
        match self {
            FixtureError::Write(source) => FixtureError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        FixtureError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
