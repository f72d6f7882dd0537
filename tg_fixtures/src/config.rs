//! Run configuration for a fixture suite.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::error::{FixtureError, Result};
use crate::shapes::{ShapeGenerator, DEFAULT_EXTENTS, DEFAULT_RANKS};

/// Directory the fixtures land in when none is given.
pub const DEFAULT_OUT_DIR: &str = "testfiles";

/// Operand pairs generated per pool when none is given.
pub const DEFAULT_PAIRS: usize = 1000;

/// Everything a suite run needs besides the random generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Output directory, created if missing.
    pub out_dir: PathBuf,
    /// Number of operand pairs in the element-wise pool.
    pub pairs: usize,
    /// Number of operand pairs in the matmul pool.
    pub matmul_pairs: usize,
    /// Inclusive range tensor ranks are drawn from.
    pub ranks: RangeInclusive<usize>,
    /// Inclusive range every axis extent is drawn from.
    pub extents: RangeInclusive<usize>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            pairs: DEFAULT_PAIRS,
            matmul_pairs: DEFAULT_PAIRS,
            ranks: DEFAULT_RANKS,
            extents: DEFAULT_EXTENTS,
        }
    }
}

impl FixtureConfig {
    /// Default configuration writing into `out_dir`.
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        FixtureConfig {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    /// Check the ranges before anything is generated or written.
    ///
    /// Ranks start at 2 because matmul operands need two trailing matrix
    /// axes; extents start at 1.
    pub fn validate(&self) -> Result<()> {
        check_range("rank", &self.ranks, 2)?;
        check_range("extent", &self.extents, 1)
    }

    /// Shape generator honouring the configured ranges.
    pub fn shape_generator(&self) -> Result<ShapeGenerator> {
        ShapeGenerator::new(self.ranks.clone(), self.extents.clone())
    }
}

pub(crate) fn check_range(
    what: &'static str,
    range: &RangeInclusive<usize>,
    floor: usize,
) -> Result<()> {
    let (min, max) = (*range.start(), *range.end());
    if min < floor || min > max {
        return Err(FixtureError::InvalidRange { what, min, max });
    }
    Ok(())
}
