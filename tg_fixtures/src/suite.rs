//! Full fixture set generation.

use std::fs;
use std::path::PathBuf;

use rand::Rng;
use tg_tensor::Backend;
use tracing::{info, info_span};

use crate::config::FixtureConfig;
use crate::error::{FixtureError, Result};
use crate::factory::operand_pool;
use crate::ops::ReferenceOp;
use crate::shapes::{ShapeGenerator, ShapePolicy};
use crate::writer::{write_fixture, write_raw};

/// Raw dump of the element-wise operand pool.
pub const ELEMENTWISE_INPUTS: &str = "tensors.txt";

/// Raw dump of the matmul operand pool.
pub const MATMUL_INPUTS: &str = "m_tensors.txt";

/// What a written file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureKind {
    /// Operands drawn under the given policy.
    Inputs(ShapePolicy),
    /// Expected outputs of an op.
    Results(ReferenceOp),
}

/// One file produced by a suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFixture {
    pub path: PathBuf,
    pub kind: FixtureKind,
    pub tensors: usize,
}

/// Files produced by a suite run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub files: Vec<WrittenFixture>,
}

impl SuiteReport {
    /// Entry for `kind`, if it was written.
    pub fn get(&self, kind: FixtureKind) -> Option<&WrittenFixture> {
        self.files.iter().find(|f| f.kind == kind)
    }
}

/// Generates every operand pool and result file for a configuration.
#[derive(Debug, Clone)]
pub struct FixtureSuite {
    config: FixtureConfig,
    shapes: ShapeGenerator,
}

impl FixtureSuite {
    /// Validate `config` and prepare its shape generator.
    pub fn new(config: FixtureConfig) -> Result<Self> {
        config.validate()?;
        let shapes = config.shape_generator()?;
        Ok(FixtureSuite { config, shapes })
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Write the element-wise pool and its results, then the matmul pool and
    /// its results. Stops at the first failure.
    pub fn run<B: Backend, R: Rng>(&self, rng: &mut R) -> Result<SuiteReport> {
        let out_dir = &self.config.out_dir;
        let _span = info_span!("suite", out_dir = %out_dir.display()).entered();

        fs::create_dir_all(out_dir).map_err(|e| FixtureError::io(out_dir, e))?;

        let mut report = SuiteReport::default();
        let pools = [
            (ShapePolicy::Identical, self.config.pairs, ELEMENTWISE_INPUTS),
            (ShapePolicy::Matmul, self.config.matmul_pairs, MATMUL_INPUTS),
        ];

        for (policy, pairs, inputs_name) in pools {
            let pool = operand_pool::<B, _>(&self.shapes, policy, pairs, rng);

            let path = out_dir.join(inputs_name);
            let tensors = write_raw(&path, &pool)?;
            report.files.push(WrittenFixture {
                path,
                kind: FixtureKind::Inputs(policy),
                tensors,
            });

            for op in ReferenceOp::ALL.into_iter().filter(|op| op.policy() == policy) {
                let path = out_dir.join(op.file_name());
                let tensors = write_fixture::<B>(&path, op, &pool)?;
                report.files.push(WrittenFixture {
                    path,
                    kind: FixtureKind::Results(op),
                    tensors,
                });
            }
        }

        info!(files = report.files.len(), "fixture suite complete");
        Ok(report)
    }
}
