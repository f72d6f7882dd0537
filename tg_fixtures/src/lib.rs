//! # tg_fixtures - Golden Tensor Fixture Generation
//!
//! Produces the text fixtures an external tensor library is validated
//! against: random operand pools plus the expected result of every reference
//! operation over them.
//!
//! - **Shapes**: [`ShapeGenerator`] draws identical-shape or matmul-compatible pairs
//! - **Factory**: [`materialize`] fills a shape with standard-normal values
//! - **Codec**: [`encode`] renders one tensor as a line of text
//! - **Ops**: [`ReferenceOp`] is the catalog of reference operations
//! - **Writer**: [`write_fixture`] and [`write_raw`] produce count-prefixed files
//! - **Suite**: [`FixtureSuite`] writes the whole set for a [`FixtureConfig`]
//!
//! ## Example
//!
//! ```ignore
//! use tg_backend_cpu::CpuBackend;
//! use tg_fixtures::{FixtureConfig, FixtureSuite};
//!
//! let suite = FixtureSuite::new(FixtureConfig::with_out_dir("testfiles"))?;
//! let report = suite.run::<CpuBackend, _>(&mut rand::thread_rng())?;
//! for file in &report.files {
//!     println!("{}: {} tensors", file.path.display(), file.tensors);
//! }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod factory;
pub mod ops;
pub mod shapes;
pub mod suite;
pub mod writer;

pub use codec::{encode, Encoded};
pub use config::FixtureConfig;
pub use error::{FixtureError, Result};
pub use factory::{materialize, operand_pool};
pub use ops::ReferenceOp;
pub use shapes::{ShapeGenerator, ShapePolicy};
pub use suite::{FixtureKind, FixtureSuite, SuiteReport, WrittenFixture};
pub use writer::{write_fixture, write_fixture_to, write_raw, write_raw_to};
