//! Integration tests for generated fixture files.
//!
//! Reads the files back with a minimal decoder and checks them against the
//! format the consuming library expects.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tg_backend_cpu::{CpuBackend, CpuTensor};
use tg_fixtures::{
    encode, write_fixture, write_raw, FixtureConfig, FixtureSuite, ReferenceOp, SuiteReport,
};
use tg_tensor::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

/// Decode one encoded tensor line.
fn decode_line(line: &str) -> CpuTensor {
    let mut fields = line.split(' ');
    let rank: usize = fields.next().unwrap().parse().unwrap();
    let dims: Vec<usize> = fields.by_ref().take(rank).map(|f| f.parse().unwrap()).collect();
    assert_eq!(dims.len(), rank, "truncated shape in {line:?}");
    let data: Vec<f64> = fields.map(|f| f.parse().unwrap()).collect();
    CpuTensor::try_new(data, Shape::new(dims)).unwrap()
}

/// Decode a whole fixture file, checking the header against the line count.
fn read_fixture(path: &Path) -> Vec<CpuTensor> {
    let text = fs::read_to_string(path).unwrap();
    assert!(text.ends_with('\n'), "{} is not newline-terminated", path.display());

    let mut lines = text.lines();
    let header: usize = lines.next().unwrap().parse().unwrap();
    let tensors: Vec<CpuTensor> = lines.map(decode_line).collect();
    assert_eq!(header, tensors.len(), "header mismatch in {}", path.display());
    tensors
}

fn run_suite(dir: &Path, pairs: usize, matmul_pairs: usize, seed: u64) -> SuiteReport {
    let config = FixtureConfig {
        out_dir: dir.to_path_buf(),
        pairs,
        matmul_pairs,
        ..FixtureConfig::default()
    };
    FixtureSuite::new(config)
        .unwrap()
        .run::<CpuBackend, _>(&mut StdRng::seed_from_u64(seed))
        .unwrap()
}

// ============================================================================
// Test: File structure
// ============================================================================

#[test]
fn test_every_file_written_with_expected_header() {
    let dir = tempfile::tempdir().unwrap();
    run_suite(dir.path(), 25, 15, 1);

    let expected = [
        ("tensors.txt", 50),
        ("add.txt", 25),
        ("sub.txt", 25),
        ("mult.txt", 25),
        ("div.txt", 25),
        ("neg.txt", 50),
        ("exp.txt", 50),
        ("relu.txt", 50),
        ("m_tensors.txt", 30),
        ("matmul.txt", 15),
    ];
    for (name, count) in expected {
        let tensors = read_fixture(&dir.path().join(name));
        assert_eq!(tensors.len(), count, "{name}");
    }
}

#[test]
fn test_report_matches_disk() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_suite(dir.path(), 6, 6, 2);
    assert_eq!(report.files.len(), 10);
    for file in &report.files {
        assert_eq!(read_fixture(&file.path).len(), file.tensors);
    }
}

#[test]
fn test_rerun_overwrites_files() {
    let dir = tempfile::tempdir().unwrap();
    run_suite(dir.path(), 20, 20, 3);
    run_suite(dir.path(), 2, 1, 4);
    assert_eq!(read_fixture(&dir.path().join("add.txt")).len(), 2);
    assert_eq!(read_fixture(&dir.path().join("matmul.txt")).len(), 1);
}

#[test]
fn test_nested_out_dir_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    run_suite(&nested, 1, 1, 5);
    assert!(nested.join("tensors.txt").is_file());
}

// ============================================================================
// Test: Operand pools
// ============================================================================

#[test]
fn test_elementwise_pool_shapes() {
    let dir = tempfile::tempdir().unwrap();
    run_suite(dir.path(), 100, 0, 6);

    let pool = read_fixture(&dir.path().join("tensors.txt"));
    assert_eq!(pool.len(), 200);
    for pair in pool.chunks(2) {
        assert_eq!(pair[0].shape(), pair[1].shape());
        assert!((2..=5).contains(&pair[0].rank()));
        assert!(pair[0].shape().dims().iter().all(|d| (1..=10).contains(d)));
    }
}

#[test]
fn test_matmul_pool_shapes() {
    let dir = tempfile::tempdir().unwrap();
    run_suite(dir.path(), 0, 100, 7);

    let pool = read_fixture(&dir.path().join("m_tensors.txt"));
    assert_eq!(pool.len(), 200);
    for pair in pool.chunks(2) {
        let (a, b) = (pair[0].shape(), pair[1].shape());
        let n = a.ndim();
        assert_eq!(n, b.ndim());
        assert_eq!(a.batch_dims(), b.batch_dims());
        assert_eq!(a.dim(n - 1), b.dim(n - 2));
    }
}

// ============================================================================
// Test: Results agree with their inputs
// ============================================================================

#[test]
fn test_results_recompute_from_inputs() {
    let dir = tempfile::tempdir().unwrap();
    run_suite(dir.path(), 20, 20, 8);

    let elementwise = read_fixture(&dir.path().join("tensors.txt"));
    let matmul = read_fixture(&dir.path().join("m_tensors.txt"));

    for op in ReferenceOp::ALL {
        let pool = match op {
            ReferenceOp::Matmul => &matmul,
            _ => &elementwise,
        };
        let text = fs::read_to_string(dir.path().join(op.file_name())).unwrap();
        let lines: Vec<&str> = text.lines().skip(1).collect();

        for (group, line) in pool.chunks(op.arity()).zip(&lines) {
            let refs: Vec<&CpuTensor> = group.iter().collect();
            let expected = op.apply::<CpuBackend>(&refs).unwrap();
            // Inputs round-trip exactly, so the recomputed line is byte-identical.
            assert_eq!(encode(&expected).trim_end(), *line, "{op}");
        }
    }
}

#[test]
fn test_matmul_result_shapes() {
    let dir = tempfile::tempdir().unwrap();
    run_suite(dir.path(), 0, 50, 9);

    let pool = read_fixture(&dir.path().join("m_tensors.txt"));
    let results = read_fixture(&dir.path().join("matmul.txt"));
    for (pair, result) in pool.chunks(2).zip(&results) {
        let expected = pair[0].shape().matmul_with(pair[1].shape()).unwrap();
        assert_eq!(result.shape(), &expected);
    }
}

// ============================================================================
// Test: Writer on hand-built tensors
// ============================================================================

#[test]
fn test_known_values_file() {
    let dir = tempfile::tempdir().unwrap();
    let a = CpuTensor::new(vec![1.0, 2.0, 3.0, 4.0], Shape::new(vec![2, 2]));
    let b = CpuTensor::new(vec![1.0, 0.0, 0.0, 1.0], Shape::new(vec![2, 2]));
    let pool = vec![a, b];

    let path = dir.path().join("matmul.txt");
    write_fixture::<CpuBackend>(&path, ReferenceOp::Matmul, &pool).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2 2 2 1 2 3 4\n");

    let path = dir.path().join("mult.txt");
    write_fixture::<CpuBackend>(&path, ReferenceOp::Mult, &pool).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2 2 2 1 0 0 4\n");

    let path = dir.path().join("tensors.txt");
    write_raw(&path, &pool).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "2\n2 2 2 1 2 3 4\n2 2 2 1 0 0 1\n"
    );
}
