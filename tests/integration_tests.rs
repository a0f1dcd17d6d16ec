use approx::assert_abs_diff_eq;
use lattice_reducer::{parser, reduce_lattice, LatticeError, LatticeVector, ReductionConfig};
use std::path::PathBuf;

fn sample(name: &str) -> Vec<LatticeVector> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("A_sample_inputs").join(name);
    assert!(path.exists(), "Test file not found: {:?}", path);
    parser::from_file(&path).expect("Failed to parse basis")
}

fn v(c: &[f64]) -> LatticeVector {
    LatticeVector::from_row_slice(c)
}

#[test]
fn test_reduce_all_samples() {
    // (file, index of shortest vector, shortest vector, norm)
    let cases: Vec<(&str, usize, Vec<f64>, f64)> = vec![
        ("identity3.txt", 0, vec![1.0, 0.0, 0.0], 1.0),
        ("skewed2.txt", 0, vec![1.0, -1.0], 2f64.sqrt()),
        ("knapsack2.txt", 0, vec![1.0, 32.0], 1025f64.sqrt()),
        ("tridiagonal3.txt", 1, vec![1.0, 3.0, 1.0], 11f64.sqrt()),
        ("unimodular3.txt", 0, vec![0.0, 0.0, 1.0], 1.0),
        ("wide4x5.txt", 1, vec![0.0, 1.0, 0.0, 0.0, 17.0], 290f64.sqrt()),
        ("fibonacci3.txt", 0, vec![-1.0, 0.0, 0.0], 1.0),
    ];

    for (name, index, expected, norm) in cases {
        let outcome = reduce_lattice(sample(name), &ReductionConfig::default())
            .unwrap_or_else(|e| panic!("Failed to reduce {}: {:#}", name, e));

        assert_eq!(outcome.shortest.index, index, "{}", name);
        assert_eq!(outcome.shortest.vector, v(&expected), "{}", name);
        assert_abs_diff_eq!(outcome.shortest.norm, norm, epsilon = 1e-12);

        // The selected vector is one of the reduced basis vectors.
        assert_eq!(outcome.reduced[outcome.shortest.index], outcome.shortest.vector, "{}", name);
        assert!(outcome.postprocess.map_or(false, |s| s.converged), "{}", name);
        assert!(!outcome.report.is_empty());
    }
}

#[test]
fn test_reduced_bases_match_reference_runs() {
    let outcome = reduce_lattice(sample("unimodular3.txt"), &ReductionConfig::default()).unwrap();
    let rows: Vec<Vec<f64>> = outcome.reduced.vectors().iter().map(|r| r.iter().copied().collect()).collect();
    assert_eq!(rows, vec![vec![0.0, 0.0, 1.0], vec![2.0, 1.0, 0.0], vec![1.0, -1.0, 0.0]]);
    assert_eq!(outcome.original, lattice_reducer::Basis::new(sample("unimodular3.txt")).unwrap());
}

#[test]
fn test_wide_basis_leaves_trailing_components_alone() {
    let input = sample("wide4x5.txt");
    let outcome = reduce_lattice(input.clone(), &ReductionConfig::default()).unwrap();
    for (before, after) in input.iter().zip(outcome.reduced.vectors()) {
        assert_eq!(before[4], after[4]);
    }
}

#[test]
fn test_skipping_postprocess_changes_the_answer() {
    let config = ReductionConfig { postprocess: false, ..ReductionConfig::default() };

    let outcome = reduce_lattice(sample("knapsack2.txt"), &config).unwrap();
    assert!(outcome.postprocess.is_none());
    assert_eq!(outcome.shortest.index, 1);
    assert_eq!(outcome.shortest.vector, v(&[40.0, 1.0]));

    let outcome = reduce_lattice(sample("unimodular3.txt"), &config).unwrap();
    assert_eq!(outcome.shortest.index, 2);
    assert_eq!(outcome.shortest.vector, v(&[0.0, 0.0, 1.0]));
}

#[test]
fn test_zero_iteration_config_selects_from_input() {
    let config = ReductionConfig { lll_iterations: 0, greedy_iterations: 0, postprocess: true };
    let outcome = reduce_lattice(sample("knapsack2.txt"), &config).unwrap();
    assert_eq!(outcome.reduced, outcome.original);
    assert_eq!(outcome.shortest.index, 0);
}

#[test]
fn test_degenerate_inputs_fail_with_typed_errors() {
    let cases: Vec<(&str, LatticeError)> = vec![
        ("[0 0] [1 1]", LatticeError::DegenerateBasis { index: 0 }),
        // The greedy pass turns [2 2] into the zero vector, which is then projected onto.
        ("[1 1] [2 2]", LatticeError::DegenerateBasis { index: 1 }),
        ("[1 0] [0 1 0]", LatticeError::DimensionMismatch { index: 1, expected: 2, found: 3 }),
        ("[1] [2]", LatticeError::NonSquareBasis { vectors: 2, components: 1 }),
    ];

    for (input, expected) in cases {
        let vectors = parser::parse_vectors(input).unwrap();
        let err = reduce_lattice(vectors, &ReductionConfig::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<LatticeError>(), Some(&expected), "{}", input);
    }
}

#[test]
fn test_all_zero_basis_has_no_shortest_vector() {
    // A single zero vector is never used as a divisor, so the failure comes from selection.
    let vectors = parser::parse_vectors("[0]").unwrap();
    let err = reduce_lattice(vectors, &ReductionConfig::default()).unwrap_err();
    assert_eq!(err.downcast_ref::<LatticeError>(), Some(&LatticeError::NoShortestVector));
}
