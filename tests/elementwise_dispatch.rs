//! Integration tests for operator dispatch across scalars, sequences,
//! dense and sparse matrices.

use sparsewise::operators::{add, bit_and, equal, larger, multiply, subtract, unequal};
use sparsewise::{
    BinaryOperator, DenseMatrix, Element, ElementKind, Elementwise, ExactZero, MatrixError,
    Operand, OperandKind, Result, SparseMatrix, ZeroTest, binary_fn, zero_test_fn,
};

fn sparse_i64(rows: usize, cols: usize, entries: Vec<(usize, usize, i64)>) -> SparseMatrix<i64> {
    SparseMatrix::from_triplets(rows, cols, entries, &ExactZero).unwrap()
}

fn identity3() -> SparseMatrix<i64> {
    sparse_i64(3, 3, vec![(0, 0, 1), (1, 1, 1), (2, 2, 1)])
}

/// Every operand kind holding the same logical 2 x 3 values.
fn all_kinds(rows: Vec<Vec<i64>>) -> Vec<Operand<i64>> {
    let dense = DenseMatrix::from_rows(rows.clone()).unwrap();
    let sparse = SparseMatrix::from_dense(&dense, &ExactZero).unwrap();
    vec![
        Operand::rows(rows),
        Operand::from(dense),
        Operand::from(sparse),
    ]
}

// Scenarios

#[test]
fn test_dense_vector_and_scalar() {
    let d = Operand::from(DenseMatrix::from(vec![1i64, 12, 31]));
    let r = bit_and(&d, &Operand::scalar(42)).unwrap();
    let r = r.into_dense().expect("dense result");
    assert_eq!(r.size(), &[3]);
    assert_eq!(r.as_slice(), &[0, 8, 10]);
}

#[test]
fn test_identity_and_identity_stays_sparse() {
    let a = Operand::from(identity3());
    let r = bit_and(&a, &a).unwrap();
    let s = r.into_sparse().expect("sparse result");
    assert_eq!(s.size(), [3, 3]);
    assert_eq!(s.nnz(), 3);
    assert_eq!(s, identity3());
    assert!(s.is_canonical(&ExactZero));
}

#[test]
fn test_single_entry_larger_than_zero_is_dense_grid() {
    let s = Operand::from(sparse_i64(2, 2, vec![(0, 0, 5)]));
    let r = larger(&s, &Operand::scalar(0)).unwrap();
    let d = r.into_dense().expect("dense result");
    assert_eq!(d.size(), &[2, 2]);
    assert_eq!(d.to_nested(), sparsewise::Nested::matrix(vec![vec![true, false], vec![false, false]]));
}

#[test]
fn test_sparse_plus_dense() {
    let s = Operand::from(sparse_i64(2, 2, vec![(1, 1, 3)]));
    let d = Operand::from(DenseMatrix::from_rows(vec![vec![1i64, 2], vec![3, 4]]).unwrap());
    let r = add(&s, &d).unwrap();
    let r = r.into_dense().expect("dense result");
    assert_eq!(r, DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 7]]).unwrap());

    // mirrored pair gives the same grid
    let m = add(&d, &s).unwrap().into_dense().unwrap();
    assert_eq!(m, r);
}

#[test]
fn test_empty_sparse_and_dense_is_empty_sparse() {
    let s = Operand::from(SparseMatrix::<i64>::empty(2, 3));
    let d = Operand::from(DenseMatrix::from_rows(vec![vec![5i64, -1, 7], vec![9, 3, 2]]).unwrap());
    for (lhs, rhs) in [(&s, &d), (&d, &s)] {
        let r = bit_and(lhs, rhs).unwrap();
        let r = r.into_sparse().expect("sparse result");
        assert_eq!(r.size(), [2, 3]);
        assert_eq!(r.nnz(), 0);
    }
}

// Laws

#[test]
fn test_pattern_round_trip() {
    let rows = vec![vec![0i64, 4, 0], vec![-2, 0, 9]];
    let d = DenseMatrix::from_rows(rows).unwrap();
    let s = SparseMatrix::from_dense(&d, &ExactZero).unwrap();
    let back = SparseMatrix::from_dense(&s.to_dense(), &ExactZero).unwrap();
    assert_eq!(back, s);
    assert_eq!(back.row_index(), s.row_index());
    assert_eq!(back.column_pointers(), s.column_pointers());

    // results never store a zero
    let r = subtract(&Operand::from(s.clone()), &Operand::from(s)).unwrap();
    let r = r.into_sparse().unwrap();
    assert_eq!(r.nnz(), 0);
}

#[test]
fn test_commutative_lift_across_mirrored_pairs() {
    let left = all_kinds(vec![vec![6, 0, 3], vec![0, 12, 5]]);
    let right = all_kinds(vec![vec![3, 7, 0], vec![0, 4, 5]]);
    let scalar = Operand::scalar(7i64);

    for a in &left {
        for b in right.iter().chain(std::iter::once(&scalar)) {
            let ab = bit_and(a, b).unwrap().to_dense().unwrap();
            let ba = bit_and(b, a).unwrap().to_dense().unwrap();
            assert_eq!(ab, ba, "{:?} x {:?}", a.kind(), b.kind());

            let ab = add(a, b).unwrap().to_dense().unwrap();
            let ba = add(b, a).unwrap().to_dense().unwrap();
            assert_eq!(ab, ba, "{:?} x {:?}", a.kind(), b.kind());
        }
    }
}

#[test]
fn test_sparsity_preservation() {
    let s = Operand::from(sparse_i64(3, 2, vec![(0, 0, 5), (2, 1, 6)]));
    for k in [0i64, 1, 4, 255] {
        let r = bit_and(&s, &Operand::scalar(k)).unwrap();
        assert!(r.is_sparse(), "bit_and with {k}");
        let r = multiply(&Operand::scalar(k), &s).unwrap();
        assert!(r.is_sparse(), "multiply with {k}");
    }
    let other = Operand::from(sparse_i64(3, 2, vec![(2, 1, 3)]));
    assert!(bit_and(&s, &other).unwrap().is_sparse());
    assert!(add(&s, &other).unwrap().is_sparse());
}

#[test]
fn test_densification_fills_probe() {
    let s = Operand::from(sparse_i64(3, 3, vec![(1, 2, 4)]));
    let r = unequal(&s, &Operand::scalar(0)).unwrap();
    let d = r.into_dense().expect("dense result");
    for i in 0..3 {
        for j in 0..3 {
            let expected = (i, j) == (1, 2);
            assert_eq!(*d.get_2d(i, j), expected);
        }
    }

    let r = add(&s, &Operand::scalar(10)).unwrap().into_dense().unwrap();
    assert_eq!(r.as_slice(), &[10, 10, 10, 10, 10, 14, 10, 10, 10]);
}

#[test]
fn test_equivalence_across_every_kind_pair() {
    let lhs = all_kinds(vec![vec![1, 0, 3], vec![0, 0, 6]]);
    let rhs = all_kinds(vec![vec![0, 2, 3], vec![4, 0, 0]]);
    let expected_and = DenseMatrix::from_rows(vec![vec![0i64, 0, 3], vec![0, 0, 0]]).unwrap();
    let expected_eq =
        DenseMatrix::from_rows(vec![vec![false, false, true], vec![false, true, false]]).unwrap();

    for a in &lhs {
        for b in &rhs {
            assert_eq!(bit_and(a, b).unwrap().to_dense().unwrap(), expected_and);
            assert_eq!(equal(a, b).unwrap().to_dense().unwrap(), expected_eq);
        }
    }

    let scalar = Operand::scalar(3i64);
    let expected_scalar =
        DenseMatrix::from_rows(vec![vec![false, false, true], vec![false, false, false]]).unwrap();
    for a in &lhs {
        assert_eq!(equal(a, &scalar).unwrap().to_dense().unwrap(), expected_scalar);
        assert_eq!(equal(&scalar, a).unwrap().to_dense().unwrap(), expected_scalar);
    }
}

#[test]
fn test_sequence_only_calls_return_sequences() {
    let a = Operand::rows(vec![vec![1i64, 2], vec![3, 4]]);
    let r = add(&a, &Operand::scalar(1)).unwrap();
    assert_eq!(r.kind(), OperandKind::Sequence);
    let r = add(&a, &a).unwrap();
    assert_eq!(r, Operand::rows(vec![vec![2, 4], vec![6, 8]]));
}

#[test]
fn test_dimension_mismatch_errors() {
    let a = Operand::from(sparse_i64(2, 3, vec![]));
    let b = Operand::from(DenseMatrix::<i64>::zeros(vec![3, 2]));
    assert_eq!(
        add(&a, &b).unwrap_err(),
        MatrixError::ShapeMismatch {
            left: vec![2, 3],
            right: vec![3, 2]
        }
    );
    let c = Operand::from(sparse_i64(3, 3, vec![]));
    assert!(matches!(add(&a, &c), Err(MatrixError::ShapeMismatch { .. })));
}

#[test]
fn test_non_integer_bitwise() {
    let d = Operand::vector(vec![1.0f64, 2.5]);
    assert_eq!(
        bit_and(&d, &Operand::scalar(1.0)).unwrap_err(),
        MatrixError::NonIntegerOperand { function: "bitAnd" }
    );
}

// Collaborator-defined element type

/// Fraction `num / den` kept in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ratio {
    num: i64,
    den: i64,
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

impl Ratio {
    fn new(num: i64, den: i64) -> Self {
        let g = gcd(num, den).max(1);
        let sign = if den < 0 { -1 } else { 1 };
        Ratio {
            num: sign * num / g,
            den: sign * den / g,
        }
    }
}

impl Element for Ratio {
    fn implicit_zero() -> Self {
        Ratio { num: 0, den: 1 }
    }

    fn kind() -> ElementKind {
        ElementKind::Custom("ratio")
    }
}

fn ratio_add() -> impl BinaryOperator<Ratio, Output = Ratio> {
    binary_fn("add", |a: &Ratio, b: &Ratio| -> Result<Ratio> {
        Ok(Ratio::new(a.num * b.den + b.num * a.den, a.den * b.den))
    })
}

#[test]
fn test_custom_element_flows_through_sparse_paths() {
    let a = SparseMatrix::from_triplets(
        2,
        2,
        vec![(0, 0, Ratio::new(1, 3)), (1, 1, Ratio::new(1, 2))],
        &ExactZero,
    )
    .unwrap();
    let b = SparseMatrix::from_triplets(2, 2, vec![(0, 0, Ratio::new(-1, 3))], &ExactZero).unwrap();

    let r = Elementwise::new(ratio_add())
        .call(&Operand::from(a), &Operand::from(b))
        .unwrap();
    let s = r.into_sparse().expect("sparse result");
    assert_eq!(s.element_kind(), ElementKind::Custom("ratio"));
    // 1/3 + -1/3 cancels and is dropped
    assert_eq!(s.nnz(), 1);
    assert_eq!(s.get(1, 1).unwrap(), Ratio::new(1, 2));
}

#[test]
fn test_custom_zero_test_tolerance() {
    let tiny = zero_test_fn(|r: &Ratio| r.num.abs() * 1_000_000 < r.den);
    assert!(tiny.is_zero(&Ratio::new(1, 10_000_000)));

    let a = SparseMatrix::from_triplets(1, 2, vec![(0, 1, Ratio::new(1, 2))], &ExactZero).unwrap();
    let b = SparseMatrix::from_triplets(
        1,
        2,
        vec![(0, 1, Ratio::new(-4_999_999, 10_000_000))],
        &ExactZero,
    )
    .unwrap();
    let r = Elementwise::new(ratio_add())
        .with_zero_test(tiny)
        .call(&Operand::from(a), &Operand::from(b))
        .unwrap();
    assert_eq!(r.into_sparse().map(|s| s.nnz()), Some(0));
}
