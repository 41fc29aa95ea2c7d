// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Dispatch
//!
//! Routes an operator call to its traversal strategy.
//!
//! Both operands are classified into an `(OperandKind, OperandKind)` pair and
//! matched exhaustively. Mirrored pairs reuse the forward strategy with
//! [`ArgOrder::Reversed`].
//!
//! | lhs \ rhs | Scalar | Sequence | Dense | Sparse |
//! |-----------|--------|----------|-------|--------|
//! | Scalar    | direct | dense_scalar (rev) | dense_scalar (rev) | sparse_scalar (rev) |
//! | Sequence  | dense_scalar | dense_dense | dense_dense | sparse_dense (rev) |
//! | Dense     | dense_scalar | dense_dense | dense_dense | sparse_dense (rev) |
//! | Sparse    | sparse_scalar | sparse_dense | sparse_dense | sparse_sparse |
//!
//! Sequences are materialised as dense matrices first. The result goes back
//! to sequence form when no matrix object took part in the call.

use std::fmt;

use crate::enums::error::{MatrixError, Result};
use crate::enums::nested::Nested;
use crate::enums::operand::{Operand, OperandKind};
use crate::kernels::elementwise::{
    dense_dense, dense_scalar, sparse_dense, sparse_scalar, sparse_sparse, unary_dense,
    unary_sparse,
};
use crate::kernels::routing::coercion::{into_sequence, materialise, unwraps_to_sequence};
use crate::structs::dense::DenseMatrix;
use crate::traits::element::Element;
use crate::traits::operator::{ArgOrder, BinaryOperator, UnaryOperator};
use crate::traits::shape::Shape;
use crate::traits::zero_test::{ExactZero, ZeroTest};

/// # Elementwise
///
/// A binary operator lifted over scalars, sequences, dense and sparse
/// matrices.
///
/// `Z` decides which results count as zero when a strategy builds a sparse
/// output. Defaults to [`ExactZero`].
///
/// ## Example
/// ```
/// use sparsewise::{Elementwise, Operand, SparseMatrix, ExactZero};
/// use sparsewise::traits::operator::binary_fn;
///
/// let add = Elementwise::new(binary_fn("add", |a: &i64, b: &i64| Ok(a + b)));
/// let s = SparseMatrix::from_triplets(2, 2, vec![(0, 1, 5)], &ExactZero).unwrap();
/// let out = add.call(&Operand::from(s), &Operand::scalar(0)).unwrap();
/// assert!(out.is_sparse());
/// ```
#[derive(Clone)]
pub struct Elementwise<O, Z = ExactZero> {
    op: O,
    zero: Z,
}

impl<O> Elementwise<O, ExactZero> {
    /// Lifts `op` using exact equality with the implicit zero.
    pub fn new(op: O) -> Self {
        Elementwise {
            op,
            zero: ExactZero,
        }
    }
}

impl<O, Z> Elementwise<O, Z> {
    /// Replaces the zero test used when building sparse results.
    pub fn with_zero_test<Z2>(self, zero: Z2) -> Elementwise<O, Z2> {
        Elementwise { op: self.op, zero }
    }

    /// The lifted scalar operator.
    #[inline]
    pub fn operator(&self) -> &O {
        &self.op
    }

    /// Applies the operator elementwise to `lhs` and `rhs`.
    ///
    /// Inputs are never mutated. Fails with `ShapeMismatch` when matrix
    /// dimensions disagree and `UnsupportedOperandKind` when the pair has no
    /// strategy, e.g. a sparse matrix against a non-2-D dense operand.
    pub fn call<T>(&self, lhs: &Operand<T>, rhs: &Operand<T>) -> Result<Operand<O::Output>>
    where
        T: Element,
        O: BinaryOperator<T>,
        Z: ZeroTest<O::Output>,
    {
        use ArgOrder::{Forward, Reversed};

        let op = &self.op;
        let zero = &self.zero;
        let (lk, rk) = (lhs.kind(), rhs.kind());
        log::trace!(
            "{}: ({lk}, {rk}) with shapes {:?} and {:?}",
            op.name(),
            lhs.dims(),
            rhs.dims()
        );

        let result = match (lhs, rhs) {
            (Operand::Scalar(a), Operand::Scalar(b)) => {
                route(op.name(), "direct", lk, rk);
                Operand::Scalar(op.apply(a, b)?)
            }

            // Scalar row
            (Operand::Scalar(s), Operand::Sequence(n)) => {
                route(op.name(), "dense_scalar", lk, rk);
                let dense = materialise(n, lk, rk)?;
                Operand::Dense(dense_scalar(&dense, s, op, Reversed)?)
            }
            (Operand::Scalar(s), Operand::Dense(d)) => {
                route(op.name(), "dense_scalar", lk, rk);
                Operand::Dense(dense_scalar(d, s, op, Reversed)?)
            }
            (Operand::Scalar(s), Operand::Sparse(m)) => {
                route(op.name(), "sparse_scalar", lk, rk);
                sparse_scalar(m, s, op, zero, Reversed)?
            }

            // Sequence row
            (Operand::Sequence(n), Operand::Scalar(s)) => {
                route(op.name(), "dense_scalar", lk, rk);
                let dense = materialise(n, lk, rk)?;
                Operand::Dense(dense_scalar(&dense, s, op, Forward)?)
            }
            (Operand::Sequence(a), Operand::Sequence(b)) => {
                route(op.name(), "dense_dense", lk, rk);
                let (a, b) = (materialise(a, lk, rk)?, materialise(b, lk, rk)?);
                Operand::Dense(dense_dense(&a, &b, op)?)
            }
            (Operand::Sequence(n), Operand::Dense(d)) => {
                route(op.name(), "dense_dense", lk, rk);
                let a = materialise(n, lk, rk)?;
                Operand::Dense(dense_dense(&a, d, op)?)
            }
            (Operand::Sequence(n), Operand::Sparse(m)) => {
                route(op.name(), "sparse_dense", lk, rk);
                let a = require_2d(materialise(n, lk, rk)?, lk, rk)?;
                sparse_dense(m, &a, op, zero, Reversed)?
            }

            // Dense row
            (Operand::Dense(d), Operand::Scalar(s)) => {
                route(op.name(), "dense_scalar", lk, rk);
                Operand::Dense(dense_scalar(d, s, op, Forward)?)
            }
            (Operand::Dense(d), Operand::Sequence(n)) => {
                route(op.name(), "dense_dense", lk, rk);
                let b = materialise(n, lk, rk)?;
                Operand::Dense(dense_dense(d, &b, op)?)
            }
            (Operand::Dense(a), Operand::Dense(b)) => {
                route(op.name(), "dense_dense", lk, rk);
                Operand::Dense(dense_dense(a, b, op)?)
            }
            (Operand::Dense(d), Operand::Sparse(m)) => {
                route(op.name(), "sparse_dense", lk, rk);
                let d = check_2d(d, lk, rk)?;
                sparse_dense(m, d, op, zero, Reversed)?
            }

            // Sparse row
            (Operand::Sparse(m), Operand::Scalar(s)) => {
                route(op.name(), "sparse_scalar", lk, rk);
                sparse_scalar(m, s, op, zero, Forward)?
            }
            (Operand::Sparse(m), Operand::Sequence(n)) => {
                route(op.name(), "sparse_dense", lk, rk);
                let b = require_2d(materialise(n, lk, rk)?, lk, rk)?;
                sparse_dense(m, &b, op, zero, Forward)?
            }
            (Operand::Sparse(m), Operand::Dense(d)) => {
                route(op.name(), "sparse_dense", lk, rk);
                let d = check_2d(d, lk, rk)?;
                sparse_dense(m, d, op, zero, Forward)?
            }
            (Operand::Sparse(a), Operand::Sparse(b)) => {
                route(op.name(), "sparse_sparse", lk, rk);
                sparse_sparse(a, b, op, zero)?
            }
        };

        if unwraps_to_sequence(lk, rk) {
            Ok(into_sequence(result))
        } else {
            Ok(result)
        }
    }
}

impl<O: fmt::Debug, Z: fmt::Debug> fmt::Debug for Elementwise<O, Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Elementwise")
            .field("op", &self.op)
            .field("zero", &self.zero)
            .finish()
    }
}

#[inline]
fn route(name: &str, strategy: &str, lk: OperandKind, rk: OperandKind) {
    log::debug!("{name}: ({lk}, {rk}) -> {strategy}");
}

/// Sparse operands only pair with two-dimensional dense operands.
fn check_2d<T: Element>(
    dense: &DenseMatrix<T>,
    lk: OperandKind,
    rk: OperandKind,
) -> Result<&DenseMatrix<T>> {
    if dense.rank() == 2 {
        Ok(dense)
    } else {
        Err(MatrixError::UnsupportedOperandKind {
            left: lk,
            right: rk,
            message: Some(format!(
                "sparse operands require a two-dimensional dense operand, found size {:?}",
                dense.size()
            )),
        })
    }
}

fn require_2d<T: Element>(
    dense: DenseMatrix<T>,
    lk: OperandKind,
    rk: OperandKind,
) -> Result<DenseMatrix<T>> {
    check_2d(&dense, lk, rk)?;
    Ok(dense)
}

/// Applies `op` elementwise to `lhs` and `rhs` with exact zero tests.
///
/// Shorthand for `Elementwise::new(op).call(lhs, rhs)`.
pub fn elementwise<T, O>(op: O, lhs: &Operand<T>, rhs: &Operand<T>) -> Result<Operand<O::Output>>
where
    T: Element,
    O: BinaryOperator<T>,
{
    Elementwise::new(op).call(lhs, rhs)
}

/// Lifts a unary operator over any operand kind.
///
/// Scalars map to scalars, sequences to sequences and dense matrices to
/// dense matrices. Sparse operands stay sparse when `op(0)` is zero and are
/// densified otherwise.
pub fn map_unary<T, U>(op: &U, operand: &Operand<T>) -> Result<Operand<U::Output>>
where
    T: Element,
    U: UnaryOperator<T> + ?Sized,
{
    map_unary_with(op, operand, &ExactZero)
}

/// [`map_unary`] with a caller-supplied zero test.
pub fn map_unary_with<T, U, Z>(op: &U, operand: &Operand<T>, zero: &Z) -> Result<Operand<U::Output>>
where
    T: Element,
    U: UnaryOperator<T> + ?Sized,
    Z: ZeroTest<U::Output> + ?Sized,
{
    log::trace!("{}: unary over {}", op.name(), operand.kind());
    match operand {
        Operand::Scalar(v) => Ok(Operand::Scalar(op.apply(v)?)),
        Operand::Sequence(Nested::Leaf(v)) => Ok(Operand::Sequence(Nested::Leaf(op.apply(v)?))),
        Operand::Sequence(n) => {
            let kind = operand.kind();
            let dense = materialise(n, kind, kind)?;
            Ok(Operand::Sequence(unary_dense(&dense, op)?.into_nested()))
        }
        Operand::Dense(d) => Ok(Operand::Dense(unary_dense(d, op)?)),
        Operand::Sparse(m) => unary_sparse(m, op, zero),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::sparse::SparseMatrix;
    use crate::traits::operator::{binary_fn, unary_fn};

    fn add() -> impl BinaryOperator<i32, Output = i32> {
        binary_fn("add", |a: &i32, b: &i32| Ok(a + b))
    }

    fn sub() -> impl BinaryOperator<i32, Output = i32> {
        binary_fn("subtract", |a: &i32, b: &i32| Ok(a - b))
    }

    fn sparse() -> Operand<i32> {
        Operand::from(SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (1, 1, 2)], &ExactZero).unwrap())
    }

    #[test]
    fn test_scalar_scalar_direct() {
        let r = elementwise(add(), &Operand::scalar(2), &Operand::scalar(3)).unwrap();
        assert_eq!(r, Operand::scalar(5));
    }

    #[test]
    fn test_sequence_results_unwrap() {
        let a = Operand::rows(vec![vec![1, 2], vec![3, 4]]);
        let r = elementwise(add(), &a, &a).unwrap();
        assert_eq!(r, Operand::rows(vec![vec![2, 4], vec![6, 8]]));

        let r = elementwise(sub(), &Operand::scalar(10), &Operand::vector(vec![1, 2])).unwrap();
        assert_eq!(r, Operand::vector(vec![9, 8]));
    }

    #[test]
    fn test_matrix_participation_keeps_matrix() {
        let a = Operand::rows(vec![vec![1, 2], vec![3, 4]]);
        let d = Operand::from(DenseMatrix::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap());
        let r = elementwise(add(), &a, &d).unwrap();
        assert!(r.is_dense());

        let r = elementwise(add(), &a, &sparse()).unwrap();
        assert_eq!(r.to_dense().unwrap().as_slice(), &[2, 2, 3, 6]);
    }

    #[test]
    fn test_mirrored_pairs_keep_argument_order() {
        let fwd = elementwise(sub(), &sparse(), &Operand::scalar(5)).unwrap();
        let rev = elementwise(sub(), &Operand::scalar(5), &sparse()).unwrap();
        assert_eq!(fwd.to_dense().unwrap().as_slice(), &[-4, -5, -5, -3]);
        assert_eq!(rev.to_dense().unwrap().as_slice(), &[4, 5, 5, 3]);
    }

    #[test]
    fn test_sparse_against_non_2d_dense() {
        let v = Operand::from(DenseMatrix::from(vec![1, 2, 3, 4]));
        let err = elementwise(add(), &v, &sparse()).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::UnsupportedOperandKind {
                left: OperandKind::Dense,
                right: OperandKind::Sparse,
                ..
            }
        ));

        let seq = Operand::vector(vec![1, 2, 3, 4]);
        assert!(matches!(
            elementwise(add(), &sparse(), &seq),
            Err(MatrixError::UnsupportedOperandKind { .. })
        ));
    }

    #[test]
    fn test_leaf_sequence_rejected() {
        let leaf = Operand::Sequence(Nested::Leaf(1));
        assert!(matches!(
            elementwise(add(), &leaf, &Operand::scalar(1)),
            Err(MatrixError::UnsupportedOperandKind { .. })
        ));
    }

    #[test]
    fn test_shape_mismatch_propagates() {
        let a = Operand::vector(vec![1, 2, 3]);
        let b = Operand::vector(vec![1, 2]);
        assert!(matches!(
            elementwise(add(), &a, &b),
            Err(MatrixError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_operator_errors_propagate() {
        let checked = binary_fn("div", |a: &i32, b: &i32| {
            a.checked_div(*b)
                .ok_or_else(|| MatrixError::InvalidShape("division by zero".into()))
        });
        assert!(elementwise(checked, &Operand::vector(vec![1]), &Operand::scalar(0)).is_err());
    }

    #[test]
    fn test_map_unary_kinds() {
        let double = unary_fn("double", |x: &i32| Ok(x * 2));
        assert_eq!(map_unary(&double, &Operand::scalar(4)).unwrap(), Operand::scalar(8));
        assert_eq!(
            map_unary(&double, &Operand::vector(vec![1, 2])).unwrap(),
            Operand::vector(vec![2, 4])
        );
        assert!(map_unary(&double, &sparse()).unwrap().is_sparse());

        let inc = unary_fn("inc", |x: &i32| Ok(x + 1));
        let r = map_unary(&inc, &sparse()).unwrap();
        assert_eq!(r.into_dense().unwrap().as_slice(), &[2, 1, 1, 3]);
    }

    #[test]
    fn test_with_zero_test() {
        use crate::traits::zero_test::ApproxZero;
        let sub = binary_fn("subtract", |a: &f64, b: &f64| Ok(a - b));
        let a = SparseMatrix::from_triplets(1, 2, vec![(0, 0, 1.0), (0, 1, 2.0)], &ExactZero).unwrap();
        let b = SparseMatrix::from_triplets(1, 2, vec![(0, 0, 1.0 + 1e-15), (0, 1, 1.0)], &ExactZero)
            .unwrap();
        let r = Elementwise::new(sub)
            .with_zero_test(ApproxZero::new(1e-9))
            .call(&Operand::from(a), &Operand::from(b))
            .unwrap()
            .into_sparse()
            .unwrap();
        assert_eq!(r.nnz(), 1);
        assert_eq!(r.get(0, 1).unwrap(), 1.0);
    }
}
