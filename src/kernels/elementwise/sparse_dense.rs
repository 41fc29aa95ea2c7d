// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Sparse-Dense Strategy
//!
//! Applies an operator between a sparse matrix and a dense matrix of the
//! same dimensions. Covers both argument orders through [`ArgOrder`].
//!
//! The dense operand contributes a value at every coordinate, so the result
//! is dense: phase one fills `op(0, d)` across the grid, phase two overwrites
//! the explicit coordinates with `op(s, d)`. No zero test runs per grid cell.
//!
//! Zero-annihilating operators are the exception: `op(0, d)` is zero
//! everywhere, so only the explicit entries are evaluated and the result
//! stays sparse.

use crate::enums::error::{MatrixError, Result};
use crate::enums::operand::Operand;
use crate::kernels::elementwise::dense_scalar;
use crate::structs::dense::DenseMatrix;
use crate::structs::sparse::SparseMatrix;
use crate::structs::sparse_builder::SparseBuilder;
use crate::traits::element::Element;
use crate::traits::operator::{ArgOrder, BinaryOperator};
use crate::traits::zero_test::ZeroTest;

/// Applies `op` between `sparse` and `dense`.
///
/// `order` is `Forward` when the sparse matrix was the caller's left argument.
pub fn sparse_dense<T, O, Z>(
    sparse: &SparseMatrix<T>,
    dense: &DenseMatrix<T>,
    op: &O,
    zero: &Z,
    order: ArgOrder,
) -> Result<Operand<O::Output>>
where
    T: Element,
    O: BinaryOperator<T> + ?Sized,
    Z: ZeroTest<O::Output> + ?Sized,
{
    let (rows, columns) = match dense.dims_2d() {
        Some(dims) if dims == (sparse.rows(), sparse.columns()) => dims,
        _ => {
            let sparse_size = sparse.size().to_vec();
            let dense_size = dense.size().to_vec();
            let (left, right) = match order {
                ArgOrder::Forward => (sparse_size, dense_size),
                ArgOrder::Reversed => (dense_size, sparse_size),
            };
            return Err(MatrixError::ShapeMismatch { left, right });
        }
    };

    if op.zero_annihilates() && !op.prefers_dense() {
        log::trace!(
            "{}: zero-annihilating, evaluating {} explicit entries only",
            op.name(),
            sparse.nnz()
        );
        let mut builder = SparseBuilder::with_capacity(rows, columns, sparse.nnz());
        for j in 0..columns {
            for (i, v) in sparse.column(j) {
                builder.push_nonzero(i, order.apply(op, v, dense.get_2d(i, j))?, zero);
            }
            builder.finish_column();
        }
        return Ok(Operand::Sparse(builder.build()));
    }

    // Phase one: implicit zero against every dense value
    let implicit = T::implicit_zero();
    let mut out = dense_scalar(dense, &implicit, op, order.flip())?;

    // Phase two: explicit entries
    for (i, j, v) in sparse.iter() {
        out.data[i * columns + j] = order.apply(op, v, dense.get_2d(i, j))?;
    }
    Ok(Operand::Dense(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::operator::binary_fn;
    use crate::traits::zero_test::ExactZero;

    fn entry_at_1_1() -> SparseMatrix<i32> {
        SparseMatrix::from_triplets(2, 2, vec![(1, 1, 3)], &ExactZero).unwrap()
    }

    fn grid() -> DenseMatrix<i32> {
        DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap()
    }

    #[test]
    fn test_addition_fills_then_overwrites() {
        let add = binary_fn("add", |x: &i32, y: &i32| Ok(x + y));
        let r = sparse_dense(&entry_at_1_1(), &grid(), &add, &ExactZero, ArgOrder::Forward)
            .unwrap();
        let d = r.into_dense().expect("dense result");
        assert_eq!(d.as_slice(), &[1, 2, 3, 7]);
    }

    #[test]
    fn test_reversed_order_for_non_commutative() {
        let sub = binary_fn("subtract", |x: &i32, y: &i32| Ok(x - y));
        // sparse - dense
        let fwd = sparse_dense(&entry_at_1_1(), &grid(), &sub, &ExactZero, ArgOrder::Forward)
            .unwrap()
            .into_dense()
            .unwrap();
        assert_eq!(fwd.as_slice(), &[-1, -2, -3, -1]);
        // dense - sparse
        let rev = sparse_dense(&entry_at_1_1(), &grid(), &sub, &ExactZero, ArgOrder::Reversed)
            .unwrap()
            .into_dense()
            .unwrap();
        assert_eq!(rev.as_slice(), &[1, 2, 3, 1]);
    }

    #[test]
    fn test_zero_annihilating_stays_sparse() {
        let mul = binary_fn("multiply", |x: &i32, y: &i32| Ok(x * y)).zero_annihilating();
        let r = sparse_dense(&entry_at_1_1(), &grid(), &mul, &ExactZero, ArgOrder::Forward)
            .unwrap();
        let s = r.into_sparse().expect("sparse result");
        assert_eq!(s.nnz(), 1);
        assert_eq!(s.get(1, 1).unwrap(), 12);
    }

    #[test]
    fn test_zero_annihilating_drops_new_zeros() {
        let mul = binary_fn("multiply", |x: &i32, y: &i32| Ok(x * y)).zero_annihilating();
        let dense = DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 0]]).unwrap();
        let s = sparse_dense(&entry_at_1_1(), &dense, &mul, &ExactZero, ArgOrder::Reversed)
            .unwrap()
            .into_sparse()
            .unwrap();
        assert_eq!(s.nnz(), 0);
    }

    #[test]
    fn test_shape_mismatch_reports_caller_order() {
        let add = binary_fn("add", |x: &i32, y: &i32| Ok(x + y));
        let dense = DenseMatrix::<i32>::zeros(vec![3, 2]);
        let err = sparse_dense(&entry_at_1_1(), &dense, &add, &ExactZero, ArgOrder::Reversed)
            .unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                left: vec![3, 2],
                right: vec![2, 2]
            }
        );
    }

    #[test]
    fn test_rank_mismatch() {
        let add = binary_fn("add", |x: &i32, y: &i32| Ok(x + y));
        let dense = DenseMatrix::from(vec![1, 2, 3, 4]);
        assert!(matches!(
            sparse_dense(&entry_at_1_1(), &dense, &add, &ExactZero, ArgOrder::Forward),
            Err(MatrixError::ShapeMismatch { .. })
        ));
    }
}
