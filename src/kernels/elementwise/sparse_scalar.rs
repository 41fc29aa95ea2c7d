// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Sparse-Scalar Strategy
//!
//! Applies an operator between a sparse matrix and a scalar.
//!
//! A single probe, `op(0, s)` in the caller's argument order, decides the
//! output layout:
//! - probe is zero: implicit coordinates stay zero, so only the explicit
//! entries are recomputed and the result stays sparse, costing `O(nnz)`.
//! - probe is non-zero: every implicit coordinate takes the probe value, so
//! the result is dense, filled with the probe and overwritten at the
//! explicit coordinates.

use crate::enums::error::Result;
use crate::enums::operand::Operand;
use crate::structs::dense::DenseMatrix;
use crate::structs::sparse::SparseMatrix;
use crate::structs::sparse_builder::SparseBuilder;
use crate::traits::element::Element;
use crate::traits::operator::{ArgOrder, BinaryOperator};
use crate::traits::zero_test::ZeroTest;

/// Applies `op` between `sparse` and `scalar`.
///
/// Returns `Operand::Sparse` when sparsity survives the operator and
/// `Operand::Dense` otherwise, or when the operator `prefers_dense`.
pub fn sparse_scalar<T, O, Z>(
    sparse: &SparseMatrix<T>,
    scalar: &T,
    op: &O,
    zero: &Z,
    order: ArgOrder,
) -> Result<Operand<O::Output>>
where
    T: Element,
    O: BinaryOperator<T> + ?Sized,
    Z: ZeroTest<O::Output> + ?Sized,
{
    let probe = order.apply(op, &T::implicit_zero(), scalar)?;

    if zero.is_zero(&probe) && !op.prefers_dense() {
        log::trace!(
            "{}: zero probe, recomputing {} explicit entries",
            op.name(),
            sparse.nnz()
        );
        let mut builder = SparseBuilder::with_capacity(sparse.rows(), sparse.columns(), sparse.nnz());
        for j in 0..sparse.columns() {
            for (i, v) in sparse.column(j) {
                builder.push_nonzero(i, order.apply(op, v, scalar)?, zero);
            }
            builder.finish_column();
        }
        return Ok(Operand::Sparse(builder.build()));
    }

    log::debug!(
        "{}: densifying {} x {} sparse operand ({} implicit coordinates)",
        op.name(),
        sparse.rows(),
        sparse.columns(),
        sparse.rows() * sparse.columns() - sparse.nnz()
    );
    let mut out = DenseMatrix::filled(vec![sparse.rows(), sparse.columns()], probe);
    let ncols = sparse.columns();
    for (i, j, v) in sparse.iter() {
        out.data[i * ncols + j] = order.apply(op, v, scalar)?;
    }
    Ok(Operand::Dense(out))
}
