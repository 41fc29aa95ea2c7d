// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Unary Strategy
//!
//! Lifts a one-argument function over dense and sparse matrices.
//! Sparse operands use the same single probe as the sparse-scalar strategy:
//! `f(0)` decides whether implicit coordinates stay implicit.

use crate::enums::error::Result;
use crate::enums::operand::Operand;
use crate::kernels::elementwise::map_slice;
use crate::structs::dense::DenseMatrix;
use crate::structs::sparse::SparseMatrix;
use crate::structs::sparse_builder::SparseBuilder;
use crate::traits::element::Element;
use crate::traits::operator::UnaryOperator;
use crate::traits::zero_test::ZeroTest;

/// Applies `op` to every element of a dense matrix.
pub fn unary_dense<T, O>(dense: &DenseMatrix<T>, op: &O) -> Result<DenseMatrix<O::Output>>
where
    T: Element,
    O: UnaryOperator<T> + ?Sized,
{
    let data = map_slice(dense.as_slice(), |v| op.apply(v))?;
    Ok(DenseMatrix {
        size: dense.size().to_vec(),
        data,
    })
}

/// Applies `op` to every element of a sparse matrix.
///
/// Sparse when `op(0)` is zero, dense filled with `op(0)` otherwise.
pub fn unary_sparse<T, O, Z>(
    sparse: &SparseMatrix<T>,
    op: &O,
    zero: &Z,
) -> Result<Operand<O::Output>>
where
    T: Element,
    O: UnaryOperator<T> + ?Sized,
    Z: ZeroTest<O::Output> + ?Sized,
{
    let probe = op.apply(&T::implicit_zero())?;
    if zero.is_zero(&probe) {
        let mut builder = SparseBuilder::with_capacity(sparse.rows(), sparse.columns(), sparse.nnz());
        for j in 0..sparse.columns() {
            for (i, v) in sparse.column(j) {
                builder.push_nonzero(i, op.apply(v)?, zero);
            }
            builder.finish_column();
        }
        return Ok(Operand::Sparse(builder.build()));
    }

    log::debug!("{}: f(0) is non-zero, densifying", op.name());
    let ncols = sparse.columns();
    let mut out = DenseMatrix::filled(vec![sparse.rows(), ncols], probe);
    for (i, j, v) in sparse.iter() {
        out.data[i * ncols + j] = op.apply(v)?;
    }
    Ok(Operand::Dense(out))
}
