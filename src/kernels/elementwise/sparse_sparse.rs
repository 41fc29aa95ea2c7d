// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Sparse-Sparse Strategy
//!
//! Column-synchronised merge walk over two sparse matrices.
//!
//! For each column both row lists are already sorted, so two cursors advance
//! together and every row present in either operand is visited once, in
//! increasing order. Each visit evaluates `op(a_or_zero, b_or_zero)`.
//! Work is `O(nnz_a + nnz_b)` per column, never `O(rows)`.
//!
//! Rows absent from both operands evaluate to `op(0, 0)`. That value is
//! probed once up front:
//! - zero: the result is sparse and absent rows are never visited.
//! - non-zero, e.g., equality: the result is dense, filled with the probe
//! and overwritten at every merged coordinate.
//!
//! Zero-annihilating operators only evaluate rows present in both operands.

use std::cmp::Ordering;

use crate::enums::error::{MatrixError, Result};
use crate::enums::operand::Operand;
use crate::structs::dense::DenseMatrix;
use crate::structs::sparse::SparseMatrix;
use crate::structs::sparse_builder::SparseBuilder;
use crate::traits::element::Element;
use crate::traits::operator::BinaryOperator;
use crate::traits::zero_test::ZeroTest;

/// Which operand(s) hold an explicit entry at a merged coordinate.
enum Hit<'a, T> {
    Left(&'a T),
    Right(&'a T),
    Both(&'a T, &'a T),
}

/// Walks column `j` of both operands in increasing row order.
///
/// `visit` receives every row present in at least one operand.
fn merge_column<'a, T, F>(
    lhs: &'a SparseMatrix<T>,
    rhs: &'a SparseMatrix<T>,
    j: usize,
    mut visit: F,
) -> Result<()>
where
    T: Element,
    F: FnMut(usize, Hit<'a, T>) -> Result<()>,
{
    let mut a = lhs.column(j).peekable();
    let mut b = rhs.column(j).peekable();
    loop {
        let ordering = match (a.peek(), b.peek()) {
            (Some((ra, _)), Some((rb, _))) => ra.cmp(rb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => return Ok(()),
        };
        match ordering {
            Ordering::Less => {
                if let Some((row, va)) = a.next() {
                    visit(row, Hit::Left(va))?;
                }
            }
            Ordering::Greater => {
                if let Some((row, vb)) = b.next() {
                    visit(row, Hit::Right(vb))?;
                }
            }
            Ordering::Equal => {
                if let (Some((row, va)), Some((_, vb))) = (a.next(), b.next()) {
                    visit(row, Hit::Both(va, vb))?;
                }
            }
        }
    }
}

/// Applies `op` elementwise over two sparse matrices of identical dimensions.
///
/// Returns `Operand::Sparse` when `op(0, 0)` is zero, `Operand::Dense` when it
/// is not or when the operator `prefers_dense`.
pub fn sparse_sparse<T, O, Z>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
    op: &O,
    zero: &Z,
) -> Result<Operand<O::Output>>
where
    T: Element,
    O: BinaryOperator<T> + ?Sized,
    Z: ZeroTest<O::Output> + ?Sized,
{
    if lhs.size() != rhs.size() {
        return Err(MatrixError::ShapeMismatch {
            left: lhs.size().to_vec(),
            right: rhs.size().to_vec(),
        });
    }
    let (rows, columns) = (lhs.rows(), lhs.columns());
    let implicit = T::implicit_zero();
    let probe = op.apply(&implicit, &implicit)?;

    if zero.is_zero(&probe) && !op.prefers_dense() {
        let intersect = op.zero_annihilates();
        log::trace!(
            "{}: merging {} + {} entries ({})",
            op.name(),
            lhs.nnz(),
            rhs.nnz(),
            if intersect { "intersection" } else { "union" }
        );
        let capacity = if intersect {
            lhs.nnz().min(rhs.nnz())
        } else {
            lhs.nnz() + rhs.nnz()
        };
        let mut builder = SparseBuilder::with_capacity(rows, columns, capacity);
        for j in 0..columns {
            merge_column(lhs, rhs, j, |row, hit| {
                let value = match hit {
                    Hit::Both(a, b) => op.apply(a, b)?,
                    _ if intersect => return Ok(()),
                    Hit::Left(a) => op.apply(a, &implicit)?,
                    Hit::Right(b) => op.apply(&implicit, b)?,
                };
                builder.push_nonzero(row, value, zero);
                Ok(())
            })?;
            builder.finish_column();
        }
        return Ok(Operand::Sparse(builder.build()));
    }

    log::debug!(
        "{}: op(0, 0) is non-zero, densifying {} x {} result",
        op.name(),
        rows,
        columns
    );
    let mut out = DenseMatrix::filled(vec![rows, columns], probe);
    for j in 0..columns {
        merge_column(lhs, rhs, j, |row, hit| {
            out.data[row * columns + j] = match hit {
                Hit::Both(a, b) => op.apply(a, b)?,
                Hit::Left(a) => op.apply(a, &implicit)?,
                Hit::Right(b) => op.apply(&implicit, b)?,
            };
            Ok(())
        })?;
    }
    Ok(Operand::Dense(out))
}
