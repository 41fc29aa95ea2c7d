// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Dense-Dense Strategy
//!
//! Elementwise application over two dense matrices of identical size.

use crate::enums::error::{MatrixError, Result};
use crate::kernels::elementwise::zip_slices;
use crate::structs::dense::DenseMatrix;
use crate::traits::element::Element;
use crate::traits::operator::BinaryOperator;

/// Applies `op` to every pair of corresponding elements.
///
/// Sizes must match exactly. No broadcasting is performed, so a `[3]`
/// vector against a `[1, 3]` matrix is a `ShapeMismatch`.
pub fn dense_dense<T, O>(
    lhs: &DenseMatrix<T>,
    rhs: &DenseMatrix<T>,
    op: &O,
) -> Result<DenseMatrix<O::Output>>
where
    T: Element,
    O: BinaryOperator<T> + ?Sized,
{
    if lhs.size() != rhs.size() {
        return Err(MatrixError::ShapeMismatch {
            left: lhs.size().to_vec(),
            right: rhs.size().to_vec(),
        });
    }
    let data = zip_slices(lhs.as_slice(), rhs.as_slice(), |a, b| op.apply(a, b))?;
    Ok(DenseMatrix {
        size: lhs.size().to_vec(),
        data,
    })
}
