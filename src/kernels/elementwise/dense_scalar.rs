// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Dense-Scalar Strategy
//!
//! Broadcasts a scalar against every element of a dense matrix.

use crate::enums::error::Result;
use crate::kernels::elementwise::map_slice;
use crate::structs::dense::DenseMatrix;
use crate::traits::element::Element;
use crate::traits::operator::{ArgOrder, BinaryOperator};

/// Applies `op` between each element of `dense` and `scalar`.
///
/// `order` tells whether the matrix was the caller's left or right argument.
pub fn dense_scalar<T, O>(
    dense: &DenseMatrix<T>,
    scalar: &T,
    op: &O,
    order: ArgOrder,
) -> Result<DenseMatrix<O::Output>>
where
    T: Element,
    O: BinaryOperator<T> + ?Sized,
{
    let data = map_slice(dense.as_slice(), |v| order.apply(op, v, scalar))?;
    Ok(DenseMatrix {
        size: dense.size().to_vec(),
        data,
    })
}
