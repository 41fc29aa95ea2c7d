// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Coercion
//!
//! Converts plain nested sequences into dense matrices before dispatch, and
//! converts results back when no matrix object took part in the call.

use crate::enums::error::{MatrixError, Result};
use crate::enums::nested::Nested;
use crate::enums::operand::{Operand, OperandKind};
use crate::structs::dense::DenseMatrix;
use crate::traits::element::Element;

/// Materialises a sequence operand as a dense matrix.
///
/// `left` and `right` are the kinds of the surrounding call, reported if the
/// sequence is a bare leaf. Ragged input fails with `InvalidShape`.
pub fn materialise<T: Element>(
    nested: &Nested<T>,
    left: OperandKind,
    right: OperandKind,
) -> Result<DenseMatrix<T>> {
    if nested.is_leaf() {
        return Err(MatrixError::UnsupportedOperandKind {
            left,
            right,
            message: Some("a sequence must have at least one dimension".into()),
        });
    }
    DenseMatrix::from_nested(nested.clone())
}

/// True when the result of a call on `(left, right)` is returned as a plain
/// sequence rather than a matrix.
///
/// Holds when both operands are sequences, or a sequence meets a scalar.
#[inline]
pub fn unwraps_to_sequence(left: OperandKind, right: OperandKind) -> bool {
    use OperandKind::*;
    matches!(
        (left, right),
        (Sequence, Sequence) | (Sequence, Scalar) | (Scalar, Sequence)
    )
}

/// Converts a matrix result into its plain nested-sequence form.
///
/// Scalars and sequences pass through unchanged.
pub fn into_sequence<T: Element>(result: Operand<T>) -> Operand<T> {
    match result {
        Operand::Dense(m) => Operand::Sequence(m.into_nested()),
        Operand::Sparse(m) => Operand::Sequence(m.to_dense().into_nested()),
        other => other,
    }
}
