// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Error Module - Custom *Sparsewise* Error Type
//!
//! Defines the unified error type for the elementwise engine.
//!
//! ## Features
//! - Covers shape disagreements, non-integral operands for bitwise functions,
//! operand pairs with no traversal strategy, and malformed matrix layouts.
//! - Every failure is a precondition violation reported synchronously.
//! Nothing is retried or recovered inside the engine.

use thiserror::Error;

use crate::enums::operand::OperandKind;

/// Catch all error type for `sparsewise`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Operand dimensions disagree. Elementwise broadcasting is never performed.
    #[error("Dimension mismatch: left operand has shape {left:?}, right operand has shape {right:?}.")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    /// A scalar function that requires integral inputs received a fractional value.
    #[error("Integers expected in function {function}.")]
    NonIntegerOperand { function: &'static str },

    /// The dispatch table has no entry for the operand pair.
    #[error("Unsupported operand kinds for elementwise operation: ({left}, {right}){}", detail(.message))]
    UnsupportedOperandKind {
        left: OperandKind,
        right: OperandKind,
        message: Option<String>,
    },

    /// Integer arithmetic overflowed, divided by zero, or an integral float
    /// left the `i64` range.
    #[error("Arithmetic error in function {function}: {reason}.")]
    Arithmetic {
        function: &'static str,
        reason: &'static str,
    },

    /// Nested sequence is ragged, or a flat buffer does not match its shape.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Compressed sparse layout breaks one of its invariants.
    #[error("Invalid sparse layout: {0}")]
    InvalidSparse(String),

    /// Element access outside the matrix bounds.
    #[error("Index {index:?} out of bounds for shape {shape:?}.")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = MatrixError::ShapeMismatch {
            left: vec![2, 3],
            right: vec![3, 2],
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: left operand has shape [2, 3], right operand has shape [3, 2]."
        );
    }

    #[test]
    fn test_non_integer_message() {
        let err = MatrixError::NonIntegerOperand { function: "bitAnd" };
        assert_eq!(err.to_string(), "Integers expected in function bitAnd.");
    }

    #[test]
    fn test_arithmetic_message() {
        let err = MatrixError::Arithmetic {
            function: "divide",
            reason: "division by zero",
        };
        assert_eq!(err.to_string(), "Arithmetic error in function divide: division by zero.");
    }

    #[test]
    fn test_unsupported_kind_message_with_and_without_detail() {
        let bare = MatrixError::UnsupportedOperandKind {
            left: OperandKind::Sparse,
            right: OperandKind::Dense,
            message: None,
        };
        assert_eq!(
            bare.to_string(),
            "Unsupported operand kinds for elementwise operation: (SparseMatrix, DenseMatrix)"
        );

        let detailed = MatrixError::UnsupportedOperandKind {
            left: OperandKind::Sequence,
            right: OperandKind::Scalar,
            message: Some("rank-0 sequence".into()),
        };
        assert!(detailed.to_string().ends_with(": rank-0 sequence"));
    }
}
