// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operand Module
//!
//! Contains the `Operand` enum, the dispatch-time union of every value the
//! elementwise engine accepts, and its `OperandKind` classification.
//!
//! ## Description
//! The engine never inspects types at runtime. Each call is classified into
//! one `(OperandKind, OperandKind)` pair and routed with an exhaustive match.

use std::fmt;

use crate::enums::error::{MatrixError, Result};
use crate::enums::nested::Nested;
use crate::enums::shape_dim::ShapeDim;
use crate::structs::dense::DenseMatrix;
use crate::structs::sparse::SparseMatrix;
use crate::traits::element::Element;
use crate::traits::shape::Shape;

/// Closed classification of operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Scalar,
    Sequence,
    Dense,
    Sparse,
}

impl OperandKind {
    /// True for `Dense` and `Sparse`.
    #[inline]
    pub fn is_matrix(&self) -> bool {
        matches!(self, OperandKind::Dense | OperandKind::Sparse)
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Scalar => write!(f, "scalar"),
            OperandKind::Sequence => write!(f, "Array"),
            OperandKind::Dense => write!(f, "DenseMatrix"),
            OperandKind::Sparse => write!(f, "SparseMatrix"),
        }
    }
}

/// # Operand
///
/// Any value an elementwise operator can be applied to.
///
/// ## Variants
/// - `Scalar`: a single value, including collaborator-defined numbers.
/// - `Sequence`: a plain nested sequence. It is materialised into a
/// `DenseMatrix` before dispatch, and results are unwrapped back into a
/// sequence when no matrix object took part in the call.
/// - `Dense` / `Sparse`: matrix objects.
#[derive(Clone, PartialEq)]
pub enum Operand<T> {
    Scalar(T),
    Sequence(Nested<T>),
    Dense(DenseMatrix<T>),
    Sparse(SparseMatrix<T>),
}

impl<T: Element> Operand<T> {
    /// Wraps a single value.
    #[inline]
    pub fn scalar(value: T) -> Self {
        Operand::Scalar(value)
    }

    /// Wraps a one-dimensional plain sequence.
    #[inline]
    pub fn vector(values: Vec<T>) -> Self {
        Operand::Sequence(Nested::vector(values))
    }

    /// Wraps a two-dimensional plain sequence.
    #[inline]
    pub fn rows(rows: Vec<Vec<T>>) -> Self {
        Operand::Sequence(Nested::matrix(rows))
    }

    /// Classification used by the dispatcher.
    #[inline]
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Scalar(_) => OperandKind::Scalar,
            Operand::Sequence(_) => OperandKind::Sequence,
            Operand::Dense(_) => OperandKind::Dense,
            Operand::Sparse(_) => OperandKind::Sparse,
        }
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Operand::Scalar(_))
    }

    #[inline]
    pub fn is_sparse(&self) -> bool {
        matches!(self, Operand::Sparse(_))
    }

    #[inline]
    pub fn is_dense(&self) -> bool {
        matches!(self, Operand::Dense(_))
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Operand::Sequence(_))
    }

    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Operand::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_dense(&self) -> Option<&DenseMatrix<T>> {
        match self {
            Operand::Dense(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sparse(&self) -> Option<&SparseMatrix<T>> {
        match self {
            Operand::Sparse(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Nested<T>> {
        match self {
            Operand::Sequence(n) => Some(n),
            _ => None,
        }
    }

    pub fn into_scalar(self) -> Option<T> {
        match self {
            Operand::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_dense(self) -> Option<DenseMatrix<T>> {
        match self {
            Operand::Dense(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_sparse(self) -> Option<SparseMatrix<T>> {
        match self {
            Operand::Sparse(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_sequence(self) -> Option<Nested<T>> {
        match self {
            Operand::Sequence(n) => Some(n),
            _ => None,
        }
    }

    /// Logical values as a dense matrix, whatever the representation.
    ///
    /// Scalars become rank-0 matrices. Used to compare results produced by
    /// different strategies.
    pub fn to_dense(&self) -> Result<DenseMatrix<T>> {
        match self {
            Operand::Scalar(v) => DenseMatrix::new(vec![v.clone()], Vec::new()),
            Operand::Sequence(n) => DenseMatrix::from_nested(n.clone()),
            Operand::Dense(m) => Ok(m.clone()),
            Operand::Sparse(m) => Ok(m.to_dense()),
        }
    }
}

impl<T: Element> Shape for Operand<T> {
    fn shape(&self) -> ShapeDim {
        match self {
            Operand::Scalar(_) => ShapeDim::Rank0,
            Operand::Sequence(n) => n
                .size()
                .map(|s| ShapeDim::from_dims(&s))
                .unwrap_or_else(|_| ShapeDim::Rank1(0)),
            Operand::Dense(m) => m.shape(),
            Operand::Sparse(m) => m.shape(),
        }
    }
}

impl<T: Element> fmt::Debug for Operand<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(v) => f.debug_tuple("Scalar").field(v).finish(),
            Operand::Sequence(n) => f.debug_tuple("Sequence").field(n).finish(),
            Operand::Dense(m) => f.debug_tuple("Dense").field(m).finish(),
            Operand::Sparse(m) => f.debug_tuple("Sparse").field(m).finish(),
        }
    }
}

impl<T> From<DenseMatrix<T>> for Operand<T> {
    fn from(m: DenseMatrix<T>) -> Self {
        Operand::Dense(m)
    }
}

impl<T> From<SparseMatrix<T>> for Operand<T> {
    fn from(m: SparseMatrix<T>) -> Self {
        Operand::Sparse(m)
    }
}

impl<T> From<Nested<T>> for Operand<T> {
    fn from(n: Nested<T>) -> Self {
        Operand::Sequence(n)
    }
}

impl<T: Element> TryFrom<Operand<T>> for DenseMatrix<T> {
    type Error = MatrixError;

    fn try_from(operand: Operand<T>) -> Result<Self> {
        match operand {
            Operand::Dense(m) => Ok(m),
            other => Err(MatrixError::UnsupportedOperandKind {
                left: other.kind(),
                right: OperandKind::Dense,
                message: Some("expected a DenseMatrix".into()),
            }),
        }
    }
}

impl<T: Element> TryFrom<Operand<T>> for SparseMatrix<T> {
    type Error = MatrixError;

    fn try_from(operand: Operand<T>) -> Result<Self> {
        match operand {
            Operand::Sparse(m) => Ok(m),
            other => Err(MatrixError::UnsupportedOperandKind {
                left: other.kind(),
                right: OperandKind::Sparse,
                message: Some("expected a SparseMatrix".into()),
            }),
        }
    }
}
