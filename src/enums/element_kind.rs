// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # ElementKind Enum Module
//!
//! Tag describing the scalar type held by a matrix.
//!
//! Only used for result-type reporting. It is never enforced structurally:
//! the element type parameter of a matrix is the source of truth.

use std::fmt;

/// Scalar type stored inside a `DenseMatrix` or `SparseMatrix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Boolean,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Complex64,
    /// User or collaborator-defined element, e.g., an arbitrary-precision number.
    Custom(&'static str),
}

impl ElementKind {
    /// True for the integral kinds.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ElementKind::Int32 | ElementKind::Int64 | ElementKind::UInt32 | ElementKind::UInt64
        )
    }

    /// True for the floating-point kinds.
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, ElementKind::Float32 | ElementKind::Float64)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Boolean => write!(f, "boolean"),
            ElementKind::Int32 => write!(f, "int32"),
            ElementKind::Int64 => write!(f, "int64"),
            ElementKind::UInt32 => write!(f, "uint32"),
            ElementKind::UInt64 => write!(f, "uint64"),
            ElementKind::Float32 => write!(f, "float32"),
            ElementKind::Float64 => write!(f, "float64"),
            ElementKind::Complex64 => write!(f, "complex64"),
            ElementKind::Custom(name) => write!(f, "{}", name),
        }
    }
}
