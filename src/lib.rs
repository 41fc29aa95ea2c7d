// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Sparsewise** - *Elementwise operators over dense and sparse matrices*
//!
//! Lifts scalar functions over scalars, plain nested sequences, dense
//! matrices and column-compressed sparse matrices, choosing a traversal that
//! keeps sparse results sparse and never stores explicit zeros.
//!
//! ## Example
//! ```
//! use sparsewise::{ExactZero, Operand, SparseMatrix};
//! use sparsewise::operators::{bit_and, larger};
//!
//! let s = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1i64)], &ExactZero).unwrap();
//! let gt = larger(&Operand::from(s.clone()), &Operand::scalar(0)).unwrap();
//! assert!(gt.is_dense());
//!
//! let masked = bit_and(&Operand::from(s), &Operand::scalar(1)).unwrap();
//! assert!(masked.is_sparse());
//! ```

pub mod enums {
    pub mod element_kind;
    pub mod error;
    pub mod nested;
    pub mod operand;
    pub mod shape_dim;
}

pub mod structs {
    pub mod dense;
    pub mod sparse;
    pub(crate) mod sparse_builder;
}

pub mod traits {
    pub mod element;
    pub mod operator;
    pub mod print;
    pub mod shape;
    pub mod zero_test;
}

pub mod kernels {
    pub mod elementwise;
    pub mod routing;
}

pub mod config;
pub mod operators;

pub use config::{Config, DEFAULT_EPSILON};
pub use enums::element_kind::ElementKind;
pub use enums::error::{MatrixError, Result};
pub use enums::nested::Nested;
pub use enums::operand::{Operand, OperandKind};
pub use enums::shape_dim::ShapeDim;

pub use structs::dense::DenseMatrix;
pub use structs::sparse::SparseMatrix;

pub use traits::element::{Element, Float, Integer};
pub use traits::operator::{ArgOrder, BinaryOperator, UnaryOperator, binary_fn, unary_fn};
pub use traits::print::Print;
pub use traits::shape::Shape;
pub use traits::zero_test::{ApproxZero, ExactZero, ZeroTest, zero_test_fn};

pub use kernels::routing::{Elementwise, elementwise, map_unary, map_unary_with};
