// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Elementwise Strategies Module
//!
//! The traversal strategies that lift a scalar operator over matrix operands.
//!
//! | Strategy      | Operands                | Result                  |
//! |---------------|-------------------------|-------------------------|
//! | `dense_dense` | Dense, Dense            | Dense                   |
//! | `sparse_sparse` | Sparse, Sparse        | Sparse, or Dense when `op(0, 0) != 0` |
//! | `sparse_dense` | Sparse, Dense (either order) | Dense, or Sparse for zero-annihilating operators |
//! | `sparse_scalar` | Sparse, scalar (either order) | Sparse when the zero probe holds, else Dense |
//! | `dense_scalar` | Dense, scalar (either order) | Dense                  |
//! | `unary`       | any single operand      | same kind, sparse probe as above |
//!
//! Every strategy is pure: inputs are borrowed immutably and a fresh
//! output is allocated for each call.

pub mod dense_dense;
pub mod dense_scalar;
pub mod sparse_dense;
pub mod sparse_scalar;
pub mod sparse_sparse;
pub mod unary;

pub use dense_dense::dense_dense;
pub use dense_scalar::dense_scalar;
pub use sparse_dense::sparse_dense;
pub use sparse_scalar::sparse_scalar;
pub use sparse_sparse::sparse_sparse;
pub use unary::{unary_dense, unary_sparse};

use crate::enums::error::Result;

#[cfg(feature = "parallel_proc")]
use rayon::prelude::*;

/// Maps a fallible function over a slice, preserving order.
#[cfg(not(feature = "parallel_proc"))]
#[inline]
pub(crate) fn map_slice<T, U, F>(data: &[T], f: F) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Result<U> + Sync + Send,
{
    data.iter().map(f).collect()
}

/// Maps a fallible function over a slice, preserving order.
#[cfg(feature = "parallel_proc")]
#[inline]
pub(crate) fn map_slice<T, U, F>(data: &[T], f: F) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Result<U> + Sync + Send,
{
    data.par_iter().map(f).collect()
}

/// Maps a fallible function over two equal-length slices, preserving order.
#[cfg(not(feature = "parallel_proc"))]
#[inline]
pub(crate) fn zip_slices<T, U, F>(lhs: &[T], rhs: &[T], f: F) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T, &T) -> Result<U> + Sync + Send,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter().zip(rhs.iter()).map(|(a, b)| f(a, b)).collect()
}

/// Maps a fallible function over two equal-length slices, preserving order.
#[cfg(feature = "parallel_proc")]
#[inline]
pub(crate) fn zip_slices<T, U, F>(lhs: &[T], rhs: &[T], f: F) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T, &T) -> Result<U> + Sync + Send,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.par_iter()
        .zip(rhs.par_iter())
        .map(|(a, b)| f(a, b))
        .collect()
}
