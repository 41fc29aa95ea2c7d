// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Shape Trait Module
//!
//! Unified way to describe the dimensionality “shape” of any `Operand`.
//!
//! Includes standard accessors for 1d and 2d so callers can skip
//! the `ShapeDim` match when they already know the rank.

use crate::enums::shape_dim::ShapeDim;

/// Shape trait.
///
/// Returns a `ShapeDim` for the receiver.
///
/// Includes accessor types for common use cases e.g., shape_1d, shape_2d,
/// which are automatic provided the implementor implements `shape`.
pub trait Shape {
    /// Returns the dimension descriptor
    fn shape(&self) -> ShapeDim;

    /// Returns the dimensions as a flat list
    fn dims(&self) -> Vec<usize> {
        self.shape().to_dims()
    }

    /// Returns the first dimension
    ///
    /// Scalars report `1`.
    fn shape_1d(&self) -> usize {
        match self.shape() {
            ShapeDim::Rank0 => 1,
            ShapeDim::Rank1(n) => n,
            ShapeDim::Rank2 { rows, .. } => rows,
            ShapeDim::RankN(dims) => *dims.first().unwrap_or(&1),
        }
    }

    /// Returns the first and second dimensions
    ///
    /// Vectors are treated as a single column.
    fn shape_2d(&self) -> (usize, usize) {
        match self.shape() {
            ShapeDim::Rank0 => (1, 1),
            ShapeDim::Rank1(n) => (n, 1),
            ShapeDim::Rank2 { rows, cols } => (rows, cols),
            ShapeDim::RankN(dims) => (*dims.first().unwrap_or(&1), *dims.get(1).unwrap_or(&1)),
        }
    }

    /// True when the receiver has no elements along some dimension.
    fn is_degenerate(&self) -> bool {
        self.dims().contains(&0)
    }
}
