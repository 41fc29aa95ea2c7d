// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # ShapeDim Enum Module
//!
//! Companion to [crate::traits::shape::Shape];
//!
//! Contains all supported `Shape` variants.

use crate::traits::shape::Shape;

/// Dimensional rank for any `Operand`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeDim {
    /// Rank-0 - a scalar
    Rank0,

    /// Vector length
    Rank1(usize),

    /// Matrix with row/column counts.
    Rank2 { rows: usize, cols: usize },

    /// N-dimensional grid.
    RankN(Vec<usize>),
}

impl ShapeDim {
    /// Builds the tightest variant for a dimension list.
    pub fn from_dims(dims: &[usize]) -> Self {
        match dims {
            [] => ShapeDim::Rank0,
            [n] => ShapeDim::Rank1(*n),
            [rows, cols] => ShapeDim::Rank2 {
                rows: *rows,
                cols: *cols,
            },
            _ => ShapeDim::RankN(dims.to_vec()),
        }
    }

    /// Flattens back to a dimension list. `Rank0` is the empty list.
    pub fn to_dims(&self) -> Vec<usize> {
        match self {
            ShapeDim::Rank0 => Vec::new(),
            ShapeDim::Rank1(n) => vec![*n],
            ShapeDim::Rank2 { rows, cols } => vec![*rows, *cols],
            ShapeDim::RankN(dims) => dims.clone(),
        }
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        match self {
            ShapeDim::Rank0 => 0,
            ShapeDim::Rank1(_) => 1,
            ShapeDim::Rank2 { .. } => 2,
            ShapeDim::RankN(dims) => dims.len(),
        }
    }

    /// Total element count, the product of all dimensions.
    pub fn element_count(&self) -> usize {
        match self {
            ShapeDim::Rank0 => 1,
            ShapeDim::Rank1(n) => *n,
            ShapeDim::Rank2 { rows, cols } => rows * cols,
            ShapeDim::RankN(dims) => dims.iter().product(),
        }
    }
}

/// Implement `Shape` for `ShapeDim` so generic helpers accept a bare shape.
impl Shape for ShapeDim {
    fn shape(&self) -> ShapeDim {
        self.clone()
    }
}
