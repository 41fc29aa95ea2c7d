// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Sparse Builder Module
//!
//! Accumulates `(row, value)` entries column by column into owned buffers,
//! then finalises them once into an immutable [`SparseMatrix`].
//!
//! Entries must arrive in increasing row order within a column, and columns
//! must be closed in increasing order. This is exactly the order every
//! traversal strategy visits coordinates in, so canonical order costs nothing.
//!
//! The builder trusts its callers and is internal to the crate. Outside
//! callers construct matrices through the validating `SparseMatrix`
//! constructors.

use crate::structs::sparse::SparseMatrix;
use crate::traits::element::Element;
use crate::traits::zero_test::ZeroTest;

/// Column-major incremental builder for `SparseMatrix`.
#[derive(Debug, Clone)]
pub(crate) struct SparseBuilder<T> {
    rows: usize,
    columns: usize,
    values: Vec<T>,
    row_index: Vec<usize>,
    column_pointers: Vec<usize>,
}

impl<T: Element> SparseBuilder<T> {
    /// Starts an empty builder for a `rows x columns` matrix.
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        Self::with_capacity(rows, columns, 0)
    }

    /// Starts an empty builder with room for `nnz` entries.
    pub(crate) fn with_capacity(rows: usize, columns: usize, nnz: usize) -> Self {
        let mut column_pointers = Vec::with_capacity(columns + 1);
        column_pointers.push(0);
        SparseBuilder {
            rows,
            columns,
            values: Vec::with_capacity(nnz),
            row_index: Vec::with_capacity(nnz),
            column_pointers,
        }
    }

    /// Column currently receiving entries.
    #[inline]
    pub(crate) fn current_column(&self) -> usize {
        self.column_pointers.len() - 1
    }

    /// Appends an entry to the current column.
    ///
    /// The caller guarantees `row` exceeds the previous row of this column
    /// and that `value` is not the implicit zero.
    #[inline]
    pub(crate) fn push(&mut self, row: usize, value: T) {
        debug_assert!(row < self.rows, "Row out of bounds");
        debug_assert!(
            self.current_column() < self.columns,
            "push after the last column was closed"
        );
        debug_assert!(
            self.row_index.len() == *self.column_pointers.last().unwrap_or(&0)
                || self.row_index.last().is_some_and(|&last| last < row),
            "rows must be strictly increasing within a column"
        );
        self.values.push(value);
        self.row_index.push(row);
    }

    /// Appends an entry unless the zero test holds for it.
    ///
    /// Returns whether the value was stored.
    #[inline]
    pub(crate) fn push_nonzero<Z: ZeroTest<T> + ?Sized>(&mut self, row: usize, value: T, zero: &Z) -> bool {
        if zero.is_zero(&value) {
            false
        } else {
            self.push(row, value);
            true
        }
    }

    /// Closes the current column.
    #[inline]
    pub(crate) fn finish_column(&mut self) {
        debug_assert!(self.current_column() < self.columns, "too many columns closed");
        self.column_pointers.push(self.values.len());
    }

    /// Finalises the layout, closing any columns left open.
    pub(crate) fn build(mut self) -> SparseMatrix<T> {
        while self.column_pointers.len() <= self.columns {
            self.column_pointers.push(self.values.len());
        }
        SparseMatrix::from_parts_unchecked(
            self.rows,
            self.columns,
            self.values,
            self.row_index,
            self.column_pointers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::zero_test::ExactZero;

    #[test]
    fn test_build_column_by_column() {
        let mut b = SparseBuilder::new(3, 3);
        b.push(0, 1);
        b.push(2, 5);
        b.finish_column();
        b.finish_column();
        b.push(1, 7);
        b.finish_column();
        let m = b.build();

        assert_eq!(m.nnz(), 3);
        assert_eq!(m.column_pointers(), &[0, 2, 2, 3]);
        assert_eq!(m.row_index(), &[0, 2, 1]);
        assert_eq!(m.values(), &[1, 5, 7]);
    }

    #[test]
    fn test_build_closes_trailing_columns() {
        let mut b = SparseBuilder::<f64>::new(2, 4);
        b.push(1, 2.5);
        let m = b.build();
        assert_eq!(m.column_pointers(), &[0, 1, 1, 1, 1]);
    }

    #[test]
    fn test_push_nonzero_drops_zeros() {
        let mut b = SparseBuilder::new(4, 1);
        assert!(!b.push_nonzero(0, 0, &ExactZero));
        assert!(b.push_nonzero(1, 3, &ExactZero));
        assert!(!b.push_nonzero(3, 0, &ExactZero));
        let m = b.build();
        assert_eq!(m.nnz(), 1);
        assert!(m.is_canonical(&ExactZero));
    }
}
