// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Sparse Matrix Module
//!
//! Two-dimensional compressed sparse column (CSC) matrix.
//! Stores only the entries that differ from the implicit zero.

use std::fmt;

use crate::enums::element_kind::ElementKind;
use crate::enums::error::{MatrixError, Result};
use crate::enums::shape_dim::ShapeDim;
use crate::structs::dense::DenseMatrix;
use crate::structs::sparse_builder::SparseBuilder;
use crate::traits::element::Element;
use crate::traits::shape::Shape;
use crate::traits::zero_test::ZeroTest;

/// # SparseMatrix
///
/// Column-compressed sparse matrix.
///
/// ### Properties
/// - `rows`, `columns`: dimension sizes.
/// - `values`: explicit entries, grouped by column.
/// - `row_index`: row of each entry in `values`.
/// - `column_pointers`: `columns + 1` offsets. Column `j` owns
/// `values[column_pointers[j]..column_pointers[j + 1]]`.
///
/// ### Invariants
/// - Rows are strictly increasing inside each column.
/// - `values.len() == row_index.len() == column_pointers[columns]`.
/// - No stored value satisfies the zero test it was built with.
///
/// Public constructors validate their input or strip zeros on the way in,
/// so a stored matrix is always canonical. The column builder behind them
/// is not part of the public API:
///
/// ```compile_fail
/// use sparsewise::SparseBuilder;
/// ```
#[derive(Clone, PartialEq)]
pub struct SparseMatrix<T> {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) values: Vec<T>,
    pub(crate) row_index: Vec<usize>,
    pub(crate) column_pointers: Vec<usize>,
}

impl<T: Element> SparseMatrix<T> {
    /// Constructs a matrix with no explicit entries.
    pub fn empty(rows: usize, columns: usize) -> Self {
        SparseMatrix {
            rows,
            columns,
            values: Vec::new(),
            row_index: Vec::new(),
            column_pointers: vec![0; columns + 1],
        }
    }

    /// Constructs a matrix from its compressed parts, checking every invariant.
    pub fn from_parts<Z: ZeroTest<T> + ?Sized>(
        rows: usize,
        columns: usize,
        values: Vec<T>,
        row_index: Vec<usize>,
        column_pointers: Vec<usize>,
        zero: &Z,
    ) -> Result<Self> {
        if values.len() != row_index.len() {
            return Err(MatrixError::InvalidSparse(format!(
                "{} values but {} row indices",
                values.len(),
                row_index.len()
            )));
        }
        if column_pointers.len() != columns + 1 {
            return Err(MatrixError::InvalidSparse(format!(
                "expected {} column pointers, found {}",
                columns + 1,
                column_pointers.len()
            )));
        }
        if column_pointers[0] != 0 || column_pointers[columns] != values.len() {
            return Err(MatrixError::InvalidSparse(format!(
                "column pointers must span 0..{}, found {}..{}",
                values.len(),
                column_pointers[0],
                column_pointers[columns]
            )));
        }
        if let Some(j) = column_pointers.windows(2).position(|w| w[0] > w[1]) {
            return Err(MatrixError::InvalidSparse(format!(
                "column pointers decrease at column {j}"
            )));
        }
        for j in 0..columns {
            for k in column_pointers[j]..column_pointers[j + 1] {
                let row = row_index[k];
                if row >= rows {
                    return Err(MatrixError::InvalidSparse(format!(
                        "row {row} out of range in column {j} of a {rows} x {columns} matrix"
                    )));
                }
                if k > column_pointers[j] && row_index[k - 1] >= row {
                    return Err(MatrixError::InvalidSparse(format!(
                        "rows not strictly increasing in column {j}"
                    )));
                }
                if zero.is_zero(&values[k]) {
                    return Err(MatrixError::InvalidSparse(format!(
                        "explicit zero stored at ({row}, {j})"
                    )));
                }
            }
        }
        Ok(Self::from_parts_unchecked(
            rows,
            columns,
            values,
            row_index,
            column_pointers,
        ))
    }

    /// Trusted constructor for layouts already in canonical order.
    #[inline]
    pub(crate) fn from_parts_unchecked(
        rows: usize,
        columns: usize,
        values: Vec<T>,
        row_index: Vec<usize>,
        column_pointers: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(values.len(), row_index.len());
        debug_assert_eq!(column_pointers.len(), columns + 1);
        SparseMatrix {
            rows,
            columns,
            values,
            row_index,
            column_pointers,
        }
    }

    /// Pattern-preserving transcription of a two-dimensional dense matrix.
    ///
    /// Values satisfying `zero` are left implicit.
    pub fn from_dense<Z: ZeroTest<T> + ?Sized>(dense: &DenseMatrix<T>, zero: &Z) -> Result<Self> {
        let (rows, columns) = dense.dims_2d().ok_or_else(|| {
            MatrixError::InvalidShape(format!(
                "sparse matrices are two-dimensional, found size {:?}",
                dense.size()
            ))
        })?;
        let mut builder = SparseBuilder::new(rows, columns);
        for j in 0..columns {
            for i in 0..rows {
                builder.push_nonzero(i, dense.get_2d(i, j).clone(), zero);
            }
            builder.finish_column();
        }
        Ok(builder.build())
    }

    /// Constructs a matrix from `(row, column, value)` triplets in any order.
    ///
    /// Duplicate coordinates are rejected. Values satisfying `zero` are dropped.
    pub fn from_triplets<Z: ZeroTest<T> + ?Sized>(
        rows: usize,
        columns: usize,
        mut triplets: Vec<(usize, usize, T)>,
        zero: &Z,
    ) -> Result<Self> {
        for (i, j, _) in &triplets {
            if *i >= rows || *j >= columns {
                return Err(MatrixError::IndexOutOfBounds {
                    index: vec![*i, *j],
                    shape: vec![rows, columns],
                });
            }
        }
        triplets.sort_by_key(|&(i, j, _)| (j, i));
        if let Some(w) = triplets
            .windows(2)
            .find(|w| w[0].0 == w[1].0 && w[0].1 == w[1].1)
        {
            return Err(MatrixError::InvalidSparse(format!(
                "duplicate entry at ({}, {})",
                w[0].0, w[0].1
            )));
        }

        let mut builder = SparseBuilder::with_capacity(rows, columns, triplets.len());
        for (i, j, value) in triplets {
            while builder.current_column() < j {
                builder.finish_column();
            }
            builder.push_nonzero(i, value, zero);
        }
        Ok(builder.build())
    }

    /// Expands to a dense matrix, filling implicit coordinates with the implicit zero.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let mut data = vec![T::implicit_zero(); self.rows * self.columns];
        for (i, j, v) in self.iter() {
            data[i * self.columns + j] = v.clone();
        }
        DenseMatrix {
            size: vec![self.rows, self.columns],
            data,
        }
    }

    /// Type tag of the stored elements.
    #[inline]
    pub fn element_kind(&self) -> ElementKind {
        T::kind()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Dimension sizes as `[rows, columns]`.
    #[inline]
    pub fn size(&self) -> [usize; 2] {
        [self.rows, self.columns]
    }

    /// Number of explicit entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Fraction of coordinates holding an explicit entry.
    pub fn density(&self) -> f64 {
        let total = self.rows * self.columns;
        if total == 0 {
            0.0
        } else {
            self.nnz() as f64 / total as f64
        }
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn row_index(&self) -> &[usize] {
        &self.row_index
    }

    #[inline]
    pub fn column_pointers(&self) -> &[usize] {
        &self.column_pointers
    }

    /// Range into `values`/`row_index` owned by column `j`.
    #[inline]
    pub fn column_range(&self, j: usize) -> std::ops::Range<usize> {
        self.column_pointers[j]..self.column_pointers[j + 1]
    }

    /// Explicit entries of column `j` as `(row, value)` in increasing row order.
    pub fn column(&self, j: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        let range = self.column_range(j);
        self.row_index[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter())
    }

    /// All explicit entries as `(row, column, value)` in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        (0..self.columns).flat_map(move |j| self.column(j).map(move |(i, v)| (i, j, v)))
    }

    /// Explicit entry at (row, col), if any.
    pub fn get_explicit(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        let range = self.column_range(col);
        self.row_index[range.clone()]
            .binary_search(&row)
            .ok()
            .map(|k| &self.values[range.start + k])
    }

    /// Value at (row, col), the implicit zero when no entry is stored.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows || col >= self.columns {
            return Err(MatrixError::IndexOutOfBounds {
                index: vec![row, col],
                shape: vec![self.rows, self.columns],
            });
        }
        Ok(self
            .get_explicit(row, col)
            .cloned()
            .unwrap_or_else(T::implicit_zero))
    }

    /// True when the layout is canonical under `zero`:
    /// sorted, duplicate-free, and without explicit zeros.
    pub fn is_canonical<Z: ZeroTest<T> + ?Sized>(&self, zero: &Z) -> bool {
        (0..self.columns).all(|j| {
            let rows = &self.row_index[self.column_range(j)];
            rows.windows(2).all(|w| w[0] < w[1]) && rows.iter().all(|&r| r < self.rows)
        }) && self.values.iter().all(|v| zero.is_nonzero(v))
    }
}

impl<T: Element> Shape for SparseMatrix<T> {
    fn shape(&self) -> ShapeDim {
        ShapeDim::Rank2 {
            rows: self.rows,
            cols: self.columns,
        }
    }
}

// Pretty print
impl<T: Element> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SparseMatrix<{}>: {} × {} [csc, nnz = {}, density = {:.4}]",
            self.element_kind(),
            self.rows,
            self.columns,
            self.nnz(),
            self.density()
        )?;
        for (n, (i, j, v)) in self.iter().enumerate() {
            if n == 12 {
                // Print up to 12 entries
                write!(f, "\n...")?;
                break;
            }
            write!(f, "\n({}, {}) ==> {:?}", i, j, v)?;
        }
        Ok(())
    }
}
