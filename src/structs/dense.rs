// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Dense Matrix Module
//!
//! N-dimensional dense matrix backed by a single row-major buffer.
//! Converts to and from plain nested sequences.

use std::fmt;

use crate::enums::element_kind::ElementKind;
use crate::enums::error::{MatrixError, Result};
use crate::enums::nested::Nested;
use crate::enums::shape_dim::ShapeDim;
use crate::traits::element::Element;
use crate::traits::shape::Shape;

/// # DenseMatrix
///
/// Row-major dense matrix of any rank.
///
/// ### Properties
/// - `size`: dimension sizes, outermost first.
/// - `data`: flat buffer in row-major order. Its length always equals
/// the product of `size`.
///
/// The nested-sequence form is produced on demand with [`DenseMatrix::to_nested`].
/// Strategies never mutate an input matrix, they always allocate a new one.
#[derive(Clone, PartialEq)]
pub struct DenseMatrix<T> {
    pub(crate) size: Vec<usize>,
    pub(crate) data: Vec<T>,
}

impl<T: Element> DenseMatrix<T> {
    /// Constructs a matrix from a row-major buffer and its size.
    pub fn new(data: Vec<T>, size: Vec<usize>) -> Result<Self> {
        let expected: usize = size.iter().product();
        if data.len() != expected {
            return Err(MatrixError::InvalidShape(format!(
                "buffer of length {} does not match size {:?} ({} elements)",
                data.len(),
                size,
                expected
            )));
        }
        Ok(DenseMatrix { size, data })
    }

    /// Constructs a matrix with every element set to `value`.
    pub fn filled(size: Vec<usize>, value: T) -> Self {
        let len = size.iter().product();
        DenseMatrix {
            data: vec![value; len],
            size,
        }
    }

    /// Constructs a matrix of implicit zeros.
    pub fn zeros(size: Vec<usize>) -> Self {
        Self::filled(size, T::implicit_zero())
    }

    /// Materialises a plain nested sequence.
    ///
    /// Fails with `InvalidShape` on ragged input.
    pub fn from_nested(nested: Nested<T>) -> Result<Self> {
        let size = nested.size()?;
        let data = nested.flatten();
        Self::new(data, size)
    }

    /// Constructs a two-dimensional matrix from its rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_nested(Nested::matrix(rows))
    }

    /// Returns the plain nested-sequence form.
    pub fn to_nested(&self) -> Nested<T> {
        Nested::from_flat(self.data.clone(), &self.size)
    }

    /// Consumes the matrix into its nested-sequence form.
    pub fn into_nested(self) -> Nested<T> {
        Nested::from_flat(self.data, &self.size)
    }

    /// Type tag of the stored elements.
    #[inline]
    pub fn element_kind(&self) -> ElementKind {
        T::kind()
    }

    /// Dimension sizes, outermost first.
    #[inline]
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    /// Number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.size.len()
    }

    /// `(rows, columns)` for a two-dimensional matrix.
    #[inline]
    pub fn dims_2d(&self) -> Option<(usize, usize)> {
        match self.size.as_slice() {
            [rows, cols] => Some((*rows, *cols)),
            _ => None,
        }
    }

    /// Returns the total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an immutable reference to the flat buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix into its flat buffer.
    #[inline]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Flat buffer offset of a multi-index.
    fn offset(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.size.len() || index.iter().zip(&self.size).any(|(i, n)| i >= n) {
            return Err(MatrixError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.size.clone(),
            });
        }
        Ok(index
            .iter()
            .zip(&self.size)
            .fold(0, |acc, (i, n)| acc * n + i))
    }

    /// Returns the value at a multi-index.
    pub fn get(&self, index: &[usize]) -> Result<&T> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Sets the value at a multi-index.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let offset = self.offset(index)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns the value at (row, col) of a two-dimensional matrix.
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn get_2d(&self, row: usize, col: usize) -> &T {
        debug_assert_eq!(self.size.len(), 2, "get_2d on non 2-D matrix");
        let ncols = self.size[1];
        debug_assert!(row < self.size[0], "Row out of bounds");
        debug_assert!(col < ncols, "Col out of bounds");
        &self.data[row * ncols + col]
    }

    /// Returns a single row of a two-dimensional matrix as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        debug_assert_eq!(self.size.len(), 2, "row on non 2-D matrix");
        let ncols = self.size[1];
        &self.data[(row * ncols)..((row + 1) * ncols)]
    }

    /// Returns an iterator over the elements in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Element> Shape for DenseMatrix<T> {
    fn shape(&self) -> ShapeDim {
        ShapeDim::from_dims(&self.size)
    }
}

impl<T: Element> TryFrom<Nested<T>> for DenseMatrix<T> {
    type Error = MatrixError;

    fn try_from(nested: Nested<T>) -> Result<Self> {
        DenseMatrix::from_nested(nested)
    }
}

impl<T: Element> From<Vec<T>> for DenseMatrix<T> {
    fn from(values: Vec<T>) -> Self {
        DenseMatrix {
            size: vec![values.len()],
            data: values,
        }
    }
}

// Pretty print
impl<T: Element> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DenseMatrix<{}> {:?} [row-major]",
            self.element_kind(),
            self.size
        )?;
        match self.dims_2d() {
            Some((nrows, ncols)) => {
                for row in 0..nrows.min(6) {
                    // Print up to 6 rows
                    write!(f, "\n[")?;
                    for col in 0..ncols.min(8) {
                        // Print up to 8 cols
                        write!(f, " {:?}", self.get_2d(row, col))?;
                        if col != ncols - 1 {
                            write!(f, ",")?;
                        }
                    }
                    if ncols > 8 {
                        write!(f, " ...")?;
                    }
                    write!(f, " ]")?;
                }
                if nrows > 6 {
                    write!(f, "\n...")?;
                }
            }
            None => {
                write!(f, "\n{:?}", &self.data[..self.data.len().min(48)])?;
                if self.data.len() > 48 {
                    write!(f, " ...")?;
                }
            }
        }
        Ok(())
    }
}

// ===================== Iterators ======================

impl<'a, T> IntoIterator for &'a DenseMatrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for DenseMatrix<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
