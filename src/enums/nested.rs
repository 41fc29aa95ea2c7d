// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Nested Module
//!
//! Plain nested sequences, the array form callers hand to the engine
//! before it is materialised into a `DenseMatrix`.

use crate::enums::error::{MatrixError, Result};

/// Plain nested sequence of values.
///
/// `List(vec![Leaf(1), Leaf(2)])` is the vector `[1, 2]`,
/// `List(vec![List(..), List(..)])` a matrix, and so on.
/// A bare `Leaf` is a rank-0 sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Builds a one-dimensional sequence.
    pub fn vector(values: Vec<T>) -> Self {
        Nested::List(values.into_iter().map(Nested::Leaf).collect())
    }

    /// Builds a two-dimensional sequence from rows.
    pub fn matrix(rows: Vec<Vec<T>>) -> Self {
        Nested::List(rows.into_iter().map(Nested::vector).collect())
    }

    /// True for a bare leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Infers the rectangular size, failing on ragged input.
    ///
    /// An empty list has size `[0]`.
    pub fn size(&self) -> Result<Vec<usize>> {
        match self {
            Nested::Leaf(_) => Ok(Vec::new()),
            Nested::List(items) => {
                let mut size = vec![items.len()];
                if let Some(first) = items.first() {
                    let inner = first.size()?;
                    for (i, item) in items.iter().enumerate().skip(1) {
                        let other = item.size()?;
                        if other != inner {
                            return Err(MatrixError::InvalidShape(format!(
                                "dimension mismatch at position {i}: expected size {inner:?}, found {other:?}"
                            )));
                        }
                    }
                    size.extend(inner);
                }
                Ok(size)
            }
        }
    }

    /// Flattens leaves in row-major order.
    pub fn flatten(self) -> Vec<T> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<T>) {
        match self {
            Nested::Leaf(v) => out.push(v),
            Nested::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }

    /// Rebuilds a nested sequence from a row-major buffer.
    ///
    /// The caller guarantees `data.len()` equals the product of `size`.
    pub(crate) fn from_flat(data: Vec<T>, size: &[usize]) -> Self {
        Self::build(&mut data.into_iter(), size)
    }

    fn build(iter: &mut impl Iterator<Item = T>, size: &[usize]) -> Self {
        match size {
            [] => match iter.next() {
                Some(v) => Nested::Leaf(v),
                None => Nested::List(Vec::new()),
            },
            [n, rest @ ..] => {
                Nested::List((0..*n).map(|_| Self::build(iter, rest)).collect())
            }
        }
    }
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(values: Vec<T>) -> Self {
        Nested::vector(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_of_vector_and_matrix() {
        assert_eq!(Nested::vector(vec![1, 12, 31]).size().unwrap(), vec![3]);
        assert_eq!(
            Nested::matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]).size().unwrap(),
            vec![2, 3]
        );
        assert_eq!(Nested::<i32>::List(vec![]).size().unwrap(), vec![0]);
        assert_eq!(Nested::Leaf(7).size().unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_ragged_sequence_fails() {
        let ragged = Nested::matrix(vec![vec![1, 2], vec![3]]);
        assert!(matches!(ragged.size(), Err(MatrixError::InvalidShape(_))));

        let mixed = Nested::List(vec![Nested::Leaf(1), Nested::vector(vec![2])]);
        assert!(mixed.size().is_err());
    }

    #[test]
    fn test_flatten_then_rebuild() {
        let m = Nested::matrix(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let size = m.size().unwrap();
        let flat = m.clone().flatten();
        assert_eq!(flat, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(Nested::from_flat(flat, &size), m);
    }
}
