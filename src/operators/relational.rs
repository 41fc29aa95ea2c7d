// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Relational Operators
//!
//! Comparisons lifted over every operand kind.
//!
//! Floats compare with a relative tolerance taken from [`Config`], so values
//! that differ only by rounding noise are equal. Integers and booleans
//! compare exactly.
//!
//! The boolean-valued comparisons declare `prefers_dense`: against a sparse
//! operand they always return a dense boolean grid, even where the implicit
//! zeros compare false. `compare` returns `-1`, `0` or `1` and keeps sparse
//! results sparse when `compare(0, s)` is zero.

use std::cmp::Ordering;

use crate::config::{Config, DEFAULT_EPSILON};
use crate::enums::error::Result;
use crate::enums::operand::Operand;
use crate::kernels::routing::Elementwise;
use crate::traits::element::Element;
use crate::traits::operator::BinaryOperator;

/// True when `x` and `y` are equal up to the relative tolerance `epsilon`.
///
/// Differences below machine epsilon always count as equal. NaN is never
/// equal to anything. Infinities are only equal to themselves.
///
/// # Example
/// ```
/// use sparsewise::operators::relational::nearly_equal;
/// assert!(nearly_equal(0.1 + 0.2, 0.3, 1e-12));
/// assert!(!nearly_equal(1.0, 1.001, 1e-12));
/// ```
pub fn nearly_equal(x: f64, y: f64, epsilon: f64) -> bool {
    if x == y {
        return true;
    }
    if x.is_nan() || y.is_nan() {
        return false;
    }
    if x.is_finite() && y.is_finite() {
        let diff = (x - y).abs();
        if diff < f64::EPSILON {
            return true;
        }
        return diff <= x.abs().max(y.abs()) * epsilon;
    }
    false
}

/// Element types with a (possibly tolerant) ordering.
pub trait Comparable: Element {
    /// `None` when the values are unordered, e.g. NaN.
    fn compare_within(&self, other: &Self, epsilon: f64) -> Option<Ordering>;
}

macro_rules! impl_comparable_exact {
    ($($t:ty),*) => {
        $(
            impl Comparable for $t {
                #[inline(always)]
                fn compare_within(&self, other: &Self, _epsilon: f64) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }
        )*
    };
}

impl_comparable_exact!(bool, i32, i64, u32, u64);

macro_rules! impl_comparable_float {
    ($($t:ty),*) => {
        $(
            impl Comparable for $t {
                #[inline]
                fn compare_within(&self, other: &Self, epsilon: f64) -> Option<Ordering> {
                    let (a, b) = (*self as f64, *other as f64);
                    if nearly_equal(a, b, epsilon) {
                        Some(Ordering::Equal)
                    } else {
                        a.partial_cmp(&b)
                    }
                }
            }
        )*
    };
}

impl_comparable_float!(f32, f64);

macro_rules! relational_operator {
    ($(#[$doc:meta])* $name:ident, $label:literal, $free:ident, |$ord:ident| $test:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            pub epsilon: f64,
        }

        impl $name {
            /// Uses the comparison tolerance from a runtime `Config`.
            pub fn from_config(config: &Config) -> Self {
                $name {
                    epsilon: config.epsilon,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name {
                    epsilon: DEFAULT_EPSILON,
                }
            }
        }

        impl<T: Comparable> BinaryOperator<T> for $name {
            type Output = bool;

            #[inline]
            fn name(&self) -> &'static str {
                $label
            }

            #[inline]
            fn apply(&self, lhs: &T, rhs: &T) -> Result<bool> {
                let $ord = lhs.compare_within(rhs, self.epsilon);
                Ok($test)
            }

            #[inline]
            fn prefers_dense(&self) -> bool {
                true
            }
        }

        $(#[$doc])*
        pub fn $free<T: Comparable>(lhs: &Operand<T>, rhs: &Operand<T>) -> Result<Operand<bool>> {
            Elementwise::new($name::default()).call(lhs, rhs)
        }
    };
}

relational_operator!(
    /// `lhs == rhs`.
    Equal, "equal", equal,
    |ord| ord == Some(Ordering::Equal)
);
relational_operator!(
    /// `lhs != rhs`. Unordered values are unequal.
    Unequal, "unequal", unequal,
    |ord| ord != Some(Ordering::Equal)
);
relational_operator!(
    /// `lhs > rhs`.
    Larger, "larger", larger,
    |ord| ord == Some(Ordering::Greater)
);
relational_operator!(
    /// `lhs >= rhs`.
    LargerEq, "largerEq", larger_eq,
    |ord| matches!(ord, Some(Ordering::Greater | Ordering::Equal))
);
relational_operator!(
    /// `lhs < rhs`.
    Smaller, "smaller", smaller,
    |ord| ord == Some(Ordering::Less)
);
relational_operator!(
    /// `lhs <= rhs`.
    SmallerEq, "smallerEq", smaller_eq,
    |ord| matches!(ord, Some(Ordering::Less | Ordering::Equal))
);

/// Three-way comparison returning `1`, `0` or `-1`.
///
/// Unordered values compare as `-1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compare {
    pub epsilon: f64,
}

impl Compare {
    /// Uses the comparison tolerance from a runtime `Config`.
    pub fn from_config(config: &Config) -> Self {
        Compare {
            epsilon: config.epsilon,
        }
    }
}

impl Default for Compare {
    fn default() -> Self {
        Compare {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl<T: Comparable> BinaryOperator<T> for Compare {
    type Output = i32;

    #[inline]
    fn name(&self) -> &'static str {
        "compare"
    }

    #[inline]
    fn apply(&self, lhs: &T, rhs: &T) -> Result<i32> {
        Ok(match lhs.compare_within(rhs, self.epsilon) {
            Some(Ordering::Greater) => 1,
            Some(Ordering::Equal) => 0,
            Some(Ordering::Less) | None => -1,
        })
    }
}

/// Three-way comparison lifted over every operand kind.
pub fn compare<T: Comparable>(lhs: &Operand<T>, rhs: &Operand<T>) -> Result<Operand<i32>> {
    Elementwise::new(Compare::default()).call(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::sparse::SparseMatrix;
    use crate::traits::zero_test::ExactZero;

    #[test]
    fn test_nearly_equal() {
        assert!(nearly_equal(1.0, 1.0, 0.0));
        assert!(nearly_equal(0.1 + 0.2, 0.3, DEFAULT_EPSILON));
        assert!(nearly_equal(1e20, 1e20 + 1e7, DEFAULT_EPSILON));
        assert!(!nearly_equal(1.0, 1.0 + 1e-9, DEFAULT_EPSILON));
        assert!(!nearly_equal(f64::NAN, f64::NAN, DEFAULT_EPSILON));
        assert!(nearly_equal(f64::INFINITY, f64::INFINITY, DEFAULT_EPSILON));
        assert!(!nearly_equal(f64::INFINITY, 1e308, DEFAULT_EPSILON));
    }

    #[test]
    fn test_tolerant_float_comparisons() {
        let x = 0.1 + 0.2;
        assert!(Equal::default().apply(&x, &0.3).unwrap());
        assert!(!Larger::default().apply(&x, &0.3).unwrap());
        assert!(LargerEq::default().apply(&x, &0.3).unwrap());
        assert!(SmallerEq::default().apply(&0.3, &x).unwrap());

        let y = 1000.0 + 1e-10;
        assert!(Equal::default().apply(&y, &1000.0).unwrap());
        let strict = Equal::from_config(&Config::default().with_epsilon(0.0));
        assert!(!strict.apply(&y, &1000.0).unwrap());
    }

    #[test]
    fn test_nan_is_unordered() {
        let nan = f64::NAN;
        assert!(!Equal::default().apply(&nan, &nan).unwrap());
        assert!(Unequal::default().apply(&nan, &1.0).unwrap());
        assert!(!Smaller::default().apply(&nan, &1.0).unwrap());
        assert!(!LargerEq::default().apply(&nan, &1.0).unwrap());
        assert_eq!(Compare::default().apply(&nan, &1.0).unwrap(), -1);
    }

    #[test]
    fn test_exact_types() {
        assert!(Larger::default().apply(&3i64, &2).unwrap());
        assert!(Smaller::default().apply(&false, &true).unwrap());
        assert_eq!(Compare::default().apply(&2u32, &7).unwrap(), -1);
        assert_eq!(Compare::default().apply(&7u32, &7).unwrap(), 0);
    }

    #[test]
    fn test_comparison_against_sparse_is_dense() {
        let s = SparseMatrix::from_triplets(2, 2, vec![(1, 0, -3)], &ExactZero).unwrap();
        let r = smaller(&Operand::from(s), &Operand::scalar(0)).unwrap();
        let d = r.into_dense().expect("dense result");
        assert_eq!(d.as_slice(), &[false, false, true, false]);
    }

    #[test]
    fn test_compare_keeps_sparse() {
        let s = SparseMatrix::from_triplets(2, 2, vec![(1, 0, -3), (0, 1, 4)], &ExactZero).unwrap();
        let r = compare(&Operand::from(s), &Operand::scalar(0)).unwrap();
        let r = r.into_sparse().expect("sparse result");
        assert_eq!(r.get(1, 0).unwrap(), -1);
        assert_eq!(r.get(0, 1).unwrap(), 1);
        assert_eq!(r.nnz(), 2);
    }
}
