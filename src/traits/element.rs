// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Element Trait Module
//!
//! Trait bounds for values that can live inside a matrix, plus the
//! numeric unions used by the shipped scalar operators.

use std::fmt::Debug;

use num_traits::{Float as NumFloat, PrimInt};

use crate::enums::element_kind::ElementKind;

/// Trait for types valid as matrix elements.
///
/// Useful when specifying `my_fn::<T: Element>() {}`.
///
/// `implicit_zero` is the value a sparse matrix assumes for every coordinate
/// without a stored entry. Collaborator types, such as arbitrary-precision
/// numbers, implement this trait to run through the same traversal paths.
pub trait Element: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Value assumed at coordinates with no explicit entry.
    fn implicit_zero() -> Self;

    /// Type tag reported on matrices holding this element.
    fn kind() -> ElementKind;
}

/// Implements `Element` for primitive types whose implicit zero is `Default`.
macro_rules! impl_element {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline(always)]
                fn implicit_zero() -> Self {
                    <$t>::default()
                }

                #[inline(always)]
                fn kind() -> ElementKind {
                    ElementKind::$kind
                }
            }
        )*
    };
}

impl_element!(
    bool => Boolean,
    i32 => Int32,
    i64 => Int64,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
);

#[cfg(feature = "complex")]
impl Element for num_complex::Complex<f64> {
    #[inline(always)]
    fn implicit_zero() -> Self {
        num_complex::Complex::new(0.0, 0.0)
    }

    #[inline(always)]
    fn kind() -> ElementKind {
        ElementKind::Complex64
    }
}

/// Trait for types valid as float elements.
///
/// Extends and constrains the *num-traits* `Float` implementation to fit the crate's type universe.
pub trait Float: NumFloat + Element + Copy + Default {}
impl Float for f32 {}
impl Float for f64 {}

/// Trait for types valid as integer elements.
pub trait Integer: PrimInt + Element + Copy + Default {}
impl Integer for i32 {}
impl Integer for i64 {}
impl Integer for u32 {}
impl Integer for u64 {}
