// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operator Trait Module
//!
//! Capability interfaces for the scalar functions the engine lifts over
//! matrices. The engine treats them as opaque: it only calls `apply` and
//! reads the layout hints.

use std::fmt;
use std::marker::PhantomData;

use crate::enums::error::Result;
use crate::traits::element::Element;

/// Pure two-argument scalar function.
///
/// ### Layout hints
/// - `zero_annihilates`: `op(0, x)` and `op(x, 0)` are the implicit zero for
/// every `x`, e.g., AND or multiplication. Lets sparse traversals skip
/// coordinates that are implicit in either operand.
/// - `prefers_dense`: results against sparse operands are always
/// materialised densely, e.g., comparisons producing boolean grids.
pub trait BinaryOperator<T: Element>: Send + Sync {
    type Output: Element;

    /// Name reported in logs and errors.
    fn name(&self) -> &'static str;

    fn apply(&self, lhs: &T, rhs: &T) -> Result<Self::Output>;

    #[inline]
    fn zero_annihilates(&self) -> bool {
        false
    }

    #[inline]
    fn prefers_dense(&self) -> bool {
        false
    }
}

/// Pure one-argument scalar function.
pub trait UnaryOperator<T: Element>: Send + Sync {
    type Output: Element;

    fn name(&self) -> &'static str;

    fn apply(&self, value: &T) -> Result<Self::Output>;
}

impl<T: Element, O: BinaryOperator<T> + ?Sized> BinaryOperator<T> for &O {
    type Output = O::Output;

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn apply(&self, lhs: &T, rhs: &T) -> Result<Self::Output> {
        (**self).apply(lhs, rhs)
    }

    #[inline]
    fn zero_annihilates(&self) -> bool {
        (**self).zero_annihilates()
    }

    #[inline]
    fn prefers_dense(&self) -> bool {
        (**self).prefers_dense()
    }
}

/// Records whether the matrix operand was the caller's first or second argument.
///
/// Mirrored dispatch pairs such as `(Scalar, Sparse)` reuse the forward
/// strategy with `Reversed`, so non-commutative operators still see their
/// arguments in the caller's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgOrder {
    /// Matrix operand is the left argument.
    Forward,
    /// Matrix operand is the right argument.
    Reversed,
}

impl ArgOrder {
    /// Calls `op` with `primary` and `other` in the caller's original order.
    #[inline(always)]
    pub fn apply<T, O>(self, op: &O, primary: &T, other: &T) -> Result<O::Output>
    where
        T: Element,
        O: BinaryOperator<T> + ?Sized,
    {
        match self {
            ArgOrder::Forward => op.apply(primary, other),
            ArgOrder::Reversed => op.apply(other, primary),
        }
    }

    #[inline]
    pub fn flip(self) -> Self {
        match self {
            ArgOrder::Forward => ArgOrder::Reversed,
            ArgOrder::Reversed => ArgOrder::Forward,
        }
    }
}

/// Adapter turning a closure into a `BinaryOperator`.
///
/// Built with [`binary_fn`].
pub struct FnOperator<T, U, F> {
    name: &'static str,
    f: F,
    zero_annihilates: bool,
    prefers_dense: bool,
    _phantom: PhantomData<fn(&T, &T) -> U>,
}

impl<T, U, F> FnOperator<T, U, F> {
    /// Declares that `op(0, x) == op(x, 0) == 0`.
    pub fn zero_annihilating(mut self) -> Self {
        self.zero_annihilates = true;
        self
    }

    /// Requests dense results against sparse operands.
    pub fn dense_results(mut self) -> Self {
        self.prefers_dense = true;
        self
    }
}

impl<T, U, F> fmt::Debug for FnOperator<T, U, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOperator")
            .field("name", &self.name)
            .field("zero_annihilates", &self.zero_annihilates)
            .field("prefers_dense", &self.prefers_dense)
            .finish()
    }
}

impl<T, U, F> BinaryOperator<T> for FnOperator<T, U, F>
where
    T: Element,
    U: Element,
    F: Fn(&T, &T) -> Result<U> + Send + Sync,
{
    type Output = U;

    #[inline]
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn apply(&self, lhs: &T, rhs: &T) -> Result<U> {
        (self.f)(lhs, rhs)
    }

    #[inline]
    fn zero_annihilates(&self) -> bool {
        self.zero_annihilates
    }

    #[inline]
    fn prefers_dense(&self) -> bool {
        self.prefers_dense
    }
}

/// Wraps a fallible closure as a binary operator.
///
/// # Example
/// ```
/// use sparsewise::traits::operator::{binary_fn, BinaryOperator};
/// let max = binary_fn("max", |a: &i32, b: &i32| Ok(*a.max(b)));
/// assert_eq!(max.apply(&3, &7).unwrap(), 7);
/// ```
pub fn binary_fn<T, U, F>(name: &'static str, f: F) -> FnOperator<T, U, F>
where
    F: Fn(&T, &T) -> Result<U> + Send + Sync,
{
    FnOperator {
        name,
        f,
        zero_annihilates: false,
        prefers_dense: false,
        _phantom: PhantomData,
    }
}

/// Adapter turning a closure into a `UnaryOperator`.
pub struct FnUnary<T, U, F> {
    name: &'static str,
    f: F,
    _phantom: PhantomData<fn(&T) -> U>,
}

impl<T, U, F> UnaryOperator<T> for FnUnary<T, U, F>
where
    T: Element,
    U: Element,
    F: Fn(&T) -> Result<U> + Send + Sync,
{
    type Output = U;

    #[inline]
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn apply(&self, value: &T) -> Result<U> {
        (self.f)(value)
    }
}

/// Wraps a fallible closure as a unary operator.
pub fn unary_fn<T, U, F>(name: &'static str, f: F) -> FnUnary<T, U, F>
where
    F: Fn(&T) -> Result<U> + Send + Sync,
{
    FnUnary {
        name,
        f,
        _phantom: PhantomData,
    }
}
