// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Bitwise Operators
//!
//! `bitAnd`, `bitOr` and `bitXor` lifted over every operand kind.
//!
//! Integers combine their bits directly and booleans combine logically.
//! Floats must hold integral values. A fractional or non-finite float fails
//! with `NonIntegerOperand` before any result is produced, and an integral
//! float outside the `i64` range fails with `MatrixError::Arithmetic`.
//!
//! `bitAnd` annihilates zero, so sparse traversals only visit coordinates
//! stored in both operands.

use crate::enums::error::{MatrixError, Result};
use crate::enums::operand::Operand;
use crate::kernels::routing::Elementwise;
use crate::traits::element::{Element, Integer};
use crate::traits::operator::BinaryOperator;

/// Which bitwise combination to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitwiseKind {
    And,
    Or,
    Xor,
}

impl BitwiseKind {
    /// Function name reported in errors.
    #[inline]
    pub fn function(self) -> &'static str {
        match self {
            BitwiseKind::And => "bitAnd",
            BitwiseKind::Or => "bitOr",
            BitwiseKind::Xor => "bitXor",
        }
    }

    #[inline(always)]
    fn eval<I: Integer>(self, a: I, b: I) -> I {
        match self {
            BitwiseKind::And => a & b,
            BitwiseKind::Or => a | b,
            BitwiseKind::Xor => a ^ b,
        }
    }
}

/// Element types that support bitwise combination.
pub trait Bitwise: Element {
    fn bitwise(&self, rhs: &Self, kind: BitwiseKind) -> Result<Self>;
}

macro_rules! impl_bitwise_int {
    ($($t:ty),*) => {
        $(
            impl Bitwise for $t {
                #[inline(always)]
                fn bitwise(&self, rhs: &Self, kind: BitwiseKind) -> Result<Self> {
                    Ok(kind.eval(*self, *rhs))
                }
            }
        )*
    };
}

impl_bitwise_int!(i32, i64, u32, u64);

macro_rules! impl_bitwise_float {
    ($($t:ty),*) => {
        $(
            impl Bitwise for $t {
                #[inline]
                fn bitwise(&self, rhs: &Self, kind: BitwiseKind) -> Result<Self> {
                    let a = integral(*self as f64, kind)?;
                    let b = integral(*rhs as f64, kind)?;
                    Ok(kind.eval(a, b) as $t)
                }
            }
        )*
    };
}

impl_bitwise_float!(f32, f64);

impl Bitwise for bool {
    #[inline(always)]
    fn bitwise(&self, rhs: &Self, kind: BitwiseKind) -> Result<Self> {
        Ok(match kind {
            BitwiseKind::And => *self && *rhs,
            BitwiseKind::Or => *self || *rhs,
            BitwiseKind::Xor => *self != *rhs,
        })
    }
}

/// Converts an integral float to `i64`, rejecting fractions, non-finite
/// values and magnitudes `i64` cannot hold.
#[inline]
fn integral(value: f64, kind: BitwiseKind) -> Result<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(MatrixError::NonIntegerOperand {
            function: kind.function(),
        });
    }
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(MatrixError::Arithmetic {
            function: kind.function(),
            reason: "integer out of range",
        });
    }
    Ok(value as i64)
}

macro_rules! bitwise_operator {
    ($(#[$doc:meta])* $name:ident, $kind:ident, $free:ident, $annihilates:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl<T: Bitwise> BinaryOperator<T> for $name {
            type Output = T;

            #[inline]
            fn name(&self) -> &'static str {
                BitwiseKind::$kind.function()
            }

            #[inline]
            fn apply(&self, lhs: &T, rhs: &T) -> Result<T> {
                lhs.bitwise(rhs, BitwiseKind::$kind)
            }

            #[inline]
            fn zero_annihilates(&self) -> bool {
                $annihilates
            }
        }

        $(#[$doc])*
        pub fn $free<T: Bitwise>(lhs: &Operand<T>, rhs: &Operand<T>) -> Result<Operand<T>> {
            Elementwise::new($name).call(lhs, rhs)
        }
    };
}

bitwise_operator!(
    /// Bitwise AND.
    BitAnd, And, bit_and, true
);
bitwise_operator!(
    /// Bitwise inclusive OR.
    BitOr, Or, bit_or, false
);
bitwise_operator!(
    /// Bitwise exclusive OR.
    BitXor, Xor, bit_xor, false
);
