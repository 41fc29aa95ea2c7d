// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Arithmetic Operators
//!
//! `add`, `subtract`, `multiply` and `divide` lifted over every operand kind.
//!
//! Integer arithmetic is checked: overflow and division by zero fail with
//! `MatrixError::Arithmetic` instead of wrapping or panicking. Floats follow
//! IEEE-754, so `0 / 0` is NaN and a sparse divide densifies with NaN.

use crate::enums::error::{MatrixError, Result};
use crate::enums::operand::Operand;
use crate::kernels::routing::Elementwise;
use crate::traits::element::{Element, Integer};
use crate::traits::operator::BinaryOperator;

/// Which arithmetic operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticKind {
    /// Function name reported in logs and errors.
    #[inline]
    pub fn function(self) -> &'static str {
        match self {
            ArithmeticKind::Add => "add",
            ArithmeticKind::Subtract => "subtract",
            ArithmeticKind::Multiply => "multiply",
            ArithmeticKind::Divide => "divide",
        }
    }
}

/// Element types supporting the four basic operations.
pub trait Arithmetic: Element {
    fn arithmetic(&self, rhs: &Self, kind: ArithmeticKind) -> Result<Self>;
}

/// Checked integer arithmetic shared by every integral element.
#[inline]
fn checked_integer<I: Integer>(a: I, b: I, kind: ArithmeticKind) -> Result<I> {
    let out = match kind {
        ArithmeticKind::Add => a.checked_add(&b),
        ArithmeticKind::Subtract => a.checked_sub(&b),
        ArithmeticKind::Multiply => a.checked_mul(&b),
        ArithmeticKind::Divide => {
            if b.is_zero() {
                return Err(MatrixError::Arithmetic {
                    function: kind.function(),
                    reason: "division by zero",
                });
            }
            a.checked_div(&b)
        }
    };
    out.ok_or(MatrixError::Arithmetic {
        function: kind.function(),
        reason: "integer overflow",
    })
}

macro_rules! impl_arithmetic_int {
    ($($t:ty),*) => {
        $(
            impl Arithmetic for $t {
                #[inline]
                fn arithmetic(&self, rhs: &Self, kind: ArithmeticKind) -> Result<Self> {
                    checked_integer(*self, *rhs, kind)
                }
            }
        )*
    };
}

impl_arithmetic_int!(i32, i64, u32, u64);

macro_rules! impl_arithmetic_float {
    ($($t:ty),*) => {
        $(
            impl Arithmetic for $t {
                #[inline(always)]
                fn arithmetic(&self, rhs: &Self, kind: ArithmeticKind) -> Result<Self> {
                    Ok(match kind {
                        ArithmeticKind::Add => self + rhs,
                        ArithmeticKind::Subtract => self - rhs,
                        ArithmeticKind::Multiply => self * rhs,
                        ArithmeticKind::Divide => self / rhs,
                    })
                }
            }
        )*
    };
}

impl_arithmetic_float!(f32, f64);

#[cfg(feature = "complex")]
impl Arithmetic for num_complex::Complex<f64> {
    #[inline(always)]
    fn arithmetic(&self, rhs: &Self, kind: ArithmeticKind) -> Result<Self> {
        Ok(match kind {
            ArithmeticKind::Add => self + rhs,
            ArithmeticKind::Subtract => self - rhs,
            ArithmeticKind::Multiply => self * rhs,
            ArithmeticKind::Divide => self / rhs,
        })
    }
}

macro_rules! arithmetic_operator {
    ($(#[$doc:meta])* $name:ident, $kind:ident, $free:ident, $annihilates:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl<T: Arithmetic> BinaryOperator<T> for $name {
            type Output = T;

            #[inline]
            fn name(&self) -> &'static str {
                ArithmeticKind::$kind.function()
            }

            #[inline]
            fn apply(&self, lhs: &T, rhs: &T) -> Result<T> {
                lhs.arithmetic(rhs, ArithmeticKind::$kind)
            }

            #[inline]
            fn zero_annihilates(&self) -> bool {
                $annihilates
            }
        }

        $(#[$doc])*
        pub fn $free<T: Arithmetic>(lhs: &Operand<T>, rhs: &Operand<T>) -> Result<Operand<T>> {
            Elementwise::new($name).call(lhs, rhs)
        }
    };
}

arithmetic_operator!(
    /// Elementwise sum.
    Add, Add, add, false
);
arithmetic_operator!(
    /// Elementwise difference.
    Subtract, Subtract, subtract, false
);
arithmetic_operator!(
    /// Elementwise product.
    ///
    /// Treated as zero-annihilating, so sparse traversals skip coordinates
    /// implicit in either operand, including where the other side is NaN.
    Multiply, Multiply, multiply, true
);
arithmetic_operator!(
    /// Elementwise quotient.
    Divide, Divide, divide, false
);
