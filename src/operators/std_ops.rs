// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operand Operators
//!
//! Standard Rust operators (`+`, `-`, `*`, `/`, `&`, `|`, `^`) for borrowed
//! operands.
//!
//! This enables ergonomic elementwise calls like:
//! ```rust
//! use sparsewise::Operand;
//! let a = Operand::vector(vec![1, 2, 3]);
//! let b = Operand::scalar(10);
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum, Operand::vector(vec![11, 12, 13]));
//! ```
//!
//! Each operator returns a `Result`, since operands may disagree in shape.

use std::ops;

use crate::enums::error::Result;
use crate::enums::operand::Operand;
use crate::operators::arithmetic::{self, Arithmetic};
use crate::operators::bitwise::{self, Bitwise};

macro_rules! impl_operand_op {
    ($trait:ident, $method:ident, $bound:ident, $func:path) => {
        impl<'a, T: $bound> ops::$trait<&'a Operand<T>> for &'a Operand<T> {
            type Output = Result<Operand<T>>;

            fn $method(self, rhs: &'a Operand<T>) -> Self::Output {
                $func(self, rhs)
            }
        }
    };
}

impl_operand_op!(Add, add, Arithmetic, arithmetic::add);
impl_operand_op!(Sub, sub, Arithmetic, arithmetic::subtract);
impl_operand_op!(Mul, mul, Arithmetic, arithmetic::multiply);
impl_operand_op!(Div, div, Arithmetic, arithmetic::divide);
impl_operand_op!(BitAnd, bitand, Bitwise, bitwise::bit_and);
impl_operand_op!(BitOr, bitor, Bitwise, bitwise::bit_or);
impl_operand_op!(BitXor, bitxor, Bitwise, bitwise::bit_xor);
