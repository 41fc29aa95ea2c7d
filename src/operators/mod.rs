// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operators Module
//!
//! Scalar operators shipped with the engine, each paired with a free
//! function that lifts it over any operand kind.

pub mod arithmetic;
pub mod bitwise;
pub mod relational;
pub mod std_ops;
pub mod trigonometry;

pub use arithmetic::{Add, Arithmetic, Divide, Multiply, Subtract, add, divide, multiply, subtract};
pub use bitwise::{BitAnd, BitOr, BitXor, Bitwise, bit_and, bit_or, bit_xor};
pub use relational::{
    Comparable, Compare, Equal, Larger, LargerEq, Smaller, SmallerEq, Unequal, compare, equal,
    larger, larger_eq, nearly_equal, smaller, smaller_eq, unequal,
};
pub use trigonometry::{Cosh, Coth, Csch, Sech, Sinh, Tanh, cosh, coth, csch, sech, sinh, tanh};
