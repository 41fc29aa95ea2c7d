// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Routing Module
//!
//! Operand classification, sequence coercion and dispatch of elementwise
//! operators to their traversal strategy.

pub mod coercion;
pub mod dispatch;

pub use dispatch::{Elementwise, elementwise, map_unary, map_unary_with};
