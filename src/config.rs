// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Config Module
//!
//! Runtime settings for the shipped scalar operators.
//!
//! Compile-time switches live in the Cargo `[features]` table instead.

/// Relative tolerance used by floating-point comparisons.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Runtime configuration.
///
/// ### Properties
/// - `epsilon`: relative tolerance for `nearly_equal`, used by the
/// relational operators on floats, and by `ApproxZero::from_config`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Config {
    /// Overrides the comparison tolerance.
    ///
    /// Negative or non-finite values fall back to exact comparison.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = if epsilon.is_finite() && epsilon >= 0.0 {
            epsilon
        } else {
            log::warn!("ignoring invalid epsilon {epsilon}, using exact comparison");
            0.0
        };
        self
    }
}
