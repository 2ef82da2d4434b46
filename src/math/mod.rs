//! Arithmetic utilities for pool calculations.
//!
//! This module provides [`mul_div`] for overflow-safe multiply-divide
//! sequences (widened intermediates, explicit rounding), [`isqrt`] for
//! the first-deposit issuance policy, and [`CheckedArithmetic`] for
//! fallible addition and subtraction on domain types.

mod checked;
mod mul_div;

pub use checked::CheckedArithmetic;
pub use mul_div::{isqrt, mul_div};
