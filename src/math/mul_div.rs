//! Widened multiply-divide and integer square root.
//!
//! Constant-product math overflows naturally at realistic reserve
//! magnitudes when computed at single width, so every multiply-divide in
//! the engine funnels through [`mul_div`], which widens to `u128` before
//! the final floor or ceiling division narrows back down.

use crate::domain::Rounding;

/// Computes `a * b / divisor` with the product widened to `u128`.
///
/// The product of two `u64` values always fits `u128`, so the only
/// failure modes are a zero divisor and a quotient that does not narrow
/// back to `u64`.
///
/// # Examples
///
/// ```
/// use pairpool::domain::Rounding;
/// use pairpool::math::mul_div;
///
/// assert_eq!(mul_div(10, 3, 4, Rounding::Down), Some(7));
/// assert_eq!(mul_div(10, 3, 4, Rounding::Up), Some(8));
/// assert_eq!(mul_div(1, 1, 0, Rounding::Down), None);
/// ```
#[must_use]
pub const fn mul_div(a: u64, b: u64, divisor: u64, rounding: Rounding) -> Option<u64> {
    if divisor == 0 {
        return None;
    }
    let product = (a as u128) * (b as u128);
    let d = divisor as u128;
    let quotient = match rounding {
        Rounding::Down => product / d,
        Rounding::Up => {
            let q = product / d;
            if product % d != 0 {
                q + 1
            } else {
                q
            }
        }
    };
    if quotient > u64::MAX as u128 {
        return None;
    }
    Some(quotient as u64)
}

/// Integer square root via Newton's method.
///
/// Returns the largest `r` with `r * r <= n`. The root of a product of
/// two `u64` values always fits `u64`; callers narrowing the result are
/// responsible for that bound.
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x / 2) + (x % 2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
