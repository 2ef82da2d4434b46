//! The swap engine: constant-product pricing with fee-on-input.
//!
//! A swap quote is a pure function over a [`PoolState`] snapshot. The
//! fee is deducted from the input before pricing, but the full input
//! (fee included) lands in the source reserve, so the reserve product
//! never decreases.

use crate::domain::{Amount, Rounding, SwapDirection, SwapOutcome};
use crate::error::PoolError;
use crate::math::{mul_div, CheckedArithmetic};
use crate::pool::PoolState;

/// Quotes a swap of `amount_in` in `direction` against the pool.
///
/// Pricing solves the constant-product equation for the net-of-fee
/// input:
///
/// ```text
/// net = amount_in * (denominator - numerator) / denominator   (floored)
/// out = dst_reserve * net / (src_reserve + net)               (floored)
/// ```
///
/// Because `net < src_reserve + net`, the output is always strictly
/// below the destination reserve; a swap can never drain a pool.
///
/// # Errors
///
/// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
/// - [`PoolError::InsufficientLiquidity`] if the pool holds no
///   liquidity, or if rounding leaves the trader with no output.
/// - [`PoolError::SlippageExceeded`] if the output falls below
///   `min_amount_out`; the quote carries both values.
/// - [`PoolError::ArithmeticOverflow`] if the post-swap source reserve
///   exceeds `u64`.
pub fn quote_swap(
    state: &PoolState,
    amount_in: Amount,
    min_amount_out: Amount,
    direction: SwapDirection,
) -> Result<SwapOutcome, PoolError> {
    if state.is_empty() {
        return Err(PoolError::InsufficientLiquidity("pool holds no liquidity"));
    }
    if amount_in.is_zero() {
        return Err(PoolError::ZeroAmount);
    }

    let net = state.fee().net_of_fee(amount_in)?;
    if net.is_zero() {
        return Err(PoolError::InsufficientLiquidity(
            "swap input fully consumed by fee",
        ));
    }
    let fee_charged = state.fee().fee_on(amount_in)?;

    let (src, dst) = state.reserves(direction);
    let new_src = src.safe_add(&net)?;
    let amount_out = mul_div(dst.get(), net.get(), new_src.get(), Rounding::Down)
        .map(Amount::new)
        .ok_or(PoolError::ArithmeticOverflow("swap output computation"))?;

    if amount_out.is_zero() {
        return Err(PoolError::InsufficientLiquidity(
            "swap produced no output",
        ));
    }
    if amount_out < min_amount_out {
        return Err(PoolError::SlippageExceeded {
            amount_out: amount_out.get(),
            min_amount_out: min_amount_out.get(),
        });
    }

    SwapOutcome::new(amount_in, amount_out, fee_charged)
}
