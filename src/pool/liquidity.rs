//! The liquidity engine: deposit and withdrawal quoting.
//!
//! Both operations are pure functions over a [`PoolState`] snapshot.
//! They decide how much of the caller's desired amounts the pool
//! accepts and how many shares move, but never touch ledger balances;
//! the lifecycle controller applies the quoted outcome atomically.

use crate::domain::{Amount, DepositOutcome, Rounding, Shares, WithdrawalOutcome};
use crate::error::PoolError;
use crate::math::{isqrt, mul_div};
use crate::pool::PoolState;

/// Quotes a deposit of up to `desired0` / `desired1` into the pool.
///
/// On a first deposit (empty pool) both desired amounts are accepted in
/// full, they establish the initial price, and issuance is the integer
/// square root of their product. On subsequent deposits the desired
/// amounts are upper bounds: the engine scales one side down to the
/// current reserve ratio so the depositor is never charged a surplus,
/// then issues shares as the floored minimum of the two proportional
/// entitlements.
///
/// # Errors
///
/// - [`PoolError::ZeroAmount`] if both desired amounts are zero, or if a
///   first deposit leaves either side zero.
/// - [`PoolError::InsufficientLiquidity`] if the deposit is too small to
///   mint a single share.
/// - [`PoolError::ArithmeticOverflow`] if a scaled amount or the share
///   entitlement exceeds `u64`.
pub fn quote_deposit(
    state: &PoolState,
    desired0: Amount,
    desired1: Amount,
) -> Result<DepositOutcome, PoolError> {
    if desired0.is_zero() && desired1.is_zero() {
        return Err(PoolError::ZeroAmount);
    }
    if state.is_empty() {
        return quote_first_deposit(desired0, desired1);
    }

    let (accepted0, accepted1) = ratio_amounts(state, desired0, desired1)?;

    let supply = state.share_supply().get();
    let entitlement0 = mul_div(
        accepted0.get(),
        supply,
        state.reserve0().get(),
        Rounding::Down,
    )
    .ok_or(PoolError::ArithmeticOverflow("share entitlement for asset 0"))?;
    let entitlement1 = mul_div(
        accepted1.get(),
        supply,
        state.reserve1().get(),
        Rounding::Down,
    )
    .ok_or(PoolError::ArithmeticOverflow("share entitlement for asset 1"))?;

    let minted = entitlement0.min(entitlement1);
    if minted == 0 {
        return Err(PoolError::InsufficientLiquidity(
            "deposit too small to mint shares",
        ));
    }
    Ok(DepositOutcome::new(
        accepted0,
        accepted1,
        Shares::new(minted),
    ))
}

/// First deposit: both sides are accepted as-is and set the price.
///
/// Issuance is `isqrt(desired0 * desired1)`, which makes the initial
/// share count independent of how the depositor denominates the two
/// assets and reproduces a one-share-per-unit grant for equal deposits.
fn quote_first_deposit(desired0: Amount, desired1: Amount) -> Result<DepositOutcome, PoolError> {
    if desired0.is_zero() || desired1.is_zero() {
        return Err(PoolError::ZeroAmount);
    }
    // Root of a u64 product always fits u64.
    let minted = isqrt(desired0.widened() * desired1.widened()) as u64;
    if minted == 0 {
        return Err(PoolError::InsufficientLiquidity(
            "deposit too small to mint shares",
        ));
    }
    Ok(DepositOutcome::new(
        desired0,
        desired1,
        Shares::new(minted),
    ))
}

/// Scales the desired amounts to the pool's current reserve ratio.
///
/// Whichever side is in surplus relative to the ratio is floored down to
/// match the other; the depositor's desired amounts are never exceeded.
fn ratio_amounts(
    state: &PoolState,
    desired0: Amount,
    desired1: Amount,
) -> Result<(Amount, Amount), PoolError> {
    let r0 = state.reserve0().get();
    let r1 = state.reserve1().get();

    let optimal1 = mul_div(desired0.get(), r1, r0, Rounding::Down)
        .ok_or(PoolError::ArithmeticOverflow("ratio-matched amount for asset 1"))?;
    if optimal1 <= desired1.get() {
        return Ok((desired0, Amount::new(optimal1)));
    }
    let optimal0 = mul_div(desired1.get(), r0, r1, Rounding::Down)
        .ok_or(PoolError::ArithmeticOverflow("ratio-matched amount for asset 0"))?;
    debug_assert!(optimal0 <= desired0.get());
    Ok((Amount::new(optimal0), desired1))
}

/// Quotes a withdrawal burning `shares` from the pool.
///
/// Redemption is strictly proportional: each asset pays out
/// `reserve * shares / supply`, floored. Burning the entire supply
/// drains the pool back to its empty (recoverable) state.
///
/// # Errors
///
/// - [`PoolError::PoolEmpty`] if the pool holds no liquidity.
/// - [`PoolError::ZeroAmount`] if `shares` is zero.
/// - [`PoolError::InsufficientShares`] if `shares` exceeds the supply.
pub fn quote_withdrawal(
    state: &PoolState,
    shares: Shares,
) -> Result<WithdrawalOutcome, PoolError> {
    if state.is_empty() {
        return Err(PoolError::PoolEmpty);
    }
    if shares.is_zero() {
        return Err(PoolError::ZeroAmount);
    }
    let supply = state.share_supply();
    if shares > supply {
        return Err(PoolError::InsufficientShares);
    }

    let amount0 = mul_div(
        state.reserve0().get(),
        shares.get(),
        supply.get(),
        Rounding::Down,
    )
    .ok_or(PoolError::ArithmeticOverflow("redemption of asset 0"))?;
    let amount1 = mul_div(
        state.reserve1().get(),
        shares.get(),
        supply.get(),
        Rounding::Down,
    )
    .ok_or(PoolError::ArithmeticOverflow("redemption of asset 1"))?;

    Ok(WithdrawalOutcome::new(
        Amount::new(amount0),
        Amount::new(amount1),
        shares,
    ))
}
