//! Property-based coverage for the pool engines.
//!
//! These properties exercise the quoting and state-transition code
//! across randomized reserves, fee rates, and trade sizes, pinning the
//! economic invariants that the unit tests only spot-check.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::domain::{Amount, DepositOutcome, Shares, SwapDirection, SwapFee};
use crate::error::PoolError;
use crate::pool::{quote_deposit, quote_swap, quote_withdrawal, PoolState};

const MAX_RESERVE: u64 = 1_000_000_000_000;
const MAX_TRADE: u64 = 1_000_000_000_000;

fn funded_pool(r0: u64, r1: u64, fee_num: u64) -> PoolState {
    let Ok(fee) = SwapFee::new(fee_num, 10_000) else {
        panic!("valid fee");
    };
    let supply = crate::math::isqrt((r0 as u128) * (r1 as u128)) as u64;
    let outcome = DepositOutcome::new(Amount::new(r0), Amount::new(r1), Shares::new(supply.max(1)));
    let Ok(state) = PoolState::empty(fee).with_deposit(&outcome) else {
        panic!("funding");
    };
    state
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![
        Just(SwapDirection::ZeroForOne),
        Just(SwapDirection::OneForZero),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// A committed swap never decreases the reserve product.
    #[test]
    fn swap_never_decreases_product(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
        fee_num in 0u64..100,
        amount_in in 1u64..MAX_TRADE,
        direction in direction_strategy(),
    ) {
        let state = funded_pool(r0, r1, fee_num);
        if let Ok(outcome) = quote_swap(&state, Amount::new(amount_in), Amount::ZERO, direction) {
            let next = state.with_swap(&outcome, direction);
            prop_assert!(next.is_ok());
            if let Ok(next) = next {
                prop_assert!(next.k() >= state.k());
            }
        }
    }

    /// No swap can empty the destination reserve.
    #[test]
    fn swap_never_drains_destination(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
        fee_num in 0u64..100,
        amount_in in 1u64..MAX_TRADE,
        direction in direction_strategy(),
    ) {
        let state = funded_pool(r0, r1, fee_num);
        if let Ok(outcome) = quote_swap(&state, Amount::new(amount_in), Amount::ZERO, direction) {
            let (_, dst) = state.reserves(direction);
            prop_assert!(outcome.amount_out() < dst);
        }
    }

    /// The fee charged plus the net input always reassemble the input,
    /// and the fee never swallows the whole trade.
    #[test]
    fn swap_fee_accounting(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
        fee_num in 0u64..100,
        amount_in in 1u64..MAX_TRADE,
    ) {
        let state = funded_pool(r0, r1, fee_num);
        if let Ok(outcome) =
            quote_swap(&state, Amount::new(amount_in), Amount::ZERO, SwapDirection::ZeroForOne)
        {
            prop_assert!(outcome.fee() < outcome.amount_in());
            let Ok(net) = state.fee().net_of_fee(outcome.amount_in()) else {
                panic!("net_of_fee");
            };
            prop_assert_eq!(
                net.get() + outcome.fee().get(),
                outcome.amount_in().get()
            );
        }
    }

    /// A deposit quote never pulls more than the caller offered, and the
    /// minted shares are proportional (floored) on both sides.
    #[test]
    fn deposit_respects_desired_bounds(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
        d0 in 0u64..MAX_TRADE,
        d1 in 0u64..MAX_TRADE,
    ) {
        let state = funded_pool(r0, r1, 30);
        if let Ok(outcome) = quote_deposit(&state, Amount::new(d0), Amount::new(d1)) {
            prop_assert!(outcome.accepted0().get() <= d0);
            prop_assert!(outcome.accepted1().get() <= d1);
            prop_assert!(!outcome.shares_minted().is_zero());

            let supply = state.share_supply().widened();
            let by0 = outcome.accepted0().widened() * supply / state.reserve0().widened();
            let by1 = outcome.accepted1().widened() * supply / state.reserve1().widened();
            prop_assert_eq!(outcome.shares_minted().widened(), by0.min(by1));
        }
    }

    /// Depositing and immediately withdrawing the same shares never pays
    /// out more than was put in.
    #[test]
    fn deposit_withdraw_round_trip_never_profits(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
        d0 in 1u64..MAX_TRADE,
        d1 in 1u64..MAX_TRADE,
    ) {
        let state = funded_pool(r0, r1, 30);
        if let Ok(deposit) = quote_deposit(&state, Amount::new(d0), Amount::new(d1)) {
            let Ok(after) = state.with_deposit(&deposit) else {
                panic!("apply deposit");
            };
            let Ok(withdrawal) = quote_withdrawal(&after, deposit.shares_minted()) else {
                panic!("quote withdrawal");
            };
            prop_assert!(withdrawal.amount0() <= deposit.accepted0());
            prop_assert!(withdrawal.amount1() <= deposit.accepted1());
        }
    }

    /// Withdrawal pays out strictly proportionally, floored.
    #[test]
    fn withdrawal_is_proportional(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
        burn_ratio in 1u64..=100,
    ) {
        let state = funded_pool(r0, r1, 30);
        let burn = (state.share_supply().get() * burn_ratio / 100).max(1);
        let Ok(outcome) = quote_withdrawal(&state, Shares::new(burn)) else {
            panic!("quote withdrawal");
        };
        let supply = state.share_supply().widened();
        prop_assert_eq!(
            outcome.amount0().widened(),
            state.reserve0().widened() * (burn as u128) / supply
        );
        prop_assert_eq!(
            outcome.amount1().widened(),
            state.reserve1().widened() * (burn as u128) / supply
        );
    }

    /// Burning the full supply drains both reserves exactly and the
    /// drained pool accepts a fresh first deposit.
    #[test]
    fn full_burn_drains_and_recovers(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
    ) {
        let state = funded_pool(r0, r1, 30);
        let Ok(outcome) = quote_withdrawal(&state, state.share_supply()) else {
            panic!("quote withdrawal");
        };
        prop_assert_eq!(outcome.amount0(), state.reserve0());
        prop_assert_eq!(outcome.amount1(), state.reserve1());

        let Ok(drained) = state.with_withdrawal(&outcome) else {
            panic!("apply withdrawal");
        };
        prop_assert!(drained.is_empty());
        prop_assert!(quote_deposit(&drained, Amount::new(r0), Amount::new(r1)).is_ok());
    }

    /// A higher fee rate never produces more output for the same trade.
    #[test]
    fn higher_fee_never_increases_output(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
        fee_lo in 0u64..100,
        fee_delta in 1u64..100,
        amount_in in 1u64..MAX_TRADE,
    ) {
        let cheap = funded_pool(r0, r1, fee_lo);
        let dear = funded_pool(r0, r1, fee_lo + fee_delta);
        let cheap_quote =
            quote_swap(&cheap, Amount::new(amount_in), Amount::ZERO, SwapDirection::ZeroForOne);
        let dear_quote =
            quote_swap(&dear, Amount::new(amount_in), Amount::ZERO, SwapDirection::ZeroForOne);
        if let (Ok(cheap_quote), Ok(dear_quote)) = (cheap_quote, dear_quote) {
            prop_assert!(dear_quote.amount_out() <= cheap_quote.amount_out());
        }
    }

    /// Redeeming in two installments never beats a single combined
    /// redemption, and floor rounding loses at most one unit per asset
    /// per installment.
    #[test]
    fn split_redemption_within_rounding_tolerance(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
        burn_pct in 2u64..=100,
        split_pct in 1u64..100,
    ) {
        let state = funded_pool(r0, r1, 30);
        prop_assume!(state.share_supply().get() >= 2);
        let total = (state.share_supply().get() * burn_pct / 100).max(2);
        let first = (total * split_pct / 100).clamp(1, total - 1);
        let second = total - first;

        let Ok(combined) = quote_withdrawal(&state, Shares::new(total)) else {
            panic!("combined quote");
        };
        let Ok(part1) = quote_withdrawal(&state, Shares::new(first)) else {
            panic!("first installment");
        };
        let Ok(mid) = state.with_withdrawal(&part1) else {
            panic!("apply first installment");
        };
        let Ok(part2) = quote_withdrawal(&mid, Shares::new(second)) else {
            panic!("second installment");
        };

        let split0 = part1.amount0().get() + part2.amount0().get();
        let split1 = part1.amount1().get() + part2.amount1().get();
        prop_assert!(split0 <= combined.amount0().get());
        prop_assert!(split1 <= combined.amount1().get());
        prop_assert!(combined.amount0().get() - split0 <= 2);
        prop_assert!(combined.amount1().get() - split1 <= 2);
    }

    /// Depositing an exact integer multiple of the reserves is accepted
    /// in full and mints exactly that multiple of the supply.
    #[test]
    fn exact_multiple_deposit_is_lossless(
        r0 in 1u64..1_000_000,
        r1 in 1u64..1_000_000,
        multiple in 1u64..1_000,
    ) {
        let state = funded_pool(r0, r1, 30);
        let d0 = r0 * multiple;
        let d1 = r1 * multiple;
        let Ok(outcome) = quote_deposit(&state, Amount::new(d0), Amount::new(d1)) else {
            panic!("quote deposit");
        };
        prop_assert_eq!(outcome.accepted0().get(), d0);
        prop_assert_eq!(outcome.accepted1().get(), d1);
        prop_assert_eq!(
            outcome.shares_minted().get(),
            state.share_supply().get() * multiple
        );
    }

    /// A zero/zero deposit is always rejected and never mints.
    #[test]
    fn zero_zero_deposit_always_rejected(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
    ) {
        let state = funded_pool(r0, r1, 30);
        prop_assert_eq!(
            quote_deposit(&state, Amount::ZERO, Amount::ZERO),
            Err(PoolError::ZeroAmount)
        );
    }

    /// Round-trip swaps leak value to the pool, never from it: swapping
    /// the received output straight back returns at most the original
    /// input.
    #[test]
    fn round_trip_swap_never_profits(
        r0 in 1u64..MAX_RESERVE,
        r1 in 1u64..MAX_RESERVE,
        fee_num in 0u64..100,
        amount_in in 1u64..MAX_TRADE,
    ) {
        let state = funded_pool(r0, r1, fee_num);
        let forward = quote_swap(
            &state,
            Amount::new(amount_in),
            Amount::ZERO,
            SwapDirection::ZeroForOne,
        );
        if let Ok(forward) = forward {
            let Ok(mid) = state.with_swap(&forward, SwapDirection::ZeroForOne) else {
                panic!("apply forward swap");
            };
            if let Ok(back) = quote_swap(
                &mid,
                forward.amount_out(),
                Amount::ZERO,
                SwapDirection::OneForZero,
            ) {
                prop_assert!(back.amount_out() <= forward.amount_in());
            }
        }
    }
}
