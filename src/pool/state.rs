//! The persistent pool record: reserves, share supply, fee parameters.

use core::fmt;

use crate::domain::{
    Amount, DepositOutcome, Shares, SwapDirection, SwapFee, SwapOutcome, WithdrawalOutcome,
};
use crate::error::PoolError;
use crate::math::CheckedArithmetic;

/// The state of one constant-product pool.
///
/// One record exists per trading pair. It tracks the two vault reserves,
/// the outstanding liquidity-share supply, and the fee parameters fixed
/// at creation.
///
/// # Invariants
///
/// - **Funding coherence**: `reserve0 == 0 ⟺ reserve1 == 0 ⟺
///   share_supply == 0`. The pool is either fully empty or fully funded;
///   a drained pool is a valid, recoverable state whose next deposit is
///   a first deposit again.
/// - **Non-decreasing product**: across any swap,
///   `reserve0 * reserve1` never decreases (fees only push it up).
/// - **Fee validity**: `0 <= numerator < denominator`, enforced by
///   [`SwapFee`] at construction.
///
/// All mutation goes through the functional `with_*` appliers, which
/// return the successor state without touching `self`. The lifecycle
/// controller stages the successor before instructing the ledger, so a
/// failed computation can never leave partial effects behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    reserve0: Amount,
    reserve1: Amount,
    share_supply: Shares,
    fee: SwapFee,
}

impl PoolState {
    /// Creates the empty (unfunded) state for a new pool.
    pub const fn empty(fee: SwapFee) -> Self {
        Self {
            reserve0: Amount::ZERO,
            reserve1: Amount::ZERO,
            share_supply: Shares::ZERO,
            fee,
        }
    }

    /// Returns the reserve of asset 0.
    #[must_use]
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Returns the reserve of asset 1.
    #[must_use]
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Returns the outstanding share supply.
    #[must_use]
    pub const fn share_supply(&self) -> Shares {
        self.share_supply
    }

    /// Returns the fee parameters.
    #[must_use]
    pub const fn fee(&self) -> SwapFee {
        self.fee
    }

    /// Returns `true` if the pool holds no liquidity.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.share_supply.is_zero()
    }

    /// Returns the constant-product invariant `reserve0 * reserve1`,
    /// widened to `u128`.
    #[must_use]
    pub const fn k(&self) -> u128 {
        self.reserve0.widened() * self.reserve1.widened()
    }

    /// Returns `(source, destination)` reserves for a swap direction.
    #[must_use]
    pub const fn reserves(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::ZeroForOne => (self.reserve0, self.reserve1),
            SwapDirection::OneForZero => (self.reserve1, self.reserve0),
        }
    }

    /// Returns the successor state after a deposit.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] if a reserve or the
    /// share supply would overflow.
    pub fn with_deposit(&self, outcome: &DepositOutcome) -> Result<Self, PoolError> {
        let next = Self {
            reserve0: self.reserve0.safe_add(&outcome.accepted0())?,
            reserve1: self.reserve1.safe_add(&outcome.accepted1())?,
            share_supply: self.share_supply.safe_add(&outcome.shares_minted())?,
            fee: self.fee,
        };
        next.debug_assert_coherent();
        Ok(next)
    }

    /// Returns the successor state after a withdrawal.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] if a reserve or the
    /// share supply would underflow; the liquidity engine's quote makes
    /// that unreachable for quotes computed against this state.
    pub fn with_withdrawal(&self, outcome: &WithdrawalOutcome) -> Result<Self, PoolError> {
        let next = Self {
            reserve0: self.reserve0.safe_sub(&outcome.amount0())?,
            reserve1: self.reserve1.safe_sub(&outcome.amount1())?,
            share_supply: self.share_supply.safe_sub(&outcome.shares_burned())?,
            fee: self.fee,
        };
        next.debug_assert_coherent();
        Ok(next)
    }

    /// Returns the successor state after a swap.
    ///
    /// The full input amount (fee included) is added to the source
    /// reserve; the output amount leaves the destination reserve. That
    /// asymmetry is what makes the product non-decreasing.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] if the source reserve
    /// would overflow or the destination reserve would underflow.
    pub fn with_swap(
        &self,
        outcome: &SwapOutcome,
        direction: SwapDirection,
    ) -> Result<Self, PoolError> {
        let (src, dst) = self.reserves(direction);
        let new_src = src.safe_add(&outcome.amount_in())?;
        let new_dst = dst.safe_sub(&outcome.amount_out())?;
        let (reserve0, reserve1) = match direction {
            SwapDirection::ZeroForOne => (new_src, new_dst),
            SwapDirection::OneForZero => (new_dst, new_src),
        };
        let next = Self {
            reserve0,
            reserve1,
            share_supply: self.share_supply,
            fee: self.fee,
        };
        debug_assert!(next.k() >= self.k(), "constant product must not decrease");
        next.debug_assert_coherent();
        Ok(next)
    }

    fn debug_assert_coherent(&self) {
        debug_assert_eq!(
            self.reserve0.is_zero(),
            self.reserve1.is_zero(),
            "reserves must drain together"
        );
        debug_assert_eq!(
            self.reserve0.is_zero(),
            self.share_supply.is_zero(),
            "reserves and share supply must drain together"
        );
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolState(reserve0={}, reserve1={}, supply={}, fee={})",
            self.reserve0, self.reserve1, self.share_supply, self.fee
        )
    }
}
