//! Outcomes of liquidity provision and withdrawal quotes.

use core::fmt;

use super::{Amount, Shares};

/// The outcome of a deposit quote: the amounts the pool actually accepts
/// and the shares it will mint for them.
///
/// The accepted amounts preserve the pool's current reserve ratio; any
/// surplus of the caller's desired amounts is simply never pulled from
/// the depositor. For a first deposit the accepted amounts equal the
/// desired amounts and establish the initial price.
///
/// # Invariants
///
/// - `shares_minted > 0` — dust deposits are rejected before an outcome
///   is constructed.
/// - `accepted0` and `accepted1` are both positive on a first deposit;
///   on subsequent deposits the binding side is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositOutcome {
    accepted0: Amount,
    accepted1: Amount,
    shares_minted: Shares,
}

impl DepositOutcome {
    /// Creates a new `DepositOutcome`.
    ///
    /// Callers (the liquidity engine) are responsible for the invariants
    /// above; this constructor only records the values.
    pub(crate) const fn new(accepted0: Amount, accepted1: Amount, shares_minted: Shares) -> Self {
        Self {
            accepted0,
            accepted1,
            shares_minted,
        }
    }

    /// Returns the accepted amount of asset 0.
    #[must_use]
    pub const fn accepted0(&self) -> Amount {
        self.accepted0
    }

    /// Returns the accepted amount of asset 1.
    #[must_use]
    pub const fn accepted1(&self) -> Amount {
        self.accepted1
    }

    /// Returns the shares minted for this deposit.
    #[must_use]
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }
}

impl fmt::Display for DepositOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DepositOutcome(accepted0={}, accepted1={}, minted={})",
            self.accepted0, self.accepted1, self.shares_minted
        )
    }
}

/// The outcome of a withdrawal quote: the proportional redemption
/// amounts for a share burn.
///
/// Both amounts are floor-divided; redemption of a dust share count can
/// legitimately pay out zero of one or both assets while still burning
/// the shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalOutcome {
    amount0: Amount,
    amount1: Amount,
    shares_burned: Shares,
}

impl WithdrawalOutcome {
    /// Creates a new `WithdrawalOutcome`.
    pub(crate) const fn new(amount0: Amount, amount1: Amount, shares_burned: Shares) -> Self {
        Self {
            amount0,
            amount1,
            shares_burned,
        }
    }

    /// Returns the redeemed amount of asset 0.
    #[must_use]
    pub const fn amount0(&self) -> Amount {
        self.amount0
    }

    /// Returns the redeemed amount of asset 1.
    #[must_use]
    pub const fn amount1(&self) -> Amount {
        self.amount1
    }

    /// Returns the shares burned by this withdrawal.
    #[must_use]
    pub const fn shares_burned(&self) -> Shares {
        self.shares_burned
    }
}

impl fmt::Display for WithdrawalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WithdrawalOutcome(amount0={}, amount1={}, burned={})",
            self.amount0, self.amount1, self.shares_burned
        )
    }
}
