//! Swap direction and outcome types.

use core::fmt;

use super::Amount;
use crate::error::PoolError;

/// Selects which reserve is the source and which is the destination of a
/// swap.
///
/// The pool is symmetric: both directions run through the same pricing
/// code path, mirrored by this selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Sell asset 0, receive asset 1.
    ZeroForOne,
    /// Sell asset 1, receive asset 0.
    OneForZero,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::ZeroForOne => Self::OneForZero,
            Self::OneForZero => Self::ZeroForOne,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroForOne => write!(f, "0->1"),
            Self::OneForZero => write!(f, "1->0"),
        }
    }
}

/// The outcome of a swap quote: amounts exchanged and the fee charged.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in` — the fee is a deduction from the input, never
///   the whole of it.
///
/// The full `amount_in` (fee included) is deposited into the source
/// vault; `fee` is the portion that did not participate in pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome` with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if `amount_out` is zero.
    /// - [`PoolError::ArithmeticOverflow`] if `fee >= amount_in`.
    pub const fn new(
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> Result<Self, PoolError> {
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        if amount_out.is_zero() {
            return Err(PoolError::InsufficientLiquidity("swap produced no output"));
        }
        if fee.get() >= amount_in.get() {
            return Err(PoolError::ArithmeticOverflow("fee not below input"));
        }
        Ok(Self {
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the full input amount (fee included).
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee charged on the input.
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome(in={}, out={}, fee={})",
            self.amount_in, self.amount_out, self.fee
        )
    }
}
