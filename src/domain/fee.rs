//! Swap fee as an exact rational, fixed at pool creation.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::PoolError;
use crate::math::mul_div;

/// The swap fee rate `numerator / denominator`, applied to the input
/// amount of every swap.
///
/// Construction enforces `0 <= numerator < denominator` (so the fee is
/// always strictly below 100%) and a non-zero denominator. The
/// parameters are immutable after pool creation.
///
/// The fee is deducted from the input *before* the constant-product
/// pricing formula, so fee revenue stays in the source vault as extra
/// reserve. That is the mechanism that raises share redemption value
/// over time.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{Amount, SwapFee};
///
/// let fee = SwapFee::new(1, 10_000).expect("valid fee");
/// let net = fee.net_of_fee(Amount::new(10)).expect("no overflow");
/// // 10 * 9_999 / 10_000 = 9.999, floored
/// assert_eq!(net, Amount::new(9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapFee {
    numerator: u64,
    denominator: u64,
}

impl SwapFee {
    /// Zero fee (0/1).
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// Creates a new `SwapFee`, validating the rate.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidFeeConfig`] if `denominator` is zero
    /// or `numerator >= denominator`.
    pub const fn new(numerator: u64, denominator: u64) -> Result<Self, PoolError> {
        if denominator == 0 || numerator >= denominator {
            return Err(PoolError::InvalidFeeConfig {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the fee numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns `true` if the rate is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Computes the input net of fee:
    /// `amount * (denominator - numerator) / denominator`, floored.
    ///
    /// This is the exact complement form; the fee actually charged is
    /// `amount - net_of_fee(amount)`, i.e. the fee rounds up in the
    /// pool's favour.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] if the widened quotient
    /// does not narrow back to `u64` (unreachable for a valid rate, kept
    /// as a hard error rather than an assumption).
    pub fn net_of_fee(&self, amount: Amount) -> Result<Amount, PoolError> {
        // complement > 0 by construction (numerator < denominator)
        let complement = self.denominator - self.numerator;
        mul_div(amount.get(), complement, self.denominator, Rounding::Down)
            .map(Amount::new)
            .ok_or(PoolError::ArithmeticOverflow("net-of-fee computation"))
    }

    /// Computes the fee charged on `amount`: `amount - net_of_fee(amount)`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`net_of_fee`](Self::net_of_fee).
    pub fn fee_on(&self, amount: Amount) -> Result<Amount, PoolError> {
        let net = self.net_of_fee(amount)?;
        amount
            .checked_sub(&net)
            .ok_or(PoolError::ArithmeticOverflow("fee exceeds input"))
    }
}

impl fmt::Display for SwapFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
