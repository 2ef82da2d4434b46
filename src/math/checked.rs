//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] provides fallible addition and subtraction that
//! return [`Result<Self, PoolError>`](crate::error::PoolError) instead of
//! panicking on overflow or underflow.
//!
//! # Contract
//!
//! - **No panics** — all error conditions produce `Err`.
//! - **No saturation** — saturation hides bugs; errors propagate instead.
//! - Implementations delegate to the inner type's checked operations.

use crate::domain::{Amount, Shares};
use crate::error::PoolError;

/// Fallible arithmetic for domain wrapper types.
///
/// Every method returns a specific [`PoolError::ArithmeticOverflow`]
/// description, so a failed reserve update is distinguishable from a
/// failed supply update in the error message.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] if the result exceeds
    /// the representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::ArithmeticOverflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::ArithmeticOverflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::ArithmeticOverflow("share subtraction underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    mod amount {
        use super::*;

        #[test]
        fn add_ok() {
            let Ok(r) = Amount::new(100).safe_add(&Amount::new(200)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Amount::new(300));
        }

        #[test]
        fn add_overflow() {
            let err = Amount::MAX.safe_add(&Amount::new(1));
            let Err(PoolError::ArithmeticOverflow(_)) = err else {
                panic!("expected ArithmeticOverflow");
            };
        }

        #[test]
        fn sub_ok() {
            let Ok(r) = Amount::new(300).safe_sub(&Amount::new(100)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Amount::new(200));
        }

        #[test]
        fn sub_underflow() {
            let err = Amount::new(1).safe_sub(&Amount::new(2));
            let Err(PoolError::ArithmeticOverflow(_)) = err else {
                panic!("expected ArithmeticOverflow");
            };
        }

        #[test]
        fn chaining_works() {
            let result = Amount::new(100)
                .safe_add(&Amount::new(200))
                .and_then(|v| v.safe_sub(&Amount::new(50)));
            let Ok(r) = result else {
                panic!("expected Ok");
            };
            assert_eq!(r, Amount::new(250));
        }
    }

    mod shares {
        use super::*;

        #[test]
        fn add_ok() {
            let Ok(r) = Shares::new(100).safe_add(&Shares::new(200)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Shares::new(300));
        }

        #[test]
        fn add_overflow() {
            let err = Shares::new(u64::MAX).safe_add(&Shares::new(1));
            let Err(PoolError::ArithmeticOverflow(_)) = err else {
                panic!("expected ArithmeticOverflow");
            };
        }

        #[test]
        fn sub_ok() {
            let Ok(r) = Shares::new(300).safe_sub(&Shares::new(100)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Shares::new(200));
        }

        #[test]
        fn sub_underflow() {
            let err = Shares::new(1).safe_sub(&Shares::new(2));
            let Err(PoolError::ArithmeticOverflow(_)) = err else {
                panic!("expected ArithmeticOverflow");
            };
        }
    }
}
