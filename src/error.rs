//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every variant is terminal for the instruction that raised
//! it: the engine performs no internal retry and never applies partial
//! effects. The controller surfaces each error verbatim to the caller.

use thiserror::Error;

use crate::ledger::LedgerError;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PoolError>;

/// The unified error enum for pool operations.
///
/// Arithmetic faults are never silently wrapped: any overflow, underflow,
/// or failed narrowing surfaces as [`PoolError::ArithmeticOverflow`] with
/// a static description of the computation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Fee parameters violate `0 <= numerator < denominator`.
    #[error("invalid fee configuration: {numerator}/{denominator}")]
    InvalidFeeConfig {
        /// The rejected fee numerator.
        numerator: u64,
        /// The rejected fee denominator.
        denominator: u64,
    },

    /// A pool is already recorded for this asset pair.
    #[error("a pool already exists for this asset pair")]
    PoolAlreadyExists,

    /// No pool is recorded for this asset pair.
    #[error("no pool exists for this asset pair")]
    PoolNotInitialized,

    /// The pool has no outstanding shares.
    #[error("pool has no outstanding shares")]
    PoolEmpty,

    /// A caller-supplied amount that must be positive was zero.
    #[error("amount must be non-zero")]
    ZeroAmount,

    /// Reserves cannot satisfy the operation, or the computed output
    /// rounds to nothing.
    #[error("insufficient liquidity: {0}")]
    InsufficientLiquidity(&'static str),

    /// The burn amount exceeds the outstanding share supply.
    #[error("burn amount exceeds outstanding share supply")]
    InsufficientShares,

    /// The computed swap output fell below the caller's minimum.
    #[error("computed output {amount_out} is below the caller minimum {min_amount_out}")]
    SlippageExceeded {
        /// The output the swap would have produced.
        amount_out: u64,
        /// The caller-supplied floor.
        min_amount_out: u64,
    },

    /// An intermediate computation overflowed or failed to narrow.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A pair was constructed from two identical asset identifiers.
    #[error("asset pair requires two distinct assets")]
    IdenticalAssets,

    /// A caller-supplied account does not match the expected mint or
    /// owner for the operation.
    #[error("account wiring is invalid: {0}")]
    AccountMismatch(&'static str),

    /// A failure reported by the ledger collaborator.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
