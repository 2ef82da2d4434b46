//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pairpool::prelude::*;
//! ```
//!
//! This re-exports the most frequently used domain types, the pool
//! engines, the lifecycle controller, the ledger abstraction, and the
//! error types so that consumers don't need to import from individual
//! submodules.

// Re-export domain types
pub use crate::domain::{
    Amount, AssetId, AssetPair, DepositOutcome, Rounding, Shares, SwapDirection, SwapFee,
    SwapOutcome, WithdrawalOutcome,
};

// Re-export the pool state and pricing engines
pub use crate::pool::{quote_deposit, quote_swap, quote_withdrawal, PoolState};

// Re-export the lifecycle controller
pub use crate::controller::{Amm, PoolAccounts, ProviderAccounts, TraderAccounts};

// Re-export the ledger abstraction
pub use crate::ledger::{AccountId, ActorId, InMemoryLedger, Ledger, LedgerError};

// Re-export math utilities
pub use crate::math::CheckedArithmetic;

// Re-export error types
pub use crate::error::{PoolError, Result};
