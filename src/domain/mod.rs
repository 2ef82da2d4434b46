//! Fundamental domain value types used throughout the pool engine.
//!
//! This module contains the core value types that model the domain:
//! amounts, shares, assets, fees, and operation outcomes. All types use
//! newtypes with validated constructors to enforce invariants.

mod amount;
mod asset;
mod fee;
mod liquidity_outcome;
mod pair;
mod rounding;
mod shares;
mod swap;

pub use amount::Amount;
pub use asset::AssetId;
pub use fee::SwapFee;
pub use liquidity_outcome::{DepositOutcome, WithdrawalOutcome};
pub use pair::AssetPair;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap::{SwapDirection, SwapOutcome};
