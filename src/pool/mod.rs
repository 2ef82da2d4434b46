//! The constant-product pool: state record and pricing engines.
//!
//! [`PoolState`] is the pure state record; [`quote_deposit`],
//! [`quote_withdrawal`], and [`quote_swap`] are the pricing functions
//! over it. None of them touch the ledger: the lifecycle controller in
//! [`crate::controller`] wires quotes to token movement.

mod liquidity;
mod state;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use liquidity::{quote_deposit, quote_withdrawal};
pub use state::PoolState;
pub use swap::quote_swap;
