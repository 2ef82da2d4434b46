//! # Pairpool
//!
//! A constant-product liquidity pool engine: pool state, deposit and
//! withdrawal quoting, fee-on-input swap pricing, and a lifecycle
//! controller that drives an external fungible-token ledger.
//!
//! The engine holds no balances of its own. Vault custody, the share
//! mint, and every caller balance live behind the
//! [`Ledger`](ledger::Ledger) trait; the engine validates and quotes,
//! then instructs the ledger and commits its own state as one atomic
//! unit. A rejected operation leaves both sides untouched.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for the domain types |
//!
//! # Quick Start
//!
//! ```rust
//! use pairpool::controller::{Amm, ProviderAccounts, TraderAccounts};
//! use pairpool::domain::{Amount, AssetPair, SwapDirection, SwapFee};
//! use pairpool::ledger::{ActorId, InMemoryLedger, Ledger};
//!
//! // 1. Provision two asset mints on the ledger
//! let mut ledger = InMemoryLedger::new();
//! let issuer = ActorId::from_bytes([1u8; 32]);
//! let asset_a = ledger.create_mint(issuer, 6).expect("mint");
//! let asset_b = ledger.create_mint(issuer, 6).expect("mint");
//!
//! // 2. Initialize a pool with a 0.30% fee
//! let pair = AssetPair::new(asset_a, asset_b).expect("distinct assets");
//! let mut amm = Amm::new(ledger);
//! amm.initialize_pool(pair, SwapFee::new(30, 10_000).expect("valid fee"))
//!     .expect("pool created");
//!
//! // 3. Fund a provider and seed liquidity
//! let alice = ActorId::from_bytes([2u8; 32]);
//! let share_mint = amm.pool_accounts(&pair).expect("pool").share_mint;
//! let ledger = amm.ledger_mut();
//! let account0 = ledger.create_account(alice, pair.asset0()).expect("account");
//! let account1 = ledger.create_account(alice, pair.asset1()).expect("account");
//! let share_account = ledger.create_account(alice, share_mint).expect("account");
//! ledger.mint_to(pair.asset0(), account0, Amount::new(1_000), issuer).expect("funded");
//! ledger.mint_to(pair.asset1(), account1, Amount::new(1_000), issuer).expect("funded");
//!
//! let provider = ProviderAccounts { owner: alice, account0, account1, share_account };
//! let deposit = amm
//!     .add_liquidity(pair, &provider, Amount::new(1_000), Amount::new(1_000))
//!     .expect("liquidity added");
//! assert!(!deposit.shares_minted().is_zero());
//!
//! // 4. Swap through the funded pool
//! let trader = TraderAccounts { owner: alice, source: account0, destination: account1 };
//! let ledger = amm.ledger_mut();
//! ledger.mint_to(pair.asset0(), account0, Amount::new(100), issuer).expect("funded");
//! let swap = amm
//!     .swap(pair, &trader, SwapDirection::ZeroForOne, Amount::new(100), Amount::new(1))
//!     .expect("swap executed");
//! assert!(swap.amount_out().get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  uses Amm over a Ledger implementation
//! └──────┬───────┘
//!        │ initialize_pool / add_liquidity / remove_liquidity / swap
//!        ▼
//! ┌──────────────┐
//! │  Controller   │  validates, quotes, stages state, instructs ledger
//! └──────┬───────┘
//!        │ quote_deposit / quote_withdrawal / quote_swap
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  PoolState + pure pricing engines
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Amount, Shares, SwapFee, AssetPair, outcomes, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`SwapFee`](domain::SwapFee), etc. |
//! | [`pool`] | [`PoolState`](pool::PoolState) and the pure quoting engines |
//! | [`controller`] | [`Amm`](controller::Amm): pool registry and atomic ledger orchestration |
//! | [`ledger`] | The [`Ledger`](ledger::Ledger) collaborator trait and [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`math`] | Widened multiply-divide, integer square root, checked arithmetic |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod controller;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
