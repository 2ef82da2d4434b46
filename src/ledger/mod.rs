//! The external fungible-token ledger collaborator.
//!
//! The pool engine never holds token balances itself: vault custody,
//! share-token supply, and every caller balance live behind the
//! [`Ledger`] trait. The engine validates and computes, then instructs
//! the ledger to move tokens as part of the same atomic unit as the pool
//! state update.
//!
//! [`InMemoryLedger`] is the reference implementation used by the test
//! suite and by embedders that do not bring their own ledger.

mod memory;

use core::fmt;

use thiserror::Error;

use crate::domain::{Amount, AssetId};

pub use memory::InMemoryLedger;

/// Identifier of a token account on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// Identifier of an actor (account owner or mint authority).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId([u8; 32]);

impl ActorId {
    /// Creates an `ActorId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // first four bytes are enough to tell actors apart in logs
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// Failures reported by the ledger collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A debit exceeds the account balance.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The referenced account does not exist.
    #[error("unknown account")]
    UnknownAccount,

    /// The referenced mint does not exist.
    #[error("unknown mint")]
    UnknownMint,

    /// Source and destination accounts hold different assets, or the
    /// account's mint does not match the operation's mint.
    #[error("account mint mismatch")]
    MintMismatch,

    /// The signing authority does not control the debited account or
    /// the mint.
    #[error("wrong authority")]
    WrongAuthority,

    /// A balance or supply update would overflow.
    #[error("balance overflow")]
    BalanceOverflow,
}

/// A fungible-token ledger the pool engine reads from and instructs.
///
/// Mutating operations are all-or-nothing per call; the lifecycle
/// controller pre-validates balances and account wiring through the
/// read-only queries so that the mutation sequence of a committed
/// instruction cannot fail halfway.
pub trait Ledger {
    /// Registers a new mint controlled by `authority` and returns its
    /// identifier.
    ///
    /// # Errors
    ///
    /// Implementations may fail on identifier exhaustion or storage
    /// faults; the reference implementation is infallible here.
    fn create_mint(&mut self, authority: ActorId, decimals: u8) -> Result<AssetId, LedgerError>;

    /// Creates a zero-balance account for `mint`, owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownMint`] if the mint is not
    /// registered.
    fn create_account(&mut self, owner: ActorId, mint: AssetId) -> Result<AccountId, LedgerError>;

    /// Returns `true` if the mint is registered.
    fn mint_exists(&self, mint: AssetId) -> bool;

    /// Returns the account's balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAccount`] if the account does not
    /// exist.
    fn balance_of(&self, account: AccountId) -> Result<Amount, LedgerError>;

    /// Returns the mint the account holds.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAccount`] if the account does not
    /// exist.
    fn account_mint(&self, account: AccountId) -> Result<AssetId, LedgerError>;

    /// Returns the account's owner.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAccount`] if the account does not
    /// exist.
    fn account_owner(&self, account: AccountId) -> Result<ActorId, LedgerError>;

    /// Moves `amount` from `src` to `dst`, signed by `authority`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownAccount`] if either account is missing.
    /// - [`LedgerError::MintMismatch`] if the accounts hold different
    ///   assets.
    /// - [`LedgerError::WrongAuthority`] if `authority` does not own
    ///   `src`.
    /// - [`LedgerError::InsufficientFunds`] if `amount` exceeds the
    ///   source balance.
    /// - [`LedgerError::BalanceOverflow`] if the destination balance
    ///   would overflow.
    fn transfer(
        &mut self,
        src: AccountId,
        dst: AccountId,
        amount: Amount,
        authority: ActorId,
    ) -> Result<(), LedgerError>;

    /// Mints `amount` of `mint` into `dst`, signed by the mint
    /// authority.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownMint`] / [`LedgerError::UnknownAccount`]
    ///   on missing references.
    /// - [`LedgerError::MintMismatch`] if `dst` holds a different asset.
    /// - [`LedgerError::WrongAuthority`] if `authority` is not the mint
    ///   authority.
    /// - [`LedgerError::BalanceOverflow`] if supply or balance would
    ///   overflow.
    fn mint_to(
        &mut self,
        mint: AssetId,
        dst: AccountId,
        amount: Amount,
        authority: ActorId,
    ) -> Result<(), LedgerError>;

    /// Burns `amount` of `mint` from `src`, signed by the account owner.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownMint`] / [`LedgerError::UnknownAccount`]
    ///   on missing references.
    /// - [`LedgerError::MintMismatch`] if `src` holds a different asset.
    /// - [`LedgerError::WrongAuthority`] if `authority` does not own
    ///   `src`.
    /// - [`LedgerError::InsufficientFunds`] if `amount` exceeds the
    ///   balance.
    fn burn(
        &mut self,
        mint: AssetId,
        src: AccountId,
        amount: Amount,
        authority: ActorId,
    ) -> Result<(), LedgerError>;
}
