//! In-memory reference ledger.

use std::collections::HashMap;

use crate::domain::{Amount, AssetId};

use super::{AccountId, ActorId, Ledger, LedgerError};

/// Tag byte prefixed to generated mint identifiers.
const MINT_TAG: u8 = b'M';
/// Tag byte prefixed to generated account identifiers.
const ACCOUNT_TAG: u8 = b'A';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MintRecord {
    authority: ActorId,
    decimals: u8,
    supply: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AccountRecord {
    owner: ActorId,
    mint: AssetId,
    balance: u64,
}

/// A deterministic in-memory implementation of [`Ledger`].
///
/// Identifiers are sequential (tag byte plus a little-endian counter),
/// so a given creation order always produces the same addresses. All
/// authority and balance rules are enforced: transfers and burns must be
/// signed by the account owner, minting by the mint authority, and every
/// balance or supply update is checked arithmetic.
///
/// # Examples
///
/// ```
/// use pairpool::domain::Amount;
/// use pairpool::ledger::{ActorId, InMemoryLedger, Ledger};
///
/// let mut ledger = InMemoryLedger::new();
/// let issuer = ActorId::from_bytes([1u8; 32]);
/// let user = ActorId::from_bytes([2u8; 32]);
///
/// let mint = ledger.create_mint(issuer, 6).expect("mint");
/// let account = ledger.create_account(user, mint).expect("account");
/// ledger.mint_to(mint, account, Amount::new(100), issuer).expect("funded");
/// assert_eq!(ledger.balance_of(account).expect("exists"), Amount::new(100));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    mints: HashMap<AssetId, MintRecord>,
    accounts: HashMap<AccountId, AccountRecord>,
    next_id: u64,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total supply of a mint.
    ///
    /// Not part of the [`Ledger`] trait; the engine tracks share supply
    /// itself, but tests use this to cross-check it against the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownMint`] if the mint is not
    /// registered.
    pub fn supply_of(&self, mint: AssetId) -> Result<Amount, LedgerError> {
        self.mints
            .get(&mint)
            .map(|m| Amount::new(m.supply))
            .ok_or(LedgerError::UnknownMint)
    }

    /// Returns the decimals recorded for a mint.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownMint`] if the mint is not
    /// registered.
    pub fn decimals_of(&self, mint: AssetId) -> Result<u8, LedgerError> {
        self.mints
            .get(&mint)
            .map(|m| m.decimals)
            .ok_or(LedgerError::UnknownMint)
    }

    fn next_address(&mut self, tag: u8) -> [u8; 32] {
        self.next_id += 1;
        let mut bytes = [0u8; 32];
        bytes[0] = tag;
        bytes[1..9].copy_from_slice(&self.next_id.to_le_bytes());
        bytes
    }
}

impl Ledger for InMemoryLedger {
    fn create_mint(&mut self, authority: ActorId, decimals: u8) -> Result<AssetId, LedgerError> {
        let id = AssetId::from_bytes(self.next_address(MINT_TAG));
        self.mints.insert(
            id,
            MintRecord {
                authority,
                decimals,
                supply: 0,
            },
        );
        Ok(id)
    }

    fn create_account(&mut self, owner: ActorId, mint: AssetId) -> Result<AccountId, LedgerError> {
        if !self.mints.contains_key(&mint) {
            return Err(LedgerError::UnknownMint);
        }
        let id = AccountId::from_bytes(self.next_address(ACCOUNT_TAG));
        self.accounts.insert(
            id,
            AccountRecord {
                owner,
                mint,
                balance: 0,
            },
        );
        Ok(id)
    }

    fn mint_exists(&self, mint: AssetId) -> bool {
        self.mints.contains_key(&mint)
    }

    fn balance_of(&self, account: AccountId) -> Result<Amount, LedgerError> {
        self.accounts
            .get(&account)
            .map(|a| Amount::new(a.balance))
            .ok_or(LedgerError::UnknownAccount)
    }

    fn account_mint(&self, account: AccountId) -> Result<AssetId, LedgerError> {
        self.accounts
            .get(&account)
            .map(|a| a.mint)
            .ok_or(LedgerError::UnknownAccount)
    }

    fn account_owner(&self, account: AccountId) -> Result<ActorId, LedgerError> {
        self.accounts
            .get(&account)
            .map(|a| a.owner)
            .ok_or(LedgerError::UnknownAccount)
    }

    fn transfer(
        &mut self,
        src: AccountId,
        dst: AccountId,
        amount: Amount,
        authority: ActorId,
    ) -> Result<(), LedgerError> {
        let src_record = *self.accounts.get(&src).ok_or(LedgerError::UnknownAccount)?;
        let dst_record = *self.accounts.get(&dst).ok_or(LedgerError::UnknownAccount)?;
        if src_record.mint != dst_record.mint {
            return Err(LedgerError::MintMismatch);
        }
        if src_record.owner != authority {
            return Err(LedgerError::WrongAuthority);
        }
        if amount.get() > src_record.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        if src == dst {
            return Ok(());
        }
        let new_dst = dst_record
            .balance
            .checked_add(amount.get())
            .ok_or(LedgerError::BalanceOverflow)?;
        // both lookups verified above
        if let Some(a) = self.accounts.get_mut(&src) {
            a.balance -= amount.get();
        }
        if let Some(a) = self.accounts.get_mut(&dst) {
            a.balance = new_dst;
        }
        Ok(())
    }

    fn mint_to(
        &mut self,
        mint: AssetId,
        dst: AccountId,
        amount: Amount,
        authority: ActorId,
    ) -> Result<(), LedgerError> {
        let mint_record = *self.mints.get(&mint).ok_or(LedgerError::UnknownMint)?;
        let dst_record = *self.accounts.get(&dst).ok_or(LedgerError::UnknownAccount)?;
        if dst_record.mint != mint {
            return Err(LedgerError::MintMismatch);
        }
        if mint_record.authority != authority {
            return Err(LedgerError::WrongAuthority);
        }
        let new_supply = mint_record
            .supply
            .checked_add(amount.get())
            .ok_or(LedgerError::BalanceOverflow)?;
        let new_balance = dst_record
            .balance
            .checked_add(amount.get())
            .ok_or(LedgerError::BalanceOverflow)?;
        if let Some(m) = self.mints.get_mut(&mint) {
            m.supply = new_supply;
        }
        if let Some(a) = self.accounts.get_mut(&dst) {
            a.balance = new_balance;
        }
        Ok(())
    }

    fn burn(
        &mut self,
        mint: AssetId,
        src: AccountId,
        amount: Amount,
        authority: ActorId,
    ) -> Result<(), LedgerError> {
        let mint_record = *self.mints.get(&mint).ok_or(LedgerError::UnknownMint)?;
        let src_record = *self.accounts.get(&src).ok_or(LedgerError::UnknownAccount)?;
        if src_record.mint != mint {
            return Err(LedgerError::MintMismatch);
        }
        if src_record.owner != authority {
            return Err(LedgerError::WrongAuthority);
        }
        if amount.get() > src_record.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        let new_supply = mint_record
            .supply
            .checked_sub(amount.get())
            .ok_or(LedgerError::BalanceOverflow)?;
        if let Some(m) = self.mints.get_mut(&mint) {
            m.supply = new_supply;
        }
        if let Some(a) = self.accounts.get_mut(&src) {
            a.balance -= amount.get();
        }
        Ok(())
    }
}
