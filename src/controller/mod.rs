//! The lifecycle controller: wires pool quotes to ledger effects.
//!
//! [`Amm`] owns the pool registry and drives the external [`Ledger`]
//! collaborator. Every operation follows the same shape: validate the
//! request, quote it against a state snapshot, stage the successor
//! state, pre-check every ledger precondition, and only then perform
//! the ledger effects and commit the staged state. All fallible steps
//! run before the first mutation, so a rejected operation leaves both
//! the pool registry and the ledger untouched.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::domain::{
    Amount, AssetId, AssetPair, DepositOutcome, Shares, SwapDirection, SwapFee, SwapOutcome,
    WithdrawalOutcome,
};
use crate::error::PoolError;
use crate::ledger::{AccountId, ActorId, Ledger, LedgerError};
use crate::pool::{quote_deposit, quote_swap, quote_withdrawal, PoolState};

/// Decimals of the share mints created for new pools.
pub const SHARE_MINT_DECIMALS: u8 = 6;

/// The ledger accounts backing one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAccounts {
    /// Vault holding the pool's reserve of asset 0.
    pub vault0: AccountId,
    /// Vault holding the pool's reserve of asset 1.
    pub vault1: AccountId,
    /// Mint of the pool's liquidity shares.
    pub share_mint: AssetId,
    /// Actor that owns the vaults and controls the share mint.
    pub authority: ActorId,
}

/// A liquidity provider's accounts for one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderAccounts {
    /// The provider, who must own both asset accounts and the share
    /// account.
    pub owner: ActorId,
    /// The provider's account for asset 0.
    pub account0: AccountId,
    /// The provider's account for asset 1.
    pub account1: AccountId,
    /// The provider's account for pool shares.
    pub share_account: AccountId,
}

/// A trader's accounts for one swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraderAccounts {
    /// The trader, who must own the source account.
    pub owner: ActorId,
    /// Account debited for the input asset.
    pub source: AccountId,
    /// Account credited with the output asset.
    pub destination: AccountId,
}

#[derive(Debug, Clone, Copy)]
struct PoolRecord {
    state: PoolState,
    accounts: PoolAccounts,
}

/// The pool engine facade: a registry of pools over one ledger.
#[derive(Debug)]
pub struct Amm<L: Ledger> {
    ledger: L,
    pools: HashMap<AssetPair, PoolRecord>,
}

impl<L: Ledger> Amm<L> {
    /// Creates an engine over `ledger` with no pools.
    pub fn new(ledger: L) -> Self {
        Self {
            ledger,
            pools: HashMap::new(),
        }
    }

    /// Returns a shared reference to the underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns a mutable reference to the underlying ledger.
    ///
    /// Intended for embedders that need to provision mints and accounts
    /// on the same ledger the engine instructs.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Returns the state of the pool for `pair`, if initialized.
    #[must_use]
    pub fn pool_state(&self, pair: &AssetPair) -> Option<&PoolState> {
        self.pools.get(pair).map(|record| &record.state)
    }

    /// Returns the ledger accounts of the pool for `pair`, if
    /// initialized.
    #[must_use]
    pub fn pool_accounts(&self, pair: &AssetPair) -> Option<&PoolAccounts> {
        self.pools.get(pair).map(|record| &record.accounts)
    }

    /// Creates the pool for `pair` with the given fee rate.
    ///
    /// Provisions a fresh authority, a share mint, and one vault per
    /// asset on the ledger, then registers the pool in its empty state.
    /// At most one pool exists per canonical pair.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PoolAlreadyExists`] if the pair already has a
    ///   pool.
    /// - [`PoolError::Ledger`] with [`LedgerError::UnknownMint`] if
    ///   either asset is not registered on the ledger.
    pub fn initialize_pool(&mut self, pair: AssetPair, fee: SwapFee) -> Result<(), PoolError> {
        if self.pools.contains_key(&pair) {
            return Err(PoolError::PoolAlreadyExists);
        }
        if !self.ledger.mint_exists(pair.asset0()) || !self.ledger.mint_exists(pair.asset1()) {
            return Err(LedgerError::UnknownMint.into());
        }

        let authority = derive_authority(&pair);
        let share_mint = self.ledger.create_mint(authority, SHARE_MINT_DECIMALS)?;
        let vault0 = self.ledger.create_account(authority, pair.asset0())?;
        let vault1 = self.ledger.create_account(authority, pair.asset1())?;

        let accounts = PoolAccounts {
            vault0,
            vault1,
            share_mint,
            authority,
        };
        self.pools.insert(
            pair,
            PoolRecord {
                state: PoolState::empty(fee),
                accounts,
            },
        );
        info!(%authority, %fee, "pool initialized");
        Ok(())
    }

    /// Deposits liquidity into the pool for `pair`.
    ///
    /// The desired amounts are upper bounds; the returned outcome lists
    /// what was actually pulled and the shares minted to the provider's
    /// share account.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PoolNotInitialized`] if the pair has no pool.
    /// - Any quote error from
    ///   [`quote_deposit`](crate::pool::quote_deposit).
    /// - [`PoolError::AccountMismatch`] if a provider account is wired
    ///   to the wrong mint or owner.
    /// - [`PoolError::Ledger`] with [`LedgerError::InsufficientFunds`]
    ///   if a provider balance cannot cover an accepted amount.
    pub fn add_liquidity(
        &mut self,
        pair: AssetPair,
        provider: &ProviderAccounts,
        desired0: Amount,
        desired1: Amount,
    ) -> Result<DepositOutcome, PoolError> {
        let record = *self
            .pools
            .get(&pair)
            .ok_or(PoolError::PoolNotInitialized)?;
        let accounts = record.accounts;

        let outcome = quote_deposit(&record.state, desired0, desired1)?;
        let next = record.state.with_deposit(&outcome)?;

        self.check_provider_wiring(&pair, provider, &accounts)?;
        self.check_balance(provider.account0, outcome.accepted0())?;
        self.check_balance(provider.account1, outcome.accepted1())?;

        // Effects. Vault headroom is covered by the staged state: each
        // vault balance equals the corresponding reserve, and the
        // reserve addition already passed its checked add.
        self.ledger.transfer(
            provider.account0,
            accounts.vault0,
            outcome.accepted0(),
            provider.owner,
        )?;
        self.ledger.transfer(
            provider.account1,
            accounts.vault1,
            outcome.accepted1(),
            provider.owner,
        )?;
        self.ledger.mint_to(
            accounts.share_mint,
            provider.share_account,
            Amount::new(outcome.shares_minted().get()),
            accounts.authority,
        )?;
        self.commit(pair, next);
        info!(provider = %provider.owner, %outcome, "liquidity added");
        Ok(outcome)
    }

    /// Burns `shares` from the provider and pays out the proportional
    /// reserves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PoolNotInitialized`] if the pair has no pool.
    /// - Any quote error from
    ///   [`quote_withdrawal`](crate::pool::quote_withdrawal).
    /// - [`PoolError::AccountMismatch`] if a provider account is wired
    ///   to the wrong mint or owner.
    /// - [`PoolError::InsufficientShares`] if the provider's share
    ///   balance cannot cover the burn.
    pub fn remove_liquidity(
        &mut self,
        pair: AssetPair,
        provider: &ProviderAccounts,
        shares: Shares,
    ) -> Result<WithdrawalOutcome, PoolError> {
        let record = *self
            .pools
            .get(&pair)
            .ok_or(PoolError::PoolNotInitialized)?;
        let accounts = record.accounts;

        let outcome = quote_withdrawal(&record.state, shares)?;
        let next = record.state.with_withdrawal(&outcome)?;

        self.check_provider_wiring(&pair, provider, &accounts)?;
        let share_balance = self.ledger.balance_of(provider.share_account)?;
        if share_balance.get() < shares.get() {
            return Err(PoolError::InsufficientShares);
        }
        self.check_headroom(provider.account0, outcome.amount0())?;
        self.check_headroom(provider.account1, outcome.amount1())?;

        self.ledger.burn(
            accounts.share_mint,
            provider.share_account,
            Amount::new(outcome.shares_burned().get()),
            provider.owner,
        )?;
        if !outcome.amount0().is_zero() {
            self.ledger.transfer(
                accounts.vault0,
                provider.account0,
                outcome.amount0(),
                accounts.authority,
            )?;
        }
        if !outcome.amount1().is_zero() {
            self.ledger.transfer(
                accounts.vault1,
                provider.account1,
                outcome.amount1(),
                accounts.authority,
            )?;
        }
        self.commit(pair, next);
        info!(provider = %provider.owner, %outcome, "liquidity removed");
        Ok(outcome)
    }

    /// Swaps `amount_in` through the pool in `direction`.
    ///
    /// The full input (fee included) is pulled into the source vault;
    /// the priced output is paid from the destination vault. The trade
    /// aborts with the quoted output on a slippage breach.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PoolNotInitialized`] if the pair has no pool.
    /// - Any quote error from [`quote_swap`](crate::pool::quote_swap),
    ///   including [`PoolError::SlippageExceeded`].
    /// - [`PoolError::AccountMismatch`] if the trader accounts are wired
    ///   to the wrong mints or owner.
    /// - [`PoolError::Ledger`] with [`LedgerError::InsufficientFunds`]
    ///   if the source balance cannot cover the input.
    pub fn swap(
        &mut self,
        pair: AssetPair,
        trader: &TraderAccounts,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapOutcome, PoolError> {
        let record = *self
            .pools
            .get(&pair)
            .ok_or(PoolError::PoolNotInitialized)?;
        let accounts = record.accounts;

        let outcome = quote_swap(&record.state, amount_in, min_amount_out, direction)?;
        let next = record.state.with_swap(&outcome, direction)?;

        let (asset_in, asset_out) = match direction {
            SwapDirection::ZeroForOne => (pair.asset0(), pair.asset1()),
            SwapDirection::OneForZero => (pair.asset1(), pair.asset0()),
        };
        let (vault_in, vault_out) = match direction {
            SwapDirection::ZeroForOne => (accounts.vault0, accounts.vault1),
            SwapDirection::OneForZero => (accounts.vault1, accounts.vault0),
        };
        self.check_wiring(trader.source, asset_in, Some(trader.owner), "swap source")?;
        self.check_wiring(trader.destination, asset_out, None, "swap destination")?;
        self.check_balance(trader.source, outcome.amount_in())?;
        self.check_headroom(trader.destination, outcome.amount_out())?;

        self.ledger
            .transfer(trader.source, vault_in, outcome.amount_in(), trader.owner)?;
        self.ledger.transfer(
            vault_out,
            trader.destination,
            outcome.amount_out(),
            accounts.authority,
        )?;
        self.commit(pair, next);
        info!(trader = %trader.owner, %direction, %outcome, "swap executed");
        Ok(outcome)
    }

    fn commit(&mut self, pair: AssetPair, next: PoolState) {
        if let Some(record) = self.pools.get_mut(&pair) {
            debug!(state = %next, "pool state committed");
            record.state = next;
        }
    }

    fn check_provider_wiring(
        &self,
        pair: &AssetPair,
        provider: &ProviderAccounts,
        accounts: &PoolAccounts,
    ) -> Result<(), PoolError> {
        self.check_wiring(
            provider.account0,
            pair.asset0(),
            Some(provider.owner),
            "provider account for asset 0",
        )?;
        self.check_wiring(
            provider.account1,
            pair.asset1(),
            Some(provider.owner),
            "provider account for asset 1",
        )?;
        self.check_wiring(
            provider.share_account,
            accounts.share_mint,
            Some(provider.owner),
            "provider share account",
        )
    }

    fn check_wiring(
        &self,
        account: AccountId,
        mint: AssetId,
        owner: Option<ActorId>,
        context: &'static str,
    ) -> Result<(), PoolError> {
        if self.ledger.account_mint(account)? != mint {
            return Err(PoolError::AccountMismatch(context));
        }
        if let Some(owner) = owner {
            if self.ledger.account_owner(account)? != owner {
                return Err(PoolError::AccountMismatch(context));
            }
        }
        Ok(())
    }

    fn check_balance(&self, account: AccountId, amount: Amount) -> Result<(), PoolError> {
        if self.ledger.balance_of(account)? < amount {
            return Err(LedgerError::InsufficientFunds.into());
        }
        Ok(())
    }

    fn check_headroom(&self, account: AccountId, amount: Amount) -> Result<(), PoolError> {
        let balance = self.ledger.balance_of(account)?;
        if balance.checked_add(&amount).is_none() {
            return Err(LedgerError::BalanceOverflow.into());
        }
        Ok(())
    }
}

/// Derives the deterministic pool authority for a pair.
///
/// Four FNV-1a lanes over a fixed domain tag and the canonical pair
/// bytes, each lane salted with its index. Deterministic and
/// collision-resistant enough for registry identity; not cryptographic.
#[must_use]
pub fn derive_authority(pair: &AssetPair) -> ActorId {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut out = [0u8; 32];
    for lane in 0u8..4 {
        let mut hash = FNV_OFFSET;
        let mut step = |byte: u8| {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        };
        step(lane);
        for byte in b"pool-authority" {
            step(*byte);
        }
        for byte in pair.asset0().as_bytes() {
            step(byte);
        }
        for byte in pair.asset1().as_bytes() {
            step(byte);
        }
        out[lane as usize * 8..(lane as usize + 1) * 8].copy_from_slice(&hash.to_le_bytes());
    }
    ActorId::from_bytes(out)
}
