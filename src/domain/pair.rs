//! Ordered pair of distinct assets — the identity of a pool.

use super::AssetId;
use crate::error::PoolError;

/// An ordered pair of distinct assets, canonically sorted by identifier.
///
/// The canonical ordering guarantees `asset0() < asset1()`, so `(A, B)`
/// and `(B, A)` name the same pool. The pair is the pool's identity: the
/// lifecycle controller keys its records on it, and pool creation is
/// idempotent per pair, not per caller.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// // Order is enforced automatically:
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.asset0(), a);
/// assert_eq!(pair.asset1(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset0: AssetId,
    asset1: AssetId,
}

impl AssetPair {
    /// Creates a new canonically-ordered `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::IdenticalAssets`] if both identifiers are
    /// equal.
    pub fn new(first: AssetId, second: AssetId) -> Result<Self, PoolError> {
        if first == second {
            return Err(PoolError::IdenticalAssets);
        }
        let (asset0, asset1) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        Ok(Self { asset0, asset1 })
    }

    /// Returns the first asset (lower identifier).
    #[must_use]
    pub const fn asset0(&self) -> AssetId {
        self.asset0
    }

    /// Returns the second asset (higher identifier).
    #[must_use]
    pub const fn asset1(&self) -> AssetId {
        self.asset1
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset0 == *asset || self.asset1 == *asset
    }
}
