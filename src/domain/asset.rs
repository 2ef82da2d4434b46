//! Ledger-agnostic asset (mint) identifier.

/// A generic identifier for a fungible asset's mint on the external
/// ledger.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// considered valid identifiers, so construction is infallible. The
/// engine never inspects the bytes beyond equality and ordering.
///
/// # Examples
///
/// ```
/// use pairpool::domain::AssetId;
///
/// let id = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(id.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
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
