//! Explicit rounding direction for integer division.

/// Specifies the rounding direction for division on domain quantities.
///
/// Every divide in the engine is an integer division with an explicit
/// `Rounding` parameter, so precision loss is always a visible, audited
/// choice rather than an accident. The engines round down everywhere a
/// value leaves the pool, which keeps rounding dust inside the reserves.
///
/// # Examples
///
/// ```
/// use pairpool::domain::Rounding;
///
/// let r = Rounding::Up;
/// assert!(r.is_up());
/// assert!(!r.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
