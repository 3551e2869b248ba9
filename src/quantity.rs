use std::fmt;

use serde::Serialize;

/// Non-negative integer amount of a stocked item (ml, g, cups or cash units).
///
/// Stored wider than the `u32` amounts a single fill or recipe can carry, so
/// stock and cash grow by exactly what is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub const fn new(value: u64) -> Self {
        Quantity(value)
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtract `rhs`, or `None` if that would go below zero.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Quantity)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Quantity(u64::from(value))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Quantity(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_preserves_value() {
        assert_eq!(Quantity::from(16u32), Quantity::new(16));
        assert_eq!(Quantity::from(u32::MAX), Quantity::new(4_294_967_295));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Quantity::default(), Quantity::ZERO);
        assert!(Quantity::default().is_zero());
        assert!(!Quantity::new(1).is_zero());
    }

    #[test]
    fn display_is_plain_integer() {
        assert_eq!(Quantity::new(0).to_string(), "0");
        assert_eq!(Quantity::new(1000).to_string(), "1000");
    }

    #[test]
    fn add_assign() {
        let mut q = Quantity::new(500);
        q += Quantity::new(250);
        assert_eq!(q, Quantity::new(750));
    }

    #[test]
    fn add_past_u32_max_is_exact() {
        let mut q = Quantity::new(500);
        q += Quantity::from(u32::MAX);
        q += Quantity::from(u32::MAX);
        assert_eq!(q, Quantity::new(2 * u64::from(u32::MAX) + 500));
        assert_eq!(q.to_string(), "8589935090");
    }

    #[test]
    fn checked_sub_exact_reaches_zero() {
        let q = Quantity::new(250).checked_sub(Quantity::new(250));
        assert_eq!(q, Some(Quantity::ZERO));
    }

    #[test]
    fn checked_sub_below_zero_is_none() {
        assert_eq!(Quantity::new(249).checked_sub(Quantity::new(250)), None);
    }

    #[test]
    fn ordering() {
        assert!(Quantity::new(74) < Quantity::new(75));
        assert!(Quantity::ZERO <= Quantity::ZERO);
    }
}
