//! [`Percent`]-related definitions.

use derive_more::Display;
use rust_decimal::Decimal;

/// Decimal percentage in `[0, 100]` range.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{_0}%")]
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Whole amount, `100%`.
    pub const ONE_HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    /// Creates a new [`Percent`] from a whole number of percents, saturating
    /// at `100`.
    #[must_use]
    pub const fn whole(val: u8) -> Self {
        let val = if val > 100 { 100 } else { val };
        Self(crate::decimal::whole(val as u32))
    }

    /// Returns this [`Percent`] as a plain [`Decimal`] number of percents.
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Returns the part of the provided `amount` this [`Percent`] stands for.
    ///
    /// Never overflows, as the part is never greater than the `amount`.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        amount.checked_mul(self.0).map_or_else(
            || (amount / Decimal::ONE_HUNDRED).saturating_mul(self.0),
            |scaled| scaled / Decimal::ONE_HUNDRED,
        )
    }

    /// Returns the [`Percent`] remaining from the whole after taking this one
    /// away (`100% - self`).
    #[must_use]
    pub fn complement(self) -> Self {
        Self(Decimal::ONE_HUNDRED - self.0)
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::Percent;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn whole_saturates() {
        assert_eq!(Percent::whole(8).get(), decimal("8"));
        assert_eq!(Percent::whole(100), Percent::ONE_HUNDRED);
        assert_eq!(Percent::whole(250), Percent::ONE_HUNDRED);
    }

    #[test]
    fn takes_part_of_amount() {
        assert_eq!(Percent::whole(8).of(decimal("29000")), decimal("2320"));
        assert_eq!(Percent::whole(3).of(decimal("29000")), decimal("870"));
        assert_eq!(Percent::whole(12).of(decimal("27000")), decimal("3240"));
        assert_eq!(Percent::ZERO.of(decimal("27000")), Decimal::ZERO);
    }

    #[test]
    fn takes_part_of_huge_amount() {
        assert_eq!(Percent::ONE_HUNDRED.of(Decimal::MAX), Decimal::MAX);
        assert!(Percent::whole(8).of(Decimal::MIN) < Decimal::ZERO);
    }

    #[test]
    fn complements() {
        assert_eq!(Percent::whole(30).complement(), Percent::whole(70));
        assert_eq!(Percent::ZERO.complement(), Percent::ONE_HUNDRED);
        assert_eq!(Percent::ONE_HUNDRED.complement(), Percent::ZERO);
    }

    #[test]
    fn to_string() {
        assert_eq!(Percent::whole(30).to_string(), "30%");
    }
}
