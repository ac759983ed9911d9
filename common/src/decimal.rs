//! Const [`Decimal`] constructors.
//!
//! [`Decimal`] arithmetic isn't `const`, so lookup tables spell their values
//! through these helpers instead.

use rust_decimal::Decimal;

/// Creates a non-negative whole [`Decimal`].
#[must_use]
pub const fn whole(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

/// Creates a non-negative [`Decimal`] equal to `mantissa * 10^-scale`.
///
/// # Panics
///
/// If `scale` is greater than `28`.
#[must_use]
pub const fn scaled(mantissa: u32, scale: u32) -> Decimal {
    assert!(scale <= 28, "`Decimal` scale cannot exceed 28");
    Decimal::from_parts(mantissa, 0, 0, false, scale)
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::{scaled, whole};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn whole_values() {
        assert_eq!(whole(0), Decimal::ZERO);
        assert_eq!(whole(18_000), decimal("18000"));
    }

    #[test]
    fn scaled_values() {
        assert_eq!(scaled(5, 1), decimal("0.5"));
        assert_eq!(scaled(15, 1), decimal("1.5"));
        assert_eq!(scaled(6, 1), decimal("0.6"));
        assert_eq!(scaled(42, 0), whole(42));
    }
}
