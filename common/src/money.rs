//! [`Money`]-related definitions.

use std::fmt::{self, Write as _};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Returns a [`Display`]able rendering of this [`Money`] in the Turkish
    /// locale (`tr-TR`): `.` groups thousands, `,` separates up to three
    /// fractional digits and the [`Currency::symbol()`] follows the amount.
    ///
    /// [`Display`]: fmt::Display
    #[must_use]
    pub fn localized(&self) -> Localized<'_> {
        Localized(self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        let code = currency.code();
        if amount.is_integer() {
            write!(f, "{}{code}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{code}")
        }
    }
}

/// [`Money`] rendered in the Turkish locale.
///
/// Created by [`Money::localized()`].
#[derive(Clone, Copy, Debug)]
pub struct Localized<'m>(&'m Money);

impl fmt::Display for Localized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Money { amount, currency } = self.0;

        let amount = amount.round_dp(3).normalize();
        if amount.is_sign_negative() && !amount.is_zero() {
            f.write_char('-')?;
        }

        let amount = amount.abs();
        let digits = amount.trunc().to_string();
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                f.write_char('.')?;
            }
            f.write_char(digit)?;
        }

        let fract = amount.fract();
        if !fract.is_zero() {
            let fract = fract.to_string();
            write!(f, ",{}", fract.trim_start_matches("0."))?;
        }

        write!(f, " {}", currency.symbol())
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Turkish Lira."]
        Try = 1,
    }
}

impl Currency {
    /// Returns the [ISO 4217] code of this [`Currency`].
    ///
    /// [ISO 4217]: https://wikipedia.org/wiki/ISO_4217
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Try => "TRY",
        }
    }

    /// Returns the sign of this [`Currency`].
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Try => "₺",
        }
    }
}
