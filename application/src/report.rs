//! [`Report`] definition.

use std::fmt;

use common::{money::Currency, Money};
use itertools::Itertools as _;
use rust_decimal::Decimal;
use service::{
    domain::estimate::{Breakdown, Discount},
    query::estimate_rent::Output,
};

/// Human-readable report of an estimated rent.
#[derive(Clone, Debug)]
pub struct Report {
    /// Underlying [`Output`] of the estimation.
    output: Output,

    /// Indicator whether the calculation details are rendered.
    details: bool,
}

impl Report {
    /// Creates a new [`Report`] of the provided [`Output`], optionally with
    /// the calculation details.
    #[must_use]
    pub fn new(output: Output, details: bool) -> Self {
        Self { output, details }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Output { rent, breakdown } = &self.output;

        writeln!(f, "Estimated fair rent: {} / month", rent.localized())?;
        write!(f, "Luxury tier: {}", breakdown.tier.label())?;

        if self.details {
            write!(f, "\n\n{}", Details(breakdown, rent.currency))?;
        }
        Ok(())
    }
}

/// Calculation details of a [`Report`].
struct Details<'b>(&'b Breakdown, Currency);

impl Details<'_> {
    fn money(&self, amount: Decimal) -> Money {
        Money {
            amount,
            currency: self.1,
        }
    }
}

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Breakdown {
            profile,
            adjustments,
            discount,
            subtotal,
            is_floored,
            ..
        } = self.0;

        writeln!(f, "Calculation details:")?;
        writeln!(
            f,
            "  Starting rent: {}",
            self.money(profile.base_rent).localized(),
        )?;
        writeln!(
            f,
            "  Net area effect: {}",
            Delta(self.money(self.0.area_effect())),
        )?;
        write!(
            f,
            "  Minimum rent limit: {}",
            self.money(profile.min_rent).localized(),
        )?;
        if *discount != Discount::None {
            write!(
                f,
                "\n  Safety and road discount applied: {}",
                discount.rate(),
            )?;
        }
        if *is_floored {
            write!(
                f,
                "\n  Raised to the minimum rent from {}",
                self.money(*subtotal).localized(),
            )?;
        }

        write!(
            f,
            "\nAdjustments:\n{}",
            adjustments
                .iter()
                .filter(|a| !a.delta.is_zero())
                .format_with("\n", |a, f| {
                    f(&format_args!(
                        "  {}: {} = {}",
                        a.step,
                        Delta(self.money(a.delta)),
                        self.money(a.total).localized(),
                    ))
                }),
        )?;

        write!(
            f,
            "\n\nThis is an estimate based on formulas and market averages, \
             actual market conditions may differ.",
        )
    }
}

/// Signed change of a [`Money`] amount.
struct Delta(Money);

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.amount.is_sign_positive() && !self.0.amount.is_zero() {
            write!(f, "+")?;
        }
        write!(f, "{}", self.0.localized())
    }
}
