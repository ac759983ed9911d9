//! [`RentEstimate`] definitions.

mod discount;
pub mod step;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{tier::Profile, LuxuryTier, PropertyAttributes};

pub use self::{discount::Discount, step::Step};

/// Estimated fair monthly rent of a property.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentEstimate {
    /// Estimated rent, rounded to a whole currency unit.
    ///
    /// Never less than [`Profile::min_rent`] of the estimated
    /// [`LuxuryTier`].
    pub rent: Decimal,

    /// [`Breakdown`] of how the [`RentEstimate::rent`] was derived.
    pub breakdown: Breakdown,
}

/// Intermediate values of a [`RentEstimate`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Breakdown {
    /// [`LuxuryTier`] the rent is estimated for.
    pub tier: LuxuryTier,

    /// [`Profile`] of the [`Breakdown::tier`].
    pub profile: Profile,

    /// [`Adjustment`]s made by every [`Step`] of the [`Step::PIPELINE`], in
    /// order.
    pub adjustments: Vec<Adjustment>,

    /// [`Discount`] the rent was subject to.
    pub discount: Discount,

    /// Running total after the last [`Step`], before the
    /// [`Profile::min_rent`] floor and rounding.
    pub subtotal: Decimal,

    /// Indicator whether the [`Breakdown::subtotal`] fell below
    /// [`Profile::min_rent`] and was raised to it.
    pub is_floored: bool,
}

impl Breakdown {
    /// Returns the [`Adjustment`] made by the provided [`Step`].
    #[must_use]
    pub fn adjustment(&self, step: Step) -> Option<&Adjustment> {
        self.adjustments.iter().find(|a| a.step == step)
    }

    /// Returns the effect the net area had on the rent.
    #[must_use]
    pub fn area_effect(&self) -> Decimal {
        self.adjustment(Step::NetArea)
            .map_or(Decimal::ZERO, |a| a.delta)
    }
}

/// Change of the running rent total made by a single [`Step`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Adjustment {
    /// [`Step`] made this [`Adjustment`].
    pub step: Step,

    /// Amount the [`Step`] added to (or took from) the running total.
    pub delta: Decimal,

    /// Running total after the [`Step`].
    pub total: Decimal,
}

/// Estimates the fair monthly rent of a property with the provided
/// [`PropertyAttributes`].
///
/// Starts from the [`Profile::base_rent`] of the property's [`LuxuryTier`],
/// folds every [`Step`] of the [`Step::PIPELINE`] over it, raises the result
/// to the [`Profile::min_rent`] and rounds it to a whole unit.
///
/// Attributes aren't validated: out-of-range values (negative areas, ages,
/// counts) flow through the arithmetic as is, saturating at the [`Decimal`]
/// bounds instead of overflowing.
#[must_use]
pub fn estimate(attrs: &PropertyAttributes) -> RentEstimate {
    let tier = attrs.luxury_tier;
    let profile = tier.profile();

    let adjustments = Step::PIPELINE
        .iter()
        .scan(profile.base_rent, |total, &step| {
            let before = *total;
            *total = step.apply(attrs, before);
            Some(Adjustment {
                step,
                delta: total.saturating_sub(before),
                total: *total,
            })
        })
        .collect::<Vec<_>>();
    let subtotal = adjustments.last().map_or(profile.base_rent, |a| a.total);

    let is_floored = subtotal < profile.min_rent;
    let rent = subtotal
        .max(profile.min_rent)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    RentEstimate {
        rent,
        breakdown: Breakdown {
            tier,
            profile,
            adjustments,
            discount: Discount::of(attrs),
            subtotal,
            is_floored,
        },
    }
}
