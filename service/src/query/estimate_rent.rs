//! [`EstimateRent`] definition.

use std::convert::Infallible;

use common::{money::Currency, Money};

use crate::{
    domain::{
        estimate::{self, Adjustment, Breakdown, RentEstimate},
        PropertyAttributes,
    },
    Query, Service,
};

/// [`Query`] to estimate the fair monthly rent of a property.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EstimateRent(pub PropertyAttributes);

/// Output of the [`EstimateRent`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// Estimated monthly rent.
    pub rent: Money,

    /// [`Breakdown`] of how the rent was estimated.
    pub breakdown: Breakdown,
}

impl Query<EstimateRent> for Service {
    type Ok = Output;
    type Err = Infallible;

    #[tracing::instrument(
        skip_all,
        fields(tier = %query.0.luxury_tier),
    )]
    fn execute(&self, query: EstimateRent) -> Result<Self::Ok, Self::Err> {
        let EstimateRent(attrs) = query;

        let RentEstimate { rent, breakdown } = estimate::estimate(&attrs);

        for Adjustment { step, delta, total } in &breakdown.adjustments {
            tracing::debug!(%step, %delta, %total, "applied estimation step");
        }
        if breakdown.is_floored {
            tracing::debug!(
                subtotal = %breakdown.subtotal,
                min_rent = %breakdown.profile.min_rent,
                "raised estimate to minimum rent",
            );
        }

        let rent = Money {
            amount: rent,
            currency: Currency::Try,
        };
        tracing::info!(%rent, "estimated rent");

        Ok(Output { rent, breakdown })
    }
}
