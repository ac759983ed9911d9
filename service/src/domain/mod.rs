//! Domain definitions.

pub mod estimate;
pub mod property;
pub mod tier;

pub use self::{
    estimate::{estimate, RentEstimate},
    property::PropertyAttributes,
    tier::LuxuryTier,
};
