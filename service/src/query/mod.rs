//! [`Query`] definition.

pub mod estimate_rent;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::estimate_rent::EstimateRent;
