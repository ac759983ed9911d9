//! [`Discount`] definitions.

use common::{define_kind, Percent};
use rust_decimal::Decimal;

use crate::domain::PropertyAttributes;

define_kind! {
    #[doc = "Discount of the whole accumulated rent for the safety of a \
             neighborhood and the condition of its roads."]
    enum Discount {
        #[doc = "Safe neighborhood with good roads."]
        None = 1,

        #[doc = "Unsafe neighborhood with good roads."]
        UnsafeNeighborhood = 2,

        #[doc = "Safe neighborhood with bad roads."]
        BadRoads = 3,

        #[doc = "Unsafe neighborhood with bad roads."]
        UnsafeNeighborhoodAndBadRoads = 4,
    }
}

impl Discount {
    /// Determines the [`Discount`] the provided [`PropertyAttributes`] are
    /// subject to.
    #[must_use]
    pub const fn of(attrs: &PropertyAttributes) -> Self {
        match (attrs.is_neighborhood_safe, attrs.are_roads_good) {
            (true, true) => Self::None,
            (false, true) => Self::UnsafeNeighborhood,
            (true, false) => Self::BadRoads,
            (false, false) => Self::UnsafeNeighborhoodAndBadRoads,
        }
    }

    /// Returns the share of the rent this [`Discount`] takes away.
    #[must_use]
    pub const fn rate(self) -> Percent {
        match self {
            Self::None => Percent::ZERO,
            Self::UnsafeNeighborhood => Percent::whole(30),
            Self::BadRoads => Percent::whole(20),
            Self::UnsafeNeighborhoodAndBadRoads => Percent::whole(50),
        }
    }

    /// Applies this [`Discount`] to the provided `rent`.
    #[must_use]
    pub fn apply(self, rent: Decimal) -> Decimal {
        self.rate().complement().of(rent)
    }
}
