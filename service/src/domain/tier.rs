//! [`LuxuryTier`] definitions and the lookup tables keyed by it.

use common::{decimal, define_kind, Percent};
use rust_decimal::Decimal;

use crate::domain::property::{Distance, SeaView};

define_kind! {
    #[doc = "Luxury classification of a property driving its base price and \
             bonus caps."]
    enum LuxuryTier {
        #[doc = "Economy home: student flat, plain finish."]
        Minimal = 1,

        #[doc = "Average family home."]
        Standard = 2,

        #[doc = "New and well-equipped residential complex."]
        Premium = 3,

        #[doc = "Smart home with custom design."]
        Ultra = 4,
    }
}

impl LuxuryTier {
    /// Returns the pricing [`Profile`] of this [`LuxuryTier`].
    #[must_use]
    pub const fn profile(self) -> Profile {
        use decimal::whole as w;

        match self {
            Self::Minimal => Profile {
                base_rent: w(9_000),
                price_per_sqm: w(200),
                min_area: w(40),
                min_rent: w(7_000),
            },
            Self::Standard => Profile {
                base_rent: w(18_000),
                price_per_sqm: w(350),
                min_area: w(60),
                min_rent: w(14_000),
            },
            Self::Premium => Profile {
                base_rent: w(30_000),
                price_per_sqm: w(550),
                min_area: w(90),
                min_rent: w(25_000),
            },
            Self::Ultra => Profile {
                base_rent: w(45_000),
                price_per_sqm: w(850),
                min_area: w(120),
                min_rent: w(38_000),
            },
        }
    }

    /// Returns the maximum bonus a [`SeaView`] may add to the rent of this
    /// [`LuxuryTier`].
    ///
    /// [`None`] is returned for [`SeaView::None`].
    #[must_use]
    pub const fn sea_view_cap(self, view: SeaView) -> Option<Decimal> {
        use decimal::whole as w;

        let (partial, full, panoramic) = match self {
            Self::Minimal => (2_000, 5_000, 8_000),
            Self::Standard => (5_000, 10_000, 15_000),
            Self::Premium => (10_000, 20_000, 30_000),
            Self::Ultra => (15_000, 35_000, 50_000),
        };
        match view {
            SeaView::None => None,
            SeaView::Partial => Some(w(partial)),
            SeaView::Full => Some(w(full)),
            SeaView::Panoramic => Some(w(panoramic)),
        }
    }

    /// Returns the maximum bonus a [`SeaProximity`] may add to the rent of
    /// this [`LuxuryTier`].
    ///
    /// [`None`] is returned for [`SeaProximity::Far`].
    #[must_use]
    pub const fn sea_proximity_cap(
        self,
        proximity: SeaProximity,
    ) -> Option<Decimal> {
        use decimal::whole as w;

        let (seafront, nearby) = match self {
            Self::Minimal => (8_000, 4_000),
            Self::Standard => (15_000, 7_500),
            Self::Premium => (25_000, 12_500),
            Self::Ultra => (40_000, 20_000),
        };
        match proximity {
            SeaProximity::Seafront => Some(w(seafront)),
            SeaProximity::Nearby => Some(w(nearby)),
            SeaProximity::Far => None,
        }
    }

    /// Returns a human-readable label of this [`LuxuryTier`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal/Economy",
            Self::Standard => "Standard",
            Self::Premium => "Premium/Luxury",
            Self::Ultra => "Ultra Luxury",
        }
    }
}

/// Pricing profile of a [`LuxuryTier`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Monthly rent a property of [`Profile::min_area`] starts from.
    pub base_rent: Decimal,

    /// Rent added (or taken) per square meter of net area above (or below)
    /// [`Profile::min_area`].
    pub price_per_sqm: Decimal,

    /// Net area the [`Profile::base_rent`] is quoted for, in square meters.
    pub min_area: Decimal,

    /// Lowest rent an estimate may ever produce.
    pub min_rent: Decimal,
}

/// Band of distance between a property and the sea.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SeaProximity {
    /// No further than `0.5` km.
    Seafront,

    /// Further than `0.5` km, but no further than `1.5` km.
    Nearby,

    /// Further than `1.5` km.
    Far,
}

impl SeaProximity {
    /// Upper bound (inclusive) of the [`SeaProximity::Seafront`] band.
    pub const SEAFRONT_LIMIT: Decimal = decimal::scaled(5, 1);

    /// Upper bound (inclusive) of the [`SeaProximity::Nearby`] band.
    pub const NEARBY_LIMIT: Decimal = decimal::scaled(15, 1);

    /// Classifies the provided [`Distance`] to the sea.
    #[must_use]
    pub fn of(distance: Distance) -> Self {
        if *distance <= Self::SEAFRONT_LIMIT {
            Self::Seafront
        } else if *distance <= Self::NEARBY_LIMIT {
            Self::Nearby
        } else {
            Self::Far
        }
    }

    /// Returns the share of the running rent this [`SeaProximity`] adds
    /// before capping.
    #[must_use]
    pub const fn bonus_rate(self) -> Percent {
        match self {
            Self::Seafront => Percent::whole(8),
            Self::Nearby => Percent::whole(4),
            Self::Far => Percent::ZERO,
        }
    }
}
