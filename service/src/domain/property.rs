//! [`PropertyAttributes`] definitions.

use common::{decimal, define_kind, Percent};
use derive_more::{Deref, Display, From, FromStr, Into};
use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::domain::LuxuryTier;

/// Attributes of a residential unit its rent is estimated from.
///
/// [`Default`] values describe an average family home, so a partially filled
/// record still yields a meaningful estimate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default, deny_unknown_fields)
)]
pub struct PropertyAttributes {
    /// [`LuxuryTier`] of the property.
    #[default(LuxuryTier::Standard)]
    pub luxury_tier: LuxuryTier,

    /// Net (usable) [`Area`] of the property.
    #[default(Area::from(decimal::whole(100)))]
    pub net_area: Area,

    /// [`Area`] of balconies.
    pub balcony_area: Area,

    /// [`Area`] of terraces.
    pub terrace_area: Area,

    /// [`Age`] of the building.
    #[default(Age::from(decimal::whole(5)))]
    pub building_age: Age,

    /// Number of rooms.
    #[default(Quantity::from(decimal::whole(3)))]
    pub rooms: Quantity,

    /// [`FloorType`] the property is located on.
    #[default(FloorType::Middle)]
    pub floor_type: FloorType,

    /// [`Distance`] to the sea.
    #[default(Distance::from(decimal::whole(5)))]
    pub distance_to_sea: Distance,

    /// [`SeaView`] from the property.
    #[default(SeaView::None)]
    pub sea_view: SeaView,

    /// [`Distance`] to the nearest metro station.
    #[default(Distance::from(decimal::whole(1)))]
    pub distance_to_metro: Distance,

    /// Number of bus stops nearby.
    #[default(Quantity::from(decimal::whole(2)))]
    pub nearby_bus_stops: Quantity,

    /// [`Distance`] to the nearest market.
    #[default(Distance::from(decimal::scaled(3, 1)))]
    pub nearest_market_distance: Distance,

    /// [`Heating`] system of the property.
    #[default(Heating::Gas)]
    pub heating: Heating,

    /// Indicator whether the building is thermally insulated.
    pub has_insulation: bool,

    /// Indicator whether the building complies with the earthquake
    /// regulations.
    #[default(true)]
    pub is_earthquake_compliant: bool,

    /// [`Facade`] quality of the building.
    #[default(Facade::Good)]
    pub facade: Facade,

    /// Indicator whether the kitchen is open to the living room.
    pub is_american_kitchen: bool,

    /// Indicator whether a parking place comes with the property.
    #[default(true)]
    pub has_parking: bool,

    /// Indicator whether fiber internet is available.
    #[default(true)]
    pub has_fiber: bool,

    /// Indicator whether the property is rented furnished.
    pub is_furnished: bool,

    /// [`NoiseLevel`] around the property.
    #[default(NoiseLevel::Low)]
    pub noise_level: NoiseLevel,

    /// Indicator whether the neighborhood is safe.
    #[default(true)]
    pub is_neighborhood_safe: bool,

    /// Indicator whether the roads around are in good condition.
    #[default(true)]
    pub are_roads_good: bool,
}

/// Area in square meters.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deref,
    Display,
    Eq,
    From,
    FromStr,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(transparent)
)]
pub struct Area(Decimal);

/// Age in years.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deref,
    Display,
    Eq,
    From,
    FromStr,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(transparent)
)]
pub struct Age(Decimal);

/// Distance in kilometers.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deref,
    Display,
    Eq,
    From,
    FromStr,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(transparent)
)]
pub struct Distance(Decimal);

/// Number of countable things (rooms, bus stops).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deref,
    Display,
    Eq,
    From,
    FromStr,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(transparent)
)]
pub struct Quantity(Decimal);

define_kind! {
    #[doc = "Position of a property within its building."]
    enum FloorType {
        #[doc = "Regular floor between the entrance and the top."]
        Middle = 1,

        #[doc = "Raised ground floor."]
        HighEntrance = 2,

        #[doc = "Ground floor."]
        Entrance = 3,

        #[doc = "Ground floor with a private garden."]
        Garden = 4,

        #[doc = "Top floor apartment."]
        Penthouse = 5,
    }
}

impl FloorType {
    /// Returns the flat rent adjustment of this [`FloorType`].
    #[must_use]
    pub fn adjustment(self) -> Decimal {
        use decimal::whole as w;

        match self {
            Self::Middle => Decimal::ZERO,
            Self::HighEntrance => -w(2_500),
            Self::Entrance => -w(4_500),
            Self::Garden => -w(9_000),
            Self::Penthouse => w(6_500),
        }
    }
}

define_kind! {
    #[doc = "Sea view from a property."]
    enum SeaView {
        #[doc = "The sea isn't visible."]
        None = 1,

        #[doc = "The sea is partially visible."]
        Partial = 2,

        #[doc = "The sea is fully visible."]
        Full = 3,

        #[doc = "Wide panoramic view of the sea."]
        Panoramic = 4,
    }
}

impl SeaView {
    /// Returns the share of the running rent this [`SeaView`] adds before
    /// capping.
    #[must_use]
    pub const fn bonus_rate(self) -> Percent {
        match self {
            Self::None => Percent::ZERO,
            Self::Partial => Percent::whole(3),
            Self::Full => Percent::whole(7),
            Self::Panoramic => Percent::whole(12),
        }
    }
}

define_kind! {
    #[doc = "Heating system of a property."]
    enum Heating {
        #[doc = "Underfloor heating."]
        Underfloor = 1,

        #[doc = "Individual natural gas boiler."]
        Gas = 2,

        #[doc = "Central heating of the building."]
        Central = 3,

        #[doc = "No heating at all."]
        None = 4,
    }
}

impl Heating {
    /// Returns the flat rent adjustment of this [`Heating`].
    #[must_use]
    pub fn adjustment(self) -> Decimal {
        use decimal::whole as w;

        match self {
            Self::Underfloor => w(4_500),
            Self::Gas => Decimal::ZERO,
            Self::Central => w(2_000),
            Self::None => -w(18_000),
        }
    }
}

define_kind! {
    #[doc = "Condition of a building facade."]
    enum Facade {
        #[doc = "Excellent condition."]
        Excellent = 1,

        #[doc = "Good condition."]
        Good = 2,

        #[doc = "Bad condition."]
        Bad = 3,

        #[doc = "Terrible condition."]
        Terrible = 4,
    }
}

impl Facade {
    /// Returns the flat rent adjustment of this [`Facade`].
    #[must_use]
    pub fn adjustment(self) -> Decimal {
        use decimal::whole as w;

        match self {
            Self::Excellent => w(4_500),
            Self::Good => w(2_000),
            Self::Bad => -w(2_000),
            Self::Terrible => -w(4_500),
        }
    }
}

define_kind! {
    #[doc = "Noise level around a property."]
    enum NoiseLevel {
        #[doc = "Quiet."]
        None = 1,

        #[doc = "Some noise."]
        Low = 2,

        #[doc = "Loud."]
        High = 3,
    }
}

impl NoiseLevel {
    /// Returns the flat rent adjustment of this [`NoiseLevel`].
    #[must_use]
    pub fn adjustment(self) -> Decimal {
        use decimal::whole as w;

        match self {
            Self::None => w(4_500),
            Self::Low => -w(4_500),
            Self::High => -w(9_000),
        }
    }
}
