//! [`Step`]s of the rent estimation pipeline.

use common::define_kind;
use rust_decimal::Decimal;

use crate::domain::{tier::SeaProximity, PropertyAttributes};

use super::Discount;

define_kind! {
    #[doc = "Step of the rent estimation pipeline, adjusting the running \
             rent total."]
    enum Step {
        #[doc = "Net area above or below the tier's minimum area."]
        NetArea = 1,

        #[doc = "Balconies and terraces."]
        OutdoorArea = 2,

        #[doc = "Building age penalty."]
        BuildingAge = 3,

        #[doc = "Share of the running total for being close to the sea."]
        SeaProximity = 4,

        #[doc = "Share of the running total for the sea view."]
        SeaView = 5,

        #[doc = "Metro distance penalty."]
        MetroDistance = 6,

        #[doc = "Nearby bus stops bonus."]
        BusStops = 7,

        #[doc = "Market distance penalty."]
        MarketDistance = 8,

        #[doc = "Heating system."]
        Heating = 9,

        #[doc = "Thermal insulation bonus."]
        Insulation = 10,

        #[doc = "Earthquake regulations non-compliance penalty."]
        EarthquakeCompliance = 11,

        #[doc = "American (open) kitchen penalty."]
        AmericanKitchen = 12,

        #[doc = "Number of rooms."]
        Rooms = 13,

        #[doc = "Missing parking penalty."]
        Parking = 14,

        #[doc = "Facade condition."]
        Facade = 15,

        #[doc = "Noise level."]
        Noise = 16,

        #[doc = "Fiber internet availability."]
        Fiber = 17,

        #[doc = "Furnishing bonus."]
        Furnishing = 18,

        #[doc = "Floor position."]
        FloorType = 19,

        #[doc = "Multiplicative safety and road condition discount."]
        SafetyDiscount = 20,
    }
}

/// Rates and limits of the flat [`Step`]s.
mod rate {
    use common::decimal::{scaled, whole};
    use rust_decimal::Decimal;

    pub(super) const BALCONY_PER_SQM: Decimal = whole(60);
    pub(super) const TERRACE_PER_SQM: Decimal = whole(180);

    pub(super) const AGE_PER_YEAR: Decimal = whole(600);
    pub(super) const AGE_PENALTY_LIMIT: Decimal = whole(30_000);

    pub(super) const METRO_PER_KM: Decimal = whole(900);
    pub(super) const METRO_PENALTY_LIMIT: Decimal = whole(15_000);

    pub(super) const BUS_STOP: Decimal = whole(550);
    pub(super) const BUS_STOPS_LIMIT: Decimal = whole(5);

    pub(super) const MARKET_DISTANCE_LIMIT: Decimal = scaled(6, 1);
    pub(super) const MARKET_PENALTY: Decimal = whole(9_000);

    pub(super) const INSULATION: Decimal = whole(1_800);
    pub(super) const EARTHQUAKE_NON_COMPLIANCE: Decimal = whole(25_000);
    pub(super) const AMERICAN_KITCHEN: Decimal = whole(4_500);
    pub(super) const ROOM: Decimal = whole(750);
    pub(super) const NO_PARKING: Decimal = whole(3_500);
    pub(super) const FIBER: Decimal = whole(1_800);
    pub(super) const NO_FIBER: Decimal = whole(1_000);
    pub(super) const FURNISHED: Decimal = whole(2_800);
}

impl Step {
    /// All the [`Step`]s in the order they're applied.
    ///
    /// Percentage [`Step`]s take the running total at their position, so
    /// reordering changes estimates.
    pub const PIPELINE: [Self; 20] = [
        Self::NetArea,
        Self::OutdoorArea,
        Self::BuildingAge,
        Self::SeaProximity,
        Self::SeaView,
        Self::MetroDistance,
        Self::BusStops,
        Self::MarketDistance,
        Self::Heating,
        Self::Insulation,
        Self::EarthquakeCompliance,
        Self::AmericanKitchen,
        Self::Rooms,
        Self::Parking,
        Self::Facade,
        Self::Noise,
        Self::Fiber,
        Self::Furnishing,
        Self::FloorType,
        Self::SafetyDiscount,
    ];

    /// Applies this [`Step`] to the running `total` of the rent estimated for
    /// the provided [`PropertyAttributes`], returning the new running total.
    ///
    /// Never panics: arithmetic saturates at [`Decimal::MAX`] and
    /// [`Decimal::MIN`] for out-of-range attributes.
    #[must_use]
    pub fn apply(self, attrs: &PropertyAttributes, total: Decimal) -> Decimal {
        use rate as r;

        let tier = attrs.luxury_tier;
        let profile = tier.profile();

        let delta = match self {
            Self::NetArea => attrs
                .net_area
                .saturating_sub(profile.min_area)
                .saturating_mul(profile.price_per_sqm),
            Self::OutdoorArea => attrs
                .balcony_area
                .saturating_mul(r::BALCONY_PER_SQM)
                .saturating_add(
                    attrs.terrace_area.saturating_mul(r::TERRACE_PER_SQM),
                ),
            Self::BuildingAge => (-attrs
                .building_age
                .saturating_mul(r::AGE_PER_YEAR))
            .max(-r::AGE_PENALTY_LIMIT),
            Self::SeaProximity => {
                let proximity = SeaProximity::of(attrs.distance_to_sea);
                capped(
                    proximity.bonus_rate().of(total),
                    tier.sea_proximity_cap(proximity),
                )
            }
            Self::SeaView => {
                let view = attrs.sea_view;
                capped(view.bonus_rate().of(total), tier.sea_view_cap(view))
            }
            Self::MetroDistance => (-attrs
                .distance_to_metro
                .saturating_mul(r::METRO_PER_KM))
            .max(-r::METRO_PENALTY_LIMIT),
            Self::BusStops => (*attrs.nearby_bus_stops)
                .min(r::BUS_STOPS_LIMIT)
                .saturating_mul(r::BUS_STOP),
            Self::MarketDistance => {
                if *attrs.nearest_market_distance > r::MARKET_DISTANCE_LIMIT {
                    -r::MARKET_PENALTY
                } else {
                    Decimal::ZERO
                }
            }
            Self::Heating => attrs.heating.adjustment(),
            Self::Insulation => {
                if attrs.has_insulation {
                    r::INSULATION
                } else {
                    Decimal::ZERO
                }
            }
            Self::EarthquakeCompliance => {
                if attrs.is_earthquake_compliant {
                    Decimal::ZERO
                } else {
                    -r::EARTHQUAKE_NON_COMPLIANCE
                }
            }
            Self::AmericanKitchen => {
                if attrs.is_american_kitchen {
                    -r::AMERICAN_KITCHEN
                } else {
                    Decimal::ZERO
                }
            }
            Self::Rooms => attrs.rooms.saturating_mul(r::ROOM),
            Self::Parking => {
                if attrs.has_parking {
                    Decimal::ZERO
                } else {
                    -r::NO_PARKING
                }
            }
            Self::Facade => attrs.facade.adjustment(),
            Self::Noise => attrs.noise_level.adjustment(),
            Self::Fiber => {
                if attrs.has_fiber {
                    r::FIBER
                } else {
                    -r::NO_FIBER
                }
            }
            Self::Furnishing => {
                if attrs.is_furnished {
                    r::FURNISHED
                } else {
                    Decimal::ZERO
                }
            }
            Self::FloorType => attrs.floor_type.adjustment(),
            Self::SafetyDiscount => return Discount::of(attrs).apply(total),
        };
        total.saturating_add(delta)
    }
}

/// Limits the provided `bonus` with the provided `cap`.
///
/// No `cap` means no bonus at all.
fn capped(bonus: Decimal, cap: Option<Decimal>) -> Decimal {
    cap.map_or(Decimal::ZERO, |cap| bonus.min(cap))
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;
    use strum::VariantArray as _;

    use crate::domain::{
        property::{Facade, FloorType, Heating, NoiseLevel, SeaView},
        LuxuryTier, PropertyAttributes,
    };

    use super::Step;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    /// Returns the change the `step` makes to the `total` for the `attrs`.
    fn delta(step: Step, attrs: &PropertyAttributes, total: &str) -> Decimal {
        let total = decimal(total);
        step.apply(attrs, total) - total
    }

    #[test]
    fn pipeline_lists_every_step_once_in_order() {
        assert_eq!(Step::PIPELINE.len(), Step::VARIANTS.len());
        for (i, step) in Step::PIPELINE.iter().enumerate() {
            assert_eq!(usize::from(step.u8()), i + 1, "{step}");
        }
        assert_eq!(Step::PIPELINE.last(), Some(&Step::SafetyDiscount));
    }

    #[test]
    fn net_area() {
        let attrs = PropertyAttributes::default();
        assert_eq!(delta(Step::NetArea, &attrs, "18000"), decimal("14000"));

        let attrs = PropertyAttributes {
            luxury_tier: LuxuryTier::Minimal,
            net_area: decimal("20").into(),
            ..PropertyAttributes::default()
        };
        assert_eq!(delta(Step::NetArea, &attrs, "9000"), decimal("-4000"));

        let attrs = PropertyAttributes {
            luxury_tier: LuxuryTier::Premium,
            net_area: decimal("90").into(),
            ..PropertyAttributes::default()
        };
        assert_eq!(delta(Step::NetArea, &attrs, "30000"), Decimal::ZERO);
    }

    #[test]
    fn outdoor_area() {
        let attrs = PropertyAttributes {
            balcony_area: decimal("10").into(),
            terrace_area: decimal("20").into(),
            ..PropertyAttributes::default()
        };
        assert_eq!(delta(Step::OutdoorArea, &attrs, "0"), decimal("4200"));
    }

    #[test]
    fn building_age_is_limited() {
        let aged = |years: &str| PropertyAttributes {
            building_age: decimal(years).into(),
            ..PropertyAttributes::default()
        };

        assert_eq!(
            delta(Step::BuildingAge, &aged("0"), "30000"),
            Decimal::ZERO,
        );
        assert_eq!(
            delta(Step::BuildingAge, &aged("5"), "30000"),
            decimal("-3000"),
        );
        assert_eq!(
            delta(Step::BuildingAge, &aged("50"), "30000"),
            decimal("-30000"),
        );
        assert_eq!(
            delta(Step::BuildingAge, &aged("120"), "30000"),
            decimal("-30000"),
        );
    }

    #[test]
    fn sea_proximity_takes_share_of_running_total() {
        let at = |km: &str| PropertyAttributes {
            distance_to_sea: decimal(km).into(),
            ..PropertyAttributes::default()
        };

        assert_eq!(
            delta(Step::SeaProximity, &at("0.5"), "29000"),
            decimal("2320"),
        );
        assert_eq!(
            delta(Step::SeaProximity, &at("1.0"), "29000"),
            decimal("1160"),
        );
        assert_eq!(
            delta(Step::SeaProximity, &at("1.5"), "29000"),
            decimal("1160"),
        );
        assert_eq!(
            delta(Step::SeaProximity, &at("1.6"), "29000"),
            Decimal::ZERO,
        );
    }

    #[test]
    fn sea_proximity_is_capped_by_tier() {
        let attrs = PropertyAttributes {
            distance_to_sea: decimal("0.2").into(),
            ..PropertyAttributes::default()
        };
        assert_eq!(
            delta(Step::SeaProximity, &attrs, "1000000"),
            decimal("15000"),
        );

        let attrs = PropertyAttributes {
            luxury_tier: LuxuryTier::Minimal,
            distance_to_sea: decimal("1.2").into(),
            ..PropertyAttributes::default()
        };
        assert_eq!(
            delta(Step::SeaProximity, &attrs, "1000000"),
            decimal("4000"),
        );
    }

    #[test]
    fn sea_view() {
        let with = |view| PropertyAttributes {
            sea_view: view,
            ..PropertyAttributes::default()
        };

        assert_eq!(
            delta(Step::SeaView, &with(SeaView::None), "29000"),
            Decimal::ZERO,
        );
        assert_eq!(
            delta(Step::SeaView, &with(SeaView::Partial), "29000"),
            decimal("870"),
        );
        assert_eq!(
            delta(Step::SeaView, &with(SeaView::Full), "29000"),
            decimal("2030"),
        );
        assert_eq!(
            delta(Step::SeaView, &with(SeaView::Panoramic), "29000"),
            decimal("3480"),
        );
        assert_eq!(
            delta(Step::SeaView, &with(SeaView::Partial), "1000000"),
            decimal("5000"),
        );
        assert_eq!(
            delta(Step::SeaView, &with(SeaView::Panoramic), "1000000"),
            decimal("15000"),
        );
    }

    #[test]
    fn metro_distance_is_limited() {
        let at = |km: &str| PropertyAttributes {
            distance_to_metro: decimal(km).into(),
            ..PropertyAttributes::default()
        };

        assert_eq!(
            delta(Step::MetroDistance, &at("1"), "0"),
            decimal("-900"),
        );
        assert_eq!(
            delta(Step::MetroDistance, &at("2.5"), "0"),
            decimal("-2250"),
        );
        assert_eq!(
            delta(Step::MetroDistance, &at("40"), "0"),
            decimal("-15000"),
        );
    }

    #[test]
    fn bus_stops_are_limited() {
        let with = |stops: &str| PropertyAttributes {
            nearby_bus_stops: decimal(stops).into(),
            ..PropertyAttributes::default()
        };

        assert_eq!(delta(Step::BusStops, &with("0"), "0"), Decimal::ZERO);
        assert_eq!(delta(Step::BusStops, &with("2"), "0"), decimal("1100"));
        assert_eq!(delta(Step::BusStops, &with("5"), "0"), decimal("2750"));
        assert_eq!(delta(Step::BusStops, &with("9"), "0"), decimal("2750"));
    }

    #[test]
    fn market_distance() {
        let at = |km: &str| PropertyAttributes {
            nearest_market_distance: decimal(km).into(),
            ..PropertyAttributes::default()
        };

        assert_eq!(
            delta(Step::MarketDistance, &at("0.6"), "0"),
            Decimal::ZERO,
        );
        assert_eq!(
            delta(Step::MarketDistance, &at("0.61"), "0"),
            decimal("-9000"),
        );
    }

    #[test]
    fn flat_amenities() {
        let none = PropertyAttributes::default();
        let all = PropertyAttributes {
            has_insulation: true,
            is_earthquake_compliant: false,
            is_american_kitchen: true,
            has_parking: false,
            has_fiber: false,
            is_furnished: true,
            ..PropertyAttributes::default()
        };

        let cases = [
            (Step::Insulation, "0", "1800"),
            (Step::EarthquakeCompliance, "0", "-25000"),
            (Step::AmericanKitchen, "0", "-4500"),
            (Step::Parking, "0", "-3500"),
            (Step::Fiber, "1800", "-1000"),
            (Step::Furnishing, "0", "2800"),
        ];
        for (step, default, changed) in cases {
            assert_eq!(delta(step, &none, "0"), decimal(default), "{step}");
            assert_eq!(delta(step, &all, "0"), decimal(changed), "{step}");
        }
    }

    #[test]
    fn kind_adjustments() {
        let attrs = PropertyAttributes {
            heating: Heating::None,
            facade: Facade::Terrible,
            noise_level: NoiseLevel::None,
            floor_type: FloorType::Penthouse,
            rooms: decimal("4").into(),
            ..PropertyAttributes::default()
        };

        assert_eq!(delta(Step::Heating, &attrs, "0"), decimal("-18000"));
        assert_eq!(delta(Step::Facade, &attrs, "0"), decimal("-4500"));
        assert_eq!(delta(Step::Noise, &attrs, "0"), decimal("4500"));
        assert_eq!(delta(Step::FloorType, &attrs, "0"), decimal("6500"));
        assert_eq!(delta(Step::Rooms, &attrs, "0"), decimal("3000"));
    }

    #[test]
    fn safety_discount_scales_running_total() {
        let attrs = PropertyAttributes {
            is_neighborhood_safe: false,
            ..PropertyAttributes::default()
        };
        assert_eq!(
            Step::SafetyDiscount.apply(&attrs, decimal("30750")),
            decimal("21525"),
        );
        assert_eq!(
            Step::SafetyDiscount
                .apply(&PropertyAttributes::default(), decimal("30750")),
            decimal("30750"),
        );
    }
}
