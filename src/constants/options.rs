//! Recognized option values for every enumerated profile field.
//!
//! These are the single source of truth for both validation (which lists
//! the accepted values) and calculation (which resolves text to a typed
//! option and falls back to a documented default when that fails).

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every recognized value, in presentation order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Exact, case-sensitive match against the form value.
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn names() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

option_set! {
    HouseType {
        Detached => "detached",
        SemiDetached => "semi-detached",
        Row => "row",
        Apartment => "apartment",
    }
}

option_set! {
    HeatingSystem {
        District => "district",
        Electric => "electric",
        Oil => "oil",
        Geothermal => "geothermal",
    }
}

option_set! {
    DistrictLocation {
        Espoo => "espoo",
        Helsinki => "helsinki",
        Vantaa => "vantaa",
        Tampere => "tampere",
        Other => "other",
    }
}

option_set! {
    ElectricityProvider {
        Fortum => "fortum",
        Helen => "helen",
        Vantaan => "vantaan",
        Tampere => "tampere",
        Other => "other",
    }
}

option_set! {
    ProductType {
        Standard => "standard",
        Renewable => "renewable",
        Nuclear => "nuclear",
        NuclearMix => "nuclearMix",
    }
}

option_set! {
    VehicleType {
        Car => "car",
        Motorcycle => "motorcycle",
        Bike => "bike",
    }
}

option_set! {
    /// Strategy used to estimate grocery emissions.
    GroceryMethod {
        Loyalty => "loyalty",
        Spending => "spending",
        ReceiptAnalysis => "receipt-analysis",
    }
}

option_set! {
    DietType {
        MeatHeavy => "meat-heavy",
        Balanced => "balanced",
        Vegetarian => "vegetarian",
        Vegan => "vegan",
        National => "national",
    }
}

option_set! {
    /// Output-only presentation period for absolute emission figures.
    DisplayMode {
        Yearly => "yearly",
        Monthly => "monthly",
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Yearly
    }
}

/// Reporting period of a consumption figure.
///
/// `annual` and `yearly` are both accepted; they are the same period under
/// two spellings used by different form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl Period {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "semi-annual" => Some(Self::SemiAnnual),
            "annual" | "yearly" => Some(Self::Annual),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::SemiAnnual => "semi-annual",
            Self::Annual => "annual",
        }
    }

    /// Number of reporting periods per year.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Monthly => 12.0,
            Self::Quarterly => 4.0,
            Self::SemiAnnual => 2.0,
            Self::Annual => 1.0,
        }
    }

    /// Multiplier for free-form period text; anything unrecognized is
    /// treated as already annual.
    pub fn multiplier_for(text: &str) -> f64 {
        Self::parse(text).map_or(1.0, Self::multiplier)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted values for `waterPeriod`.
pub const WATER_PERIODS: &[&str] = &["monthly", "quarterly", "semi-annual", "annual"];

/// Accepted values for `consumptionPeriod` and vehicle `period`.
pub const USAGE_PERIODS: &[&str] = &["monthly", "yearly"];

/// Accepted values for `groceryPeriod` and `grocerySpendPeriod`.
pub const GROCERY_PERIODS: &[&str] = &["monthly", "annual"];

pub const CAR_FUELS: &[&str] = &["petrol", "diesel", "hybrid", "phev", "bev"];

pub const MOTORCYCLE_CLASSES: &[&str] = &[
    "under125cc",
    "125to250cc",
    "250to500cc",
    "500to1000cc",
    "over1000cc",
    "electric",
];

pub const BIKE_KINDS: &[&str] = &["manual", "electric"];

impl VehicleType {
    /// Fuel (or engine class) values accepted for this vehicle type.
    pub const fn fuel_types(self) -> &'static [&'static str] {
        match self {
            Self::Car => CAR_FUELS,
            Self::Motorcycle => MOTORCYCLE_CLASSES,
            Self::Bike => BIKE_KINDS,
        }
    }
}
