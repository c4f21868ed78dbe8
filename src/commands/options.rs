use crate::constants::{
    DietType, DisplayMode, DistrictLocation, ElectricityProvider, GroceryMethod, HeatingSystem,
    HouseType, ProductType, VehicleType, BIKE_KINDS, CAR_FUELS, FACTOR_TABLE_VERSION,
    GROCERY_PERIODS, MOTORCYCLE_CLASSES, USAGE_PERIODS, WATER_PERIODS,
};
use crate::formatting::FormattingConfig;

/// Profile field (or field group) with its accepted values.
pub fn option_catalog() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("houseType", HouseType::names()),
        ("heatingSystem", HeatingSystem::names()),
        ("districtLocation", DistrictLocation::names()),
        ("waterPeriod", WATER_PERIODS.to_vec()),
        ("electricityProvider", ElectricityProvider::names()),
        ("productType", ProductType::names()),
        ("consumptionPeriod", USAGE_PERIODS.to_vec()),
        ("vehicles[].type", VehicleType::names()),
        ("vehicles[].fuelType (car)", CAR_FUELS.to_vec()),
        ("vehicles[].fuelType (motorcycle)", MOTORCYCLE_CLASSES.to_vec()),
        ("vehicles[].fuelType (bike)", BIKE_KINDS.to_vec()),
        ("vehicles[].period", USAGE_PERIODS.to_vec()),
        ("groceryMethod", GroceryMethod::names()),
        ("groceryPeriod", GROCERY_PERIODS.to_vec()),
        ("grocerySpendPeriod", GROCERY_PERIODS.to_vec()),
        ("dietType", DietType::names()),
        ("displayMode", DisplayMode::names()),
    ]
}

pub fn list_options(formatting: FormattingConfig) {
    let f = formatting.formatter();

    println!(
        "{} {}",
        f.header("Profile options"),
        f.dim(&format!("(factor tables {})", FACTOR_TABLE_VERSION))
    );
    for (field, values) in option_catalog() {
        println!("  {:<34}{}", f.bold(field), values.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_enum_field() {
        let catalog = option_catalog();
        let fields: Vec<&str> = catalog.iter().map(|(field, _)| *field).collect();
        assert!(fields.contains(&"heatingSystem"));
        assert!(fields.contains(&"displayMode"));
        assert!(catalog.iter().all(|(_, values)| !values.is_empty()));
    }
}
