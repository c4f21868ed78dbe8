use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_PROFILE_PATH: &str = "household.toml";

pub const SAMPLE_PROFILE: &str = r#"# Household profile

houseType = "apartment"          # detached | semi-detached | row | apartment
builtArea = 80                   # heated floor area, m²
constructionYear = 2000
residents = 2

heatingSystem = "district"       # district | electric | oil | geothermal
districtLocation = "helsinki"    # espoo | helsinki | vantaa | tampere | other

# Leave both readings blank to use per-resident estimates.
hotWaterReading = ""             # m³ per waterPeriod
coldWaterReading = ""
waterPeriod = "monthly"          # monthly | quarterly | semi-annual | annual

electricityProvider = "helen"    # fortum | helen | vantaan | tampere | other
productType = "standard"         # standard | nuclear | nuclearMix | renewable
electricityConsumption = 3000    # kWh per consumptionPeriod
consumptionPeriod = "yearly"     # monthly | yearly

groceryMethod = "loyalty"        # loyalty | spending | receipt-analysis
groceryCO2 = ""                  # kg CO₂ per groceryPeriod
groceryPeriod = "annual"         # monthly | annual
grocerySpend = ""                # € per grocerySpendPeriod
grocerySpendPeriod = "monthly"
dietType = "balanced"            # meat-heavy | balanced | vegetarian | vegan | national
emissionFactor = ""              # kg CO₂/€, overrides dietType

displayMode = "yearly"           # yearly | monthly

[[vehicles]]
name = "Family car"
type = "car"                     # car | motorcycle | bike
fuelType = "petrol"
kilometers = 1000
period = "monthly"               # monthly | yearly
customEmissions = ""             # g CO₂/km, overrides the fuel table
"#;

pub fn init_profile(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    io::write_file(path, SAMPLE_PROFILE)?;
    println!("Created {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{validate_profile, HouseholdProfile};

    #[test]
    fn test_sample_profile_parses_and_validates() {
        let profile: HouseholdProfile = toml::from_str(SAMPLE_PROFILE).unwrap();
        assert_eq!(profile.vehicles.len(), 1);
        assert_eq!(profile.vehicles[0].name.as_deref(), Some("Family car"));
        assert!(validate_profile(&profile).is_success());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PROFILE_PATH);

        init_profile(&path, false).unwrap();
        assert!(init_profile(&path, false).is_err());
        assert!(init_profile(&path, true).is_ok());
    }
}
