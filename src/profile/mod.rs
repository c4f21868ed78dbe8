//! Household profile: the caller-held input to every calculation.
//!
//! The profile mirrors what a data-entry form submits. Enumerated fields
//! are carried as text and numeric fields that may be left blank use
//! [`NumericInput`]. Nothing here interprets the values; see
//! [`normalize`] for that.

pub mod normalize;
pub mod validation;

pub use normalize::{normalize, GroceryStrategy, NormalizedProfile, NormalizedVehicle, WaterUsage};
pub use validation::validate_profile;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A numeric value that may be blank, a number, or free text.
///
/// Form inputs deliver numbers as strings and leave them empty when the
/// user has not typed anything. A value is *present* when it is a number
/// or a non-empty string. Present text that does not parse reads as 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumericInput {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl NumericInput {
    pub fn is_present(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Number(_) => true,
            Self::Text(text) => !text.is_empty(),
        }
    }

    /// Numeric value, with blank or unparsable input reading as 0.
    ///
    /// Text reads its leading number, so `"12abc"` is 12 and `"1,5"` is 1.
    /// Non-finite values (`"inf"`, `"NaN"`, an infinite number) read as 0.
    pub fn value(&self) -> f64 {
        match self {
            Self::Empty => 0.0,
            Self::Number(n) if n.is_finite() => *n,
            Self::Number(_) => 0.0,
            Self::Text(text) => leading_number(text).unwrap_or(0.0),
        }
    }

    pub fn value_if_present(&self) -> Option<f64> {
        self.is_present().then(|| self.value())
    }

    /// Whether present input is not a plain finite number.
    ///
    /// Text with trailing characters is flagged even though [`value`]
    /// still reads its leading number.
    ///
    /// [`value`]: NumericInput::value
    pub fn is_malformed(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Number(n) => !n.is_finite(),
            Self::Text(text) => {
                !text.is_empty() && !text.trim().parse::<f64>().is_ok_and(f64::is_finite)
            }
        }
    }
}

/// Longest decimal prefix of `text` after leading whitespace, if finite.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_digits = digits_from(end + 1 + sign);
        if exponent_digits > 0 {
            end += 1 + sign + exponent_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(text: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Text(text.to_string())
        }
    }
}

impl From<String> for NumericInput {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for NumericInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_str(""),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

struct NumericInputVisitor;

impl<'de> Visitor<'de> for NumericInputVisitor {
    type Value = NumericInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string, or an empty value")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(NumericInput::Number(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(NumericInput::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(NumericInput::Number(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(NumericInput::from(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NumericInput::Empty)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NumericInput::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(NumericInputVisitor)
    }
}

impl<'de> Deserialize<'de> for NumericInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumericInputVisitor)
    }
}

/// One vehicle in the household's transport list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vehicle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub fuel_type: String,
    pub kilometers: f64,
    pub period: String,
    /// Per-vehicle override of the tailpipe factor (g CO₂/km).
    pub custom_emissions: NumericInput,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            name: None,
            vehicle_type: "car".to_string(),
            fuel_type: "petrol".to_string(),
            kilometers: 1000.0,
            period: "monthly".to_string(),
            custom_emissions: NumericInput::Empty,
        }
    }
}

impl Vehicle {
    pub fn new(vehicle_type: &str, fuel_type: &str, kilometers: f64, period: &str) -> Self {
        Self {
            vehicle_type: vehicle_type.to_string(),
            fuel_type: fuel_type.to_string(),
            kilometers,
            period: period.to_string(),
            ..Self::default()
        }
    }

    pub fn with_custom_emissions(mut self, grams_per_km: impl Into<NumericInput>) -> Self {
        self.custom_emissions = grams_per_km.into();
        self
    }
}

/// Everything known about a household for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HouseholdProfile {
    pub house_type: String,
    /// Heated floor area (m²).
    pub built_area: f64,
    pub construction_year: i32,
    pub residents: u32,

    pub heating_system: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_location: Option<String>,

    /// Hot water meter reading for one `water_period` (m³).
    pub hot_water_reading: NumericInput,
    /// Cold water meter reading for one `water_period` (m³).
    pub cold_water_reading: NumericInput,
    pub water_period: String,

    pub electricity_provider: String,
    pub product_type: String,
    /// Consumption for one `consumption_period` (kWh).
    pub electricity_consumption: f64,
    pub consumption_period: String,

    pub vehicles: Vec<Vehicle>,

    pub grocery_method: String,
    /// Declared grocery footprint for one `grocery_period` (kg CO₂).
    #[serde(rename = "groceryCO2")]
    pub grocery_co2: NumericInput,
    pub grocery_period: String,
    /// Grocery spend for one `grocery_spend_period` (€).
    pub grocery_spend: NumericInput,
    pub grocery_spend_period: String,
    pub diet_type: String,
    /// Explicit spend factor overriding the diet default (kg CO₂/€).
    pub emission_factor: NumericInput,

    pub display_mode: String,
}

impl Default for HouseholdProfile {
    fn default() -> Self {
        Self {
            house_type: "apartment".to_string(),
            built_area: 80.0,
            construction_year: 2000,
            residents: 2,
            heating_system: "district".to_string(),
            district_location: Some("helsinki".to_string()),
            hot_water_reading: NumericInput::Empty,
            cold_water_reading: NumericInput::Empty,
            water_period: "monthly".to_string(),
            electricity_provider: "helen".to_string(),
            product_type: "standard".to_string(),
            electricity_consumption: 3000.0,
            consumption_period: "yearly".to_string(),
            vehicles: Vec::new(),
            grocery_method: "loyalty".to_string(),
            grocery_co2: NumericInput::Empty,
            grocery_period: "annual".to_string(),
            grocery_spend: NumericInput::Empty,
            grocery_spend_period: "monthly".to_string(),
            diet_type: "balanced".to_string(),
            emission_factor: NumericInput::Empty,
            display_mode: "yearly".to_string(),
        }
    }
}

impl HouseholdProfile {
    /// Whether either water meter reading was supplied.
    pub fn has_water_readings(&self) -> bool {
        self.hot_water_reading.is_present() || self.cold_water_reading.is_present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_input_presence() {
        assert!(!NumericInput::Empty.is_present());
        assert!(!NumericInput::from("").is_present());
        assert!(NumericInput::from("0").is_present());
        assert!(NumericInput::Number(0.0).is_present());
        assert!(NumericInput::from("abc").is_present());
    }

    #[test]
    fn test_numeric_input_value() {
        assert_eq!(NumericInput::from("12.5").value(), 12.5);
        assert_eq!(NumericInput::from(" 7 ").value(), 7.0);
        assert_eq!(NumericInput::from("abc").value(), 0.0);
        assert_eq!(NumericInput::Empty.value(), 0.0);
        assert_eq!(NumericInput::Empty.value_if_present(), None);
        assert_eq!(NumericInput::from("0").value_if_present(), Some(0.0));
    }

    #[test]
    fn test_numeric_input_non_finite_reads_as_zero() {
        for text in ["inf", "-inf", "Infinity", "NaN", "1e400"] {
            let input = NumericInput::from(text);
            assert_eq!(input.value(), 0.0, "{text}");
            assert_eq!(input.value_if_present(), Some(0.0), "{text}");
            assert!(input.is_malformed(), "{text}");
        }
        assert_eq!(NumericInput::Number(f64::NAN).value(), 0.0);
        assert_eq!(NumericInput::Number(f64::INFINITY).value(), 0.0);
        assert!(NumericInput::Number(f64::NEG_INFINITY).is_malformed());
    }

    #[test]
    fn test_numeric_input_reads_leading_number() {
        assert_eq!(NumericInput::from("12abc").value(), 12.0);
        assert_eq!(NumericInput::from("1,5").value(), 1.0);
        assert_eq!(NumericInput::from("  -3.5kg").value(), -3.5);
        assert_eq!(NumericInput::from(".5").value(), 0.5);
        assert_eq!(NumericInput::from("2e3 litres").value(), 2000.0);
        assert_eq!(NumericInput::from("4e").value(), 4.0);
        assert_eq!(NumericInput::from("-").value(), 0.0);
        assert_eq!(NumericInput::from("kg12").value(), 0.0);

        assert!(NumericInput::from("12abc").is_malformed());
        assert!(NumericInput::from("1,5").is_malformed());
        assert!(!NumericInput::from(" 7 ").is_malformed());
        assert!(!NumericInput::from("0").is_malformed());
    }

    #[test]
    fn test_numeric_input_deserializes_numbers_and_strings() {
        let vehicle: Vehicle = serde_json::from_str(
            r#"{"type":"car","fuelType":"diesel","kilometers":50,"period":"yearly","customEmissions":"120"}"#,
        )
        .unwrap();
        assert_eq!(vehicle.custom_emissions, NumericInput::Text("120".to_string()));

        let vehicle: Vehicle =
            serde_json::from_str(r#"{"customEmissions":95}"#).unwrap();
        assert_eq!(vehicle.custom_emissions, NumericInput::Number(95.0));

        let vehicle: Vehicle =
            serde_json::from_str(r#"{"customEmissions":null}"#).unwrap();
        assert_eq!(vehicle.custom_emissions, NumericInput::Empty);
    }

    #[test]
    fn test_profile_uses_form_field_names() {
        let profile: HouseholdProfile = serde_json::from_str(
            r#"{"builtArea":120,"groceryCO2":"200","displayMode":"monthly"}"#,
        )
        .unwrap();
        assert_eq!(profile.built_area, 120.0);
        assert_eq!(profile.grocery_co2, NumericInput::Text("200".to_string()));
        assert_eq!(profile.display_mode, "monthly");
        // untouched fields keep the form defaults
        assert_eq!(profile.residents, 2);
        assert_eq!(profile.heating_system, "district");
    }
}
