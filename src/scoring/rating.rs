use crate::constants::RATING_UPPER_BOUNDS;
use serde::{Serialize, Serializer};
use std::fmt;

/// Letter grade for emission intensity, A best through G worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmissionRating {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl EmissionRating {
    /// Grades covered by [`RATING_UPPER_BOUNDS`], in the same order.
    const BOUNDED: [EmissionRating; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
        }
    }
}

impl fmt::Display for EmissionRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Serialize for EmissionRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Rate annual emissions per m² (kg CO₂/m²/yr).
///
/// Bounds are exclusive: a value equal to a bound falls into the next grade.
/// NaN compares false against every bound and so rates G.
pub fn rate_emissions(kg_per_m2: f64) -> EmissionRating {
    RATING_UPPER_BOUNDS
        .iter()
        .zip(EmissionRating::BOUNDED)
        .find(|(bound, _)| kg_per_m2 < **bound)
        .map_or(EmissionRating::G, |(_, rating)| rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(rate_emissions(0.0), EmissionRating::A);
        assert_eq!(rate_emissions(4.999), EmissionRating::A);
        assert_eq!(rate_emissions(5.0), EmissionRating::B);
        assert_eq!(rate_emissions(9.999), EmissionRating::B);
        assert_eq!(rate_emissions(10.0), EmissionRating::C);
        assert_eq!(rate_emissions(19.99), EmissionRating::C);
        assert_eq!(rate_emissions(20.0), EmissionRating::D);
        assert_eq!(rate_emissions(35.0), EmissionRating::E);
        assert_eq!(rate_emissions(50.0), EmissionRating::F);
        assert_eq!(rate_emissions(69.99), EmissionRating::F);
        assert_eq!(rate_emissions(70.0), EmissionRating::G);
        assert_eq!(rate_emissions(500.0), EmissionRating::G);
    }

    #[test]
    fn test_rating_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&EmissionRating::E).unwrap(), "\"E\"");
    }
}
