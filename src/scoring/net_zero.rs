use crate::constants::{BASELINE_SCORE, FINNISH_AVERAGE_KG, SCORE_BAND_FLOORS};
use serde::Serialize;
use std::fmt;

/// Round to the nearest integer with halves going up (towards +∞).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Net-zero score for annual emissions (kg CO₂/yr).
///
/// 100 means zero emissions, 60 the national baseline, and 1 anything at or
/// beyond twice the baseline. The result is always within 1..=100.
pub fn net_zero_score(annual_kg: f64) -> u8 {
    let baseline = FINNISH_AVERAGE_KG;

    if annual_kg <= 0.0 {
        return 100;
    }
    if annual_kg >= baseline * 2.0 {
        return 1;
    }

    let score = if annual_kg <= baseline {
        round_half_up(BASELINE_SCORE + 40.0 * (1.0 - annual_kg / baseline))
    } else {
        round_half_up((BASELINE_SCORE * (1.0 - (annual_kg - baseline) / baseline)).max(1.0))
    };

    // NaN input lands here as NaN and saturates to 0 in the cast
    (score as u8).clamp(1, 100)
}

/// Qualitative band for a net-zero score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBand {
    Excellent,
    VeryGood,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl ScoreBand {
    const RANKED: [ScoreBand; 5] = [
        Self::Excellent,
        Self::VeryGood,
        Self::Good,
        Self::Average,
        Self::BelowAverage,
    ];

    pub fn for_score(score: u8) -> Self {
        SCORE_BAND_FLOORS
            .iter()
            .zip(Self::RANKED)
            .find(|((floor, _), _)| score >= *floor)
            .map_or(Self::Poor, |(_, band)| band)
    }

    pub fn label(self) -> &'static str {
        Self::RANKED
            .iter()
            .position(|band| *band == self)
            .map_or("Poor", |index| SCORE_BAND_FLOORS[index].1)
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_boundaries() {
        assert_eq!(net_zero_score(0.0), 100);
        assert_eq!(net_zero_score(-25.0), 100);
        assert_eq!(net_zero_score(4200.0), 60);
        assert_eq!(net_zero_score(8400.0), 1);
        assert_eq!(net_zero_score(20000.0), 1);
    }

    #[test]
    fn test_score_below_baseline() {
        assert_eq!(net_zero_score(2100.0), 80);
        assert_eq!(net_zero_score(1.0), 100);
    }

    #[test]
    fn test_score_above_baseline() {
        assert_eq!(net_zero_score(6300.0), 30);
        // 60 * (1 - 4179/4200) = 0.3, floored at 1
        assert_eq!(net_zero_score(8379.0), 1);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(67.5), 68.0);
        assert_eq!(round_half_up(67.49), 67.0);
        assert_eq!(round_half_up(0.5), 1.0);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(89), ScoreBand::VeryGood);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Average);
        assert_eq!(ScoreBand::for_score(40), ScoreBand::BelowAverage);
        assert_eq!(ScoreBand::for_score(39), ScoreBand::Poor);
        assert_eq!(ScoreBand::BelowAverage.label(), "Below Average");
        assert_eq!(ScoreBand::Poor.to_string(), "Poor");
    }
}
