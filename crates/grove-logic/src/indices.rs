//! Derived wellness indices: fixed weighted blends of the five traits.
//!
//! | Index | O | E | A | S | C |
//! |-------|---|---|---|---|---|
//! | Mental health | .10 | .10 | .25 | .35 | .20 |
//! | Confidence | 0 | .45 | 0 | .35 | .20 |
//! | Stress resilience | .20 | 0 | 0 | .50 | .30 |
//! | Emotional intelligence | .30 | .10 | .40 | .20 | 0 |
//!
//! Weights are held as integer percentages so the blend is exact before
//! rounding. A trait missing from the input counts as 50.

use serde::{Deserialize, Serialize};

use crate::constants::indices::NEUTRAL_SCORE;
use crate::elements::Trait;
use crate::scoring::TraitScore;

/// One of the four derived indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessIndex {
    MentalHealth,
    Confidence,
    StressResilience,
    EmotionalIntelligence,
}

impl WellnessIndex {
    pub const ALL: [WellnessIndex; 4] = [
        WellnessIndex::MentalHealth,
        WellnessIndex::Confidence,
        WellnessIndex::StressResilience,
        WellnessIndex::EmotionalIntelligence,
    ];

    /// Percent weights in [`Trait::ALL`] order. Each row sums to 100.
    pub fn weights(self) -> [i32; 5] {
        match self {
            WellnessIndex::MentalHealth => [10, 10, 25, 35, 20],
            WellnessIndex::Confidence => [0, 45, 0, 35, 20],
            WellnessIndex::StressResilience => [20, 0, 0, 50, 30],
            WellnessIndex::EmotionalIntelligence => [30, 10, 40, 20, 0],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WellnessIndex::MentalHealth => "Mental Health",
            WellnessIndex::Confidence => "Confidence",
            WellnessIndex::StressResilience => "Stress Resilience",
            WellnessIndex::EmotionalIntelligence => "Emotional Intelligence",
        }
    }

    /// Weighted blend of `traits`, rounded half-up.
    pub fn compute(self, traits: &[TraitScore]) -> i32 {
        let weighted: i32 = Trait::ALL
            .iter()
            .zip(self.weights())
            .map(|(&kind, w)| w * score_or_neutral(traits, kind))
            .sum();
        (weighted + 50).div_euclid(100)
    }
}

/// The four indices for one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedIndices {
    pub mental_health: i32,
    pub confidence: i32,
    pub stress_resilience: i32,
    pub emotional_intelligence: i32,
}

impl DerivedIndices {
    pub fn from_traits(traits: &[TraitScore]) -> Self {
        Self {
            mental_health: WellnessIndex::MentalHealth.compute(traits),
            confidence: WellnessIndex::Confidence.compute(traits),
            stress_resilience: WellnessIndex::StressResilience.compute(traits),
            emotional_intelligence: WellnessIndex::EmotionalIntelligence.compute(traits),
        }
    }

    pub fn get(&self, index: WellnessIndex) -> i32 {
        match index {
            WellnessIndex::MentalHealth => self.mental_health,
            WellnessIndex::Confidence => self.confidence,
            WellnessIndex::StressResilience => self.stress_resilience,
            WellnessIndex::EmotionalIntelligence => self.emotional_intelligence,
        }
    }
}

/// Score of the first entry for `kind`, or 50 if absent.
pub fn score_or_neutral(traits: &[TraitScore], kind: Trait) -> i32 {
    traits
        .iter()
        .find(|t| t.kind == kind)
        .map(|t| t.score)
        .unwrap_or(NEUTRAL_SCORE)
}
