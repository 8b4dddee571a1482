//! Personality report: the first of the two pipeline entry points.
//!
//! `AnswerLedger → [TraitScore; 5] → (DerivedIndices, Insights) → summary`

use serde::{Deserialize, Serialize};

use crate::elements::{Element, Trait};
use crate::indices::{score_or_neutral, DerivedIndices};
use crate::insights::{select_insights, TraitNote};
use crate::ledger::AnswerLedger;
use crate::scoring::{score_trait, TraitScore};
use crate::summary::generate_summary;

/// Everything the report screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityReport {
    /// One entry per trait, in element order.
    pub traits: Vec<TraitScore>,
    pub mental_health_level: i32,
    pub confidence_level: i32,
    pub stress_resilience: i32,
    pub emotional_intelligence: i32,
    pub summary: String,
    pub strengths: Vec<TraitNote>,
    pub growth_areas: Vec<TraitNote>,
}

impl PersonalityReport {
    /// Score for `kind`, or 50 if the report lacks it.
    pub fn trait_score(&self, kind: Trait) -> i32 {
        score_or_neutral(&self.traits, kind)
    }

    pub fn indices(&self) -> DerivedIndices {
        DerivedIndices {
            mental_health: self.mental_health_level,
            confidence: self.confidence_level,
            stress_resilience: self.stress_resilience,
            emotional_intelligence: self.emotional_intelligence,
        }
    }
}

/// Score a ledger snapshot. Total over any ledger; unanswered elements
/// score a neutral 50.
pub fn compute_personality_report(ledger: &AnswerLedger) -> PersonalityReport {
    let traits: Vec<TraitScore> = Element::ALL
        .iter()
        .map(|&element| score_trait(element.measured_trait(), ledger.answers(element)))
        .collect();

    let indices = DerivedIndices::from_traits(&traits);
    let insights = select_insights(&traits);
    let summary = generate_summary(&traits, indices.mental_health, indices.confidence);

    log::debug!(
        "report: scores={:?} mh={} conf={} sr={} ei={}",
        traits.iter().map(|t| t.score).collect::<Vec<_>>(),
        indices.mental_health,
        indices.confidence,
        indices.stress_resilience,
        indices.emotional_intelligence
    );

    PersonalityReport {
        traits,
        mental_health_level: indices.mental_health,
        confidence_level: indices.confidence,
        stress_resilience: indices.stress_resilience,
        emotional_intelligence: indices.emotional_intelligence,
        summary,
        strengths: insights.strengths,
        growth_areas: insights.growth_areas,
    }
}
