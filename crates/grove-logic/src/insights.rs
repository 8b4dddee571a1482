//! Strength / growth-area selection.
//!
//! A trait scoring ≥ 70 is a strength, ≤ 30 a growth area, anything
//! between is neutral. Both lists are guaranteed non-empty for a
//! non-empty trait list: if nothing qualifies, the single highest
//! (resp. lowest) trait is used, ties going to the earliest trait.

use serde::{Deserialize, Serialize};

use crate::constants::insights::{GROWTH_AT_MOST, STRENGTH_AT_LEAST};
use crate::elements::Trait;
use crate::scoring::TraitScore;

/// A canned sentence about one trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitNote {
    #[serde(rename = "trait")]
    pub kind: Trait,
    pub text: String,
}

impl TraitNote {
    fn strength(kind: Trait) -> Self {
        Self {
            kind,
            text: strength_text(kind).to_string(),
        }
    }

    fn growth(kind: Trait) -> Self {
        Self {
            kind,
            text: growth_text(kind).to_string(),
        }
    }
}

/// Strengths and growth areas, each in trait order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub strengths: Vec<TraitNote>,
    pub growth_areas: Vec<TraitNote>,
}

/// Classify every trait and apply the non-empty fallbacks.
pub fn select_insights(traits: &[TraitScore]) -> Insights {
    let mut insights = Insights::default();

    for t in traits {
        if t.score >= STRENGTH_AT_LEAST {
            insights.strengths.push(TraitNote::strength(t.kind));
        } else if t.score <= GROWTH_AT_MOST {
            insights.growth_areas.push(TraitNote::growth(t.kind));
        }
    }

    if insights.strengths.is_empty() {
        if let Some(best) = first_extreme(traits, |candidate, best| candidate > best) {
            insights.strengths.push(TraitNote::strength(best.kind));
        }
    }
    if insights.growth_areas.is_empty() {
        if let Some(worst) = first_extreme(traits, |candidate, best| candidate < best) {
            insights.growth_areas.push(TraitNote::growth(worst.kind));
        }
    }

    insights
}

/// Earliest trait whose score no later trait beats under `beats`.
fn first_extreme(traits: &[TraitScore], beats: impl Fn(i32, i32) -> bool) -> Option<&TraitScore> {
    let mut iter = traits.iter();
    let mut best = iter.next()?;
    for t in iter {
        if beats(t.score, best.score) {
            best = t;
        }
    }
    Some(best)
}

pub fn strength_text(kind: Trait) -> &'static str {
    match kind {
        Trait::Openness => "Your creative mind and curiosity drive innovation and fresh perspectives.",
        Trait::Extraversion => "Your social energy inspires others and builds strong connections.",
        Trait::Agreeableness => "Your compassion and empathy create harmonious relationships.",
        Trait::EmotionalStability => "Your emotional stability provides a calm anchor in turbulent times.",
        Trait::Conscientiousness => "Your discipline and organization lead to consistent achievement.",
    }
}

pub fn growth_text(kind: Trait) -> &'static str {
    match kind {
        Trait::Openness => "Consider exploring new experiences and perspectives to expand your horizons.",
        Trait::Extraversion => "Building social connections gradually could enhance your support network.",
        Trait::Agreeableness => "Practicing empathy and trust could deepen your relationships.",
        Trait::EmotionalStability => "Developing emotional regulation strategies could increase your resilience.",
        Trait::Conscientiousness => "Setting small, achievable goals could help build structure.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{description, Level};

    fn profile(scores: [i32; 5]) -> Vec<TraitScore> {
        Trait::ALL
            .iter()
            .zip(scores)
            .map(|(&kind, score)| {
                let level = Level::from_score(score);
                TraitScore {
                    kind,
                    element: kind.element(),
                    score,
                    level,
                    description: description(kind, level).to_string(),
                }
            })
            .collect()
    }

    fn kinds(notes: &[TraitNote]) -> Vec<Trait> {
        notes.iter().map(|n| n.kind).collect()
    }

    #[test]
    fn test_thresholds_inclusive() {
        let i = select_insights(&profile([70, 69, 31, 30, 50]));
        assert_eq!(kinds(&i.strengths), vec![Trait::Openness]);
        assert_eq!(kinds(&i.growth_areas), vec![Trait::EmotionalStability]);
    }

    #[test]
    fn test_multiple_in_trait_order() {
        let i = select_insights(&profile([90, 10, 75, 20, 80]));
        assert_eq!(
            kinds(&i.strengths),
            vec![Trait::Openness, Trait::Agreeableness, Trait::Conscientiousness]
        );
        assert_eq!(
            kinds(&i.growth_areas),
            vec![Trait::Extraversion, Trait::EmotionalStability]
        );
    }

    #[test]
    fn test_fallback_picks_extremes() {
        let i = select_insights(&profile([55, 65, 40, 45, 60]));
        assert_eq!(kinds(&i.strengths), vec![Trait::Extraversion]);
        assert_eq!(kinds(&i.growth_areas), vec![Trait::Agreeableness]);
    }

    #[test]
    fn test_fallback_tie_picks_first() {
        let i = select_insights(&profile([50; 5]));
        assert_eq!(kinds(&i.strengths), vec![Trait::Openness]);
        assert_eq!(kinds(&i.growth_areas), vec![Trait::Openness]);

        let i = select_insights(&profile([40, 60, 60, 40, 50]));
        assert_eq!(kinds(&i.strengths), vec![Trait::Extraversion]);
        assert_eq!(kinds(&i.growth_areas), vec![Trait::Openness]);
    }

    #[test]
    fn test_fallback_only_fills_empty_side() {
        // One real strength, no growth area → lowest trait fills growth.
        let i = select_insights(&profile([85, 50, 45, 60, 50]));
        assert_eq!(kinds(&i.strengths), vec![Trait::Openness]);
        assert_eq!(kinds(&i.growth_areas), vec![Trait::Agreeableness]);
    }

    #[test]
    fn test_note_text_matches_table() {
        let i = select_insights(&profile([100, 0, 50, 50, 50]));
        assert_eq!(i.strengths[0].text, strength_text(Trait::Openness));
        assert_eq!(i.growth_areas[0].text, growth_text(Trait::Extraversion));
    }

    #[test]
    fn test_empty_input_yields_empty_lists() {
        assert_eq!(select_insights(&[]), Insights::default());
    }
}
