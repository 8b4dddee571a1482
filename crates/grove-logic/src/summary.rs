//! Narrative summary paragraph for the report screen.

use crate::constants::insights::{
    SUMMARY_HIGHLIGHT_AT_LEAST, SUMMARY_HIGHLIGHT_MAX, SUMMARY_HIGH_AT_LEAST, SUMMARY_MID_AT_LEAST,
};
use crate::scoring::TraitScore;

const OPENING: &str = "Your journey through the enchanted forest has revealed a unique personality profile. ";

/// Build the summary from the scored traits and two of the indices.
///
/// Sentences, in order: a fixed opening; a mental-health clause (three
/// buckets); a confidence clause (only in the top two buckets); and a
/// closing clause naming up to two traits scoring ≥ 60.
pub fn generate_summary(traits: &[TraitScore], mental_health: i32, confidence: i32) -> String {
    let mut summary = String::from(OPENING);

    summary.push_str(if mental_health >= SUMMARY_HIGH_AT_LEAST {
        "You demonstrate strong mental wellness and emotional balance. "
    } else if mental_health >= SUMMARY_MID_AT_LEAST {
        "Your emotional landscape shows healthy balance with room for growth. "
    } else {
        "Your answers suggest you may benefit from focusing on emotional well-being. "
    });

    if confidence >= SUMMARY_HIGH_AT_LEAST {
        summary.push_str("You carry yourself with notable confidence and self-assurance. ");
    } else if confidence >= SUMMARY_MID_AT_LEAST {
        summary.push_str("Your confidence level is healthy and can continue to grow. ");
    }

    let highlights: Vec<String> = traits
        .iter()
        .filter(|t| t.score >= SUMMARY_HIGHLIGHT_AT_LEAST)
        .take(SUMMARY_HIGHLIGHT_MAX)
        .map(|t| t.kind.name().to_lowercase())
        .collect();
    if !highlights.is_empty() {
        summary.push_str(&format!(
            "Your personality particularly shines in {}.",
            highlights.join(" and ")
        ));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Trait;
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

    #[test]
    fn test_neutral_summary() {
        let s = generate_summary(&profile([50; 5]), 50, 50);
        assert_eq!(
            s,
            "Your journey through the enchanted forest has revealed a unique personality profile. \
             Your emotional landscape shows healthy balance with room for growth. \
             Your confidence level is healthy and can continue to grow. "
        );
    }

    #[test]
    fn test_high_buckets_and_two_highlights() {
        let s = generate_summary(&profile([60, 90, 95, 20, 80]), 70, 70);
        assert!(s.contains("strong mental wellness"));
        assert!(s.contains("notable confidence"));
        assert!(s.ends_with("Your personality particularly shines in openness and extraversion."));
        assert!(!s.contains("agreeableness"));
    }

    #[test]
    fn test_low_confidence_emits_no_clause() {
        let s = generate_summary(&profile([10; 5]), 49, 49);
        assert!(s.contains("may benefit from focusing on emotional well-being"));
        assert!(!s.contains("confidence"));
        assert!(!s.contains("shines"));
    }

    #[test]
    fn test_single_highlight_uses_display_name() {
        let s = generate_summary(&profile([10, 10, 10, 75, 10]), 40, 40);
        assert!(s.ends_with("shines in emotional stability."));
    }
}
