//! Trait scorer: one element's answers to a 0–100 trait score.
//!
//! ```text
//! contribution = value            (6 - value for the reversed trait)
//! mean         = Σ contribution / n        (3 when n == 0)
//! score        = round((mean - 1) * 25)
//! ```
//!
//! The score is then bucketed into a [`Level`] with half-open breakpoints
//! at 20/40/60/80, and a per-trait, per-level description is attached.
//!
//! Inputs outside 1..=5 are not rejected here; they produce scores
//! outside 0..=100. Use [`crate::ledger::AnswerLedger::validate`] first.

use serde::{Deserialize, Serialize};

use crate::constants::{levels, likert};
use crate::elements::{Element, Trait};
use crate::ledger::Answer;

/// Qualitative bucket for a trait score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Level {
    /// Bucket a rounded score. Lower bounds are inclusive.
    pub fn from_score(score: i32) -> Self {
        if score < levels::VERY_LOW_BELOW {
            Self::VeryLow
        } else if score < levels::LOW_BELOW {
            Self::Low
        } else if score < levels::MODERATE_BELOW {
            Self::Moderate
        } else if score < levels::HIGH_BELOW {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored trait, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScore {
    #[serde(rename = "trait")]
    pub kind: Trait,
    pub element: Element,
    /// Nominally 0..=100.
    pub score: i32,
    pub level: Level,
    pub description: String,
}

/// Score one element's answers.
pub fn score_trait(kind: Trait, answers: &[Answer]) -> TraitScore {
    let score = normalized_score(kind, answers);
    let level = Level::from_score(score);
    TraitScore {
        kind,
        element: kind.element(),
        score,
        level,
        description: description(kind, level).to_string(),
    }
}

/// Sum of contributions over the answer count, mapped onto 0..=100.
///
/// Computed as `(Σc - n) * 25 / n` so that full five-answer sets are exact
/// integers before rounding.
fn normalized_score(kind: Trait, answers: &[Answer]) -> i32 {
    if answers.is_empty() {
        let mid = i32::from(likert::MIDPOINT);
        return (mid - i32::from(likert::MIN)) * likert::SCORE_PER_STEP;
    }
    let n = answers.len() as i64;
    let sum: i64 = answers
        .iter()
        .map(|a| i64::from(contribution(kind, a.value)))
        .sum();
    let scaled = (sum - n * i64::from(likert::MIN)) * i64::from(likert::SCORE_PER_STEP);
    round_half_up(scaled as f64 / n as f64)
}

fn contribution(kind: Trait, value: u8) -> i32 {
    if kind.is_reverse_scored() {
        i32::from(likert::REVERSE_PIVOT) - i32::from(value)
    } else {
        i32::from(value)
    }
}

/// Round to nearest, ties toward positive infinity.
pub(crate) fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// Description shown for `kind` at `level`.
pub fn description(kind: Trait, level: Level) -> &'static str {
    use Level::*;
    match (kind, level) {
        (Trait::Openness, VeryLow) => "You prefer practical, conventional approaches and find comfort in familiar routines. You value tradition and concrete thinking.",
        (Trait::Openness, Low) => "You tend toward practical solutions and appreciate stability. While open to some new ideas, you prefer proven methods.",
        (Trait::Openness, Moderate) => "You balance creativity with practicality. You can appreciate both new ideas and traditional approaches.",
        (Trait::Openness, High) => "You are curious and imaginative, drawn to new experiences and creative expression. You think abstractly and value innovation.",
        (Trait::Openness, VeryHigh) => "You are exceptionally creative and open-minded, constantly seeking novel experiences and ideas. Your imagination knows few bounds.",

        (Trait::Extraversion, VeryLow) => "You are deeply introspective and find energy in solitude. You prefer meaningful one-on-one connections over large gatherings.",
        (Trait::Extraversion, Low) => "You lean toward introversion, preferring quiet environments and smaller social circles. You think before you speak.",
        (Trait::Extraversion, Moderate) => "You can adapt to both social and solitary situations. You enjoy company but also value your alone time.",
        (Trait::Extraversion, High) => "You are energized by social interaction and enjoy being around others. You express yourself openly and confidently.",
        (Trait::Extraversion, VeryHigh) => "You thrive in social settings and naturally draw energy from others. You are enthusiastic, talkative, and assertive.",

        (Trait::Agreeableness, VeryLow) => "You are highly independent and prioritize self-interest. You tend to be skeptical and competitive.",
        (Trait::Agreeableness, Low) => "You are somewhat guarded and prefer to maintain boundaries. You value independence over harmony at times.",
        (Trait::Agreeableness, Moderate) => "You balance cooperation with self-interest. You can be both collaborative and assertive as needed.",
        (Trait::Agreeableness, High) => "You are compassionate and cooperative, valuing harmony in relationships. You tend to trust others easily.",
        (Trait::Agreeableness, VeryHigh) => "You are exceptionally empathetic and altruistic, putting others' needs first. You are trusting and forgiving.",

        // Stability runs opposite to sensitivity: VeryLow stability reads
        // as the most sensitive profile.
        (Trait::EmotionalStability, VeryLow) => "You experience intense emotions and may struggle with anxiety or stress. You are highly sensitive to your environment.",
        (Trait::EmotionalStability, Low) => "You are emotionally sensitive and may experience mood swings. Stress can significantly impact your well-being.",
        (Trait::EmotionalStability, Moderate) => "You experience normal emotional fluctuations. You manage stress reasonably well most of the time.",
        (Trait::EmotionalStability, High) => "You handle stress well and maintain emotional balance. You recover quickly from setbacks.",
        (Trait::EmotionalStability, VeryHigh) => "You are remarkably emotionally stable and resilient. Stress rarely affects your calm demeanor.",

        (Trait::Conscientiousness, VeryLow) => "You are spontaneous and flexible, preferring to go with the flow. Structure and planning feel restrictive.",
        (Trait::Conscientiousness, Low) => "You are somewhat relaxed about organization and deadlines. You value flexibility over rigid structure.",
        (Trait::Conscientiousness, Moderate) => "You can be organized when needed but also appreciate flexibility. You balance responsibility with spontaneity.",
        (Trait::Conscientiousness, High) => "You are organized, reliable, and goal-oriented. You take your commitments seriously and plan ahead.",
        (Trait::Conscientiousness, VeryHigh) => "You are exceptionally disciplined and methodical. You set high standards and consistently meet them.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::questions_for;

    fn answers(kind: Trait, values: &[u8]) -> Vec<Answer> {
        questions_for(kind.element())
            .iter()
            .zip(values)
            .map(|(q, &v)| Answer::new(q.id, v))
            .collect()
    }

    #[test]
    fn test_level_boundaries() {
        let cases = [
            (0, Level::VeryLow),
            (19, Level::VeryLow),
            (20, Level::Low),
            (39, Level::Low),
            (40, Level::Moderate),
            (59, Level::Moderate),
            (60, Level::High),
            (79, Level::High),
            (80, Level::VeryHigh),
            (100, Level::VeryHigh),
        ];
        for (score, expected) in cases {
            assert_eq!(Level::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_level_out_of_range_scores() {
        assert_eq!(Level::from_score(-25), Level::VeryLow);
        assert_eq!(Level::from_score(125), Level::VeryHigh);
    }

    #[test]
    fn test_normal_trait_extremes() {
        let all_five = score_trait(Trait::Openness, &answers(Trait::Openness, &[5; 5]));
        assert_eq!(all_five.score, 100);
        assert_eq!(all_five.level, Level::VeryHigh);
        let all_one = score_trait(Trait::Openness, &answers(Trait::Openness, &[1; 5]));
        assert_eq!(all_one.score, 0);
        assert_eq!(all_one.level, Level::VeryLow);
    }

    #[test]
    fn test_reversed_trait_extremes() {
        let kind = Trait::EmotionalStability;
        assert_eq!(score_trait(kind, &answers(kind, &[1; 5])).score, 100);
        assert_eq!(score_trait(kind, &answers(kind, &[5; 5])).score, 0);
        assert_eq!(score_trait(kind, &answers(kind, &[3; 5])).score, 50);
    }

    #[test]
    fn test_mixed_answers() {
        // (4+4+3+5+2)/5 = 3.6 → 2.6 * 25 = 65
        let s = score_trait(Trait::Extraversion, &answers(Trait::Extraversion, &[4, 4, 3, 5, 2]));
        assert_eq!(s.score, 65);
        assert_eq!(s.level, Level::High);
        assert_eq!(s.element, Element::Fire);
    }

    #[test]
    fn test_partial_answers_round_half_up() {
        // (4+5)/2 = 4.5 → 3.5 * 25 = 87.5 → 88
        let s = score_trait(Trait::Agreeableness, &answers(Trait::Agreeableness, &[4, 5]));
        assert_eq!(s.score, 88);
        // (1+2+2)/3 → (5-3)*25/3 = 16.67 → 17
        let s = score_trait(Trait::Agreeableness, &answers(Trait::Agreeableness, &[1, 2, 2]));
        assert_eq!(s.score, 17);
    }

    #[test]
    fn test_empty_answers_score_neutral() {
        for kind in Trait::ALL {
            let s = score_trait(kind, &[]);
            assert_eq!(s.score, 50);
            assert_eq!(s.level, Level::Moderate);
        }
    }

    #[test]
    fn test_out_of_range_values_escape_scale() {
        let s = score_trait(Trait::Openness, &answers(Trait::Openness, &[0; 5]));
        assert_eq!(s.score, -25);
        let s = score_trait(Trait::Openness, &answers(Trait::Openness, &[9; 5]));
        assert_eq!(s.score, 200);
    }

    #[test]
    fn test_description_follows_level() {
        let s = score_trait(Trait::EmotionalStability, &answers(Trait::EmotionalStability, &[1; 5]));
        assert_eq!(s.description, description(Trait::EmotionalStability, Level::VeryHigh));
        assert!(s.description.contains("emotionally stable"));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(49.5), 50);
        assert_eq!(round_half_up(49.49), 49);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(0.0), 0);
    }
}
