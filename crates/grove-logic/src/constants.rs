//! Scoring constants: Likert scale bounds, level breakpoints, and the
//! thresholds the classifier and recommendation engine key off.
//!
//! These are business rules, not tuning knobs. Both the library and the
//! native simtest read them from here.

pub mod likert {
    /// Lowest valid answer value.
    pub const MIN: u8 = 1;
    /// Highest valid answer value.
    pub const MAX: u8 = 5;
    /// `MIN + MAX`; a reversed answer contributes `REVERSE_PIVOT - value`.
    pub const REVERSE_PIVOT: u8 = 6;
    /// Scale midpoint used when a category has no answers.
    pub const MIDPOINT: u8 = 3;
    /// Points per step of the mean above `MIN` (maps 1..=5 onto 0..=100).
    pub const SCORE_PER_STEP: i32 = 25;
}

pub mod questionnaire {
    /// Questions asked at every statue.
    pub const QUESTIONS_PER_ELEMENT: usize = 5;
    /// Number of statues / elements in a playthrough.
    pub const ELEMENT_COUNT: usize = 5;
}

pub mod levels {
    /// Upper bounds (exclusive) of Very Low, Low, Moderate, High.
    pub const VERY_LOW_BELOW: i32 = 20;
    pub const LOW_BELOW: i32 = 40;
    pub const MODERATE_BELOW: i32 = 60;
    pub const HIGH_BELOW: i32 = 80;
}

pub mod insights {
    /// Score at or above which a trait is a strength.
    pub const STRENGTH_AT_LEAST: i32 = 70;
    /// Score at or below which a trait is a growth area.
    pub const GROWTH_AT_MOST: i32 = 30;
    /// Score at or above which a trait is named in the summary.
    pub const SUMMARY_HIGHLIGHT_AT_LEAST: i32 = 60;
    /// Maximum traits named in the summary's closing clause.
    pub const SUMMARY_HIGHLIGHT_MAX: usize = 2;
    /// Mental-health / confidence buckets for the summary.
    pub const SUMMARY_HIGH_AT_LEAST: i32 = 70;
    pub const SUMMARY_MID_AT_LEAST: i32 = 50;
}

pub mod indices {
    /// Score substituted for a trait absent from the input.
    pub const NEUTRAL_SCORE: i32 = 50;
}

pub mod urgency {
    pub const URGENT_MENTAL_HEALTH_BELOW: i32 = 30;
    pub const URGENT_STABILITY_BELOW: i32 = 25;
    pub const MODERATE_MENTAL_HEALTH_BELOW: i32 = 50;
    pub const MODERATE_STABILITY_BELOW: i32 = 40;
    pub const MODERATE_CONCERNS_AT_LEAST: usize = 3;
    /// Trait analysis flags scores below this as low...
    pub const ANALYSIS_LOW_BELOW: i32 = 30;
    /// ...and at or above this as high.
    pub const ANALYSIS_HIGH_AT_LEAST: i32 = 70;
}

pub mod triggers {
    pub const COMPREHENSIVE_MENTAL_HEALTH_BELOW: i32 = 40;
    pub const EMOTIONAL_REGULATION_STABILITY_BELOW: i32 = 40;
    pub const SOCIAL_EXTRAVERSION_BELOW: i32 = 35;
    pub const SOCIAL_AGREEABLENESS_BELOW: i32 = 35;
    pub const STRESS_RESILIENCE_BELOW: i32 = 50;
    pub const FUNCTIONAL_CONSCIENTIOUSNESS_BELOW: i32 = 40;
    pub const FUNCTIONAL_OPENNESS_BELOW: i32 = 30;
    pub const PHYSICAL_MENTAL_HEALTH_BELOW: i32 = 45;
    pub const PHYSICAL_STRESS_RESILIENCE_BELOW: i32 = 45;
    pub const CREATIVE_OPENNESS_AT_LEAST: i32 = 50;
    pub const PURPOSE_CONFIDENCE_BELOW: i32 = 45;
    /// Secondary categories surfaced after the primary.
    pub const MAX_SECONDARY: usize = 3;
}

pub mod advice {
    pub const EMOTIONAL_INTELLIGENCE_BELOW: i32 = 50;
    pub const STRESS_RESILIENCE_BELOW: i32 = 50;
    pub const CONFIDENCE_BELOW: i32 = 50;
}
