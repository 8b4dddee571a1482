//! Recommendation engine: the second pipeline entry point.
//!
//! Given a finished [`PersonalityReport`]:
//!
//! 1. **Trait analysis** ([`analyze_traits`]) flags each trait scoring
//!    below 30 or at/above 70 with concern / strength / pattern notes.
//! 2. **Urgency** ([`classify_urgency`]) takes the analysis as an input;
//!    the concern count feeds the moderate tier.
//! 3. **Category selection** ([`select_categories`]) walks a fixed,
//!    ordered list of triggers. The first hit is the primary
//!    recommendation, the next three are secondary, the rest are dropped.
//!    General wellness is appended when nothing fired or urgency is routine.
//! 4. **General advice** ([`general_advice`]) in a fixed order.
//! 5. **Overall assessment** picked by urgency alone.

use serde::{Deserialize, Serialize};

use crate::constants::{advice, triggers, urgency as urgency_limits};
use crate::elements::Trait;
use crate::professionals::{HealthProfessional, ProfessionalType};
use crate::report::PersonalityReport;
use crate::scoring::TraitScore;

// ── Urgency ────────────────────────────────────────────────────────────

/// How strongly professional care is indicated. Ordered `Routine < Moderate < Urgent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Routine,
    Moderate,
    Urgent,
}

impl Urgency {
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Routine => "routine",
            Urgency::Moderate => "moderate",
            Urgency::Urgent => "urgent",
        }
    }

    /// Closing paragraph for this tier.
    pub fn overall_assessment(self) -> &'static str {
        match self {
            Urgency::Urgent => "Your assessment results indicate significant areas of concern that warrant prompt attention from qualified mental health professionals. The patterns identified in your responses suggest you would benefit greatly from comprehensive support to address emotional challenges and develop effective coping strategies. Seeking help is a sign of strength and self-awareness.",
            Urgency::Moderate => "Your assessment reveals a mix of strengths and areas that could benefit from professional guidance. While you demonstrate resilience in some domains, there are patterns suggesting that targeted support could enhance your well-being and help you develop additional tools for managing life challenges effectively.",
            Urgency::Routine => "Your assessment indicates generally healthy psychological functioning with opportunities for growth and enhancement. Engaging with mental health resources proactively can help maintain your well-being, build additional resilience, and optimize your personal and professional life satisfaction.",
        }
    }
}

// ── Trait analysis ─────────────────────────────────────────────────────

/// Notes produced by scanning the five traits for extremes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitAnalysis {
    pub concerns: Vec<String>,
    pub strengths: Vec<String>,
    pub patterns: Vec<String>,
}

impl TraitAnalysis {
    pub fn concern_count(&self) -> usize {
        self.concerns.len()
    }
}

/// Scan every trait; low (< 30) and high (≥ 70) scores add notes.
///
/// A low score on any trait adds a concern, so the concern count never
/// grows as a score rises.
pub fn analyze_traits(traits: &[TraitScore]) -> TraitAnalysis {
    let mut analysis = TraitAnalysis::default();

    for t in traits {
        if t.score < urgency_limits::ANALYSIS_LOW_BELOW {
            let (concern, pattern) = low_trait_notes(t.kind);
            analysis.concerns.push(concern.into());
            analysis.patterns.push(pattern.into());
        } else if t.score >= urgency_limits::ANALYSIS_HIGH_AT_LEAST {
            analysis.strengths.push(high_trait_strength(t.kind).into());
            if let Some(pattern) = high_trait_pattern(t.kind) {
                analysis.patterns.push(pattern.into());
            }
        }
    }

    analysis
}

fn low_trait_notes(kind: Trait) -> (&'static str, &'static str) {
    match kind {
        Trait::Openness => (
            "Limited openness may indicate rigid thinking patterns or avoidance of new experiences that could impact personal growth and adaptability to change.",
            "Preference for routine and familiar situations may limit exposure to growth opportunities and diverse perspectives.",
        ),
        Trait::Extraversion => (
            "Low extraversion suggests potential social withdrawal or isolation that could benefit from gradual exposure to supportive social environments.",
            "Tendency toward solitude may indicate either healthy introversion or social anxiety that warrants further exploration with a professional.",
        ),
        Trait::Agreeableness => (
            "Lower agreeableness may indicate interpersonal difficulties, trust issues, or challenges in maintaining harmonious relationships with others.",
            "Skeptical or competitive tendencies may protect against exploitation but could also create barriers to forming close, trusting relationships.",
        ),
        Trait::EmotionalStability => (
            "Elevated emotional sensitivity may indicate vulnerability to stress, anxiety, or mood fluctuations that could benefit from professional support.",
            "Heightened emotional reactivity may signal the need for developing stronger coping strategies and emotional regulation skills.",
        ),
        Trait::Conscientiousness => (
            "Low conscientiousness may manifest as difficulty with organization, goal-setting, or follow-through that could impact daily functioning and achievement.",
            "Preference for spontaneity and flexibility may sometimes conflict with responsibilities and long-term goal achievement.",
        ),
    }
}

fn high_trait_strength(kind: Trait) -> &'static str {
    match kind {
        Trait::Openness => "High openness indicates creativity, intellectual curiosity, and adaptability to new situations and experiences.",
        Trait::Extraversion => "Strong extraversion suggests social confidence, assertiveness, and ability to draw energy from interpersonal interactions.",
        Trait::Agreeableness => "High agreeableness reflects strong empathy, cooperation skills, and ability to maintain positive relationships with others.",
        Trait::EmotionalStability => "Exceptional emotional stability indicates strong resilience to stress and ability to remain calm under pressure.",
        Trait::Conscientiousness => "High conscientiousness demonstrates excellent self-discipline, reliability, and ability to work toward long-term goals effectively.",
    }
}

fn high_trait_pattern(kind: Trait) -> Option<&'static str> {
    match kind {
        Trait::EmotionalStability => Some(
            "High emotional regulation suggests well-developed coping mechanisms and psychological resilience.",
        ),
        _ => None,
    }
}

/// First match wins: urgent, then moderate, else routine.
pub fn classify_urgency(mental_health: i32, stability: i32, analysis: &TraitAnalysis) -> Urgency {
    if mental_health < urgency_limits::URGENT_MENTAL_HEALTH_BELOW
        || stability < urgency_limits::URGENT_STABILITY_BELOW
    {
        return Urgency::Urgent;
    }
    if mental_health < urgency_limits::MODERATE_MENTAL_HEALTH_BELOW
        || stability < urgency_limits::MODERATE_STABILITY_BELOW
        || analysis.concern_count() >= urgency_limits::MODERATE_CONCERNS_AT_LEAST
    {
        return Urgency::Moderate;
    }
    Urgency::Routine
}

// ── Care categories ────────────────────────────────────────────────────

/// A kind of professional support, in trigger-evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareCategory {
    ComprehensiveMentalHealthCare,
    EmotionalRegulationSupport,
    SocialRelationshipSupport,
    StressManagement,
    CognitiveFunctionalSupport,
    PhysicalHealthConsiderations,
    CreativeHolisticApproaches,
    PurposeSelfDevelopment,
    /// Fallback; appended after the triggered categories.
    GeneralMentalWellness,
}

impl CareCategory {
    /// Categories with a trigger, in evaluation order.
    pub const TRIGGERED: [CareCategory; 8] = [
        CareCategory::ComprehensiveMentalHealthCare,
        CareCategory::EmotionalRegulationSupport,
        CareCategory::SocialRelationshipSupport,
        CareCategory::StressManagement,
        CareCategory::CognitiveFunctionalSupport,
        CareCategory::PhysicalHealthConsiderations,
        CareCategory::CreativeHolisticApproaches,
        CareCategory::PurposeSelfDevelopment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CareCategory::ComprehensiveMentalHealthCare => "Comprehensive Mental Health Care",
            CareCategory::EmotionalRegulationSupport => "Emotional Regulation Support",
            CareCategory::SocialRelationshipSupport => "Social and Relationship Support",
            CareCategory::StressManagement => "Stress Management and Resilience",
            CareCategory::CognitiveFunctionalSupport => "Cognitive and Functional Support",
            CareCategory::PhysicalHealthConsiderations => "Physical Health Considerations",
            CareCategory::CreativeHolisticApproaches => "Creative and Holistic Approaches",
            CareCategory::PurposeSelfDevelopment => "Purpose and Self-Development",
            CareCategory::GeneralMentalWellness => "General Mental Wellness Support",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CareCategory::ComprehensiveMentalHealthCare => "🏥",
            CareCategory::EmotionalRegulationSupport => "🧠",
            CareCategory::SocialRelationshipSupport => "👥",
            CareCategory::StressManagement => "🌿",
            CareCategory::CognitiveFunctionalSupport => "📋",
            CareCategory::PhysicalHealthConsiderations => "💤",
            CareCategory::CreativeHolisticApproaches => "🎨",
            CareCategory::PurposeSelfDevelopment => "🎯",
            CareCategory::GeneralMentalWellness => "💚",
        }
    }

    pub fn professionals(self) -> [ProfessionalType; 2] {
        use ProfessionalType as P;
        match self {
            CareCategory::ComprehensiveMentalHealthCare => [P::Psychiatrist, P::ClinicalPsychologist],
            CareCategory::EmotionalRegulationSupport => {
                [P::CognitiveBehavioralSpecialist, P::MindfulnessInstructor]
            }
            CareCategory::SocialRelationshipSupport => [P::LicensedTherapist, P::GroupTherapyFacilitator],
            CareCategory::StressManagement => [P::StressManagementSpecialist, P::BehavioralHealthCoach],
            CareCategory::CognitiveFunctionalSupport => {
                [P::OccupationalTherapist, P::CounselingPsychologist]
            }
            CareCategory::PhysicalHealthConsiderations => [P::SleepSpecialist, P::Neurologist],
            CareCategory::CreativeHolisticApproaches => [P::ArtTherapist, P::MindfulnessInstructor],
            CareCategory::PurposeSelfDevelopment => [P::CareerCounselor, P::CounselingPsychologist],
            CareCategory::GeneralMentalWellness => [P::MentalHealthCounselor, P::BehavioralHealthCoach],
        }
    }

    pub fn reasoning(self) -> &'static str {
        match self {
            CareCategory::ComprehensiveMentalHealthCare => "Your assessment indicates significant emotional challenges that would benefit from comprehensive evaluation by mental health specialists who can provide thorough assessment, accurate diagnosis, and develop an integrated treatment plan combining therapeutic and medical approaches as needed.",
            CareCategory::EmotionalRegulationSupport => "Your responses suggest heightened emotional sensitivity that could benefit from specialized therapeutic approaches focused on developing emotional regulation skills, identifying thought patterns that contribute to distress, and building practical coping strategies.",
            CareCategory::SocialRelationshipSupport => "Your personality profile suggests potential benefits from exploring interpersonal dynamics, building social skills, or addressing patterns that may affect your relationships. Therapists specializing in relational approaches can help navigate these areas.",
            CareCategory::StressManagement => "Your stress resilience scores indicate that developing stronger stress management techniques and building sustainable healthy habits could significantly improve your overall well-being and ability to handle life challenges.",
            CareCategory::CognitiveFunctionalSupport => "Your assessment suggests potential areas for growth in organization, planning, or adapting to new situations. These professionals can help develop practical strategies for improving daily functioning and exploring personal development.",
            CareCategory::PhysicalHealthConsiderations => "When mental health and stress resilience are both impacted, it is important to consider physical factors like sleep quality and neurological health that can significantly affect psychological well-being and cognitive function.",
            CareCategory::CreativeHolisticApproaches => "Your openness to new experiences suggests you may benefit from and engage well with creative therapeutic approaches that allow for self-expression and exploration beyond traditional talk therapy.",
            CareCategory::PurposeSelfDevelopment => "Lower confidence levels may be connected to questions about purpose, direction, or alignment between your values and daily life. Exploring these areas can lead to greater self-assurance and life satisfaction.",
            CareCategory::GeneralMentalWellness => "Proactive mental health support can help maintain psychological well-being, build resilience, and address minor concerns before they develop into larger issues. Regular check-ins with a mental health professional benefit everyone.",
        }
    }

    /// Whether this category's trigger fires. The fallback never does.
    pub fn is_triggered(self, ctx: &TriggerContext) -> bool {
        match self {
            CareCategory::ComprehensiveMentalHealthCare => {
                ctx.urgency == Urgency::Urgent
                    || ctx.mental_health < triggers::COMPREHENSIVE_MENTAL_HEALTH_BELOW
            }
            CareCategory::EmotionalRegulationSupport => {
                ctx.stability < triggers::EMOTIONAL_REGULATION_STABILITY_BELOW
            }
            CareCategory::SocialRelationshipSupport => {
                ctx.extraversion < triggers::SOCIAL_EXTRAVERSION_BELOW
                    || ctx.agreeableness < triggers::SOCIAL_AGREEABLENESS_BELOW
            }
            CareCategory::StressManagement => {
                ctx.stress_resilience < triggers::STRESS_RESILIENCE_BELOW
            }
            CareCategory::CognitiveFunctionalSupport => {
                ctx.conscientiousness < triggers::FUNCTIONAL_CONSCIENTIOUSNESS_BELOW
                    || ctx.openness < triggers::FUNCTIONAL_OPENNESS_BELOW
            }
            CareCategory::PhysicalHealthConsiderations => {
                ctx.mental_health < triggers::PHYSICAL_MENTAL_HEALTH_BELOW
                    && ctx.stress_resilience < triggers::PHYSICAL_STRESS_RESILIENCE_BELOW
            }
            CareCategory::CreativeHolisticApproaches => {
                ctx.urgency == Urgency::Routine && ctx.openness >= triggers::CREATIVE_OPENNESS_AT_LEAST
            }
            CareCategory::PurposeSelfDevelopment => ctx.confidence < triggers::PURPOSE_CONFIDENCE_BELOW,
            CareCategory::GeneralMentalWellness => false,
        }
    }

    /// Expand into the displayable recommendation.
    pub fn recommendation(self) -> RecommendationCategory {
        RecommendationCategory {
            category: self,
            label: self.label().into(),
            icon: self.icon().into(),
            professionals: self.professionals().map(ProfessionalType::profile).to_vec(),
            reasoning: self.reasoning().into(),
        }
    }
}

/// The report values the category triggers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerContext {
    pub urgency: Urgency,
    pub mental_health: i32,
    pub confidence: i32,
    pub stress_resilience: i32,
    pub openness: i32,
    pub extraversion: i32,
    pub agreeableness: i32,
    pub stability: i32,
    pub conscientiousness: i32,
}

impl TriggerContext {
    pub fn new(report: &PersonalityReport, urgency: Urgency) -> Self {
        Self {
            urgency,
            mental_health: report.mental_health_level,
            confidence: report.confidence_level,
            stress_resilience: report.stress_resilience,
            openness: report.trait_score(Trait::Openness),
            extraversion: report.trait_score(Trait::Extraversion),
            agreeableness: report.trait_score(Trait::Agreeableness),
            stability: report.trait_score(Trait::EmotionalStability),
            conscientiousness: report.trait_score(Trait::Conscientiousness),
        }
    }
}

/// Every category that applies, in evaluation order, uncapped.
pub fn select_categories(ctx: &TriggerContext) -> Vec<CareCategory> {
    let mut selected: Vec<CareCategory> = CareCategory::TRIGGERED
        .into_iter()
        .filter(|c| c.is_triggered(ctx))
        .collect();

    if selected.is_empty() || ctx.urgency == Urgency::Routine {
        selected.push(CareCategory::GeneralMentalWellness);
    }

    log::trace!("care categories for {:?}: {:?}", ctx.urgency, selected);
    selected
}

/// A category ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCategory {
    pub category: CareCategory,
    pub label: String,
    pub icon: String,
    pub professionals: Vec<HealthProfessional>,
    pub reasoning: String,
}

// ── General advice ─────────────────────────────────────────────────────

pub const ADVICE_SLEEP: &str = "Maintain consistent sleep habits by going to bed and waking up at regular times, as quality sleep is foundational to mental health and emotional regulation.";
pub const ADVICE_ACTIVITY: &str = "Engage in regular physical activity that you enjoy, as exercise has been consistently shown to reduce anxiety and depression while improving overall mood and cognitive function.";
pub const ADVICE_EMOTIONS: &str = "Practice identifying and naming your emotions throughout the day, as developing emotional awareness is the first step toward better emotional regulation and interpersonal understanding.";
pub const ADVICE_STRESS: &str = "Incorporate daily stress-reduction practices such as deep breathing exercises, progressive muscle relaxation, or brief mindfulness sessions to build your capacity for managing stressful situations.";
pub const ADVICE_CONFIDENCE: &str = "Keep a daily record of small accomplishments and positive experiences to build self-efficacy and counteract negative self-perceptions over time.";
pub const ADVICE_URGENT: &str = "Please prioritize scheduling an appointment with a mental health professional soon, as addressing significant concerns early leads to better outcomes and prevents escalation.";
pub const ADVICE_MODERATE: &str = "Consider reaching out to a mental health professional within the next few weeks to discuss your assessment results and explore supportive strategies.";
pub const ADVICE_CONNECTION: &str = "Build and maintain social connections, even if brief, as social support is one of the strongest protective factors for mental health across all personality types.";
pub const ADVICE_MEDIA: &str = "Limit exposure to negative news and social media when feeling overwhelmed, and instead engage in activities that bring you genuine enjoyment and relaxation.";

/// Advice in display order: two universal items, the index-driven items,
/// the urgency item (moderate/urgent only), two closing universal items.
pub fn general_advice(report: &PersonalityReport, urgency: Urgency) -> Vec<&'static str> {
    let mut items = vec![ADVICE_SLEEP, ADVICE_ACTIVITY];

    if report.emotional_intelligence < advice::EMOTIONAL_INTELLIGENCE_BELOW {
        items.push(ADVICE_EMOTIONS);
    }
    if report.stress_resilience < advice::STRESS_RESILIENCE_BELOW {
        items.push(ADVICE_STRESS);
    }
    if report.confidence_level < advice::CONFIDENCE_BELOW {
        items.push(ADVICE_CONFIDENCE);
    }

    match urgency {
        Urgency::Urgent => items.push(ADVICE_URGENT),
        Urgency::Moderate => items.push(ADVICE_MODERATE),
        Urgency::Routine => {}
    }

    items.push(ADVICE_CONNECTION);
    items.push(ADVICE_MEDIA);
    items
}

// ── Entry point ────────────────────────────────────────────────────────

/// The recommendation panel's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecommendations {
    pub primary_recommendation: RecommendationCategory,
    /// At most three, in trigger order.
    pub secondary_recommendations: Vec<RecommendationCategory>,
    pub general_advice: Vec<String>,
    pub urgency_level: Urgency,
    pub overall_assessment: String,
    pub analysis: TraitAnalysis,
}

/// Build recommendations for a report. Never fails and never returns an
/// empty recommendation set.
pub fn compute_health_recommendations(report: &PersonalityReport) -> HealthRecommendations {
    let analysis = analyze_traits(&report.traits);
    let urgency = classify_urgency(
        report.mental_health_level,
        report.trait_score(Trait::EmotionalStability),
        &analysis,
    );
    log::debug!(
        "urgency={} (mh={}, stability={}, concerns={})",
        urgency.label(),
        report.mental_health_level,
        report.trait_score(Trait::EmotionalStability),
        analysis.concern_count()
    );

    let ctx = TriggerContext::new(report, urgency);
    let categories = select_categories(&ctx);
    let (primary, rest) = match categories.split_first() {
        Some((first, rest)) => (*first, rest),
        None => (CareCategory::GeneralMentalWellness, &[][..]),
    };
    let secondary = rest
        .iter()
        .take(triggers::MAX_SECONDARY)
        .map(|c| c.recommendation())
        .collect();

    HealthRecommendations {
        primary_recommendation: primary.recommendation(),
        secondary_recommendations: secondary,
        general_advice: general_advice(report, urgency)
            .into_iter()
            .map(String::from)
            .collect(),
        urgency_level: urgency,
        overall_assessment: urgency.overall_assessment().into(),
        analysis,
    }
}
