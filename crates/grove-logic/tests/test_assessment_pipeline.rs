//! Integration tests for the full assessment pipeline.
//!
//! Exercises: AnswerLedger → PersonalityReport → HealthRecommendations
//!
//! All tests are pure logic with no rendering and no client.

use grove_logic::elements::{Element, Trait};
use grove_logic::journey::{GamePhase, Journey};
use grove_logic::ledger::AnswerLedger;
use grove_logic::recommendations::{
    compute_health_recommendations, CareCategory, HealthRecommendations, Urgency,
    ADVICE_ACTIVITY, ADVICE_CONFIDENCE, ADVICE_CONNECTION, ADVICE_EMOTIONS, ADVICE_MEDIA,
    ADVICE_MODERATE, ADVICE_SLEEP, ADVICE_STRESS, ADVICE_URGENT,
};
use grove_logic::report::{compute_personality_report, PersonalityReport};
use grove_logic::scoring::Level;

// ── Helpers ────────────────────────────────────────────────────────────

/// Ledger with one uniform answer value per element, in element order.
fn ledger(values: [u8; 5]) -> AnswerLedger {
    let mut ledger = AnswerLedger::new();
    for (element, v) in Element::ALL.into_iter().zip(values) {
        ledger.fill(element, &[v; 5]);
    }
    ledger
}

fn run(values: [u8; 5]) -> PersonalityReport {
    compute_personality_report(&ledger(values))
}

fn scores(report: &PersonalityReport) -> Vec<i32> {
    report.traits.iter().map(|t| t.score).collect()
}

// ── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn neutral_playthrough_end_to_end() {
    let report = run([3; 5]);

    assert_eq!(scores(&report), vec![50; 5]);
    assert_eq!(report.mental_health_level, 50);
    assert_eq!(report.confidence_level, 50);
    assert_eq!(report.stress_resilience, 50);
    assert_eq!(report.emotional_intelligence, 50);

    assert_eq!(report.strengths.len(), 1);
    assert_eq!(report.growth_areas.len(), 1);
    assert_eq!(report.strengths[0].kind, Trait::Openness);
    assert_eq!(report.growth_areas[0].kind, Trait::Openness);

    let recs = compute_health_recommendations(&report);
    assert_eq!(recs.urgency_level, Urgency::Routine);
    assert_eq!(
        recs.general_advice,
        vec![ADVICE_SLEEP, ADVICE_ACTIVITY, ADVICE_CONNECTION, ADVICE_MEDIA]
    );
}

#[test]
fn deterministic_output() {
    let l = ledger([4, 2, 5, 3, 1]);
    let a = compute_personality_report(&l);
    let b = compute_personality_report(&l);
    assert_eq!(a, b);
    assert_eq!(
        compute_health_recommendations(&a),
        compute_health_recommendations(&b)
    );
}

#[test]
fn reverse_scoring_on_earth_only() {
    let high = run([5; 5]);
    let low = run([1; 5]);
    for (h, l) in high.traits.iter().zip(&low.traits) {
        if h.kind == Trait::EmotionalStability {
            assert_eq!((h.score, l.score), (0, 100));
        } else {
            assert_eq!((h.score, l.score), (100, 0));
        }
    }
}

#[test]
fn distressed_profile_is_urgent() {
    // Withdrawn, guarded, highly anxious, disorganized.
    let report = run([2, 1, 1, 5, 1]);
    assert_eq!(scores(&report), vec![25, 0, 0, 0, 0]);
    // 2.5 → 3 (half rounds up)
    assert_eq!(report.mental_health_level, 3);
    assert_eq!(report.trait_score(Trait::EmotionalStability), 0);
    assert!(report.summary.contains("may benefit from focusing on emotional well-being"));

    let recs = compute_health_recommendations(&report);
    assert_eq!(recs.urgency_level, Urgency::Urgent);
    assert_eq!(recs.analysis.concerns.len(), 5);
    assert_eq!(
        recs.primary_recommendation.category,
        CareCategory::ComprehensiveMentalHealthCare
    );
    assert_eq!(recs.secondary_recommendations.len(), 3);
    assert_eq!(
        recs.general_advice,
        vec![
            ADVICE_SLEEP,
            ADVICE_ACTIVITY,
            ADVICE_EMOTIONS,
            ADVICE_STRESS,
            ADVICE_CONFIDENCE,
            ADVICE_URGENT,
            ADVICE_CONNECTION,
            ADVICE_MEDIA,
        ]
    );
}

#[test]
fn thriving_profile_is_routine() {
    // Curious, social, warm, calm, organized.
    let report = run([5, 5, 5, 1, 5]);
    assert!(report.traits.iter().all(|t| t.level == Level::VeryHigh));
    assert_eq!(report.strengths.len(), 5);
    // No trait ≤ 30 → lowest (first on tie) fills growth.
    assert_eq!(report.growth_areas.len(), 1);
    assert_eq!(report.growth_areas[0].kind, Trait::Openness);
    assert!(report.summary.ends_with("shines in openness and extraversion."));

    let recs = compute_health_recommendations(&report);
    assert_eq!(recs.urgency_level, Urgency::Routine);
    assert!(recs.analysis.concerns.is_empty());
    assert_eq!(recs.analysis.strengths.len(), 5);
    assert_eq!(
        recs.primary_recommendation.category,
        CareCategory::CreativeHolisticApproaches
    );
    assert_eq!(
        recs.secondary_recommendations
            .iter()
            .map(|r| r.category)
            .collect::<Vec<_>>(),
        vec![CareCategory::GeneralMentalWellness]
    );
}

#[test]
fn three_low_traits_make_moderate() {
    // Openness, extraversion, conscientiousness at 0; agreeableness and
    // stability high enough to keep mental health ≥ 50 and stability ≥ 40.
    let report = run([1, 1, 5, 1, 1]);
    assert_eq!(scores(&report), vec![0, 0, 100, 100, 0]);
    assert_eq!(report.mental_health_level, 60);

    let recs = compute_health_recommendations(&report);
    assert_eq!(recs.analysis.concerns.len(), 3);
    assert_eq!(recs.urgency_level, Urgency::Moderate);
    assert!(recs.general_advice.iter().any(|a| a == ADVICE_MODERATE));
    assert!(!recs.general_advice.iter().any(|a| a == ADVICE_URGENT));
}

#[test]
fn partial_playthrough_scores_missing_elements_neutral() {
    let mut l = AnswerLedger::new();
    l.fill(Element::Water, &[5; 5]);
    l.fill(Element::Fire, &[4, 4]);
    let report = compute_personality_report(&l);
    assert_eq!(scores(&report), vec![100, 75, 50, 50, 50]);
}

#[test]
fn journey_snapshot_matches_direct_ledger() {
    let values = [4u8, 2, 5, 2, 3];
    let mut j = Journey::new();
    j.start().unwrap();
    j.enter_forest().unwrap();
    for (element, v) in Element::ALL.into_iter().zip(values) {
        j.find_statue(element).unwrap();
        j.begin_questions().unwrap();
        for _ in 0..5 {
            j.answer(v).unwrap();
        }
        j.complete_statue().unwrap();
        if j.phase() == GamePhase::ClueReveal {
            j.continue_from_clue().unwrap();
        }
    }
    assert_eq!(j.report().unwrap(), run(values));
}

#[test]
fn ledger_json_round_trip_scores_identically() {
    let l = ledger([2, 3, 4, 5, 1]);
    let json = serde_json::to_string(&l).unwrap();
    let back: AnswerLedger = serde_json::from_str(&json).unwrap();
    back.validate().unwrap();
    assert_eq!(compute_personality_report(&back), compute_personality_report(&l));
}

#[test]
fn recommendations_json_round_trip() {
    let recs = compute_health_recommendations(&run([2, 1, 1, 5, 1]));
    let json = serde_json::to_string(&recs).unwrap();
    let back: HealthRecommendations = serde_json::from_str(&json).unwrap();
    assert_eq!(back, recs);

    let report = run([4, 2, 5, 3, 1]);
    let json = serde_json::to_string(&report).unwrap();
    let back: PersonalityReport = serde_json::from_str(&json).unwrap();
    assert_eq!(compute_health_recommendations(&back), compute_health_recommendations(&report));
}

#[test]
fn recommendations_serialize() {
    let recs = compute_health_recommendations(&run([2, 1, 1, 5, 1]));
    let json = serde_json::to_value(&recs).unwrap();
    assert_eq!(json["urgency_level"], "urgent");
    assert_eq!(
        json["primary_recommendation"]["category"],
        "comprehensive_mental_health_care"
    );
    assert_eq!(
        json["primary_recommendation"]["professionals"][0]["type"],
        "psychiatrist"
    );
}
