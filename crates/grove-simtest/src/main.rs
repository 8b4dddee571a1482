//! Grove Headless Assessment Harness
//!
//! Validates the static tables and the scoring/recommendation pipeline
//! without the game client. Runs entirely in-process with no rendering or
//! persistence.
//!
//! Usage:
//!   cargo run -p grove-simtest
//!   cargo run -p grove-simtest -- --verbose --seed 7 --sweeps 5000
//!   cargo run -p grove-simtest -- --ledger answers.json [--json]

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grove_logic::elements::{Element, Trait};
use grove_logic::indices::WellnessIndex;
use grove_logic::journey::{GamePhase, Journey};
use grove_logic::ledger::AnswerLedger;
use grove_logic::professionals::{Priority, ProfessionalType};
use grove_logic::questions::{self, QUESTIONS};
use grove_logic::recommendations::{
    compute_health_recommendations, CareCategory, HealthRecommendations, Urgency,
};
use grove_logic::report::{compute_personality_report, PersonalityReport};
use grove_logic::scoring::Level;

// ── Configuration ───────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "grove-simtest", about = "Headless validation of Grove's assessment logic")]
struct Args {
    /// Print every check, not just failures.
    #[arg(short, long)]
    verbose: bool,

    /// Seed for the random playthrough sweep.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of random playthroughs to sweep.
    #[arg(long, default_value_t = 2000)]
    sweeps: u32,

    /// Score a saved answer ledger (JSON) instead of running the checks.
    #[arg(long)]
    ledger: Option<PathBuf>,

    /// With --ledger, print the report and recommendations as JSON.
    #[arg(long, requires = "ledger")]
    json: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Some(path) = &args.ledger {
        return score_ledger_file(path, args.json);
    }

    println!("=== Grove Assessment Harness ===\n");

    let mut results = Vec::new();

    // 1. Static questionnaire and lore
    results.extend(validate_questionnaire(args.verbose));

    // 2. Trait scoring boundaries
    results.extend(validate_scoring());

    // 3. Canonical playthroughs
    results.extend(validate_scenarios(args.verbose));

    // 4. Knowledge base and category table
    results.extend(validate_knowledge_base());

    // 5. Seeded random sweep
    results.extend(validate_random_sweep(args.seed, args.sweeps, args.verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

// ── Ledger scoring ──────────────────────────────────────────────────────

fn score_ledger_file(path: &Path, json: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading ledger {}", path.display()))?;
    let ledger: AnswerLedger = serde_json::from_str(&raw)
        .with_context(|| format!("parsing ledger {}", path.display()))?;
    ledger
        .validate()
        .with_context(|| format!("invalid ledger {}", path.display()))?;
    if !ledger.is_complete() {
        log::warn!(
            "ledger has {} of {} answers; unanswered elements score 50",
            ledger.len(),
            QUESTIONS.len()
        );
    }

    let report = compute_personality_report(&ledger);
    let recs = compute_health_recommendations(&report);

    if json {
        let out = serde_json::json!({
            "report": report,
            "recommendations": recs,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_report(&report, &recs);
    }
    Ok(())
}

fn print_report(report: &PersonalityReport, recs: &HealthRecommendations) {
    println!("=== Personality Report ===\n");
    for t in &report.traits {
        println!("  {:20} {:>3}  {:9}  ({:?})", t.kind, t.score, t.level, t.element);
    }
    println!();
    for index in WellnessIndex::ALL {
        println!("  {:24} {:>3}", index.label(), report.indices().get(index));
    }
    println!("\n{}\n", report.summary);
    println!("Strengths:");
    for s in &report.strengths {
        println!("  + {}", s.text);
    }
    println!("Growth areas:");
    for g in &report.growth_areas {
        println!("  - {}", g.text);
    }

    println!("\n=== Recommendations ({}) ===\n", recs.urgency_level.label());
    let primary = &recs.primary_recommendation;
    println!("  {} {} (primary)", primary.icon, primary.label);
    for c in &recs.secondary_recommendations {
        println!("  {} {}", c.icon, c.label);
    }
    println!();
    for (i, item) in recs.general_advice.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
    println!("\n{}", recs.overall_assessment);
}

// ── 1. Questionnaire ────────────────────────────────────────────────────

fn validate_questionnaire(verbose: bool) -> Vec<TestResult> {
    println!("--- Questionnaire & Lore ---");
    let mut results = Vec::new();

    results.push(TestResult {
        name: "questions_total".into(),
        passed: QUESTIONS.len() == 25,
        detail: format!("{} questions loaded", QUESTIONS.len()),
    });

    let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
    results.push(TestResult {
        name: "questions_unique_ids".into(),
        passed: ids.len() == QUESTIONS.len(),
        detail: format!("{} distinct ids", ids.len()),
    });

    for element in Element::ALL {
        let qs = questions::questions_for(element);
        let consistent = qs
            .iter()
            .all(|q| q.element == element && q.measures == element.measured_trait());
        results.push(TestResult {
            name: format!("questions_{}", element.tag()),
            passed: qs.len() == 5 && consistent,
            detail: format!(
                "{} questions measuring {}",
                qs.len(),
                element.measured_trait()
            ),
        });
    }

    let missing_clues: Vec<_> = Element::ALL
        .iter()
        .filter(|e| questions::lore(**e).next_clue.is_none() != e.next().is_none())
        .collect();
    results.push(TestResult {
        name: "lore_next_clues".into(),
        passed: missing_clues.is_empty(),
        detail: if missing_clues.is_empty() {
            "every statue but the last points onward".into()
        } else {
            format!("clue mismatch at {:?}", missing_clues)
        },
    });

    if verbose {
        println!("  Statue order:");
        for element in Element::ALL {
            println!("    {:6} → {}", element.tag(), questions::lore(element).name);
        }
    }

    results
}

// ── 2. Scoring ──────────────────────────────────────────────────────────

fn validate_scoring() -> Vec<TestResult> {
    println!("--- Trait Scoring ---");
    let mut results = Vec::new();

    let boundaries = [
        (19, Level::VeryLow),
        (20, Level::Low),
        (39, Level::Low),
        (40, Level::Moderate),
        (59, Level::Moderate),
        (60, Level::High),
        (79, Level::High),
        (80, Level::VeryHigh),
    ];
    let bad: Vec<_> = boundaries
        .iter()
        .filter(|(s, l)| Level::from_score(*s) != *l)
        .collect();
    results.push(TestResult {
        name: "scoring_level_boundaries".into(),
        passed: bad.is_empty(),
        detail: if bad.is_empty() {
            "20/40/60/80 breakpoints exact".into()
        } else {
            format!("wrong levels at {:?}", bad)
        },
    });

    let agree = compute_personality_report(&AnswerLedger::uniform(5));
    let disagree = compute_personality_report(&AnswerLedger::uniform(1));
    let stability = |r: &PersonalityReport| r.trait_score(Trait::EmotionalStability);
    let openness = |r: &PersonalityReport| r.trait_score(Trait::Openness);
    results.push(TestResult {
        name: "scoring_reverse_stability".into(),
        passed: stability(&agree) == 0 && stability(&disagree) == 100,
        detail: format!(
            "all-5 → {}, all-1 → {}",
            stability(&agree),
            stability(&disagree)
        ),
    });
    results.push(TestResult {
        name: "scoring_forward_openness".into(),
        passed: openness(&agree) == 100 && openness(&disagree) == 0,
        detail: format!(
            "all-5 → {}, all-1 → {}",
            openness(&agree),
            openness(&disagree)
        ),
    });

    let empty = compute_personality_report(&AnswerLedger::new());
    results.push(TestResult {
        name: "scoring_empty_is_neutral".into(),
        passed: empty.traits.iter().all(|t| t.score == 50),
        detail: "unanswered elements score 50".into(),
    });

    results
}

// ── 3. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Canonical Playthroughs ---");
    let mut results = Vec::new();

    // Neutral: every answer 3, driven through the journey state machine.
    let mut journey = Journey::new();
    let walked = play_journey(&mut journey, [3; 5]);
    let neutral = journey.report();
    match (walked, neutral) {
        (Ok(()), Ok(report)) => {
            let recs = compute_health_recommendations(&report);
            let all_fifty = report.traits.iter().all(|t| t.score == 50)
                && WellnessIndex::ALL
                    .iter()
                    .all(|&i| report.indices().get(i) == 50);
            results.push(TestResult {
                name: "scenario_neutral_scores".into(),
                passed: all_fifty,
                detail: "all traits and indices at 50".into(),
            });
            results.push(TestResult {
                name: "scenario_neutral_fallbacks".into(),
                passed: report.strengths.len() == 1
                    && report.growth_areas.len() == 1
                    && report.strengths[0].kind == Trait::Openness
                    && report.growth_areas[0].kind == Trait::Openness,
                detail: "one strength and one growth area, both openness".into(),
            });
            results.push(TestResult {
                name: "scenario_neutral_routine".into(),
                passed: recs.urgency_level == Urgency::Routine,
                detail: format!("urgency {}", recs.urgency_level.label()),
            });
        }
        (walked, neutral) => {
            results.push(TestResult {
                name: "scenario_neutral_journey".into(),
                passed: false,
                detail: format!("journey failed: {:?} / {:?}", walked.err(), neutral.err()),
            });
        }
    }

    // Distressed: low on every forward trait, agreeing with every earth item.
    let distressed = ledger_from([1, 1, 1, 5, 1]);
    let report = compute_personality_report(&distressed);
    let recs = compute_health_recommendations(&report);
    results.push(TestResult {
        name: "scenario_distressed_urgent".into(),
        passed: recs.urgency_level == Urgency::Urgent
            && recs.primary_recommendation.category == CareCategory::ComprehensiveMentalHealthCare
            && recs.secondary_recommendations.len() == 3,
        detail: format!(
            "urgency {} primary '{}' + {} secondary",
            recs.urgency_level.label(),
            recs.primary_recommendation.label,
            recs.secondary_recommendations.len()
        ),
    });

    // Thriving: high everywhere, calm on earth.
    let thriving = ledger_from([5, 5, 5, 1, 5]);
    let report = compute_personality_report(&thriving);
    let recs = compute_health_recommendations(&report);
    results.push(TestResult {
        name: "scenario_thriving_routine".into(),
        passed: recs.urgency_level == Urgency::Routine && recs.analysis.concerns.is_empty(),
        detail: format!(
            "urgency {}, {} strengths",
            recs.urgency_level.label(),
            report.strengths.len()
        ),
    });

    if verbose {
        println!("  Thriving summary: {}", report.summary);
    }

    results
}

fn ledger_from(values: [u8; 5]) -> AnswerLedger {
    let mut ledger = AnswerLedger::new();
    for (element, v) in Element::ALL.into_iter().zip(values) {
        ledger.fill(element, &[v; 5]);
    }
    ledger
}

/// Walk a journey from the intro to the report, answering each statue's
/// questions with one value.
fn play_journey(journey: &mut Journey, values: [u8; 5]) -> anyhow::Result<()> {
    journey.start()?;
    journey.enter_forest()?;
    for (element, v) in Element::ALL.into_iter().zip(values) {
        journey.find_statue(element)?;
        journey.begin_questions()?;
        for _ in 0..questions::questions_for(element).len() {
            journey.answer(v)?;
        }
        journey.complete_statue()?;
        if journey.phase() == GamePhase::ClueReveal {
            journey.continue_from_clue()?;
        }
    }
    Ok(())
}

// ── 4. Knowledge base ───────────────────────────────────────────────────

fn validate_knowledge_base() -> Vec<TestResult> {
    println!("--- Knowledge Base ---");
    let mut results = Vec::new();

    let high: Vec<_> = ProfessionalType::ALL
        .iter()
        .filter(|k| k.profile().priority == Priority::High)
        .collect();
    results.push(TestResult {
        name: "kb_high_priority".into(),
        passed: high.len() == 2,
        detail: format!("high-priority entries: {:?}", high),
    });

    let mut referenced = HashSet::new();
    for category in CareCategory::TRIGGERED
        .into_iter()
        .chain([CareCategory::GeneralMentalWellness])
    {
        let pros = category.professionals();
        referenced.extend(pros);
        results.push(TestResult {
            name: format!("kb_category_{:?}", category),
            passed: pros[0] != pros[1] && !category.reasoning().is_empty(),
            detail: format!("{} → {:?}", category.label(), pros),
        });
    }
    results.push(TestResult {
        name: "kb_all_referenced".into(),
        passed: referenced.len() == ProfessionalType::ALL.len(),
        detail: format!(
            "{} of {} professionals used by some category",
            referenced.len(),
            ProfessionalType::ALL.len()
        ),
    });

    results
}

// ── 5. Random sweep ─────────────────────────────────────────────────────

fn validate_random_sweep(seed: u64, sweeps: u32, verbose: bool) -> Vec<TestResult> {
    println!("--- Random Playthrough Sweep ({} runs, seed {}) ---", sweeps, seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut out_of_range = 0u32;
    let mut empty_lists = 0u32;
    let mut nondeterministic = 0u32;
    let mut over_cap = 0u32;
    let mut urgent_misrouted = 0u32;
    let mut tiers = [0u32; 3];

    for _ in 0..sweeps {
        let mut ledger = AnswerLedger::new();
        for element in Element::ALL {
            let values: Vec<u8> = (0..5).map(|_| rng.gen_range(1..=5)).collect();
            ledger.fill(element, &values);
        }

        let report = compute_personality_report(&ledger);
        let recs = compute_health_recommendations(&report);

        let in_range = |v: i32| (0..=100).contains(&v);
        if !report.traits.iter().all(|t| in_range(t.score))
            || !WellnessIndex::ALL
                .iter()
                .all(|&i| in_range(report.indices().get(i)))
        {
            out_of_range += 1;
        }
        if report.strengths.is_empty() || report.growth_areas.is_empty() {
            empty_lists += 1;
        }
        if compute_personality_report(&ledger) != report {
            nondeterministic += 1;
        }
        if recs.secondary_recommendations.len() > 3 {
            over_cap += 1;
        }
        if recs.urgency_level == Urgency::Urgent
            && recs.primary_recommendation.category != CareCategory::ComprehensiveMentalHealthCare
        {
            urgent_misrouted += 1;
        }
        tiers[recs.urgency_level as usize] += 1;
    }

    if verbose {
        println!(
            "  Urgency distribution: routine={} moderate={} urgent={}",
            tiers[0], tiers[1], tiers[2]
        );
    }

    vec![
        TestResult {
            name: "sweep_range".into(),
            passed: out_of_range == 0,
            detail: format!("{} runs outside 0–100", out_of_range),
        },
        TestResult {
            name: "sweep_non_empty_insights".into(),
            passed: empty_lists == 0,
            detail: format!("{} runs with an empty strength/growth list", empty_lists),
        },
        TestResult {
            name: "sweep_deterministic".into(),
            passed: nondeterministic == 0,
            detail: format!("{} runs scored differently twice", nondeterministic),
        },
        TestResult {
            name: "sweep_secondary_cap".into(),
            passed: over_cap == 0,
            detail: format!("{} runs over three secondary categories", over_cap),
        },
        TestResult {
            name: "sweep_urgent_primary".into(),
            passed: urgent_misrouted == 0,
            detail: format!("{} urgent runs without comprehensive care first", urgent_misrouted),
        },
    ]
}
