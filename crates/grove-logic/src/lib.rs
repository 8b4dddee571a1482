//! Pure assessment logic for Grove.
//!
//! This crate contains the scoring and recommendation pipeline behind the
//! grove's five elemental statues, independent of any renderer, UI, or
//! storage. Functions take plain data and return new values, making them
//! unit-testable and usable from the game client and the native simtest
//! alike.
//!
//! ```
//! use grove_logic::ledger::AnswerLedger;
//! use grove_logic::recommendations::{compute_health_recommendations, Urgency};
//! use grove_logic::report::compute_personality_report;
//!
//! let report = compute_personality_report(&AnswerLedger::uniform(3));
//! assert!(report.traits.iter().all(|t| t.score == 50));
//!
//! let recs = compute_health_recommendations(&report);
//! assert_eq!(recs.urgency_level, Urgency::Routine);
//! ```
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Likert bounds, level breakpoints, classification thresholds |
//! | [`elements`] | The five elements and the OCEAN trait each one measures |
//! | [`indices`] | Mental health, confidence, stress resilience, emotional intelligence |
//! | [`insights`] | Strength / growth-area selection with non-empty fallback |
//! | [`journey`] | Player progress state machine (phases, statue order) |
//! | [`ledger`] | Per-element answer accumulation and validation |
//! | [`professionals`] | Closed professional-care knowledge base |
//! | [`questions`] | Static questionnaire and statue lore |
//! | [`recommendations`] | Urgency, care categories, general advice |
//! | [`report`] | `compute_personality_report` entry point |
//! | [`scoring`] | Per-trait 0–100 scoring and levels |
//! | [`summary`] | Narrative summary paragraph |

pub mod constants;
pub mod elements;
pub mod indices;
pub mod insights;
pub mod journey;
pub mod ledger;
pub mod professionals;
pub mod questions;
pub mod recommendations;
pub mod report;
pub mod scoring;
pub mod summary;
