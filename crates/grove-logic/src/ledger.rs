//! Answer ledger: raw Likert answers accumulated per element.
//!
//! The ledger is the only input to the scoring pipeline. It is built up
//! one answer at a time by [`crate::journey::Journey`] (or deserialized
//! from a saved snapshot) and handed to
//! [`crate::report::compute_personality_report`] by reference.
//!
//! [`AnswerLedger::record`] and [`AnswerLedger::validate`] enforce the
//! caller-side contract: values in 1..=5, known question ids, no
//! duplicates, at most five answers per element. Scoring itself never
//! fails and does not re-check any of this.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::likert;
use crate::constants::questionnaire::QUESTIONS_PER_ELEMENT;
use crate::elements::Element;
use crate::questions::{find_question, questions_for};

/// A single response to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    /// Likert value, 1 (strongly disagree) to 5 (strongly agree).
    pub value: u8,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: u8) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

/// Reasons an answer or ledger snapshot is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("answer {value} to {question_id} is outside the 1-5 scale")]
    ValueOutOfRange { question_id: String, value: u8 },

    #[error("unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("question {0} was already answered")]
    DuplicateAnswer(String),

    #[error("all questions for {0:?} are already answered")]
    ElementComplete(Element),

    #[error("question {question_id} belongs to {actual:?}, not {listed_under:?}")]
    WrongElement {
        question_id: String,
        listed_under: Element,
        actual: Element,
    },
}

/// Per-element answer lists, in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerLedger {
    #[serde(default)]
    answers: BTreeMap<Element, Vec<Answer>>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers recorded for `element` (possibly empty).
    pub fn answers(&self, element: Element) -> &[Answer] {
        self.answers.get(&element).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total answers across all elements.
    pub fn len(&self) -> usize {
        self.answers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every question for `element` has an answer.
    pub fn is_element_complete(&self, element: Element) -> bool {
        self.answers(element).len() >= QUESTIONS_PER_ELEMENT
    }

    /// Whether all five elements are complete.
    pub fn is_complete(&self) -> bool {
        Element::ALL.iter().all(|&e| self.is_element_complete(e))
    }

    /// Validate and append one answer. The element is taken from the
    /// question id. Returns the element the answer was filed under.
    pub fn record(&mut self, question_id: &str, value: u8) -> Result<Element, LedgerError> {
        let question =
            find_question(question_id).ok_or_else(|| LedgerError::UnknownQuestion(question_id.into()))?;
        check_value(question_id, value)?;

        let element = question.element;
        let list = self.answers.entry(element).or_default();
        if list.len() >= QUESTIONS_PER_ELEMENT {
            return Err(LedgerError::ElementComplete(element));
        }
        if list.iter().any(|a| a.question_id == question_id) {
            return Err(LedgerError::DuplicateAnswer(question_id.into()));
        }
        list.push(Answer::new(question_id, value));
        Ok(element)
    }

    /// Check a ledger built elsewhere (e.g. deserialized) against the same
    /// rules [`record`](Self::record) enforces. Reports the first violation.
    pub fn validate(&self) -> Result<(), LedgerError> {
        for (&listed_under, list) in &self.answers {
            if list.len() > QUESTIONS_PER_ELEMENT {
                return Err(LedgerError::ElementComplete(listed_under));
            }
            for (i, answer) in list.iter().enumerate() {
                let question = find_question(&answer.question_id)
                    .ok_or_else(|| LedgerError::UnknownQuestion(answer.question_id.clone()))?;
                if question.element != listed_under {
                    return Err(LedgerError::WrongElement {
                        question_id: answer.question_id.clone(),
                        listed_under,
                        actual: question.element,
                    });
                }
                check_value(&answer.question_id, answer.value)?;
                if list[..i].iter().any(|a| a.question_id == answer.question_id) {
                    return Err(LedgerError::DuplicateAnswer(answer.question_id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Replace `element`'s answers with `values`, assigned to its questions
    /// in asking order. Performs no validation: out-of-range values are
    /// stored as given. Extra values beyond the question count are dropped.
    pub fn fill(&mut self, element: Element, values: &[u8]) -> &mut Self {
        let list = questions_for(element)
            .iter()
            .zip(values)
            .map(|(q, &v)| Answer::new(q.id, v))
            .collect();
        self.answers.insert(element, list);
        self
    }

    /// A complete ledger where every question is answered with `value`.
    pub fn uniform(value: u8) -> Self {
        let mut ledger = Self::new();
        for element in Element::ALL {
            ledger.fill(element, &[value; QUESTIONS_PER_ELEMENT]);
        }
        ledger
    }
}

fn check_value(question_id: &str, value: u8) -> Result<(), LedgerError> {
    if (likert::MIN..=likert::MAX).contains(&value) {
        Ok(())
    } else {
        Err(LedgerError::ValueOutOfRange {
            question_id: question_id.into(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_files_under_question_element() {
        let mut ledger = AnswerLedger::new();
        assert_eq!(ledger.record("fire_2", 4), Ok(Element::Fire));
        assert_eq!(ledger.answers(Element::Fire), &[Answer::new("fire_2", 4)]);
        assert!(ledger.answers(Element::Water).is_empty());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_record_rejects_out_of_range() {
        let mut ledger = AnswerLedger::new();
        assert!(matches!(
            ledger.record("water_1", 0),
            Err(LedgerError::ValueOutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            ledger.record("water_1", 6),
            Err(LedgerError::ValueOutOfRange { value: 6, .. })
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_record_rejects_unknown_and_duplicate() {
        let mut ledger = AnswerLedger::new();
        assert_eq!(
            ledger.record("lava_1", 3),
            Err(LedgerError::UnknownQuestion("lava_1".into()))
        );
        ledger.record("air_1", 3).unwrap();
        assert_eq!(
            ledger.record("air_1", 5),
            Err(LedgerError::DuplicateAnswer("air_1".into()))
        );
        assert_eq!(ledger.answers(Element::Air).len(), 1);
    }

    #[test]
    fn test_element_completion() {
        let mut ledger = AnswerLedger::new();
        for q in questions_for(Element::Earth) {
            assert!(!ledger.is_element_complete(Element::Earth));
            ledger.record(q.id, 2).unwrap();
        }
        assert!(ledger.is_element_complete(Element::Earth));
        assert!(!ledger.is_complete());
        assert!(AnswerLedger::uniform(3).is_complete());
    }

    #[test]
    fn test_validate_accepts_uniform() {
        for v in 1..=5 {
            assert_eq!(AnswerLedger::uniform(v).validate(), Ok(()));
        }
    }

    #[test]
    fn test_validate_flags_unchecked_fill() {
        let mut ledger = AnswerLedger::new();
        ledger.fill(Element::Ether, &[3, 3, 9]);
        assert!(matches!(
            ledger.validate(),
            Err(LedgerError::ValueOutOfRange { value: 9, .. })
        ));
    }

    #[test]
    fn test_validate_flags_misfiled_answer() {
        let json = r#"{"answers":{"water":[{"question_id":"fire_1","value":3}]}}"#;
        let ledger: AnswerLedger = serde_json::from_str(json).unwrap();
        assert_eq!(
            ledger.validate(),
            Err(LedgerError::WrongElement {
                question_id: "fire_1".into(),
                listed_under: Element::Water,
                actual: Element::Fire,
            })
        );
    }

    #[test]
    fn test_deserialize_missing_answers_is_empty() {
        let ledger: AnswerLedger = serde_json::from_str("{}").unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_fill_drops_extra_values() {
        let mut ledger = AnswerLedger::new();
        ledger.fill(Element::Water, &[1, 2, 3, 4, 5, 5, 5]);
        assert_eq!(ledger.answers(Element::Water).len(), QUESTIONS_PER_ELEMENT);
    }
}
