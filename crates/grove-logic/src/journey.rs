//! Player progress through the grove: an explicit state machine.
//!
//! The client owns one [`Journey`] and drives it with discrete player
//! actions; each transition either applies fully or returns a
//! [`JourneyError`] and leaves the state untouched. Scoring never reads
//! the journey directly: it receives [`Journey::ledger`] as a snapshot.
//!
//! ```text
//! Intro → PlayerInfo → Exploring → Statue → Questions ─┬→ ClueReveal → Exploring …
//!                                                      └→ Report (after the fifth statue)
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::questionnaire::ELEMENT_COUNT;
use crate::elements::Element;
use crate::ledger::{AnswerLedger, LedgerError};
use crate::questions::{questions_for, Question};
use crate::report::{compute_personality_report, PersonalityReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Intro,
    PlayerInfo,
    Exploring,
    Statue,
    Questions,
    ClueReveal,
    Report,
}

/// Optional details the player enters before exploring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub age: u32,
    pub institution: String,
}

/// Per-statue flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatueProgress {
    pub found: bool,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JourneyError {
    #[error("cannot {action} during the {phase:?} phase")]
    WrongPhase {
        action: &'static str,
        phase: GamePhase,
    },

    #[error("found the {found:?} statue but the {expected:?} statue is next")]
    WrongStatue { expected: Element, found: Element },

    #[error("the {0:?} statue still has unanswered questions")]
    StatueIncomplete(Element),

    #[error("saved journey points at statue {0}, past the last statue")]
    StatueOutOfRange(usize),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Full progress state for one playthrough.
///
/// Deserializing checks the statue index and the ledger, so a restored
/// journey upholds the same invariants as one built through transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedJourney")]
pub struct Journey {
    phase: GamePhase,
    /// Index into [`Element::ALL`] of the statue being sought or answered.
    current_statue: usize,
    current_question: usize,
    statues: [StatueProgress; 5],
    ledger: AnswerLedger,
    player: Option<PlayerInfo>,
}

/// Unchecked wire form of [`Journey`].
#[derive(Deserialize)]
struct SavedJourney {
    phase: GamePhase,
    current_statue: usize,
    current_question: usize,
    statues: [StatueProgress; 5],
    ledger: AnswerLedger,
    player: Option<PlayerInfo>,
}

impl TryFrom<SavedJourney> for Journey {
    type Error = JourneyError;

    fn try_from(saved: SavedJourney) -> Result<Self, Self::Error> {
        if saved.current_statue >= ELEMENT_COUNT {
            return Err(JourneyError::StatueOutOfRange(saved.current_statue));
        }
        saved.ledger.validate()?;
        Ok(Self {
            phase: saved.phase,
            current_statue: saved.current_statue,
            current_question: saved.current_question,
            statues: saved.statues,
            ledger: saved.ledger,
            player: saved.player,
        })
    }
}

impl Default for Journey {
    fn default() -> Self {
        Self::new()
    }
}

impl Journey {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Intro,
            current_statue: 0,
            current_question: 0,
            statues: [StatueProgress::default(); 5],
            ledger: AnswerLedger::new(),
            player: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The statue the player is currently seeking or answering.
    pub fn current_element(&self) -> Element {
        Element::ALL[self.current_statue]
    }

    pub fn statue(&self, element: Element) -> StatueProgress {
        self.statues[element.index()]
    }

    pub fn player(&self) -> Option<&PlayerInfo> {
        self.player.as_ref()
    }

    /// Immutable snapshot handed to the scoring pipeline.
    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    /// The question awaiting an answer, if in the question phase.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.phase != GamePhase::Questions {
            return None;
        }
        questions_for(self.current_element()).get(self.current_question)
    }

    fn expect_phase(&self, phase: GamePhase, action: &'static str) -> Result<(), JourneyError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(JourneyError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    pub fn start(&mut self) -> Result<(), JourneyError> {
        self.expect_phase(GamePhase::Intro, "start")?;
        self.phase = GamePhase::PlayerInfo;
        Ok(())
    }

    pub fn set_player_info(&mut self, info: PlayerInfo) -> Result<(), JourneyError> {
        self.expect_phase(GamePhase::PlayerInfo, "set player info")?;
        self.player = Some(info);
        Ok(())
    }

    pub fn enter_forest(&mut self) -> Result<(), JourneyError> {
        self.expect_phase(GamePhase::PlayerInfo, "enter the forest")?;
        self.phase = GamePhase::Exploring;
        Ok(())
    }

    /// Statues must be found in [`Element::ALL`] order.
    pub fn find_statue(&mut self, element: Element) -> Result<(), JourneyError> {
        self.expect_phase(GamePhase::Exploring, "find a statue")?;
        let expected = self.current_element();
        if element != expected {
            return Err(JourneyError::WrongStatue {
                expected,
                found: element,
            });
        }
        self.statues[self.current_statue].found = true;
        self.phase = GamePhase::Statue;
        Ok(())
    }

    pub fn begin_questions(&mut self) -> Result<(), JourneyError> {
        self.expect_phase(GamePhase::Statue, "begin questions")?;
        self.current_question = 0;
        self.phase = GamePhase::Questions;
        Ok(())
    }

    /// Answer the current question and advance to the next one.
    /// Returns `true` once every question at this statue is answered.
    pub fn answer(&mut self, value: u8) -> Result<bool, JourneyError> {
        self.expect_phase(GamePhase::Questions, "answer")?;
        let element = self.current_element();
        let question = questions_for(element)
            .get(self.current_question)
            .ok_or(LedgerError::ElementComplete(element))?;
        self.ledger.record(question.id, value)?;

        let last = questions_for(element).len() - 1;
        if self.current_question < last {
            self.current_question += 1;
        }
        Ok(self.ledger.is_element_complete(element))
    }

    /// Close out the current statue: on to the next clue, or the report
    /// after the last statue.
    pub fn complete_statue(&mut self) -> Result<(), JourneyError> {
        self.expect_phase(GamePhase::Questions, "complete a statue")?;
        let element = self.current_element();
        if !self.ledger.is_element_complete(element) {
            return Err(JourneyError::StatueIncomplete(element));
        }
        self.statues[self.current_statue].completed = true;
        self.current_question = 0;
        self.phase = if element.next().is_some() {
            GamePhase::ClueReveal
        } else {
            GamePhase::Report
        };
        log::debug!("completed {:?} statue, phase now {:?}", element, self.phase);
        Ok(())
    }

    pub fn continue_from_clue(&mut self) -> Result<(), JourneyError> {
        self.expect_phase(GamePhase::ClueReveal, "continue from a clue")?;
        self.current_statue += 1;
        self.phase = GamePhase::Exploring;
        Ok(())
    }

    /// Score the playthrough. Only available once every statue is complete.
    pub fn report(&self) -> Result<PersonalityReport, JourneyError> {
        self.expect_phase(GamePhase::Report, "view the report")?;
        Ok(compute_personality_report(&self.ledger))
    }

    /// Back to the intro with nothing recorded.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explore() -> Journey {
        let mut j = Journey::new();
        j.start().unwrap();
        j.set_player_info(PlayerInfo {
            name: "Sam".into(),
            age: 21,
            institution: "Grove College".into(),
        })
        .unwrap();
        j.enter_forest().unwrap();
        j
    }

    fn answer_statue(j: &mut Journey, values: [u8; 5]) {
        let element = j.current_element();
        j.find_statue(element).unwrap();
        j.begin_questions().unwrap();
        for (i, v) in values.into_iter().enumerate() {
            let done = j.answer(v).unwrap();
            assert_eq!(done, i == 4);
        }
        j.complete_statue().unwrap();
    }

    #[test]
    fn test_full_playthrough_reaches_report() {
        let mut j = explore();
        for (i, element) in Element::ALL.into_iter().enumerate() {
            assert_eq!(j.current_element(), element);
            answer_statue(&mut j, [3; 5]);
            if i < 4 {
                assert_eq!(j.phase(), GamePhase::ClueReveal);
                j.continue_from_clue().unwrap();
            }
        }
        assert_eq!(j.phase(), GamePhase::Report);
        assert!(j.ledger().is_complete());
        assert!(Element::ALL.iter().all(|&e| j.statue(e).completed));
        let report = j.report().unwrap();
        assert!(report.traits.iter().all(|t| t.score == 50));
    }

    #[test]
    fn test_wrong_statue_rejected() {
        let mut j = explore();
        assert_eq!(
            j.find_statue(Element::Fire),
            Err(JourneyError::WrongStatue {
                expected: Element::Water,
                found: Element::Fire,
            })
        );
        assert_eq!(j.phase(), GamePhase::Exploring);
        assert!(!j.statue(Element::Fire).found);
    }

    #[test]
    fn test_answer_outside_questions_phase() {
        let mut j = explore();
        assert!(matches!(j.answer(3), Err(JourneyError::WrongPhase { .. })));
        assert!(j.ledger().is_empty());
    }

    #[test]
    fn test_invalid_answer_does_not_advance() {
        let mut j = explore();
        j.find_statue(Element::Water).unwrap();
        j.begin_questions().unwrap();
        assert_eq!(j.current_question().map(|q| q.id), Some("water_1"));
        assert!(matches!(j.answer(7), Err(JourneyError::Ledger(_))));
        assert_eq!(j.current_question().map(|q| q.id), Some("water_1"));
        j.answer(4).unwrap();
        assert_eq!(j.current_question().map(|q| q.id), Some("water_2"));
    }

    #[test]
    fn test_cannot_complete_early() {
        let mut j = explore();
        j.find_statue(Element::Water).unwrap();
        j.begin_questions().unwrap();
        j.answer(2).unwrap();
        assert_eq!(
            j.complete_statue(),
            Err(JourneyError::StatueIncomplete(Element::Water))
        );
    }

    #[test]
    fn test_sixth_answer_rejected() {
        let mut j = explore();
        j.find_statue(Element::Water).unwrap();
        j.begin_questions().unwrap();
        for _ in 0..5 {
            j.answer(5).unwrap();
        }
        assert!(matches!(j.answer(5), Err(JourneyError::Ledger(_))));
        assert_eq!(j.ledger().answers(Element::Water).len(), 5);
    }

    #[test]
    fn test_report_gated_until_end() {
        let mut j = explore();
        answer_statue(&mut j, [4; 5]);
        assert!(matches!(j.report(), Err(JourneyError::WrongPhase { .. })));
    }

    #[test]
    fn test_saved_journey_restores() {
        let mut j = explore();
        answer_statue(&mut j, [2; 5]);
        j.continue_from_clue().unwrap();
        let json = serde_json::to_string(&j).unwrap();
        let restored: Journey = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, j);
        assert_eq!(restored.current_element(), Element::Fire);
    }

    #[test]
    fn test_saved_journey_statue_out_of_range() {
        let mut value = serde_json::to_value(explore()).unwrap();
        value["current_statue"] = serde_json::json!(5);
        let err = serde_json::from_value::<Journey>(value).unwrap_err();
        assert!(err.to_string().contains("statue 5"), "{err}");
    }

    #[test]
    fn test_saved_journey_rejects_invalid_ledger() {
        let mut value = serde_json::to_value(explore()).unwrap();
        value["ledger"] = serde_json::json!({
            "answers": { "water": [{ "question_id": "water_1", "value": 9 }] }
        });
        assert!(serde_json::from_value::<Journey>(value).is_err());
    }

    #[test]
    fn test_reset() {
        let mut j = explore();
        answer_statue(&mut j, [1; 5]);
        j.reset();
        assert_eq!(j, Journey::new());
        assert_eq!(j.phase(), GamePhase::Intro);
        assert!(j.player().is_none());
    }
}
