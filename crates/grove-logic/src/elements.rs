//! Elements and the Big Five traits they measure.
//!
//! Each of the five statues belongs to one element, and each element maps
//! 1:1 onto one OCEAN trait. `Element::ALL` is the canonical iteration
//! order for everything downstream: report trait order, tie-breaking,
//! and the order statues are visited in.

use serde::{Deserialize, Serialize};

/// One of the five statue elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Water,
    Fire,
    Air,
    Earth,
    Ether,
}

impl Element {
    /// All elements in visiting order.
    pub const ALL: [Element; 5] = [
        Element::Water,
        Element::Fire,
        Element::Air,
        Element::Earth,
        Element::Ether,
    ];

    /// The trait this element's questions measure.
    pub fn measured_trait(self) -> Trait {
        match self {
            Element::Water => Trait::Openness,
            Element::Fire => Trait::Extraversion,
            Element::Air => Trait::Agreeableness,
            Element::Earth => Trait::EmotionalStability,
            Element::Ether => Trait::Conscientiousness,
        }
    }

    /// Position in [`Element::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase tag used in question ids (`water_1`, …).
    pub fn tag(self) -> &'static str {
        match self {
            Element::Water => "water",
            Element::Fire => "fire",
            Element::Air => "air",
            Element::Earth => "earth",
            Element::Ether => "ether",
        }
    }

    /// The element after this one in visiting order, if any.
    pub fn next(self) -> Option<Element> {
        Element::ALL.get(self.index() + 1).copied()
    }
}

/// A Big Five trait as reported to the player.
///
/// The earth element asks neuroticism-style questions; answers are
/// reverse-scored so the reported trait is its complement, emotional
/// stability. A high score always means "more of the named trait".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    Openness,
    Extraversion,
    Agreeableness,
    EmotionalStability,
    Conscientiousness,
}

impl Trait {
    /// All traits in element order.
    pub const ALL: [Trait; 5] = [
        Trait::Openness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::EmotionalStability,
        Trait::Conscientiousness,
    ];

    /// The element whose statue measures this trait.
    pub fn element(self) -> Element {
        match self {
            Trait::Openness => Element::Water,
            Trait::Extraversion => Element::Fire,
            Trait::Agreeableness => Element::Air,
            Trait::EmotionalStability => Element::Earth,
            Trait::Conscientiousness => Element::Ether,
        }
    }

    /// Whether answers are inverted (`6 - value`) before averaging.
    pub fn is_reverse_scored(self) -> bool {
        matches!(self, Trait::EmotionalStability)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Trait::Openness => "Openness",
            Trait::Extraversion => "Extraversion",
            Trait::Agreeableness => "Agreeableness",
            Trait::EmotionalStability => "Emotional Stability",
            Trait::Conscientiousness => "Conscientiousness",
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
