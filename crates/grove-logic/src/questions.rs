//! Static questionnaire and statue lore.
//!
//! Five Likert questions per element, plus the flavor text the client
//! shows while the player searches for and meets each statue. Nothing
//! here is computed; the scoring modules only read [`Question`] ids and
//! the reverse flag.

use serde::Serialize;

use crate::constants::questionnaire::QUESTIONS_PER_ELEMENT;
use crate::elements::Element::{self, Air, Earth, Ether, Fire, Water};
use crate::elements::Trait::{
    self, Agreeableness, Conscientiousness, EmotionalStability, Extraversion, Openness,
};

/// One Likert-scale prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Stable id, `"<element>_<n>"`.
    pub id: &'static str,
    pub text: &'static str,
    pub element: Element,
    #[serde(rename = "trait")]
    pub measures: Trait,
    /// Agreement indicates *less* of the measured trait.
    pub reversed: bool,
}

const fn q(id: &'static str, text: &'static str, element: Element, measures: Trait) -> Question {
    Question {
        id,
        text,
        element,
        measures,
        reversed: matches!(measures, Trait::EmotionalStability),
    }
}

/// Every question, grouped by element in [`Element::ALL`] order.
pub static QUESTIONS: [Question; 25] = [
    // Water → openness
    q(
        "water_1",
        "I often find myself lost in my imagination, creating vivid inner worlds.",
        Water,
        Openness,
    ),
    q(
        "water_2",
        "I am deeply moved by art, music, or natural beauty.",
        Water,
        Openness,
    ),
    q(
        "water_3",
        "I enjoy exploring new ideas and unconventional perspectives.",
        Water,
        Openness,
    ),
    q(
        "water_4",
        "I prefer variety and new experiences over familiar routines.",
        Water,
        Openness,
    ),
    q(
        "water_5",
        "I often question traditional ways of doing things.",
        Water,
        Openness,
    ),
    // Fire → extraversion
    q(
        "fire_1",
        "I feel energized when surrounded by other people.",
        Fire,
        Extraversion,
    ),
    q(
        "fire_2",
        "I often take charge in group situations.",
        Fire,
        Extraversion,
    ),
    q(
        "fire_3",
        "I enjoy being the center of attention.",
        Fire,
        Extraversion,
    ),
    q(
        "fire_4",
        "I start conversations with strangers easily.",
        Fire,
        Extraversion,
    ),
    q(
        "fire_5",
        "I feel excited and enthusiastic most of the time.",
        Fire,
        Extraversion,
    ),
    // Air → agreeableness
    q(
        "air_1",
        "I naturally consider others' feelings before making decisions.",
        Air,
        Agreeableness,
    ),
    q(
        "air_2",
        "I find it easy to forgive others who have wronged me.",
        Air,
        Agreeableness,
    ),
    q(
        "air_3",
        "I prefer cooperation over competition.",
        Air,
        Agreeableness,
    ),
    q(
        "air_4",
        "I trust others easily and give them the benefit of the doubt.",
        Air,
        Agreeableness,
    ),
    q(
        "air_5",
        "I go out of my way to help others, even at personal cost.",
        Air,
        Agreeableness,
    ),
    // Earth → emotional stability (reverse-scored)
    q(
        "earth_1",
        "I often feel overwhelmed by my emotions.",
        Earth,
        EmotionalStability,
    ),
    q(
        "earth_2",
        "I worry about things more than most people.",
        Earth,
        EmotionalStability,
    ),
    q(
        "earth_3",
        "My mood can change quickly and unexpectedly.",
        Earth,
        EmotionalStability,
    ),
    q(
        "earth_4",
        "I often replay past mistakes in my mind.",
        Earth,
        EmotionalStability,
    ),
    q(
        "earth_5",
        "I feel stressed or anxious in uncertain situations.",
        Earth,
        EmotionalStability,
    ),
    // Ether → conscientiousness
    q(
        "ether_1",
        "I always follow through on my commitments.",
        Ether,
        Conscientiousness,
    ),
    q(
        "ether_2",
        "I plan my tasks carefully and stick to schedules.",
        Ether,
        Conscientiousness,
    ),
    q(
        "ether_3",
        "I pay attention to details and strive for accuracy.",
        Ether,
        Conscientiousness,
    ),
    q(
        "ether_4",
        "I set clear goals and work systematically toward them.",
        Ether,
        Conscientiousness,
    ),
    q(
        "ether_5",
        "I prefer order and organization in my life.",
        Ether,
        Conscientiousness,
    ),
];

/// The five questions asked at `element`'s statue, in asking order.
pub fn questions_for(element: Element) -> &'static [Question] {
    let start = element.index() * QUESTIONS_PER_ELEMENT;
    &QUESTIONS[start..start + QUESTIONS_PER_ELEMENT]
}

/// Look up a question by id.
pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

// ── Lore ───────────────────────────────────────────────────────────────

/// Flavor text for one statue.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatueLore {
    pub name: &'static str,
    /// Ambient visual effect around the statue.
    pub effect: &'static str,
    pub sound: &'static str,
    /// Riddle pointing the player toward this statue.
    pub riddle: &'static str,
    /// Shown while the player is close but hasn't found it yet.
    pub approaching: &'static str,
    /// Spoken by the spirit once found.
    pub found: &'static str,
    /// Clue toward the next statue, given after answering. `None` for the last.
    pub next_clue: Option<&'static str>,
}

/// Lore for `element`'s statue.
pub fn lore(element: Element) -> StatueLore {
    match element {
        Element::Water => StatueLore {
            name: "Statue of Water",
            effect: "Cascading waterfalls flow eternally from the ancient stone",
            sound: "The soothing sound of flowing water fills the air",
            riddle: "Every creature in this forest must drink to survive. Follow the trail where animals gather, where roots run deep toward moisture. The source of all life flows somewhere to the east...",
            approaching: "Listen... the sound of flowing water calls to you from the east. Where creatures of the forest drink, the first truth awaits.",
            found: "The Water Spirit speaks: \"I am the river of your imagination. Every creature seeks me to survive. Answer my questions, and I shall reveal the depths of your creative soul.\"",
            next_clue: Some("The Water Spirit whispers: \"You have proven your depth. Now seek the opposite — where the forest burns brightest, where passion ignites the undergrowth. Follow the warmth south, where no water dares to flow...\""),
        },
        Element::Fire => StatueLore {
            name: "Statue of Fire",
            effect: "Brilliant flames dance and flicker with eternal energy",
            sound: "The crackling roar of flames echoes through the trees",
            riddle: "Where there is life, there is warmth. Look for the scorched earth, the place where lightning once struck and left its mark. The creatures here fear it, yet the forest needs it to renew. Seek the glow to the south...",
            approaching: "A warm glow flickers through the ancient trees to the south. Where lightning once scarred the earth, flames of passion beckon...",
            found: "The Fire Spirit speaks: \"I am the flame within your heart. The forest fears me, yet needs me to be reborn. Tell me of your passion, and I shall illuminate your social spirit.\"",
            next_clue: Some("The Fire Spirit roars: \"Your flame burns true! But fire needs air to breathe. Seek the western wind, where the canopy opens and the breeze carries secrets only the gentlest souls can hear...\""),
        },
        Element::Air => StatueLore {
            name: "Statue of Air",
            effect: "Gentle breezes swirl with visible wisps of wind",
            sound: "Soft whispers of wind carry ancient secrets",
            riddle: "The birds know this secret — they ride invisible rivers through the canopy. Where the leaves dance without being touched and the ancient trees whisper, the breath of the forest awaits in the west...",
            approaching: "A gentle breeze carries whispers from the western grove. The leaves dance on their own, and birds ride invisible rivers...",
            found: "The Air Spirit speaks: \"I am the gentle wind of connection. I carry the songs of birds and the whispers of trees. Share your truth, and I shall reveal your capacity for compassion.\"",
            next_clue: Some("The Air Spirit sighs: \"You have felt my breath. Now ground yourself. The north holds something ancient — stone and soil, the weight of emotion buried deep. Where tremors echo beneath the roots, earth speaks...\""),
        },
        Element::Earth => StatueLore {
            name: "Statue of Earth",
            effect: "Ancient stones pulse with deep terrestrial energy, roots intertwine",
            sound: "A deep rumble resonates from the ground beneath",
            riddle: "Beneath your feet lies the oldest element. Where the ground trembles with ancient memory, where roots grip stone and mountains once stood tall. Seek the place where the forest floor remembers in the north...",
            approaching: "The ground beneath you trembles faintly from the north. Ancient roots grip stone where mountains once stood tall...",
            found: "The Earth Spirit speaks: \"I am the foundation beneath all things. I hold the weight of ages and the memory of mountains. Face your inner depths, and I shall show you the landscape of your feelings.\"",
            next_clue: Some("The Earth Spirit rumbles: \"You have touched the foundation. Now look beyond — to the center, where all elements converge. The final truth lies in the infinite space between worlds. Seek the heart of the forest...\""),
        },
        Element::Ether => StatueLore {
            name: "Statue of Ether",
            effect: "Infinite space and cosmic energy radiate outward",
            sound: "A deep cosmic OM resonates through existence",
            riddle: "You have found water, fire, air, and earth. Now seek what connects them all — the space between, the silence within. At the very heart of the forest, where all paths converge, the infinite awaits...",
            approaching: "An otherworldly hum resonates from the heart of the forest. All paths lead here, where the infinite awaits at the sacred center...",
            found: "The Ether Spirit speaks: \"I am the infinite space of purpose, the thread that binds all elements. You have journeyed far. Reveal your discipline, and I shall unlock the final truth of your being.\"",
            next_clue: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_five_questions_per_element() {
        for element in Element::ALL {
            let qs = questions_for(element);
            assert_eq!(qs.len(), QUESTIONS_PER_ELEMENT);
            for q in qs {
                assert_eq!(q.element, element);
                assert_eq!(q.measures, element.measured_trait());
                assert!(q.id.starts_with(element.tag()), "{} not tagged {}", q.id, element.tag());
            }
        }
    }

    #[test]
    fn test_question_ids_unique() {
        let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn test_reverse_flag_only_on_earth() {
        for q in &QUESTIONS {
            assert_eq!(q.reversed, q.element == Element::Earth, "{}", q.id);
        }
    }

    #[test]
    fn test_find_question() {
        assert_eq!(find_question("air_3").map(|q| q.element), Some(Element::Air));
        assert!(find_question("air_6").is_none());
        assert!(find_question("").is_none());
    }

    #[test]
    fn test_only_last_statue_lacks_next_clue() {
        for element in Element::ALL {
            assert_eq!(lore(element).next_clue.is_none(), element.next().is_none());
        }
    }
}
