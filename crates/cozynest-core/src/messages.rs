//! Affirmation pool and self-care tip content.
//!
//! Pure selection over an explicit random source; no process-wide state.

use rand::Rng;

/// Rotating comfort messages shown on the home tab.
pub const AFFIRMATIONS: &[&str] = &[
    "You are allowed to rest without earning it.",
    "This moment is heavy, and it will pass.",
    "Your feelings are real and they make sense.",
    "You have survived every hard day so far.",
    "Small steps still count as moving forward.",
    "You deserve the same kindness you give others.",
    "It's okay to ask for help today.",
    "Breathe - you don't have to fix everything at once.",
    "You are more than your worst day.",
    "Softness is not weakness.",
    "Someone is glad you exist, right now.",
    "You're doing better than you think you are.",
    "Rest is productive too.",
    "Your pace is the right pace.",
    "You can start again as many times as you need.",
    "Warmth, tea, and a blanket are valid medicine.",
    "Today only needs to be lived, not won.",
    "Your body is working hard for you - thank it.",
    "Let the small comforts be enough for now.",
    "You are safe in this moment.",
    "Tomorrow gets a fresh page.",
    "Be gentle with yourself; you're still healing.",
    "Nothing about you needs to be fixed to be loved.",
    "Hold on - comfort is on its way.",
];

/// Pick a random affirmation, never repeating `current` back-to-back.
pub fn pick_affirmation<R: Rng + ?Sized>(rng: &mut R, current: Option<&str>) -> &'static str {
    loop {
        let candidate = AFFIRMATIONS[rng.random_range(0..AFFIRMATIONS.len())];
        if Some(candidate) != current {
            return candidate;
        }
    }
}

/// One titled group of self-care suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipSection {
    pub title: &'static str,
    pub tips: &'static [&'static str],
}

const SECTIONS: &[TipSection] = &[
    TipSection {
        title: "Physical Comfort",
        tips: &[
            "Use a heating pad on your lower abdomen",
            "Take a warm bath with epsom salts",
            "Stay hydrated with plenty of water",
            "Gentle stretching or yoga can help reduce cramps",
            "Wear comfortable, loose clothing",
        ],
    },
    TipSection {
        title: "Nutrition",
        tips: &[
            "Eat iron-rich foods like leafy greens and lean proteins",
            "Include anti-inflammatory foods like berries and omega-3s",
            "Avoid excessive salt, sugar, and caffeine",
            "Herbal teas like ginger, chamomile, or peppermint can help",
            "Dark chocolate (70%+ cocoa) may help improve mood",
        ],
    },
    TipSection {
        title: "Emotional Support",
        tips: &[
            "Practice mindfulness meditation for 5-10 minutes",
            "Journal about your feelings without judgment",
            "Watch a comfort movie or show you love",
            "Connect with understanding friends",
            "Be kind to yourself - your symptoms are real",
        ],
    },
];

/// The fixed self-care tip lists for the home tab.
pub fn self_care_sections() -> &'static [TipSection] {
    SECTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_repeats_back_to_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut current = pick_affirmation(&mut rng, None);
        for _ in 0..500 {
            let next = pick_affirmation(&mut rng, Some(current));
            assert_ne!(next, current);
            current = next;
        }
    }

    #[test]
    fn sections_are_populated() {
        let sections = self_care_sections();
        assert_eq!(sections.len(), 3);
        for section in sections {
            assert!(!section.title.is_empty());
            assert!(!section.tips.is_empty());
        }
    }
}
