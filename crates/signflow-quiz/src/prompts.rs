//! Prompt banks per difficulty level
//!
//! The word banks avoid the letter 'v', whose sign the classifier does not
//! recognize.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Single letters a-z.
    Easy,
    /// Three-letter words.
    Medium,
    /// Five-letter words.
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

const THREE_LETTER_WORDS: &[&str] = &[
    "cat", "dog", "bat", "hat", "run", "fun", "sun", "car", "bar", "jar", "pen", "hen", "fox",
    "box", "cup", "rug", "mug", "bug", "big", "dig",
];

const FIVE_LETTER_WORDS: &[&str] = &[
    "house", "mouse", "apple", "happy", "cloud", "table", "chair", "beach", "earth", "river",
    "mount", "smile", "grape", "melon", "snake", "plane", "ocean", "knife", "honey", "music",
];

/// Draws one prompt for the given difficulty.
pub fn random_prompt<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> String {
    match difficulty {
        Difficulty::Easy => {
            let letter = rng.gen_range(b'a'..=b'z') as char;
            letter.to_string()
        }
        Difficulty::Medium => THREE_LETTER_WORDS
            .choose(rng)
            .expect("bank is non-empty")
            .to_string(),
        Difficulty::Hard => FIVE_LETTER_WORDS
            .choose(rng)
            .expect("bank is non-empty")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn easy_draws_single_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let p = random_prompt(Difficulty::Easy, &mut rng);
            assert_eq!(p.len(), 1);
            assert!(p.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn word_banks_match_length_and_skip_v() {
        for w in THREE_LETTER_WORDS {
            assert_eq!(w.len(), 3);
            assert!(!w.contains('v'));
        }
        for w in FIVE_LETTER_WORDS {
            assert_eq!(w.len(), 5);
            assert!(!w.contains('v'));
        }
    }

    #[test]
    fn medium_and_hard_draw_from_banks() {
        let mut rng = StdRng::seed_from_u64(3);
        let m = random_prompt(Difficulty::Medium, &mut rng);
        assert!(THREE_LETTER_WORDS.contains(&m.as_str()));
        let h = random_prompt(Difficulty::Hard, &mut rng);
        assert!(FIVE_LETTER_WORDS.contains(&h.as_str()));
    }
}
