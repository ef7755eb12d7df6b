//! Practice session state: prompt rotation, answer checking, scoring

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::prompts::{random_prompt, Difficulty};

/// Points awarded per correctly signed prompt.
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    /// Prompts per session.
    pub total_prompts: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            total_prompts: 10,
        }
    }
}

/// Outcome of one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Answer matched; points were awarded and the session advanced.
    Correct { points: u32 },
    /// Answer did not match; the prompt stays up for another attempt.
    Incorrect,
    /// The session had already finished.
    Finished,
}

/// One run of fingerspelling practice. Prompts are drawn with the supplied
/// RNG so sessions can be replayed deterministically in tests.
#[derive(Debug)]
pub struct QuizSession {
    config: SessionConfig,
    prompt: String,
    completed: u32,
    score: u32,
}

impl QuizSession {
    pub fn new<R: Rng + ?Sized>(config: SessionConfig, rng: &mut R) -> Self {
        let prompt = random_prompt(config.difficulty, rng);
        info!(difficulty = ?config.difficulty, total = config.total_prompts, "session started");
        Self {
            config,
            prompt,
            completed: 0,
            score: 0,
        }
    }

    /// The word the user should currently be signing.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn is_finished(&self) -> bool {
        self.completed >= self.config.total_prompts
    }

    /// Checks the signed word against the current prompt. Case-insensitive,
    /// surrounding whitespace ignored.
    pub fn submit<R: Rng + ?Sized>(&mut self, signed: &str, rng: &mut R) -> Verdict {
        if self.is_finished() {
            return Verdict::Finished;
        }
        if answers_match(&self.prompt, signed) {
            self.score += POINTS_PER_CORRECT;
            info!(prompt = %self.prompt, score = self.score, "correct answer");
            self.advance(rng);
            Verdict::Correct {
                points: POINTS_PER_CORRECT,
            }
        } else {
            debug!(prompt = %self.prompt, signed, "incorrect answer");
            Verdict::Incorrect
        }
    }

    /// Gives up on the current prompt and moves on without points.
    pub fn skip<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.is_finished() {
            debug!(prompt = %self.prompt, "prompt skipped");
            self.advance(rng);
        }
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.completed += 1;
        if !self.is_finished() {
            self.prompt = random_prompt(self.config.difficulty, rng);
        }
    }
}

/// Whether a signed word answers the prompt.
pub fn answers_match(prompt: &str, signed: &str) -> bool {
    prompt.trim().eq_ignore_ascii_case(signed.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(total: u32) -> (QuizSession, StdRng) {
        let mut rng = StdRng::seed_from_u64(42);
        let s = QuizSession::new(
            SessionConfig {
                difficulty: Difficulty::Easy,
                total_prompts: total,
            },
            &mut rng,
        );
        (s, rng)
    }

    #[test]
    fn answers_match_ignores_case_and_whitespace() {
        assert!(answers_match("cat", " CAT "));
        assert!(answers_match("A", "a"));
        assert!(!answers_match("cat", "bat"));
        assert!(!answers_match("cat", ""));
    }

    #[test]
    fn correct_answer_scores_and_advances() {
        let (mut s, mut rng) = session(3);
        let prompt = s.prompt().to_string();
        assert_eq!(
            s.submit(&prompt, &mut rng),
            Verdict::Correct {
                points: POINTS_PER_CORRECT
            }
        );
        assert_eq!(s.score(), 10);
        assert_eq!(s.completed(), 1);
    }

    #[test]
    fn incorrect_answer_keeps_the_prompt() {
        let (mut s, mut rng) = session(3);
        let prompt = s.prompt().to_string();
        assert_eq!(s.submit("definitely wrong", &mut rng), Verdict::Incorrect);
        assert_eq!(s.prompt(), prompt);
        assert_eq!(s.score(), 0);
        assert_eq!(s.completed(), 0);
    }

    #[test]
    fn skip_advances_without_points() {
        let (mut s, mut rng) = session(2);
        s.skip(&mut rng);
        assert_eq!(s.completed(), 1);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn session_finishes_after_total_prompts() {
        let (mut s, mut rng) = session(2);
        let p1 = s.prompt().to_string();
        s.submit(&p1, &mut rng);
        let p2 = s.prompt().to_string();
        s.submit(&p2, &mut rng);
        assert!(s.is_finished());
        assert_eq!(s.score(), 20);
        assert_eq!(s.submit("anything", &mut rng), Verdict::Finished);
    }
}
