pub mod prompts;
pub mod session;

pub use prompts::{random_prompt, Difficulty};
pub use session::{QuizSession, SessionConfig, Verdict};
