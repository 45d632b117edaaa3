use std::time::Duration;

pub const DEFAULT_TITLE: &str = "Quiz";
pub const QUESTIONS_FILE: &str = "questions.json";
pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 180;
pub const DEFAULT_POINTS_PER_CORRECT: u32 = 100;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_TIMEOUT_ADVANCE_DELAY: Duration = Duration::from_millis(1200);

/// Number of option slots shown for every question.
pub const OPTION_SLOTS: usize = 4;

/// What happens when the player navigates back to a question that already
/// has an answer (or a timeout) registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisitPolicy {
    /// The question stays answered: options disabled, no second scoring.
    #[default]
    LockAnswered,
    /// The question is reset and can be answered (and scored) again.
    Rescore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    pub title: String,
    pub questions_file: String,
    pub seconds_per_question: u32,
    pub points_per_correct: u32,
    pub tick_interval: Duration,
    pub timeout_advance_delay: Duration,
    pub revisit_policy: RevisitPolicy,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            questions_file: QUESTIONS_FILE.to_string(),
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            points_per_correct: DEFAULT_POINTS_PER_CORRECT,
            tick_interval: DEFAULT_TICK_INTERVAL,
            timeout_advance_delay: DEFAULT_TIMEOUT_ADVANCE_DELAY,
            revisit_policy: RevisitPolicy::default(),
        }
    }
}
