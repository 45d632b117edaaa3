use crate::config::QuizConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    /// Index of the right option. `None` when the record carried an answer
    /// that can never match a choice (negative, fractional, non-numeric).
    pub correct_answer: Option<usize>,
}

impl Question {
    pub fn new(text: &str, options: &[&str], correct_answer: usize) -> Self {
        Self {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: Some(correct_answer),
        }
    }

    /// Label for an option slot; slots past the end of `options` are blank.
    pub fn option_label(&self, slot: usize) -> &str {
        self.options.get(slot).map(String::as_str).unwrap_or("")
    }
}

/// What was registered for a question once it left `AwaitingAnswer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Selected { choice: usize, correct: bool },
    TimedOut,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Selected { correct: true, .. })
    }

    pub fn choice(&self) -> Option<usize> {
        match self {
            AnswerOutcome::Selected { choice, .. } => Some(*choice),
            AnswerOutcome::TimedOut => None,
        }
    }
}

/// An outcome together with the countdown value it froze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredAnswer {
    pub outcome: AnswerOutcome,
    pub remaining_seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingAnswer,
    Answered(AnswerOutcome),
    /// A locked question the player navigated back to. Nothing is pending.
    Reviewing(AnswerOutcome),
    Finished,
}

impl QuizPhase {
    pub fn outcome(&self) -> Option<AnswerOutcome> {
        match self {
            QuizPhase::Answered(outcome) | QuizPhase::Reviewing(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not counting down (answered or finished).
    Idle,
    Counting { remaining_seconds: u32 },
    /// The countdown just hit zero; the caller owes a delayed advance.
    TimedOut { question_index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: u32,
    pub questions_attempted: usize,
    pub correct_answers: usize,
    pub questions_answered: usize,
}

#[derive(Debug)]
pub struct QuizSession {
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: u32,
    pub remaining_seconds: u32,
    pub phase: QuizPhase,
    /// One slot per question, filled when it is answered or times out.
    pub outcomes: Vec<Option<RegisteredAnswer>>,
    pub config: QuizConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    QuizQuitConfirm,
    Summary,
}
