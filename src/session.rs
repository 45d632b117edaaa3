use crate::config::{OPTION_SLOTS, QuizConfig, RevisitPolicy};
use crate::logger;
use crate::models::{
    AnswerOutcome, Question, QuizPhase, QuizSession, QuizSummary, RegisteredAnswer, TickOutcome,
};
use rand::Rng;
use rand::seq::SliceRandom;

impl QuizSession {
    /// Builds a session over `questions` in the given order and loads the
    /// first question.
    pub fn new(questions: Vec<Question>, config: QuizConfig) -> Self {
        let outcomes = vec![None; questions.len()];
        let mut session = Self {
            questions,
            current_index: 0,
            score: 0,
            remaining_seconds: config.seconds_per_question,
            phase: QuizPhase::AwaitingAnswer,
            outcomes,
            config,
        };
        session.load_question(0);
        session
    }

    /// Shuffles the questions once, then builds the session.
    pub fn shuffled<R: Rng + ?Sized>(
        mut questions: Vec<Question>,
        config: QuizConfig,
        rng: &mut R,
    ) -> Self {
        questions.shuffle(rng);
        Self::new(questions, config)
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::Finished => None,
            _ => self.questions.get(self.current_index),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    pub fn is_locked(&self) -> bool {
        !matches!(self.phase, QuizPhase::AwaitingAnswer)
    }

    pub fn load_question(&mut self, index: usize) {
        if index >= self.questions.len() {
            self.current_index = self.questions.len();
            self.finish();
            return;
        }

        self.current_index = index;
        match (self.config.revisit_policy, self.outcomes[index]) {
            (RevisitPolicy::LockAnswered, Some(registered)) => {
                self.remaining_seconds = registered.remaining_seconds;
                self.phase = QuizPhase::Reviewing(registered.outcome);
            }
            _ => {
                self.remaining_seconds = self.config.seconds_per_question;
                self.phase = QuizPhase::AwaitingAnswer;
            }
        }
        logger::log(&format!(
            "Loaded question {} / {} ({:?})",
            index + 1,
            self.questions.len(),
            self.phase
        ));
    }

    /// Registers a choice for the current question. Returns `None` when the
    /// question is not accepting answers or `choice` is not an option slot.
    pub fn submit_answer(&mut self, choice: usize) -> Option<AnswerOutcome> {
        if self.phase != QuizPhase::AwaitingAnswer || choice >= OPTION_SLOTS {
            return None;
        }
        let question = self.questions.get(self.current_index)?;

        let correct = question.correct_answer == Some(choice);
        if correct {
            self.score += self.config.points_per_correct;
        }
        let outcome = AnswerOutcome::Selected { choice, correct };
        self.register(outcome);
        logger::log(&format!(
            "Question {}: chose {} ({}), score {}",
            self.current_index + 1,
            choice + 1,
            if correct { "correct" } else { "wrong" },
            self.score
        ));
        Some(outcome)
    }

    pub fn advance(&mut self) {
        if self.is_finished() {
            return;
        }
        self.load_question(self.current_index + 1);
    }

    pub fn retreat(&mut self) {
        if self.is_finished() || self.current_index == 0 {
            return;
        }
        self.load_question(self.current_index - 1);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != QuizPhase::AwaitingAnswer {
            return TickOutcome::Idle;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Counting {
                remaining_seconds: self.remaining_seconds,
            };
        }

        self.register(AnswerOutcome::TimedOut);
        logger::log(&format!("Question {} timed out", self.current_index + 1));
        TickOutcome::TimedOut {
            question_index: self.current_index,
        }
    }

    /// Delayed follow-up of a timeout. Only advances if the player is still
    /// looking at the timed-out question.
    pub fn advance_after_timeout(&mut self, question_index: usize) -> bool {
        let still_timed_out = self.current_index == question_index
            && self.phase == QuizPhase::Answered(AnswerOutcome::TimedOut);
        if still_timed_out {
            self.advance();
        }
        still_timed_out
    }

    pub fn summary(&self) -> QuizSummary {
        let registered = self.outcomes.iter().flatten();
        QuizSummary {
            score: self.score,
            questions_attempted: self.questions.len(),
            correct_answers: registered.clone().filter(|r| r.outcome.is_correct()).count(),
            questions_answered: registered.count(),
        }
    }

    fn register(&mut self, outcome: AnswerOutcome) {
        self.phase = QuizPhase::Answered(outcome);
        if let Some(slot) = self.outcomes.get_mut(self.current_index) {
            *slot = Some(RegisteredAnswer {
                outcome,
                remaining_seconds: self.remaining_seconds,
            });
        }
    }

    fn finish(&mut self) {
        self.phase = QuizPhase::Finished;
        self.remaining_seconds = 0;
        let summary = self.summary();
        logger::log(&format!(
            "Quiz finished: score {}, {} questions, {} correct",
            summary.score, summary.questions_attempted, summary.correct_answers
        ));
    }
}
