//! Display-ready snapshots of the quiz session.
//!
//! The drawing code only ever sees these types, never the session itself.

use crate::config::OPTION_SLOTS;
use crate::models::{AnswerOutcome, QuizPhase, QuizSession, QuizSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub enabled: bool,
    pub highlight: Highlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct { points: u32 },
    Wrong { correct_label: String },
    /// `advancing` is false when a timed-out question is only being reviewed.
    TimedOut { advancing: bool },
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Correct { points } => format!("Correct ✅ (+{})", points),
            Feedback::Wrong { correct_label } => format!("Wrong ❌ — Correct: {}", correct_label),
            Feedback::TimedOut { advancing: true } => {
                "Time up — moving to next question".to_string()
            }
            Feedback::TimedOut { advancing: false } => "Time up — no answer given".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub title: String,
    pub question_number: usize,
    pub question_total: usize,
    pub question_text: String,
    pub options: Vec<OptionView>,
    pub time_label: String,
    pub score_label: String,
    pub feedback: Option<Feedback>,
    pub can_go_back: bool,
}

impl QuizView {
    /// `None` once the session is finished.
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let question = session.current_question()?;
        let outcome = session.phase.outcome();

        // Only slots that exist on screen can be highlighted.
        let correct_slot = question.correct_answer.filter(|&i| i < OPTION_SLOTS);

        let options = (0..OPTION_SLOTS)
            .map(|slot| {
                let highlight = match outcome {
                    Some(AnswerOutcome::Selected { choice, correct }) if choice == slot => {
                        if correct {
                            Highlight::Correct
                        } else {
                            Highlight::Wrong
                        }
                    }
                    Some(_) if correct_slot == Some(slot) => Highlight::Correct,
                    _ => Highlight::None,
                };
                OptionView {
                    label: question.option_label(slot).to_string(),
                    enabled: outcome.is_none(),
                    highlight,
                }
            })
            .collect();

        let feedback = outcome.map(|outcome| match outcome {
            AnswerOutcome::Selected { correct: true, .. } => Feedback::Correct {
                points: session.config.points_per_correct,
            },
            AnswerOutcome::Selected { correct: false, .. } => Feedback::Wrong {
                correct_label: correct_slot
                    .map(|slot| question.option_label(slot).to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
            },
            AnswerOutcome::TimedOut => Feedback::TimedOut {
                advancing: matches!(session.phase, QuizPhase::Answered(_)),
            },
        });

        Some(Self {
            title: session.config.title.clone(),
            question_number: session.current_index + 1,
            question_total: session.questions.len(),
            question_text: format!("{}. {}", session.current_index + 1, question.text),
            options,
            time_label: format!("Time: {}", format_mm_ss(session.remaining_seconds)),
            score_label: format!("Score: {}", session.score),
            feedback,
            can_go_back: session.current_index > 0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub title: String,
    pub lines: Vec<String>,
}

impl SummaryView {
    pub fn new(summary: &QuizSummary) -> Self {
        Self {
            title: "Quiz finished".to_string(),
            lines: vec![
                "You have completed the quiz!".to_string(),
                format!("Final score: {}", summary.score),
                format!("Questions attempted: {}", summary.questions_attempted),
                format!(
                    "Correct answers: {} / {}",
                    summary.correct_answers, summary.questions_answered
                ),
            ],
        }
    }
}

pub fn format_mm_ss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::models::Question;

    fn example_session() -> QuizSession {
        QuizSession::new(
            vec![Question::new("Q1", &["A", "B", "C", "D"], 1)],
            QuizConfig::default(),
        )
    }

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(180), "03:00");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(3725), "62:05");
    }

    #[test]
    fn test_fresh_question_view() {
        let view = QuizView::from_session(&example_session()).unwrap();
        assert_eq!(view.question_text, "1. Q1");
        assert_eq!(view.time_label, "Time: 03:00");
        assert_eq!(view.score_label, "Score: 0");
        assert!(view.feedback.is_none());
        assert!(!view.can_go_back);
        assert_eq!(view.options.len(), 4);
        assert!(view.options.iter().all(|o| o.enabled && o.highlight == Highlight::None));
        assert_eq!(view.options[2].label, "C");
    }

    #[test]
    fn test_correct_choice_view() {
        let mut session = example_session();
        session.submit_answer(1);
        let view = QuizView::from_session(&session).unwrap();

        assert_eq!(view.score_label, "Score: 100");
        assert_eq!(view.options[1].highlight, Highlight::Correct);
        assert_eq!(view.options[0].highlight, Highlight::None);
        assert!(view.options.iter().all(|o| !o.enabled));
        assert_eq!(view.feedback.unwrap().message(), "Correct ✅ (+100)");
    }

    #[test]
    fn test_wrong_choice_highlights_both() {
        let mut session = example_session();
        session.submit_answer(0);
        let view = QuizView::from_session(&session).unwrap();

        assert_eq!(view.score_label, "Score: 0");
        assert_eq!(view.options[0].highlight, Highlight::Wrong);
        assert_eq!(view.options[1].highlight, Highlight::Correct);
        assert_eq!(
            view.feedback,
            Some(Feedback::Wrong {
                correct_label: "B".to_string()
            })
        );
        assert_eq!(view.feedback.unwrap().message(), "Wrong ❌ — Correct: B");
    }

    #[test]
    fn test_wrong_choice_with_out_of_range_answer() {
        let question = Question::new("Q", &["A", "B"], 6);
        let mut session = QuizSession::new(vec![question], QuizConfig::default());
        session.submit_answer(0);
        let view = QuizView::from_session(&session).unwrap();

        assert_eq!(view.options[0].highlight, Highlight::Wrong);
        assert!(view.options[1..].iter().all(|o| o.highlight == Highlight::None));
        assert_eq!(view.feedback.unwrap().message(), "Wrong ❌ — Correct: N/A");
    }

    #[test]
    fn test_timeout_view_shows_correct_option() {
        let mut session = example_session();
        session.config.seconds_per_question = 1;
        session.load_question(0);
        session.tick();
        let view = QuizView::from_session(&session).unwrap();

        assert_eq!(view.time_label, "Time: 00:00");
        assert_eq!(view.feedback, Some(Feedback::TimedOut { advancing: true }));
        assert_eq!(view.options[1].highlight, Highlight::Correct);
        assert!(view.options.iter().all(|o| !o.enabled));
    }

    #[test]
    fn test_revisited_timeout_stays_at_zero() {
        let mut session = QuizSession::new(
            vec![
                Question::new("Q1", &["A", "B", "C", "D"], 1),
                Question::new("Q2", &["A", "B", "C", "D"], 0),
            ],
            QuizConfig {
                seconds_per_question: 1,
                ..QuizConfig::default()
            },
        );
        session.tick();
        session.advance();
        session.retreat();
        let view = QuizView::from_session(&session).unwrap();

        assert_eq!(view.time_label, "Time: 00:00");
        assert_eq!(view.feedback, Some(Feedback::TimedOut { advancing: false }));
        assert_eq!(view.feedback.unwrap().message(), "Time up — no answer given");
        assert!(view.options.iter().all(|o| !o.enabled));
    }

    #[test]
    fn test_revisited_answer_keeps_frozen_time() {
        let mut session = QuizSession::new(
            vec![
                Question::new("Q1", &["A", "B", "C", "D"], 1),
                Question::new("Q2", &["A", "B", "C", "D"], 0),
            ],
            QuizConfig::default(),
        );
        for _ in 0..5 {
            session.tick();
        }
        session.submit_answer(1);
        session.advance();
        session.retreat();
        let view = QuizView::from_session(&session).unwrap();

        assert_eq!(view.time_label, "Time: 02:55");
        assert_eq!(view.score_label, "Score: 100");
        assert_eq!(view.options[1].highlight, Highlight::Correct);
        assert_eq!(view.feedback.unwrap().message(), "Correct ✅ (+100)");
    }

    #[test]
    fn test_missing_options_render_blank() {
        let question = Question {
            text: "bare".to_string(),
            options: vec!["only".to_string()],
            correct_answer: Some(0),
        };
        let session = QuizSession::new(vec![question], QuizConfig::default());
        let view = QuizView::from_session(&session).unwrap();
        assert_eq!(view.options[0].label, "only");
        assert!(view.options[1..].iter().all(|o| o.label.is_empty()));
    }

    #[test]
    fn test_finished_session_has_no_quiz_view() {
        let mut session = example_session();
        session.advance();
        assert!(QuizView::from_session(&session).is_none());
    }

    #[test]
    fn test_summary_view_lines() {
        let summary = QuizSummary {
            score: 300,
            questions_attempted: 5,
            correct_answers: 3,
            questions_answered: 4,
        };
        let view = SummaryView::new(&summary);
        assert_eq!(view.lines[0], "You have completed the quiz!");
        assert_eq!(view.lines[1], "Final score: 300");
        assert_eq!(view.lines[2], "Questions attempted: 5");
        assert_eq!(view.lines[3], "Correct answers: 3 / 4");
    }
}
