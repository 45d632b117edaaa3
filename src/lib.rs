pub mod app;
pub mod clock;
pub mod config;
pub mod logger;
pub mod models;
pub mod questions;
pub mod session;
pub mod ui;
pub mod utils;
pub mod view;

// Re-exports for convenience
pub use app::App;
pub use clock::{ClockEvent, QuizClock};
pub use config::{QuizConfig, RevisitPolicy};
pub use models::{AnswerOutcome, AppState, Question, QuizPhase, QuizSession, QuizSummary};
pub use questions::{LoadError, candidate_dirs, load_questions, locate_questions_file};
pub use ui::{draw_app, draw_error_notice};
pub use view::{Feedback, Highlight, QuizView, SummaryView};
