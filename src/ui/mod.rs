pub mod layout;
mod notice;
mod quiz;
mod summary;

pub use layout::{calculate_option_grid, calculate_quiz_chunks, calculate_summary_chunks};
pub use notice::draw_error_notice;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

/// Draws whatever screen the app is on.
pub fn draw_app(f: &mut Frame, app: &App) {
    match app.state {
        AppState::Quiz | AppState::QuizQuitConfirm => {
            if let Some(view) = app.quiz_view() {
                draw_quiz(f, &view);
            }
            if app.state == AppState::QuizQuitConfirm {
                draw_quit_confirmation(f);
            }
        }
        AppState::Summary => draw_summary(f, &app.summary_view()),
    }
}
