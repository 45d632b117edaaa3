use crate::clock::{ClockEvent, QuizClock};
use crate::logger;
use crate::models::{AppState, QuizSession, TickOutcome};
use crate::view::{QuizView, SummaryView};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Owns the single quiz session and its clock, and turns key presses and
/// clock events into state-machine operations.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub session: QuizSession,
    pub clock: QuizClock,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: QuizSession) -> Self {
        let clock = QuizClock::start(session.config.tick_interval);
        let mut app = Self {
            state: AppState::Quiz,
            session,
            clock,
            should_quit: false,
        };
        app.sync_finished();
        app
    }

    pub fn quiz_view(&self) -> Option<QuizView> {
        QuizView::from_session(&self.session)
    }

    pub fn summary_view(&self) -> SummaryView {
        SummaryView::new(&self.session.summary())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Quiz => self.handle_quiz_key(key.code),
            AppState::QuizQuitConfirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.state = AppState::Quiz
                }
                _ => {}
            },
            AppState::Summary => {
                if matches!(
                    key.code,
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char(' ')
                ) {
                    self.should_quit = true;
                }
            }
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode) {
        let before = self.session.current_index;
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.state = AppState::QuizQuitConfirm,
            KeyCode::Right | KeyCode::Char('n') => {
                self.clock.cancel_advance();
                self.session.advance();
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.clock.cancel_advance();
                self.session.retreat();
            }
            KeyCode::Char(c) => {
                if let Some(slot) = option_slot(c) {
                    self.choose(slot);
                }
            }
            _ => {}
        }
        self.after_navigation(before);
    }

    /// Single handler for every option, parameterised by its position.
    pub fn choose(&mut self, slot: usize) {
        self.session.submit_answer(slot);
    }

    pub fn handle_clock(&mut self, event: ClockEvent) {
        let before = self.session.current_index;
        match event {
            ClockEvent::Tick => {
                if let TickOutcome::TimedOut { question_index } = self.session.tick() {
                    self.clock
                        .schedule_advance(question_index, self.session.config.timeout_advance_delay);
                }
            }
            ClockEvent::AutoAdvance(question_index) => {
                if !self.session.advance_after_timeout(question_index) {
                    logger::log("Stale auto-advance ignored");
                }
            }
        }
        self.after_navigation(before);
    }

    /// A newly loaded question gets a full first second on the countdown.
    fn after_navigation(&mut self, previous_index: usize) {
        if self.session.current_index != previous_index {
            self.clock.restart_tick();
        }
        self.sync_finished();
    }

    fn sync_finished(&mut self) {
        if self.session.is_finished() && self.state != AppState::Summary {
            self.clock.stop();
            self.state = AppState::Summary;
        }
    }
}

fn option_slot(c: char) -> Option<usize> {
    match c {
        '1'..='4' => Some(c as usize - '1' as usize),
        'a'..='d' => Some(c as usize - 'a' as usize),
        'A'..='D' => Some(c as usize - 'A' as usize),
        _ => None,
    }
}
