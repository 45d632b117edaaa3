use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::process::ExitCode;
use timed_quiz::{
    App, LoadError, QuizConfig, QuizSession, candidate_dirs, draw_app, draw_error_notice,
    load_questions, locate_questions_file, logger,
};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> io::Result<ExitCode> {
    logger::init();
    let config = QuizConfig::default();

    let loaded = locate_questions_file(&config.questions_file, &candidate_dirs())
        .and_then(|path| load_questions(&path));
    if let Err(e) = &loaded {
        logger::log(&format!("Startup aborted: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = match loaded {
        Ok(questions) => {
            let session = QuizSession::shuffled(questions, config, &mut rand::thread_rng());
            run_quiz(&mut terminal, App::new(session))
                .await
                .map(|()| ExitCode::SUCCESS)
        }
        Err(e) => show_load_error(&mut terminal, &e, &config.questions_file)
            .await
            .map(|()| ExitCode::FAILURE),
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_quiz(terminal: &mut Tui, mut app: App) -> io::Result<()> {
    let mut events = EventStream::new();

    while !app.should_quit {
        terminal.draw(|f| draw_app(f, &app))?;

        tokio::select! {
            event = app.clock.next_event() => app.handle_clock(event),
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
        }
    }

    let summary = app.session.summary();
    logger::log(&format!(
        "Exiting with score {} after {} questions",
        summary.score, summary.questions_attempted
    ));
    Ok(())
}

async fn show_load_error(terminal: &mut Tui, error: &LoadError, file_name: &str) -> io::Result<()> {
    let message = error.user_message(file_name);
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| draw_error_notice(f, error.title(), &message))?;
        match events.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => return Ok(()),
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(e),
            None => return Ok(()),
        }
    }
}
