use crate::ui::layout::{calculate_option_grid, calculate_quiz_chunks, centered_rect};
use crate::utils::truncate_string;
use crate::view::{Feedback, Highlight, OptionView, QuizView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_quiz(f: &mut Frame, view: &QuizView) {
    let layout = calculate_quiz_chunks(f.area());

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(16),
            Constraint::Length(16),
        ])
        .split(layout.header_area);

    let title = Paragraph::new(format!(
        "{} - Question {} / {}",
        view.title, view.question_number, view.question_total
    ))
    .style(key_style())
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, header_chunks[0]);

    let stat_style = Style::default().add_modifier(Modifier::BOLD);
    let timer = Paragraph::new(view.time_label.as_str())
        .style(stat_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(timer, header_chunks[1]);

    let score = Paragraph::new(view.score_label.as_str())
        .style(stat_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, header_chunks[2]);

    let question = Paragraph::new(Span::styled(
        view.question_text.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    for (slot, (option, cell)) in view
        .options
        .iter()
        .zip(calculate_option_grid(layout.options_area))
        .enumerate()
    {
        draw_option(f, slot, option, cell);
    }

    let feedback = match &view.feedback {
        Some(feedback) => Paragraph::new(Span::styled(feedback.message(), feedback_style(feedback))),
        None => Paragraph::new(""),
    };
    f.render_widget(
        feedback.block(Block::default().borders(Borders::ALL)),
        layout.feedback_area,
    );

    let mut help_spans = vec![
        Span::styled("1-4", key_style()),
        Span::from(" Choose  "),
    ];
    if view.can_go_back {
        help_spans.extend([Span::styled("←/p", key_style()), Span::from(" Previous  ")]);
    }
    help_spans.extend([
        Span::styled("→/n", key_style()),
        Span::from(" Next  "),
        Span::styled("Esc", key_style()),
        Span::from(" Quit"),
    ]);
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_option(f: &mut Frame, slot: usize, option: &OptionView, area: Rect) {
    let style = match option.highlight {
        Highlight::Correct => Style::default().fg(Color::Black).bg(Color::LightGreen),
        Highlight::Wrong => Style::default().fg(Color::Black).bg(Color::LightRed),
        Highlight::None if option.enabled => Style::default(),
        Highlight::None => Style::default().fg(Color::DarkGray),
    };
    let border_style = if option.enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Leave room for the borders and the "[n] " prefix.
    let max_label = (area.width as usize).saturating_sub(6);
    let label = truncate_string(&option.label, max_label.max(1));
    let button = Paragraph::new(Line::from(vec![
        Span::styled(format!("[{}] ", slot + 1), key_style()),
        Span::from(label),
    ]))
    .style(style)
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(button, area);
}

fn feedback_style(feedback: &Feedback) -> Style {
    match feedback {
        Feedback::Correct { .. } => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Feedback::Wrong { .. } => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Feedback::TimedOut { .. } => Style::default().fg(Color::Yellow),
    }
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = centered_rect(60, 11, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Quit Quiz")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the quiz? Your score will be lost.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
