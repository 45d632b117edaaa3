use crate::ui::layout::centered_rect;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Modal error box shown when startup cannot continue.
pub fn draw_error_notice(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(64, 9, f.area());
    f.render_widget(Clear, area);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(message));
    text.push_line(Line::from(""));
    text.push_line(Line::from(vec![
        Span::styled(
            "Any key",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit"),
    ]));

    let notice = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(
                    title,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(notice, area);
}
