use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

use super::{format_time, score_color};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.latest_result() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(result.subject.title().fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", result.score),
            Style::default().fg(score_color(result.score)).bold(),
        )),
        Line::from(""),
        Line::from(
            format!(
                "{} correct  ·  {} incorrect  ·  {} total",
                result.correct_answers, result.incorrect_answers, result.total_questions
            )
            .fg(Color::Gray),
        ),
        Line::from(format!("time {}", format_time(result.time_spent_ms)).fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[3]);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r review  ·  t retry  ·  enter home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
