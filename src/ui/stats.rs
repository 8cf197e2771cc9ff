use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph},
};

use crate::app::App;
use crate::models::Subject;
use crate::scoring;

use super::{format_time, score_color};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    if app.stats().total_quizzes == 0 {
        render_empty(frame, chunks[1]);
    } else {
        render_body(frame, chunks[1], app);
    }
    render_controls(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Span::styled(
        "STATISTICS",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from("No statistics yet".fg(Color::Gray)),
        Line::from("Take your first quiz to start tracking progress".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.stats();
    let history = app.history();
    let dist = scoring::score_distribution(history);

    let mut lines = vec![
        Line::from(
            format!(
                " {} quizzes  ·  avg {}%  ·  best {}%  ·  total time {}",
                stats.total_quizzes,
                stats.average_score,
                stats.best_score,
                format_time(scoring::total_time_spent(history)),
            )
            .fg(Color::White),
        ),
        Line::from(""),
        Line::from(Span::styled(" BY SUBJECT", Style::default().fg(Color::Cyan))),
    ];

    for subject in Subject::ALL {
        let entry = stats.subject(subject);
        let line = if entry.quizzes_taken == 0 {
            Line::from(
                format!("   {:<24} no attempts", subject.title()).fg(Color::DarkGray),
            )
        } else {
            Line::from(vec![
                Span::styled(
                    format!("   {:<24}", subject.title()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!(
                        "{} taken  ·  avg {}%  ·  best {}%",
                        entry.quizzes_taken, entry.average_score, entry.best_score
                    ),
                    Style::default().fg(score_color(entry.average_score)),
                ),
            ])
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " SCORES",
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(
        format!(
            "   90+ {}  ·  75-89 {}  ·  60-74 {}  ·  <60 {}",
            dist.excellent, dist.good, dist.average, dist.poor
        )
        .fg(Color::Gray),
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " RECENT",
        Style::default().fg(Color::Cyan),
    )));
    for result in scoring::recent_results(history, 5) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("   {:<24}", result.subject.title()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("{:>3}%", result.score),
                Style::default().fg(score_color(result.score)),
            ),
            Span::styled(
                format!("  {}", format_time(result.time_spent_ms)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("esc back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
