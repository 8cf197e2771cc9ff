use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_menu(frame, chunks[1], app);
    render_controls(frame, chunks[3]);
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "PREP QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Pick a subject".fg(Color::DarkGray)),
        Line::from(""),
    ];

    for (index, subject) in app.subjects().iter().enumerate() {
        let is_selected = index == app.selected_subject_index();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        content.push(Line::from(Span::styled(
            format!("{} {}", marker, subject.title()),
            style,
        )));
    }

    content.push(Line::from(""));
    content.push(quick_stats_line(app));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

/// One-line history summary, shown once any quiz has been completed.
fn quick_stats_line(app: &App) -> Line<'static> {
    let stats = app.stats();
    if stats.total_quizzes == 0 {
        return Line::from("No quizzes taken yet".fg(Color::DarkGray));
    }
    Line::from(
        format!(
            "{} quizzes  ·  avg {}%  ·  best {}%",
            stats.total_quizzes, stats.average_score, stats.best_score
        )
        .fg(Color::DarkGray),
    )
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter start  ·  s stats  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
