use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::QuizSession;

use super::{format_time, option_label};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], app, session);
    render_question_text(frame, chunks[1], &session.current_question().question);
    render_options(frame, chunks[2], app, session);
    render_controls(frame, chunks[3], session);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, session: &QuizSession) {
    let halves =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let subject = Paragraph::new(session.subject.title()).fg(Color::DarkGray);
    frame.render_widget(subject, halves[0]);

    let elapsed_ms = app.question_elapsed().as_millis() as u64;
    let progress = format!(
        "{}  ·  {}/{}",
        format_time(elapsed_ms),
        session.current_index + 1,
        session.questions.len()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, halves[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, session: &QuizSession) {
    let question = session.current_question();
    let recorded = session
        .answer_for(question.id)
        .map(|a| a.selected_answer);

    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);
    for (index, option) in question.options.iter().enumerate() {
        let is_selected = index == app.selected_option();
        let is_recorded = recorded == Some(index);

        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else if is_recorded {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let recorded_mark = if is_recorded { " *" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
            Span::styled(recorded_mark, Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let next = if session.is_last_question() {
        "n finish"
    } else {
        "n next"
    };
    let widget = Paragraph::new(format!(
        "j/k navigate  ·  enter answer  ·  {}  ·  esc leave  ·  q quit",
        next
    ))
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
