use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph},
};

use crate::app::{App, REVIEW_BLOCK_LINES};
use crate::models::{Question, QuizSession, UserAnswer};

use super::option_label;

const TEXT_PREVIEW_LENGTH: usize = 70;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], session.subject.title());
    render_questions(frame, chunks[1], session, app.review_scroll());
    render_controls(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, subject: &str) {
    let content = vec![
        Line::from(Span::styled(
            "ANSWER REVIEW",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(subject.to_string().fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_questions(frame: &mut Frame, area: Rect, session: &QuizSession, scroll: usize) {
    let questions = session.questions.as_slice();

    let mut lines: Vec<Line> = Vec::with_capacity(questions.len() * REVIEW_BLOCK_LINES);
    for (index, question) in questions.iter().enumerate() {
        question_block(&mut lines, index, question, session.answer_for(question.id));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

/// Append one question's review block. Always exactly
/// [`REVIEW_BLOCK_LINES`] lines, so the scroll offset can step per block.
fn question_block(
    lines: &mut Vec<Line<'static>>,
    index: usize,
    question: &Question,
    answer: Option<&UserAnswer>,
) {
    let (symbol, color, verdict) = match answer {
        Some(a) if a.is_correct => ("+", Color::Green, "Correct"),
        Some(_) => ("-", Color::Red, "Incorrect"),
        None => ("·", Color::DarkGray, "Not answered"),
    };

    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
        Span::styled(
            format!("{:2}. ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(verdict, Style::default().fg(color).bold()),
    ]));
    lines.push(Line::from(Span::styled(
        format!("     {}", truncate(&question.question)),
        Style::default().fg(Color::White),
    )));

    let your_answer = match answer {
        Some(a) => format!(
            "     your answer: {}. {}",
            option_label(a.selected_answer),
            option_text(question, a.selected_answer)
        ),
        None => "     your answer: none".to_string(),
    };
    lines.push(Line::from(Span::styled(
        your_answer,
        Style::default().fg(color),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "     correct:     {}. {}",
            option_label(question.correct_answer),
            option_text(question, question.correct_answer)
        ),
        Style::default().fg(Color::Green),
    )));
    lines.push(Line::from(Span::styled(
        format!("     {}", truncate(&question.explanation)),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
}

fn option_text(question: &Question, index: usize) -> &str {
    question
        .options
        .get(index)
        .map(String::as_str)
        .unwrap_or("?")
}

fn truncate(text: &str) -> String {
    if text.chars().count() > TEXT_PREVIEW_LENGTH {
        let cut: String = text.chars().take(TEXT_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  esc back  ·  h home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
