mod home;
mod quiz;
mod results;
mod review;
mod stats;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Home => home::render(frame, area, app),
        Screen::Quiz => quiz::render(frame, area, app),
        Screen::Results => results::render(frame, area, app),
        Screen::Review => review::render(frame, area, app),
        Screen::Stats => stats::render(frame, area, app),
    }
}

/// `m:ss` display for a millisecond duration.
fn format_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Color band for a percentage score.
fn score_color(score: u8) -> Color {
    match score {
        90..=100 => Color::Green,
        75..=89 => Color::Cyan,
        60..=74 => Color::Yellow,
        _ => Color::Red,
    }
}

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Label for an option index; banks carry four options per question, but an
/// out-of-range index still renders rather than panicking.
fn option_label(index: usize) -> char {
    OPTION_LABELS.get(index).copied().unwrap_or('?')
}
