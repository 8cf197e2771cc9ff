//! # prep-quiz
//!
//! A terminal quiz application for exam preparation: multiple-choice
//! questions grouped by subject, scored sessions, and cumulative statistics
//! persisted between runs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use prep_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Question bank JSON plus a directory for saved history/stats.
//!     let quiz = Quiz::from_paths("questions.json", ".")?;
//!
//!     // Run the quiz in the terminal.
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod scoring;
pub mod storage;
pub mod store;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{App, Screen};
pub use data::{load_bank_from_json, LoadError};
pub use models::{
    Question, QuestionBank, QuizResult, QuizSession, QuizStats, Subject, SubjectStats, UserAnswer,
};
pub use storage::{JsonFileStorage, ResultsStorage, StorageError};
pub use store::{Command, Effect, QuizStore, StoreError};

/// Redraw interval while waiting for input, so the question timer keeps
/// counting up.
const TICK: Duration = Duration::from_millis(250);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading the question bank.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Build a quiz from an already-loaded bank and a storage adapter.
    pub fn new(bank: QuestionBank, storage: Box<dyn ResultsStorage>) -> Self {
        Self {
            app: App::new(QuizStore::new(bank), storage),
        }
    }

    /// Load the question bank from a JSON file and keep history/stats in
    /// `data_dir`.
    pub fn from_paths<P: AsRef<Path>, D: AsRef<Path>>(
        questions: P,
        data_dir: D,
    ) -> Result<Self, QuizError> {
        let bank = load_bank_from_json(questions)?;
        let storage = JsonFileStorage::new(data_dir.as_ref());
        Ok(Self::new(bank, Box::new(storage)))
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, displays the quiz UI, and returns when the
    /// user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// The underlying app, for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll so the count-up timer redraws even without input.
        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Home => handle_home_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Results => handle_results_input(app, key),
        Screen::Review => handle_review_input(app, key),
        Screen::Stats => handle_stats_input(app, key),
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_subject();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_subject();
            false
        }
        KeyCode::Enter => {
            app.start_selected_subject();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.open_stats();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.next_question();
            false
        }
        KeyCode::Esc => {
            app.quit_to_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.open_review();
            false
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.retry_subject();
            false
        }
        KeyCode::Enter | KeyCode::Char('h') | KeyCode::Esc => {
            app.quit_to_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_review_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_review_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_review_up();
            false
        }
        KeyCode::Esc | KeyCode::Char('b') => {
            app.back_to_results();
            false
        }
        KeyCode::Char('h') => {
            app.quit_to_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_stats_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('h') => {
            app.quit_to_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
