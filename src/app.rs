//! Presentation state.
//!
//! [`App`] owns the store and the storage adapter plus the state that only
//! the screens care about: which screen is visible, selection cursors, the
//! per-question count-up timer, and scroll offsets. Every user intent ends
//! up as a [`Command`] dispatched to the store; when a dispatch reports a
//! persistence effect, the save happens here and failures are swallowed
//! with a warning.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::models::{QuizResult, QuizSession, QuizStats, Subject};
use crate::scoring;
use crate::storage::ResultsStorage;
use crate::store::{Command, Effect, QuizStore};

/// Lines each question block occupies on the review screen; the scroll
/// offset advances in these steps.
pub const REVIEW_BLOCK_LINES: usize = 6;

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Quiz,
    Results,
    Review,
    Stats,
}

pub struct App {
    store: QuizStore,
    storage: Box<dyn ResultsStorage>,
    pub screen: Screen,
    subjects: Vec<Subject>,
    selected_subject: usize,
    selected_option: usize,
    question_started: Instant,
    review_scroll: usize,
}

impl App {
    /// Build the app, hydrating history and stats from storage.
    ///
    /// Absent or corrupt blobs read as a fresh install. When only the
    /// history survived, the stats are recomputed from it.
    pub fn new(store: QuizStore, storage: Box<dyn ResultsStorage>) -> Self {
        let mut store = store;
        if let Some(history) = storage.load_history() {
            store.load_history(history);
        }
        match storage.load_stats() {
            Some(stats) => store.load_stats(stats),
            None if !store.history().is_empty() => {
                let stats = scoring::compute_stats(store.history());
                store.load_stats(stats);
            }
            None => {}
        }

        let subjects = store.bank().subjects();
        Self {
            store,
            storage,
            screen: Screen::Home,
            subjects,
            selected_subject: 0,
            selected_option: 0,
            question_started: Instant::now(),
            review_scroll: 0,
        }
    }

    // --- accessors used by the render modules ---

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn selected_subject_index(&self) -> usize {
        self.selected_subject
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.store.session()
    }

    pub fn latest_result(&self) -> Option<&QuizResult> {
        self.store.latest_result()
    }

    pub fn stats(&self) -> &QuizStats {
        self.store.stats()
    }

    pub fn history(&self) -> &[QuizResult] {
        self.store.history()
    }

    pub fn review_scroll(&self) -> usize {
        self.review_scroll
    }

    /// Time spent on the current question so far.
    pub fn question_elapsed(&self) -> Duration {
        self.question_started.elapsed()
    }

    // --- home screen ---

    pub fn select_next_subject(&mut self) {
        if !self.subjects.is_empty() {
            self.selected_subject = (self.selected_subject + 1) % self.subjects.len();
        }
    }

    pub fn select_previous_subject(&mut self) {
        if !self.subjects.is_empty() {
            self.selected_subject =
                (self.selected_subject + self.subjects.len() - 1) % self.subjects.len();
        }
    }

    /// Start a session for the highlighted subject.
    pub fn start_selected_subject(&mut self) {
        if let Some(&subject) = self.subjects.get(self.selected_subject) {
            self.start_subject(subject);
        }
    }

    /// Start a session for `subject` (also used by retry on the results
    /// screen).
    pub fn start_subject(&mut self, subject: Subject) {
        match self.store.dispatch(Command::Start { subject }) {
            Ok(_) => {
                self.screen = Screen::Quiz;
                self.sync_quiz_cursor();
            }
            Err(err) => debug!(%err, "start rejected"),
        }
    }

    pub fn open_stats(&mut self) {
        self.screen = Screen::Stats;
    }

    // --- quiz screen ---

    pub fn select_next_option(&mut self) {
        if let Some(session) = self.store.session() {
            let count = session.current_question().options.len();
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(session) = self.store.session() {
            let count = session.current_question().options.len();
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Record the highlighted option as the answer for the current question.
    pub fn submit_answer(&mut self) {
        let Some(session) = self.store.session() else {
            return;
        };
        let question_id = session.current_question().id;
        let elapsed_ms = self.question_started.elapsed().as_millis() as u64;

        let command = Command::Answer {
            question_id,
            selected_answer: self.selected_option,
            elapsed_ms,
        };
        if let Err(err) = self.store.dispatch(command) {
            debug!(%err, "answer rejected");
        }
    }

    /// Move to the next question, or finish the quiz on the last one.
    pub fn next_question(&mut self) {
        let Some(session) = self.store.session() else {
            return;
        };
        if session.is_last_question() {
            self.finish_quiz();
        } else if self.store.dispatch(Command::Advance).is_ok() {
            self.sync_quiz_cursor();
        }
    }

    fn finish_quiz(&mut self) {
        match self.store.dispatch(Command::Complete) {
            Ok(Effect::Persist) => {
                self.persist();
                self.review_scroll = 0;
                self.screen = Screen::Results;
            }
            Ok(Effect::None) => {}
            Err(err) => debug!(%err, "complete rejected"),
        }
    }

    /// Abandon the session and go back to subject selection.
    pub fn quit_to_home(&mut self) {
        let _ = self.store.dispatch(Command::Reset);
        self.screen = Screen::Home;
    }

    /// Restart the question timer and pre-select any earlier answer for the
    /// question now at the cursor.
    fn sync_quiz_cursor(&mut self) {
        self.question_started = Instant::now();
        self.selected_option = self
            .store
            .session()
            .and_then(|s| s.answer_for(s.current_question().id))
            .map(|a| a.selected_answer)
            .unwrap_or(0);
    }

    // --- results / review screens ---

    pub fn open_review(&mut self) {
        if self.session().is_some_and(|s| s.completed) {
            self.review_scroll = 0;
            self.screen = Screen::Review;
        }
    }

    pub fn back_to_results(&mut self) {
        self.screen = Screen::Results;
    }

    /// Start another attempt at the subject that was just completed.
    pub fn retry_subject(&mut self) {
        if let Some(subject) = self.session().map(|s| s.subject) {
            self.start_subject(subject);
        }
    }

    pub fn scroll_review_down(&mut self) {
        let max = self
            .session()
            .map(|s| s.questions.len().saturating_sub(1) * REVIEW_BLOCK_LINES)
            .unwrap_or(0);
        self.review_scroll = (self.review_scroll + REVIEW_BLOCK_LINES).min(max);
    }

    pub fn scroll_review_up(&mut self) {
        self.review_scroll = self.review_scroll.saturating_sub(REVIEW_BLOCK_LINES);
    }

    // --- persistence ---

    /// Best effort: a failed save leaves the in-memory state authoritative
    /// and is only logged.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save_history(self.store.history()) {
            warn!(%err, "failed to save results history");
        }
        if let Err(err) = self.storage.save_stats(self.store.stats()) {
            warn!(%err, "failed to save stats");
        }
    }
}
