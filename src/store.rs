//! Quiz session state machine.
//!
//! All mutation flows through [`QuizStore::dispatch`], which processes one
//! tagged [`Command`] at a time against the owned state. The transition
//! logic performs no I/O; a successful dispatch reports whether the caller
//! must persist via the returned [`Effect`].

use thiserror::Error;
use tracing::debug;

use crate::models::{
    QuestionBank, QuizResult, QuizSession, QuizStats, Subject, UserAnswer,
};
use crate::scoring;

/// An intent dispatched against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Begin a fresh session for `subject`, discarding any unfinished one.
    Start { subject: Subject },
    /// Record (or replace) the answer for a question in the active session.
    Answer {
        question_id: u32,
        selected_answer: usize,
        elapsed_ms: u64,
    },
    /// Move the cursor to the next question, clamped at the last one.
    Advance,
    /// Finalize the session, scoring it and appending to the history.
    Complete,
    /// Drop the active session. History and stats are untouched.
    Reset,
}

/// Rejected commands. The store mutates nothing when returning these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The command is not valid in the current session state.
    #[error("operation not valid in the current session state")]
    InvalidState,
    /// `Start` named a subject the question bank does not carry.
    #[error("no questions for subject '{}'", .0.key())]
    UnknownSubject(Subject),
}

/// What the caller must do after a successful dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// In-memory change only.
    None,
    /// The results history and stats changed; save both blobs.
    Persist,
}

/// Owned state container: the question bank, the active session (if any),
/// the results history, and the stats derived from it.
pub struct QuizStore {
    bank: QuestionBank,
    session: Option<QuizSession>,
    history: Vec<QuizResult>,
    stats: QuizStats,
}

impl QuizStore {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            session: None,
            history: Vec::new(),
            stats: QuizStats::default(),
        }
    }

    /// Replace the results history with a previously persisted one.
    pub fn load_history(&mut self, history: Vec<QuizResult>) {
        self.history = history;
    }

    /// Replace the stats with a previously persisted value.
    ///
    /// When only the history blob survived a restart, pass
    /// [`scoring::compute_stats`] over it instead; the stats are a pure fold
    /// of the history, so the two paths agree.
    pub fn load_stats(&mut self, stats: QuizStats) {
        self.stats = stats;
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn history(&self) -> &[QuizResult] {
        &self.history
    }

    pub fn stats(&self) -> &QuizStats {
        &self.stats
    }

    /// The most recently completed result, if any.
    pub fn latest_result(&self) -> Option<&QuizResult> {
        self.history.last()
    }

    /// Process one command. On error nothing has been mutated.
    pub fn dispatch(&mut self, command: Command) -> Result<Effect, StoreError> {
        match command {
            Command::Start { subject } => self.start(subject),
            Command::Answer {
                question_id,
                selected_answer,
                elapsed_ms,
            } => self.answer(question_id, selected_answer, elapsed_ms),
            Command::Advance => self.advance(),
            Command::Complete => self.complete(),
            Command::Reset => self.reset(),
        }
    }

    fn start(&mut self, subject: Subject) -> Result<Effect, StoreError> {
        let questions = self
            .bank
            .questions(subject)
            .ok_or(StoreError::UnknownSubject(subject))?;
        self.session = Some(QuizSession::new(subject, questions.to_vec()));
        Ok(Effect::None)
    }

    fn answer(
        &mut self,
        question_id: u32,
        selected_answer: usize,
        elapsed_ms: u64,
    ) -> Result<Effect, StoreError> {
        let session = self.in_progress_session()?;
        // Answers are keyed by id, not cursor position, so any question in
        // this session's sequence may be (re-)answered.
        let question = session
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or(StoreError::InvalidState)?;

        let answer = UserAnswer {
            question_id,
            selected_answer,
            is_correct: selected_answer == question.correct_answer,
            time_spent_ms: elapsed_ms,
        };
        session.upsert_answer(answer);
        Ok(Effect::None)
    }

    fn advance(&mut self) -> Result<Effect, StoreError> {
        let session = self.in_progress_session()?;
        let last = session.questions.len() - 1;
        session.current_index = (session.current_index + 1).min(last);
        Ok(Effect::None)
    }

    fn complete(&mut self) -> Result<Effect, StoreError> {
        let session = self.in_progress_session()?;
        session.completed = true;

        let elapsed_ms = session.started.elapsed().as_millis() as u64;
        let result = scoring::score_session(session, elapsed_ms);
        debug!(
            subject = result.subject.key(),
            score = result.score,
            "quiz completed"
        );

        self.history.push(result);
        self.stats = scoring::compute_stats(&self.history);
        Ok(Effect::Persist)
    }

    fn reset(&mut self) -> Result<Effect, StoreError> {
        self.session = None;
        Ok(Effect::None)
    }

    /// The active, not-yet-completed session, or `InvalidState`.
    fn in_progress_session(&mut self) -> Result<&mut QuizSession, StoreError> {
        match self.session.as_mut() {
            Some(session) if !session.completed => Ok(session),
            _ => Err(StoreError::InvalidState),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;
    use std::collections::BTreeMap;

    fn question(id: u32) -> Question {
        Question {
            id,
            question: format!("Question {id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            // Option index 1 is always the right one in these fixtures.
            correct_answer: 1,
            explanation: format!("Because {id}"),
        }
    }

    fn bank() -> QuestionBank {
        let mut subjects = BTreeMap::new();
        subjects.insert(
            Subject::Mathematics,
            (1..=5).map(question).collect::<Vec<_>>(),
        );
        subjects.insert(Subject::English, (1..=3).map(question).collect::<Vec<_>>());
        QuestionBank::new(subjects)
    }

    fn store() -> QuizStore {
        QuizStore::new(bank())
    }

    fn start(store: &mut QuizStore, subject: Subject) {
        store
            .dispatch(Command::Start { subject })
            .expect("start should succeed");
    }

    fn answer(store: &mut QuizStore, question_id: u32, selected_answer: usize) {
        store
            .dispatch(Command::Answer {
                question_id,
                selected_answer,
                elapsed_ms: 500,
            })
            .expect("answer should succeed");
    }

    #[test]
    fn start_draws_full_sequence_in_bank_order() {
        let mut store = store();
        start(&mut store, Subject::Mathematics);

        let session = store.session().expect("session active");
        assert_eq!(session.subject, Subject::Mathematics);
        assert_eq!(session.current_index, 0);
        assert!(session.answers.is_empty());
        assert!(!session.completed);
        let ids: Vec<u32> = session.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn start_for_missing_subject_is_rejected() {
        let mut store = store();
        let err = store
            .dispatch(Command::Start {
                subject: Subject::Reasoning,
            })
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownSubject(Subject::Reasoning));
        assert!(store.session().is_none());
    }

    #[test]
    fn start_discards_unfinished_session_without_persisting() {
        let mut store = store();
        start(&mut store, Subject::Mathematics);
        answer(&mut store, 1, 1);

        start(&mut store, Subject::English);
        let session = store.session().unwrap();
        assert_eq!(session.subject, Subject::English);
        assert!(session.answers.is_empty());
        assert!(store.history().is_empty());
    }

    #[test]
    fn reanswering_upserts_by_question_id() {
        let mut store = store();
        start(&mut store, Subject::Mathematics);

        answer(&mut store, 2, 0);
        answer(&mut store, 2, 1);

        let session = store.session().unwrap();
        assert_eq!(session.answers.len(), 1);
        let recorded = session.answer_for(2).unwrap();
        assert_eq!(recorded.selected_answer, 1);
        assert!(recorded.is_correct);
    }

    #[test]
    fn answering_a_non_cursor_question_is_permitted() {
        let mut store = store();
        start(&mut store, Subject::Mathematics);

        // Cursor is at question 1; answer question 4 directly.
        answer(&mut store, 4, 1);
        let session = store.session().unwrap();
        assert_eq!(session.current_index, 0);
        assert!(session.answer_for(4).unwrap().is_correct);
    }

    #[test]
    fn answering_an_unknown_question_id_is_rejected() {
        let mut store = store();
        start(&mut store, Subject::English);

        let err = store
            .dispatch(Command::Answer {
                question_id: 99,
                selected_answer: 0,
                elapsed_ms: 0,
            })
            .unwrap_err();
        assert_eq!(err, StoreError::InvalidState);
        assert!(store.session().unwrap().answers.is_empty());
    }

    #[test]
    fn answer_without_session_is_invalid_state() {
        let mut store = store();
        let err = store
            .dispatch(Command::Answer {
                question_id: 1,
                selected_answer: 0,
                elapsed_ms: 0,
            })
            .unwrap_err();
        assert_eq!(err, StoreError::InvalidState);
        assert!(store.history().is_empty());
        assert_eq!(*store.stats(), QuizStats::default());
    }

    #[test]
    fn advance_clamps_at_last_question() {
        let mut store = store();
        start(&mut store, Subject::English);

        for _ in 0..3 {
            store.dispatch(Command::Advance).unwrap();
        }
        assert_eq!(store.session().unwrap().current_index, 2);
    }

    #[test]
    fn complete_scores_and_appends_one_result() {
        let mut store = store();
        start(&mut store, Subject::Mathematics);
        for id in 1..=3 {
            answer(&mut store, id, 1);
        }
        answer(&mut store, 4, 0);

        let effect = store.dispatch(Command::Complete).unwrap();
        assert_eq!(effect, Effect::Persist);

        assert!(store.session().unwrap().completed);
        assert_eq!(store.history().len(), 1);
        let result = store.latest_result().unwrap();
        assert_eq!(result.total_questions, 5);
        assert_eq!(result.correct_answers, 3);
        assert_eq!(result.incorrect_answers, 2);
        assert_eq!(result.score, 60);

        let stats = store.stats();
        assert_eq!(stats.total_quizzes, 1);
        assert_eq!(stats.average_score, 60);
        assert_eq!(stats.best_score, 60);
    }

    #[test]
    fn completing_twice_is_rejected() {
        let mut store = store();
        start(&mut store, Subject::English);
        store.dispatch(Command::Complete).unwrap();

        let err = store.dispatch(Command::Complete).unwrap_err();
        assert_eq!(err, StoreError::InvalidState);
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn answering_a_completed_session_is_rejected() {
        let mut store = store();
        start(&mut store, Subject::English);
        store.dispatch(Command::Complete).unwrap();

        let err = store
            .dispatch(Command::Answer {
                question_id: 1,
                selected_answer: 1,
                elapsed_ms: 0,
            })
            .unwrap_err();
        assert_eq!(err, StoreError::InvalidState);
    }

    #[test]
    fn reset_clears_session_but_keeps_history_and_stats() {
        let mut store = store();
        start(&mut store, Subject::English);
        store.dispatch(Command::Complete).unwrap();
        let stats_before = store.stats().clone();

        store.dispatch(Command::Reset).unwrap();
        assert!(store.session().is_none());
        assert_eq!(store.history().len(), 1);
        assert_eq!(*store.stats(), stats_before);

        // Reset with no session active is also fine.
        store.dispatch(Command::Reset).unwrap();
    }
}
