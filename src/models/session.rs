//! Active quiz attempt state.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::question::{Question, Subject};

/// One recorded answer. A session holds at most one per question id;
/// re-answering replaces the earlier record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_id: u32,
    /// Index of the option the user picked.
    pub selected_answer: usize,
    pub is_correct: bool,
    /// Time spent on this question, in milliseconds.
    #[serde(rename = "timeSpent")]
    pub time_spent_ms: u64,
}

/// The single active quiz attempt.
///
/// Exactly one session exists at a time; starting a new quiz discards any
/// unfinished one. Sessions are never persisted, so the start time can be a
/// monotonic [`Instant`].
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub subject: Subject,
    /// The question sequence drawn for this attempt, in bank order.
    pub questions: Vec<Question>,
    /// 0-based cursor, clamped to `questions.len() - 1`.
    pub current_index: usize,
    pub answers: Vec<UserAnswer>,
    pub started: Instant,
    pub completed: bool,
}

impl QuizSession {
    pub fn new(subject: Subject, questions: Vec<Question>) -> Self {
        Self {
            subject,
            questions,
            current_index: 0,
            answers: Vec::new(),
            started: Instant::now(),
            completed: false,
        }
    }

    /// The question at the cursor.
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// The recorded answer for `question_id`, if any.
    pub fn answer_for(&self, question_id: u32) -> Option<&UserAnswer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    /// Insert or replace the answer for its question id.
    pub fn upsert_answer(&mut self, answer: UserAnswer) {
        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == answer.question_id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
    }
}
