//! Scored outcomes and cumulative statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::question::{Question, Subject};
use super::session::UserAnswer;

/// Immutable snapshot of one completed session.
///
/// Carries a denormalized copy of the question sequence and the answers so
/// the attempt can be reviewed later without the bank at hand. Appended to
/// the results history exactly once, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub subject: Subject,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    /// Percentage score, rounded to the nearest integer.
    pub score: u8,
    /// Wall-clock duration of the whole attempt, in milliseconds.
    #[serde(rename = "timeSpent")]
    pub time_spent_ms: u64,
    pub user_answers: Vec<UserAnswer>,
    pub questions: Vec<Question>,
}

/// Aggregates for a single subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStats {
    pub quizzes_taken: usize,
    pub average_score: u8,
    pub best_score: u8,
}

/// Cumulative statistics, a pure fold over the full results history.
///
/// Every subject is always present in `subject_stats`; a subject without any
/// results reports all-zero aggregates rather than being absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStats {
    pub total_quizzes: usize,
    pub average_score: u8,
    pub best_score: u8,
    pub subject_stats: BTreeMap<Subject, SubjectStats>,
}

impl Default for QuizStats {
    fn default() -> Self {
        Self {
            total_quizzes: 0,
            average_score: 0,
            best_score: 0,
            subject_stats: Subject::ALL
                .into_iter()
                .map(|s| (s, SubjectStats::default()))
                .collect(),
        }
    }
}

impl QuizStats {
    /// Aggregates for `subject`, zeroed when it has no results yet.
    pub fn subject(&self, subject: Subject) -> SubjectStats {
        self.subject_stats.get(&subject).copied().unwrap_or_default()
    }
}
