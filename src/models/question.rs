//! Question bank types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A fixed category partitioning the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Reasoning,
    Aptitude,
    English,
    Mathematics,
}

impl Subject {
    /// All subjects, in display order.
    pub const ALL: [Subject; 4] = [
        Subject::Reasoning,
        Subject::Aptitude,
        Subject::English,
        Subject::Mathematics,
    ];

    /// Full display title for the subject.
    pub fn title(&self) -> &'static str {
        match self {
            Subject::Reasoning => "Logical Reasoning",
            Subject::Aptitude => "Quantitative Aptitude",
            Subject::English => "English Language",
            Subject::Mathematics => "Mathematics",
        }
    }

    /// Lowercase key used in the question-bank file and persisted blobs.
    pub fn key(&self) -> &'static str {
        match self {
            Subject::Reasoning => "reasoning",
            Subject::Aptitude => "aptitude",
            Subject::English => "english",
            Subject::Mathematics => "mathematics",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A single multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier, unique within the question's subject.
    pub id: u32,
    /// Prompt text.
    pub question: String,
    /// Option texts, in display order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    /// Explanation shown during answer review.
    pub explanation: String,
}

/// Read-only mapping from subject to its ordered question sequence.
///
/// Loaded once at startup. Every subject present in the bank carries at
/// least one question (the loader enforces this).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(flatten)]
    subjects: BTreeMap<Subject, Vec<Question>>,
}

impl QuestionBank {
    pub fn new(subjects: BTreeMap<Subject, Vec<Question>>) -> Self {
        Self { subjects }
    }

    /// The question sequence for `subject`, in stored order.
    pub fn questions(&self, subject: Subject) -> Option<&[Question]> {
        self.subjects.get(&subject).map(Vec::as_slice)
    }

    /// Subjects available in this bank, in display order.
    pub fn subjects(&self) -> Vec<Subject> {
        Subject::ALL
            .into_iter()
            .filter(|s| self.subjects.contains_key(s))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Iterate over `(subject, questions)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Subject, &[Question])> {
        self.subjects.iter().map(|(s, qs)| (*s, qs.as_slice()))
    }
}
