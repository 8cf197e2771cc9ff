//! Scoring and aggregation.
//!
//! Pure functions: a completed session maps to a [`QuizResult`], and the
//! full results history folds into [`QuizStats`]. Nothing here touches I/O
//! or hidden state, so stats can always be recomputed from scratch.

use crate::models::{QuizResult, QuizSession, QuizStats, Subject, SubjectStats};

/// Percentage score rounded to the nearest integer (half rounds up).
fn percentage(correct: usize, total: usize) -> u8 {
    debug_assert!(total > 0, "question sequences are never empty");
    ((correct as f64 / total as f64) * 100.0).round() as u8
}

/// Score a completed session.
///
/// The denominator is the full question-sequence length: questions that were
/// never answered count as incorrect, not as absent. `time_spent_ms` is the
/// wall-clock duration of the attempt, not the sum of per-question times.
pub fn score_session(session: &QuizSession, time_spent_ms: u64) -> QuizResult {
    let correct = session.answers.iter().filter(|a| a.is_correct).count();
    let total = session.questions.len();

    QuizResult {
        subject: session.subject,
        total_questions: total,
        correct_answers: correct,
        incorrect_answers: total - correct,
        score: percentage(correct, total),
        time_spent_ms,
        user_answers: session.answers.clone(),
        questions: session.questions.clone(),
    }
}

/// Recompute cumulative stats from the full results history.
///
/// An empty history yields the all-zero value, and every subject is present
/// in the output even when it has no results.
pub fn compute_stats(history: &[QuizResult]) -> QuizStats {
    let mut stats = QuizStats::default();
    if history.is_empty() {
        return stats;
    }

    stats.total_quizzes = history.len();
    stats.average_score = mean_score(history.iter().map(|r| r.score));
    stats.best_score = history.iter().map(|r| r.score).max().unwrap_or(0);

    for subject in Subject::ALL {
        let scores: Vec<u8> = history
            .iter()
            .filter(|r| r.subject == subject)
            .map(|r| r.score)
            .collect();
        if scores.is_empty() {
            continue;
        }
        stats.subject_stats.insert(
            subject,
            SubjectStats {
                quizzes_taken: scores.len(),
                average_score: mean_score(scores.iter().copied()),
                best_score: scores.iter().copied().max().unwrap_or(0),
            },
        );
    }

    stats
}

fn mean_score(scores: impl Iterator<Item = u8>) -> u8 {
    let (sum, count) = scores.fold((0u64, 0u64), |(s, n), score| (s + score as u64, n + 1));
    if count == 0 {
        0
    } else {
        (sum as f64 / count as f64).round() as u8
    }
}

/// Total wall-clock time across all recorded attempts, in milliseconds.
pub fn total_time_spent(history: &[QuizResult]) -> u64 {
    history.iter().map(|r| r.time_spent_ms).sum()
}

/// The last `n` results, most recent first.
pub fn recent_results(history: &[QuizResult], n: usize) -> Vec<&QuizResult> {
    history.iter().rev().take(n).collect()
}

/// Result counts bucketed by score band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDistribution {
    /// 90 and above.
    pub excellent: usize,
    /// 75 to 89.
    pub good: usize,
    /// 60 to 74.
    pub average: usize,
    /// Below 60.
    pub poor: usize,
}

/// Bucket the history's scores at the 90/75/60 boundaries.
pub fn score_distribution(history: &[QuizResult]) -> ScoreDistribution {
    let mut dist = ScoreDistribution::default();
    for result in history {
        match result.score {
            90.. => dist.excellent += 1,
            75..=89 => dist.good += 1,
            60..=74 => dist.average += 1,
            _ => dist.poor += 1,
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, QuizSession, UserAnswer};

    fn question(id: u32, correct: usize) -> Question {
        Question {
            id,
            question: format!("Question {id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: correct,
            explanation: String::new(),
        }
    }

    fn answer(question_id: u32, is_correct: bool) -> UserAnswer {
        UserAnswer {
            question_id,
            selected_answer: 0,
            is_correct,
            time_spent_ms: 1_000,
        }
    }

    fn result(subject: Subject, score: u8) -> QuizResult {
        QuizResult {
            subject,
            total_questions: 5,
            correct_answers: 0,
            incorrect_answers: 5,
            score,
            time_spent_ms: 60_000,
            user_answers: Vec::new(),
            questions: Vec::new(),
        }
    }

    #[test]
    fn three_of_five_scores_sixty() {
        let mut session = QuizSession::new(
            Subject::Mathematics,
            (1..=5).map(|id| question(id, 0)).collect(),
        );
        for id in 1..=5 {
            session.answers.push(answer(id, id <= 3));
        }

        let result = score_session(&session, 42_000);
        assert_eq!(result.score, 60);
        assert_eq!(result.correct_answers, 3);
        assert_eq!(result.incorrect_answers, 2);
        assert_eq!(result.total_questions, 5);
        assert_eq!(result.time_spent_ms, 42_000);
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        let mut session = QuizSession::new(
            Subject::English,
            (1..=4).map(|id| question(id, 0)).collect(),
        );
        session.answers.push(answer(1, true));

        let result = score_session(&session, 0);
        assert_eq!(result.correct_answers, 1);
        assert_eq!(result.incorrect_answers, 3);
        assert_eq!(result.score, 25);
    }

    #[test]
    fn score_rounds_half_up() {
        // 1/8 = 12.5% rounds to 13.
        let mut session = QuizSession::new(
            Subject::Reasoning,
            (1..=8).map(|id| question(id, 0)).collect(),
        );
        session.answers.push(answer(1, true));

        assert_eq!(score_session(&session, 0).score, 13);
    }

    #[test]
    fn empty_history_yields_all_zero_stats() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, QuizStats::default());
        assert_eq!(stats.subject(Subject::Aptitude), SubjectStats::default());
    }

    #[test]
    fn first_result_sets_every_global_aggregate() {
        let history = vec![result(Subject::Mathematics, 60)];
        let stats = compute_stats(&history);

        assert_eq!(stats.total_quizzes, 1);
        assert_eq!(stats.average_score, 60);
        assert_eq!(stats.best_score, 60);
        assert_eq!(
            stats.subject(Subject::Mathematics),
            SubjectStats {
                quizzes_taken: 1,
                average_score: 60,
                best_score: 60,
            }
        );
        for other in [Subject::Reasoning, Subject::Aptitude, Subject::English] {
            assert_eq!(stats.subject(other), SubjectStats::default());
        }
    }

    #[test]
    fn mixed_subjects_aggregate_independently() {
        let history = vec![
            result(Subject::Mathematics, 80),
            result(Subject::English, 40),
            result(Subject::Mathematics, 61),
        ];
        let stats = compute_stats(&history);

        assert_eq!(stats.total_quizzes, 3);
        // mean(80, 40, 61) = 60.33 rounds to 60
        assert_eq!(stats.average_score, 60);
        assert_eq!(stats.best_score, 80);

        let maths = stats.subject(Subject::Mathematics);
        assert_eq!(maths.quizzes_taken, 2);
        // mean(80, 61) = 70.5 rounds to 71
        assert_eq!(maths.average_score, 71);
        assert_eq!(maths.best_score, 80);

        let english = stats.subject(Subject::English);
        assert_eq!(english.quizzes_taken, 1);
        assert_eq!(english.average_score, 40);
        assert_eq!(english.best_score, 40);
    }

    #[test]
    fn recompute_is_idempotent() {
        let history = vec![
            result(Subject::Reasoning, 90),
            result(Subject::Aptitude, 55),
        ];
        assert_eq!(compute_stats(&history), compute_stats(&history));
    }

    #[test]
    fn history_helpers() {
        let history = vec![
            result(Subject::Reasoning, 95),
            result(Subject::Aptitude, 75),
            result(Subject::English, 60),
            result(Subject::Mathematics, 59),
        ];

        assert_eq!(total_time_spent(&history), 240_000);

        let recent = recent_results(&history, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].subject, Subject::Mathematics);
        assert_eq!(recent[1].subject, Subject::English);

        assert_eq!(
            score_distribution(&history),
            ScoreDistribution {
                excellent: 1,
                good: 1,
                average: 1,
                poor: 1,
            }
        );
    }
}
