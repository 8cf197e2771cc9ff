//! Full quiz flow driven through the public API: load a bank, run a session
//! command by command, persist, and hydrate a fresh app from the saved
//! blobs.

use std::fs;
use std::path::PathBuf;

use prep_quiz::{
    load_bank_from_json, App, Command, Effect, JsonFileStorage, QuizStore, ResultsStorage,
    Screen, Subject,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("prep-quiz-flow-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_bank(dir: &PathBuf) -> PathBuf {
    let mut questions = String::from("[");
    for id in 1..=5 {
        if id > 1 {
            questions.push(',');
        }
        questions.push_str(&format!(
            r#"{{"id": {id}, "question": "Q{id}", "options": ["a", "b", "c", "d"],
                "correctAnswer": 1, "explanation": "E{id}"}}"#
        ));
    }
    questions.push(']');

    let path = dir.join("questions.json");
    fs::write(&path, format!(r#"{{"mathematics": {questions}}}"#)).unwrap();
    path
}

#[test]
fn complete_session_is_scored_persisted_and_reloaded() {
    let dir = scratch_dir("roundtrip");
    let bank_path = write_bank(&dir);

    let bank = load_bank_from_json(&bank_path).unwrap();
    let storage = JsonFileStorage::new(&dir);
    let mut store = QuizStore::new(bank.clone());

    store
        .dispatch(Command::Start {
            subject: Subject::Mathematics,
        })
        .unwrap();

    // Answer all five questions, three of them correctly.
    for id in 1..=5u32 {
        let selected = if id <= 3 { 1 } else { 0 };
        store
            .dispatch(Command::Answer {
                question_id: id,
                selected_answer: selected,
                elapsed_ms: 1_500,
            })
            .unwrap();
        store.dispatch(Command::Advance).unwrap();
    }

    let effect = store.dispatch(Command::Complete).unwrap();
    assert_eq!(effect, Effect::Persist);
    storage.save_history(store.history()).unwrap();
    storage.save_stats(store.stats()).unwrap();

    let result = store.latest_result().unwrap();
    assert_eq!(result.subject, Subject::Mathematics);
    assert_eq!(result.score, 60);
    assert_eq!(result.correct_answers, 3);
    assert_eq!(result.incorrect_answers, 2);
    assert_eq!(result.total_questions, 5);
    assert_eq!(result.user_answers.len(), 5);
    assert_eq!(result.questions.len(), 5);

    // A fresh app hydrates the saved history and stats.
    let app = App::new(
        QuizStore::new(bank),
        Box::new(JsonFileStorage::new(&dir)),
    );
    assert_eq!(app.screen, Screen::Home);
    assert_eq!(app.history().len(), 1);
    let stats = app.stats();
    assert_eq!(stats.total_quizzes, 1);
    assert_eq!(stats.average_score, 60);
    assert_eq!(stats.best_score, 60);
    assert_eq!(stats.subject(Subject::Mathematics).quizzes_taken, 1);
    for other in [Subject::Reasoning, Subject::Aptitude, Subject::English] {
        assert_eq!(stats.subject(other).quizzes_taken, 0);
    }
}

#[test]
fn corrupt_saved_data_behaves_like_a_fresh_install() {
    let dir = scratch_dir("corrupt");
    let bank_path = write_bank(&dir);
    fs::write(dir.join("quiz-results.json"), "{oops").unwrap();
    fs::write(dir.join("quiz-stats.json"), "42").unwrap();

    let bank = load_bank_from_json(&bank_path).unwrap();
    let app = App::new(QuizStore::new(bank), Box::new(JsonFileStorage::new(&dir)));

    assert!(app.history().is_empty());
    assert_eq!(app.stats().total_quizzes, 0);
    assert_eq!(app.stats().average_score, 0);
    assert_eq!(app.stats().best_score, 0);
}

#[test]
fn history_only_blob_recomputes_stats_on_load() {
    let dir = scratch_dir("history-only");
    let bank_path = write_bank(&dir);

    let bank = load_bank_from_json(&bank_path).unwrap();
    let storage = JsonFileStorage::new(&dir);

    let mut store = QuizStore::new(bank.clone());
    store
        .dispatch(Command::Start {
            subject: Subject::Mathematics,
        })
        .unwrap();
    store.dispatch(Command::Complete).unwrap();
    storage.save_history(store.history()).unwrap();
    // Stats blob deliberately not saved.

    let app = App::new(QuizStore::new(bank), Box::new(JsonFileStorage::new(&dir)));
    assert_eq!(app.stats().total_quizzes, 1);
    assert_eq!(app.stats().best_score, 0); // no answers given, score 0
}
