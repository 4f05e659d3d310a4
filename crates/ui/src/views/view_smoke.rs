use std::sync::Arc;

use quiz_core::model::QuizId;
use storage::repository::{CatalogEntry, QuizCatalog, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_catalog};

const QUIZ: &str = "Game Night\n\
Instructions:\n\
Pick one answer per question.\n\
1. Best board game?\n\
A. Chess \u{2705}\n\
B. Monopoly\n\
2. Snacks?\n\
A. Popcorn\n\
B. Nachos \u{2705}\n\
\u{1F525} Scoring:\n\
0-1 Points: Practice more.\n\
2-2 Points: Champion.\n";

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_quizzes() {
    let mut harness = setup_view_harness(
        ViewKind::Home,
        &[("game_night", QUIZ), ("movies", QUIZ)],
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("game_night"), "missing first quiz in {html}");
    assert!(html.contains("movies"), "missing second quiz in {html}");
    assert!(!html.contains("No quiz files found"), "unexpected empty notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_catalog_notice() {
    let mut harness = setup_view_harness(ViewKind::Home, &[]);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("No quiz files found in the directory."),
        "missing empty notice in {html}"
    );
}

struct FailingCatalog;

#[async_trait::async_trait]
impl QuizCatalog for FailingCatalog {
    async fn list_entries(&self) -> Result<Vec<CatalogEntry>, StorageError> {
        Err(StorageError::Unavailable("fail".to_string()))
    }

    async fn read_source(&self, _id: &QuizId) -> Result<String, StorageError> {
        Err(StorageError::Unavailable("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_catalog(ViewKind::Home, Arc::new(FailingCatalog));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_form() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz("game_night".to_string()),
        &[("game_night", QUIZ)],
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Game Night"), "missing title in {html}");
    assert!(html.contains("Pick one answer per question."), "missing instructions in {html}");
    assert!(html.contains("1. Best board game?"), "missing question in {html}");
    assert!(html.contains("B. Nachos"), "missing option in {html}");
    assert!(html.contains("Calculate Score"), "missing submit in {html}");
    assert!(html.contains("Print Blank Form"), "missing export in {html}");
    assert!(html.contains("Print With Answers"), "missing export in {html}");
    assert!(!html.contains('\u{2705}'), "answers leaked in {html}");
    assert!(!html.contains("Your score"), "results shown before submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Quiz("absent".to_string()), &[("game_night", QUIZ)]);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("This quiz could not be found."),
        "missing not-found notice in {html}"
    );
}
