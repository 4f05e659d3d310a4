use dioxus::prelude::*;

use quiz_core::model::{AnswerSheet, OptionLetter, QuestionNumber, QuizDocument};
use services::QuizServiceError;

use crate::context::AppContext;
use crate::views::{ExportPanel, ResultsPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{OptionVm, QuestionVm, ResultsVm, map_questions, map_results};

fn view_error(err: &QuizServiceError) -> ViewError {
    match err {
        QuizServiceError::NotFound(_) | QuizServiceError::InvalidId(_) => ViewError::NotFound,
        _ => ViewError::Unknown,
    }
}

#[component]
pub fn QuizView(quiz_id: String) -> Element {
    // Keyed so that switching quizzes starts from a clean form.
    rsx! {
        QuizPage { key: "{quiz_id}", quiz_id: quiz_id.clone() }
    }
}

#[component]
fn QuizPage(quiz_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = ctx.quiz_service();

    let resource = use_resource(use_reactive!(|(quiz_id,)| {
        let quizzes = quizzes.clone();
        async move {
            quizzes.load_quiz_by_name(&quiz_id).await.map_err(|err| {
                log::warn!("could not load quiz {quiz_id}: {err}");
                view_error(&err)
            })
        }
    }));

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page quiz",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(doc) => rsx! {
                    QuizForm { doc }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "notice error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn QuizForm(doc: QuizDocument) -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = ctx.quiz_service();

    let answers = use_signal(AnswerSheet::new);
    let mut show_correct = use_signal(|| false);
    let mut results = use_signal(|| None::<ResultsVm>);

    let questions = map_questions(&doc, show_correct());
    let graded_doc = doc.clone();

    rsx! {
        h2 { "{doc.title()}" }
        if !doc.instructions().is_empty() {
            p { class: "instructions", "{doc.instructions()}" }
        }

        div { class: "quiz-layout",
            form {
                class: "quiz-form",
                onsubmit: move |evt| evt.prevent_default(),
                for (index, question) in questions.into_iter().enumerate() {
                    QuestionBlock { key: "{index}", index, question, answers, results }
                }
                button {
                    class: "btn primary",
                    r#type: "button",
                    onclick: move |_| {
                        let result = quizzes.grade(&graded_doc, &answers.read());
                        results.set(Some(map_results(&result)));
                    },
                    "Calculate Score"
                }
            }

            aside { class: "quiz-settings",
                h3 { "Quiz Settings" }
                label { class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: show_correct(),
                        onchange: move |_| {
                            let next = !show_correct();
                            show_correct.set(next);
                        },
                    }
                    "Show correct answers"
                }
                ExportPanel { doc: doc.clone() }
            }
        }

        if let Some(results) = results() {
            ResultsPanel { results }
        }
    }
}

#[component]
fn QuestionBlock(
    index: usize,
    question: QuestionVm,
    answers: Signal<AnswerSheet>,
    results: Signal<Option<ResultsVm>>,
) -> Element {
    let selected = answers.read().get(question.number);

    rsx! {
        fieldset { class: "question",
            legend { "{question.heading}" }
            for option in question.options {
                OptionRow {
                    key: "{option.letter}",
                    index,
                    selected,
                    number: question.number,
                    option,
                    answers,
                    results,
                }
            }
        }
    }
}

#[component]
fn OptionRow(
    index: usize,
    selected: Option<OptionLetter>,
    number: QuestionNumber,
    option: OptionVm,
    answers: Signal<AnswerSheet>,
    results: Signal<Option<ResultsVm>>,
) -> Element {
    let mut answers = answers;
    let mut results = results;
    let letter = option.letter;
    let checked = selected == Some(letter);
    let input_id = format!("question-{index}-{letter}");

    rsx! {
        div { class: "option",
            input {
                id: "{input_id}",
                r#type: "radio",
                name: "question-{index}",
                value: "{letter}",
                checked,
                onchange: move |_| {
                    answers.write().select(number, letter);
                    // A changed answer makes the shown score stale.
                    results.set(None);
                },
            }
            label { r#for: "{input_id}", "{option.label}" }
        }
    }
}
