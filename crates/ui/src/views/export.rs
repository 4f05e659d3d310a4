use dioxus::prelude::*;

use quiz_core::model::QuizDocument;
use services::PrintMode;

use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq, Eq)]
enum ExportStatus {
    Idle,
    Working,
    Saved(String),
    Failed(String),
}

#[component]
pub fn ExportPanel(doc: QuizDocument) -> Element {
    let ctx = use_context::<AppContext>();
    let exports = ctx.export_service();
    let export_dir = ctx.export_dir().to_path_buf();

    let mut status = use_signal(|| ExportStatus::Idle);

    let start_export = use_callback(move |mode: PrintMode| {
        let exports = exports.clone();
        let doc = doc.clone();
        let export_dir = export_dir.clone();
        status.set(ExportStatus::Working);
        spawn(async move {
            let saved = match exports.export(&doc, mode).await {
                Ok(printed) => printed.save_in(&export_dir).await,
                Err(err) => Err(err),
            };
            match saved {
                Ok(path) => status.set(ExportStatus::Saved(path.display().to_string())),
                Err(err) => {
                    log::warn!("export of {} failed: {err}", mode.file_name());
                    status.set(ExportStatus::Failed(err.to_string()));
                }
            }
        });
    });

    let busy = status() == ExportStatus::Working;

    rsx! {
        div { class: "print-options",
            h3 { "Print Options" }
            div { class: "print-buttons",
                button {
                    class: "btn secondary",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| start_export.call(PrintMode::Blank),
                    "Print Blank Form"
                }
                button {
                    class: "btn secondary",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| start_export.call(PrintMode::AnswerKey),
                    "Print With Answers"
                }
            }
            match status() {
                ExportStatus::Idle => rsx! {},
                ExportStatus::Working => rsx! {
                    p { class: "notice", "Generating PDF..." }
                },
                ExportStatus::Saved(path) => rsx! {
                    p { class: "notice", "Saved to {path}" }
                },
                ExportStatus::Failed(message) => rsx! {
                    p { class: "notice error", "PDF generation failed: {message}" }
                },
            }
        }
    }
}
