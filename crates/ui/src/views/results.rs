use dioxus::prelude::*;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsPanel(results: ResultsVm) -> Element {
    rsx! {
        section { class: "results",
            h3 { "Quiz Results" }
            p { class: "score", "{results.score_line}" }
            p { class: "assessment",
                strong { "Your assessment:" }
                " {results.assessment}"
            }

            h4 { "Detailed Results" }
            table { class: "results-table",
                thead {
                    tr {
                        th { "Question" }
                        th { "Your Answer" }
                        th { "Correct Answer" }
                        th { "Result" }
                    }
                }
                tbody {
                    for row in results.rows {
                        tr {
                            td { "{row.question}" }
                            td { "{row.your_answer}" }
                            td { "{row.correct_answer}" }
                            td { "{row.verdict}" }
                        }
                    }
                }
            }
        }
    }
}
