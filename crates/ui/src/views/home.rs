use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CatalogItemVm, map_catalog_items};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = ctx.quiz_service();

    let mut resource = use_resource(move || {
        let quizzes = quizzes.clone();
        async move {
            let entries = quizzes.list_quizzes().await.map_err(|err| {
                log::warn!("could not list quizzes: {err}");
                ViewError::Unknown
            })?;
            Ok(map_catalog_items(&entries))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Quizzes" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(items) => rsx! {
                    if items.is_empty() {
                        p { class: "notice error", "No quiz files found in the directory." }
                    } else {
                        ul { class: "catalog",
                            for item in items {
                                CatalogItem { key: "{item.id}", item }
                            }
                        }
                    }
                    button {
                        class: "btn secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Refresh"
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "notice error", "{err.message()}" }
                    button {
                        class: "btn secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn CatalogItem(item: CatalogItemVm) -> Element {
    rsx! {
        li {
            Link { class: "catalog-link", to: Route::Quiz { quiz_id: item.id.clone() },
                span { class: "catalog-label", "{item.label}" }
            }
            if let Some(modified) = item.modified_str {
                span { class: "catalog-modified", "Updated {modified}" }
            }
        }
    }
}
