//! Title row with an optional history-back button.

use leptos::prelude::*;

/// Page title bar. With `show_back`, renders a button that returns to the
/// previous history entry.
#[component]
pub fn NavigationTitleBar(#[prop(into)] title: String, #[prop(optional)] show_back: bool) -> impl IntoView {
    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(history) = window.history() {
                    let _ = history.back();
                }
            }
        }
    };

    let has_title = !title.is_empty();

    view! {
        <div class="title-bar">
            <Show when=move || show_back>
                <button class="btn title-bar__back" type="button" title="Back" on:click=on_back>
                    "←"
                </button>
            </Show>
            <Show when=move || has_title>
                <h1 class="title-bar__title">{title.clone()}</h1>
            </Show>
        </div>
    }
}
