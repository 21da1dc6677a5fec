//! Toast stack rendered from the shared [`ToastState`] context.
//!
//! DESIGN
//! ======
//! Toast ids only grow, so the component remembers the highest id it has
//! scheduled and arms one dismissal timer per newer toast.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Toasts newer than `last_scheduled`, as `(id, duration_ms)` pairs.
fn unscheduled(items: &[Toast], last_scheduled: u64) -> Vec<(u64, u32)> {
    items
        .iter()
        .filter(|toast| toast.id > last_scheduled)
        .map(|toast| (toast.id, toast.kind.duration_ms()))
        .collect()
}

/// Renders visible toasts; click dismisses, timers dismiss the rest.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let last_scheduled = StoredValue::new(0_u64);

    Effect::new(move || {
        let pending = toasts.with(|s| unscheduled(&s.items, last_scheduled.get_value()));
        for (id, duration_ms) in pending {
            last_scheduled.set_value(id);
            #[cfg(feature = "hydrate")]
            gloo_timers::callback::Timeout::new(duration_ms, move || toasts.update(|s| s.dismiss(id))).forget();
            #[cfg(not(feature = "hydrate"))]
            let _ = duration_ms;
        }
    });

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() on:click=move |_| toasts.update(|s| s.dismiss(id))>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
