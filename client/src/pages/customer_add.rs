//! Customer creation page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Collects a [`CustomerDraft`](crate::state::customer_form::CustomerDraft),
//! posts it to `/api/customers`, then either navigates to the listing or
//! surfaces the failure as error toasts. The outcome handling lives in
//! [`finish_submission`] so it runs in tests without a browser.

#[cfg(test)]
#[path = "customer_add_test.rs"]
mod customer_add_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navigation_title_bar::NavigationTitleBar;
use crate::net::error::{SubmitFailure, classify};
use crate::net::types::Customer;
use crate::state::customer_form::{CustomerField, CustomerFormState, FormSection};
use crate::state::toast::{Notifier, ToastState};

/// Route the user lands on after a successful creation.
pub const CUSTOMERS_PATH: &str = "/customers";

pub const SUCCESS_MESSAGE: &str = "Customer added successfully!";

/// Apply the result of a creation call.
///
/// Success (with or without a created record): one success notification, the
/// form is reset, and `navigate` is called once with [`CUSTOMERS_PATH`]. Failure: the raw failure is logged,
/// one error notification is emitted per classified message, and the form is
/// left exactly as it was, including its `Submitting` phase.
pub fn finish_submission<N, F>(
    outcome: Result<Option<Customer>, SubmitFailure>,
    form: &mut CustomerFormState,
    notifier: &mut N,
    navigate: F,
) where
    N: Notifier + ?Sized,
    F: FnOnce(&str),
{
    match outcome {
        Ok(created) => {
            match created {
                Some(customer) => leptos::logging::log!("customer created: id={}", customer.id),
                None => leptos::logging::log!("customer created"),
            }
            *form = CustomerFormState::default();
            notifier.notify_success(SUCCESS_MESSAGE);
            navigate(CUSTOMERS_PATH);
        }
        Err(failure) => {
            leptos::logging::error!("Error adding customer: {failure:?}");
            for message in classify(&failure).into_messages() {
                notifier.notify_error(&message);
            }
        }
    }
}

/// Customer creation form.
#[component]
pub fn CustomerAddPage() -> impl IntoView {
    let form = RwSignal::new(CustomerFormState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut pending = None;
        form.update(|f| pending = f.begin_submit());
        let Some(draft) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::create_customer(&draft).await;
                let mut next_path = None;
                form.update(|f| {
                    toasts.update(|t| finish_submission(outcome, f, t, |path| next_path = Some(path.to_owned())));
                });
                if let Some(path) = next_path {
                    navigate(&path, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, &navigate, toasts);
        }
    };

    let field_input = move |field: CustomerField| {
        view! {
            <input
                class="customer-form__input"
                type=field.input_type()
                name=field.name()
                placeholder=field.placeholder()
                prop:value=move || form.with(|f| f.draft.field(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.update_field(field, value));
                }
            />
        }
    };

    let section = move |section: FormSection| {
        view! {
            <div class="customer-form__section">
                <h2 class="customer-form__heading">{section.heading()}</h2>
                <div class="customer-form__grid">
                    {CustomerField::in_section(section).map(field_input).collect_view()}
                </div>
            </div>
        }
    };

    view! {
        <form class="customer-form" on:submit=on_submit>
            <div class="customer-form__header">
                <NavigationTitleBar title="" show_back=true/>
                <h2 class="customer-form__title">"Add new customer"</h2>
            </div>
            <div class="customer-form__card">
                {section(FormSection::PersonalDetails)}
                {section(FormSection::Address)}
                <div class="customer-form__actions">
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || form.with(CustomerFormState::is_submitting)
                    >
                        {move || form.with(CustomerFormState::submit_label)}
                    </button>
                </div>
            </div>
        </form>
    }
}
