//! Customer listing page, the landing route after a customer is created.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use leptos::prelude::*;

use crate::components::navigation_title_bar::NavigationTitleBar;
use crate::net::types::Customer;
use crate::state::customers::CustomersState;

/// Route of the creation form.
pub const ADD_CUSTOMER_PATH: &str = "/customers/add";

/// Customer city, or `"-"` when none is on file.
fn location_label(customer: &Customer) -> String {
    let city = customer.city.trim();
    if city.is_empty() { "-".to_owned() } else { city.to_owned() }
}

/// Lists customers and links to the creation form.
#[component]
pub fn CustomersPage() -> impl IntoView {
    // Server render and first client render both start in the loading state.
    let mut initial = CustomersState::default();
    initial.begin_load();
    let customers = RwSignal::new(initial);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_customers().await.map_err(|failure| {
                leptos::logging::warn!("customer list failed: {failure:?}");
                crate::net::error::classify(&failure).into_messages().join("; ")
            });
            customers.update(|s| s.finish_load(result));
        });
    }

    view! {
        <div class="customers-page">
            <div class="customers-page__header">
                <NavigationTitleBar title="Customers"/>
                <span class="customers-page__spacer"></span>
                <a class="btn btn--primary" href=ADD_CUSTOMER_PATH>
                    "Add customer"
                </a>
            </div>
            <Show when=move || customers.with(|s| s.error.is_some())>
                <p class="customers-page__error">{move || customers.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !customers.with(|s| s.loading)
                fallback=move || view! { <p>"Loading customers..."</p> }
            >
                <Show
                    when=move || !customers.with(CustomersState::is_empty)
                    fallback=move || view! { <p class="customers-page__empty">"No customers yet."</p> }
                >
                    <table class="customers-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"City"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                customers
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|c| {
                                        let location = location_label(&c);
                                        view! {
                                            <tr>
                                                <td>{c.display_name()}</td>
                                                <td>{c.email}</td>
                                                <td>{c.phone}</td>
                                                <td>{location}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
