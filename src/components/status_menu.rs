//! Status Menu Component
//!
//! Per-row dropdown with the three fixed status choices.

use leptos::prelude::*;
use log::warn;
use todo_domain::{TodoId, TodoStatus};

use crate::store::{store_set_status, use_widget_store, WidgetStateStoreFields};

/// Status dropdown for one todo
#[component]
pub fn StatusMenu(id: TodoId) -> impl IntoView {
    let store = use_widget_store();

    let current = move || {
        store.list().read()
            .get(id)
            .map(|todo| todo.status)
            .unwrap_or_default()
    };

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match value.parse::<TodoStatus>() {
            Ok(status) => {
                store_set_status(&store, id, status);
            }
            Err(err) => warn!("status menu of todo {}: {}", id, err),
        }
    };

    view! {
        <select
            class="status-menu"
            title="Status"
            prop:value=move || current().as_str()
            on:change=on_change
        >
            {TodoStatus::ALL.into_iter().map(|status| view! {
                <option value=status.as_str()>{status.label()}</option>
            }).collect_view()}
        </select>
    }
}
