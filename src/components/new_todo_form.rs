//! New Todo Form Component
//!
//! Text input plus add button. Submits on Enter or click.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::store::{store_add_draft, use_widget_store, WidgetStateStoreFields};

/// Form for adding todos to the end of the list
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_widget_store();
    let config = expect_context::<WidgetConfig>();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_draft(&store);
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                class="new-todo-input"
                placeholder=config.placeholder
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" title="Add">"+"</button>
        </form>
    }
}
