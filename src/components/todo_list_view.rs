//! Todo List View Component
//!
//! Keyed list of rows in insertion order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_widget_store, WidgetStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_widget_store();

    view! {
        <div class="todo-list">
            // Rows read their own status and position, so key by id only
            <For
                each=move || store.list().read().todos().to_vec()
                key=|todo| todo.id
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </div>
    }
}
