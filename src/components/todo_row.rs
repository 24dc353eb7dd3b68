//! Todo Row Component
//!
//! Position, text, status menu and delete button of one todo.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use todo_domain::Todo;

use crate::components::StatusMenu;
use crate::presentation::{row_class, row_label, RowMotion};
use crate::store::{store_remove_todo, store_toggle_selection, use_widget_store, WidgetStateStoreFields};

/// Delay before dropping the `entering` class so the CSS transition runs
const ENTER_DELAY_MS: u32 = 16;

/// Matches the `.todo-row` transition duration in styles.css
const LEAVE_DELAY_MS: u32 = 200;

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_widget_store();

    let id = todo.id;
    let initial_status = todo.status;
    let text = todo.text.to_string();

    let (motion, set_motion) = signal(RowMotion::Entering);
    Timeout::new(ENTER_DELAY_MS, move || {
        // Row may already be gone
        let _ = set_motion.try_update(|m| {
            if *m == RowMotion::Entering { *m = RowMotion::Idle; }
        });
    })
    .forget();

    // Fade out first, then drop the todo from the store
    let delete = move |_| {
        set_motion.set(RowMotion::Leaving);
        Timeout::new(LEAVE_DELAY_MS, move || store_remove_todo(&store, id)).forget();
    };

    let status = move || {
        store.list().read()
            .get(id)
            .map(|todo| todo.status)
            .unwrap_or(initial_status)
    };
    let is_selected = move || store.list().read().is_selected(id);
    let position = move || store.list().read().position(id).unwrap_or_default();

    view! {
        <div class=move || row_class(status(), is_selected(), motion.get())>
            <span
                class="todo-text"
                on:click=move |_| store_toggle_selection(&store, id)
            >
                {move || row_label(position(), &text)}
            </span>

            <div class="todo-actions">
                <StatusMenu id=id />
                <button
                    class="delete-btn"
                    title="Delete"
                    on:click=delete
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
