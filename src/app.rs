//! Status Todo App
//!
//! Root component: owns the store and lays out the widget.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, ProgressHeader, TodoListView};
use crate::config::WidgetConfig;
use crate::store::WidgetState;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    // State
    provide_context(Store::new(WidgetState::default()));
    provide_context(config.clone());

    view! {
        <div class="widget-backdrop">
            <div class="widget-card">
                <h1 class="widget-title">{config.title}</h1>

                <NewTodoForm />

                <ProgressHeader />

                <TodoListView />
            </div>
        </div>
    }
}
