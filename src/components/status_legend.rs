//! Status Legend Component
//!
//! Popover mapping each status to its colour.

use leptos::prelude::*;
use todo_domain::TodoStatus;

use crate::store::{use_widget_store, WidgetStateStoreFields};

/// Legend popover; any click inside closes it
#[component]
pub fn StatusLegend(
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_widget_store();

    view! {
        <div class="legend-popover" on:click=move |_| on_close.run(())>
            {TodoStatus::ALL.into_iter().map(|status| {
                let count = move || store.list().read().counts().get(status);
                view! {
                    <div class="legend-entry">
                        <span class=format!("legend-swatch {}", status.color_class())></span>
                        <span class="legend-label">{status.label()}</span>
                        <span class="legend-count">{count}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
