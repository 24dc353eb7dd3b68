//! Progress Header Component
//!
//! Badge, progress bar and the legend popover toggle.

use leptos::prelude::*;

use crate::components::StatusLegend;
use crate::presentation::progress_style;
use crate::store::{use_widget_store, WidgetStateStoreFields};

/// Shows the completion percentage, or the selected row's position
#[component]
pub fn ProgressHeader() -> impl IntoView {
    let store = use_widget_store();
    let (legend_open, set_legend_open) = signal(false);

    let badge = move || store.list().read().badge().to_string();
    let fill_style = move || progress_style(store.list().read().completion());

    view! {
        <div class="progress-header">
            <div class="progress-row">
                <span class="progress-badge">{badge}</span>
                <div class="progress-bar">
                    <div class="progress-fill" style=fill_style></div>
                </div>
            </div>

            <div class="legend-anchor">
                <button
                    type="button"
                    class="help-btn"
                    on:click=move |_| set_legend_open.update(|open| *open = !*open)
                >
                    "?"
                </button>
                <Show when=move || legend_open.get()>
                    <StatusLegend on_close=move |_| set_legend_open.set(false) />
                </Show>
            </div>
        </div>
    }
}
