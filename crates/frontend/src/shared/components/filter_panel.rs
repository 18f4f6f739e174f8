use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - drop-down filter overlay
///
/// The header button opens the overlay; clicking the backdrop closes it.
/// Escape handling belongs to the owner of `is_open`.
#[component]
pub fn FilterPanel(
    /// Whether the filter overlay is shown
    #[prop(into)]
    is_open: Signal<bool>,

    /// Whether a filter is currently applied (for badge display)
    #[prop(into)]
    is_active: Signal<bool>,

    /// Button caption
    #[prop(into)]
    label: Signal<String>,

    on_open: Callback<()>,
    on_close: Callback<()>,

    /// Filter content (form fields and actions)
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <button
                type="button"
                class=move || {
                    if is_active.get() {
                        "button button--secondary filter-panel__toggle filter-panel__toggle--active"
                    } else {
                        "button button--secondary filter-panel__toggle"
                    }
                }
                on:click=move |_| on_open.run(())
            >
                {icon("filter")}
                <span class="filter-panel__title">{move || label.get()}</span>
                {move || {
                    if is_active.get() {
                        view! { <span class="badge badge--primary">"•"</span> }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </button>

            <Show when=move || is_open.get()>
                <div class="filter-panel__backdrop" on:click=move |_| on_close.run(())></div>
                <div class="filter-panel__drop" on:click=|e| e.stop_propagation()>
                    {children()}
                </div>
            </Show>
        </div>
    }
}
