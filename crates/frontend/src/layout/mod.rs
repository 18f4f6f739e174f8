pub mod global_context;
pub mod notifications;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use notifications::NotificationHost;
use thaw::Spinner;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |               Content                     |
/// +------------------------------------------+
/// ```
///
/// The loader overlay is shown while any fetch is running,
/// notifications stack in the corner above everything.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + Send + Sync + 'static,
{
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-main">
                {move || center()}
            </div>

            <Show when=move || ctx.is_loading()>
                <div class="app-loader">
                    <Spinner />
                </div>
            </Show>

            <NotificationHost />
        </div>
    }
}
