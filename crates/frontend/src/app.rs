use crate::domain::a001_title::ui::list::AddonsTitleList;
use crate::domain::a002_product::ui::details::CreateProductDetails;
use crate::layout::global_context::{AppGlobalContext, ViewKey};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <Shell center=move || {
            match ctx.active.get() {
                ViewKey::AddonsTitleList => view! { <AddonsTitleList /> }.into_any(),
                ViewKey::CreateProduct => view! { <CreateProductDetails /> }.into_any(),
            }
        } />
    }
}
