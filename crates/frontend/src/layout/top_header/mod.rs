//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title
//! - Navigation between views
//! - Language selector

use crate::layout::global_context::{AppGlobalContext, ViewKey};
use crate::shared::i18n::{Lang, Translate};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let on_lang_change = move |ev| {
        let code = event_target_value(&ev);
        match Lang::from_code(&code) {
            Some(lang) => ctx.lang.set(lang),
            None => log::warn!("unknown language: {}", code),
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{move || ctx.translator().translate("app.title")}</span>
            </div>

            <nav class="top-header__nav">
                {ViewKey::ALL
                    .into_iter()
                    .map(|view| {
                        view! {
                            <button
                                type="button"
                                class="top-header__nav-btn"
                                class:top-header__nav-btn--active=move || ctx.active.get() == view
                                on:click=move |_| ctx.activate(view)
                            >
                                {move || ctx.translator().translate(view.title_key())}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="top-header__actions">
                <select
                    class="top-header__lang"
                    title=move || ctx.translator().translate("app.language")
                    prop:value=move || ctx.lang.get().code()
                    on:change=on_lang_change
                >
                    {Lang::ALL
                        .into_iter()
                        .map(|lang| view! { <option value=lang.code()>{lang.language()}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
