use super::field_set::{FieldDescriptor, FieldStrategy};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// FieldSet - отображает одно поле по его описанию.
///
/// Значение и обработчики передаются отдельно: описание остается чистыми данными.
#[component]
pub fn FieldSet(
    #[prop(into)] descriptor: Signal<FieldDescriptor>,
    /// Текущее значение текстового/даты/списка
    #[prop(optional, into)]
    value: Option<Signal<String>>,
    /// Текущее значение флажка
    #[prop(optional, into)]
    checked: Option<Signal<bool>>,
    #[prop(optional, into)] on_change: Option<Callback<String>>,
    #[prop(optional, into)] on_toggle: Option<Callback<bool>>,
    /// Нажатие кнопки справа от поля
    #[prop(optional, into)]
    on_action: Option<Callback<()>>,
) -> impl IntoView {
    let current_value = move || value.map(|v| v.get()).unwrap_or_default();
    let current_checked = move || checked.map(|c| c.get()).unwrap_or(false);
    let emit_change = move |val: String| {
        if let Some(cb) = on_change {
            cb.run(val);
        }
    };

    let control = move || {
        let d = descriptor.get();
        let class = d.field.style.map(|s| s.class()).unwrap_or("field");
        let placeholder = d.field.placeholder.clone().unwrap_or_default();
        let disabled = d.field.disabled;
        match d.field.strategy {
            FieldStrategy::Select => view! {
                <select
                    class=class
                    disabled=disabled
                    prop:value=current_value
                    on:change=move |ev| emit_change(event_target_value(&ev))
                >
                    <option value="">{placeholder}</option>
                    {d.field.options.into_iter().map(|opt| {
                        view! { <option value=opt.value>{opt.label}</option> }
                    }).collect_view()}
                </select>
            }
            .into_any(),
            FieldStrategy::Checkbox => view! {
                <label class="field field--checkbox">
                    <input
                        type="checkbox"
                        disabled=disabled
                        prop:checked=current_checked
                        on:change=move |ev| {
                            if let Some(cb) = on_toggle {
                                cb.run(event_target_checked(&ev));
                            }
                        }
                    />
                    <span>{placeholder}</span>
                </label>
            }
            .into_any(),
            FieldStrategy::Date => view! {
                <input
                    type="date"
                    class=class
                    disabled=disabled
                    placeholder=placeholder
                    prop:value=current_value
                    on:input=move |ev| emit_change(event_target_value(&ev))
                />
            }
            .into_any(),
            FieldStrategy::Text => view! {
                <input
                    type="text"
                    class=class
                    disabled=disabled
                    placeholder=placeholder
                    prop:value=current_value
                    on:input=move |ev| emit_change(event_target_value(&ev))
                />
            }
            .into_any(),
        }
    };

    let after = move || {
        descriptor.get().field.after.map(|action| {
            view! {
                <button
                    type="button"
                    class="button button--plain"
                    title=action.title
                    on:click=move |_| {
                        if let Some(cb) = on_action {
                            cb.run(());
                        }
                    }
                >
                    {icon(action.icon)}
                </button>
            }
        })
    };

    let hint = move || {
        let d = descriptor.get();
        match d.hint {
            Some(h) => view! {
                <small class="field-set__hint" class:field-set__hint--dots=h.has_dots title=h.title.unwrap_or_default()>
                    {h.children}
                </small>
            }
            .into_any(),
            None if d.is_hint_reserved => view! { <small class="field-set__hint">" "</small> }.into_any(),
            None => view! { <></> }.into_any(),
        }
    };

    view! {
        <div class=move || format!("field-set {}", descriptor.get().class_name.unwrap_or(""))>
            <div class="field-set__row">
                {control}
                {after}
            </div>
            {hint}
        </div>
    }
}
