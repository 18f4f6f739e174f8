use super::collection::Bucket;
use super::view_model::CreateProductCollectionVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::form::{FieldDescriptor, FieldSet, FieldStrategy};
use crate::shared::i18n::Translate;
use crate::shared::icons::icon;
use contracts::domain::a001_title::TitleListItem;
use leptos::prelude::*;
use thaw::*;

/// Экран создания продукта: блок коллекций
#[component]
pub fn CreateProductDetails() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = CreateProductCollectionVm::new();
    vm.load_sources(ctx);

    view! {
        <div class="content">
            <div class="header">
                <h1 class="header__title">{move || ctx.translator().translate("nav.createproduct")}</h1>
            </div>
            <CreateProductCollection vm=vm />
        </div>
    }
}

#[component]
pub fn CreateProductCollection(vm: CreateProductCollectionVm) -> impl IntoView {
    view! {
        <div class="create-product-collection">
            {Bucket::ALL
                .into_iter()
                .map(|bucket| view! { <CollectionGroup vm=vm bucket=bucket /> })
                .collect_view()}
        </div>
    }
}

/// Поля группы и выбранные в ней титулы
#[component]
fn CollectionGroup(vm: CreateProductCollectionVm, bucket: Bucket) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let fields = move || {
        vm.fields(bucket, ctx)
            .into_iter()
            .map(|descriptor| render_field(vm, bucket, descriptor))
            .collect_view()
    };

    let show_entries = move || bucket != Bucket::Accessory || vm.mark_as_addon();

    view! {
        <Card class="create-product-collection__group">
            {fields}
            <Show when=show_entries>
                <CollectionEntries vm=vm bucket=bucket />
            </Show>
        </Card>
    }
}

fn render_field(vm: CreateProductCollectionVm, bucket: Bucket, descriptor: FieldDescriptor) -> AnyView {
    match descriptor.field.strategy {
        FieldStrategy::Checkbox => view! {
            <FieldSet
                descriptor=descriptor
                checked=Signal::derive(move || vm.mark_as_addon())
                on_toggle=Callback::new(move |value: bool| vm.set_mark_as_addon(value))
            />
        }
        .into_any(),
        FieldStrategy::Select => {
            let value = descriptor.field.value.clone().unwrap_or_default();
            view! {
                <FieldSet
                    descriptor=descriptor
                    value=value
                    on_change=Callback::new(move |value: String| vm.select_pending(bucket, value))
                    on_action=Callback::new(move |_| vm.commit(bucket))
                />
            }
            .into_any()
        }
        _ => view! { <FieldSet descriptor=descriptor /> }.into_any(),
    }
}

#[component]
fn CollectionEntries(vm: CreateProductCollectionVm, bucket: Bucket) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let entries = Memo::new(move |_| vm.entries(bucket));

    view! {
        <Show
            when=move || entries.with(|items| !items.is_empty())
            fallback=move || view! {
                <small class="create-product-collection__empty">
                    {move || ctx.translator().translate("createproduct.empty")}
                </small>
            }
        >
            <Flex gap=FlexGap::Small class="create-product-collection__chips">
                <For
                    each=move || entries.get()
                    key=|item: &TitleListItem| item.title_id
                    children=move |item| view! { <EntryChip vm=vm bucket=bucket item=item /> }
                />
            </Flex>
        </Show>
    }
}

#[component]
fn EntryChip(vm: CreateProductCollectionVm, bucket: Bucket, item: TitleListItem) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let id = item.title_id;
    let label = move || item.label_for(ctx.lang.get().code()).to_string();

    view! {
        <span class="chip">
            <span class="chip__label">{label}</span>
            <button
                type="button"
                class="button button--plain chip__remove"
                title=move || ctx.translator().translate("actions.remove")
                on:click=move |_| vm.remove(bucket, id)
            >
                {icon("trash")}
            </button>
        </span>
    }
}
