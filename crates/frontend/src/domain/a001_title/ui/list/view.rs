use super::fields::filter_form_fields;
use super::view_model::AddonsTitleListVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::date_utils::format_date;
use crate::shared::form::FieldSet;
use crate::shared::i18n::Translate;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_title::{TitleListItem, TitleState};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AddonsTitleList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = AddonsTitleListVm::new();
    vm.refetch_when_visible(ctx);

    let items = vm.addons_title_list();
    let t = move |key: &'static str| ctx.translator().translate(key);

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            vm.hide_drop_filter();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="content">
            <div class="header">
                <h1 class="header__title">{move || t("views.addonstitlelist.title")}</h1>
                <Space>
                    <FilterPanel
                        is_open=vm.is_drop_filter
                        is_active=vm.is_filter_active()
                        label=Signal::derive(move || t("actions.filter"))
                        on_open=Callback::new(move |_| vm.show_drop_filter())
                        on_close=Callback::new(move |_| vm.hide_drop_filter())
                    >
                        <TitleFilterForm vm=vm />
                    </FilterPanel>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.get_title_list(ctx)>
                        {icon("refresh")}
                        {move || format!(" {}", t("actions.refresh"))}
                    </Button>
                </Space>
            </div>

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=60.0>{move || t("views.addonstitlelist.columns.id")}</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>{move || t("views.addonstitlelist.columns.name")}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t("views.addonstitlelist.columns.state")}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t("views.addonstitlelist.columns.created")}</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>{move || t("views.addonstitlelist.columns.actions")}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|item| view! { <TitleRow item=item vm=vm /> })
                            .collect_view()
                    }}
                </TableBody>
            </Table>

            <Show when=move || items.with(Vec::is_empty)>
                <p class="content__empty">{move || t("views.addonstitlelist.empty")}</p>
            </Show>

            {move || {
                vm.selected_to_update.get().map(|title| {
                    view! {
                        <Modal
                            title=Signal::derive(move || t("views.addonstitlelist.update.title"))
                            on_close=Callback::new(move |_| {
                                vm.unselect_title_to_update();
                                ctx.close_nested();
                            })
                        >
                            <TitleDetails title=title />
                        </Modal>
                    }
                })
            }}

            {move || {
                vm.selected_to_update_state.get().map(|title| {
                    view! {
                        <Modal
                            title=Signal::derive(move || t("views.addonstitlelist.updatestate.title"))
                            on_close=Callback::new(move |_| {
                                vm.unselect_title_to_update_state();
                                ctx.close_nested();
                            })
                        >
                            <p>{title.default_title.clone()}</p>
                            <StateBadge state=title.is_active />
                        </Modal>
                    }
                })
            }}
        </div>
    }
}

/// Форма фильтра внутри выпадающей панели
#[component]
fn TitleFilterForm(vm: AddonsTitleListVm) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let t = move |key: &'static str| ctx.translator().translate(key);

    view! {
        <div class="filter-form">
            {move || {
                filter_form_fields(&ctx.translator())
                    .into_iter()
                    .filter_map(|descriptor| {
                        let signal = vm.form_field(descriptor.field.name?)?;
                        Some(view! {
                            <FieldSet
                                descriptor=descriptor
                                value=signal
                                on_change=Callback::new(move |value: String| signal.set(value))
                            />
                        })
                    })
                    .collect_view()
            }}
            <Flex gap=FlexGap::Small>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.handle_filter()>
                    {move || t("actions.apply")}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.handle_reset_filter()>
                    {move || t("actions.reset")}
                </Button>
            </Flex>
        </div>
    }
}

#[component]
fn TitleRow(item: TitleListItem, vm: AddonsTitleListVm) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let id = item.title_id;
    let label = {
        let item = item.clone();
        move || item.label_for(ctx.lang.get().code()).to_string()
    };

    view! {
        <TableRow>
            <TableCell>{id.to_string()}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{label}</TableCellLayout>
            </TableCell>
            <TableCell>
                <StateBadge state=item.is_active />
            </TableCell>
            <TableCell>{format_date(item.created_at)}</TableCell>
            <TableCell>
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| {
                            vm.select_title_to_update(id);
                            ctx.open_nested("update_title");
                        }
                    >
                        {move || ctx.translator().translate("views.addonstitlelist.update.title")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| {
                            vm.select_title_to_update_state(id);
                            ctx.open_nested("update_title_state");
                        }
                    >
                        {move || ctx.translator().translate("views.addonstitlelist.updatestate.title")}
                    </Button>
                </Flex>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn StateBadge(state: TitleState) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (color, key) = match state {
        TitleState::Active => (BadgeColor::Success, "views.addonstitlelist.filter.form.state.active"),
        TitleState::Inactive => (BadgeColor::Danger, "views.addonstitlelist.filter.form.state.inactive"),
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {move || ctx.translator().translate(key)}
        </Badge>
    }
}

/// Заголовок и переводы выбранного титула
#[component]
fn TitleDetails(title: TitleListItem) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    view! {
        <div class="title-details">
            <h3>{format!("#{} {}", title.title_id, title.default_title)}</h3>
            <Label>{move || ctx.translator().translate("views.addonstitlelist.translations")}</Label>
            <ul class="title-details__refs">
                {title
                    .title_collection
                    .into_iter()
                    .map(|reference| view! { <li><b>{reference.lang}</b>": "{reference.r#ref}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
