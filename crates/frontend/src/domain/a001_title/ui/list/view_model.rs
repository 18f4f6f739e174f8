//! ViewModel for the addons title list (filter, reload, selection for modals)

use super::fields;
use super::filter::{apply_filter, FilterForm, TitleFilter};
use super::model;
use crate::layout::global_context::{AppGlobalContext, ViewKey};
use crate::layout::notifications::Notification;
use crate::shared::fetch_guard::{FetchGuard, FetchOutcome, FetchTicket};
use crate::shared::i18n::{Translate, Translator};
use contracts::domain::a001_title::{TitleId, TitleListItem};
use contracts::shared::ServiceResponse;
use leptos::prelude::*;
use uuid::Uuid;

/// Что сделать по результату загрузки
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Settled {
    Replace(Vec<TitleListItem>),
    Notify(Notification),
    Ignore,
}

pub(crate) fn settle(outcome: FetchOutcome<Vec<TitleListItem>>, error_title: &str) -> Settled {
    match outcome {
        FetchOutcome::Fresh(items) => Settled::Replace(items),
        FetchOutcome::Failed(message) => Settled::Notify(Notification::danger(error_title, message)),
        FetchOutcome::Stale => Settled::Ignore,
    }
}

/// Список загружается, когда он активен и поверх него нет вложенного экрана
pub(crate) fn should_fetch(active: ViewKey, nested: Option<&str>) -> bool {
    active == ViewKey::AddonsTitleList && nested.is_none()
}

fn find_title(items: &[TitleListItem], id: TitleId) -> Option<TitleListItem> {
    items.iter().find(|item| item.title_id == id).cloned()
}

#[derive(Clone, Copy)]
pub struct AddonsTitleListVm {
    /// Снимок последней загрузки
    pub titles: RwSignal<Vec<TitleListItem>>,
    /// Применённый фильтр; `None` - без фильтра
    pub filter: RwSignal<Option<TitleFilter>>,

    // === Filter form fields ===
    pub name: RwSignal<String>,
    pub state: RwSignal<String>,
    pub from_date: RwSignal<String>,
    pub to_date: RwSignal<String>,

    // === UI State ===
    pub is_drop_filter: RwSignal<bool>,
    pub selected_to_update: RwSignal<Option<TitleListItem>>,
    pub selected_to_update_state: RwSignal<Option<TitleListItem>>,

    guard: StoredValue<FetchGuard>,
}

impl AddonsTitleListVm {
    pub fn new() -> Self {
        Self {
            titles: RwSignal::new(Vec::new()),
            filter: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            state: RwSignal::new(String::new()),
            from_date: RwSignal::new(String::new()),
            to_date: RwSignal::new(String::new()),
            is_drop_filter: RwSignal::new(false),
            selected_to_update: RwSignal::new(None),
            selected_to_update_state: RwSignal::new(None),
            guard: StoredValue::new(FetchGuard::new()),
        }
    }

    // === Derived signals ===

    /// Отфильтрованный список; пересчитывается при смене снимка или фильтра
    pub fn addons_title_list(&self) -> Memo<Vec<TitleListItem>> {
        let titles = self.titles;
        let filter = self.filter;
        Memo::new(move |_| titles.with(|items| filter.with(|f| apply_filter(items, f.as_ref()))))
    }

    pub fn is_filter_active(&self) -> Signal<bool> {
        let filter = self.filter;
        Signal::derive(move || filter.with(Option::is_some))
    }

    /// Сигнал значения поля формы фильтра по имени привязки
    pub fn form_field(&self, name: &str) -> Option<RwSignal<String>> {
        match name {
            fields::NAME => Some(self.name),
            fields::STATE => Some(self.state),
            fields::FROM_DATE => Some(self.from_date),
            fields::TO_DATE => Some(self.to_date),
            _ => None,
        }
    }

    fn form(&self) -> FilterForm {
        FilterForm {
            name: self.name.get_untracked(),
            state: self.state.get_untracked(),
            from_date: self.from_date.get_untracked(),
            to_date: self.to_date.get_untracked(),
        }
    }

    // === Commands ===

    pub fn show_drop_filter(&self) {
        self.is_drop_filter.set(true);
    }

    pub fn hide_drop_filter(&self) {
        self.is_drop_filter.set(false);
    }

    /// Применить форму: фильтр заменяется целиком
    pub fn handle_filter(&self) {
        let filter = TitleFilter::from_form(&self.form());
        log::debug!("apply title filter: {:?}", filter);
        self.filter.set(Some(filter));
        self.hide_drop_filter();
    }

    pub fn handle_reset_filter(&self) {
        self.name.set(String::new());
        self.state.set(String::new());
        self.from_date.set(String::new());
        self.to_date.set(String::new());

        self.filter.set(None);
        self.hide_drop_filter();
    }

    /// Загрузить список. Принимается только ответ на последний запрос
    pub fn get_title_list(&self, ctx: AppGlobalContext) {
        let ticket = self.next_ticket();

        ctx.show_loader();
        log::debug!("fetch addons titles: {:?}", ticket);

        let this = *self;
        leptos::task::spawn_local(async move {
            let response = model::fetch_addons_titles().await;
            ctx.hide_loader();
            if let Some(id) = this.complete_title_list(ctx, ticket, response) {
                ctx.dismiss_later(id);
            }
        });
    }

    fn next_ticket(&self) -> FetchTicket {
        let mut guard = self.guard.get_value();
        let ticket = guard.begin();
        self.guard.set_value(guard);
        ticket
    }

    /// Применить ответ загрузки. Возвращает id показанного уведомления.
    /// Экран мог быть закрыт до ответа: тогда ответ отбрасывается
    pub(crate) fn complete_title_list(
        &self,
        ctx: AppGlobalContext,
        ticket: FetchTicket,
        response: ServiceResponse<Vec<TitleListItem>>,
    ) -> Option<Uuid> {
        let Some(guard) = self.guard.try_get_value() else {
            log::debug!("addons titles response after view disposal: {:?}", ticket);
            return None;
        };

        let error_title = Translator::new(ctx.lang.get_untracked()).translate("notify.error.title");
        match settle(guard.resolve(ticket, response), &error_title) {
            Settled::Replace(items) => {
                log::debug!("addons titles loaded: {}", items.len());
                if self.titles.try_set(items).is_some() {
                    log::debug!("addons titles loaded after view disposal");
                }
                None
            }
            Settled::Notify(notification) => {
                log::error!("addons titles fetch failed: {}", notification.text);
                Some(ctx.push_notification(notification))
            }
            Settled::Ignore => {
                log::debug!("stale addons titles response discarded: {:?}", ticket);
                None
            }
        }
    }

    /// Перезагружать список каждый раз, когда он становится видимым
    pub fn refetch_when_visible(&self, ctx: AppGlobalContext) {
        let this = *self;
        Effect::new(move |_| {
            let visible = ctx.nested.with(|nested| should_fetch(ctx.active.get(), nested.as_deref()));
            if visible {
                this.get_title_list(ctx);
            }
        });
    }

    pub fn select_title_to_update(&self, id: TitleId) {
        let selected = self.titles.with_untracked(|items| find_title(items, id));
        self.selected_to_update.set(selected);
    }

    pub fn unselect_title_to_update(&self) {
        self.selected_to_update.set(None);
    }

    pub fn select_title_to_update_state(&self, id: TitleId) {
        let selected = self.titles.with_untracked(|items| find_title(items, id));
        self.selected_to_update_state.set(selected);
    }

    pub fn unselect_title_to_update_state(&self) {
        self.selected_to_update_state.set(None);
    }
}

impl Default for AddonsTitleListVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_title::ui::list::filter::StateFilter;
    use crate::layout::notifications::Severity;
    use chrono::NaiveDate;
    use contracts::domain::a001_title::TitleState;
    use leptos::reactive::owner::Owner;

    fn title(id: i64) -> TitleListItem {
        TitleListItem {
            title_id: TitleId(id),
            default_title: format!("Title {id}"),
            is_active: TitleState::Active,
            created_at: None,
            title_collection: vec![],
        }
    }

    /// Контекст приложения живёт в своём владельце, VM - в своём
    fn with_vm(test: impl FnOnce(AppGlobalContext, AddonsTitleListVm, Owner)) {
        let app = Owner::new();
        let ctx = app.with(AppGlobalContext::new);
        let view = app.with(Owner::new);
        let vm = view.with(AddonsTitleListVm::new);
        app.with(|| test(ctx, vm, view));
    }

    fn ids(items: &[TitleListItem]) -> Vec<i64> {
        items.iter().map(|item| item.title_id.0).collect()
    }

    #[test]
    fn test_failed_fetch_notifies_and_keeps_snapshot() {
        with_vm(|ctx, vm, _| {
            vm.titles.set(vec![title(1), title(2)]);
            let ticket = vm.next_ticket();

            let shown = vm.complete_title_list(ctx, ticket, ServiceResponse::failure("Network unreachable"));

            assert!(shown.is_some());
            assert_eq!(ids(&vm.titles.get_untracked()), vec![1, 2]);
            let notifications = ctx.notifications.get_untracked();
            assert_eq!(notifications.len(), 1);
            assert_eq!(notifications[0].severity, Severity::Danger);
            assert_eq!(notifications[0].icon, "alert");
            assert_eq!(notifications[0].title, "Error");
            assert_eq!(notifications[0].text, "Network unreachable");
        });
    }

    #[test]
    fn test_failed_first_load_leaves_list_empty() {
        with_vm(|ctx, vm, _| {
            let ticket = vm.next_ticket();
            vm.complete_title_list(ctx, ticket, ServiceResponse::failure("Network unreachable"));
            assert!(vm.addons_title_list().get_untracked().is_empty());
            assert_eq!(ctx.notifications.with_untracked(Vec::len), 1);
        });
    }

    #[test]
    fn test_completed_fetch_replaces_snapshot() {
        with_vm(|ctx, vm, _| {
            vm.titles.set(vec![title(1)]);
            let ticket = vm.next_ticket();
            let shown = vm.complete_title_list(ctx, ticket, ServiceResponse::ok(vec![title(2), title(3)]));
            assert_eq!(shown, None);
            assert_eq!(ids(&vm.titles.get_untracked()), vec![2, 3]);
            assert!(ctx.notifications.with_untracked(Vec::is_empty));
        });
    }

    #[test]
    fn test_earlier_fetch_completing_late_is_dropped() {
        with_vm(|ctx, vm, _| {
            let first = vm.next_ticket();
            let second = vm.next_ticket();

            vm.complete_title_list(ctx, second, ServiceResponse::ok(vec![title(2)]));
            vm.complete_title_list(ctx, first, ServiceResponse::ok(vec![title(1)]));
            vm.complete_title_list(ctx, first, ServiceResponse::failure("late error"));

            assert_eq!(ids(&vm.titles.get_untracked()), vec![2]);
            assert!(ctx.notifications.with_untracked(Vec::is_empty));
        });
    }

    #[test]
    fn test_fetch_completing_after_view_disposal_is_dropped() {
        with_vm(|ctx, vm, view| {
            let ticket = vm.next_ticket();
            view.cleanup();

            assert_eq!(vm.complete_title_list(ctx, ticket, ServiceResponse::ok(vec![title(1)])), None);
            assert_eq!(
                vm.complete_title_list(ctx, ticket, ServiceResponse::failure("Network unreachable")),
                None
            );
            assert!(ctx.notifications.with_untracked(Vec::is_empty));
        });
    }

    #[test]
    fn test_each_submit_replaces_filter() {
        with_vm(|_, vm, _| {
            vm.show_drop_filter();
            vm.name.set("alp".to_string());
            vm.state.set("active".to_string());
            vm.handle_filter();

            assert!(!vm.is_drop_filter.get_untracked());
            assert_eq!(
                vm.filter.get_untracked(),
                Some(TitleFilter {
                    name: "alp".to_string(),
                    state: StateFilter::Active,
                    ..TitleFilter::default()
                })
            );

            vm.show_drop_filter();
            vm.name.set(String::new());
            vm.state.set(String::new());
            vm.from_date.set("2023-01-01".to_string());
            vm.handle_filter();

            assert!(!vm.is_drop_filter.get_untracked());
            assert_eq!(
                vm.filter.get_untracked(),
                Some(TitleFilter {
                    from_date: NaiveDate::from_ymd_opt(2023, 1, 1),
                    ..TitleFilter::default()
                })
            );
        });
    }

    #[test]
    fn test_reset_clears_filter_and_form() {
        with_vm(|_, vm, _| {
            let mut gamma = title(2);
            gamma.default_title = "Gamma".to_string();
            gamma.is_active = TitleState::Inactive;
            vm.titles.set(vec![title(1), gamma]);
            let list = vm.addons_title_list();

            vm.show_drop_filter();
            vm.name.set("gam".to_string());
            vm.state.set("inactive".to_string());
            vm.from_date.set("2020-01-01".to_string());
            vm.to_date.set("2030-01-01".to_string());
            vm.handle_filter();
            assert_eq!(ids(&list.get_untracked()), vec![2]);
            assert!(vm.is_filter_active().get_untracked());

            vm.show_drop_filter();
            vm.handle_reset_filter();

            assert_eq!(vm.filter.get_untracked(), None);
            for field in [vm.name, vm.state, vm.from_date, vm.to_date] {
                assert_eq!(field.get_untracked(), "");
            }
            assert!(!vm.is_drop_filter.get_untracked());
            assert_eq!(ids(&list.get_untracked()), vec![1, 2]);
        });
    }

    #[test]
    fn test_fresh_fetch_replaces_snapshot() {
        let mut guard = FetchGuard::new();
        let ticket = guard.begin();
        let settled = settle(guard.resolve(ticket, ServiceResponse::ok(vec![title(1)])), "Error");
        assert_eq!(settled, Settled::Replace(vec![title(1)]));
    }

    #[test]
    fn test_stale_fetch_is_ignored() {
        let mut guard = FetchGuard::new();
        let first = guard.begin();
        let _second = guard.begin();
        let settled = settle(guard.resolve(first, ServiceResponse::ok(vec![title(1)])), "Error");
        assert_eq!(settled, Settled::Ignore);
    }

    #[test]
    fn test_should_fetch_only_without_nested_view() {
        assert!(should_fetch(ViewKey::AddonsTitleList, None));
        assert!(!should_fetch(ViewKey::AddonsTitleList, Some("update_title")));
        assert!(!should_fetch(ViewKey::CreateProduct, None));
    }

    #[test]
    fn test_find_title() {
        let items = vec![title(1), title(2)];
        assert_eq!(find_title(&items, TitleId(2)), Some(title(2)));
        assert_eq!(find_title(&items, TitleId(9)), None);
    }
}
