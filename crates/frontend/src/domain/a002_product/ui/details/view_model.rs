//! ViewModel for the product collections block of the create product form

use super::collection::{product_form, Bucket, CollectionComposer};
use super::fields::bucket_fields;
use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::Notification;
use crate::shared::fetch_guard::{FetchGuard, FetchOutcome, FetchTicket};
use crate::shared::form::{FieldDescriptor, FormValues};
use crate::shared::i18n::{Translate, Translator};
use contracts::domain::a001_title::{TitleId, TitleListItem};
use contracts::domain::common::AggregateId;
use contracts::shared::ServiceResponse;
use leptos::prelude::*;
use std::future::Future;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct CreateProductCollectionVm {
    pub composer: RwSignal<CollectionComposer>,
    /// Значения формы создания продукта (коллекции и `markAsAddon`)
    pub form: RwSignal<FormValues>,

    main_guard: StoredValue<FetchGuard>,
    addon_guard: StoredValue<FetchGuard>,
}

impl CreateProductCollectionVm {
    pub fn new() -> Self {
        let composer = CollectionComposer::new();
        let mut form = product_form();
        composer.sync_all(&mut form);

        Self {
            composer: RwSignal::new(composer),
            form: RwSignal::new(form),
            main_guard: StoredValue::new(FetchGuard::new()),
            addon_guard: StoredValue::new(FetchGuard::new()),
        }
    }

    // === Derived ===

    /// Описания полей группы (реактивно по составу, форме и языку)
    pub fn fields(&self, bucket: Bucket, ctx: AppGlobalContext) -> Vec<FieldDescriptor> {
        let t = ctx.translator();
        self.composer
            .with(|composer| self.form.with(|form| bucket_fields(bucket, composer, form, &t)))
    }

    pub fn entries(&self, bucket: Bucket) -> Vec<TitleListItem> {
        self.composer.with(|composer| composer.entries(bucket).to_vec())
    }

    pub fn mark_as_addon(&self) -> bool {
        self.composer.with(CollectionComposer::mark_as_addon)
    }

    // === Commands ===

    /// Значение `<select>`; пустая строка снимает выбор
    pub fn select_pending(&self, bucket: Bucket, value: String) {
        if value.trim().is_empty() {
            self.composer.update(|composer| composer.clear_pending(bucket));
            return;
        }
        match TitleId::from_string(&value) {
            Ok(id) => self.composer.update(|composer| {
                composer.select_pending(bucket, id);
            }),
            Err(e) => log::debug!("{}: {}", bucket.field(), e),
        }
    }

    pub fn commit(&self, bucket: Bucket) {
        let form = self.form;
        self.composer.update(|composer| {
            form.update(|form| {
                if composer.commit(bucket, form) {
                    log::debug!("{}: {} entries", bucket.field(), composer.entries(bucket).len());
                }
            })
        });
    }

    pub fn remove(&self, bucket: Bucket, id: TitleId) {
        let form = self.form;
        self.composer.update(|composer| {
            form.update(|form| {
                composer.remove(bucket, id, form);
            })
        });
    }

    pub fn set_mark_as_addon(&self, value: bool) {
        let form = self.form;
        self.composer.update(|composer| {
            form.update(|form| composer.set_mark_as_addon(value, form))
        });
    }

    /// Загрузить списки основных титулов и дополнений
    pub fn load_sources(&self, ctx: AppGlobalContext) {
        self.load(ctx, Source::Main, model::fetch_main_titles());
        self.load(ctx, Source::Addon, model::fetch_addon_titles());
    }

    fn guard(&self, source: Source) -> StoredValue<FetchGuard> {
        match source {
            Source::Main => self.main_guard,
            Source::Addon => self.addon_guard,
        }
    }

    fn next_ticket(&self, source: Source) -> FetchTicket {
        let guard = self.guard(source);
        let mut issued = guard.get_value();
        let ticket = issued.begin();
        guard.set_value(issued);
        ticket
    }

    /// Загрузка одного источника: индикатор, защита от гонки, уведомление об ошибке
    fn load<F>(&self, ctx: AppGlobalContext, source: Source, request: F)
    where
        F: Future<Output = ServiceResponse<Vec<TitleListItem>>> + 'static,
    {
        let ticket = self.next_ticket(source);
        ctx.show_loader();
        log::debug!("fetch {}: {:?}", source.name(), ticket);

        let this = *self;
        leptos::task::spawn_local(async move {
            let response = request.await;
            ctx.hide_loader();
            if let Some(id) = this.complete_source(ctx, source, ticket, response) {
                ctx.dismiss_later(id);
            }
        });
    }

    /// Применить ответ загрузки источника. Возвращает id показанного уведомления.
    /// Экран мог быть закрыт до ответа: тогда ответ отбрасывается
    pub(crate) fn complete_source(
        &self,
        ctx: AppGlobalContext,
        source: Source,
        ticket: FetchTicket,
        response: ServiceResponse<Vec<TitleListItem>>,
    ) -> Option<Uuid> {
        let Some(guard) = self.guard(source).try_get_value() else {
            log::debug!("{} response after view disposal: {:?}", source.name(), ticket);
            return None;
        };

        match guard.resolve(ticket, response) {
            FetchOutcome::Fresh(items) => {
                log::debug!("{} loaded: {}", source.name(), items.len());
                let applied = self.composer.try_update(|composer| match source {
                    Source::Main => composer.set_main_titles(items),
                    Source::Addon => composer.set_addon_titles(items),
                });
                if applied.is_none() {
                    log::debug!("{} loaded after view disposal", source.name());
                }
                None
            }
            FetchOutcome::Failed(message) => {
                log::error!("{} fetch failed: {}", source.name(), message);
                let title = Translator::new(ctx.lang.get_untracked()).translate("notify.error.title");
                Some(ctx.push_notification(Notification::danger(title, message)))
            }
            FetchOutcome::Stale => {
                log::debug!("stale {} response discarded: {:?}", source.name(), ticket);
                None
            }
        }
    }
}

impl Default for CreateProductCollectionVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Источник вариантов для коллекций
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    Main,
    Addon,
}

impl Source {
    fn name(&self) -> &'static str {
        match self {
            Source::Main => "main titles",
            Source::Addon => "addon titles",
        }
    }
}
