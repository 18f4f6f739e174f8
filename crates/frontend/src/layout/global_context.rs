use crate::layout::notifications::{Notification, NOTIFY_TIMEOUT_MS};
use crate::shared::i18n::{Lang, Translator};
use leptos::prelude::*;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;
use web_sys::window;

/// Экраны консоли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    AddonsTitleList,
    CreateProduct,
}

impl ViewKey {
    pub const ALL: [ViewKey; 2] = [ViewKey::AddonsTitleList, ViewKey::CreateProduct];

    pub fn key(&self) -> &'static str {
        match self {
            ViewKey::AddonsTitleList => "addons_titles",
            ViewKey::CreateProduct => "create_product",
        }
    }

    /// Ключ локализации для навигации
    pub fn title_key(&self) -> &'static str {
        match self {
            ViewKey::AddonsTitleList => "nav.addonstitles",
            ViewKey::CreateProduct => "nav.createproduct",
        }
    }

    pub fn from_key(key: &str) -> Option<ViewKey> {
        ViewKey::ALL.into_iter().find(|view| view.key() == key)
    }
}

/// Общие сервисы приложения: активный экран, язык, индикатор загрузки, уведомления
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<ViewKey>,
    /// Вложенный экран поверх активного (например, форма обновления титула)
    pub nested: RwSignal<Option<String>>,
    pub lang: RwSignal<Lang>,
    pub loader: RwSignal<u32>,
    pub notifications: RwSignal<Vec<Notification>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ViewKey::AddonsTitleList),
            nested: RwSignal::new(None),
            lang: RwSignal::new(Lang::default()),
            loader: RwSignal::new(0),
            notifications: RwSignal::new(vec![]),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(view) = params.get("active").and_then(|key| ViewKey::from_key(key)) {
            self.activate(view);
        }
        if let Some(lang) = params.get("lang").and_then(|code| Lang::from_code(code)) {
            self.lang.set(lang);
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string = serde_qs::to_string(&BTreeMap::from([
                ("active".to_string(), this.active.get().key().to_string()),
                ("lang".to_string(), this.lang.get().code().to_string()),
            ]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Сделать экран активным; вложенный экран закрывается
    pub fn activate(&self, view: ViewKey) {
        log::debug!("activate view: {}", view.key());
        self.nested.set(None);
        self.active.set(view);
    }

    pub fn open_nested(&self, key: &str) {
        self.nested.set(Some(key.to_string()));
    }

    pub fn close_nested(&self) {
        self.nested.set(None);
    }

    /// Переводчик для текущего языка (реактивно)
    pub fn translator(&self) -> Translator {
        Translator::new(self.lang.get())
    }

    pub fn show_loader(&self) {
        self.loader.update(|count| *count += 1);
    }

    pub fn hide_loader(&self) {
        self.loader.update(|count| *count = count.saturating_sub(1));
    }

    pub fn is_loading(&self) -> bool {
        self.loader.get() > 0
    }

    /// Показать уведомление. Закрытие по таймеру - `dismiss_later`
    pub fn push_notification(&self, notification: Notification) -> Uuid {
        let id = notification.id;
        self.notifications.update(|list| list.push(notification));
        id
    }

    /// Закрыть уведомление через `NOTIFY_TIMEOUT_MS`
    pub fn dismiss_later(&self, id: Uuid) {
        let this = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTIFY_TIMEOUT_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.notifications.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
