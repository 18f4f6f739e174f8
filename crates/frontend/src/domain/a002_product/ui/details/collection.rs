//! Состав продукта: основная коллекция, аксессуары, множественный и одиночный выбор.
//!
//! Аксессуары, множественный и одиночный выбор не пересекаются по `titleId`.
//! Основная коллекция проверяется только сама с собой.
//! Каждое изменение сразу записывается в форму как массив `{titleId}`.

use crate::shared::form::FormValues;
use contracts::domain::a001_title::{TitleId, TitleListItem};
use contracts::domain::a002_product::{fields, CollectionEntry};
use serde_json::Value;

pub const ACCESSORY_REQUIRED: &str = "createproduct.addon.error.required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Main,
    Accessory,
    MultipleChoice,
    SingleChoice,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::Main,
        Bucket::Accessory,
        Bucket::MultipleChoice,
        Bucket::SingleChoice,
    ];

    /// Взаимоисключающие коллекции
    pub const EXCLUSIVE: [Bucket; 3] = [Bucket::Accessory, Bucket::MultipleChoice, Bucket::SingleChoice];

    /// Имя поля формы
    pub fn field(&self) -> &'static str {
        match self {
            Bucket::Main => fields::MAIN_COLLECTION,
            Bucket::Accessory => fields::ACCESORY_COLLECTION,
            Bucket::MultipleChoice => fields::MULTIPLE_CHOICE,
            Bucket::SingleChoice => fields::SINGLE_CHOICE,
        }
    }

    pub fn is_exclusive(&self) -> bool {
        !matches!(self, Bucket::Main)
    }
}

/// Правило формы: при `markAsAddon` нужен хотя бы один аксессуар
pub fn accessory_rule(form: &FormValues) -> Option<&'static str> {
    if !form.get_bool(fields::MARK_AS_ADDON) {
        return None;
    }
    let empty = form
        .get_value(fields::ACCESORY_COLLECTION)
        .and_then(Value::as_array)
        .map_or(true, Vec::is_empty);
    empty.then_some(ACCESSORY_REQUIRED)
}

/// Пустая форма продукта с зарегистрированными правилами
pub fn product_form() -> FormValues {
    FormValues::new().with_rule(fields::ACCESORY_COLLECTION, accessory_rule)
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Selection {
    items: Vec<TitleListItem>,
    pending: Option<TitleId>,
}

impl Selection {
    fn contains(&self, id: TitleId) -> bool {
        self.items.iter().any(|item| item.title_id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionComposer {
    main_titles: Vec<TitleListItem>,
    addon_titles: Vec<TitleListItem>,

    main: Selection,
    accessory: Selection,
    multiple_choice: Selection,
    single_choice: Selection,

    mark_as_addon: bool,
}

impl CollectionComposer {
    pub fn new() -> Self {
        Self::default()
    }

    // === Sources ===

    /// Заменить список основных титулов; выбранное не трогается
    pub fn set_main_titles(&mut self, titles: Vec<TitleListItem>) {
        self.main_titles = titles;
    }

    /// Заменить список дополнений; выбранное не трогается
    pub fn set_addon_titles(&mut self, titles: Vec<TitleListItem>) {
        self.addon_titles = titles;
    }

    fn source(&self, bucket: Bucket) -> &[TitleListItem] {
        match bucket {
            Bucket::Main => &self.main_titles,
            _ => &self.addon_titles,
        }
    }

    fn selection(&self, bucket: Bucket) -> &Selection {
        match bucket {
            Bucket::Main => &self.main,
            Bucket::Accessory => &self.accessory,
            Bucket::MultipleChoice => &self.multiple_choice,
            Bucket::SingleChoice => &self.single_choice,
        }
    }

    fn selection_mut(&mut self, bucket: Bucket) -> &mut Selection {
        match bucket {
            Bucket::Main => &mut self.main,
            Bucket::Accessory => &mut self.accessory,
            Bucket::MultipleChoice => &mut self.multiple_choice,
            Bucket::SingleChoice => &mut self.single_choice,
        }
    }

    // === Queries ===

    pub fn entries(&self, bucket: Bucket) -> &[TitleListItem] {
        &self.selection(bucket).items
    }

    pub fn pending(&self, bucket: Bucket) -> Option<TitleId> {
        self.selection(bucket).pending
    }

    pub fn mark_as_addon(&self) -> bool {
        self.mark_as_addon
    }

    /// Аксессуары доступны только при включённом `markAsAddon`
    pub fn is_offered(&self, bucket: Bucket) -> bool {
        bucket != Bucket::Accessory || self.mark_as_addon
    }

    pub fn is_excluded(&self, bucket: Bucket, id: TitleId) -> bool {
        if bucket.is_exclusive() {
            Bucket::EXCLUSIVE
                .iter()
                .any(|other| self.selection(*other).contains(id))
        } else {
            self.selection(bucket).contains(id)
        }
    }

    /// Что ещё можно добавить в коллекцию, в порядке источника
    pub fn candidates(&self, bucket: Bucket) -> Vec<&TitleListItem> {
        self.source(bucket)
            .iter()
            .filter(|item| !self.is_excluded(bucket, item.title_id))
            .collect()
    }

    // === Commands ===

    /// Запомнить выбранный в списке титул. Неизвестный id игнорируется
    pub fn select_pending(&mut self, bucket: Bucket, id: TitleId) -> bool {
        if !self.source(bucket).iter().any(|item| item.title_id == id) {
            log::debug!("{}: title {} is not in the source list", bucket.field(), id);
            return false;
        }
        self.selection_mut(bucket).pending = Some(id);
        true
    }

    pub fn clear_pending(&mut self, bucket: Bucket) {
        self.selection_mut(bucket).pending = None;
    }

    /// Добавить выбранный титул. Выбор сбрасывается в любом случае
    pub fn commit(&mut self, bucket: Bucket, form: &mut FormValues) -> bool {
        let Some(id) = self.selection_mut(bucket).pending.take() else {
            return false;
        };
        if !self.is_offered(bucket) || self.is_excluded(bucket, id) {
            log::debug!("{}: title {} is excluded", bucket.field(), id);
            return false;
        }
        let Some(item) = self.source(bucket).iter().find(|item| item.title_id == id).cloned() else {
            return false;
        };

        self.selection_mut(bucket).items.push(item);
        self.sync(bucket, form);
        true
    }

    pub fn remove(&mut self, bucket: Bucket, id: TitleId, form: &mut FormValues) -> bool {
        let selection = self.selection_mut(bucket);
        let before = selection.items.len();
        selection.items.retain(|item| item.title_id != id);
        if selection.items.len() == before {
            return false;
        }
        self.sync(bucket, form);
        true
    }

    /// Переключить `markAsAddon`. Выключение очищает аксессуары
    pub fn set_mark_as_addon(&mut self, value: bool, form: &mut FormValues) {
        self.mark_as_addon = value;
        form.set_value(fields::MARK_AS_ADDON, Value::Bool(value));
        if !value {
            self.accessory = Selection::default();
            self.sync(Bucket::Accessory, form);
        }
    }

    /// Записать коллекции в форму (начальное состояние формы)
    pub fn sync_all(&self, form: &mut FormValues) {
        form.set_value(fields::MARK_AS_ADDON, Value::Bool(self.mark_as_addon));
        for bucket in Bucket::ALL {
            form.set_value(bucket.field(), self.field_value(bucket));
        }
    }

    fn field_value(&self, bucket: Bucket) -> Value {
        let entries: Vec<CollectionEntry> = self.entries(bucket).iter().map(CollectionEntry::from).collect();
        serde_json::to_value(entries).unwrap_or_else(|_| Value::Array(Vec::new()))
    }

    fn sync(&self, bucket: Bucket, form: &mut FormValues) {
        form.set_value(bucket.field(), self.field_value(bucket));
        if bucket == Bucket::Accessory {
            form.trigger(bucket.field());
        }
    }
}
