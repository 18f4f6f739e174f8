use super::collection::{Bucket, CollectionComposer};
use crate::shared::form::{
    FieldAction, FieldConfig, FieldDescriptor, FieldStrategy, FieldStyle, FormValues, Hint, SelectOption,
};
use crate::shared::i18n::Translate;
use contracts::domain::a002_product::fields;

fn key_prefix(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Main => "createproduct.main",
        Bucket::Accessory => "createproduct.addon",
        Bucket::MultipleChoice => "createproduct.multiple",
        Bucket::SingleChoice => "createproduct.single",
    }
}

/// Флажок "пометить как аксессуар"
fn mark_as_addon_field(composer: &CollectionComposer, t: &dyn Translate) -> FieldDescriptor {
    let text = t.translate("createproduct.addon.title");
    FieldDescriptor {
        class_name: Some("field-set--checkbox-inverse"),
        field: FieldConfig {
            name: Some(fields::MARK_AS_ADDON),
            style: Some(FieldStyle::OutlinePrimary),
            placeholder: Some(text.clone()),
            value: Some(composer.mark_as_addon().to_string()),
            ..FieldConfig::new(FieldStrategy::Checkbox)
        },
        is_hint_reserved: true,
        hint: Some(Hint::dotted(text)),
    }
}

/// Выбор титула для коллекции: варианты без уже выбранных, кнопка "Добавить".
/// Ошибка поля из формы заменяет подсказку и красит рамку
fn select_field(
    bucket: Bucket,
    composer: &CollectionComposer,
    form: &FormValues,
    t: &dyn Translate,
) -> FieldDescriptor {
    let prefix = key_prefix(bucket);
    let lang = t.lang();
    let error = form.error(bucket.field());

    let options = composer
        .candidates(bucket)
        .into_iter()
        .map(|item| SelectOption {
            label: item.label_for(lang.code()).to_string(),
            value: item.title_id.to_string(),
        })
        .collect();

    let hint = match error {
        Some(message) => t.translate(message),
        None => t.translate(&format!("{prefix}.hint")),
    };

    FieldDescriptor {
        class_name: None,
        field: FieldConfig {
            name: Some(bucket.field()),
            style: Some(if error.is_some() {
                FieldStyle::OutlineDanger
            } else {
                FieldStyle::OutlinePrimary
            }),
            placeholder: Some(t.translate(&format!("{prefix}.placeholder"))),
            value: Some(
                composer
                    .pending(bucket)
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            ),
            options,
            after: Some(FieldAction {
                title: t.translate("actions.add"),
                icon: "plus-circle",
            }),
            ..FieldConfig::new(FieldStrategy::Select)
        },
        is_hint_reserved: true,
        hint: Some(Hint::dotted(hint)),
    }
}

/// Поля группы коллекции. Аксессуары: флажок, а выбор только при включённом флажке
pub fn bucket_fields(
    bucket: Bucket,
    composer: &CollectionComposer,
    form: &FormValues,
    t: &dyn Translate,
) -> Vec<FieldDescriptor> {
    match bucket {
        Bucket::Accessory => {
            let mut group = vec![mark_as_addon_field(composer, t)];
            if composer.is_offered(bucket) {
                group.push(select_field(bucket, composer, form, t));
            }
            group
        }
        _ => vec![
            FieldDescriptor::title(t.translate(&format!("{}.title", key_prefix(bucket)))),
            select_field(bucket, composer, form, t),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::ui::details::collection::product_form;
    use crate::shared::i18n::{Lang, Translator};
    use contracts::domain::a001_title::{TitleId, TitleListItem, TitleReference, TitleState};

    fn title(id: i64, name: &str, es: Option<&str>) -> TitleListItem {
        TitleListItem {
            title_id: TitleId(id),
            default_title: name.to_string(),
            is_active: TitleState::Active,
            created_at: None,
            title_collection: es
                .map(|text| TitleReference {
                    lang: "es".to_string(),
                    r#ref: text.to_string(),
                })
                .into_iter()
                .collect(),
        }
    }

    fn setup() -> (CollectionComposer, FormValues) {
        let mut composer = CollectionComposer::new();
        composer.set_main_titles(vec![title(1, "Burger", None)]);
        composer.set_addon_titles(vec![title(4, "Cheese", Some("Queso")), title(5, "Bacon", None)]);
        let mut form = product_form();
        composer.sync_all(&mut form);
        (composer, form)
    }

    #[test]
    fn test_main_group() {
        let (composer, form) = setup();
        let group = bucket_fields(Bucket::Main, &composer, &form, &Translator::new(Lang::En));
        assert_eq!(group.len(), 2);
        assert!(group[0].field.disabled);
        assert_eq!(group[0].hint_text(), Some("Main collection"));

        let select = &group[1];
        assert_eq!(select.field.name, Some(fields::MAIN_COLLECTION));
        assert_eq!(select.field.strategy, FieldStrategy::Select);
        assert_eq!(select.field.options.len(), 1);
        assert_eq!(select.field.options[0].value, "1");
        assert_eq!(select.field.after.as_ref().map(|a| a.icon), Some("plus-circle"));
        assert_eq!(select.field.value.as_deref(), Some(""));
    }

    #[test]
    fn test_accessory_select_only_when_marked() {
        let (mut composer, mut form) = setup();
        let t = Translator::new(Lang::En);
        let group = bucket_fields(Bucket::Accessory, &composer, &form, &t);
        assert_eq!(group.len(), 1);
        assert_eq!(group[0].field.strategy, FieldStrategy::Checkbox);

        composer.set_mark_as_addon(true, &mut form);
        let group = bucket_fields(Bucket::Accessory, &composer, &form, &t);
        assert_eq!(group.len(), 2);
        assert_eq!(group[1].field.name, Some(fields::ACCESORY_COLLECTION));
    }

    #[test]
    fn test_error_replaces_hint_and_style() {
        let (mut composer, mut form) = setup();
        let t = Translator::new(Lang::En);
        composer.set_mark_as_addon(true, &mut form);
        form.trigger(fields::ACCESORY_COLLECTION);

        let group = bucket_fields(Bucket::Accessory, &composer, &form, &t);
        assert_eq!(group[1].field.style, Some(FieldStyle::OutlineDanger));
        assert_eq!(group[1].hint_text(), Some("Add at least one accessory"));

        composer.select_pending(Bucket::Accessory, TitleId(4));
        composer.commit(Bucket::Accessory, &mut form);
        let group = bucket_fields(Bucket::Accessory, &composer, &form, &t);
        assert_eq!(group[1].field.style, Some(FieldStyle::OutlinePrimary));
        assert_eq!(group[1].hint_text(), Some("Titles offered as accessories"));
    }

    #[test]
    fn test_option_labels_follow_language() {
        let (composer, form) = setup();
        let group = bucket_fields(Bucket::SingleChoice, &composer, &form, &Translator::new(Lang::Es));
        let labels: Vec<_> = group[1].field.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Queso", "Bacon"]);
    }

    #[test]
    fn test_pending_is_selected_value() {
        let (mut composer, form) = setup();
        composer.select_pending(Bucket::MultipleChoice, TitleId(5));
        let group = bucket_fields(Bucket::MultipleChoice, &composer, &form, &Translator::new(Lang::En));
        assert_eq!(group[1].field.value.as_deref(), Some("5"));
    }
}
