use crate::domain::a001_title::{TitleId, TitleListItem};
use serde::{Deserialize, Serialize};

/// Имена полей формы создания продукта (совпадают с JSON-ключами)
pub mod fields {
    pub const MARK_AS_ADDON: &str = "markAsAddon";
    pub const MAIN_COLLECTION: &str = "mainCollection";
    pub const ACCESORY_COLLECTION: &str = "accesoryCollection";
    pub const MULTIPLE_CHOICE: &str = "multipleChoice";
    pub const SINGLE_CHOICE: &str = "singleChoice";
}

/// Нормализованный элемент коллекции: только идентификатор титула
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    #[serde(rename = "titleId")]
    pub title_id: TitleId,
}

impl From<&TitleListItem> for CollectionEntry {
    fn from(item: &TitleListItem) -> Self {
        Self {
            title_id: item.title_id,
        }
    }
}

/// Коллекции продукта, отправляемые вместе с формой создания
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProductFormData {
    #[serde(rename = "markAsAddon", default)]
    pub mark_as_addon: bool,

    #[serde(rename = "mainCollection", default)]
    pub main_collection: Vec<CollectionEntry>,

    #[serde(rename = "accesoryCollection", default)]
    pub accesory_collection: Vec<CollectionEntry>,

    #[serde(rename = "multipleChoice", default)]
    pub multiple_choice: Vec<CollectionEntry>,

    #[serde(rename = "singleChoice", default)]
    pub single_choice: Vec<CollectionEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_serializes_only_title_id() {
        let entry = CollectionEntry { title_id: TitleId(5) };
        assert_eq!(serde_json::to_value(entry).unwrap(), json!({ "titleId": 5 }));
    }

    #[test]
    fn test_form_data_defaults_missing_collections() {
        let data: CreateProductFormData = serde_json::from_value(
            json!({ "markAsAddon": true, "singleChoice": [{ "titleId": 3 }] }),
        )
        .unwrap();
        assert!(data.mark_as_addon);
        assert!(data.main_collection.is_empty());
        assert_eq!(data.single_choice, vec![CollectionEntry { title_id: TitleId(3) }]);
    }
}
