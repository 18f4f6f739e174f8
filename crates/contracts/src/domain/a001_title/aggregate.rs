use crate::domain::common::AggregateId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleId(pub i64);

impl TitleId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for TitleId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(TitleId::new)
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// State
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleState {
    Active,
    Inactive,
}

impl TitleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleState::Active => "active",
            TitleState::Inactive => "inactive",
        }
    }
}

impl FromStr for TitleState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" => Ok(TitleState::Active),
            "inactive" => Ok(TitleState::Inactive),
            other => Err(anyhow::anyhow!("Unknown title state: '{}'", other)),
        }
    }
}

// ============================================================================
// List item
// ============================================================================

/// Локализованное наименование титула
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleReference {
    pub lang: String,
    #[serde(rename = "ref")]
    pub r#ref: String,
}

/// Строка списка титулов (общая для основных и дополнительных титулов)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleListItem {
    #[serde(rename = "titleId")]
    pub title_id: TitleId,

    #[serde(rename = "defaultTitle")]
    pub default_title: String,

    #[serde(rename = "isActive")]
    pub is_active: TitleState,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "titleCollection", default)]
    pub title_collection: Vec<TitleReference>,
}

impl TitleListItem {
    /// Наименование для языка `lang`, иначе наименование по умолчанию
    pub fn label_for(&self, lang: &str) -> &str {
        self.title_collection
            .iter()
            .find(|reference| reference.lang == lang)
            .map(|reference| reference.r#ref.as_str())
            .unwrap_or(self.default_title.as_str())
    }

    /// Все наименования: по умолчанию и локализованные
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.default_title.as_str())
            .chain(self.title_collection.iter().map(|r| r.r#ref.as_str()))
    }

    /// Календарная дата создания (UTC)
    pub fn created_on(&self) -> Option<NaiveDate> {
        self.created_at.map(|at| at.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_json() -> &'static str {
        r#"{
            "titleId": 7,
            "defaultTitle": "Extra cheese",
            "isActive": "active",
            "createdAt": "2024-03-15T14:02:26Z",
            "titleCollection": [
                { "lang": "es", "ref": "Queso extra" }
            ]
        }"#
    }

    #[test]
    fn test_deserialize_wire_names() {
        let item: TitleListItem = serde_json::from_str(item_json()).unwrap();
        assert_eq!(item.title_id, TitleId(7));
        assert_eq!(item.is_active, TitleState::Active);
        assert_eq!(
            item.created_on(),
            Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
        assert_eq!(item.title_collection[0].r#ref, "Queso extra");
    }

    #[test]
    fn test_missing_created_at_is_none() {
        let item: TitleListItem = serde_json::from_str(
            r#"{ "titleId": 1, "defaultTitle": "Fries", "isActive": "inactive", "createdAt": null }"#,
        )
        .unwrap();
        assert_eq!(item.created_at, None);
        assert!(item.title_collection.is_empty());
    }

    #[test]
    fn test_label_falls_back_to_default() {
        let item: TitleListItem = serde_json::from_str(item_json()).unwrap();
        assert_eq!(item.label_for("es"), "Queso extra");
        assert_eq!(item.label_for("en"), "Extra cheese");
    }

    #[test]
    fn test_title_state_from_str() {
        assert_eq!("inactive".parse::<TitleState>().unwrap(), TitleState::Inactive);
        assert!("archived".parse::<TitleState>().is_err());
    }

    #[test]
    fn test_title_id_from_option_value() {
        assert_eq!(TitleId::from_string("42").unwrap(), TitleId(42));
        assert!(TitleId::from_string("").is_err());
    }
}
