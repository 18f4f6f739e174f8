//! Фильтр списка титулов.
//!
//! Все заданные условия объединяются через И, исходный порядок сохраняется.

use crate::shared::date_utils::parse_form_date;
use chrono::NaiveDate;
use contracts::domain::a001_title::{TitleListItem, TitleState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFilter {
    #[default]
    Any,
    Active,
    Inactive,
}

impl StateFilter {
    /// Значение `<select>`: "" | "active" | "inactive"
    pub fn from_form(value: &str) -> StateFilter {
        match value.parse::<TitleState>() {
            Ok(TitleState::Active) => StateFilter::Active,
            Ok(TitleState::Inactive) => StateFilter::Inactive,
            Err(_) => StateFilter::Any,
        }
    }

    fn accepts(&self, state: TitleState) -> bool {
        match self {
            StateFilter::Any => true,
            StateFilter::Active => state == TitleState::Active,
            StateFilter::Inactive => state == TitleState::Inactive,
        }
    }
}

/// Сырые значения формы фильтра
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub name: String,
    pub state: String,
    pub from_date: String,
    pub to_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleFilter {
    pub name: String,
    pub state: StateFilter,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl TitleFilter {
    /// Разобрать форму. Неразборчивая дата - граница не задана
    pub fn from_form(form: &FilterForm) -> TitleFilter {
        TitleFilter {
            name: form.name.clone(),
            state: StateFilter::from_form(&form.state),
            from_date: date_bound(&form.from_date),
            to_date: date_bound(&form.to_date),
        }
    }

    pub fn matches(&self, item: &TitleListItem) -> bool {
        self.matches_name(item)
            && self.state.accepts(item.is_active)
            && self.matches_dates(item)
    }

    fn matches_name(&self, item: &TitleListItem) -> bool {
        if self.name.is_empty() {
            return true;
        }
        let needle = self.name.to_lowercase();
        item.names().any(|name| name.to_lowercase().contains(&needle))
    }

    /// Без даты создания титул проходит любые границы
    fn matches_dates(&self, item: &TitleListItem) -> bool {
        let Some(created) = item.created_on() else {
            return true;
        };
        self.from_date.map_or(true, |from| created >= from)
            && self.to_date.map_or(true, |to| created <= to)
    }
}

fn date_bound(value: &str) -> Option<NaiveDate> {
    match parse_form_date(value) {
        Ok(date) => date,
        Err(e) => {
            log::warn!("title filter: {}", e);
            None
        }
    }
}

/// Отфильтровать снимок; сам снимок не меняется
pub fn apply_filter(items: &[TitleListItem], filter: Option<&TitleFilter>) -> Vec<TitleListItem> {
    match filter {
        None => items.to_vec(),
        Some(filter) => items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_title::{TitleId, TitleReference};

    fn title(id: i64, name: &str, state: TitleState, created: Option<(i32, u32, u32)>) -> TitleListItem {
        TitleListItem {
            title_id: TitleId(id),
            default_title: name.to_string(),
            is_active: state,
            created_at: created.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 15, 30, 0).unwrap()),
            title_collection: vec![],
        }
    }

    fn ids(items: &[TitleListItem]) -> Vec<i64> {
        items.iter().map(|item| item.title_id.0).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn name_filter(name: &str) -> TitleFilter {
        TitleFilter {
            name: name.to_string(),
            ..TitleFilter::default()
        }
    }

    #[test]
    fn test_no_filter_returns_snapshot() {
        let items = vec![
            title(1, "Alpha", TitleState::Active, None),
            title(2, "Beta", TitleState::Inactive, None),
        ];
        assert_eq!(apply_filter(&items, None), items);
    }

    #[test]
    fn test_name_filter_is_case_insensitive_and_keeps_order() {
        let items = vec![
            title(1, "Alpha", TitleState::Active, Some((2023, 1, 1))),
            title(2, "Gamma", TitleState::Inactive, None),
            title(3, "Beet", TitleState::Active, None),
        ];
        let result = apply_filter(&items, Some(&name_filter("A")));
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn test_name_filter_matches_any_translation() {
        let mut cheese = title(1, "Extra cheese", TitleState::Active, None);
        cheese.title_collection.push(TitleReference {
            lang: "es".to_string(),
            r#ref: "Queso extra".to_string(),
        });
        let items = vec![cheese, title(2, "Fries", TitleState::Active, None)];

        assert_eq!(ids(&apply_filter(&items, Some(&name_filter("queso")))), vec![1]);
        assert!(apply_filter(&items, Some(&name_filter("salsa"))).is_empty());
    }

    #[test]
    fn test_state_filter() {
        let items = vec![
            title(1, "Alpha", TitleState::Active, None),
            title(2, "Gamma", TitleState::Inactive, None),
        ];
        let filter = TitleFilter {
            state: StateFilter::Inactive,
            ..TitleFilter::default()
        };
        assert_eq!(ids(&apply_filter(&items, Some(&filter))), vec![2]);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let items = vec![
            title(1, "Jan 1", TitleState::Active, Some((2023, 1, 1))),
            title(2, "Jan 5", TitleState::Active, Some((2023, 1, 5))),
            title(3, "Jan 9", TitleState::Active, Some((2023, 1, 9))),
        ];
        let filter = TitleFilter {
            from_date: date(2023, 1, 1),
            to_date: date(2023, 1, 5),
            ..TitleFilter::default()
        };
        assert_eq!(ids(&apply_filter(&items, Some(&filter))), vec![1, 2]);
    }

    #[test]
    fn test_missing_created_at_passes_any_bounds() {
        let items = vec![
            title(1, "Undated", TitleState::Active, None),
            title(2, "Old", TitleState::Active, Some((2001, 6, 1))),
        ];
        for (from, to) in [
            (date(2020, 1, 1), None),
            (None, date(1999, 1, 1)),
            (date(2030, 1, 1), date(2000, 1, 1)),
        ] {
            let filter = TitleFilter {
                from_date: from,
                to_date: to,
                ..TitleFilter::default()
            };
            assert_eq!(ids(&apply_filter(&items, Some(&filter))), vec![1]);
        }
    }

    #[test]
    fn test_predicates_are_combined() {
        let items = vec![
            title(1, "Alpha", TitleState::Active, Some((2023, 3, 1))),
            title(2, "Alpaca", TitleState::Inactive, Some((2023, 3, 1))),
            title(3, "Alpine", TitleState::Active, Some((2022, 3, 1))),
        ];
        let filter = TitleFilter {
            name: "alp".to_string(),
            state: StateFilter::Active,
            from_date: date(2023, 1, 1),
            to_date: None,
        };
        assert_eq!(ids(&apply_filter(&items, Some(&filter))), vec![1]);
    }

    #[test]
    fn test_from_form() {
        let form = FilterForm {
            name: "pizza".to_string(),
            state: "active".to_string(),
            from_date: "2024-01-01".to_string(),
            to_date: "not a date".to_string(),
        };
        let filter = TitleFilter::from_form(&form);
        assert_eq!(filter.name, "pizza");
        assert_eq!(filter.state, StateFilter::Active);
        assert_eq!(filter.from_date, date(2024, 1, 1));
        assert_eq!(filter.to_date, None);
    }

    #[test]
    fn test_empty_form_is_unconstrained() {
        let filter = TitleFilter::from_form(&FilterForm::default());
        assert_eq!(filter, TitleFilter::default());
    }
}
