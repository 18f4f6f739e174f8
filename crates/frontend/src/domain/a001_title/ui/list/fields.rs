use crate::shared::form::{FieldConfig, FieldDescriptor, FieldStrategy, FieldStyle, Hint, SelectOption};
use crate::shared::i18n::Translate;

pub const NAME: &str = "name";
pub const STATE: &str = "state";
pub const FROM_DATE: &str = "fromDate";
pub const TO_DATE: &str = "toDate";

const PREFIX: &str = "views.addonstitlelist.filter.form";

fn field(name: &'static str, strategy: FieldStrategy, placeholder: String) -> FieldConfig {
    FieldConfig {
        name: Some(name),
        style: Some(FieldStyle::OutlinePrimary),
        placeholder: Some(placeholder),
        ..FieldConfig::new(strategy)
    }
}

/// Поля формы фильтра: наименование, состояние, даты "с" и "по"
pub fn filter_form_fields(t: &dyn Translate) -> Vec<FieldDescriptor> {
    let tr = |key: &str| t.translate(&format!("{PREFIX}.{key}"));

    let reference_name = FieldDescriptor {
        class_name: None,
        field: field(NAME, FieldStrategy::Text, tr("referencename.placeholder")),
        is_hint_reserved: true,
        hint: Some(Hint::plain(tr("referencename.hint"))),
    };

    let mut state_field = field(STATE, FieldStrategy::Select, tr("state.placeholder"));
    state_field.options = vec![
        SelectOption {
            label: tr("state.active"),
            value: "active".to_string(),
        },
        SelectOption {
            label: tr("state.inactive"),
            value: "inactive".to_string(),
        },
    ];
    let state = FieldDescriptor {
        class_name: None,
        field: state_field,
        is_hint_reserved: true,
        hint: Some(Hint::dotted(tr("state.hint"))),
    };

    let from_date = FieldDescriptor {
        class_name: None,
        field: field(FROM_DATE, FieldStrategy::Date, tr("fromdate.placeholder")),
        is_hint_reserved: true,
        hint: Some(Hint::plain(tr("fromdate.hint"))),
    };

    let to_date = FieldDescriptor {
        class_name: None,
        field: field(TO_DATE, FieldStrategy::Date, tr("todate.placeholder")),
        is_hint_reserved: true,
        hint: Some(Hint::plain(tr("todate.hint"))),
    };

    vec![reference_name, state, from_date, to_date]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::{Lang, Translator};

    #[test]
    fn test_filter_form_fields() {
        let fields = filter_form_fields(&Translator::new(Lang::En));
        let names: Vec<_> = fields.iter().map(|f| f.field.name).collect();
        assert_eq!(names, vec![Some(NAME), Some(STATE), Some(FROM_DATE), Some(TO_DATE)]);

        let state = &fields[1];
        assert_eq!(state.field.strategy, FieldStrategy::Select);
        let values: Vec<_> = state.field.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["active", "inactive"]);
        assert_eq!(state.field.options[0].label, "Active");
        assert_eq!(fields[2].field.strategy, FieldStrategy::Date);
    }

    #[test]
    fn test_filter_form_fields_are_localized() {
        let fields = filter_form_fields(&Translator::new(Lang::Es));
        assert_eq!(fields[0].field.placeholder.as_deref(), Some("Nombre de referencia"));
        assert_eq!(fields[3].hint_text(), Some("Creado en o antes de"));
    }
}
