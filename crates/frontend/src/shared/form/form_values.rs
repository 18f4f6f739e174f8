use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// Правило проверки поля: ключ сообщения об ошибке или `None`
pub type Rule = fn(&FormValues) -> Option<&'static str>;

/// FormValues - значения формы по именам полей, правила проверки и ошибки.
/// Коллекции продукта записываются сюда и отсюда же уходят при отправке формы.
#[derive(Clone, Default)]
pub struct FormValues {
    values: HashMap<String, Value>,
    errors: HashMap<String, &'static str>,
    rules: HashMap<String, Rule>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Зарегистрировать правило проверки поля
    pub fn with_rule(mut self, field: &str, rule: Rule) -> Self {
        self.rules.insert(field.to_string(), rule);
        self
    }

    pub fn get_value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn get_bool(&self, field: &str) -> bool {
        self.values
            .get(field)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Записать значение без проверки (как `setValue` без `shouldValidate`)
    pub fn set_value(&mut self, field: &str, value: Value) {
        self.values.insert(field.to_string(), value);
    }

    /// Проверить поле по его правилу. Возвращает true, если ошибок нет
    pub fn trigger(&mut self, field: &str) -> bool {
        let outcome = self.rules.get(field).and_then(|rule| rule(self));
        match outcome {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
                false
            }
            None => {
                self.errors.remove(field);
                true
            }
        }
    }

    /// Проверить все поля, для которых есть правила
    pub fn trigger_all(&mut self) -> bool {
        let fields: Vec<String> = self.rules.keys().cloned().collect();
        fields
            .iter()
            .fold(true, |valid, field| self.trigger(field) && valid)
    }

    /// Ключ сообщения об ошибке поля
    pub fn error(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Собрать типизированные данные формы
    pub fn to_data<T: DeserializeOwned>(&self) -> Result<T, String> {
        let object: Map<String, Value> = self
            .values
            .iter()
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect();
        serde_json::from_value(Value::Object(object)).map_err(|e| format!("{e}"))
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}
