//! Декларативное описание полей формы.
//!
//! Построители (`fields.rs` в доменных модулях) собирают `FieldDescriptor`
//! из текущего состояния, компонент `FieldSet` только отображает.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStrategy {
    Text,
    Select,
    Checkbox,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    OutlinePrimary,
    OutlineDanger,
}

impl FieldStyle {
    pub fn class(&self) -> &'static str {
        match self {
            FieldStyle::OutlinePrimary => "field field--outline-primary",
            FieldStyle::OutlineDanger => "field field--outline-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Подсказка под полем
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub title: Option<String>,
    pub children: String,
    pub has_dots: bool,
}

impl Hint {
    /// Подсказка с многоточием и тем же текстом во всплывающей подсказке
    pub fn dotted(text: String) -> Self {
        Self {
            title: Some(text.clone()),
            children: text,
            has_dots: true,
        }
    }

    /// Подсказка без всплывающего текста
    pub fn plain(text: String) -> Self {
        Self {
            title: None,
            children: text,
            has_dots: true,
        }
    }
}

/// Кнопка справа от поля (например "Добавить" у выбора титула)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAction {
    pub title: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    /// Имя привязки: по нему представление находит обработчики поля
    pub name: Option<&'static str>,
    pub strategy: FieldStrategy,
    pub style: Option<FieldStyle>,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub options: Vec<SelectOption>,
    pub disabled: bool,
    pub after: Option<FieldAction>,
}

impl FieldConfig {
    pub fn new(strategy: FieldStrategy) -> Self {
        Self {
            name: None,
            strategy,
            style: None,
            placeholder: None,
            value: None,
            options: Vec::new(),
            disabled: false,
            after: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub class_name: Option<&'static str>,
    pub field: FieldConfig,
    pub is_hint_reserved: bool,
    pub hint: Option<Hint>,
}

impl FieldDescriptor {
    /// Заголовок группы: отключенное поле, текст выводится в подсказке
    pub fn title(text: String) -> Self {
        let mut field = FieldConfig::new(FieldStrategy::Text);
        field.disabled = true;
        Self {
            class_name: Some("field-set--title"),
            field,
            is_hint_reserved: true,
            hint: Some(Hint::dotted(text)),
        }
    }

    pub fn hint_text(&self) -> Option<&str> {
        self.hint.as_ref().map(|hint| hint.children.as_str())
    }
}
