//! Локализация административной консоли
//!
//! - `Lang` - доступные языки (en / es)
//! - `Translate` - узкий интерфейс, который получают построители полей
//! - `Translator` - реализация на статических словарях (en.rs, es.rs)

mod en;
mod es;

use once_cell::sync::Lazy;
use std::collections::HashMap;

type Dictionary = HashMap<&'static str, &'static str>;

static EN: Lazy<Dictionary> = Lazy::new(|| {
    // Базовый словарь, поверх него - строки экранов
    let mut dict: Dictionary = en::BASE.iter().copied().collect();
    dict.extend(en::VIEWS.iter().copied());
    dict
});

static ES: Lazy<Dictionary> = Lazy::new(|| es::ALL.iter().copied().collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Es];

    /// Код языка, совпадает с `TitleReference::lang`
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Название языка для переключателя
    pub fn language(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        Lang::ALL.into_iter().find(|lang| lang.code() == code)
    }

    fn dictionary(&self) -> &'static Dictionary {
        match self {
            Lang::En => &EN,
            Lang::Es => &ES,
        }
    }
}

pub trait Translate {
    fn lang(&self) -> Lang;

    fn translate(&self, key: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    lang: Lang,
}

impl Translator {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }
}

impl Translate for Translator {
    fn lang(&self) -> Lang {
        self.lang
    }

    /// Нет ключа в словаре языка - английский словарь, затем сам ключ
    fn translate(&self, key: &str) -> String {
        self.lang
            .dictionary()
            .get(key)
            .or_else(|| EN.get(key))
            .map(|text| text.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}
