//! Display language and bilingual text.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Display language of the app.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-qa" => Some(Language::En),
            "ar" | "ar-qa" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Format a calendar date the way the locale's short date string reads.
    ///
    /// English renders as `M/D/YYYY`; Arabic renders as `D/M/YYYY` with
    /// Arabic-Indic digits.
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self {
            Language::En => format!("{}/{}/{}", date.month(), date.day(), date.year()),
            Language::Ar => {
                let latin = format!("{}/{}/{}", date.day(), date.month(), date.year());
                latin.chars().map(to_arabic_indic).collect()
            }
        }
    }
}

fn to_arabic_indic(c: char) -> char {
    match c.to_digit(10) {
        Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
        None => c,
    }
}

/// A string available in both app languages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// True when either language variant equals `value`.
    pub fn matches(&self, value: &str) -> bool {
        self.en == value || self.ar == value
    }
}
