//! Domain entities shared by the content endpoints and the UI.
//!
//! Field names serialize in camelCase so the JSON bodies match what the
//! site's front end has always consumed (`imageUrl`, `birthDate`, ...).

use serde::{Deserialize, Serialize};

/// Languages the site is published in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    /// BCP-47 tag of the Fluent bundle for this language.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Hi => "hi-IN",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    /// Parse a language tag by its primary subtag (`en`, `en-GB`, `hi-IN`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }
}

/// A piece of text available in every published language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub hi: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, hi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            hi: hi.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Hi => &self.hi,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwamiJi {
    pub id: String,
    pub name: Localized,
    pub title: Localized,
    pub bio: Localized,
    #[serde(default)]
    pub teachings: Vec<Teaching>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teaching {
    pub id: String,
    pub title: Localized,
    pub content: Localized,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: Localized,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Localized>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: Localized,
    pub description: Localized,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: Localized,
    pub description: Localized,
    pub date: String,
    pub location: Localized,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
