use serde::{Deserialize, Deserializer, Serialize};

/// Ordered list of entries, one per line of the source export
pub type Terminaro = Vec<Entry>;

/// One dictionary line's full multilingual record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Wordtype", default)]
    pub wordtype: String,
    /// Ordered en, eo, nl, fr, de; each language at most once
    #[serde(rename = "Translations", default, deserialize_with = "null_as_empty")]
    pub translations: Vec<Translation>,
}

/// All glosses of one entry in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Words", default, deserialize_with = "null_as_empty")]
    pub words: Vec<Word>,
}

/// One headword or gloss with its citation markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    #[serde(rename = "Written")]
    pub written: String,
    #[serde(rename = "Sources", default, deserialize_with = "null_as_empty")]
    pub sources: Vec<String>,
}

impl Entry {
    /// First word of the first translation, the one the entry page is named after
    pub fn headword(&self) -> Option<(&str, &Word)> {
        let first = self.translations.first()?;
        first.words.first().map(|w| (first.language.as_str(), w))
    }
}

impl Translation {
    pub fn new(language: impl Into<String>, words: Vec<Word>) -> Self {
        Self {
            language: language.into(),
            words,
        }
    }
}

impl Word {
    pub fn new(written: impl Into<String>) -> Self {
        Self {
            written: written.into(),
            sources: vec![],
        }
    }

    pub fn with_sources(written: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            written: written.into(),
            sources,
        }
    }
}

// Older exports write `null` for empty lists
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
