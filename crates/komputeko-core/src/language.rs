use std::ops::RangeInclusive;

use komputeko_types::{Translation, Word};

use crate::fields::Fields;
use crate::patterns::{leading_gloss, parenthetical_alternates, strip_slash_annotation};

/// Languages carried by the export, in column order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Esperanto,
    Dutch,
    French,
    German,
}

impl Language {
    /// ISO 639-1 code as written to the record set
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Esperanto => "eo",
            Language::Dutch => "nl",
            Language::French => "fr",
            Language::German => "de",
        }
    }
}

/// Extraction of one language's glosses from a split line
pub trait LanguageRule: Send + Sync {
    fn language(&self) -> Language;

    /// `None` when the line carries nothing for this language
    fn extract(&self, fields: &Fields) -> Option<Translation>;
}

/// English keeps alternates either in column 4 or in parentheses after the gloss
pub struct EnglishRule;

impl EnglishRule {
    const GLOSS: usize = 3;
    const ALTERNATE: usize = 4;
}

impl LanguageRule for EnglishRule {
    fn language(&self) -> Language {
        Language::English
    }

    fn extract(&self, fields: &Fields) -> Option<Translation> {
        let gloss = fields.get(Self::GLOSS);
        if gloss.is_empty() {
            return None;
        }

        let mut words = vec![Word::new(leading_gloss(gloss))];
        let alternate = fields.get(Self::ALTERNATE);
        if !alternate.is_empty() {
            words.push(Word::new(alternate));
        } else {
            words.extend(parenthetical_alternates(gloss).into_iter().map(Word::new));
        }

        Some(Translation::new(self.language().code(), words))
    }
}

/// How a headword cell is cleaned before it is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Headword {
    Verbatim,
    StripSlashAnnotation,
}

impl Headword {
    fn apply<'a>(&self, text: &'a str) -> &'a str {
        match self {
            Headword::Verbatim => text,
            Headword::StripSlashAnnotation => strip_slash_annotation(text),
        }
    }
}

/// Further sense of a headword: its own text column plus citation columns
#[derive(Debug, Clone)]
pub struct AlternateSense {
    pub text: usize,
    pub citations: RangeInclusive<usize>,
    pub trim_citations: bool,
}

/// Column offsets of one language in the export
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub language: Language,
    /// Appended to the primary text as `", annotation"`
    pub annotation: Option<usize>,
    pub primary: usize,
    pub headword: Headword,
    pub citations: RangeInclusive<usize>,
    pub alternates: Vec<AlternateSense>,
}

impl ColumnLayout {
    pub fn esperanto() -> Self {
        Self {
            language: Language::Esperanto,
            annotation: None,
            primary: 5,
            headword: Headword::StripSlashAnnotation,
            citations: 6..=9,
            alternates: vec![
                AlternateSense {
                    text: 10,
                    citations: 11..=12,
                    trim_citations: false,
                },
                AlternateSense {
                    text: 13,
                    citations: 14..=14,
                    trim_citations: false,
                },
            ],
        }
    }

    pub fn dutch() -> Self {
        Self::two_sense(Language::Dutch, 15, 18..=20)
    }

    pub fn french() -> Self {
        Self::two_sense(Language::French, 23, 26..=28)
    }

    pub fn german() -> Self {
        Self {
            language: Language::German,
            annotation: Some(31),
            primary: 32,
            headword: Headword::Verbatim,
            citations: 33..=33,
            alternates: vec![AlternateSense {
                text: 34,
                citations: 35..=35,
                trim_citations: true,
            }],
        }
    }

    // annotation, primary, (skipped column), citations, alternate, alternate citation
    fn two_sense(language: Language, annotation: usize, citations: RangeInclusive<usize>) -> Self {
        let alternate = citations.end() + 1;
        Self {
            language,
            annotation: Some(annotation),
            primary: annotation + 1,
            headword: Headword::Verbatim,
            citations,
            alternates: vec![AlternateSense {
                text: alternate,
                citations: alternate + 1..=alternate + 1,
                trim_citations: false,
            }],
        }
    }
}

impl LanguageRule for ColumnLayout {
    fn language(&self) -> Language {
        self.language
    }

    fn extract(&self, fields: &Fields) -> Option<Translation> {
        let primary = fields.get(self.primary);
        if primary.is_empty() {
            return None;
        }

        let mut written = self.headword.apply(primary).to_string();
        if let Some(annotation) = self.annotation.map(|i| fields.get(i)) {
            if !annotation.is_empty() {
                written.push_str(", ");
                written.push_str(annotation);
            }
        }

        let mut words = vec![Word::with_sources(
            written,
            fields.non_empty(self.citations.clone()),
        )];

        for sense in &self.alternates {
            let text = fields.get(sense.text);
            if text.is_empty() {
                continue;
            }
            let mut sources = fields.non_empty(sense.citations.clone());
            if sense.trim_citations {
                sources = sources
                    .into_iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            words.push(Word::with_sources(self.headword.apply(text), sources));
        }

        Some(Translation::new(self.language.code(), words))
    }
}

/// All rules in the export's column order
pub fn default_rules() -> Vec<Box<dyn LanguageRule>> {
    vec![
        Box::new(EnglishRule),
        Box::new(ColumnLayout::esperanto()),
        Box::new(ColumnLayout::dutch()),
        Box::new(ColumnLayout::french()),
        Box::new(ColumnLayout::german()),
    ]
}
