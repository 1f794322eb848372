use std::collections::HashSet;

/// One navigable (language, headword) → page mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub language: String,
    pub headword: String,
    pub filename: String,
}

impl ReferenceEntry {
    pub fn first_letter(&self) -> Option<char> {
        first_letter(&self.headword)
    }
}

/// Lower-cased first code point of `headword`
pub fn first_letter(headword: &str) -> Option<char> {
    headword.chars().next().and_then(|c| c.to_lowercase().next())
}

/// References and letters gathered while entry pages are rendered
#[derive(Debug, Default)]
pub struct ReferenceCollector {
    references: Vec<ReferenceEntry>,
    alphabet: HashSet<char>,
}

impl ReferenceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, language: &str, headword: &str, filename: &str) {
        if let Some(letter) = first_letter(headword) {
            self.alphabet.insert(letter);
        }
        self.references.push(ReferenceEntry {
            language: language.to_string(),
            headword: headword.to_string(),
            filename: filename.to_string(),
        });
    }

    /// Take over everything `other` gathered
    pub fn merge(&mut self, other: ReferenceCollector) {
        self.references.extend(other.references);
        self.alphabet.extend(other.alphabet);
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Sort references by case-folded headword and letters by code point
    pub fn freeze(self) -> ReferenceIndex {
        let mut references = self.references;
        references.sort_by_cached_key(|r| {
            (
                r.headword.to_lowercase(),
                r.headword.clone(),
                r.language.clone(),
                r.filename.clone(),
            )
        });

        let mut alphabet: Vec<char> = self.alphabet.into_iter().collect();
        alphabet.sort_unstable();

        ReferenceIndex {
            references,
            alphabet,
        }
    }
}

/// Frozen, sorted reference index
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    references: Vec<ReferenceEntry>,
    alphabet: Vec<char>,
}

impl ReferenceIndex {
    pub fn references(&self) -> &[ReferenceEntry] {
        &self.references
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// References of `language` whose headword starts with `letter`, in sorted order
    pub fn matching<'a>(
        &'a self,
        language: &'a str,
        letter: char,
    ) -> impl Iterator<Item = &'a ReferenceEntry> + 'a {
        self.references
            .iter()
            .filter(move |r| r.language == language && r.first_letter() == Some(letter))
    }
}
