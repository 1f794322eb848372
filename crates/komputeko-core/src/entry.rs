use komputeko_types::Entry;

use crate::fields::Fields;
use crate::language::LanguageRule;
use crate::wordtype::classify;

/// Compose one entry from a split line. Rules run in the order given and
/// languages without data are skipped.
pub fn assemble_entry(mut fields: Fields, rules: &[Box<dyn LanguageRule>]) -> Entry {
    let wordtype = classify(&mut fields);
    let translations = rules
        .iter()
        .filter_map(|rule| rule.extract(&fields))
        .collect();

    Entry {
        wordtype,
        translations,
    }
}
