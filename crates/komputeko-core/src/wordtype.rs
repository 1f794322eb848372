use crate::fields::Fields;
use crate::patterns::trailing_wordtype;

pub const WORDTYPE_FIELD: usize = 2;
pub const ENGLISH_GLOSS_FIELD: usize = 3;

/// Resolve the entry's word type.
///
/// An explicit column 2 wins. Otherwise a whitelisted tag at the end of the
/// English gloss is used and removed from that column, so the English rule
/// never sees it. No tag at all leaves the word type empty.
pub fn classify(fields: &mut Fields) -> String {
    let explicit = fields.get(WORDTYPE_FIELD);
    if !explicit.is_empty() {
        return explicit.to_string();
    }

    match trailing_wordtype(fields.get(ENGLISH_GLOSS_FIELD)) {
        Some((wordtype, stripped)) => {
            fields.set(ENGLISH_GLOSS_FIELD, stripped);
            wordtype.to_string()
        }
        None => String::new(),
    }
}
