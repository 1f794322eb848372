use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    fn process(&self, line: &str) -> String;
}

/// Composes decomposed letters (c + U+0302 → ĉ) so headwords index consistently
pub struct NfcPreprocessor;

impl Preprocessor for NfcPreprocessor {
    fn process(&self, line: &str) -> String {
        line.nfc().collect()
    }
}

/// Leaves lines untouched
pub struct RawPreprocessor;

impl Preprocessor for RawPreprocessor {
    fn process(&self, line: &str) -> String {
        line.to_string()
    }
}
