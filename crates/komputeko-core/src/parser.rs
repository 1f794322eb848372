use std::io::BufRead;

use komputeko_config::extract::ExtractConfig;
use komputeko_types::{Entry, Terminaro};

use crate::entry::assemble_entry;
use crate::error::ExtractError;
use crate::fields::Fields;
use crate::language::{LanguageRule, default_rules};
use crate::preprocess::{NfcPreprocessor, Preprocessor, RawPreprocessor};

/// Drives the field splitter and entry assembler over a whole export
pub struct RecordParser {
    rules: Vec<Box<dyn LanguageRule>>,
    preprocessor: Box<dyn Preprocessor>,
}

impl RecordParser {
    pub fn new(config: &ExtractConfig) -> Self {
        let preprocessor: Box<dyn Preprocessor> = if config.normalize_unicode {
            Box::new(NfcPreprocessor)
        } else {
            Box::new(RawPreprocessor)
        };

        Self {
            rules: default_rules(),
            preprocessor,
        }
    }

    /// Parse a single line. `line_number` is 1-based and only used for errors.
    pub fn parse_line(&self, line: &str, line_number: usize) -> Result<Entry, ExtractError> {
        let line = self.preprocessor.process(line);
        let fields = Fields::split(&line, line_number)?;
        Ok(assemble_entry(fields, &self.rules))
    }

    /// Parse every line of `reader`, stopping at the first malformed one
    pub fn parse_reader(&self, reader: impl BufRead) -> Result<Terminaro, ExtractError> {
        let mut terminaro = Terminaro::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let entry = self.parse_line(&line, index + 1)?;
            tracing::trace!("line {}: {} translations", index + 1, entry.translations.len());
            terminaro.push(entry);
        }

        tracing::info!("Extracted {} entries", terminaro.len());
        Ok(terminaro)
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new(&ExtractConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cells: &[(usize, &str)]) -> String {
        let mut row = vec![""; 36];
        for (i, v) in cells {
            row[*i] = v;
        }
        row.join("\t")
    }

    #[test]
    fn test_parse_reader_keeps_order() {
        let input = format!(
            "{}\n{}\n{}",
            line(&[(3, "file"), (5, "dosiero")]),
            line(&[(3, "run (verbo)")]),
            line(&[(32, "Datei")]),
        );
        let terminaro = RecordParser::default()
            .parse_reader(input.as_bytes())
            .unwrap();
        assert_eq!(terminaro.len(), 3);
        assert_eq!(terminaro[0].translations[1].words[0].written, "dosiero");
        assert_eq!(terminaro[1].wordtype, "verbo");
        assert_eq!(terminaro[2].translations[0].language, "de");
    }

    #[test]
    fn test_malformed_line_aborts() {
        let short = vec![""; 35].join("\t");
        let input = format!("{}\n{}\n{}\n", line(&[(3, "file")]), short, line(&[(3, "run")]));
        let err = RecordParser::default()
            .parse_reader(input.as_bytes())
            .unwrap_err();
        match err {
            ExtractError::InputFormat {
                line_number,
                field_count,
                line,
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(field_count, 35);
                assert_eq!(line, short);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let raw = line(&[
            (3, "hard disk (HD, disk)"),
            (5, "disko /j"),
            (6, "PIV"),
            (15, "de"),
            (16, "harde schijf"),
        ]);
        let parser = RecordParser::default();
        let a = parser.parse_line(&raw, 1).unwrap();
        let b = parser.parse_line(&raw, 1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalization_toggle() {
        let raw = line(&[(5, "c\u{0302}evalo")]);
        let normalized = RecordParser::default().parse_line(&raw, 1).unwrap();
        assert_eq!(normalized.translations[0].words[0].written, "ĉevalo");

        let config = ExtractConfig {
            normalize_unicode: false,
            ..ExtractConfig::default()
        };
        let raw_entry = RecordParser::new(&config).parse_line(&raw, 1).unwrap();
        assert_eq!(raw_entry.translations[0].words[0].written, "c\u{0302}evalo");
    }
}
