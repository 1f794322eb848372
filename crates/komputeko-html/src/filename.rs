use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything but `A-Za-z0-9-_.~` is escaped
const FILENAME_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode `text` and swap every `%` for `escape`
pub fn escape_component(text: &str, escape: char) -> String {
    utf8_percent_encode(text, FILENAME_SAFE)
        .to_string()
        .replace('%', escape.encode_utf8(&mut [0; 4]))
}

/// Page name of an entry: `<lang>_<headword>.html`, escaped
pub fn entry_filename(language: &str, headword: &str, escape: char) -> String {
    format!("{}.html", escape_component(&format!("{language}_{headword}"), escape))
}

/// Page name of a per-letter index; the letter is written as its code point
pub fn letter_page_filename(language: &str, letter: char, escape: char) -> String {
    format!(
        "index_{}_{}.html",
        escape_component(language, escape),
        letter as u32
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_headword() {
        assert_eq!(entry_filename("en", "file", 'X'), "en_file.html");
        assert_eq!(entry_filename("en", "e-mail_v1.0~", 'X'), "en_e-mail_v1.0~.html");
    }

    #[test]
    fn test_escapes_replace_percent() {
        assert_eq!(entry_filename("en", "hard disk", 'X'), "en_hardX20disk.html");
        assert_eq!(entry_filename("eo", "ĉevalo", 'X'), "eo_XC4X89evalo.html");
        assert_eq!(entry_filename("en", "a/b", '_'), "en_a_2Fb.html");
        assert!(!entry_filename("fr", "l'été", 'X').contains('%'));
    }

    #[test]
    fn test_filename_is_stable() {
        let first = entry_filename("de", "Datei, die", 'X');
        let second = entry_filename("de", "Datei, die", 'X');
        assert_eq!(first, second);
    }

    #[test]
    fn test_letter_page_filename() {
        assert_eq!(letter_page_filename("eo", 'a', 'X'), "index_eo_97.html");
        assert_eq!(letter_page_filename("eo", 'ĉ', 'X'), "index_eo_265.html");
    }
}
