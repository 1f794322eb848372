use handlebars::html_escape;
use komputeko_types::Entry;

use crate::filename::letter_page_filename;
use crate::references::ReferenceIndex;
use crate::template::Page;

pub const OVERVIEW_FILENAME: &str = "index.html";

/// Languages named by the first record, sorted.
/// Consecutive translations in the same language count once.
pub fn languages_of(first: Option<&Entry>) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for translation in first.map(|e| e.translations.as_slice()).unwrap_or_default() {
        if languages.last() != Some(&translation.language) {
            languages.push(translation.language.clone());
        }
    }
    languages.sort();
    languages.dedup();
    languages
}

/// Page listing every headword of `language` that starts with `letter`
pub fn render_letter_page(index: &ReferenceIndex, language: &str, letter: char, escape: char) -> Page {
    let mut body = String::from("<ul id=\"results\">");
    for reference in index.matching(language, letter) {
        body.push_str(&format!(
            "<li><a href=\"{}#{}\">{}</a></li>",
            html_escape(&reference.filename),
            html_escape(&reference.language),
            html_escape(&reference.headword),
        ));
    }
    body.push_str("</ul>");

    Page {
        filename: letter_page_filename(language, letter, escape),
        title: format!("Index {language}: {letter}"),
        body,
    }
}

/// `index.html`: every language linked to each of its letter pages
pub fn render_overview(languages: &[String], alphabet: &[char], escape: char) -> Page {
    let mut body = String::from("<div id=\"languages\">\n");
    for language in languages {
        let lang = html_escape(language);
        body.push_str(&format!(
            "<div id=\"{lang}\"><span class=\"language\">{lang}: </span>\n"
        ));
        for letter in alphabet {
            body.push_str(&format!(
                "<a href=\"{}\">{}</a>\n",
                html_escape(&letter_page_filename(language, *letter, escape)),
                html_escape(&letter.to_string()),
            ));
        }
        body.push_str("</div>");
    }
    body.push_str("</div>");

    Page {
        filename: OVERVIEW_FILENAME.to_string(),
        title: "Index".to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::references::ReferenceCollector;
    use komputeko_types::{Translation, Word};

    fn index() -> ReferenceIndex {
        let mut collector = ReferenceCollector::new();
        collector.register("en", "mouse", "en_mouse.html");
        collector.register("en", "Monitor", "en_Monitor.html");
        collector.register("eo", "muso", "en_mouse.html");
        collector.register("en", "file", "en_file.html");
        collector.freeze()
    }

    #[test]
    fn test_languages_from_header_record() {
        let header = Entry {
            wordtype: "Vortspeco".to_string(),
            translations: vec![
                Translation::new("en", vec![Word::new("English")]),
                Translation::new("eo", vec![Word::new("Esperanto")]),
                Translation::new("de", vec![Word::new("Deutsch")]),
                Translation::new("de", vec![Word::new("again")]),
            ],
        };
        assert_eq!(languages_of(Some(&header)), vec!["de", "en", "eo"]);
        assert!(languages_of(None).is_empty());
    }

    #[test]
    fn test_letter_page_lists_only_matches() {
        let page = render_letter_page(&index(), "en", 'm', 'X');
        assert_eq!(page.filename, "index_en_109.html");
        assert_eq!(page.title, "Index en: m");
        assert_eq!(
            page.body,
            "<ul id=\"results\">\
             <li><a href=\"en_Monitor.html#en\">Monitor</a></li>\
             <li><a href=\"en_mouse.html#en\">mouse</a></li>\
             </ul>"
        );
    }

    #[test]
    fn test_empty_letter_page() {
        let page = render_letter_page(&index(), "eo", 'f', 'X');
        assert_eq!(page.body, "<ul id=\"results\"></ul>");
    }

    #[test]
    fn test_overview_links_every_letter() {
        let index = index();
        let languages = vec!["en".to_string(), "eo".to_string()];
        let page = render_overview(&languages, index.alphabet(), 'X');
        assert_eq!(page.filename, "index.html");
        assert!(page.body.contains("<div id=\"en\"><span class=\"language\">en: </span>\n"));
        assert!(page.body.contains("<a href=\"index_en_102.html\">f</a>\n"));
        assert!(page.body.contains("<a href=\"index_eo_109.html\">m</a>\n"));
        assert_eq!(page.body.matches("<a href=").count(), 4);
    }
}
