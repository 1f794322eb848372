use handlebars::html_escape;
use komputeko_types::Entry;

use crate::error::RenderError;
use crate::filename::entry_filename;
use crate::references::ReferenceCollector;
use crate::template::Page;

/// Build the page of one entry and register every word it shows.
///
/// The page is named after the first word of the first translation. Every
/// word of every translation is recorded in `collector` against that name.
pub fn render_entry(
    entry: &Entry,
    escape: char,
    collector: &mut ReferenceCollector,
) -> Result<Page, RenderError> {
    let (language, headword) = entry.headword().ok_or(RenderError::EmptyEntry)?;
    let filename = entry_filename(language, &headword.written, escape);
    let title = format!("{}: {}", headword.written, entry.wordtype);

    let mut body = String::new();
    for translation in &entry.translations {
        let lang = html_escape(&translation.language);
        body.push_str(&format!(
            "<div class=\"word\"><div id=\"{lang}\" class=\"wordheader\">{lang}</div>\n<div class=\"definitions\">"
        ));

        for word in &translation.words {
            body.push_str("<div class=\"definition\">");
            body.push_str(&html_escape(&word.written));
            for source in &word.sources {
                body.push_str("<span class=\"source\">");
                body.push_str(&html_escape(source));
                body.push_str("</span>");
            }
            body.push_str("</div>");

            collector.register(&translation.language, &word.written, &filename);
        }

        body.push_str("</div></div>");
    }

    Ok(Page {
        filename,
        title,
        body,
    })
}
