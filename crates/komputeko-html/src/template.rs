use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::RenderError;

const PAGE: &str = "page";

/// A rendered page body waiting to be wrapped in the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub filename: String,
    pub title: String,
    /// Already escaped HTML
    pub body: String,
}

#[derive(Serialize)]
struct PageContext<'a> {
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Body")]
    body: &'a str,
}

/// The site-wide page layout. Templates see `{{Title}}` (escaped) and
/// `{{{Body}}}` (inserted as-is).
pub struct PageTemplate {
    registry: Handlebars<'static>,
}

impl PageTemplate {
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        tracing::info!("Loading page template: {}", path.display());
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::TemplateFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(&source)
    }

    pub fn from_source(source: &str) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(PAGE, source)?;
        Ok(Self { registry })
    }

    pub fn render(&self, page: &Page) -> Result<String, RenderError> {
        let context = PageContext {
            title: &page.title,
            body: &page.body,
        };
        Ok(self.registry.render(PAGE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, body: &str) -> Page {
        Page {
            filename: "x.html".to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_title_escaped_body_raw() {
        let template =
            PageTemplate::from_source("<title>{{Title}}</title><main>{{{Body}}}</main>").unwrap();
        let html = template
            .render(&page("a < b", "<div class=\"word\">x</div>"))
            .unwrap();
        assert_eq!(
            html,
            "<title>a &lt; b</title><main><div class=\"word\">x</div></main>"
        );
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        assert!(matches!(
            PageTemplate::from_source("{{#if Title}}unclosed"),
            Err(RenderError::Template(_))
        ));
    }

    #[test]
    fn test_missing_template_file() {
        let err = PageTemplate::from_file(Path::new("/nonexistent/page.hbs")).err();
        assert!(matches!(err, Some(RenderError::TemplateFile { .. })));
    }
}
