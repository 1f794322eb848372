use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use komputeko_config::render::RenderConfig;
use komputeko_types::Entry;

use crate::entry_page::render_entry;
use crate::error::RenderError;
use crate::index_page::{languages_of, render_letter_page, render_overview};
use crate::references::ReferenceCollector;
use crate::template::{Page, PageTemplate};

/// Which page a failure belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageUnit {
    Entry {
        position: usize,
        headword: Option<String>,
    },
    LetterIndex {
        language: String,
        letter: char,
    },
    Overview,
}

impl fmt::Display for PageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageUnit::Entry {
                position,
                headword: Some(headword),
            } => write!(f, "entry #{position} ({headword})"),
            PageUnit::Entry { position, .. } => write!(f, "entry #{position}"),
            PageUnit::LetterIndex { language, letter } => {
                write!(f, "index {language}:{letter}")
            }
            PageUnit::Overview => f.write_str("overview index"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageFailure {
    pub unit: PageUnit,
    pub message: String,
}

/// Outcome of one generation run
#[derive(Debug, Default)]
pub struct RenderReport {
    pub entry_pages: usize,
    pub index_pages: usize,
    pub failures: Vec<PageFailure>,
}

impl RenderReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(&mut self, unit: PageUnit, error: RenderError) {
        tracing::error!("Failed to write {}: {}", unit, error);
        self.failures.push(PageFailure {
            unit,
            message: error.to_string(),
        });
    }
}

/// Renders a record set into a directory of linked pages
pub struct SiteGenerator {
    template: PageTemplate,
    out_dir: PathBuf,
    config: RenderConfig,
}

impl SiteGenerator {
    pub fn new(template: PageTemplate, out_dir: impl Into<PathBuf>, config: RenderConfig) -> Self {
        Self {
            template,
            out_dir: out_dir.into(),
            config,
        }
    }

    /// Write entry pages, then one page per (language, letter), then `index.html`.
    /// Only a missing output directory stops the run; page failures land in the report.
    pub fn generate(&self, terminaro: &[Entry]) -> Result<RenderReport, RenderError> {
        fs::create_dir_all(&self.out_dir)?;

        let mut report = RenderReport::default();
        let mut collector = ReferenceCollector::new();
        let escape = self.config.filename_escape;
        let skip = usize::from(self.config.skip_header_entry);

        for (position, entry) in terminaro.iter().enumerate().skip(skip) {
            // A page only becomes linkable once it is on disk
            let mut gathered = ReferenceCollector::new();
            let result = render_entry(entry, escape, &mut gathered)
                .and_then(|page| self.write_page(&page));
            match result {
                Ok(()) => {
                    collector.merge(gathered);
                    report.entry_pages += 1;
                }
                Err(e) => {
                    let headword = entry.headword().map(|(_, w)| w.written.clone());
                    report.fail(PageUnit::Entry { position, headword }, e);
                }
            }
        }
        tracing::info!(
            "Wrote {} entry pages, {} references",
            report.entry_pages,
            collector.len()
        );

        let index = collector.freeze();
        let languages = languages_of(terminaro.first());
        tracing::debug!(
            "Languages: {:?}, alphabet: {} letters",
            languages,
            index.alphabet().len()
        );

        for language in &languages {
            for &letter in index.alphabet() {
                let page = render_letter_page(&index, language, letter, escape);
                match self.write_page(&page) {
                    Ok(()) => report.index_pages += 1,
                    Err(e) => report.fail(
                        PageUnit::LetterIndex {
                            language: language.clone(),
                            letter,
                        },
                        e,
                    ),
                }
            }
        }

        let overview = render_overview(&languages, index.alphabet(), escape);
        match self.write_page(&overview) {
            Ok(()) => report.index_pages += 1,
            Err(e) => report.fail(PageUnit::Overview, e),
        }

        tracing::info!(
            "Generation finished: {} entry pages, {} index pages, {} failures",
            report.entry_pages,
            report.index_pages,
            report.failures.len()
        );
        Ok(report)
    }

    fn write_page(&self, page: &Page) -> Result<(), RenderError> {
        let html = self.template.render(page)?;
        let path = self.out_dir.join(&page.filename);
        fs::write(&path, html)?;
        tracing::trace!("Wrote {}", path.display());
        Ok(())
    }
}
