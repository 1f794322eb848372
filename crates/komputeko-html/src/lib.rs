pub mod entry_page;
pub mod error;
pub mod filename;
pub mod generator;
pub mod index_page;
pub mod references;
pub mod template;

pub use error::RenderError;
pub use generator::{PageFailure, PageUnit, RenderReport, SiteGenerator};
pub use references::{ReferenceCollector, ReferenceEntry, ReferenceIndex};
pub use template::{Page, PageTemplate};
