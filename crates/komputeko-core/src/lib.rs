pub mod entry;
pub mod error;
pub mod fields;
pub mod language;
pub mod parser;
pub mod patterns;
pub mod preprocess;
pub mod record_set;
pub mod wordtype;

pub use entry::assemble_entry;
pub use error::ExtractError;
pub use fields::{FIELD_COUNT, Fields};
pub use language::{Language, LanguageRule};
pub use parser::RecordParser;
