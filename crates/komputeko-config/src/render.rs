use serde::{Deserialize, Serialize};

fn default_skip_header_entry() -> bool {
    true
}

fn default_filename_escape() -> char {
    'X'
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    /// First record is the export's column header row: used for the
    /// language list but not rendered as a page
    #[serde(default = "default_skip_header_entry")]
    pub skip_header_entry: bool,
    /// Stands in for `%` in generated filenames
    #[serde(default = "default_filename_escape")]
    pub filename_escape: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            skip_header_entry: default_skip_header_entry(),
            filename_escape: default_filename_escape(),
        }
    }
}
