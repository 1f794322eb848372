use serde::{Deserialize, Serialize};

fn default_normalize_unicode() -> bool {
    true
}

fn default_json_indent() -> usize {
    1
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ExtractConfig {
    /// NFC-normalize every input line before splitting
    #[serde(default = "default_normalize_unicode")]
    pub normalize_unicode: bool,
    /// Spaces per indent level in the JSON output
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            normalize_unicode: default_normalize_unicode(),
            json_indent: default_json_indent(),
        }
    }
}
