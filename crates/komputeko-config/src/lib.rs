use std::env;

use serde::{Deserialize, Serialize};

use self::extract::ExtractConfig;
use self::render::RenderConfig;

pub mod extract;
pub mod render;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config::default().with_env()
    }

    /// Apply `KOMPUTEKO_*` environment overrides on top of the current values
    pub fn with_env(mut self) -> Self {
        if let Some(normalize) = env_flag("KOMPUTEKO_NORMALIZE_UNICODE") {
            self.extract.normalize_unicode = normalize;
        }

        if let Some(indent) = env::var("KOMPUTEKO_JSON_INDENT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.extract.json_indent = indent;
        }

        if let Some(skip) = env_flag("KOMPUTEKO_SKIP_HEADER") {
            self.render.skip_header_entry = skip;
        }

        if let Some(escape) = env::var("KOMPUTEKO_FILENAME_ESCAPE")
            .ok()
            .and_then(|v| v.chars().next())
        {
            self.render.filename_escape = escape;
        }

        self
    }
}

fn env_flag(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.extract.normalize_unicode);
        assert_eq!(config.extract.json_indent, 1);
        assert!(config.render.skip_header_entry);
        assert_eq!(config.render.filename_escape, 'X');
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"render": {"filename_escape": "_"}}"#).unwrap();
        assert_eq!(config.render.filename_escape, '_');
        assert!(config.render.skip_header_entry);
        assert!(config.extract.normalize_unicode);
    }
}
