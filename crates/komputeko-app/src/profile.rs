use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use komputeko_config::Config;

/// Load config from `path` if given, otherwise defaults. Environment overrides win either way.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            let config: Config = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("invalid config {}", path.display()))?;
            config.with_env()
        }
        None => Config::new(),
    };

    tracing::debug!(
        "normalize_unicode={}, json_indent={}, skip_header_entry={}, filename_escape={:?}",
        config.extract.normalize_unicode,
        config.extract.json_indent,
        config.render.skip_header_entry,
        config.render.filename_escape
    );
    Ok(config)
}
