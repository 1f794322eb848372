use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;
use komputeko_config::extract::ExtractConfig;
use komputeko_config::render::RenderConfig;
use komputeko_core::RecordParser;
use komputeko_core::record_set::{read_json, write_json};
use komputeko_html::{PageTemplate, RenderReport, SiteGenerator};

/// Extract `input` into a JSON record set at `output`, or stdout.
/// Returns the number of entries written.
pub fn run_extract(
    input: &Path,
    output: Option<&Path>,
    config: &ExtractConfig,
) -> anyhow::Result<usize> {
    tracing::info!("Extracting: {}", input.display());
    let file =
        File::open(input).with_context(|| format!("failed to open input {}", input.display()))?;

    let terminaro = RecordParser::new(config)
        .parse_reader(BufReader::new(file))
        .with_context(|| format!("failed to extract {}", input.display()))?;

    match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?;
            write_json(&terminaro, BufWriter::new(out), config.json_indent)?;
            tracing::info!("Wrote {} entries to {}", terminaro.len(), path.display());
        }
        None => write_json(&terminaro, io::stdout().lock(), config.json_indent)?,
    }

    Ok(terminaro.len())
}

/// Render the record set at `input` into `out_dir` using the page template at `template`
pub fn run_render(
    input: &Path,
    template: &Path,
    out_dir: &Path,
    config: &RenderConfig,
) -> anyhow::Result<RenderReport> {
    let file =
        File::open(input).with_context(|| format!("failed to open input {}", input.display()))?;
    let terminaro = read_json(BufReader::new(file))
        .with_context(|| format!("failed to read record set {}", input.display()))?;
    tracing::info!("Loaded {} entries from {}", terminaro.len(), input.display());

    let template = PageTemplate::from_file(template)?;
    let generator = SiteGenerator::new(template, out_dir, config.clone());
    let report = generator
        .generate(&terminaro)
        .with_context(|| format!("failed to generate pages in {}", out_dir.display()))?;

    Ok(report)
}
