use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod profile;


#[derive(Parser)]
#[command(name = "komputeko")]
#[command(about = "Convert the Komputeko term export to JSON and render it as static HTML")]
struct Args {
    /// JSON config file; environment overrides still apply
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract the tab-separated export into a JSON record set
    Extract {
        /// Tab-separated input file, 36 columns per line
        input: PathBuf,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a JSON record set into linked HTML pages
    Render {
        /// JSON record set produced by `extract`
        input: PathBuf,

        /// Handlebars page template with {{Title}} and {{{Body}}}
        #[arg(short, long, default_value = "page.tmpl")]
        template: PathBuf,

        /// Output directory
        #[arg(short = 'd', long = "dir", default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = profile::load_config(args.config.as_deref())?;

    match args.command {
        Command::Extract { input, output } => {
            commands::run_extract(&input, output.as_deref(), &config.extract)?;
        }
        Command::Render {
            input,
            template,
            out_dir,
        } => {
            let report = commands::run_render(&input, &template, &out_dir, &config.render)?;
            if !report.is_clean() {
                tracing::warn!(
                    "{} pages could not be written, see errors above",
                    report.failures.len()
                );
            }
        }
    }

    Ok(())
}
