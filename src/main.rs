use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;

use mdcv::frontmatter;

#[derive(Parser)]
#[command(name = "mdcv", about = "Structured résumé extraction from Markdown")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a Markdown résumé and emit the merged model as JSON
    Extract {
        /// Markdown input file (front matter honored as overrides)
        file: PathBuf,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the document body to an HTML fragment
    Html {
        /// Markdown input file
        file: PathBuf,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { file, output } => {
            let extraction = run_extraction(&file)?;
            let json = serde_json::to_string_pretty(&extraction)
                .context("serializing extraction result")?;
            emit(output.as_deref(), &json)
        }
        Commands::Html { file, output } => {
            let raw = fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
            let body = match frontmatter::extract_frontmatter(&raw) {
                Ok(fm) => fm.body,
                Err(err) => {
                    warn!("ignoring front matter: {err}");
                    raw
                }
            };
            emit(output.as_deref(), &mdcv::render::render_document(&body))
        }
    }
}

fn run_extraction(file: &std::path::Path) -> anyhow::Result<mdcv::Extraction> {
    let raw = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let fm = match frontmatter::extract_frontmatter(&raw) {
        Ok(fm) => fm,
        Err(err) => {
            warn!("ignoring front matter: {err}");
            frontmatter::FrontmatterResult {
                overrides: None,
                body: raw,
            }
        }
    };
    Ok(mdcv::extract(&fm.body, fm.overrides.as_ref()))
}

fn emit(output: Option<&std::path::Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => fs::write(path, content).with_context(|| format!("writing {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
