//! Command-line front end for the webstash engine.
//!
//! Three subcommands mirror the engine's public operations: resolve the
//! output root, map a page's outbound links, and batch-save pages. Results
//! print as JSON on stdout so callers can script against them.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use stash_engine::{
    batch_save, map_links, BatchInput, FetchSettings, Fetcher, LinkFilter, OutputPathResolver,
    ReqwestFetcher, DEFAULT_CONCURRENCY,
};

#[derive(Parser)]
#[command(
    name = "webstash",
    version,
    about = "Save web pages as markdown with a per-domain index"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved output root, creating it if missing.
    OutputPath,
    /// List a page's eligible outbound links as JSON.
    MapLinks {
        /// Page to scan.
        url: String,
        /// Excluded domain substrings (replaces the default list).
        #[arg(long = "exclude", value_name = "FRAGMENT")]
        exclude: Vec<String>,
    },
    /// Fetch, convert, and save a batch of pages, then rebuild the index.
    BatchSave {
        /// URLs to save.
        urls: Vec<String>,
        /// Read the batch as JSON from a file ("-" for stdin); accepts
        /// either a URL array or a map-links result.
        #[arg(long, conflicts_with = "urls")]
        input: Option<PathBuf>,
        /// Output root override (else OUTPUT_PATH, else ./output).
        #[arg(long)]
        path: Option<PathBuf>,
        /// Maximum pages fetched in parallel.
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _ = stash_logging::initialize_for_app(cli.verbose);
    let resolver = OutputPathResolver::from_env();

    match cli.command {
        Command::OutputPath => {
            let path = resolver.resolve()?;
            println!("{}", path.display());
        }
        Command::MapLinks { url, exclude } => {
            let fetcher = ReqwestFetcher::new(FetchSettings::default())?;
            let filter = if exclude.is_empty() {
                LinkFilter::default()
            } else {
                LinkFilter::new(exclude)
            };
            let result = map_links(&fetcher, &filter, &url).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::BatchSave {
            urls,
            input,
            path,
            concurrency,
        } => {
            let batch = match read_batch_input(urls, input)? {
                Ok(batch) => batch,
                Err(err) => {
                    // A bad input shape is data for the caller, not a crash,
                    // and no files are touched.
                    let rejected =
                        serde_json::json!({ "status": "error", "error": err.to_string() });
                    println!("{}", serde_json::to_string_pretty(&rejected)?);
                    return Ok(());
                }
            };

            let root = match path {
                Some(p) => {
                    stash_engine::ensure_output_dir(&p)?;
                    p.canonicalize()
                        .with_context(|| format!("resolving {}", p.display()))?
                }
                None => resolver.resolve()?,
            };

            debug!("batch output root: {}", root.display());
            let fetcher: Arc<dyn Fetcher> = Arc::new(ReqwestFetcher::new(FetchSettings::default())?);
            let result = batch_save(fetcher, batch, &root, concurrency).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

/// Builds the batch input from positional URLs or a JSON document.
///
/// The outer `Result` is for IO problems; the inner one carries the typed
/// input-shape rejection that gets reported as a tagged JSON error.
fn read_batch_input(
    urls: Vec<String>,
    input: Option<PathBuf>,
) -> Result<std::result::Result<BatchInput, stash_engine::InputError>> {
    if let Some(path) = input {
        let raw = if path.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        } else {
            std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?
        };
        let value: serde_json::Value =
            serde_json::from_str(&raw).context("input is not valid JSON")?;
        Ok(BatchInput::from_value(value))
    } else if urls.is_empty() {
        bail!("no URLs given; pass URLs or --input");
    } else {
        Ok(Ok(BatchInput::Urls(urls)))
    }
}
