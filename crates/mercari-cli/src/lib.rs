//! Argument definitions and startup shared by the extraction binaries.
//!
//! Each binary parses its own argument struct, loads [`AppConfig`] from the
//! environment, and lets command-line flags override the configured values.

use std::path::PathBuf;

use clap::Parser;
use mercari_core::AppConfig;
use mercari_extract::BrandOptions;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `log_level` is used. Output goes to
/// stderr so stdout carries only command output.
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter directive.
pub fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[derive(Debug, Parser)]
#[command(name = "next-data-extract")]
#[command(about = "Copy the embedded __NEXT_DATA__ JSON out of a saved page")]
pub struct NextDataExtractArgs {
    /// Saved HTML snapshot to read
    #[arg(default_value = "mercari_page.html")]
    pub html_path: PathBuf,

    /// Where to write the raw JSON payload
    #[arg(default_value = "mercari_data.json")]
    pub out_path: PathBuf,

    /// Marker identifying the data script (defaults to `MERCARI_NEXT_DATA_MARKER`)
    #[arg(long)]
    pub marker: Option<String>,
}

impl NextDataExtractArgs {
    #[must_use]
    pub fn marker<'a>(&'a self, config: &'a AppConfig) -> &'a str {
        self.marker.as_deref().unwrap_or(config.next_data_marker.as_str())
    }
}

#[derive(Debug, Parser)]
#[command(name = "item-parse")]
#[command(about = "Parse listing item cards from a saved page into JSON records")]
pub struct ItemParseArgs {
    /// Saved HTML snapshot to read
    #[arg(default_value = "mercari_page.html")]
    pub input_path: PathBuf,

    /// Where to write the item records
    #[arg(default_value = "mercari_items.json")]
    pub output_path: PathBuf,
}

#[derive(Debug, Parser)]
#[command(name = "json-scan")]
#[command(about = "Report where product-like arrays live in a JSON document")]
pub struct JsonScanArgs {
    /// JSON document to scan
    #[arg(default_value = "mercari_data.json")]
    pub data_path: PathBuf,

    /// Elements printed per finding (defaults to `MERCARI_SCAN_SAMPLE_SIZE`)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub sample_size: Option<u64>,
}

impl JsonScanArgs {
    #[must_use]
    pub fn sample_size(&self, config: &AppConfig) -> usize {
        self.sample_size
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(config.scan_sample_size)
    }
}

#[derive(Debug, Parser)]
#[command(name = "brand-extract")]
#[command(about = "Extract brand dataset entries from item-cell list markup")]
pub struct BrandExtractArgs {
    /// Input HTML file path
    pub html_path: PathBuf,

    /// Destination JSON file path
    pub output_path: PathBuf,

    /// Base URL used to resolve item links (defaults to `MERCARI_BRAND_BASE_URL`)
    #[arg(long)]
    pub base_url: Option<Url>,

    /// Maximum number of items to keep
    #[arg(long)]
    pub limit: Option<usize>,

    /// JSON indentation width
    #[arg(long, default_value_t = 2)]
    pub indent: usize,
}

impl BrandExtractArgs {
    /// Resolve flags against the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no `--base-url` was given and the configured base
    /// URL does not parse.
    pub fn options(&self, config: &AppConfig) -> anyhow::Result<BrandOptions> {
        let base_url = match &self.base_url {
            Some(url) => url.clone(),
            None => Url::parse(&config.brand_base_url)?,
        };
        Ok(BrandOptions {
            base_url: Some(base_url),
            limit: self.limit,
            indent: self.indent,
        })
    }
}
