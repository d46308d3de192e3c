/// Runtime settings shared by the extraction utilities.
///
/// Every field has a default, so an empty environment yields a usable config.
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Literal that identifies the embedded-data `<script>` element.
    pub next_data_marker: String,
    /// Number of leading array elements printed with each scan finding.
    pub scan_sample_size: usize,
    /// Base used to resolve relative item links in brand datasets.
    pub brand_base_url: String,
}
