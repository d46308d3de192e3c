use anyhow::Context;
use clap::Parser;
use mercari_cli::JsonScanArgs;
use mercari_extract::{render_finding, scan_json_file};

fn main() -> anyhow::Result<()> {
    let args = JsonScanArgs::parse();
    let config = mercari_core::load_app_config()?;
    mercari_cli::init_tracing(&config.log_level)?;

    let findings = scan_json_file(&args.data_path, args.sample_size(&config))
        .with_context(|| format!("failed to scan {}", args.data_path.display()))?;

    for finding in &findings {
        println!("{}", render_finding(finding)?);
    }
    tracing::info!(
        path = %args.data_path.display(),
        count = findings.len(),
        "scan complete"
    );
    Ok(())
}
