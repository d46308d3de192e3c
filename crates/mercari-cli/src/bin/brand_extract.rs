use anyhow::Context;
use clap::Parser;
use mercari_cli::BrandExtractArgs;

fn main() -> anyhow::Result<()> {
    let args = BrandExtractArgs::parse();
    let config = mercari_core::load_app_config()?;
    mercari_cli::init_tracing(&config.log_level)?;

    let options = args.options(&config)?;
    let count = mercari_extract::extract_brand_file(&args.html_path, &args.output_path, &options)
        .with_context(|| {
            format!(
                "failed to extract brand items from {}",
                args.html_path.display()
            )
        })?;

    println!("Extracted {count} items -> {}", args.output_path.display());
    Ok(())
}
