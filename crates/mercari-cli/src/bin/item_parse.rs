use anyhow::Context;
use clap::Parser;
use mercari_cli::ItemParseArgs;

fn main() -> anyhow::Result<()> {
    let args = ItemParseArgs::parse();
    let config = mercari_core::load_app_config()?;
    mercari_cli::init_tracing(&config.log_level)?;

    let count = mercari_extract::parse_items_file(&args.input_path, &args.output_path)
        .with_context(|| format!("failed to parse items from {}", args.input_path.display()))?;

    println!("Extracted {count} items -> {}", args.output_path.display());
    Ok(())
}
