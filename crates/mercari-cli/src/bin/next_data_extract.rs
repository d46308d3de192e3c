use anyhow::Context;
use clap::Parser;
use mercari_cli::NextDataExtractArgs;

fn main() -> anyhow::Result<()> {
    let args = NextDataExtractArgs::parse();
    let config = mercari_core::load_app_config()?;
    mercari_cli::init_tracing(&config.log_level)?;

    let marker = args.marker(&config);
    let chars = mercari_extract::extract_next_data_file(&args.html_path, &args.out_path, marker)
        .with_context(|| {
            format!(
                "failed to extract {marker} from {}",
                args.html_path.display()
            )
        })?;

    println!(
        "Extracted {chars} characters from {} to {}",
        args.html_path.display(),
        args.out_path.display()
    );
    Ok(())
}
