//! CLI for generating the app icon set.
//!
//! Only built with the `cli` feature:
//!
//! ```sh
//! cargo run --features cli -- --out "Assets.xcassets/AppIcon.appiconset"
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use posture_icons::{PngExporter, VariantPipeline, catalog};

/// Generates the Posture app icon in light, dark, and tinted variants and
/// updates the asset catalog manifest.
#[derive(Debug, Parser)]
#[command(name = "posture-icons", version)]
struct Args {
    /// Output directory (the .appiconset folder).
    #[arg(long, default_value = "AppIcon.appiconset")]
    out: PathBuf,

    /// Square icon size in pixels.
    #[arg(long, default_value_t = 1024)]
    size: u32,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let pipeline = VariantPipeline::new(args.size, &args.out);

    let rendered = match pipeline.run(&PngExporter) {
        Ok(rendered) => rendered,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = catalog::write_contents_json(&args.out, args.size, &rendered) {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }

    log::info!(
        "generated {} icons in {}",
        rendered.len(),
        args.out.display()
    );
    ExitCode::SUCCESS
}
