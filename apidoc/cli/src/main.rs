mod manifest;

use std::path::PathBuf;

use apidoc_lib::DEFAULT_OUTPUT_PATH;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::manifest::Manifest;

/// Render a YAML or JSON route manifest into a single Markdown API reference.
///
/// Examples:
///   apidoc demos/users-api.yaml                    # Write api-documentation.md
///   apidoc demos/users-api.yaml -o docs/api.md     # Write to docs/ (created if missing)
///   apidoc demos/users-api.yaml --stdout           # Print instead of writing
#[derive(Debug, Parser)]
#[command(name = "apidoc", version)]
struct Cli {
    /// Route manifest (YAML or JSON)
    manifest: PathBuf,

    /// Output file for the generated Markdown
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH, conflicts_with = "stdout")]
    output: PathBuf,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing subscriber based on verbosity level.
///
/// `RUST_LOG`, when set, takes precedence over `-v` flags.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,apidoc=info,apidoc_lib=info".to_string(),
            2 => "info,apidoc=debug,apidoc_lib=debug".to_string(),
            _ => "debug,apidoc=trace,apidoc_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let manifest = Manifest::load(&cli.manifest)?;
    let doc = manifest
        .into_generator()
        .wrap_err_with(|| format!("Invalid route in {}", cli.manifest.display()))?;
    info!(routes = doc.routes().len(), manifest = %cli.manifest.display(), "loaded manifest");

    if cli.stdout {
        print!("{}", doc.render());
        return Ok(());
    }

    let path = doc.write_to(&cli.output)?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}
