//! Trait Mock Generator
//!
//! Scans a Rust source file for mockable trait declarations and emits
//! editable mock implementations for them.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use traitstub::codegen::{DEFAULT_MOCK_SUFFIX, RenderOptions};
use traitstub::errors::StubError;
use traitstub::output::{generate_mocks, write_atomic};

/// Trait mock generator - produces editable mock structs from trait declarations
#[derive(Parser, Debug)]
#[command(name = "traitstub")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Rust source file to scan for mockable traits
    #[arg(short, long)]
    file: PathBuf,

    /// Comma-separated trait names to mock (exact match; default: all)
    #[arg(short = 't', long)]
    filter: Option<String>,

    /// Output file for generated code (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suffix appended to trait names to form mock names
    #[arg(long, default_value = DEFAULT_MOCK_SUFFIX)]
    suffix: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing subscriber based on verbosity
fn init_tracing(verbose: u8) {
    // RUST_LOG wins; otherwise -v flags pick the filter
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,traitstub=info".to_string(),
            2 => "info,traitstub=debug".to_string(),
            _ => "debug,traitstub=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Splits the comma-separated filter list into exact trait names.
///
/// Entries are trimmed and empty entries dropped, so `--filter ""` behaves
/// like no filter at all.
fn parse_filter(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Derives the generated module's name from the source file name.
fn module_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mocks".to_string())
}

fn run(cli: &Cli) -> Result<(), StubError> {
    debug!("Reading source file: {}", cli.file.display());
    let source = fs::read_to_string(&cli.file).map_err(|e| StubError::Read {
        path: cli.file.clone(),
        source: e,
    })?;

    let filter = parse_filter(cli.filter.as_deref());
    if !filter.is_empty() {
        debug!(?filter, "Restricting generation to listed traits");
    }

    let module_name = module_name_for(&cli.file);
    let options = RenderOptions::new(&module_name).with_suffix(&cli.suffix);
    let code = generate_mocks(&source, &filter, &options)?;

    match &cli.output {
        Some(path) => {
            write_atomic(path, &code)?;
            info!("Wrote generated mocks to {}", path.display());
        }
        None => print!("{}", code),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
