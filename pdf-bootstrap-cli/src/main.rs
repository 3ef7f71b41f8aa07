use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use pdf_bootstrap::parser::{ByteSource, ParseOptions, Parser};
use pdf_bootstrap::{Document, PdfVersion};
use serde::Serialize;
use std::fs::{self, File};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Files up to this size are read into memory before parsing
const DEFAULT_MAX_MEMORY_SIZE: u64 = 10_000_000;

/// Commit the binary was built from, set by build.rs
const GIT_HASH: &str = env!("PDFBOOT_GIT_HASH");

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (git ",
    env!("PDFBOOT_GIT_HASH"),
    ")"
);

#[derive(ClapParser)]
#[command(
    name = "pdfboot",
    about = "Print the header version and startxref offset of PDF files",
    version,
    long_version = LONG_VERSION,
    author
)]
struct Cli {
    /// Input PDF files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Largest file (in bytes) that is loaded into memory instead of read from disk
    #[arg(long, default_value_t = DEFAULT_MAX_MEMORY_SIZE)]
    max_memory_size: u64,

    /// Highest accepted header version (e.g. "2.0")
    #[arg(long, default_value_t = PdfVersion::MAX_SUPPORTED)]
    max_version: PdfVersion,

    /// Number of bytes at the end of the file searched for the trailer markers
    #[arg(long, default_value_t = pdf_bootstrap::parser::DEFAULT_TRAILER_WINDOW)]
    trailer_window: u64,

    /// Print one JSON object per file
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// What gets printed for a successfully parsed file
#[derive(Debug, Serialize)]
struct Report {
    file: String,
    version: Option<String>,
    startxref: Option<i64>,
}

impl Report {
    fn new(path: &Path, document: &Document) -> Self {
        Self {
            file: path.display().to_string(),
            version: document.pdf_version().map(|v| v.to_string()),
            startxref: document.start_xref_offset(),
        }
    }

    fn to_line(&self) -> String {
        let version = self.version.as_deref().unwrap_or("-");
        match self.startxref {
            Some(offset) => format!("Document: version={version} startxref={offset}"),
            None => format!("Document: version={version} startxref=-"),
        }
    }
}

/// Open `path` as a byte source, loading it into memory when it is no
/// larger than `max_memory_size`.
fn open_source(path: &Path, max_memory_size: u64) -> Result<Box<dyn ByteSource>> {
    let size = fs::metadata(path)
        .with_context(|| format!("cannot stat {}", path.display()))?
        .len();

    if size <= max_memory_size {
        tracing::debug!("Loading {} ({} bytes) into memory", path.display(), size);
        let data = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        Ok(Box::new(Cursor::new(data)))
    } else {
        tracing::debug!("Reading {} ({} bytes) from disk", path.display(), size);
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        Ok(Box::new(file))
    }
}

fn inspect(path: &Path, cli: &Cli) -> Result<Report> {
    let source = open_source(path, cli.max_memory_size)?;
    let options = ParseOptions::default()
        .with_max_version(cli.max_version)
        .with_trailer_window(cli.trailer_window);

    let mut parser = Parser::with_options(source, options)?;
    let document = parser.parse()?;
    Ok(Report::new(path, document))
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pdfboot=debug,pdf_bootstrap=debug"
    } else {
        "pdfboot=info,pdf_bootstrap=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("pdfboot {} (git {})", env!("CARGO_PKG_VERSION"), GIT_HASH);

    let mut failures = 0usize;
    for path in &cli.files {
        match inspect(path, &cli) {
            Ok(report) => {
                if cli.json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    println!("{}", report.to_line());
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("Error: {}: {:#}", path.display(), e);
            }
        }
    }

    if failures > 0 {
        tracing::info!("{} of {} files failed", failures, cli.files.len());
        std::process::exit(1);
    }

    Ok(())
}
