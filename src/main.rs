//! txtpdf CLI - converts a directive annotated text file into a PDF.
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use txtpdf::{ config::Config, types::{ Doc, Result } };

/// Convert plain text with formatting directives into a PDF.
#[derive(Parser)]
#[command(name = "txtpdf", version, about)]
struct Cli {
    /// Text file to convert.
    #[arg(default_value = "file.txt")]
    input: PathBuf,
    /// Where to write the PDF.
    #[arg(short, long, default_value = "txttopdf.pdf")]
    output: PathBuf,
    /// JSON file overriding page geometry, type sizes and metadata.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of times the whole text is printed into the document.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    copies: u16,
    /// Log each directive and paragraph.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let source = txtpdf::read_source(&cli.input)?;

    eprintln!("Applying formatting rules...");

    let mut doc = Doc::new(config);
    txtpdf::convert(&source, usize::from(cli.copies), &mut doc)?;
    doc.save(&cli.output)?;

    eprintln!("PDF created: {}", cli.output.display());
    Ok(())
}
