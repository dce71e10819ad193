use cgi_annotator::cli::{self, OutputFormat};
use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("cgi_annotator=debug,warn")
    } else {
        EnvFilter::new("cgi_annotator=info,warn")
    };

    // Keep stdout clean for machine-readable output
    let writer = match cli.format {
        OutputFormat::Text => BoxMakeWriter::new(std::io::stdout),
        OutputFormat::Json => BoxMakeWriter::new(std::io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .without_time()
        .init();

    cli::annotate::run(&cli)
}
