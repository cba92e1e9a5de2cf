//! Clinical report generator: parses a sample variant export, looks every
//! variant up in the published knowledge store, and writes an HTML report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pmkb_db::{report, store};

#[derive(Parser, Debug)]
#[command(
    name = "report",
    version,
    about = "Create an HTML interpretation report from a sample variant export"
)]
struct Args {
    /// Sample variant export (tab-delimited, Gene/Variant columns)
    input: PathBuf,

    /// Knowledge store to look variants up in
    #[arg(long, default_value = "pmkb.db")]
    db: PathBuf,

    /// Output HTML path (defaults to the input path with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(args: &Args) -> pmkb_db::Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("html"));

    let kb = store::sqlite::load(&args.db)?;
    let samples = report::read_sample_tsv(&args.input)?;
    let source = args
        .input
        .file_name()
        .map_or_else(|| args.input.display().to_string(), |n| n.to_string_lossy().into_owned());
    let built = report::build_report(&kb, &samples, &source);
    let html = report::render_html(&built)?;
    store::publish(&output, html.as_bytes())?;
    info!(path = %output.display(), "wrote report");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
