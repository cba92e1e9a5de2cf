//! Knowledge sheet loader: normalizes the curated sheet and publishes the
//! selected artifacts. Each artifact has its own flag; flags left unset skip
//! that output entirely.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pmkb_db::ingest::RawTable;
use pmkb_db::{normalize, store};

#[derive(Parser, Debug)]
#[command(
    name = "pmkb2db",
    version,
    about = "Normalize the curated knowledge sheet into entries/interpretations artifacts"
)]
struct Args {
    /// Knowledge sheet input (Interpretations sheet exported as CSV)
    #[arg(long, default_value = "pmkb.csv")]
    input: PathBuf,

    /// SQLite output file
    #[arg(long)]
    db: Option<PathBuf>,

    /// Output file for clinical interpretations (UTF-16 TSV)
    #[arg(long)]
    interpretations: Option<PathBuf>,

    /// Output file for variant entries (quoted CSV)
    #[arg(long)]
    entries: Option<PathBuf>,

    /// Output file for tumor type terms
    #[arg(long)]
    tumors: Option<PathBuf>,

    /// Output file for tissue type terms
    #[arg(long)]
    tissues: Option<PathBuf>,
}

fn run(args: &Args) -> pmkb_db::Result<()> {
    let table = RawTable::from_csv_path(&args.input)?;
    let kb = normalize::normalize(&table)?;

    if let Some(path) = &args.entries {
        store::write_entries_csv(&kb, path)?;
    }
    if let Some(path) = &args.interpretations {
        store::write_interpretations_tsv(&kb, path)?;
    }
    if let Some(path) = &args.db {
        store::sqlite::save(&kb, path)?;
    }
    if let Some(path) = &args.tumors {
        store::write_tumor_terms(&kb, path)?;
    }
    if let Some(path) = &args.tissues {
        store::write_tissue_terms(&kb, path)?;
    }
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
