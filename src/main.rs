use std::io::{stdout, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::Result;

use skuscan::report::{self, ExcelReportOptions};
use skuscan::{locate, records, Dataset};

/// Data reconnaissance tool for SKU catalogs
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Data reconnaissance for SKU catalogs: inspect spreadsheets and summarize JSONL records"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect the first .xlsx spreadsheet found in a directory
    Excel {
        /// Directory to search for a spreadsheet
        #[arg(long, default_value = "Source")]
        dir: PathBuf,

        /// Index of the first designated sample column
        #[arg(long, default_value_t = 1)]
        col_a: usize,

        /// Index of the second designated sample column
        #[arg(long, default_value_t = 2)]
        col_b: usize,
    },
    /// Summarize a line-delimited JSON file of SKU records
    Skus {
        /// Path to the JSONL file
        #[arg(long, default_value = "Source/normalized_skus.jsonl")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default())
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Excel { dir, col_a, col_b } => run_excel(&dir, col_a, col_b),
        Command::Skus { file } => run_skus(&file),
    }
}

fn run_excel(dir: &Path, col_a: usize, col_b: usize) -> Result<()> {
    let mut out = stdout().lock();

    // A missing spreadsheet is expected-absent input, not a failure: print
    // the directory listing instead and exit 0.
    let Some(path) = locate::find_first_with_extension(dir, "xlsx")? else {
        let listing = locate::list_dir(dir)?;
        report::write_missing_spreadsheet(&mut out, dir, &listing)?;
        return Ok(());
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let size = std::fs::metadata(&path)?.len();
    writeln!(out, "Found spreadsheet: {}", name)?;
    writeln!(out, "Path: {}", path.display())?;
    writeln!(out, "Size: {} bytes\n", size)?;

    let dataset = Dataset::load_xlsx(&path)?;
    let opts = ExcelReportOptions {
        col_a,
        col_b,
        ..ExcelReportOptions::default()
    };
    report::write_excel_report(&mut out, &dataset, &opts)?;
    Ok(())
}

fn run_skus(file: &Path) -> Result<()> {
    let records = records::load_jsonl(file)?;
    let mut out = stdout().lock();
    report::write_records_report(&mut out, &records, 10)?;
    Ok(())
}
