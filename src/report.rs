//! Human-readable reconnaissance reports
//!
//! Everything here writes into an `impl Write` so tests can capture the
//! exact output the CLI prints to stdout.

use std::io::{self, Write};
use std::path::Path;

use crate::dataset::Dataset;
use crate::freq::FrequencyTable;
use crate::records::{number_key, Record};

/// Knobs for the spreadsheet report. Defaults mirror the original recon run:
/// sample rows 2-20, designated columns 1 and 2, first 10 distinct values.
#[derive(Debug, Clone)]
pub struct ExcelReportOptions {
    /// First data-row index of the sample range (0-based, inclusive)
    pub sample_start: usize,
    /// Last data-row index of the sample range (inclusive)
    pub sample_end: usize,
    /// Index of the first designated column
    pub col_a: usize,
    /// Index of the second designated column
    pub col_b: usize,
    /// How many distinct values to preview
    pub unique_preview: usize,
}

impl Default for ExcelReportOptions {
    fn default() -> Self {
        Self {
            sample_start: 2,
            sample_end: 20,
            col_a: 1,
            col_b: 2,
            unique_preview: 10,
        }
    }
}

/// Schema report for a loaded dataset: columns, shape, a bounded row sample
/// where both designated columns are present, and per-column stats.
pub fn write_excel_report(
    w: &mut impl Write,
    dataset: &Dataset,
    opts: &ExcelReportOptions,
) -> io::Result<()> {
    let (n_rows, n_cols) = dataset.shape();

    writeln!(w, "Columns: {:?}", dataset.columns())?;
    writeln!(w, "Shape: {} rows x {} columns", n_rows, n_cols)?;

    if opts.col_a >= n_cols || opts.col_b >= n_cols {
        writeln!(
            w,
            "\nDesignated columns {} and {} not available ({} columns total)",
            opts.col_a, opts.col_b, n_cols
        )?;
        return Ok(());
    }
    let label_a = &dataset.columns()[opts.col_a];
    let label_b = &dataset.columns()[opts.col_b];

    writeln!(
        w,
        "\nRows {}-{} where both \"{}\" and \"{}\" are present:",
        opts.sample_start, opts.sample_end, label_a, label_b
    )?;
    for i in opts.sample_start..=opts.sample_end.min(n_rows.saturating_sub(1)) {
        let (Some(a), Some(b)) = (dataset.cell(i, opts.col_a), dataset.cell(i, opts.col_b))
        else {
            continue;
        };
        // A row missing either designated value is skipped entirely
        let (Some(a), Some(b)) = (a.as_display(), b.as_display()) else {
            continue;
        };
        writeln!(w, "Row {}:", i)?;
        writeln!(w, "  {}: {}", label_a, a)?;
        writeln!(w, "  {}: {}", label_b, b)?;
    }

    let freq_a = FrequencyTable::from_values(
        dataset.column_values(opts.col_a).map(|c| c.as_display()),
    );
    let freq_b = FrequencyTable::from_values(
        dataset.column_values(opts.col_b).map(|c| c.as_display()),
    );

    writeln!(w, "\nStats:")?;
    writeln!(w, "Total rows: {}", n_rows)?;
    writeln!(w, "Non-missing in \"{}\": {}", label_a, freq_a.total())?;
    writeln!(w, "Non-missing in \"{}\": {}", label_b, freq_b.total())?;

    writeln!(
        w,
        "\nFirst {} distinct values in \"{}\":",
        opts.unique_preview, label_a
    )?;
    for (i, value) in freq_a.first_distinct(opts.unique_preview).iter().enumerate() {
        writeln!(w, "  {}. {}", i + 1, value)?;
    }

    Ok(())
}

/// Fallback when no spreadsheet matched: informational message plus the full
/// directory listing, so the user sees what is actually there.
pub fn write_missing_spreadsheet(
    w: &mut impl Write,
    dir: &Path,
    listing: &[String],
) -> io::Result<()> {
    writeln!(w, "No spreadsheet (.xlsx) found in {:?}", dir)?;
    writeln!(w, "Available files:")?;
    for name in listing {
        writeln!(w, "  {}", name)?;
    }
    Ok(())
}

/// Record summary: total count, first 10 sample records, field structure of
/// the first record, and top-N frequency tables for item type and pack size.
pub fn write_records_report(
    w: &mut impl Write,
    records: &[Record],
    top_n: usize,
) -> io::Result<()> {
    writeln!(w, "Total SKUs: {}", records.len())?;

    writeln!(w, "\nFirst {} records:", top_n.min(records.len()))?;
    for (i, record) in records.iter().take(top_n).enumerate() {
        writeln!(w, "{}. SKU: {}", i + 1, record.sku().unwrap_or("-"))?;
        writeln!(w, "   Name: {}", record.name().unwrap_or("-"))?;
        writeln!(w, "   Type: {}", record.item_type().unwrap_or("-"))?;
        let pack = record
            .pack_size()
            .map(|n| number_key(n))
            .unwrap_or_else(|| "-".to_string());
        writeln!(w, "   Pack size: {} {}", pack, record.unit().unwrap_or("-"))?;
    }

    if let Some(first) = records.first() {
        writeln!(w, "\nRecord structure:")?;
        for (field, kind) in first.field_kinds() {
            writeln!(w, "  {}: {}", field, kind)?;
        }
    }

    let types = FrequencyTable::from_values(records.iter().map(|r| r.item_type()));
    let pack_sizes =
        FrequencyTable::from_values(records.iter().map(|r| r.pack_size().map(number_key)));

    write_top_values(w, &format!("Top-{} item types", top_n), &types, top_n)?;
    write_top_values(w, &format!("Top-{} pack sizes", top_n), &pack_sizes, top_n)?;

    Ok(())
}

fn write_top_values(
    w: &mut impl Write,
    title: &str,
    table: &FrequencyTable,
    top_n: usize,
) -> io::Result<()> {
    writeln!(w, "\n{}:", title)?;
    for (i, (value, count)) in table.sorted().iter().take(top_n).enumerate() {
        writeln!(w, "  {}. {}: {}", i + 1, value, count)?;
    }
    if table.missing() > 0 {
        writeln!(w, "  (missing: {})", table.missing())?;
    }
    Ok(())
}
