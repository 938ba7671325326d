use crate::error::AuditError;
use crate::record::FunctionRecord;
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Full column set, shared between the extended terminal table and the CSV
/// export so the two outputs stay interchangeable.
pub const ALL_COLUMNS: [&str; 12] = [
    "Region",
    "Function",
    "Runtime",
    "Memory (MB)",
    "Code Size (MB)",
    "Timeout (seconds)",
    "Last Modified",
    "Last Invocation",
    "Invocations",
    "Dead",
    "ARN",
    "Description",
];

/// Summary column subset printed without `--all`.
pub const DEFAULT_COLUMNS: [&str; 5] =
    ["Region", "Function", "Runtime", "Last Invocation", "Description"];

// Positions of the summary columns inside a full row.
const SUMMARY_INDICES: [usize; 5] = [0, 1, 2, 7, 11];

/// Print the results as an ASCII table. `all` switches from the summary
/// column subset to the full set.
pub fn write_table<W: Write>(
    records: &[FunctionRecord],
    all: bool,
    now: DateTime<Utc>,
    writer: &mut W,
) -> Result<(), AuditError> {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            let row = full_row(record, now);
            if all {
                row
            } else {
                SUMMARY_INDICES.iter().map(|&i| row[i].clone()).collect()
            }
        })
        .collect();

    let header: &[&str] = if all { &ALL_COLUMNS } else { &DEFAULT_COLUMNS };
    writer.write_all(render_table(header, &rows).as_bytes())?;

    Ok(())
}

/// Write the full column set as CSV, truncating whatever already sits at
/// `path`. Called once, after the whole pipeline has finished, so an
/// interrupted run never leaves a partial file behind.
pub fn write_csv(
    records: &[FunctionRecord],
    path: &Path,
    now: DateTime<Utc>,
) -> Result<(), AuditError> {
    let to_csv_error = |source: csv::Error| AuditError::Csv {
        path: path.to_owned(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_csv_error)?;
    writer.write_record(ALL_COLUMNS).map_err(to_csv_error)?;
    for record in records {
        writer.write_record(full_row(record, now)).map_err(to_csv_error)?;
    }
    writer
        .flush()
        .map_err(|err| to_csv_error(csv::Error::from(err)))?;

    Ok(())
}

fn full_row(record: &FunctionRecord, now: DateTime<Utc>) -> Vec<String> {
    vec![
        record.region.clone(),
        record.name.clone(),
        record.runtime.clone(),
        record.memory_mb.to_string(),
        format!("{:.2}", record.code_size_bytes as f64 / BYTES_PER_MB),
        record.timeout_secs.to_string(),
        record
            .last_modified
            .map(|ts| days_ago(ts, now))
            .unwrap_or_default(),
        format_last_invocation(record.last_invocation, now),
        record
            .invocations
            .map_or_else(|| "N/A".to_string(), |count| count.to_string()),
        if record.dead { "yes" } else { "no" }.to_string(),
        record.arn.clone(),
        record.description.clone(),
    ]
}

fn format_last_invocation(last_invocation: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match last_invocation {
        Some(ts) => days_ago(ts, now),
        None => "N/A (no invocations?)".to_string(),
    }
}

/// Render a timestamp as `Today`, `Yesterday` or `N days ago`.
fn days_ago(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match (now - ts).num_days() {
        days if days <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days => format!("{days} days ago"),
    }
}

// Bordered ASCII table in the style of the classic terminaltables output:
// a separator line, the header, another separator, the rows, and a closing
// separator.
fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|title| display_width(title)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let separator = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let mut out = String::new();
    out.push_str(&separator);
    push_row(&mut out, header.iter().map(|s| (*s).to_string()), &widths);
    out.push_str(&separator);
    for row in rows {
        push_row(&mut out, row.iter().cloned(), &widths);
    }
    out.push_str(&separator);
    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.zip(widths) {
        out.push(' ');
        out.push_str(&cell);
        out.push_str(&" ".repeat(width - display_width(&cell) + 1));
        out.push('|');
    }
    out.push('\n');
}

// Column widths count characters, not bytes, so multibyte function names
// keep the borders aligned.
fn display_width(s: &str) -> usize {
    s.chars().count()
}
