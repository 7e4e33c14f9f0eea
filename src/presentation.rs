// src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use rwc_core::Counts;
use rwc_engine::options::{Category, OutputFormat, TotalMode};
use rwc_engine::stats::RunResult;
use serde_json::{Map, Value};
use std::io::Write;

const TOTAL_LABEL: &str = "total";

/// One printed line: selected counts in output order and an optional name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub values: Vec<usize>,
    pub name: Option<&'a str>,
}

/// Write the report for `result` in the configured format.
///
/// # Errors
/// Returns an error if writing to `out` fails or JSON serialization fails.
pub fn write_report<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => write_text(out, result, config),
        OutputFormat::Json => write_json(out, result, config),
    }
}

fn write_text<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    let rows = report_rows(result, config);
    let width = field_width(&rows, config.selection.or_default_set().is_single());

    for row in &rows {
        writeln!(out, "{}", render_row(row, width))?;
    }
    Ok(())
}

/// Rows of the text report, per-input lines first, then the total.
#[must_use]
pub fn report_rows<'a>(result: &'a RunResult, config: &Config) -> Vec<Row<'a>> {
    let categories = config.selection.or_default_set().categories();
    let values = |counts: &Counts| -> Vec<usize> {
        categories.iter().map(|c| c.value(counts)).collect()
    };

    let mut rows = Vec::new();
    if config.total.shows_files() {
        rows.extend(result.stats().map(|s| Row {
            values: values(&s.counts),
            name: s.name.as_deref(),
        }));
    }
    if config.total.shows_total(result.input_count()) {
        rows.push(Row {
            values: values(&result.total()),
            name: (config.total != TotalMode::Only).then_some(TOTAL_LABEL),
        });
    }
    rows
}

/// Width of every count field: enough digits for the largest printed value.
///
/// A lone category is never padded.
#[must_use]
pub fn field_width(rows: &[Row<'_>], single_category: bool) -> usize {
    if single_category {
        return 1;
    }
    rows.iter()
        .flat_map(|r| r.values.iter().copied())
        .map(digits)
        .max()
        .unwrap_or(1)
}

fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Right-justify each value in `width` columns, one space apart, then the name.
#[must_use]
pub fn render_row(row: &Row<'_>, width: usize) -> String {
    let mut line = row
        .values
        .iter()
        .map(|v| format!("{v:>width$}"))
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(name) = row.name {
        line.push(' ');
        line.push_str(name);
    }
    line
}

fn write_json<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    let categories = config.selection.or_default_set().categories();

    let files = if config.total.shows_files() {
        result
            .stats()
            .map(|s| serde_json::to_value(s).map(|v| select_keys(v, &categories, true)))
            .collect::<std::result::Result<Vec<_>, serde_json::Error>>()?
    } else {
        Vec::new()
    };

    let mut report = Map::new();
    report.insert("files".to_string(), Value::Array(files));
    if config.total.shows_total(result.input_count()) {
        let total = select_keys(serde_json::to_value(result.total())?, &categories, false);
        report.insert("total".to_string(), total);
    }

    serde_json::to_writer_pretty(&mut *out, &Value::Object(report))?;
    writeln!(out)?;
    Ok(())
}

/// Keep only the selected count keys (and `name` if asked to).
fn select_keys(value: Value, categories: &[Category], keep_name: bool) -> Value {
    match value {
        Value::Object(mut map) => {
            map.retain(|key, _| {
                (keep_name && key == "name") || categories.iter().any(|c| c.key() == key)
            });
            Value::Object(map)
        }
        other => other,
    }
}
