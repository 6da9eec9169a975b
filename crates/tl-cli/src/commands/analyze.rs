//! Analyze command: report days with long car trips.
//!
//! Reading the export is the only fatal step. Once the document is parsed,
//! the report is always produced, possibly empty.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use tl_core::{AnalysisStats, DayTotal, Report};

/// Process exit status when the export cannot be read or parsed.
pub const INPUT_FAILURE_EXIT_CODE: u8 = 2;

/// Reads and parses the export at `path`; `-` reads stdin.
pub fn load(path: &Path) -> Result<Value> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        return tl_core::parse_document(&content).context("failed to parse stdin");
    }

    tl_core::load_document(path).with_context(|| format!("failed to load {}", path.display()))
}

/// Analyzes a parsed export and writes the report.
pub fn run<W: Write>(
    writer: &mut W,
    document: &Value,
    threshold_km: f64,
    json: bool,
) -> Result<()> {
    let analysis = tl_core::analyze_document(document);
    let report = analysis.report(threshold_km);
    tracing::debug!(
        days_over_threshold = report.days.len(),
        threshold_km,
        "report ready"
    );

    if json {
        write_json(writer, &report, analysis.stats)
    } else {
        write_text(writer, &report)
    }
}

fn write_text<W: Write>(writer: &mut W, report: &Report) -> Result<()> {
    let threshold = format_km(report.threshold_km);

    if report.days.is_empty() {
        writeln!(writer, "No days with > {threshold} km found.")?;
        return Ok(());
    }

    writeln!(writer, "Days with > {threshold} km (date, km):")?;
    for day in &report.days {
        writeln!(writer, "{}    {}", day.date, format_km(day.km))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    threshold_km: f64,
    days: &'a [DayTotal],
    stats: AnalysisStats,
}

fn write_json<W: Write>(writer: &mut W, report: &Report, stats: AnalysisStats) -> Result<()> {
    let output = JsonReport {
        threshold_km: report.threshold_km,
        days: &report.days,
        stats,
    };
    serde_json::to_writer_pretty(&mut *writer, &output).context("failed to serialize report")?;
    writeln!(writer)?;
    Ok(())
}

/// Formats kilometers the way they are displayed everywhere in output.
///
/// Shortest round-trip form, always with a fractional part (`150.0`,
/// `123.457`). Magnitudes from `1e16` up and below `1e-4` switch to
/// exponent notation with a signed two-digit exponent (`1e+16`, `1e-05`).
pub fn format_km(km: f64) -> String {
    if km.is_nan() {
        return "nan".to_string();
    }
    if km.is_infinite() {
        return km.to_string();
    }

    let magnitude = km.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(km);
    }
    if km.fract() == 0.0 {
        format!("{km:.1}")
    } else {
        km.to_string()
    }
}

fn format_exponent(km: f64) -> String {
    let rendered = format!("{km:e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}
