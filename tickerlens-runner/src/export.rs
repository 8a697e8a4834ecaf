//! Reporting and export — JSON report and indicator CSV.
//!
//! Persisted reports carry a `schema_version`. Unknown (newer) versions are
//! rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tickerlens_core::domain::IndicatorPoint;

use crate::runner::{normalize_ticker, AnalysisReport, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize an `AnalysisReport` to pretty JSON.
pub fn export_json(report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize AnalysisReport to JSON")
}

/// Deserialize an `AnalysisReport` from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<AnalysisReport> {
    let report: AnalysisReport =
        serde_json::from_str(json).context("failed to deserialize AnalysisReport from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── CSV export ─────────────────────────────────────────────────────

fn opt_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.6}")).unwrap_or_default()
}

/// Export indicator points as CSV. Absent values are empty cells.
///
/// Columns: date, price, volume, sma50, sma200, rsi, bb_upper, bb_lower, z_score
pub fn export_indicators_csv(points: &[IndicatorPoint]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "date", "price", "volume", "sma50", "sma200", "rsi", "bb_upper", "bb_lower", "z_score",
    ])?;

    for p in points {
        wtr.write_record([
            p.date.to_string(),
            format!("{:.6}", p.price),
            p.volume.to_string(),
            opt_cell(p.sma50),
            opt_cell(p.sma200),
            format!("{:.6}", p.rsi),
            opt_cell(p.bb_upper),
            opt_cell(p.bb_lower),
            format!("{:.6}", p.z_score),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Paths written by [`save_report`].
#[derive(Debug, Clone)]
pub struct SavedReport {
    pub report_json: PathBuf,
    pub indicators_csv: PathBuf,
}

/// Write `{TICKER}_report.json` and `{TICKER}_indicators.csv` under `output_dir`.
///
/// Creates `output_dir` if needed and overwrites existing files. The ticker
/// is re-validated so a deserialized report cannot name a path outside
/// `output_dir`.
pub fn save_report(report: &AnalysisReport, output_dir: &Path) -> Result<SavedReport> {
    let ticker = normalize_ticker(&report.ticker)?;
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let report_json = output_dir.join(format!("{ticker}_report.json"));
    std::fs::write(&report_json, export_json(report)?)
        .with_context(|| format!("failed to write {}", report_json.display()))?;

    let indicators_csv = output_dir.join(format!("{ticker}_indicators.csv"));
    std::fs::write(&indicators_csv, export_indicators_csv(&report.series)?)
        .with_context(|| format!("failed to write {}", indicators_csv.display()))?;

    Ok(SavedReport {
        report_json,
        indicators_csv,
    })
}
