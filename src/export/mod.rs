//! History export (JSON / CSV).

mod fs_utils;
mod json_csv;
mod model;

pub use model::HistoryRow;

use crate::errors::AppResult;
use crate::models::DailyTimeRecord;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `records` (ledger order, newest first) to `path`.
/// An existing file is only replaced when `force` is set or the user confirms.
pub fn export_history(
    records: &[DailyTimeRecord],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    if records.is_empty() {
        warning("History is empty. Nothing to export.");
        return Ok(());
    }

    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Json => json_csv::export_json(records, path)?,
        ExportFormat::Csv => json_csv::export_csv(records, path)?,
    }

    success(format!(
        "{} export completed: {} ({} records)",
        format.as_str().to_uppercase(),
        path.display(),
        records.len()
    ));
    Ok(())
}
