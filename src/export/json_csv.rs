use crate::errors::{AppError, AppResult};
use crate::export::HistoryRow;
use crate::models::DailyTimeRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// JSON, pretty-printed, full records.
pub(crate) fn export_json(records: &[DailyTimeRecord], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

/// CSV, one flat row per record (header from serde).
pub(crate) fn export_csv(records: &[DailyTimeRecord], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for record in records {
        wtr.serialize(HistoryRow::from(record))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
