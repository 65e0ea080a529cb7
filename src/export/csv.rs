// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{AttendanceExport, CSV_HEADERS};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::path::Path;

/// Write attendance rows as CSV. The header is written even with no rows.
pub(crate) fn export_csv(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path).map_err(|e| AppError::export_failed(path, e))?;

    wtr.write_record(CSV_HEADERS)
        .map_err(|e| AppError::export_failed(path, e))?;

    for row in rows {
        wtr.write_record(row.to_record())
            .map_err(|e| AppError::export_failed(path, e))?;
    }

    wtr.flush().map_err(|e| AppError::export_failed(path, e))?;

    notify_export_success("CSV", path);
    Ok(())
}
