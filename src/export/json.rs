// src/export/json.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::AttendanceExport;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let file = File::create(path).map_err(|e| AppError::export_failed(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, rows).map_err(|e| AppError::export_failed(path, e))?;
    writer.flush().map_err(|e| AppError::export_failed(path, e))?;

    notify_export_success("JSON", path);
    Ok(())
}
