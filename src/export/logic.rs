// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::store::AttendanceStore;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole attendance history of `class` to `path`.
    ///
    /// Returns the number of records written.
    pub fn export(
        store: &AttendanceStore,
        class: &str,
        format: ExportFormat,
        path: &Path,
        force: bool,
        interactive: bool,
    ) -> AppResult<usize> {
        // unknown class fails before touching the filesystem
        let rows = store.export_attendance_rows(class)?;

        ensure_writable(path, force, interactive)?;

        if rows.is_empty() {
            warning(format!("No attendance recorded for {class}."));
        }

        debug!(class, records = rows.len(), format = format.as_str(), "exporting attendance");

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
