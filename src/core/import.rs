use crate::errors::{AppError, AppResult};
use crate::store::{AttendanceStore, ImportSummary};
use crate::ui::messages::info;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

pub struct ImportLogic;

impl ImportLogic {
    /// Read every line of a roster CSV as raw fields.
    ///
    /// No header handling and no arity check happen here; records of any
    /// length are returned so the store can apply its own rules. A blank
    /// first line is kept as an empty row so that it, and not the next
    /// line, is the one discarded as header. Only a zero-byte file fails.
    pub fn read_roster_rows(path: &Path) -> AppResult<Vec<Vec<String>>> {
        let bytes = fs::read(path).map_err(|e| AppError::import_failed(path, e))?;

        // nothing to discard as header: the file is unusable
        if bytes.is_empty() {
            return Err(AppError::import_failed(
                path,
                io::Error::new(io::ErrorKind::UnexpectedEof, "file is empty"),
            ));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut first_line = None;
        for record in rdr.records() {
            let record = record.map_err(|e| AppError::import_failed(path, e))?;
            if first_line.is_none() {
                first_line = Some(record.position().map_or(1, |p| p.line()));
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        // the csv reader skips blank lines; line 1 was one of them
        if first_line.is_none_or(|line| line > 1) {
            rows.insert(0, Vec::new());
        }

        debug!(path = %path.display(), lines = rows.len(), "roster file read");
        Ok(rows)
    }

    /// Import a roster CSV into `class`.
    pub fn import(store: &mut AttendanceStore, class: &str, path: &Path) -> AppResult<ImportSummary> {
        // unknown class fails before the file is opened
        if !store.contains_class(class) {
            return Err(AppError::UnknownClass(class.to_string()));
        }

        info(format!("Importing students from: {}", path.display()));
        let rows = Self::read_roster_rows(path)?;
        store.import_roster_from_rows(class, rows)
    }
}
