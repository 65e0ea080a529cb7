// src/export/model.rs

use serde::Serialize;

/// Flat export row: one stored attendance record.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AttendanceExport {
    pub date: String,
    pub student_id: String,
    pub student_name: String,
    pub status: String,
}

/// Header line of the attendance CSV.
pub(crate) const CSV_HEADERS: [&str; 4] = ["Date", "Student ID", "Student Name", "Status"];

impl AttendanceExport {
    pub(crate) fn to_record(&self) -> [&str; 4] {
        [
            self.date.as_str(),
            self.student_id.as_str(),
            self.student_name.as_str(),
            self.status.as_str(),
        ]
    }
}
