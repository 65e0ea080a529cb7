//! In-memory attendance store.
//!
//! Owns every class roster and its attendance log. All operations take the
//! class (and the date, where relevant) explicitly; the store keeps no
//! notion of a "current" selection and performs no I/O.

pub mod seed;

use crate::errors::{AppError, AppResult};
use crate::export::AttendanceExport;
use crate::models::{AttendanceStatus, RosterRow, Student};
use crate::utils::date::format_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Name used for orphaned ids in exports.
pub const MISSING_STUDENT_NAME: &str = "N/A";

/// date → student id → status
type AttendanceLog = BTreeMap<NaiveDate, BTreeMap<String, AttendanceStatus>>;

#[derive(Debug, Default, Clone)]
struct ClassRecord {
    roster: Vec<Student>,
    attendance: AttendanceLog,
}

impl ClassRecord {
    fn find(&self, id: &str) -> Option<&Student> {
        self.roster.iter().find(|s| s.id == id)
    }
}

/// Outcome of a roster import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
}

#[derive(Debug, Default, Clone)]
pub struct AttendanceStore {
    classes: BTreeMap<String, ClassRecord>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn class(&self, class: &str) -> AppResult<&ClassRecord> {
        self.classes
            .get(class)
            .ok_or_else(|| AppError::UnknownClass(class.to_string()))
    }

    fn class_mut(&mut self, class: &str) -> AppResult<&mut ClassRecord> {
        self.classes
            .get_mut(class)
            .ok_or_else(|| AppError::UnknownClass(class.to_string()))
    }

    // =========================================================================
    // Classes
    // =========================================================================

    /// Create an empty class. Names are compared exactly (case-sensitive).
    pub fn create_class(&mut self, name: &str) -> AppResult<()> {
        if self.classes.contains_key(name) {
            return Err(AppError::DuplicateClass(name.to_string()));
        }
        self.classes.insert(name.to_string(), ClassRecord::default());
        debug!(class = name, "class created");
        Ok(())
    }

    /// Class names, ascending.
    pub fn list_classes(&self) -> Vec<String> {
        self.classes.keys().cloned().collect()
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    // =========================================================================
    // Roster
    // =========================================================================

    pub fn add_student(&mut self, class: &str, id: &str, name: &str) -> AppResult<()> {
        let record = self.class_mut(class)?;
        if record.find(id).is_some() {
            return Err(AppError::DuplicateStudentId {
                class: class.to_string(),
                id: id.to_string(),
            });
        }
        record.roster.push(Student::new(id, name));
        debug!(class, id, name, "student added");
        Ok(())
    }

    /// Remove a student from the roster.
    ///
    /// Attendance already recorded under `id` is kept: those records become
    /// orphaned and show up in exports with the name `N/A`.
    pub fn remove_student(&mut self, class: &str, id: &str) -> AppResult<()> {
        let record = self.class_mut(class)?;
        let before = record.roster.len();
        record.roster.retain(|s| s.id != id);
        if record.roster.len() == before {
            return Err(AppError::StudentNotFound {
                class: class.to_string(),
                id: id.to_string(),
            });
        }
        debug!(class, id, "student removed");
        Ok(())
    }

    /// Roster in insertion order.
    pub fn students(&self, class: &str) -> AppResult<&[Student]> {
        Ok(&self.class(class)?.roster)
    }

    /// Current roster sorted by name (stable), each student paired with the
    /// status recorded on `date` or `Not Marked`.
    pub fn list_students_for_display(
        &self,
        class: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<RosterRow>> {
        let record = self.class(class)?;
        let day = record.attendance.get(&date);

        let mut students: Vec<&Student> = record.roster.iter().collect();
        students.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(students
            .into_iter()
            .map(|s| RosterRow {
                id: s.id.clone(),
                name: s.name.clone(),
                status: day.and_then(|d| d.get(&s.id).copied()).into(),
            })
            .collect())
    }

    /// Add every row after the first (always treated as a header).
    ///
    /// Rows that do not have exactly two fields, or whose id is already on
    /// the roster, are skipped without error.
    pub fn import_roster_from_rows<I, S>(&mut self, class: &str, rows: I) -> AppResult<ImportSummary>
    where
        I: IntoIterator<Item = Vec<S>>,
        S: AsRef<str>,
    {
        let record = self.class_mut(class)?;
        let mut summary = ImportSummary::default();

        for row in rows.into_iter().skip(1) {
            let [id, name] = row.as_slice() else {
                continue;
            };
            let id: &str = id.as_ref();
            let name: &str = name.as_ref();
            if record.find(id).is_some() {
                continue;
            }
            record.roster.push(Student::new(id, name));
            summary.added += 1;
        }

        debug!(class, added = summary.added, "roster imported");
        Ok(summary)
    }

    // =========================================================================
    // Attendance
    // =========================================================================

    /// Upsert the status at `(class, date, id)`.
    ///
    /// The id is not checked against the roster; a record for an unknown id
    /// is stored but never appears in the roster view.
    pub fn mark_attendance(
        &mut self,
        class: &str,
        id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> AppResult<()> {
        let record = self.class_mut(class)?;
        record
            .attendance
            .entry(date)
            .or_default()
            .insert(id.to_string(), status);
        debug!(class, id, %date, %status, "attendance marked");
        Ok(())
    }

    /// Stored status, if any.
    pub fn status_of(
        &self,
        class: &str,
        date: NaiveDate,
        id: &str,
    ) -> AppResult<Option<AttendanceStatus>> {
        Ok(self
            .class(class)?
            .attendance
            .get(&date)
            .and_then(|d| d.get(id).copied()))
    }

    /// Every stored record for `class`, grouped by date ascending.
    /// Names come from the current roster.
    pub fn export_attendance_rows(&self, class: &str) -> AppResult<Vec<AttendanceExport>> {
        let record = self.class(class)?;
        let mut rows = Vec::new();

        for (date, day) in &record.attendance {
            for (id, status) in day {
                let student_name = record
                    .find(id)
                    .map_or(MISSING_STUDENT_NAME, |s| s.name.as_str());
                rows.push(AttendanceExport {
                    date: format_date(*date),
                    student_id: id.clone(),
                    student_name: student_name.to_string(),
                    status: status.as_str().to_string(),
                });
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn class_names_are_case_sensitive() {
        let mut store = AttendanceStore::new();
        store.create_class("Math").unwrap();
        store.create_class("math").unwrap();
        assert!(matches!(
            store.create_class("Math"),
            Err(AppError::DuplicateClass(n)) if n == "Math"
        ));
        assert_eq!(store.list_classes(), vec!["Math", "math"]);
    }

    #[test]
    fn display_sort_is_stable_on_equal_names() {
        let mut store = AttendanceStore::new();
        store.create_class("C").unwrap();
        store.add_student("C", "2", "Sam").unwrap();
        store.add_student("C", "1", "Sam").unwrap();
        store.add_student("C", "3", "Ada").unwrap();

        let ids: Vec<String> = store
            .list_students_for_display("C", day("2024-01-01"))
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn import_ignores_rows_with_wrong_arity() {
        let mut store = AttendanceStore::new();
        store.create_class("C").unwrap();
        let rows: Vec<Vec<&str>> = vec![
            vec!["id", "name"],
            vec!["1"],
            vec!["2", "Bea", "extra"],
            vec![],
            vec!["3", "Cy"],
        ];
        let summary = store.import_roster_from_rows("C", rows).unwrap();
        assert_eq!(summary.added, 1);
        assert_eq!(store.students("C").unwrap(), &[Student::new("3", "Cy")]);
    }

    #[test]
    fn import_skips_duplicates_within_the_same_file() {
        let mut store = AttendanceStore::new();
        store.create_class("C").unwrap();
        let rows = vec![
            vec!["id", "name"],
            vec!["1", "First"],
            vec!["1", "Second"],
        ];
        assert_eq!(store.import_roster_from_rows("C", rows).unwrap().added, 1);
        assert_eq!(store.students("C").unwrap()[0].name, "First");
    }

    #[test]
    fn marking_unknown_id_is_stored_but_not_displayed() {
        let mut store = AttendanceStore::new();
        store.create_class("C").unwrap();
        store.add_student("C", "1", "Ann").unwrap();
        store
            .mark_attendance("C", "99", day("2024-02-02"), AttendanceStatus::Present)
            .unwrap();

        let rows = store.list_students_for_display("C", day("2024-02-02")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].as_tuple(), ("1", "Ann", "Not Marked"));

        let export = store.export_attendance_rows("C").unwrap();
        assert_eq!(export.len(), 1);
        assert_eq!(export[0].student_name, MISSING_STUDENT_NAME);
    }

    #[test]
    fn failed_operations_leave_state_untouched() {
        let mut store = AttendanceStore::new();
        store.create_class("C").unwrap();
        store.add_student("C", "1", "Ann").unwrap();

        assert!(store.add_student("C", "1", "Other").is_err());
        assert!(store.remove_student("C", "2").is_err());
        assert!(store.add_student("Nope", "1", "Ann").is_err());

        assert_eq!(store.students("C").unwrap(), &[Student::new("1", "Ann")]);
        assert_eq!(store.list_classes(), vec!["C"]);
    }
}
