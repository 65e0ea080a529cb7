//! Demonstration data loaded at start-up (unless disabled in the config).

use crate::errors::{AppError, AppResult};
use crate::models::AttendanceStatus;
use crate::store::AttendanceStore;
use crate::utils::date::parse_date;

/// Class selected when the session starts on seeded data.
pub const PRIMARY_CLASS: &str = "Physics 101";

const CLASSES: [(&str, [(&str, &str); 2]); 2] = [
    ("Physics 101", [("1001", "Alice"), ("1002", "Bob")]),
    ("History 202", [("2001", "Charlie"), ("2002", "Diana")]),
];

const ATTENDANCE: [(&str, &str, &str, AttendanceStatus); 2] = [
    ("Physics 101", "2023-10-26", "1001", AttendanceStatus::Present),
    ("Physics 101", "2023-10-26", "1002", AttendanceStatus::Absent),
];

/// Populate `store` with the demo classes and one day of attendance.
pub fn load_demo_data(store: &mut AttendanceStore) -> AppResult<()> {
    for (class, students) in CLASSES {
        store.create_class(class)?;
        for (id, name) in students {
            store.add_student(class, id, name)?;
        }
    }

    for (class, date, id, status) in ATTENDANCE {
        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        store.mark_attendance(class, id, date, status)?;
    }

    Ok(())
}

/// A fresh store holding the demo data.
pub fn demo_store() -> AppResult<AttendanceStore> {
    let mut store = AttendanceStore::new();
    load_demo_data(&mut store)?;
    Ok(store)
}
