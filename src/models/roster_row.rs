use crate::models::DisplayStatus;

/// One line of the roster view: a student paired with the status for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub id: String,
    pub name: String,
    pub status: DisplayStatus,
}

impl RosterRow {
    /// `(id, name, status)` as plain strings.
    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (&self.id, &self.name, self.status.as_str())
    }
}
