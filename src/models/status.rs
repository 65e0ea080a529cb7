use crate::errors::AppError;
use std::fmt;
use std::str::FromStr;

/// Literal shown for students without a record on the requested date.
pub const NOT_MARKED: &str = "Not Marked";

/// A stored attendance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = AppError;

    /// Accepts `present`/`absent` in any case, plus the `p`/`a` shorthands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" | "p" => Ok(AttendanceStatus::Present),
            "absent" | "a" => Ok(AttendanceStatus::Absent),
            _ => Err(AppError::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status as seen by a reader: `NotMarked` is synthesized, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Marked(AttendanceStatus),
    NotMarked,
}

impl DisplayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStatus::Marked(s) => s.as_str(),
            DisplayStatus::NotMarked => NOT_MARKED,
        }
    }
}

impl From<Option<AttendanceStatus>> for DisplayStatus {
    fn from(value: Option<AttendanceStatus>) -> Self {
        value.map_or(DisplayStatus::NotMarked, DisplayStatus::Marked)
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "PRESENT".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Present
        );
        assert_eq!(
            " absent ".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Absent
        );
        assert_eq!("p".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Present);
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "Late".parse::<AttendanceStatus>().unwrap_err();
        assert!(matches!(err, AppError::InvalidStatus(s) if s == "Late"));
    }

    #[test]
    fn not_marked_is_only_a_display_value() {
        assert_eq!(DisplayStatus::from(None).to_string(), "Not Marked");
        assert_eq!(
            DisplayStatus::from(Some(AttendanceStatus::Absent)).to_string(),
            "Absent"
        );
    }
}
