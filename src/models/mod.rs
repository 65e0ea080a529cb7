pub mod roster_row;
pub mod status;
pub mod student;

pub use roster_row::RosterRow;
pub use status::{AttendanceStatus, DisplayStatus, NOT_MARKED};
pub use student::Student;
