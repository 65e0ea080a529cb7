//! Colour helpers for terminal output.

use crate::models::{AttendanceStatus, DisplayStatus};
use ansi_term::Colour;

/// Present → green, Absent → red, Not Marked → grey.
pub fn color_for_status(status: DisplayStatus) -> Colour {
    match status {
        DisplayStatus::Marked(AttendanceStatus::Present) => Colour::Green,
        DisplayStatus::Marked(AttendanceStatus::Absent) => Colour::Red,
        DisplayStatus::NotMarked => Colour::Fixed(8),
    }
}
