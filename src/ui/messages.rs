//! User-facing status lines (stdout, errors on stderr).
//!
//! Colouring follows a process-wide switch set once by `dispatch` from the
//! config and `--no-color`.

use ansi_term::{Colour, Style};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static COLORS: AtomicBool = AtomicBool::new(true);

/// Enable or disable ANSI styling for every message printed afterwards.
pub fn set_colors(enabled: bool) {
    COLORS.store(enabled, Ordering::Relaxed);
}

fn colors() -> bool {
    COLORS.load(Ordering::Relaxed)
}

fn render_line(colors: bool, style: Style, icon: &str, msg: impl fmt::Display) -> String {
    if colors {
        format!("{} {}", style.paint(icon), msg)
    } else {
        format!("{icon} {msg}")
    }
}

fn render_header(colors: bool, msg: impl fmt::Display) -> String {
    let text = format!("== {msg}");
    if colors {
        Colour::Blue.bold().paint(text).to_string()
    } else {
        text
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render_line(colors(), Colour::Blue.bold(), ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render_line(colors(), Colour::Green.bold(), ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render_line(colors(), Colour::Yellow.bold(), ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render_line(colors(), Colour::Red.bold(), ICON_ERR, msg));
}

/// Section title, e.g. the class shown above the roster table.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", render_header(colors(), msg));
}
