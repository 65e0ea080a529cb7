//! Table rendering utilities for CLI outputs.

use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// A cell: plain text plus an optional colour applied after padding,
/// so escape codes never count towards the column width.
pub type Cell = (String, Option<Colour>);

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.width(),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row; columns grow to fit the widest cell.
    pub fn add_row(&mut self, row: Vec<Cell>) {
        for (col, (text, _)) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(text.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (col, (text, colour)) in self.columns.iter().zip(row) {
                let cell = pad(text, col.width);
                match colour {
                    Some(c) => out.push_str(&c.paint(cell).to_string()),
                    None => out.push_str(&cell),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
