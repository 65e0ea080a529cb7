use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::{DateTime, Local};

/// One line of the session activity log.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub timestamp: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// In-memory log of the mutations performed during a session.
#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "class_add" => Colour::Cyan,
        "student_add" | "import" => Colour::Green,
        "student_remove" => Colour::Red,
        "mark" => Colour::Yellow,
        "export" => Colour::Blue,
        _ => Colour::White,
    }
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operation: &str, target: &str, message: impl Into<String>) {
        self.entries.push(JournalEntry {
            timestamp: Local::now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self, colors: bool) -> String {
        let mut table = Table::new(vec![
            Column::new("#"),
            Column::new("Time"),
            Column::new("Operation"),
            Column::new("Message"),
        ]);

        for (i, e) in self.entries.iter().enumerate() {
            // single op+target column
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let color = colors.then(|| color_for_operation(&e.operation));

            table.add_row(vec![
                (format!("{}", i + 1), None),
                (e.timestamp.format("%FT%T%:z").to_string(), None),
                (op_target, color),
                (e.message.clone(), None),
            ]);
        }

        table.render()
    }
}
