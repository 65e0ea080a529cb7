//! Attendance session: the front end over [`AttendanceStore`].
//!
//! Holds the selected class, runs one store operation per command and then
//! re-reads the roster view for today's date to refresh the display.

use crate::cli::parser::{ClassAction, SessionCommand, SessionLine, StudentAction};
use crate::config::Config;
use crate::core::{ImportLogic, Journal};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::AttendanceStatus;
use crate::store::AttendanceStore;
use crate::store::seed::PRIMARY_CLASS;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::roster::render_roster;
use crate::utils::{date, path::expand_tilde, shell_words};
use clap::Parser;
use clap::error::ErrorKind;
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    store: AttendanceStore,
    current_class: Option<String>,
    journal: Journal,
    colors: bool,
    export_format: ExportFormat,
    prompt: String,
    interactive: bool,
}

impl Session {
    pub fn new(store: AttendanceStore, cfg: &Config, colors: bool, interactive: bool) -> AppResult<Self> {
        let current_class = if store.contains_class(PRIMARY_CLASS) {
            Some(PRIMARY_CLASS.to_string())
        } else {
            store.list_classes().into_iter().next()
        };

        Ok(Self {
            store,
            current_class,
            journal: Journal::new(),
            colors,
            export_format: cfg.export_format()?,
            prompt: cfg.prompt.clone(),
            interactive,
        })
    }

    pub fn store(&self) -> &AttendanceStore {
        &self.store
    }

    pub fn current_class(&self) -> Option<&str> {
        self.current_class.as_deref()
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    fn selected(&self) -> AppResult<String> {
        self.current_class.clone().ok_or(AppError::NoClassSelected)
    }

    /// Print the selected class with today's attendance.
    pub fn refresh(&self) -> AppResult<()> {
        let Some(class) = self.current_class() else {
            info("No class selected. Use `class add <NAME>` or `use <NAME>`.");
            return Ok(());
        };

        let today = date::today();
        let rows = self.store.list_students_for_display(class, today)?;

        header(format!("{class} · {}", date::format_date(today)));
        if rows.is_empty() {
            info("No students in this class.");
        } else {
            print!("{}", render_roster(&rows, self.colors));
        }
        Ok(())
    }

    /// Run a single command against the store.
    pub fn execute(&mut self, cmd: SessionCommand) -> AppResult<Flow> {
        debug!(?cmd, "session command");

        match cmd {
            SessionCommand::Classes => {
                let classes = self.store.list_classes();
                if classes.is_empty() {
                    info("No classes yet.");
                }
                for name in classes {
                    let marker = if self.current_class() == Some(name.as_str()) { "*" } else { " " };
                    println!("{marker} {name}");
                }
                return Ok(Flow::Continue);
            }

            SessionCommand::Class {
                action: ClassAction::Add { name },
            } => {
                require_non_empty(&name, "class name")?;
                self.store.create_class(&name)?;
                self.journal.record("class_add", &name, "class created");
                success(format!("Class '{name}' created."));
                self.current_class = Some(name);
            }

            SessionCommand::Use { name } => {
                if !self.store.contains_class(&name) {
                    return Err(AppError::UnknownClass(name));
                }
                self.current_class = Some(name);
            }

            SessionCommand::Student { action } => {
                let class = self.selected()?;
                match action {
                    StudentAction::Add { id, name } => {
                        require_non_empty(&id, "student ID")?;
                        require_non_empty(&name, "student name")?;
                        self.store.add_student(&class, &id, &name)?;
                        self.journal.record("student_add", &class, format!("{id} {name}"));
                        success(format!("Student {id} ({name}) added to {class}."));
                    }
                    StudentAction::Remove { id } => {
                        self.store.remove_student(&class, &id)?;
                        self.journal.record("student_remove", &class, id.clone());
                        success(format!("Student {id} removed from {class}."));
                    }
                }
            }

            SessionCommand::Mark { id, status } => {
                let class = self.selected()?;
                let status: AttendanceStatus = status.parse()?;

                // only students on the roster can be picked
                if !self.store.students(&class)?.iter().any(|s| s.id == id) {
                    return Err(AppError::StudentNotFound { class, id });
                }

                let today = date::today();
                self.store.mark_attendance(&class, &id, today, status)?;
                self.journal.record("mark", &class, format!("{id} → {status}"));
            }

            SessionCommand::Show => {}

            SessionCommand::Import { file } => {
                let class = self.selected()?;
                let path = expand_tilde(&file);
                let summary = ImportLogic::import(&mut self.store, &class, &path)?;
                self.journal.record(
                    "import",
                    &class,
                    format!("{} student(s) from {}", summary.added, path.display()),
                );
                success(format!(
                    "Students imported successfully ({} added).",
                    summary.added
                ));
            }

            SessionCommand::Export {
                file,
                format,
                force,
            } => {
                let class = self.selected()?;
                let path = expand_tilde(&file);
                let format = format.unwrap_or(self.export_format);
                let count = ExportLogic::export(&self.store, &class, format, &path, force, self.interactive)?;
                self.journal.record(
                    "export",
                    &class,
                    format!("{count} record(s) to {}", path.display()),
                );
                success(format!("Attendance for {class} exported successfully."));
                return Ok(Flow::Continue);
            }

            SessionCommand::Log => {
                if self.journal.is_empty() {
                    info("Nothing recorded in this session yet.");
                } else {
                    print!("{}", self.journal.render(self.colors));
                }
                return Ok(Flow::Continue);
            }

            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        self.refresh()?;
        Ok(Flow::Continue)
    }

    /// Parse and run one line. Blank lines and `#` comments are ignored.
    pub fn execute_line(&mut self, line: &str) -> AppResult<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = shell_words::split(line)?;
        match SessionLine::try_parse_from(words) {
            Ok(parsed) => self.execute(parsed.command),
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                println!("{}", e.render());
                Ok(Flow::Continue)
            }
            Err(e) => Err(AppError::InvalidCommand(
                e.render().to_string().trim().to_string(),
            )),
        }
    }

    /// Run one line; errors are printed and counted.
    fn step(&mut self, line: &str, failures: &mut usize) -> Flow {
        match self.execute_line(line) {
            Ok(flow) => flow,
            Err(e) => {
                *failures += 1;
                error(e);
                Flow::Continue
            }
        }
    }

    /// Run every line of `reader` without prompting. Returns the number of
    /// commands that failed; a line that is not UTF-8 counts as one.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> AppResult<usize> {
        let mut failures = 0;
        let mut buf = Vec::new();
        let mut number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            number += 1;

            let Ok(line) = std::str::from_utf8(&buf) else {
                failures += 1;
                error(AppError::InvalidCommand(format!(
                    "line {number} is not valid UTF-8"
                )));
                continue;
            };
            if self.step(line, &mut failures) == Flow::Quit {
                break;
            }
        }
        Ok(failures)
    }

    /// Prompted loop on stdin. The lock is not held between lines so that
    /// confirmations can read from stdin too.
    pub fn run_interactive(&mut self) -> AppResult<usize> {
        let mut failures = 0;
        loop {
            match self.current_class() {
                Some(class) => print!("{} [{class}]> ", self.prompt),
                None => print!("{}> ", self.prompt),
            }
            io::stdout().flush().ok();

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                println!();
                break;
            }
            if self.step(&line, &mut failures) == Flow::Quit {
                break;
            }
        }
        Ok(failures)
    }
}

fn require_non_empty(value: &str, what: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidCommand(format!("{what} cannot be empty")));
    }
    Ok(())
}

/// Warn when a session starts without any class to work on.
pub(crate) fn warn_if_empty(store: &AttendanceStore) {
    if store.list_classes().is_empty() {
        warning("The store is empty: start with `class add <NAME>`.");
    }
}
