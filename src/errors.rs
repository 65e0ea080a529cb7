//! Unified application error type.
//! The store, the CSV import/export layer and the CLI all return AppError
//! so every failure reaches the session loop in the same shape.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause carried by import/export failures.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Roster / attendance
    // ---------------------------
    #[error("Class already exists: {0}")]
    DuplicateClass(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Student with ID {id} already exists in class {class}")]
    DuplicateStudentId { class: String, id: String },

    #[error("Student {id} not found in class {class}")]
    StudentNotFound { class: String, id: String },

    #[error("Invalid attendance status: {0} (expected Present or Absent)")]
    InvalidStatus(String),

    #[error("Please select or add a class first.")]
    NoClassSelected,

    // ---------------------------
    // CSV import / export
    // ---------------------------
    #[error("Failed to import CSV {}: {source}", path.display())]
    ImportFailed {
        path: PathBuf,
        #[source]
        source: Cause,
    },

    #[error("Failed to export attendance to {}: {source}", path.display())]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: Cause,
    },

    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("{0} session command(s) failed")]
    SessionFailed(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn import_failed(path: impl Into<PathBuf>, source: impl Into<Cause>) -> Self {
        AppError::ImportFailed {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn export_failed(path: impl Into<PathBuf>, source: impl Into<Cause>) -> Self {
        AppError::ExportFailed {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
