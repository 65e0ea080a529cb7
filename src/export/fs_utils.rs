// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check whether a file can be created or overwritten.
///
/// - file missing → Ok
/// - file exists and `force` → Ok
/// - file exists, no `force`, `interactive` → ask the user
/// - otherwise → ExportFailed
pub(crate) fn ensure_writable(path: &Path, force: bool, interactive: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if interactive && confirm_overwrite(&mut io::stdin().lock())? {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::export_failed(
        path,
        io::Error::other("existing file not overwritten (use --force)"),
    ))
}

fn confirm_overwrite(input: &mut impl BufRead) -> AppResult<bool> {
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}
