use crate::cli::session::{Session, warn_if_empty};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::AttendanceStore;
use crate::store::seed;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;
use tracing::debug;

/// Handle the `shell` command (also the default with no subcommand).
///
/// Commands come from `script`, from piped stdin, or from an interactive
/// prompt. Non-interactive runs fail when any command failed.
pub fn handle(cfg: &Config, seed_demo: bool, colors: bool, script: Option<&Path>) -> AppResult<()> {
    let store = if seed_demo {
        seed::demo_store()?
    } else {
        AttendanceStore::new()
    };
    debug!(seed_demo, "store ready");

    let interactive = script.is_none() && io::stdin().is_terminal();
    let mut session = Session::new(store, cfg, colors, interactive)?;

    warn_if_empty(session.store());
    session.refresh()?;

    let failures = match script {
        Some(path) => {
            let file = File::open(path)?;
            session.run(BufReader::new(file))?
        }
        None if interactive => session.run_interactive()?,
        None => session.run(io::stdin().lock())?,
    };

    if failures > 0 && !interactive {
        return Err(AppError::SessionFailed(failures));
    }
    Ok(())
}
