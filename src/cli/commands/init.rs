use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// Writes a configuration file holding the default values. An existing
/// file is kept unless `force` is set.
pub fn handle(config_path: &Path, force: bool) -> AppResult<()> {
    if config_path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            config_path.display()
        ));
        return Ok(());
    }

    Config::default().save_to(config_path)?;
    success(format!("Config file: {}", config_path.display()));
    Ok(())
}
