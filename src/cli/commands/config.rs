use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(
    cfg: &Config,
    config_path: &Path,
    print_config: bool,
    edit_config: bool,
    editor: &Option<String>,
) -> AppResult<()> {
    // ---- PRINT CONFIG ----
    if print_config {
        println!("📄 Current configuration ({}):\n", config_path.display());
        println!("{}", cfg.to_yaml()?);
    }

    // ---- EDIT CONFIG ----
    if edit_config {
        if !config_path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `rattendance init` first",
                config_path.display()
            )));
        }

        // Platform default editor
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        // --editor wins over the environment
        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(config_path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{editor_to_use}'"));
            }
            Ok(_) | Err(_) => {
                warning(format!(
                    "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                ));

                match Command::new(&default_editor).arg(config_path).status() {
                    Ok(s) if s.success() => {
                        success(format!(
                            "Configuration file edited using fallback '{default_editor}'"
                        ));
                    }
                    Ok(_) | Err(_) => {
                        error(format!(
                            "Failed to edit configuration file using fallback '{default_editor}'"
                        ));
                    }
                }
            }
        }

        // re-validate what the user saved
        Config::load_from(config_path)?;
    }

    Ok(())
}
