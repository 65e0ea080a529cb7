use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rattendance
/// Terminal front end to manage class rosters and daily attendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage class rosters, mark daily attendance and export it to CSV",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start with an empty store, ignoring `seed_demo_data`
    #[arg(global = true, long = "no-seed")]
    pub no_seed: bool,

    /// Disable coloured output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Defaults to `shell` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start an attendance session (interactive, or from a script)
    Shell {
        /// Read session commands from FILE instead of stdin
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,
    },
}

/// One line typed inside a session.
#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SessionCommand {
    /// List all classes
    Classes,

    /// Manage classes
    Class {
        #[command(subcommand)]
        action: ClassAction,
    },

    /// Select the class the following commands apply to
    Use {
        /// Class name (quote names containing spaces)
        name: String,
    },

    /// Manage the roster of the selected class
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Mark today's attendance for a student of the selected class
    Mark {
        /// Student ID
        id: String,
        /// present | absent
        status: String,
    },

    /// Show the roster of the selected class with today's attendance
    Show,

    /// Import students from a CSV file (`id,name`, first line is a header)
    Import {
        /// CSV file to read
        file: String,
    },

    /// Export the attendance history of the selected class
    Export {
        /// Output file
        file: String,

        /// Output format (defaults to `default_export_format` in the config)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the activity log of this session
    Log,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ClassAction {
    /// Create a new class and select it
    Add { name: String },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum StudentAction {
    /// Add a student to the selected class
    Add { id: String, name: String },
    /// Remove a student from the selected class (attendance history is kept)
    Remove { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> SessionCommand {
        SessionLine::try_parse_from(args).unwrap().command
    }

    #[test]
    fn parses_session_commands() {
        assert_eq!(
            parse(&["class", "add", "Physics 101"]),
            SessionCommand::Class {
                action: ClassAction::Add {
                    name: "Physics 101".into()
                }
            }
        );
        assert_eq!(
            parse(&["export", "out.json", "--format", "json", "-f"]),
            SessionCommand::Export {
                file: "out.json".into(),
                format: Some(ExportFormat::Json),
                force: true,
            }
        );
        assert_eq!(parse(&["exit"]), SessionCommand::Quit);
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(SessionLine::try_parse_from(["dance"]).is_err());
        assert!(SessionLine::try_parse_from(["student", "add", "1"]).is_err());
    }

    #[test]
    fn cli_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["rattendance", "--no-seed"]).unwrap();
        assert!(cli.no_seed);
        assert!(cli.command.is_none());
    }
}
