mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use filedeck_common::init_logging;

use commands::Context;

#[derive(Parser, Debug)]
#[command(
    name = "filedeck",
    version,
    about = "Browse, search and manage files",
    after_help = "Examples:\n  \
      filedeck ls photos\n  \
      filedeck search invoice\n  \
      filedeck storage --parallel\n  \
      filedeck settings set sortOrder size"
)]
struct Cli {
    /// Directory relative paths resolve against (default: $FILEDECK_ROOT or ~/Documents)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Aggregate storage on all cores
    #[arg(long, global = true)]
    parallel: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List a directory, folders first
    Ls { path: Option<String> },
    /// Find files and folders whose name contains QUERY (at least 2 characters)
    Search { query: String },
    /// Volume usage and a per-category breakdown of a directory tree
    Storage { path: Option<String> },
    /// Show the category of each file name
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Create a folder and any missing parents
    Mkdir { path: String },
    /// Delete a file or folder
    Rm {
        path: String,
        /// Skip the confirmBeforeDelete check
        #[arg(short, long)]
        yes: bool,
    },
    /// Copy a file or folder
    Cp { from: String, to: String },
    /// Move or rename a file or folder
    Mv { from: String, to: String },
    /// Paste SOURCE into DEST_DIR under its own name
    Paste {
        source: String,
        dest_dir: String,
        /// Move instead of copy
        #[arg(long)]
        cut: bool,
    },
    /// Show or change persisted settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    Show,
    Set { key: String, value: String },
}

fn run(cli: Cli) -> Result<(), String> {
    let mut ctx = Context::new(cli.root, cli.json, cli.parallel)?;
    match cli.command {
        Command::Ls { path } => commands::browse::list(&ctx, path.as_deref()),
        Command::Search { query } => commands::search::search(&ctx, &query),
        Command::Storage { path } => commands::storage::storage(&ctx, path.as_deref()),
        Command::Classify { names } => commands::browse::classify(&ctx, &names),
        Command::Mkdir { path } => commands::manage::mkdir(&ctx, &path),
        Command::Rm { path, yes } => commands::manage::remove(&ctx, &path, yes),
        Command::Cp { from, to } => commands::manage::copy(&ctx, &from, &to),
        Command::Mv { from, to } => commands::manage::rename(&ctx, &from, &to),
        Command::Paste { source, dest_dir, cut } => {
            commands::manage::paste(&ctx, &source, &dest_dir, cut)
        }
        Command::Settings { action } => match action {
            SettingsCommand::Show => commands::settings::show(&ctx),
            SettingsCommand::Set { key, value } => commands::settings::set(&mut ctx, &key, &value),
        },
    }
}

fn main() -> ExitCode {
    init_logging("warn");
    let cli = Cli::parse();
    log::debug!("command: {:?}", cli.command);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("filedeck: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["filedeck", "storage", "music", "--parallel", "--json"]).unwrap();
        assert!(cli.parallel);
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Storage { path: Some(ref p) } if p == "music"));
    }

    #[test]
    fn test_parse_settings_set() {
        let cli = Cli::try_parse_from(["filedeck", "settings", "set", "theme", "dark"]).unwrap();
        match cli.command {
            Command::Settings {
                action: SettingsCommand::Set { key, value },
            } => {
                assert_eq!(key, "theme");
                assert_eq!(value, "dark");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_classify_requires_names() {
        assert!(Cli::try_parse_from(["filedeck", "classify"]).is_err());
    }
}
