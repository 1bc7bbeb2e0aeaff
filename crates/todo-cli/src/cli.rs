use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A terminal-based todo list", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to a config file (or set TODO_CONFIG env var)
    #[arg(long, value_name = "FILE", env = "TODO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write debug logs to this file (or set TODO_DEBUG_LOG env var)
    #[arg(long, value_name = "FILE", env = "TODO_DEBUG_LOG")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_config_and_log_file() {
        let cli = Cli::try_parse_from(["todo", "--config", "a.toml", "--log-file", "todo.log"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("todo.log")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parses_completions() {
        let cli = Cli::try_parse_from(["todo", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: clap_complete::Shell::Zsh
            })
        ));
    }
}
