mod cli;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::path::Path;
use todo_core::AppConfig;
use todo_tui::App;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "TODO_LOG";

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    if let Some(log_path) = log_file {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_env_filter(filter_or(tracing::Level::DEBUG))
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter_or(tracing::Level::WARN))
            .init();
    }
    Ok(())
}

fn filter_or(level: tracing::Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        return Ok(());
    }

    init_logging(cli.log_file.as_deref())?;

    let config = match cli.config {
        Some(ref path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    tracing::debug!("Loaded config: {:?}", config);

    let mut app = App::new(config);
    app.run().await?;

    Ok(())
}
