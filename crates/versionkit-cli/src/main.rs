mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::Config;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(name = "versionkit", about = "Optimistic-locking version sequences")]
struct Cli {
    /// Overrides the level from the config file.
    #[arg(long, global = true)]
    log_level: Option<Level>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List supported version types and their accepted names.
    Kinds,
    /// Print the versions that successive writes would persist.
    Next {
        #[arg(long = "type")]
        type_name: String,
        #[arg(long)]
        current: Option<String>,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Bind every version field declared in the config.
    Check {
        #[arg(long, default_value = "config.example.toml")]
        config: String,
    },
    /// Show the value the next write of each configured field would persist.
    Plan {
        #[arg(long, default_value = "config.example.toml")]
        config: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Command::Check { config } | Command::Plan { config } => Some(Config::from_path(config)?),
        Command::Kinds | Command::Next { .. } => None,
    };
    let config_level = match &config {
        Some(config) => Some(config.logging.level.parse::<Level>().map_err(|_| {
            anyhow::anyhow!(format!("invalid log level {}", config.logging.level))
        })?),
        None => None,
    };
    init_logging(cli.log_level.or(config_level))?;

    let lines = match (&cli.command, &config) {
        (Command::Kinds, _) => commands::kinds(),
        (
            Command::Next {
                type_name,
                current,
                count,
            },
            _,
        ) => commands::next(type_name, current.as_deref(), *count)?,
        (Command::Check { .. }, Some(config)) => commands::check(config)?,
        (Command::Plan { .. }, Some(config)) => commands::plan(config)?,
        (Command::Check { .. } | Command::Plan { .. }, None) => {
            return Err(anyhow::anyhow!("command requires a config file"))
        }
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn init_logging(level: Option<Level>) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level.unwrap_or(Level::INFO))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
