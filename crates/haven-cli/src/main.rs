use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use haven_infrastructure::HavenPaths;
use tracing_appender::non_blocking::WorkerGuard;

mod commands;

use commands::context::AppContext;

#[derive(Parser)]
#[command(name = "haven")]
#[command(about = "Haven - a private companion for everyday mental wellbeing", long_about = None)]
struct Cli {
    /// Keep all config, data and logs under this directory
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Answer chat locally without calling the model
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk with the companion
    Chat {
        #[command(subcommand)]
        action: commands::chat::ChatAction,
    },
    /// Daily mood check-in and insights
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Region, currency, language and sound preferences
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Show premium prices in a currency
    Pricing {
        /// Currency code (defaults to the one in settings)
        #[arg(long)]
        currency: Option<String>,
    },
    /// Premium subscription
    Premium {
        #[command(subcommand)]
        action: commands::premium::PremiumAction,
    },
    /// Private journal draft
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Exercises and the self-help library
    Tools {
        #[command(subcommand)]
        action: commands::tools::ToolsAction,
    },
    /// Render ambient sounds and effects
    Sound {
        #[command(subcommand)]
        action: commands::sound::SoundAction,
    },
    /// Export or erase personal data
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = HavenPaths::new(cli.data_dir.as_deref());
    let _guard = init_logging(&paths);

    let ctx = AppContext::load(paths, cli.offline).await?;

    match cli.command {
        Commands::Chat { action } => commands::chat::run(&ctx, action).await?,
        Commands::Mood { action } => commands::mood::run(&ctx, action).await?,
        Commands::Settings { action } => commands::settings::run(&ctx, action).await?,
        Commands::Pricing { currency } => commands::pricing::run(&ctx, currency).await?,
        Commands::Premium { action } => commands::premium::run(&ctx, action).await?,
        Commands::Journal { action } => commands::journal::run(&ctx, action).await?,
        Commands::Tools { action } => commands::tools::run(&ctx, action).await?,
        Commands::Sound { action } => commands::sound::run(&ctx, action).await?,
        Commands::Data { action } => commands::data::run(&ctx, action).await?,
    }

    Ok(())
}

/// Logs to stderr and to a daily file in the logs directory.
///
/// `HAVEN_LOG` (or `RUST_LOG`) sets the filter. The returned guard flushes
/// the file writer on drop.
fn init_logging(paths: &HavenPaths) -> Option<WorkerGuard> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_env("HAVEN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("haven=info"));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file = paths
        .logs_dir()
        .ok()
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .map(|dir| {
            let appender = tracing_appender::rolling::daily(dir, "haven.log");
            tracing_appender::non_blocking(appender)
        });

    match file {
        Some((writer, guard)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_target(true)
                        .with_line_number(true)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            None
        }
    }
}
