//! candela CLI - Technical analysis of cryptocurrency pairs.

use anyhow::Result;
use candela_lib::prelude::*;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use commands::Session;
use display::{Format, LocaleArg};

#[derive(Parser)]
#[command(name = "candela")]
#[command(about = "Technical analysis of cryptocurrency pairs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Language of text output
    #[arg(short, long, value_enum, default_value = "en", global = true)]
    locale: LocaleArg,

    /// JSON file overriding indicator windows
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the indicator report for a pair
    Analyze {
        /// Trading pair (e.g., BTC/USDT)
        #[arg(default_value = "BTC/USDT")]
        symbol: Symbol,

        /// Timeframe (15m, 1h, 4h, 1d)
        #[arg(short, long, default_value = "1h")]
        timeframe: Timeframe,
    },

    /// Average price and coins bought with a fixed daily investment
    Dca {
        /// Trading pair
        #[arg(default_value = "BTC/USDT")]
        symbol: Symbol,
    },

    /// Buy/sell/wait advice from daily RSI and MACD
    Smart {
        /// Trading pair
        #[arg(default_value = "BTC/USDT")]
        symbol: Symbol,
    },

    /// Choose a service interactively
    Menu {
        /// Trading pair
        #[arg(default_value = "BTC/USDT")]
        symbol: Symbol,
    },

    /// List supported timeframes
    Timeframes,

    /// List known coins
    Coins {
        /// Search pattern
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Installs the log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let locale = Locale::from(cli.locale);
    let session =
        || Session::new(cli.format, cli.pretty, locale, cli.config.as_deref(), cli.quiet);

    match command {
        Commands::Analyze { symbol, timeframe } => {
            commands::analyze::analyze(&session()?, &symbol, timeframe).await
        }
        Commands::Dca { symbol } => commands::invest::dca(&session()?, &symbol).await,
        Commands::Smart { symbol } => commands::invest::smart(&session()?, &symbol).await,
        Commands::Menu { symbol } => commands::menu::menu(&session()?, &symbol).await,
        Commands::Timeframes => {
            commands::catalog::list_timeframes(locale);
            Ok(())
        }
        Commands::Coins { search } => {
            commands::catalog::list_coins(search.as_deref());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let locale = Locale::from(cli.locale);
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}{e:#}", locale.error_prefix());
            ExitCode::FAILURE
        }
    }
}
