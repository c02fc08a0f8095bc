#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, CreateInput, CreateStrategy, InfoStrategy, InitStrategy, ListInput,
    ListStrategy, TelegramInput, TelegramStrategy, VersionStrategy,
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "acctbot")]
#[command(about = "Generate account credentials from free-form name and number input", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Telegram bot
    Telegram {
        /// Bot token (overrides config)
        #[arg(short, long)]
        token: Option<String>,

        /// Allowed chat IDs, comma separated (overrides config)
        #[arg(short, long, value_delimiter = ',')]
        allow_from: Option<Vec<String>>,

        /// Record store file (overrides config)
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
    /// Generate one account from free-form text
    Create {
        /// Name plus optional phone and account number, in any order
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Record store file (overrides config)
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
    /// Show the most recent accounts
    List {
        /// Number of accounts to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Record store file (overrides config)
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Telegram {
            token,
            allow_from,
            store,
        } => {
            TelegramStrategy
                .execute(TelegramInput {
                    token,
                    allow_from,
                    store,
                })
                .await
        }
        Commands::Create { text, store } => {
            CreateStrategy
                .execute(CreateInput {
                    text: text.join(" "),
                    store,
                })
                .await
        }
        Commands::List { limit, store } => ListStrategy.execute(ListInput { limit, store }).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn create_joins_free_text() {
        let cli = Cli::try_parse_from([
            "acctbot",
            "create",
            "Nguyễn",
            "Văn",
            "A",
            "0123456789",
            "--store",
            "/tmp/x.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Create { text, store } => {
                assert_eq!(text.join(" "), "Nguyễn Văn A 0123456789");
                assert_eq!(store, Some(PathBuf::from("/tmp/x.json")));
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn allow_from_splits_on_commas() {
        let cli = Cli::try_parse_from(["acctbot", "telegram", "--allow-from", "1,2,3"]).unwrap();

        match cli.command {
            Commands::Telegram { allow_from, .. } => {
                assert_eq!(
                    allow_from,
                    Some(vec!["1".to_string(), "2".to_string(), "3".to_string()])
                );
            }
            _ => panic!("expected telegram"),
        }
    }
}
