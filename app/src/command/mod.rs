//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use acctbot_config::Config;
use acctbot_core::{AccountService, CredentialGenerator, RecordStore};
use acctbot_store::JsonFileStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod create;
mod info;
mod init;
mod list;
mod telegram;
mod version;

pub use create::{CreateInput, CreateStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use list::{ListInput, ListStrategy};
pub use telegram::{TelegramInput, TelegramStrategy};
pub use version::VersionStrategy;

/// Build the account service on top of the JSON file store.
///
/// `store_override` takes precedence over `store.path` from the config.
fn build_service(config: &Config, store_override: Option<PathBuf>) -> anyhow::Result<AccountService> {
    let path = match store_override {
        Some(path) => path,
        None => config.store.resolved_path()?,
    };

    info!(
        "Generator: birth years {}..={}, special chars {:?}",
        config.generator.birth_year_min,
        config.generator.birth_year_max,
        config.generator.special_chars
    );

    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(path));
    Ok(AccountService::new(
        store,
        CredentialGenerator::new(config.generator.clone()),
    ))
}

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
