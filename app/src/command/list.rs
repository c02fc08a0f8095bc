use acctbot_config::Config;
use std::path::PathBuf;

/// Input parameters for the List command strategy.
#[derive(Debug, Clone)]
pub struct ListInput {
    /// How many records to show (defaults to `listing.recent_limit`)
    pub limit: Option<usize>,
    /// Optional store path (overrides config)
    pub store: Option<PathBuf>,
}

/// Strategy for printing the most recent accounts.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = ListInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let limit = input.limit.unwrap_or(config.listing.recent_limit);
        let service = super::build_service(&config, input.store)?;

        let recent = service.recent(limit).await?;
        if recent.is_empty() {
            println!("No accounts saved yet.");
            return Ok(());
        }

        for record in &recent.records {
            println!("{}", record.pipe_line());
        }
        println!();
        println!("Total: {} accounts", recent.total);

        Ok(())
    }
}
