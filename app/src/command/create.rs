use acctbot_config::Config;
use std::path::PathBuf;

/// Input parameters for the Create command strategy.
#[derive(Debug, Clone)]
pub struct CreateInput {
    /// Free-form text: name plus optional phone and account number
    pub text: String,
    /// Optional store path (overrides config)
    pub store: Option<PathBuf>,
}

/// Strategy for generating one account from the command line.
///
/// Runs the same classification and storage path as the Telegram bot and
/// prints the pipe-delimited line.
#[derive(Debug, Clone, Copy)]
pub struct CreateStrategy;

impl super::CommandStrategy for CreateStrategy {
    type Input = CreateInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let service = super::build_service(&config, input.store)?;

        let record = service.create_from_text(&input.text).await?;

        println!("{}", record.pipe_line());
        Ok(())
    }
}
