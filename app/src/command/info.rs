use acctbot_config::Config;
use acctbot_store::JsonFileStore;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// Prints the Telegram settings (token masked), the store location with its
/// current record count, and the generator settings.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== acctbot Configuration ===\n");

        println!("Telegram:");
        println!("  Enabled: {}", config.telegram.enabled);
        println!("  Token: {}", mask_token(&config.telegram.token));
        if config.telegram.allow_from.is_empty() {
            println!("  Allow From: (empty - all users allowed)");
        } else {
            println!("  Allow From: {}", config.telegram.allow_from.join(", "));
        }
        println!();

        println!("Store:");
        let path = config.store.resolved_path()?;
        println!("  Path: {}", path.display());

        info!("Reading record store");
        let store = JsonFileStore::new(&path);
        println!("  Records: {}", store.load().await.len());
        println!();

        println!("Generator:");
        println!(
            "  Birth Years: {}..={}",
            config.generator.birth_year_min, config.generator.birth_year_max
        );
        println!("  Special Chars: {}", config.generator.special_chars);
        println!();

        println!("Listing:");
        println!("  Recent Limit: {}", config.listing.recent_limit);

        Ok(())
    }
}

fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return "(not set)".to_string();
    }

    match token.get(..8) {
        Some(prefix) if token.len() > 8 => format!("{prefix}...***"),
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_token;

    #[test]
    fn masks_tokens() {
        assert_eq!(mask_token(""), "(not set)");
        assert_eq!(mask_token("short"), "***");
        assert_eq!(
            mask_token("123456789:ABCdefGhIJKlmNoPQRsTUVwxyZ"),
            "12345678...***"
        );
    }
}
