pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::{AppConfig, resolve_app_id};
use crate::core::{Catalog, CatalogSource, Error};
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert,
    Currencies,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxc starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let catalog_source = CatalogSource::resolve(config.catalog_path.as_deref());
    let catalog = Catalog::load(&catalog_source)?;

    match command {
        AppCommand::Convert => {
            // Fail on a missing credential before asking the user anything.
            let app_id = resolve_app_id(&config.env_file_path(), |key| std::env::var(key).ok())?;
            let rate_provider =
                providers::OpenExchangeRatesProvider::new(config.rates_base_url(), &app_id)?;
            let prompter = cli::prompt::TerminalPrompter::new();

            cli::convert::run(&catalog, &prompter, &rate_provider).await?;
            Ok(())
        }
        AppCommand::Currencies => cli::currencies::run(&catalog, &catalog_source),
    }
}

/// Process exit status for a failed run.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(Error::CredentialMissing) => 1,
        Some(Error::PromptCancelled) => 130,
        _ => 2,
    }
}
