use super::{present, prompt, ui};
use crate::core::{Catalog, ConversionResult, RateProvider};
use anyhow::Result;
use tracing::debug;

/// Runs one conversion: form, rate fetch, conversion and output.
///
/// Nothing is fetched when the form is cancelled or the amount does not
/// parse, and nothing is printed unless the conversion succeeds.
pub async fn run(
    catalog: &Catalog,
    prompter: &dyn prompt::Prompter,
    rate_provider: &dyn RateProvider,
) -> Result<ConversionResult> {
    let request = prompt::collect_request(prompter, catalog)?.parse()?;
    debug!(?request, "Parsed conversion request");

    let spinner = ui::new_spinner("Fetching latest exchange rates...");
    let snapshot = rate_provider.fetch_snapshot().await;
    spinner.finish_and_clear();
    let snapshot = snapshot?;
    debug!(
        anchor = snapshot.anchor(),
        rates = snapshot.len(),
        "Fetched rate snapshot"
    );

    let result = request.convert(&snapshot)?;
    present::print(&result, catalog);
    Ok(result)
}
