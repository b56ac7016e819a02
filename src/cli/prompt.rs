//! Interactive collection of the conversion request.

use crate::core::catalog::Catalog;
use crate::core::converter::{ConversionRequest, parse_amount};
use crate::core::error::Error;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Input};
use tracing::debug;

const LIST_HEIGHT: usize = 12;

/// A source of answers for the conversion form.
pub trait Prompter {
    /// Asks the user to pick one of the catalog's codes.
    fn select_currency(&self, title: &str, hint: &str, catalog: &Catalog) -> Result<String, Error>;

    /// Asks for a free-text amount. The text is returned as typed.
    fn input_amount(&self, title: &str, placeholder: &str) -> Result<String, Error>;
}

/// Answers exactly as the user gave them, before the amount is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest {
    pub base: String,
    pub quote: String,
    pub amount: String,
}

impl RawRequest {
    pub fn parse(self) -> Result<ConversionRequest, Error> {
        let amount = parse_amount(&self.amount)?;
        Ok(ConversionRequest {
            base: self.base,
            quote: self.quote,
            amount,
        })
    }
}

/// Runs the three form steps in order: base currency, target currency, amount.
pub fn collect_request(prompter: &dyn Prompter, catalog: &Catalog) -> Result<RawRequest, Error> {
    let base = prompter.select_currency(
        "Base Currency",
        "Type to search (e.g. 'dollar', 'eur', 'yen')",
        catalog,
    )?;
    let quote = prompter.select_currency("Target Currency", "Type to search", catalog)?;
    let amount =
        prompter.input_amount("How much do you want to convert?", "Enter amount (e.g. 100)")?;

    let raw = RawRequest {
        base,
        quote,
        amount,
    };
    debug!(?raw, "Collected form answers");
    Ok(raw)
}

pub fn option_label(code: &str, label: &str) -> String {
    format!("{code} ({label})")
}

/// Prompts on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select_currency(&self, title: &str, hint: &str, catalog: &Catalog) -> Result<String, Error> {
        let (codes, items): (Vec<&str>, Vec<String>) = catalog
            .entries()
            .map(|(code, label)| (code, option_label(code, label)))
            .unzip();

        let selection = FuzzySelect::with_theme(&self.theme)
            .with_prompt(format!("{title} {}", style(hint).dim()))
            .items(&items)
            .default(0)
            .max_length(LIST_HEIGHT)
            .interact_opt()?;

        // Esc leaves the select without a choice.
        let index = selection.ok_or(Error::PromptCancelled)?;
        codes
            .get(index)
            .map(|code| code.to_string())
            .ok_or(Error::PromptCancelled)
    }

    fn input_amount(&self, title: &str, placeholder: &str) -> Result<String, Error> {
        let amount = Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("{title} {}", style(placeholder).dim()))
            .interact_text()?;
        Ok(amount)
    }
}
