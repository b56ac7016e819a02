use super::ui;
use crate::core::catalog::Catalog;
use crate::core::converter::ConversionResult;

pub const SAME_CURRENCY_NOTICE: &str =
    "Whoa! You picked the same currency for conversion. No conversion needed.";

/// Renders the outcome as plain lines. The first line is the same-currency
/// notice when base and quote match.
pub fn render(result: &ConversionResult, catalog: &Catalog) -> Vec<String> {
    let base_label = catalog.display_label(&result.base);
    let amount = ui::format_amount(result.amount);

    if result.is_identity() {
        return vec![
            SAME_CURRENCY_NOTICE.to_string(),
            format!("{amount} {base_label} equals {amount} {base_label}"),
        ];
    }

    let quote_label = catalog.display_label(&result.quote);
    let converted = ui::format_amount(result.converted);
    vec![format!(
        "{amount} {base_label} equals {converted} {quote_label}"
    )]
}

pub fn rates_footer(result: &ConversionResult) -> Option<String> {
    result
        .rates_as_of
        .map(|as_of| format!("Rates as of {}", as_of.format("%Y-%m-%d %H:%M UTC")))
}

pub fn print(result: &ConversionResult, catalog: &Catalog) {
    let lines = render(result, catalog);
    let (statement, notice) = match lines.split_last() {
        Some((last, rest)) => (last, rest),
        None => return,
    };

    for line in notice {
        println!("{}", ui::style_text(line, ui::StyleType::Notice));
    }
    println!("{}", ui::style_text(statement, ui::StyleType::Result));
    if let Some(footer) = rates_footer(result) {
        println!("{}", ui::style_text(&footer, ui::StyleType::Subtle));
    }
}
