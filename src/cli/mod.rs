pub mod convert;
pub mod currencies;
pub mod present;
pub mod prompt;
pub mod setup;
pub mod ui;

use crate::core::error::Error;

/// Lines shown to the user for a failed run.
pub fn error_report(err: &anyhow::Error) -> Vec<String> {
    match err.downcast_ref::<Error>() {
        Some(Error::PromptCancelled) => vec!["Conversion cancelled.".to_string()],
        Some(e) => {
            let mut lines = vec![format!("Error: {err:#}")];
            lines.extend(e.hint().map(str::to_string));
            lines
        }
        None => vec![format!("Error: {err:#}")],
    }
}

pub fn report_error(err: &anyhow::Error) {
    let style_type = match err.downcast_ref::<Error>() {
        Some(Error::PromptCancelled) => ui::StyleType::Subtle,
        _ => ui::StyleType::Error,
    };
    for line in error_report(err) {
        eprintln!("{}", ui::style_text(&line, style_type));
    }
}
