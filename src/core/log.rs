//! Diagnostic logging. Stdout is reserved for conversion output, so every
//! event goes to stderr.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = "fxc";

/// HTTP stack targets that are chatty at debug level.
const NOISY_TARGETS: [&str; 3] = ["hyper_util", "reqwest", "wiremock"];

/// Installs the global subscriber. Logs stay off unless `verbose` is set or
/// `RUST_LOG` asks for them.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_ansi(console::colors_enabled_stderr())
                .with_writer(std::io::stderr),
        )
        .with(app_targets(verbose))
        .with(env_filter)
        .init();
}

/// Per-target levels: the crate logs at debug when verbose, the HTTP stack
/// only reports warnings.
fn app_targets(verbose: bool) -> Targets {
    if !verbose {
        return Targets::new().with_default(LevelFilter::OFF);
    }

    NOISY_TARGETS
        .iter()
        .fold(Targets::new(), |targets, target| {
            targets.with_target(*target, LevelFilter::WARN)
        })
        .with_target(APP_TARGET, LevelFilter::DEBUG)
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "off" }
}
