use clap::{Parser, Subcommand};
use fxc::core::log::init_logging;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies (default)
    Convert,
    /// List the currencies available for conversion
    Currencies,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config_path = cli.config_path.as_deref();
    let result = match cli.command {
        Some(Commands::Setup) => fxc::cli::setup::setup(),
        Some(Commands::Currencies) => {
            fxc::run_command(fxc::AppCommand::Currencies, config_path).await
        }
        Some(Commands::Convert) | None => {
            fxc::run_command(fxc::AppCommand::Convert, config_path).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Application failed");
            fxc::cli::report_error(&e);
            ExitCode::from(fxc::exit_code_for(&e))
        }
    }
}
