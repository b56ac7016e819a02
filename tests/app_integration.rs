use fxc::cli::prompt::Prompter;
use fxc::core::{Catalog, CatalogSource, Error};
use fxc::providers::OpenExchangeRatesProvider;
use std::collections::VecDeque;
use std::fs;
use std::process::Command;
use std::sync::Mutex;
use tracing::info;

mod test_utils {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const LATEST_RATES: &str = r#"{
        "disclaimer": "Usage subject to terms",
        "timestamp": 1700000000,
        "base": "USD",
        "rates": {
            "EUR": 0.9,
            "JPY": 150.0,
            "INR": 83.2
        }
    }"#;

    pub async fn create_rates_server(mock_response: &str, expected_calls: u64) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest.json"))
            .and(query_param("app_id", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .expect(expected_calls)
            .mount(&mock_server)
            .await;

        mock_server
    }

    /// Answers the form from a fixed script.
    pub struct ScriptedPrompter {
        answers: Mutex<VecDeque<Result<String, Error>>>,
    }

    impl ScriptedPrompter {
        pub fn answering(answers: &[&str]) -> Self {
            Self::new(answers.iter().map(|a| Ok(a.to_string())).collect())
        }

        pub fn new(answers: Vec<Result<String, Error>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
            }
        }

        fn next(&self) -> Result<String, Error> {
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .expect("prompted more times than scripted")
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select_currency(
            &self,
            _title: &str,
            _hint: &str,
            catalog: &Catalog,
        ) -> Result<String, Error> {
            let code = self.next()?;
            assert!(catalog.label(&code).is_some(), "{code} is not offered");
            Ok(code)
        }

        fn input_amount(&self, _title: &str, _placeholder: &str) -> Result<String, Error> {
            self.next()
        }
    }
}

use test_utils::ScriptedPrompter;

#[test_log::test(tokio::test)]
async fn test_full_conversion_flow_with_mock() {
    let mock_server = test_utils::create_rates_server(test_utils::LATEST_RATES, 1).await;
    let provider = OpenExchangeRatesProvider::new(&mock_server.uri(), "test-key").unwrap();
    let prompter = ScriptedPrompter::answering(&["USD", "EUR", "100"]);

    let result = fxc::cli::convert::run(&Catalog::builtin(), &prompter, &provider)
        .await
        .expect("conversion failed");

    info!(?result, "Converted");
    assert_eq!(result.base, "USD");
    assert_eq!(result.quote, "EUR");
    assert!((result.converted - 90.0).abs() < 1e-9);
    assert!(result.rates_as_of.is_some());
}

#[test_log::test(tokio::test)]
async fn test_cross_rate_conversion() {
    let mock_server = test_utils::create_rates_server(test_utils::LATEST_RATES, 1).await;
    let provider = OpenExchangeRatesProvider::new(&mock_server.uri(), "test-key").unwrap();
    let prompter = ScriptedPrompter::answering(&["EUR", "JPY", "10"]);

    let result = fxc::cli::convert::run(&Catalog::builtin(), &prompter, &provider)
        .await
        .unwrap();

    assert!((result.converted - 1666.67).abs() < 0.01);
}

#[test_log::test(tokio::test)]
async fn test_same_currency_keeps_amount() {
    let mock_server = test_utils::create_rates_server(test_utils::LATEST_RATES, 1).await;
    let provider = OpenExchangeRatesProvider::new(&mock_server.uri(), "test-key").unwrap();
    let prompter = ScriptedPrompter::answering(&["GBP", "GBP", "42.42"]);

    let result = fxc::cli::convert::run(&Catalog::builtin(), &prompter, &provider)
        .await
        .unwrap();

    assert!(result.is_identity());
    assert_eq!(result.converted, 42.42);
}

#[test_log::test(tokio::test)]
async fn test_unknown_currency_fails() {
    let mock_server = test_utils::create_rates_server(test_utils::LATEST_RATES, 1).await;
    let provider = OpenExchangeRatesProvider::new(&mock_server.uri(), "test-key").unwrap();
    let prompter = ScriptedPrompter::answering(&["GBP", "EUR", "50"]);

    let err = fxc::cli::convert::run(&Catalog::builtin(), &prompter, &provider)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::UnknownCurrency(code)) if code == "GBP"
    ));
    assert_eq!(fxc::exit_code_for(&err), 2);
}

#[test_log::test(tokio::test)]
async fn test_malformed_rates_response_aborts() {
    let mock_server = test_utils::create_rates_server(r#"{"rates": "soon"}"#, 1).await;
    let provider = OpenExchangeRatesProvider::new(&mock_server.uri(), "test-key").unwrap();
    let prompter = ScriptedPrompter::answering(&["USD", "EUR", "100"]);

    let err = fxc::cli::convert::run(&Catalog::builtin(), &prompter, &provider)
        .await
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Decode(_))));
    assert_eq!(fxc::exit_code_for(&err), 2);
}

#[test_log::test(tokio::test)]
async fn test_cancelled_form_fetches_nothing() {
    let mock_server = test_utils::create_rates_server(test_utils::LATEST_RATES, 0).await;
    let provider = OpenExchangeRatesProvider::new(&mock_server.uri(), "test-key").unwrap();
    let prompter = ScriptedPrompter::new(vec![Ok("USD".to_string()), Err(Error::PromptCancelled)]);

    let err = fxc::cli::convert::run(&Catalog::builtin(), &prompter, &provider)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::PromptCancelled)
    ));
    assert_eq!(fxc::exit_code_for(&err), 130);
}

#[test_log::test(tokio::test)]
async fn test_invalid_amount_fetches_nothing() {
    let mock_server = test_utils::create_rates_server(test_utils::LATEST_RATES, 0).await;
    let provider = OpenExchangeRatesProvider::new(&mock_server.uri(), "test-key").unwrap();
    let prompter = ScriptedPrompter::answering(&["USD", "EUR", "a hundred"]);

    let err = fxc::cli::convert::run(&Catalog::builtin(), &prompter, &provider)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::InvalidAmount(_))
    ));
}

#[test_log::test(tokio::test)]
async fn test_conversion_with_catalog_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let catalog_path = dir.path().join("currencies.json");
    fs::write(
        &catalog_path,
        r#"{"USD": "United States Dollar", "INR": "Indian Rupee"}"#,
    )
    .unwrap();
    let catalog = Catalog::load(&CatalogSource::File(catalog_path)).unwrap();

    let mock_server = test_utils::create_rates_server(test_utils::LATEST_RATES, 1).await;
    let provider = OpenExchangeRatesProvider::new(&mock_server.uri(), "test-key").unwrap();
    let prompter = ScriptedPrompter::answering(&["INR", "USD", "8,320"]);

    let result = fxc::cli::convert::run(&catalog, &prompter, &provider)
        .await
        .unwrap();

    assert!((result.converted - 100.0).abs() < 1e-9);
}

#[test_log::test(tokio::test)]
async fn test_currencies_command_with_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    fs::write(&catalog_path, r#"{"CHF": "Swiss Franc"}"#).unwrap();

    let config_path = dir.path().join("config.yaml");
    fs::write(
        &config_path,
        format!("catalog_path: \"{}\"\n", catalog_path.display()),
    )
    .unwrap();

    let result = fxc::run_command(
        fxc::AppCommand::Currencies,
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Currencies command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_missing_config_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("missing.yaml");

    let result = fxc::run_command(
        fxc::AppCommand::Currencies,
        Some(config_path.to_str().unwrap()),
    )
    .await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
    assert_eq!(fxc::exit_code_for(&err), 2);
}

#[test]
fn test_missing_credential_exits_with_status_1() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, "env_file: \"no-such.env\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fxc"))
        .arg("--config-path")
        .arg(&config_path)
        .current_dir(dir.path())
        .env_remove("APP_ID")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fxc");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains("APP_ID not found"));
    assert!(stderr.contains("APP_ID=your_api_key"));
    assert!(stderr.contains("Warning: Could not load"));
    assert!(output.stdout.is_empty());
}
