//! # Paylink Configuration
//!
//! Environment selection and credentials for the gateway client.
//! Production credentials come from the caller or from environment
//! variables; the test environment ships with Paylink's fixed pilot
//! credentials and never needs any.

use paylink_core::{PaylinkError, PaylinkResult};
use std::env;

// API base URLs per environment
const PRODUCTION_API_URL: &str = "https://restapi.paylink.sa";
const TEST_API_URL: &str = "https://restpilot.paylink.sa";

// Hosted payment page base URLs per environment
const PRODUCTION_PAYMENT_PAGE_URL: &str = "https://payment.paylink.sa/pay/order";
const TEST_PAYMENT_PAGE_URL: &str = "https://paymentpilot.paylink.sa/pay/info";

// Fixed credentials for the pilot (test) environment
const DEFAULT_TEST_API_ID: &str = "APP_ID_1123453311";
const DEFAULT_TEST_SECRET_KEY: &str = "0662abb5-13c7-38ab-cd12-236e58f43766";

/// Gateway environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Pilot environment (restpilot.paylink.sa), fixed credentials
    Test,
    /// Live environment (restapi.paylink.sa), merchant credentials
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Paylink API configuration
///
/// Created once at client construction; immutable thereafter.
#[derive(Debug, Clone)]
pub struct PaylinkConfig {
    /// Selected environment
    pub environment: Environment,

    /// API base URL (overridable for testing/mocking)
    pub api_base_url: String,

    /// Hosted payment page base URL
    pub payment_page_base_url: String,

    /// Merchant API ID
    pub api_id: String,

    /// Merchant secret key
    pub secret_key: String,
}

impl PaylinkConfig {
    /// Configuration for the test (pilot) environment.
    ///
    /// Uses Paylink's built-in pilot credentials; always succeeds.
    pub fn test() -> Self {
        Self {
            environment: Environment::Test,
            api_base_url: TEST_API_URL.to_string(),
            payment_page_base_url: TEST_PAYMENT_PAGE_URL.to_string(),
            api_id: DEFAULT_TEST_API_ID.to_string(),
            secret_key: DEFAULT_TEST_SECRET_KEY.to_string(),
        }
    }

    /// Configuration for the production environment.
    ///
    /// Fails with a configuration error if either credential is empty.
    pub fn production(
        api_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> PaylinkResult<Self> {
        let api_id = api_id.into();
        let secret_key = secret_key.into();

        if api_id.trim().is_empty() || secret_key.trim().is_empty() {
            return Err(PaylinkError::Configuration(
                "API ID and secret key are required for the production environment".into(),
            ));
        }

        Ok(Self {
            environment: Environment::Production,
            api_base_url: PRODUCTION_API_URL.to_string(),
            payment_page_base_url: PRODUCTION_PAYMENT_PAGE_URL.to_string(),
            api_id,
            secret_key,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `PAYLINK_ENVIRONMENT` (`test` or `production`, default
    /// `test`); production additionally requires `PAYLINK_API_ID` and
    /// `PAYLINK_SECRET_KEY`.
    pub fn from_env() -> PaylinkResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let environment =
            env::var("PAYLINK_ENVIRONMENT").unwrap_or_else(|_| "test".to_string());

        match environment.as_str() {
            "test" => Ok(Self::test()),
            "production" => {
                let api_id = env::var("PAYLINK_API_ID").map_err(|_| {
                    PaylinkError::Configuration("PAYLINK_API_ID not set".to_string())
                })?;
                let secret_key = env::var("PAYLINK_SECRET_KEY").map_err(|_| {
                    PaylinkError::Configuration("PAYLINK_SECRET_KEY not set".to_string())
                })?;
                Self::production(api_id, secret_key)
            }
            other => Err(PaylinkError::Configuration(format!(
                "PAYLINK_ENVIRONMENT must be 'test' or 'production', got '{other}'"
            ))),
        }
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Check if bound to the test environment
    pub fn is_test(&self) -> bool {
        self.environment == Environment::Test
    }

    /// Check if bound to the production environment
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// The hosted payment page URL for a transaction. No network call.
    pub fn payment_page_url(&self, transaction_no: &str) -> String {
        format!("{}/{}", self.payment_page_base_url, transaction_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults() {
        let config = PaylinkConfig::test();
        assert!(config.is_test());
        assert!(!config.is_production());
        assert_eq!(config.api_base_url, "https://restpilot.paylink.sa");
        assert_eq!(
            config.payment_page_base_url,
            "https://paymentpilot.paylink.sa/pay/info"
        );
        assert!(!config.api_id.is_empty());
        assert!(!config.secret_key.is_empty());
    }

    #[test]
    fn test_production_requires_credentials() {
        let config = PaylinkConfig::production("APP_ID_123", "SECRET_456").unwrap();
        assert!(config.is_production());
        assert_eq!(config.api_base_url, "https://restapi.paylink.sa");

        assert!(PaylinkConfig::production("", "SECRET_456").is_err());
        assert!(PaylinkConfig::production("APP_ID_123", "").is_err());
        assert!(PaylinkConfig::production("  ", "SECRET_456").is_err());
    }

    #[test]
    fn test_payment_page_url() {
        let config = PaylinkConfig::test();
        assert_eq!(
            config.payment_page_url("1714289084591"),
            "https://paymentpilot.paylink.sa/pay/info/1714289084591"
        );

        let config = PaylinkConfig::production("id", "key").unwrap();
        assert_eq!(
            config.payment_page_url("1714289084591"),
            "https://payment.paylink.sa/pay/order/1714289084591"
        );
    }

    #[test]
    fn test_base_url_override() {
        let config = PaylinkConfig::test().with_api_base_url("http://127.0.0.1:9999");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
        // payment page URL is unaffected by the API override
        assert!(config.payment_page_url("1").starts_with("https://paymentpilot"));
    }
}
