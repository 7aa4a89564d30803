//! # Paylink Gateway Client
//!
//! The HTTP client for Paylink's invoice API: lazy bearer-token
//! authentication, request construction, and typed response decoding.
//!
//! A token is acquired on the first operation and reused until an
//! authentication attempt fails; it is never proactively refreshed or
//! expiry-tracked (the gateway owns the token lifetime). The cache is
//! guarded by a mutex held across the auth call, so concurrent
//! operations on a shared client trigger at most one authentication
//! request.

use paylink_core::{InvoiceResponse, PaylinkError, PaylinkResult};
use reqwest::{header, Client, Method};
use serde_json::{json, Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

use crate::config::PaylinkConfig;
use crate::request::AddInvoiceRequest;

/// Typed client for the Paylink invoice API.
///
/// Construct with [`PaylinkClient::test`] for the pilot environment or
/// [`PaylinkClient::production`] with merchant credentials.
#[derive(Debug)]
pub struct PaylinkClient {
    config: PaylinkConfig,
    http: Client,
    /// Cached bearer token; `None` until the first successful auth call
    token: Mutex<Option<String>>,
}

impl PaylinkClient {
    /// Create a client from an explicit configuration
    pub fn new(config: PaylinkConfig) -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http,
            token: Mutex::new(None),
        }
    }

    /// Client bound to the test (pilot) environment.
    ///
    /// Uses Paylink's built-in pilot credentials; always succeeds.
    pub fn test() -> Self {
        Self::new(PaylinkConfig::test())
    }

    /// Client bound to the production environment.
    ///
    /// Fails with a configuration error if either credential is empty.
    pub fn production(
        api_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> PaylinkResult<Self> {
        Ok(Self::new(PaylinkConfig::production(api_id, secret_key)?))
    }

    /// Client configured from `PAYLINK_*` environment variables
    pub fn from_env() -> PaylinkResult<Self> {
        Ok(Self::new(PaylinkConfig::from_env()?))
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &PaylinkConfig {
        &self.config
    }

    /// The hosted payment page URL for a transaction. No network call.
    pub fn payment_page_url(&self, transaction_no: &str) -> String {
        self.config.payment_page_url(transaction_no)
    }

    /// Create an invoice on the gateway.
    ///
    /// Authenticates first if no token is cached, validates the request,
    /// then POSTs it to the add-invoice endpoint. The decoded response
    /// exposes the order status, transaction number, and payment URL.
    #[instrument(skip(self, request), fields(order_number = %request.order_number))]
    pub async fn add_invoice(&self, request: AddInvoiceRequest) -> PaylinkResult<InvoiceResponse> {
        let token = self.ensure_token().await?;

        let body = serde_json::to_value(request.into_body()?)
            .map_err(|e| PaylinkError::Serialization(e.to_string()))?;

        let url = format!("{}/api/addInvoice", self.config.api_base_url);
        let response = self
            .request(
                Method::POST,
                &url,
                Some(&token),
                Some(body),
                "Failed to add the invoice",
            )
            .await?;

        if response.is_empty() {
            return Err(PaylinkError::EmptyResponse(
                "order details missing from the response".into(),
            ));
        }

        let invoice = InvoiceResponse::from_response_data(response)?;
        info!(
            transaction_no = invoice.transaction_no.as_deref().unwrap_or("unknown"),
            "invoice created"
        );
        Ok(invoice)
    }

    /// Retrieve an invoice by its transaction number.
    #[instrument(skip(self))]
    pub async fn get_invoice(&self, transaction_no: &str) -> PaylinkResult<InvoiceResponse> {
        let token = self.ensure_token().await?;

        let url = format!(
            "{}/api/getInvoice/{}",
            self.config.api_base_url, transaction_no
        );
        let response = self
            .request(
                Method::GET,
                &url,
                Some(&token),
                None,
                "Failed to retrieve the invoice",
            )
            .await?;

        if response.is_empty() {
            return Err(PaylinkError::EmptyResponse(
                "order details missing from the response".into(),
            ));
        }

        InvoiceResponse::from_response_data(response)
    }

    /// Cancel an invoice by its transaction number.
    ///
    /// Returns `true` only when the gateway reports success as the
    /// literal string `"true"`. This is observed gateway behavior: a
    /// native boolean `true`, an absent `success` field, or any other
    /// string all yield `false`.
    #[instrument(skip(self))]
    pub async fn cancel_invoice(&self, transaction_no: &str) -> PaylinkResult<bool> {
        let token = self.ensure_token().await?;

        let url = format!("{}/api/cancelInvoice", self.config.api_base_url);
        let body = json!({ "transactionNo": transaction_no });
        let response = self
            .request(
                Method::POST,
                &url,
                Some(&token),
                Some(body),
                "Failed to cancel the invoice",
            )
            .await?;

        Ok(matches!(response.get("success"), Some(Value::String(s)) if s == "true"))
    }

    /// Return the cached token, authenticating first if none is held.
    ///
    /// The lock is held across the auth call so concurrent callers
    /// trigger a single authentication request. Any auth failure leaves
    /// the cache empty.
    async fn ensure_token(&self) -> PaylinkResult<String> {
        let mut token = self.token.lock().await;

        if let Some(cached) = token.as_ref() {
            return Ok(cached.clone());
        }

        match self.authenticate().await {
            Ok(fresh) => {
                *token = Some(fresh.clone());
                Ok(fresh)
            }
            Err(e) => {
                *token = None;
                Err(e)
            }
        }
    }

    /// POST credentials to the auth endpoint and extract the bearer token.
    #[instrument(skip(self))]
    async fn authenticate(&self) -> PaylinkResult<String> {
        let url = format!("{}/api/auth", self.config.api_base_url);
        let body = json!({
            "apiId": self.config.api_id,
            "secretKey": self.config.secret_key,
            "persistToken": false,
        });

        let response = self
            .request(Method::POST, &url, None, Some(body), "Failed to authenticate")
            .await?;

        match response.get("id_token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => {
                debug!(environment = %self.config.environment, "authenticated");
                Ok(token.to_string())
            }
            _ => Err(PaylinkError::Authentication(
                "authentication token missing in the response".into(),
            )),
        }
    }

    /// Issue one GET or POST request and decode the JSON body.
    ///
    /// Non-success statuses become a gateway error with the message
    /// extracted from the response's `detail`, `title`, or `error` field,
    /// falling back to `default_error`. A success with an empty body
    /// decodes to an empty map for the caller to interpret.
    async fn request(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Option<Value>,
        default_error: &str,
    ) -> PaylinkResult<Map<String, Value>> {
        let mut builder = if method == Method::GET {
            self.http.get(url)
        } else if method == Method::POST {
            self.http.post(url)
        } else {
            return Err(PaylinkError::UnsupportedMethod(method.to_string()));
        };

        builder = builder
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| PaylinkError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PaylinkError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("gateway error: status={}, body={}", status, text);
            return Err(gateway_error(&text, status.as_u16(), default_error));
        }

        if text.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(Value::Null) => Ok(Map::new()),
            Ok(other) => Err(PaylinkError::Serialization(format!(
                "expected a JSON object from the gateway, got {other}"
            ))),
            Err(e) => Err(PaylinkError::Serialization(format!(
                "invalid JSON in gateway response: {e}"
            ))),
        }
    }
}

/// Build a gateway error from an error-response body.
///
/// The message is the first populated of `detail`, `title`, `error`,
/// falling back to the operation's default message.
fn gateway_error(body: &str, status_code: u16, default_error: &str) -> PaylinkError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["detail", "title", "error"].iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| default_error.to_string());

    PaylinkError::Gateway {
        message,
        status_code,
    }
}
