//! # Add-Invoice Request
//!
//! Builder for the add-invoice operation and its wire body. Validation
//! and card-brand filtering happen when the builder is converted to the
//! wire form, before any network call.

use paylink_core::{filter_card_brands, CardBrand, PaylinkError, PaylinkResult, Product};
use serde::Serialize;

/// Parameters for creating an invoice.
///
/// Required fields go through [`AddInvoiceRequest::new`]; the rest have
/// gateway defaults (`currency` `"SAR"`, `display_pending` `true`).
#[derive(Debug, Clone)]
pub struct AddInvoiceRequest {
    /// Total invoice amount (must be > 0)
    pub amount: f64,

    /// Client mobile number
    pub client_mobile: String,

    /// Client display name
    pub client_name: String,

    /// Caller-unique order number
    pub order_number: String,

    /// Line items (must be non-empty)
    pub products: Vec<Product>,

    /// URL Paylink calls back after payment
    pub callback_url: String,

    /// URL Paylink redirects to on cancellation
    pub cancel_url: Option<String>,

    /// Client email address
    pub client_email: Option<String>,

    /// ISO currency code
    pub currency: String,

    /// Free-form invoice note
    pub note: Option<String>,

    /// SMS template; setting it makes the gateway text the invoice to the client
    pub sms_message: Option<String>,

    /// Requested card brands; values outside the known set are dropped,
    /// not rejected
    pub supported_card_brands: Vec<String>,

    /// Whether the invoice shows as pending in the merchant dashboard
    pub display_pending: bool,
}

impl AddInvoiceRequest {
    /// Create a request with the required fields
    pub fn new(
        amount: f64,
        client_mobile: impl Into<String>,
        client_name: impl Into<String>,
        order_number: impl Into<String>,
        products: Vec<Product>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            client_mobile: client_mobile.into(),
            client_name: client_name.into(),
            order_number: order_number.into(),
            products,
            callback_url: callback_url.into(),
            cancel_url: None,
            client_email: None,
            currency: "SAR".to_string(),
            note: None,
            sms_message: None,
            supported_card_brands: Vec::new(),
            display_pending: true,
        }
    }

    /// Builder: set cancellation redirect URL
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    /// Builder: set client email
    pub fn with_client_email(mut self, email: impl Into<String>) -> Self {
        self.client_email = Some(email.into());
        self
    }

    /// Builder: set currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Builder: set invoice note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Builder: set SMS template
    pub fn with_sms_message(mut self, message: impl Into<String>) -> Self {
        self.sms_message = Some(message.into());
        self
    }

    /// Builder: request specific card brands on the payment page
    pub fn with_card_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_card_brands = brands.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the display-pending flag
    pub fn with_display_pending(mut self, display_pending: bool) -> Self {
        self.display_pending = display_pending;
        self
    }

    /// Validate the request and produce the gateway wire body.
    pub(crate) fn into_body(self) -> PaylinkResult<AddInvoiceBody> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(PaylinkError::InvalidArgument(format!(
                "invoice amount must be greater than zero, got {}",
                self.amount
            )));
        }

        if self.products.is_empty() {
            return Err(PaylinkError::InvalidArgument(
                "invoice must contain at least one product".into(),
            ));
        }

        for (index, product) in self.products.iter().enumerate() {
            product.validate().map_err(|e| match e {
                PaylinkError::InvalidArgument(msg) => PaylinkError::InvalidArgument(format!(
                    "invalid product at index {index}: {msg}"
                )),
                other => other,
            })?;
        }

        let supported_card_brands = filter_card_brands(&self.supported_card_brands);

        Ok(AddInvoiceBody {
            amount: self.amount,
            call_back_url: self.callback_url,
            cancel_url: self.cancel_url,
            client_email: self.client_email,
            client_mobile: self.client_mobile,
            currency: self.currency,
            client_name: self.client_name,
            note: self.note,
            order_number: self.order_number,
            products: self.products,
            sms_message: self.sms_message,
            supported_card_brands,
            display_pending: self.display_pending,
        })
    }
}

/// Wire form of the add-invoice body (spec'd gateway field names).
/// Unset optionals serialize as explicit nulls, matching the gateway
/// contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddInvoiceBody {
    pub amount: f64,
    pub call_back_url: String,
    pub cancel_url: Option<String>,
    pub client_email: Option<String>,
    pub client_mobile: String,
    pub currency: String,
    pub client_name: String,
    pub note: Option<String>,
    pub order_number: String,
    pub products: Vec<Product>,
    pub sms_message: Option<String>,
    pub supported_card_brands: Vec<CardBrand>,
    pub display_pending: bool,
}
