//! # Invoice Response
//!
//! The decoded result of an add-invoice or get-invoice call. Known fields
//! are typed and extracted defensively (absence is `None`, never an
//! error); everything else the gateway sends is passed through untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{PaylinkError, PaylinkResult};

/// Invoice details returned by the gateway.
///
/// Immutable; constructed only from a successfully decoded response via
/// [`InvoiceResponse::from_response_data`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    /// Order status as reported by the gateway (e.g. `"Pending"`, `"Paid"`)
    #[serde(default)]
    pub order_status: Option<String>,

    /// Gateway-assigned transaction number.
    /// The gateway has been observed sending this as both a JSON string
    /// and a bare number, so both are accepted.
    #[serde(default, deserialize_with = "string_or_number")]
    pub transaction_no: Option<String>,

    /// Hosted payment page URL for this invoice
    #[serde(default)]
    pub url: Option<String>,

    /// Invoice amount
    #[serde(default)]
    pub amount: Option<f64>,

    /// QR code image URL for the payment page
    #[serde(default)]
    pub qr_url: Option<String>,

    /// Mobile-optimized payment page URL
    #[serde(default)]
    pub mobile_url: Option<String>,

    /// Status-check URL
    #[serde(default)]
    pub check_url: Option<String>,

    /// Per-attempt payment errors reported by the gateway
    #[serde(default)]
    pub payment_errors: Option<Value>,

    /// Any remaining gateway fields, passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InvoiceResponse {
    /// Build an `InvoiceResponse` from a decoded response object.
    pub fn from_response_data(data: Map<String, Value>) -> PaylinkResult<Self> {
        serde_json::from_value(Value::Object(data))
            .map_err(|e| PaylinkError::Serialization(format!("invalid invoice response: {e}")))
    }
}

/// Accept a JSON string or number, returning its string form.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
