//! # Product Types
//!
//! Invoice line items for the Paylink gateway.
//! Products are serialized verbatim into the add-invoice request payload
//! using the gateway's field names.

use serde::{Deserialize, Serialize};

use crate::error::{PaylinkError, PaylinkResult};

/// A single purchasable line item on an invoice.
///
/// Only `title`, `price`, and `qty` are required by the gateway; the rest
/// are serialized as JSON nulls when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display title
    pub title: String,

    /// Unit price
    pub price: f64,

    /// Quantity (at least 1)
    pub qty: u32,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the product is digital (no shipping)
    #[serde(default)]
    pub is_digital: Option<bool>,

    /// Product image URL
    #[serde(default)]
    pub image_src: Option<String>,

    /// Product-specific VAT rate, when it differs from the invoice default
    #[serde(default)]
    pub specific_vat: Option<f64>,

    /// Merchant cost of the product (for reporting)
    #[serde(default)]
    pub product_cost: Option<f64>,
}

impl Product {
    /// Create a product with the required fields
    pub fn new(title: impl Into<String>, price: f64, qty: u32) -> Self {
        Self {
            title: title.into(),
            price,
            qty,
            description: None,
            is_digital: None,
            image_src: None,
            specific_vat: None,
            product_cost: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: mark as digital
    pub fn with_digital(mut self, is_digital: bool) -> Self {
        self.is_digital = Some(is_digital);
        self
    }

    /// Builder: set image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_src = Some(url.into());
        self
    }

    /// Builder: set product-specific VAT rate
    pub fn with_specific_vat(mut self, vat: f64) -> Self {
        self.specific_vat = Some(vat);
        self
    }

    /// Builder: set merchant cost
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.product_cost = Some(cost);
        self
    }

    /// Check the field invariants the gateway expects.
    ///
    /// Returns an error describing the first violation found.
    pub fn validate(&self) -> PaylinkResult<()> {
        if self.title.trim().is_empty() {
            return Err(PaylinkError::InvalidArgument(
                "product title must not be empty".into(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(PaylinkError::InvalidArgument(format!(
                "product price must be a non-negative number, got {}",
                self.price
            )));
        }
        if self.qty == 0 {
            return Err(PaylinkError::InvalidArgument(
                "product qty must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Line total (price × qty)
    pub fn total(&self) -> f64 {
        self.price * self.qty as f64
    }
}
