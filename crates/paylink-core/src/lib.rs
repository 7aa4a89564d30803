//! # paylink-core
//!
//! Value objects and error types for the Paylink gateway SDK.
//!
//! This crate provides:
//! - `Product` for invoice line items
//! - `InvoiceResponse` for decoded gateway responses
//! - `CardBrand` and `filter_card_brands` for payment-method selection
//! - `PaylinkError` for typed error handling
//!
//! The HTTP client lives in the `paylink-client` crate.

pub mod brand;
pub mod error;
pub mod invoice;
pub mod product;

// Re-exports for convenience
pub use brand::{filter_card_brands, CardBrand};
pub use error::{PaylinkError, PaylinkResult};
pub use invoice::InvoiceResponse;
pub use product::Product;
