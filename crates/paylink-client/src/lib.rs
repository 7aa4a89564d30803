//! # paylink-client
//!
//! HTTP client for the Paylink payment gateway: authentication, invoice
//! creation, retrieval, and cancellation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paylink_client::{AddInvoiceRequest, PaylinkClient};
//! use paylink_core::Product;
//!
//! // Pilot environment, built-in credentials
//! let client = PaylinkClient::test();
//! // Live environment: PaylinkClient::production(api_id, secret_key)?
//!
//! let request = AddInvoiceRequest::new(
//!     170.0,
//!     "0512345678",
//!     "Mohammed Ali",
//!     "123456789",
//!     vec![
//!         Product::new("Book", 50.0, 2),
//!         Product::new("Pen", 7.0, 10),
//!     ],
//!     "https://example.com",
//! )
//! .with_client_email("mohammed@test.com")
//! .with_card_brands(["mada", "visaMastercard"]);
//!
//! let invoice = client.add_invoice(request).await?;
//! println!("pay at {}", invoice.url.unwrap_or_default());
//!
//! // Later
//! let invoice = client.get_invoice("1714289084591").await?;
//! let cancelled = client.cancel_invoice("1714289084591").await?;
//! ```
//!
//! The client authenticates lazily on the first operation and reuses the
//! bearer token for the lifetime of the instance. Tokens are not
//! persisted across process restarts, and there is no retry logic;
//! errors propagate to the caller unchanged.

pub mod client;
pub mod config;
pub mod request;

// Re-exports
pub use client::PaylinkClient;
pub use config::{Environment, PaylinkConfig};
pub use request::AddInvoiceRequest;

// Callers usually need the core types alongside the client
pub use paylink_core::{
    filter_card_brands, CardBrand, InvoiceResponse, PaylinkError, PaylinkResult, Product,
};
