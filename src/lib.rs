//! # tapsilat - Tapsilat payment API client
//!
//! An async client for the Tapsilat payment API. It covers the order
//! lifecycle (create, fetch, list, cancel, refund, terminate), payment terms,
//! subscriptions and organization settings.
//!
//! Two validators run before certain requests leave the client:
//! [`validate_installments`] parses the installment list offered at
//! checkout, and [`validate_gsm_number`] normalizes buyer phone numbers.
//!
//! ```no_run
//! use tapsilat::{Order, OrderBuyer, TapsilatClient};
//!
//! # async fn run() -> tapsilat::Result<()> {
//! let client = TapsilatClient::new("your-token")?;
//! let order = Order::new(100.0, "TRY", "tr")
//!     .with_buyer(OrderBuyer::new("John", "Doe", "john@doe.com").with_gsm_number("0555 123 45 67"))
//!     .with_enabled_installments("1,3,6")?;
//!
//! let created = client.create_order(order).await?;
//! println!("checkout at {}", created.checkout_url);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod validators;

// Re-exports for convenience
pub use client::TapsilatClient;
pub use config::ClientConfig;
pub use error::{Result, TapsilatError, ValidationError};
pub use types::*;
pub use validators::{validate_gsm_number, validate_installments};

/// Current version of the tapsilat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        assert_eq!(validate_installments("2,4").unwrap(), vec![2, 4]);
        assert_eq!(validate_gsm_number("05551234567").unwrap(), "05551234567");
        assert_eq!(order_status_name(9), Some("Completed"));
    }
}
