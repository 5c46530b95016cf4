//! Shared building blocks for the TODO provider.
//!
//! This crate holds the small value types every other crate leans on:
//! location-tracked errors and the redacted wrapper used for API tokens.
//!
//! ## Architecture
//!
//! - **common** (this crate): Value types with no provider logic
//! - **provider-core**: Configuration resolution and the TODO API client
//! - **terraform-provider-todo**: Binary wiring everything together

pub mod error;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use redacted_token::RedactedToken;

#[cfg(test)]
mod tests;
