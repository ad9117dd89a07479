//! Error handling for the clcrypt cipher library
//!
//! Every cipher validates its inputs before any arithmetic runs, so the
//! variants here describe *which* input was rejected and why. Computation
//! after validation is expected never to fail.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod validate;

// Re-export the primary error type and result
pub use error::{Error, Result};

// Re-export validation utilities module
pub use validate as validation;

// Specialized result types for different operations
/// Result type for cipher operations
pub type CipherResult<T> = Result<T>;
/// Result type for key-exchange operations
pub type ExchangeResult<T> = Result<T>;
