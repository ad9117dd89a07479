//! Error type definitions for cipher operations

use thiserror::Error;

/// Primary error type for cipher and key-exchange operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied field is missing, empty, or malformed: text with
    /// characters outside A-Z, a matrix of the wrong shape, and so on.
    #[error("invalid input for {context}: {message}")]
    InvalidInput {
        /// Operation that rejected the input
        context: &'static str,
        /// Which value was rejected and why
        message: String,
    },

    /// A value has no modular inverse, so decryption cannot proceed. For
    /// the Hill cipher this means the key determinant shares a factor
    /// with 26.
    #[error("{context}: {value} has no inverse modulo {modulus}")]
    NotInvertible {
        /// Operation that required the inverse
        context: &'static str,
        /// The non-invertible value, already reduced into `[0, modulus)`
        value: i64,
        /// The modulus the inverse was sought under
        modulus: i64,
    },

    /// A number-theoretic parameter is outside its required domain: a
    /// composite modulus, a generator that is not a primitive root, a
    /// private key outside `[1, p)`.
    #[error("domain error in {context}: {message}")]
    Domain {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Which value was rejected and why
        message: String,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an [`Error::InvalidInput`]
    pub fn invalid_input(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidInput {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an [`Error::Domain`]
    pub fn domain(context: &'static str, message: impl Into<String>) -> Self {
        Error::Domain {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its details.
    /// Used when a low-level failure surfaces through a higher-level
    /// operation, e.g. a modular-inverse failure reported by the Hill
    /// key-matrix inversion.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidInput { message, .. } => Self::InvalidInput { context, message },
            Self::NotInvertible { value, modulus, .. } => Self::NotInvertible {
                context,
                value,
                modulus,
            },
            Self::Domain { message, .. } => Self::Domain { context, message },
        }
    }
}
