//! # clcrypt
//!
//! A modular library of classical and number-theoretic ciphers for
//! instruction: modular arithmetic, matrix algebra over Z/26Z, the Hill,
//! Playfair and Vigenere substitution engines, and Diffie-Hellman key
//! exchange. Every operation returns the transformed text together with a
//! trace of the intermediate values so a caller can explain the computation.
//!
//! These ciphers are pedagogical. No security properties are claimed and no
//! attempt is made to resist timing or side-channel attacks.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`clcrypt-api`]: Error taxonomy and validation helpers
//! - [`clcrypt-params`]: Shared constants (alphabet, grid sizes, limits)
//! - [`clcrypt-algorithms`]: The cipher and number-theory implementations

#![forbid(unsafe_code)]

pub use clcrypt_algorithms as algorithms;
pub use clcrypt_api as api;
pub use clcrypt_params as params;

/// Common imports for clcrypt users
pub mod prelude {
    // Error handling
    pub use crate::api::{Error, Result};

    // Cipher engines and their outputs
    pub use crate::algorithms::hill::{HillCipher, HillOutput};
    pub use crate::algorithms::matrix::KeyMatrix;
    pub use crate::algorithms::playfair::{PlayfairCipher, PlayfairOutput};
    pub use crate::algorithms::vigenere::{VigenereCipher, VigenereOutput};

    // Diffie-Hellman
    pub use crate::algorithms::dh::{exchange, generate_private_key, DhOutput, DhParams};
}
