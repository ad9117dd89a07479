//! Classical cipher and number-theory implementations
//!
//! This crate provides the algorithmic core of clcrypt: modular arithmetic
//! over arbitrary-precision integers, matrix algebra modulo 26, the Hill,
//! Playfair and Vigenere substitution engines, and Diffie-Hellman key
//! exchange. Every cipher is a stateless value over its derived key
//! material: the same instance can serve concurrent invocations, and the
//! same inputs always produce byte-identical outputs.
//!
//! Each operation returns the transformed text together with a trace of
//! intermediate values (vectors, digraph substitutions, exchange steps)
//! meant for explanatory display.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module re-exports
pub use clcrypt_api::{validate, Error, Result};

// Number theory over arbitrary-precision integers
pub mod modular;

// Matrix algebra modulo 26
pub mod matrix;
pub use matrix::KeyMatrix;

// Cipher engines
pub mod hill;
pub mod playfair;
pub mod vigenere;
pub use hill::{HillCipher, HillOutput};
pub use playfair::{PlayfairCipher, PlayfairOutput};
pub use vigenere::{VigenereCipher, VigenereOutput};

// Key exchange
pub mod dh;
pub use dh::{exchange, generate_private_key, DhOutput, DhParams};

mod text;
