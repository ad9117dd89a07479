//! Constants shared across the clcrypt cipher implementations

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
pub mod dh;
pub mod hill;
pub mod playfair;
pub mod vigenere;
