//! Validation utilities shared by the cipher implementations
//!
//! Each helper checks one precondition and returns a specific error naming
//! the value that failed, so the boundary layer can surface an actionable
//! message before any computation runs.

use crate::error::{Error, Result};

/// Validate an arbitrary parameter condition
#[inline]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_input(context, reason));
    }
    Ok(())
}

/// Validate that required text is present and not just whitespace
#[inline]
pub fn non_empty(context: &'static str, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::invalid_input(context, "required text is empty"));
    }
    Ok(())
}

/// Validate that text contains only letters and whitespace. The letter-based
/// ciphers strip whitespace during cleaning; anything else is rejected here.
#[inline]
pub fn alphabetic(context: &'static str, text: &str) -> Result<()> {
    match text
        .chars()
        .find(|c| !c.is_ascii_alphabetic() && !c.is_whitespace())
    {
        Some(c) => Err(Error::invalid_input(
            context,
            format!("unsupported character {c:?}; only letters A-Z are allowed"),
        )),
        None => Ok(()),
    }
}
