//! Shared text handling for the letter-based ciphers

use clcrypt_api::{validate, Result};
use clcrypt_params::alphabet::{ALPHABET_LEN, LETTER_BASE};

/// Reject raw input that is empty or contains anything besides letters and
/// whitespace. Runs before cleaning so the caller learns exactly which
/// character was unacceptable.
pub(crate) fn ensure_letters(context: &'static str, raw: &str) -> Result<()> {
    validate::non_empty(context, raw)?;
    validate::alphabetic(context, raw)
}

/// Uppercase and keep only the letters A-Z.
pub(crate) fn clean(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Letter index in the cipher alphabet: `A=0 .. Z=25`.
pub(crate) fn letter_index(c: char) -> i64 {
    i64::from(c as u8 - LETTER_BASE)
}

/// Letter for an index, reduced into `[0, 26)` first.
pub(crate) fn index_letter(value: i64) -> char {
    char::from(LETTER_BASE + value.rem_euclid(ALPHABET_LEN) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_uppercases_and_strips() {
        assert_eq!(clean("He lp!"), "HELP");
        assert_eq!(clean("attack at dawn"), "ATTACKATDAWN");
    }

    #[test]
    fn letter_round_trip() {
        assert_eq!(letter_index('A'), 0);
        assert_eq!(letter_index('Z'), 25);
        assert_eq!(index_letter(25), 'Z');
        assert_eq!(index_letter(-1), 'Z');
        assert_eq!(index_letter(26), 'A');
    }
}
