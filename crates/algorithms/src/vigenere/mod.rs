//! Vigenere cipher: repeating-key modular shift
//!
//! The key is cycled to the length of the cleaned text; each letter is
//! shifted by its key letter's index, modulo 26. The trace covers the first
//! three positions, which is enough to show the pattern without drowning
//! the display.

use serde::Serialize;

use clcrypt_api::Result;
use clcrypt_params::alphabet::ALPHABET_LEN;
use clcrypt_params::vigenere::TRACE_POSITIONS;

use crate::text;


/// Trace of one letter substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VigenereStep {
    /// Zero-based position in the cleaned text
    pub position: usize,
    /// The input letter at this position
    pub text_char: char,
    /// The key letter applied at this position
    pub key_char: char,
    /// Letter index of the input
    pub text_value: i64,
    /// Letter index of the key letter
    pub key_value: i64,
    /// Formatted shift arithmetic for display
    pub calculation: String,
    /// The output letter
    pub result_char: char,
}

/// Result of a Vigenere encryption or decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VigenereOutput {
    /// The transformed text
    pub text: String,
    /// Trace of the first few positions
    pub steps: Vec<VigenereStep>,
    /// The cleaned key
    pub key: String,
    /// The key cycled to the text length
    pub repeated_key: String,
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// The Vigenere cipher over a fixed alphabetic key.
#[derive(Debug, Clone)]
pub struct VigenereCipher {
    key: String,
}

impl VigenereCipher {
    /// Build a cipher from an alphabetic key.
    pub fn new(key: &str) -> Result<Self> {
        text::ensure_letters("vigenere key", key)?;
        Ok(Self {
            key: text::clean(key),
        })
    }

    /// The cleaned key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The key cycled to `len` letters: position `i` uses
    /// `key[i mod key_len]`.
    pub fn repeat_key(&self, len: usize) -> String {
        self.key.chars().cycle().take(len).collect()
    }

    /// Encrypt `plaintext`: each letter shifts forward by its key letter.
    pub fn encrypt(&self, plaintext: &str) -> Result<VigenereOutput> {
        text::ensure_letters("vigenere encrypt", plaintext)?;
        Ok(self.transform(&text::clean(plaintext), Direction::Encrypt))
    }

    /// Decrypt `ciphertext`: each letter shifts back by its key letter.
    pub fn decrypt(&self, ciphertext: &str) -> Result<VigenereOutput> {
        text::ensure_letters("vigenere decrypt", ciphertext)?;
        Ok(self.transform(&text::clean(ciphertext), Direction::Decrypt))
    }

    fn transform(&self, cleaned: &str, direction: Direction) -> VigenereOutput {
        let repeated_key = self.repeat_key(cleaned.chars().count());
        let mut out = String::with_capacity(cleaned.len());
        let mut steps = Vec::with_capacity(TRACE_POSITIONS);

        for (position, (text_char, key_char)) in
            cleaned.chars().zip(repeated_key.chars()).enumerate()
        {
            let text_value = text::letter_index(text_char);
            let key_value = text::letter_index(key_char);
            let (result_value, calculation) = match direction {
                Direction::Encrypt => {
                    let v = (text_value + key_value).rem_euclid(ALPHABET_LEN);
                    (v, format!("({text_value} + {key_value}) mod 26 = {v}"))
                }
                Direction::Decrypt => {
                    let v = (text_value - key_value).rem_euclid(ALPHABET_LEN);
                    (v, format!("({text_value} - {key_value}) mod 26 = {v}"))
                }
            };
            let result_char = text::index_letter(result_value);
            out.push(result_char);

            if position < TRACE_POSITIONS {
                steps.push(VigenereStep {
                    position,
                    text_char,
                    key_char,
                    text_value,
                    key_value,
                    calculation,
                    result_char,
                });
            }
        }

        VigenereOutput {
            text: out,
            steps,
            key: self.key.clone(),
            repeated_key,
        }
    }
}
