//! Hill cipher: block substitution by matrix multiplication modulo 26
//!
//! The cipher holds only its validated key matrix; every invocation is a
//! pure function of that key and the supplied text. Decryption applies the
//! key's inverse modulo 26 and therefore requires the key determinant to be
//! coprime with 26.

use serde::Serialize;

use clcrypt_api::{Error, Result};
use clcrypt_params::alphabet::PAD_LETTER;

use crate::matrix::KeyMatrix;
use crate::text;

#[cfg(test)]
mod tests;

/// Trace of one block transformation, recorded for the first block only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HillStep {
    /// The input block letters
    pub block: String,
    /// The block as letter indices
    pub vector: Vec<i64>,
    /// `(M * vector) mod 26`
    pub product: Vec<i64>,
    /// The output block letters
    pub result_block: String,
    /// Formatted equation for display
    pub calculation: String,
}

/// Result of a Hill encryption or decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HillOutput {
    /// The transformed text
    pub text: String,
    /// First-block trace; enough for explanatory display
    pub steps: Vec<HillStep>,
    /// The matrix applied in this direction (the inverse key when
    /// decrypting)
    pub key_matrix: Vec<Vec<i64>>,
}

/// The Hill cipher over a fixed key matrix.
#[derive(Debug, Clone)]
pub struct HillCipher {
    key: KeyMatrix,
}

impl HillCipher {
    /// Build a cipher from a validated key matrix.
    ///
    /// Invertibility is not checked here: any key encrypts, and a
    /// non-invertible key fails on [`HillCipher::decrypt`] where the
    /// inverse is actually needed.
    pub fn new(key: KeyMatrix) -> Self {
        Self { key }
    }

    /// The key matrix this cipher was built with.
    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    /// Uppercase, strip non-letters, and right-pad with `X` until the
    /// length is a multiple of the block size.
    pub fn prepare_text(&self, raw: &str) -> String {
        let mut cleaned = text::clean(raw);
        let n = self.key.dim();
        while cleaned.len() % n != 0 {
            cleaned.push(PAD_LETTER);
        }
        cleaned
    }

    /// Encrypt `plaintext`, returning the ciphertext and a first-block
    /// trace.
    pub fn encrypt(&self, plaintext: &str) -> Result<HillOutput> {
        text::ensure_letters("hill encrypt", plaintext)?;
        let prepared = self.prepare_text(plaintext);
        Ok(transform(&self.key, &prepared))
    }

    /// Decrypt `ciphertext` with the inverse key matrix.
    ///
    /// The cleaned ciphertext must already be block-aligned; a length that
    /// is not a multiple of the block size is rejected rather than padded,
    /// since padding here would silently corrupt the recovered plaintext.
    pub fn decrypt(&self, ciphertext: &str) -> Result<HillOutput> {
        text::ensure_letters("hill decrypt", ciphertext)?;
        let cleaned = text::clean(ciphertext);
        let n = self.key.dim();
        if cleaned.len() % n != 0 {
            return Err(Error::invalid_input(
                "hill decrypt",
                format!(
                    "ciphertext length {} is not a multiple of the block size {n}",
                    cleaned.len()
                ),
            ));
        }
        let inverse = self.key.inverse_mod26()?;
        Ok(transform(&inverse, &cleaned))
    }
}

/// Split cleaned text into letter-index vectors of length `n`.
///
/// The input must contain only the letters A-Z and have a length that is a
/// multiple of `n`, as produced by [`HillCipher::prepare_text`].
pub fn text_to_vectors(prepared: &str, n: usize) -> Vec<Vec<i64>> {
    prepared
        .chars()
        .map(text::letter_index)
        .collect::<Vec<_>>()
        .chunks(n)
        .map(<[i64]>::to_vec)
        .collect()
}

fn transform(matrix: &KeyMatrix, prepared: &str) -> HillOutput {
    let n = matrix.dim();
    let mut out = String::with_capacity(prepared.len());
    let mut steps = Vec::new();

    for (idx, vector) in text_to_vectors(prepared, n).iter().enumerate() {
        let product = matrix.mul_vector_mod26(vector);
        let result_block: String = product.iter().map(|&v| text::index_letter(v)).collect();
        out.push_str(&result_block);

        if idx == 0 {
            let block: String = vector.iter().map(|&v| text::index_letter(v)).collect();
            let calculation = equation(matrix, vector, &product);
            steps.push(HillStep {
                block,
                vector: vector.clone(),
                product,
                result_block,
                calculation,
            });
        }
    }

    HillOutput {
        text: out,
        steps,
        key_matrix: matrix.to_rows(),
    }
}

fn equation(matrix: &KeyMatrix, vector: &[i64], product: &[i64]) -> String {
    let rows: String = matrix
        .rows()
        .iter()
        .map(|row| format!("[{}]", join(row)))
        .collect();
    format!("{rows} x [{}] = [{}] (mod 26)", join(vector), join(product))
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
