//! Matrix algebra modulo 26 for the Hill cipher
//!
//! One recursive cofactor-expansion determinant covers every supported
//! size (2x2 through 4x4) with a 1x1 base case, instead of three
//! size-specific code paths. Callers never ask for larger matrices, so no
//! attempt is made at an efficient general-n algorithm.

use clcrypt_api::{validate, Error, Result};
use clcrypt_params::alphabet::ALPHABET_LEN;
use clcrypt_params::hill::{MAX_KEY_DIM, MAX_KEY_ENTRY_ABS, MIN_KEY_DIM};

use crate::modular;


/// A validated square key matrix for the Hill cipher.
///
/// Invariants held by construction: the matrix is square with dimension
/// 2, 3 or 4, and every entry fits within
/// [`MAX_KEY_ENTRY_ABS`](clcrypt_params::hill::MAX_KEY_ENTRY_ABS) so the
/// cofactor arithmetic below cannot overflow. Invertibility modulo 26 is
/// deliberately NOT an invariant: encryption works with any key, and only
/// [`KeyMatrix::inverse_mod26`] can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    rows: Vec<Vec<i64>>,
}

impl KeyMatrix {
    /// Validate and wrap caller-supplied rows.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let n = rows.len();
        validate::parameter(
            (MIN_KEY_DIM..=MAX_KEY_DIM).contains(&n),
            "key matrix",
            "matrix must be square with size 2, 3 or 4",
        )?;
        for row in &rows {
            if row.len() != n {
                return Err(Error::invalid_input(
                    "key matrix",
                    format!("expected {n} entries per row, got {}", row.len()),
                ));
            }
        }
        for &entry in rows.iter().flatten() {
            if entry.abs() > MAX_KEY_ENTRY_ABS {
                return Err(Error::invalid_input(
                    "key matrix",
                    format!("entry {entry} is outside the accepted range +/-{MAX_KEY_ENTRY_ABS}"),
                ));
            }
        }
        Ok(Self { rows })
    }

    /// Matrix dimension `n`.
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Borrow the underlying rows.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Clone the rows out, e.g. for echoing the key in an output trace.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows.clone()
    }

    /// Determinant by recursive cofactor expansion along the first row.
    pub fn determinant(&self) -> i64 {
        determinant(&self.rows)
    }

    /// Cofactor matrix: entry `(i, j)` is `(-1)^(i+j)` times the
    /// determinant of the minor at `(i, j)`.
    pub fn cofactor_matrix(&self) -> Vec<Vec<i64>> {
        let n = self.dim();
        (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                        sign * determinant(&minor(&self.rows, i, j))
                    })
                    .collect()
            })
            .collect()
    }

    /// Adjugate: the transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Vec<Vec<i64>> {
        let cofactor = self.cofactor_matrix();
        let n = self.dim();
        (0..n)
            .map(|i| (0..n).map(|j| cofactor[j][i]).collect())
            .collect()
    }

    /// Inverse modulo 26, every entry normalized into `[0, 26)`.
    ///
    /// Fails with [`Error::NotInvertible`] exactly when the determinant
    /// shares a factor with 26; that is the only failure mode.
    pub fn inverse_mod26(&self) -> Result<KeyMatrix> {
        let det = self.determinant().rem_euclid(ALPHABET_LEN);
        let det_inv = modular::mod_inverse(det, ALPHABET_LEN)
            .map_err(|e| e.with_context("hill key matrix"))?;

        let rows = self
            .adjugate()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| (v.rem_euclid(ALPHABET_LEN) * det_inv).rem_euclid(ALPHABET_LEN))
                    .collect()
            })
            .collect();
        Ok(Self { rows })
    }

    /// Matrix-vector product with every component reduced into `[0, 26)`.
    pub fn mul_vector_mod26(&self, vector: &[i64]) -> Vec<i64> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(vector)
                    .map(|(m, v)| m * v)
                    .sum::<i64>()
                    .rem_euclid(ALPHABET_LEN)
            })
            .collect()
    }
}

/// Determinant of a square matrix by cofactor expansion along the first
/// row, recursing into minors down to the 1x1 base case.
pub fn determinant(matrix: &[Vec<i64>]) -> i64 {
    if matrix.len() == 1 {
        return matrix[0][0];
    }
    let mut det = 0;
    let mut sign = 1;
    for (col, entry) in matrix[0].iter().enumerate() {
        det += sign * entry * determinant(&minor(matrix, 0, col));
        sign = -sign;
    }
    det
}

/// The minor of `matrix` at `(row, col)`: a copy with that row and column
/// removed.
pub fn minor(matrix: &[Vec<i64>], row: usize, col: usize) -> Vec<Vec<i64>> {
    matrix
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|(j, _)| *j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}
