//! Playfair cipher: digraph substitution over a 5x5 key square
//!
//! The key square holds the 25 letters A-Z with J merged into I, ordered by
//! first occurrence in the key and then the remaining alphabet. The square
//! is a bijection between its cells and the 25-letter alphabet; lookups are
//! backed by a per-letter position table built at construction so the
//! digraph rules never search the grid.

use serde::Serialize;

use clcrypt_api::{Error, Result};
use clcrypt_params::alphabet::{LETTER_BASE, PAD_LETTER};
use clcrypt_params::playfair::{DROPPED_LETTER, GRID_DIM, MERGED_LETTER};

use crate::text;


/// Result of a Playfair encryption or decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayfairOutput {
    /// The transformed text
    pub text: String,
    /// One human-readable explanation per digraph
    pub steps: Vec<String>,
    /// The key square, row by row, for display
    pub key_square: Vec<String>,
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Neighbor offset for the same-row/same-column rules: right/down when
    /// encrypting, left/up (i.e. +4 mod 5) when decrypting.
    fn shift(self) -> usize {
        match self {
            Direction::Encrypt => 1,
            Direction::Decrypt => GRID_DIM - 1,
        }
    }
}

/// The Playfair cipher over a fixed key square.
#[derive(Debug, Clone)]
pub struct PlayfairCipher {
    square: [[char; GRID_DIM]; GRID_DIM],
    positions: [(usize, usize); 26],
}

impl PlayfairCipher {
    /// Derive the key square from a key string.
    ///
    /// The key must be non-empty and contain only letters and whitespace.
    pub fn new(key: &str) -> Result<Self> {
        text::ensure_letters("playfair key", key)?;

        let mut order = String::with_capacity(GRID_DIM * GRID_DIM);
        let mut seen = [false; 26];
        let mark = |c: char, seen: &mut [bool; 26], order: &mut String| {
            let idx = (c as u8 - LETTER_BASE) as usize;
            if !seen[idx] {
                seen[idx] = true;
                order.push(c);
            }
        };

        for c in text::clean(key).chars().map(merge) {
            mark(c, &mut seen, &mut order);
        }
        for c in ('A'..='Z').filter(|&c| c != DROPPED_LETTER) {
            mark(c, &mut seen, &mut order);
        }

        let mut square = [[' '; GRID_DIM]; GRID_DIM];
        let mut positions = [(0, 0); 26];
        for (idx, c) in order.chars().enumerate() {
            let cell = (idx / GRID_DIM, idx % GRID_DIM);
            square[cell.0][cell.1] = c;
            positions[(c as u8 - LETTER_BASE) as usize] = cell;
        }
        // J shares I's cell
        positions[(DROPPED_LETTER as u8 - LETTER_BASE) as usize] =
            positions[(MERGED_LETTER as u8 - LETTER_BASE) as usize];

        Ok(Self { square, positions })
    }

    /// The derived key square, row by row.
    pub fn key_square(&self) -> Vec<String> {
        self.square.iter().map(|row| row.iter().collect()).collect()
    }

    /// Encrypt `plaintext`, returning the ciphertext and a per-digraph
    /// trace.
    pub fn encrypt(&self, plaintext: &str) -> Result<PlayfairOutput> {
        text::ensure_letters("playfair encrypt", plaintext)?;
        let prepared = prepare_text(plaintext);
        Ok(self.transform(&prepared, Direction::Encrypt))
    }

    /// Decrypt `ciphertext`.
    ///
    /// The cleaned ciphertext must have even length; Playfair ciphertext is
    /// produced digraph by digraph, so an odd length means the input is
    /// truncated or corrupt.
    pub fn decrypt(&self, ciphertext: &str) -> Result<PlayfairOutput> {
        text::ensure_letters("playfair decrypt", ciphertext)?;
        let cleaned: String = text::clean(ciphertext).chars().map(merge).collect();
        if cleaned.len() % 2 != 0 {
            return Err(Error::invalid_input(
                "playfair decrypt",
                format!("ciphertext length {} is odd; digraphs are pairs", cleaned.len()),
            ));
        }
        Ok(self.transform(&cleaned, Direction::Decrypt))
    }

    fn transform(&self, digraphs: &str, direction: Direction) -> PlayfairOutput {
        let chars: Vec<char> = digraphs.chars().collect();
        let mut out = String::with_capacity(chars.len());
        let mut steps = Vec::with_capacity(chars.len() / 2);

        for pair in chars.chunks(2) {
            let (a, b) = (pair[0], pair[1]);
            let (r1, c1) = self.position(a);
            let (r2, c2) = self.position(b);
            let shift = direction.shift();

            let (x, y, rule) = if r1 == r2 {
                (
                    self.square[r1][(c1 + shift) % GRID_DIM],
                    self.square[r2][(c2 + shift) % GRID_DIM],
                    "Same row",
                )
            } else if c1 == c2 {
                (
                    self.square[(r1 + shift) % GRID_DIM][c1],
                    self.square[(r2 + shift) % GRID_DIM][c2],
                    "Same column",
                )
            } else {
                // Rectangle: swap columns; identical rule both directions
                (self.square[r1][c2], self.square[r2][c1], "Rectangle")
            };

            out.push(x);
            out.push(y);
            steps.push(format!("{a}{b} -> {rule} -> {x}{y}"));
        }

        PlayfairOutput {
            text: out,
            steps,
            key_square: self.key_square(),
        }
    }

    fn position(&self, c: char) -> (usize, usize) {
        self.positions[(c as u8 - LETTER_BASE) as usize]
    }
}

/// Prepare text for digraph processing: uppercase, merge J into I, strip
/// non-letters, insert `X` between the two identical letters of a doubled
/// digraph, and pad a final odd length with `X`.
pub fn prepare_text(raw: &str) -> String {
    let chars: Vec<char> = text::clean(raw).chars().map(merge).collect();
    let mut prepared = String::with_capacity(chars.len() + 2);

    let mut i = 0;
    while i < chars.len() {
        let a = chars[i];
        prepared.push(a);
        match chars.get(i + 1) {
            Some(&b) if b == a => {
                prepared.push(PAD_LETTER);
                i += 1;
            }
            Some(&b) => {
                prepared.push(b);
                i += 2;
            }
            None => {
                prepared.push(PAD_LETTER);
                i += 1;
            }
        }
    }
    prepared
}

fn merge(c: char) -> char {
    if c == DROPPED_LETTER {
        MERGED_LETTER
    } else {
        c
    }
}
