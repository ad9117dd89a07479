//! Constants for the A-Z cipher alphabet

/// Size of the cipher alphabet; also the modulus for all letter arithmetic
pub const ALPHABET_LEN: i64 = 26;

/// ASCII code of the first letter, used to map `A..Z` onto `0..25`
pub const LETTER_BASE: u8 = b'A';

/// Letter used to pad short blocks and split doubled digraphs
pub const PAD_LETTER: char = 'X';
