//! Constants for the Hill cipher

/// Smallest supported key-matrix dimension
pub const MIN_KEY_DIM: usize = 2;

/// Largest supported key-matrix dimension
pub const MAX_KEY_DIM: usize = 4;

/// Largest accepted absolute value for a key-matrix entry. Keeps the
/// cofactor-expansion determinant of a 4x4 matrix inside `i64` range.
pub const MAX_KEY_ENTRY_ABS: i64 = 9_999;
