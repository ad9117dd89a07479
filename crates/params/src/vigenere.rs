//! Constants for the Vigenere cipher

/// Number of leading positions recorded in the explanatory trace
pub const TRACE_POSITIONS: usize = 3;
