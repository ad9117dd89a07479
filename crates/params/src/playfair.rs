//! Constants for the Playfair cipher

/// Side length of the Playfair key square
pub const GRID_DIM: usize = 5;

/// The letter dropped from the 26-letter alphabet to fit the 5x5 grid
pub const DROPPED_LETTER: char = 'J';

/// The letter that stands in for the dropped one
pub const MERGED_LETTER: char = 'I';
