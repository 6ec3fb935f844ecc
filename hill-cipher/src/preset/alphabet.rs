//! Letter <-> residue mapping for the 26-letter Latin alphabet.

use crate::ring::Ring;

/// Letter appended to odd-length text so it splits into whole blocks.
pub const PADDING: char = 'X';

/// Maps an uppercase ASCII letter to its residue (`'A' -> 0`, ..., `'Z' -> 25`).
///
/// Returns `None` for anything else, lowercase included.
pub fn residue_of(letter: char) -> Option<i64> {
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as i64)
}

/// Maps a residue back to its letter, reducing it mod 26 first.
pub fn letter_of(residue: i64) -> char {
    char::from(b'A' + Ring::alphabet().normalize(residue) as u8)
}
