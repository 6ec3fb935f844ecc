//! # Text Module
//!
//! Letter-only text types the cipher consumes and produces. Both are always an
//! even number of uppercase letters, so they split into whole 2-letter blocks.

use std::fmt;
use std::str::FromStr;

use crate::errors::HillCipherError;
use crate::preset::alphabet::{PADDING, letter_of, residue_of};

/// Uppercase letters with everything else stripped, padded with `'X'` to even length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

/// Output of block encryption: uppercase letters, even length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CipherText(String);

/// Strips non-letters, uppercases, and pads odd-length results with `'X'`.
///
/// Never fails: input without letters gives empty text.
///
/// # Example
///
/// ```
/// # use hill_cipher::text::normalize;
/// assert_eq!(normalize("He11o, World!").as_str(), "HEOWORLD");
/// assert_eq!(normalize("help").as_str(), "HELP");
/// assert!(normalize("1234 !?").is_empty());
/// ```
pub fn normalize(raw: &str) -> NormalizedText {
    let mut text: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if text.len() % 2 != 0 {
        text.push(PADDING);
    }

    NormalizedText(text)
}

impl NormalizedText {
    pub(crate) fn from_residues(residues: impl IntoIterator<Item = i64>) -> Self {
        Self(residues.into_iter().map(letter_of).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn residues(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.chars().filter_map(residue_of)
    }
}

impl CipherText {
    pub(crate) fn from_residues(residues: impl IntoIterator<Item = i64>) -> Self {
        Self(residues.into_iter().map(letter_of).collect())
    }

    /// Reads cipher text supplied from outside the engine.
    ///
    /// Letters are uppercased and whitespace is skipped. Anything else, or an
    /// odd number of letters, cannot have come out of the encryptor.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::MalformedCipherText` in both cases.
    pub fn parse(raw: &str) -> Result<Self, HillCipherError> {
        let mut text = String::with_capacity(raw.len());
        for c in raw.chars().filter(|c| !c.is_whitespace()) {
            if !c.is_ascii_alphabetic() {
                return Err(HillCipherError::MalformedCipherText(format!(
                    "Unexpected character '{}'",
                    c
                )));
            }
            text.push(c.to_ascii_uppercase());
        }

        if text.len() % 2 != 0 {
            return Err(HillCipherError::MalformedCipherText(format!(
                "Expected an even number of letters, got {}",
                text.len()
            )));
        }

        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn residues(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.chars().filter_map(residue_of)
    }
}

impl FromStr for CipherText {
    type Err = HillCipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CipherText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NormalizedText> for String {
    fn from(text: NormalizedText) -> Self {
        text.0
    }
}

impl From<CipherText> for String {
    fn from(text: CipherText) -> Self {
        text.0
    }
}
