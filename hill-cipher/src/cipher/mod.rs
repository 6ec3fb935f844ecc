//! # Cipher Module
//!
//! The Hill cipher over 2-letter blocks: `C = K·P (mod 26)` to encrypt and
//! `P = K^-1·C (mod 26)` to decrypt.

use crate::errors::HillCipherError;
use crate::ring::{InverseMatrix, KeyMatrix, Ring};
use crate::text::{CipherText, NormalizedText, normalize};

use itertools::Itertools;

/// Multiplies every consecutive `(x, y)` pair of residues by `matrix`.
///
/// Callers guarantee an even number of residues; a trailing odd residue would be dropped.
fn transform_blocks(
    residues: impl Iterator<Item = i64>,
    matrix: &KeyMatrix,
) -> impl Iterator<Item = i64> {
    let ring = Ring::alphabet();
    let matrix = *matrix;

    residues
        .tuples::<(i64, i64)>()
        .flat_map(move |block| {
            let (first, second) = matrix.apply(block, &ring);
            [first, second]
        })
}

/// Encrypts normalized text block by block with `key`.
pub fn encrypt_blocks(text: &NormalizedText, key: &KeyMatrix) -> CipherText {
    log::trace!("Encrypting {} blocks with key {}", text.len() / 2, key);
    CipherText::from_residues(transform_blocks(text.residues(), key))
}

/// Computes the inverse of `key` over Z_26.
///
/// # Errors
///
/// Returns `HillCipherError::NotInvertible` if the determinant has no inverse mod 26.
pub fn invert_key_matrix(key: &KeyMatrix) -> Result<InverseMatrix, HillCipherError> {
    key.invert()
}

/// Decrypts cipher text block by block with a precomputed inverse key.
pub fn decrypt_blocks(cipher: &CipherText, inverse: &InverseMatrix) -> NormalizedText {
    log::trace!(
        "Decrypting {} blocks with inverse {}",
        cipher.len() / 2,
        inverse.matrix()
    );
    NormalizedText::from_residues(transform_blocks(cipher.residues(), inverse.matrix()))
}

/// Normalizes `plaintext` and encrypts it with `key`.
///
/// # Example
///
/// ```
/// # use hill_cipher::cipher::encrypt;
/// # use hill_cipher::ring::KeyMatrix;
/// assert_eq!(encrypt("help", &KeyMatrix::new(3, 3, 2, 5)), "HIAT");
/// ```
pub fn encrypt(plaintext: &str, key: &KeyMatrix) -> String {
    encrypt_blocks(&normalize(plaintext), key).into()
}

/// Inverts `key` and decrypts `ciphertext` with it.
///
/// The result is the normalized plaintext, padding included.
///
/// # Errors
///
/// Returns `HillCipherError::NotInvertible` for a key that cannot decrypt, and
/// `HillCipherError::MalformedCipherText` for text that is not an even run of letters.
///
/// # Example
///
/// ```
/// # use hill_cipher::cipher::decrypt;
/// # use hill_cipher::ring::KeyMatrix;
/// assert_eq!(decrypt("HIAT", &KeyMatrix::new(3, 3, 2, 5)).unwrap(), "HELP");
/// assert!(decrypt("HIAT", &KeyMatrix::new(2, 4, 1, 2)).is_err());
/// ```
pub fn decrypt(ciphertext: &str, key: &KeyMatrix) -> Result<String, HillCipherError> {
    let inverse = invert_key_matrix(key)?;
    let cipher = CipherText::parse(ciphertext)?;

    Ok(decrypt_blocks(&cipher, &inverse).into())
}

/// A key paired with its inverse, for encrypting and decrypting many messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HillCipher {
    key: KeyMatrix,
    inverse: InverseMatrix,
}

impl HillCipher {
    /// Inverts `key` once up front.
    pub fn try_with(key: KeyMatrix) -> Result<Self, HillCipherError> {
        let inverse = invert_key_matrix(&key)?;
        Ok(Self { key, inverse })
    }

    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    pub fn inverse(&self) -> &InverseMatrix {
        &self.inverse
    }

    pub fn encrypt(&self, plaintext: &str) -> String {
        encrypt(plaintext, &self.key)
    }

    pub fn decrypt(&self, ciphertext: &str) -> Result<String, HillCipherError> {
        let cipher = CipherText::parse(ciphertext)?;
        Ok(decrypt_blocks(&cipher, &self.inverse).into())
    }
}
