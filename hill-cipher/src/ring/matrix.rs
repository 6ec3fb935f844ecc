//! Fixed-size 2×2 matrices over Z_26.

use std::fmt;
use std::str::FromStr;

use crate::errors::HillCipherError;
use crate::ring::Ring;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A 2×2 integer key matrix laid out as
///
/// ```text
/// | a b |
/// | c d |
/// ```
///
/// Entries may be any integer; every operation reduces them into `[0, 26)` first.
/// Serialized as nested rows, `[[a, b], [c, d]]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "[[i64; 2]; 2]", into = "[[i64; 2]; 2]")]
pub struct KeyMatrix {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl KeyMatrix {
    pub const fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }

    pub const fn identity() -> Self {
        Self::new(1, 0, 0, 1)
    }

    pub const fn rows(&self) -> [[i64; 2]; 2] {
        [[self.a, self.b], [self.c, self.d]]
    }

    /// Returns a copy with every entry in `[0, modulus)`.
    pub fn reduced(&self, ring: &Ring) -> Self {
        Self::new(
            ring.normalize(self.a),
            ring.normalize(self.b),
            ring.normalize(self.c),
            ring.normalize(self.d),
        )
    }

    /// Computes `ad - bc` in the ring; the result is always in `[0, modulus)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::{KeyMatrix, Ring};
    /// let key = KeyMatrix::new(3, 3, 2, 5);
    /// assert_eq!(key.determinant(&Ring::alphabet()), 9);
    /// ```
    pub fn determinant(&self, ring: &Ring) -> i64 {
        ring.sub(ring.mul(self.a, self.d), ring.mul(self.b, self.c))
    }

    /// Whether the determinant is a unit mod 26, i.e. the key can decrypt.
    pub fn is_invertible(&self) -> bool {
        let ring = Ring::alphabet();
        ring.is_unit(self.determinant(&ring))
    }

    /// Multiplies the column vector `(x, y)` by this matrix.
    pub fn apply(&self, (x, y): (i64, i64), ring: &Ring) -> (i64, i64) {
        (
            ring.add(ring.mul(self.a, x), ring.mul(self.b, y)),
            ring.add(ring.mul(self.c, x), ring.mul(self.d, y)),
        )
    }

    /// Computes the matrix product `self · other` in the ring.
    pub fn mul(&self, other: &KeyMatrix, ring: &Ring) -> KeyMatrix {
        let (a, c) = self.apply((other.a, other.c), ring);
        let (b, d) = self.apply((other.b, other.d), ring);
        KeyMatrix::new(a, b, c, d)
    }

    /// Draws uniform entries in `[0, 26)` until the matrix is invertible.
    pub fn random_invertible() -> Self {
        let mut rng = rand::rng();
        let modulus = Ring::alphabet().modulus() as i64;

        loop {
            let key = Self::new(
                rng.random_range(0..modulus),
                rng.random_range(0..modulus),
                rng.random_range(0..modulus),
                rng.random_range(0..modulus),
            );
            if key.is_invertible() {
                return key;
            }
        }
    }

    /// Inverts the matrix over Z_26 using the adjugate scaled by the determinant inverse.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotInvertible` when the determinant shares a factor with 26.
    pub fn invert(&self) -> Result<InverseMatrix, HillCipherError> {
        let ring = Ring::alphabet();
        let determinant = self.determinant(&ring);
        let determinant_inverse = ring
            .inv(determinant)
            .map_err(|_| HillCipherError::NotInvertible { determinant })?;

        let matrix = KeyMatrix::new(
            ring.mul(determinant_inverse, self.d),
            ring.mul(determinant_inverse, ring.neg(self.b)),
            ring.mul(determinant_inverse, ring.neg(self.c)),
            ring.mul(determinant_inverse, self.a),
        );

        log::debug!(
            "Inverted key {}: determinant={} determinant_inverse={} inverse={}",
            self,
            determinant,
            determinant_inverse,
            matrix
        );

        Ok(InverseMatrix {
            matrix,
            determinant,
            determinant_inverse,
        })
    }
}

impl From<[[i64; 2]; 2]> for KeyMatrix {
    fn from([[a, b], [c, d]]: [[i64; 2]; 2]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl From<KeyMatrix> for [[i64; 2]; 2] {
    fn from(key: KeyMatrix) -> Self {
        key.rows()
    }
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}, {}], [{}, {}]]", self.a, self.b, self.c, self.d)
    }
}

/// Parses four integers in row-major order.
///
/// Commas, whitespace and surrounding brackets are all accepted as separators,
/// so `"3,3,2,5"`, `"3 3 2 5"` and `"[[3, 3], [2, 5]]"` are the same key.
impl FromStr for KeyMatrix {
    type Err = HillCipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = s
            .split(|c: char| c == ',' || c == '[' || c == ']' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<i64>().map_err(|e| {
                    HillCipherError::InvalidKey(format!("'{}' is not an integer: {}", token, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match entries.as_slice() {
            &[a, b, c, d] => Ok(Self::new(a, b, c, d)),
            other => Err(HillCipherError::InvalidKey(format!(
                "Expected 4 entries for a 2x2 matrix, got {}",
                other.len()
            ))),
        }
    }
}

/// Inverse of a [`KeyMatrix`] over Z_26, together with the values it was built from.
///
/// Only obtainable through [`KeyMatrix::invert`], so holding one proves the key was invertible.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InverseMatrix {
    matrix: KeyMatrix,
    determinant: i64,
    determinant_inverse: i64,
}

impl InverseMatrix {
    /// Entries of the inverse, all in `[0, 26)`.
    pub fn matrix(&self) -> &KeyMatrix {
        &self.matrix
    }

    /// Determinant of the forward key, in `[0, 26)`.
    pub fn determinant(&self) -> i64 {
        self.determinant
    }

    pub fn determinant_inverse(&self) -> i64 {
        self.determinant_inverse
    }
}
