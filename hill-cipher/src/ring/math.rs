//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCipherError;

use num_integer::Integer;

/// Size of the Latin alphabet, the modulus every cipher operation works in.
pub const ALPHABET_SIZE: u64 = 26;

/// Represents a finite ring Z_k using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Self::alphabet()
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and fit in an `i64`.
    pub fn try_with(modulus: u64) -> Result<Self, HillCipherError> {
        if modulus <= 1 {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }
        if modulus > i64::MAX as u64 {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must not exceed {}, got {}",
                i64::MAX,
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// The ring Z_26 of letter residues.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// assert_eq!(Ring::alphabet().modulus(), 26);
    /// ```
    pub const fn alphabet() -> Self {
        Ring {
            modulus: ALPHABET_SIZE,
        }
    }

    /// Returns the modulus of the ring.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.normalize(30), 4);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 + b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.sub(15, 6), 9);
    /// assert_eq!(ring.sub(3, 5), 24);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm - b_norm)
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.mul(3, 9), 1);
    /// assert_eq!(ring.mul(-2, 6), 14); // -12 mod 26
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        self.normalize(-self.normalize(a))
    }

    /// Returns `true` when `a` has a multiplicative inverse, i.e. `gcd(a, modulus) == 1`.
    pub fn is_unit(&self, a: i64) -> bool {
        self.normalize(a).gcd(&(self.modulus as i64)) == 1
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// Scans `1..modulus` for the first `i` with `a * i == 1`; the ring is
    /// the 26-letter alphabet so the scan is short.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NoInverse` if the inverse does not exist (i.e., `gcd(a, modulus) != 1`).
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.inv(9).unwrap(), 3); // 9 * 3 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(25).unwrap(), 25);
    /// assert!(ring.inv(13).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCipherError> {
        let a_norm = self.normalize(a);

        (1..self.modulus as i64)
            .find(|&i| self.mul(a_norm, i) == 1)
            .ok_or(HillCipherError::NoInverse {
                value: a_norm,
                modulus: self.modulus,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(26).is_ok());
        assert!(Ring::try_with(11).is_ok());
        assert!(Ring::try_with(1).is_err());
        assert!(Ring::try_with(0).is_err());
        assert_eq!(Ring::default(), Ring::alphabet());
    }

    #[test]
    fn test_ring_modulus_must_fit_i64() -> Result<(), HillCipherError> {
        assert!(matches!(
            Ring::try_with(u64::MAX),
            Err(HillCipherError::InvalidModulus(_))
        ));
        assert!(Ring::try_with(i64::MAX as u64 + 1).is_err());

        let widest = Ring::try_with(i64::MAX as u64)?;
        assert_eq!(widest.normalize(i64::MIN), i64::MAX - 1);
        assert_eq!(widest.normalize(-1), i64::MAX - 1);
        assert_eq!(widest.add(i64::MAX - 1, i64::MAX - 1), i64::MAX - 2);
        assert_eq!(widest.sub(0, 1), i64::MAX - 1);
        Ok(())
    }

    #[test]
    fn test_element_normalization() {
        let ring = Ring::alphabet();
        assert_eq!(ring.normalize(5), 5);
        assert_eq!(ring.normalize(31), 5);
        assert_eq!(ring.normalize(-21), 5);
        assert_eq!(ring.normalize(-26), 0);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let ring = Ring::alphabet();
        assert!((0..26).contains(&ring.normalize(i64::MIN)));
        assert!((0..26).contains(&ring.neg(i64::MIN)));
        assert!((0..26).contains(&ring.mul(i64::MAX, i64::MIN)));
        assert!((0..26).contains(&ring.add(i64::MAX, i64::MAX)));
        assert!((0..26).contains(&ring.sub(i64::MIN, i64::MAX)));
    }

    #[test]
    fn test_addition_and_subtraction() {
        let ring = Ring::alphabet();
        assert_eq!(ring.add(20, 10), 4);
        assert_eq!(ring.add(-3, 8), 5);
        assert_eq!(ring.sub(5, 8), 23);
        assert_eq!(ring.sub(8, 5), 3);
    }

    #[test]
    fn test_negation() {
        let ring = Ring::alphabet();
        assert_eq!(ring.neg(3), 23);
        assert_eq!(ring.neg(0), 0);
        assert_eq!(ring.neg(-2), 2);
        assert_eq!(ring.neg(13), 13);
    }

    #[test]
    fn test_inversion() -> Result<(), HillCipherError> {
        let ring = Ring::alphabet();
        assert_eq!(ring.inv(1)?, 1);
        assert_eq!(ring.inv(3)?, 9);
        assert_eq!(ring.inv(7)?, 15);
        assert_eq!(ring.inv(-1)?, 25);

        for non_unit in [0, 2, 4, 13, 24, 26] {
            assert!(!ring.is_unit(non_unit));
            assert!(matches!(
                ring.inv(non_unit),
                Err(HillCipherError::NoInverse { modulus: 26, .. })
            ));
        }
        Ok(())
    }

    #[test]
    fn test_inversion_in_small_ring() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.inv(5)?, 9);
        assert!(ring.inv(0).is_err());
        Ok(())
    }

    #[quickcheck]
    fn prop_normalize_in_range(value: i64) -> bool {
        (0..26).contains(&Ring::alphabet().normalize(value))
    }

    #[quickcheck]
    fn prop_is_unit_matches_inv(value: i64) -> bool {
        let ring = Ring::alphabet();
        ring.is_unit(value) == ring.inv(value).is_ok()
    }

    #[quickcheck]
    fn prop_inverse_multiplies_to_one(value: i64) -> bool {
        let ring = Ring::alphabet();
        match ring.inv(value) {
            Ok(inverse) => ring.mul(value, inverse) == 1,
            Err(_) => !ring.is_unit(value),
        }
    }
}
