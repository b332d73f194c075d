//! Implementation of ring ops using modular arithmetic.

use crate::errors::KnapsackError;

use super::extended_gcd;

/// Represents the ring Z_q the knapsack trapdoor lives in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, KnapsackError> {
        if modulus <= 1 {
            return Err(KnapsackError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use knapsack_crypto::ring::Ring;
    /// let ring = Ring::try_with(59).unwrap();
    /// assert_eq!(ring.modulus(), 59);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use knapsack_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: u64) -> u64 {
        value % self.modulus
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `u128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use knapsack_crypto::ring::Ring;
    /// let ring = Ring::try_with(59).unwrap();
    /// assert_eq!(ring.mul(2, 31), 3); // 62 mod 59 = 3
    /// assert_eq!(ring.mul(13, 31), 49); // 403 mod 59 = 49
    /// assert_eq!(ring.mul(u64::MAX, u64::MAX), ring.mul(u64::MAX % 59, u64::MAX % 59));
    /// ```
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        let result = (a as u128 * b as u128) % (self.modulus as u128);

        result as u64
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `KnapsackError::NoInverse` if the inverse does not exist (i.e., `gcd(a, modulus) != 1`).
    /// Returns `KnapsackError::NoInverse` if `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use knapsack_crypto::ring::Ring;
    /// let ring = Ring::try_with(59).unwrap();
    /// assert_eq!(ring.inv(31).unwrap(), 40); // 31 * 40 = 1240 = 1 mod 59
    /// let ring = Ring::try_with(10).unwrap();
    /// assert!(ring.inv(2).is_err()); // gcd(2, 10) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: u64) -> Result<u64, KnapsackError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(KnapsackError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let modulus = self.modulus as i128;
        let (g, x, _) = extended_gcd(a_norm as i128, modulus);
        if g != 1 {
            return Err(KnapsackError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(x.rem_euclid(modulus) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(59).is_ok());
        assert!(Ring::try_with(2).is_ok());
        assert!(Ring::try_with(1).is_err());
        assert!(Ring::try_with(0).is_err());
    }

    #[test]
    fn test_element_normalization() -> Result<(), KnapsackError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.normalize(5), 5);
        assert_eq!(ring.normalize(16), 5);
        assert_eq!(ring.normalize(u64::MAX), u64::MAX % 11);
        Ok(())
    }

    #[test]
    fn test_multiplication() -> Result<(), KnapsackError> {
        let ring = Ring::try_with(59)?;
        let public: Vec<u64> = [2, 3, 6, 13, 27].iter().map(|&w| ring.mul(w, 31)).collect();
        assert_eq!(public, vec![3, 34, 9, 49, 11]);
        Ok(())
    }

    #[test]
    fn test_inversion() -> Result<(), KnapsackError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.inv(5)?, 9);

        let ring = Ring::try_with(59)?;
        for a in 1..59 {
            let inverse = ring.inv(a)?;
            assert_eq!(ring.mul(a, inverse), 1);
        }
        Ok(())
    }

    #[test]
    fn test_inversion_large_modulus() -> Result<(), KnapsackError> {
        let ring = Ring::try_with(u64::MAX - 58)?;
        let inverse = ring.inv(31)?;
        assert_eq!(ring.mul(31, inverse), 1);
        Ok(())
    }

    #[test]
    fn test_inversion_failure() -> Result<(), KnapsackError> {
        let ring = Ring::try_with(12)?;
        assert!(matches!(ring.inv(4), Err(KnapsackError::NoInverse(_))));
        assert!(matches!(ring.inv(24), Err(KnapsackError::NoInverse(_))));
        Ok(())
    }
}
