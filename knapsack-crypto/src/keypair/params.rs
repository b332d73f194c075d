use crate::codec::CODE_WIDTH;
use crate::errors::KnapsackError;

use serde::{Deserialize, Serialize};

/// Number of knapsack items (bits per block) when none is given: two characters.
pub const DEFAULT_BLOCK_SIZE: usize = 10;
pub const DEFAULT_WEIGHT_SPREAD: u64 = 100;
pub const DEFAULT_MODULUS_SPREAD: u64 = 500;
pub const DEFAULT_MAX_MULTIPLIER_ATTEMPTS: usize = 1_000;

/// Parameters for key generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeygenParams {
    /// Number of knapsack items n, also the number of plaintext bits per
    /// ciphertext block. Must be a positive multiple of 5 so that every block
    /// carries whole characters.
    pub block_size: usize,
    /// Width of the range each superincreasing element is drawn from:
    /// `[sum + 1, sum + weight_spread]`.
    pub weight_spread: u64,
    /// Width of the range the modulus is drawn from:
    /// `[sum(w) + 1, sum(w) + modulus_spread]`.
    pub modulus_spread: u64,
    /// Upper bound on draws while looking for a multiplier coprime to the modulus.
    pub max_multiplier_attempts: usize,
}

impl Default for KeygenParams {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            weight_spread: DEFAULT_WEIGHT_SPREAD,
            modulus_spread: DEFAULT_MODULUS_SPREAD,
            max_multiplier_attempts: DEFAULT_MAX_MULTIPLIER_ATTEMPTS,
        }
    }
}

impl KeygenParams {
    /// Creates parameters with the given block size and default spreads.
    pub fn try_with(block_size: usize) -> Result<Self, KnapsackError> {
        let params = Self {
            block_size,
            ..Self::default()
        };
        params.validate()?;

        Ok(params)
    }

    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.block_size == 0 {
            return Err(KnapsackError::InvalidParameters(
                "Block size n must be > 0".to_string(),
            ));
        }

        if self.block_size % CODE_WIDTH != 0 {
            return Err(KnapsackError::InvalidParameters(format!(
                "Block size n must be a multiple of {}, got {}",
                CODE_WIDTH, self.block_size
            )));
        }

        if self.weight_spread == 0 || self.modulus_spread == 0 {
            return Err(KnapsackError::InvalidParameters(
                "Weight and modulus spreads must be > 0".to_string(),
            ));
        }

        if self.max_multiplier_attempts == 0 {
            return Err(KnapsackError::InvalidParameters(
                "Max multiplier attempts must be > 0".to_string(),
            ));
        }

        if self.worst_case_block().is_none() {
            return Err(KnapsackError::InvalidParameters(format!(
                "Block size {} can overflow u64 with these spreads, max is {}",
                self.block_size,
                self.max_block_size()
            )));
        }

        Ok(())
    }

    /// Largest ciphertext block any key drawn from these parameters can
    /// produce, or `None` if generation or encryption may leave `u64`.
    ///
    /// Every weight at its upper bound gives `sum(w) = spread * (2^n - 1)`,
    /// the modulus is at most `sum(w) + modulus_spread` and a block adds up to
    /// `n` public elements below it.
    pub fn worst_case_block(&self) -> Option<u64> {
        if self.weight_spread == 0 {
            return None;
        }

        let mut total: u64 = 0;
        for _ in 0..self.block_size {
            total = total.checked_mul(2)?.checked_add(self.weight_spread)?;
        }
        let modulus = total.checked_add(self.modulus_spread)?;

        (self.block_size as u64).checked_mul(modulus.checked_sub(1)?)
    }

    /// Largest block size (a multiple of 5) whose keys and ciphertext stay
    /// within `u64` for the current spreads. 50 with the defaults, 0 if even
    /// 5 items overflow or `weight_spread` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use knapsack_crypto::keypair::params::KeygenParams;
    /// let params = KeygenParams::default();
    /// assert_eq!(params.max_block_size(), 50);
    /// assert!(KeygenParams::try_with(50).is_ok());
    /// assert!(KeygenParams::try_with(55).is_err());
    /// ```
    pub fn max_block_size(&self) -> usize {
        let fits = |block_size| {
            Self {
                block_size,
                ..self.clone()
            }
            .worst_case_block()
            .is_some()
        };

        let mut block_size = 0;
        while fits(block_size + CODE_WIDTH) {
            block_size += CODE_WIDTH;
        }

        block_size
    }

    /// Loads parameters from JSON. Missing fields take their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// # use knapsack_crypto::keypair::params::KeygenParams;
    /// let params = KeygenParams::from_json(r#"{"block_size": 20}"#).unwrap();
    /// assert_eq!(params.block_size, 20);
    /// assert_eq!(params.weight_spread, 100);
    /// assert!(KeygenParams::from_json(r#"{"block_size": 7}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, KnapsackError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;

        Ok(params)
    }
}
