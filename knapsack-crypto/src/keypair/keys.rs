use crate::codec::{Bits, bits_to_text, text_to_bits};
use crate::errors::KnapsackError;
use crate::keypair::ciphertext::Ciphertext;
use crate::keypair::helper::{decode_armored, encode_armored, map_vector};
use crate::keypair::params::KeygenParams;
use crate::knapsack::{generate_superincreasing, is_superincreasing, subset_sum_solve};
use crate::ring::{Ring, Vector, gcd};

use itertools::Itertools;

use rand::Rng;

use serde::{Deserialize, Serialize};

/// The disguised knapsack `beta[i] = (w[i] * r) mod q`. Safe to disclose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey {
    sequence: Vector,
}

/// The trapdoor `(w, q, r)`: a superincreasing sequence, a modulus larger
/// than its sum and a multiplier coprime to the modulus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PrivateKeyParts", into = "PrivateKeyParts")]
pub struct PrivateKey {
    sequence: Vector,
    ring: Ring,
    multiplier: u64,
}

/// Wire form of [`PrivateKey`], validated on the way in.
#[derive(Serialize, Deserialize)]
struct PrivateKeyParts {
    sequence: Vector,
    modulus: u64,
    multiplier: u64,
}

impl TryFrom<PrivateKeyParts> for PrivateKey {
    type Error = KnapsackError;

    fn try_from(parts: PrivateKeyParts) -> Result<Self, Self::Error> {
        PrivateKey::try_from_parts(parts.sequence, parts.modulus, parts.multiplier)
    }
}

impl From<PrivateKey> for PrivateKeyParts {
    fn from(key: PrivateKey) -> Self {
        Self {
            modulus: key.modulus(),
            sequence: key.sequence,
            multiplier: key.multiplier,
        }
    }
}

impl PublicKey {
    pub fn new(sequence: Vector) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> &[u64] {
        &self.sequence
    }

    /// Number of plaintext bits consumed per ciphertext block.
    pub fn block_size(&self) -> usize {
        self.sequence.len()
    }

    /// Encrypts `plaintext` (space and A-Z, any case).
    ///
    /// The text is turned into 5-bit codes, right-padded with zero bits up to a
    /// whole number of blocks, and every block becomes the sum of the public
    /// weights selected by its set bits.
    ///
    /// # Errors
    ///
    /// Returns `KnapsackError::InvalidCharacter` for text outside the alphabet,
    /// `KnapsackError::EmptyPublicKey` for a key without weights and
    /// `KnapsackError::CalculationOverflow` if a block sum leaves `u64`. Keys
    /// generated from validated [`KeygenParams`] never overflow.
    pub fn encrypt(&self, plaintext: &str) -> Result<Ciphertext, KnapsackError> {
        let block_size = self.block_size();
        if block_size == 0 {
            return Err(KnapsackError::EmptyPublicKey);
        }

        // 1. Convert text to bits, rejecting anything outside the alphabet
        let mut bits = text_to_bits(plaintext)?;

        // 2. Pad with zero bits, which decode to spaces
        let remainder = bits.len() % block_size;
        if remainder != 0 {
            bits.resize(bits.len() + block_size - remainder, false);
        }

        // 3. Encrypt blocks
        let blocks = bits
            .chunks_exact(block_size)
            .map(|chunk| self.encrypt_block(chunk))
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!("encrypted {} blocks of {} bits", blocks.len(), block_size);

        Ok(Ciphertext::new(blocks))
    }

    /// Inner product of a block of bits with the public weights.
    pub fn encrypt_block(&self, block: &[bool]) -> Result<u64, KnapsackError> {
        if block.len() != self.block_size() {
            return Err(KnapsackError::DimensionMismatch(format!(
                "Message block length ({}) must match key length ({})",
                block.len(),
                self.block_size()
            )));
        }

        block
            .iter()
            .zip_eq(&self.sequence)
            .filter(|(bit, _)| **bit)
            .try_fold(0u64, |sum, (_, &weight)| sum.checked_add(weight))
            .ok_or(KnapsackError::CalculationOverflow)
    }

    pub fn to_armored(&self) -> Result<String, KnapsackError> {
        encode_armored(self)
    }

    pub fn from_armored(armored: &str) -> Result<Self, KnapsackError> {
        decode_armored(armored)
    }
}

impl PrivateKey {
    /// Generates a fresh trapdoor with the thread-local CSPRNG.
    pub fn try_with(params: KeygenParams) -> Result<Self, KnapsackError> {
        Self::generate(&params, &mut rand::rng())
    }

    /// Generates a fresh trapdoor, drawing every random value from `rng`.
    pub fn generate<R: Rng>(params: &KeygenParams, rng: &mut R) -> Result<Self, KnapsackError> {
        params.validate()?;

        // 1. Private superincreasing sequence w
        let (sequence, total) =
            generate_superincreasing(params.block_size, params.weight_spread, rng)?;

        // 2. Modulus q > sum(w)
        let low = total.checked_add(1).ok_or(KnapsackError::CalculationOverflow)?;
        let high = total
            .checked_add(params.modulus_spread)
            .ok_or(KnapsackError::CalculationOverflow)?;
        let modulus = rng.random_range(low..=high);

        // 3. Multiplier r with gcd(r, q) = 1
        let multiplier = pick_multiplier(modulus, params.max_multiplier_attempts, rng)?;

        log::debug!(
            "generated knapsack key: block_size={}, modulus_bits={}",
            params.block_size,
            u64::BITS - modulus.leading_zeros()
        );

        Self::try_from_parts(sequence, modulus, multiplier)
    }

    /// Assembles a private key from its components, checking every invariant
    /// the trapdoor relies on.
    ///
    /// # Example
    ///
    /// ```
    /// # use knapsack_crypto::keypair::keys::PrivateKey;
    /// let key = PrivateKey::try_from_parts(vec![2, 3, 6, 13, 27], 59, 31).unwrap();
    /// assert_eq!(key.public_key().sequence(), &[3, 34, 9, 49, 11]);
    ///
    /// assert!(PrivateKey::try_from_parts(vec![2, 3, 4], 59, 31).is_err()); // not superincreasing
    /// assert!(PrivateKey::try_from_parts(vec![2, 3, 6], 11, 2).is_err()); // q <= sum(w)
    /// assert!(PrivateKey::try_from_parts(vec![2, 3, 6], 12, 4).is_err()); // gcd(r, q) != 1
    /// ```
    pub fn try_from_parts(
        sequence: Vector,
        modulus: u64,
        multiplier: u64,
    ) -> Result<Self, KnapsackError> {
        if sequence.is_empty() {
            return Err(KnapsackError::InvalidKey(
                "Private sequence must not be empty".to_string(),
            ));
        }

        if !is_superincreasing(&sequence) {
            return Err(KnapsackError::InvalidKey(
                "Private sequence must be superincreasing".to_string(),
            ));
        }

        let total: u64 = sequence.iter().sum();
        if modulus <= total {
            return Err(KnapsackError::InvalidKey(format!(
                "Modulus {} must exceed the sequence sum {}",
                modulus, total
            )));
        }

        if multiplier < 2 || multiplier >= modulus {
            return Err(KnapsackError::InvalidKey(format!(
                "Multiplier {} must lie in [2, {}]",
                multiplier,
                modulus - 1
            )));
        }

        let g = gcd(multiplier, modulus);
        if g != 1 {
            return Err(KnapsackError::InvalidKey(format!(
                "GCD(r, q) must be 1, but the calculated GCD was {}",
                g
            )));
        }

        Ok(Self {
            sequence,
            ring: Ring::try_with(modulus)?,
            multiplier,
        })
    }

    pub fn sequence(&self) -> &[u64] {
        &self.sequence
    }

    pub fn modulus(&self) -> u64 {
        self.ring.modulus()
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn block_size(&self) -> usize {
        self.sequence.len()
    }

    /// Derives `beta[i] = (w[i] * r) mod q`.
    pub fn public_key(&self) -> PublicKey {
        let disguise = |weight| self.ring.mul(weight, self.multiplier);

        PublicKey::new(map_vector(&self.sequence, &disguise))
    }

    /// Decrypts `ciphertext` back to uppercase text.
    ///
    /// The result carries the spaces contributed by block padding at its end.
    ///
    /// # Errors
    ///
    /// Returns `KnapsackError::IntegrityViolation` if a block does not
    /// correspond to any subset of the private sequence (wrong key or
    /// tampered data) and `KnapsackError::InvalidCode` if the recovered bits
    /// do not spell alphabet symbols.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String, KnapsackError> {
        // 1. r^-1 mod q undoes the disguise
        let multiplier_inv = self.ring.inv(self.multiplier)?;

        // 2. Decrypt each block
        let mut bits = Vec::with_capacity(ciphertext.len() * self.block_size());
        for (index, &block) in ciphertext.blocks().iter().enumerate() {
            let block_bits = self
                .decrypt_block(multiplier_inv, block)
                .ok_or(KnapsackError::IntegrityViolation { block: index })?;
            bits.extend(block_bits);
        }

        log::trace!("decrypted {} blocks into {} bits", ciphertext.len(), bits.len());

        // 3. Bits back to characters
        bits_to_text(&bits)
    }

    /// Maps one block back onto the superincreasing sequence and solves it.
    fn decrypt_block(&self, multiplier_inv: u64, block: u64) -> Option<Bits> {
        let target = self.ring.mul(block, multiplier_inv);

        subset_sum_solve(&self.sequence, target)
    }

    pub fn to_armored(&self) -> Result<String, KnapsackError> {
        encode_armored(self)
    }

    pub fn from_armored(armored: &str) -> Result<Self, KnapsackError> {
        decode_armored(armored)
    }
}

/// Rejection-samples `r` from `[2, q - 1]` until `gcd(r, q) = 1`.
fn pick_multiplier<R: Rng>(
    modulus: u64,
    max_attempts: usize,
    rng: &mut R,
) -> Result<u64, KnapsackError> {
    if modulus <= 2 {
        return Err(KnapsackError::InvalidModulus(format!(
            "Modulus {} leaves no multiplier in [2, q - 1]",
            modulus
        )));
    }

    for attempt in 1..=max_attempts {
        let candidate = rng.random_range(2..modulus);
        if gcd(candidate, modulus) == 1 {
            log::trace!("multiplier accepted after {} draws", attempt);
            return Ok(candidate);
        }
    }

    Err(KnapsackError::MultiplierNotFound {
        modulus,
        attempts: max_attempts,
    })
}
