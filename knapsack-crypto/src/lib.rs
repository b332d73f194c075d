//! # Knapsack Crypto
//!
//! The Merkle–Hellman knapsack public-key cryptosystem over a 27-symbol
//! alphabet (space and A-Z).
//!
//! A private key hides an easy, superincreasing knapsack behind a modular
//! multiplication; the public key is the resulting hard-looking knapsack.
//! Text is encoded as 5 bits per character and encrypted one key-length
//! block at a time.
//!
//! This scheme is broken by lattice attacks on low-density subset sums. It
//! exists for study, not for protecting data.
//!
//! ```
//! let (public_key, private_key) = knapsack_crypto::generate_keys(10).unwrap();
//!
//! let ciphertext = knapsack_crypto::encrypt("Attack at dawn", &public_key).unwrap();
//! let plaintext = knapsack_crypto::decrypt(&ciphertext, &private_key).unwrap();
//!
//! assert_eq!(plaintext.trim_end(), "ATTACK AT DAWN");
//! ```

pub mod codec;
pub mod errors;
pub mod keypair;
pub mod knapsack;
pub mod preset;
pub mod ring;

pub use errors::KnapsackError;
pub use keypair::params::DEFAULT_BLOCK_SIZE;
pub use keypair::{Ciphertext, KeygenParams, PrivateKey, PublicKey};

/// Generates a key pair with [`DEFAULT_BLOCK_SIZE`] (10) knapsack items, two
/// characters per block.
pub fn generate_default_keys() -> Result<(PublicKey, PrivateKey), KnapsackError> {
    generate_keys(DEFAULT_BLOCK_SIZE)
}

/// Generates a key pair with `block_size` knapsack items and default spreads.
///
/// `block_size` must be a positive multiple of 5 no larger than
/// [`KeygenParams::max_block_size`]; see [`generate_default_keys`] for n = 10.
pub fn generate_keys(block_size: usize) -> Result<(PublicKey, PrivateKey), KnapsackError> {
    let private_key = PrivateKey::try_with(KeygenParams::try_with(block_size)?)?;
    let public_key = private_key.public_key();

    Ok((public_key, private_key))
}

pub fn encrypt(plaintext: &str, public_key: &PublicKey) -> Result<Ciphertext, KnapsackError> {
    public_key.encrypt(plaintext)
}

pub fn decrypt(ciphertext: &Ciphertext, private_key: &PrivateKey) -> Result<String, KnapsackError> {
    private_key.decrypt(ciphertext)
}
