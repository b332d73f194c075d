#[derive(thiserror::Error, Debug)]
pub enum KnapsackError {
    /// Input text contains a character outside space and A-Z (case-insensitive).
    #[error("Invalid character found: {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("Invalid bit {0:?}, expected '0' or '1'")]
    InvalidBit(char),
    /// A decoded 5-bit group does not name an alphabet symbol.
    #[error("Decoded value {0} is outside the alphabet")]
    InvalidCode(u8),

    /// Error when creating a ring with an invalid modulus (q <= 1), or a
    /// modulus too small to admit a multiplier.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, q) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),

    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("InvalidKey: {0}")]
    InvalidKey(String),
    #[error("Public key must contain at least one element")]
    EmptyPublicKey,
    #[error("Could not find a multiplier coprime to {modulus} after {attempts} attempts")]
    MultiplierNotFound { modulus: u64, attempts: usize },
    #[error("Internal error: Overflow during calculation")]
    CalculationOverflow,

    /// The recovered value of a ciphertext block is not a subset sum of the
    /// private sequence: wrong key or tampered ciphertext.
    #[error("Ciphertext block {block} is not a subset sum of the private sequence")]
    IntegrityViolation { block: usize },

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Armor decoding: {0}")]
    ArmorDecodeError(#[from] base64::DecodeError),
}
