use crate::errors::KnapsackError;
use crate::ring::Vector;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Maps each element of a vector using the provided mapping function.
///
/// # Arguments
/// * `vector` - The input vector to transform
/// * `mapper` - A function that maps each element
///
/// # Returns
/// A new vector with each element transformed by the mapper function
pub fn map_vector(vector: &[u64], mapper: &dyn Fn(u64) -> u64) -> Vector {
    vector.iter().map(|&val| mapper(val)).collect()
}

/// Serializes `value` to JSON and wraps it in standard base64, for pasting
/// keys and ciphertext through text-only channels.
pub fn encode_armored<T: Serialize>(value: &T) -> Result<String, KnapsackError> {
    let json = serde_json::to_vec(value)?;

    Ok(STANDARD.encode(json))
}

/// Reverses [`encode_armored`]. Surrounding whitespace is ignored.
pub fn decode_armored<T: DeserializeOwned>(armored: &str) -> Result<T, KnapsackError> {
    let json = STANDARD.decode(armored.trim())?;

    Ok(serde_json::from_slice(&json)?)
}
