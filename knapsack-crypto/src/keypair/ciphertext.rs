use crate::errors::KnapsackError;
use crate::keypair::helper::{decode_armored, encode_armored};

use serde::{Deserialize, Serialize};

/// Encrypted text: one integer per n-bit plaintext block, in block order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ciphertext {
    blocks: Vec<u64>,
}

impl Ciphertext {
    pub fn new(blocks: Vec<u64>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[u64] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn into_blocks(self) -> Vec<u64> {
        self.blocks
    }

    /// Serializes the blocks as a JSON array, e.g. `[23,40]`.
    pub fn to_json(&self) -> Result<String, KnapsackError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, KnapsackError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_armored(&self) -> Result<String, KnapsackError> {
        encode_armored(self)
    }

    pub fn from_armored(armored: &str) -> Result<Self, KnapsackError> {
        decode_armored(armored)
    }
}

impl From<Vec<u64>> for Ciphertext {
    fn from(blocks: Vec<u64>) -> Self {
        Self::new(blocks)
    }
}

impl From<Ciphertext> for Vec<u64> {
    fn from(ciphertext: Ciphertext) -> Self {
        ciphertext.blocks
    }
}
