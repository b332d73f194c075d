pub mod ciphertext;
pub mod helper;
pub mod keys;
pub mod params;

pub use ciphertext::Ciphertext;
pub use keys::{PrivateKey, PublicKey};
pub use params::KeygenParams;
