use knapsack_crypto::codec::{ALPHABET_SIZE, code_to_char};
use knapsack_crypto::keypair::{KeygenParams, PrivateKey};
use knapsack_crypto::knapsack::is_superincreasing;
use knapsack_crypto::ring::{Ring, gcd};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded key with a block size of 5, 10, ... up to the largest size the
/// default spreads accept.
fn key_from_seed(seed: u64) -> PrivateKey {
    let sizes = (KeygenParams::default().max_block_size() / 5) as u64;
    let block_size = 5 * (seed % sizes + 1) as usize;

    key_with_block_size(block_size, seed)
}

fn key_with_block_size(block_size: usize, seed: u64) -> PrivateKey {
    let params = KeygenParams::try_with(block_size).unwrap();

    PrivateKey::generate(&params, &mut StdRng::seed_from_u64(seed)).unwrap()
}

fn text_from_codes(codes: &[u8]) -> String {
    codes
        .iter()
        .filter_map(|code| code_to_char(code % ALPHABET_SIZE))
        .collect()
}

#[quickcheck]
fn prop_round_trip(seed: u64, codes: Vec<u8>) -> bool {
    let private_key = key_from_seed(seed);
    let public_key = private_key.public_key();
    let plaintext = text_from_codes(&codes);

    let Ok(ciphertext) = public_key.encrypt(&plaintext.to_lowercase()) else {
        return false;
    };
    let Ok(decoded) = private_key.decrypt(&ciphertext) else {
        return false;
    };

    let chars_per_block = private_key.block_size() / 5;
    decoded.len() % chars_per_block == 0
        && decoded.len() - plaintext.len() < chars_per_block
        && decoded.starts_with(&plaintext)
        && decoded[plaintext.len()..].chars().all(|ch| ch == ' ')
}

#[quickcheck]
fn prop_round_trip_at_max_block_size(seed: u64, codes: Vec<u8>) -> bool {
    let private_key = key_with_block_size(KeygenParams::default().max_block_size(), seed);
    let public_key = private_key.public_key();
    let plaintext = text_from_codes(&codes);

    let heaviest = public_key.encrypt_block(&vec![true; private_key.block_size()]);

    heaviest.is_ok()
        && public_key
            .encrypt(&plaintext)
            .and_then(|ciphertext| private_key.decrypt(&ciphertext))
            .is_ok_and(|decoded| decoded.trim_end() == plaintext.trim_end())
}

#[quickcheck]
fn prop_key_invariants(seed: u64) -> bool {
    let private_key = key_from_seed(seed);
    let ring = Ring::try_with(private_key.modulus()).unwrap();

    is_superincreasing(private_key.sequence())
        && gcd(private_key.modulus(), private_key.multiplier()) == 1
        && private_key
            .public_key()
            .sequence()
            .iter()
            .zip(private_key.sequence())
            .all(|(&beta, &weight)| {
                beta < private_key.modulus() && beta == ring.mul(weight, private_key.multiplier())
            })
}

#[quickcheck]
fn prop_trapdoor(seed: u64, mask: u64) -> TestResult {
    let private_key = key_from_seed(seed);
    let public_key = private_key.public_key();
    let ring = Ring::try_with(private_key.modulus()).unwrap();
    let multiplier_inv = ring.inv(private_key.multiplier()).unwrap();

    let bits: Vec<bool> = (0..private_key.block_size())
        .map(|i| (mask >> i) & 1 == 1)
        .collect();

    let Ok(block) = public_key.encrypt_block(&bits) else {
        return TestResult::error("encrypt_block failed");
    };
    let hidden_sum: u64 = private_key
        .sequence()
        .iter()
        .zip(&bits)
        .filter(|(_, bit)| **bit)
        .map(|(weight, _)| weight)
        .sum();

    TestResult::from_bool(ring.mul(block, multiplier_inv) == hidden_sum)
}
