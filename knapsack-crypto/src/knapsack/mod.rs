//! Superincreasing knapsacks: generation and the greedy subset-sum solver.

use crate::codec::Bits;
use crate::errors::KnapsackError;
use crate::ring::Vector;

use rand::Rng;

/// Builds a superincreasing sequence of length `n`.
///
/// Each element is drawn uniformly from `[sum + 1, sum + spread]`, where `sum`
/// is the total of the elements before it. Returns the sequence and its total.
///
/// # Errors
///
/// Returns `KnapsackError::InvalidParameters` if `spread` is 0 and
/// `KnapsackError::CalculationOverflow` if the running total leaves `u64`.
pub fn generate_superincreasing<R: Rng>(
    n: usize,
    spread: u64,
    rng: &mut R,
) -> Result<(Vector, u64), KnapsackError> {
    if spread == 0 {
        return Err(KnapsackError::InvalidParameters(
            "Weight spread must be > 0".to_string(),
        ));
    }

    let mut sequence = Vec::with_capacity(n);
    let mut total: u64 = 0;

    for _ in 0..n {
        let low = total.checked_add(1).ok_or(KnapsackError::CalculationOverflow)?;
        let high = total
            .checked_add(spread)
            .ok_or(KnapsackError::CalculationOverflow)?;

        let next = rng.random_range(low..=high);
        sequence.push(next);
        total = total
            .checked_add(next)
            .ok_or(KnapsackError::CalculationOverflow)?;
    }

    Ok((sequence, total))
}

/// Returns `true` if every element exceeds the sum of all elements before it.
///
/// A sequence whose total does not fit in `u64` is rejected as well.
///
/// # Example
///
/// ```
/// # use knapsack_crypto::knapsack::is_superincreasing;
/// assert!(is_superincreasing(&[2, 3, 6, 13, 27]));
/// assert!(!is_superincreasing(&[2, 3, 5]));
/// assert!(!is_superincreasing(&[0, 1]));
/// ```
pub fn is_superincreasing(sequence: &[u64]) -> bool {
    let mut total: u64 = 0;

    for &weight in sequence {
        if weight <= total {
            return false;
        }
        total = match total.checked_add(weight) {
            Some(next) => next,
            None => return false,
        };
    }

    true
}

/// Recovers which elements of a superincreasing `sequence` sum to `target`.
///
/// Scans from the largest element down, taking every element that still fits.
/// The returned bits are indexed like `sequence` (`bits[i]` selects
/// `sequence[i]`). Returns `None` if the scan leaves a remainder, i.e.
/// `target` is not a subset sum of `sequence`.
///
/// # Example
///
/// ```
/// # use knapsack_crypto::knapsack::subset_sum_solve;
/// # use knapsack_crypto::codec::format_bits;
/// let bits = subset_sum_solve(&[2, 3, 6, 13, 27], 35).unwrap();
/// assert_eq!(format_bits(&bits), "10101");
/// assert!(subset_sum_solve(&[2, 3, 6, 13, 27], 4).is_none());
/// ```
pub fn subset_sum_solve(sequence: &[u64], target: u64) -> Option<Bits> {
    let (remaining, mut bits) = sequence.iter().rev().fold(
        (target, Vec::with_capacity(sequence.len())),
        |(remaining, mut bits), &weight| {
            let take = weight <= remaining;
            bits.push(take);
            (if take { remaining - weight } else { remaining }, bits)
        },
    );

    if remaining != 0 {
        return None;
    }

    bits.reverse();
    Some(bits)
}
