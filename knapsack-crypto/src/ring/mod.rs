//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing Z_q and performing the modular
//! arithmetic the knapsack trapdoor needs.

pub mod helper;
pub mod math;

/// An ordered sequence of knapsack weights (private or public).
pub type Vector = Vec<u64>;

pub use helper::{extended_gcd, gcd};
pub use math::Ring;
