//! Text <-> bit stream conversion over the 27-symbol alphabet.
//!
//! Every symbol is a fixed-width, big-endian 5-bit group, so a text of `k`
//! characters always becomes exactly `5 * k` bits.

use crate::errors::KnapsackError;
use crate::preset::alphabet_table::{CHAR_TO_CODE_MAP, CODE_TO_CHAR_MAP};

/// A bit stream, most significant bit of each group first.
pub type Bits = Vec<bool>;

/// Number of bits used to encode one alphabet symbol.
pub const CODE_WIDTH: usize = 5;
/// Number of symbols in the alphabet; valid codes are `0..ALPHABET_SIZE`.
pub const ALPHABET_SIZE: u8 = 27;

/// Returns the alphabet code of `ch` after ASCII uppercasing.
///
/// # Errors
///
/// Returns `KnapsackError::InvalidCharacter` (with position 0) if `ch` is not
/// space or a latin letter.
///
/// # Example
///
/// ```
/// # use knapsack_crypto::codec::char_to_code;
/// assert_eq!(char_to_code(' ').unwrap(), 0);
/// assert_eq!(char_to_code('a').unwrap(), 1);
/// assert_eq!(char_to_code('Z').unwrap(), 26);
/// assert!(char_to_code('!').is_err());
/// ```
pub fn char_to_code(ch: char) -> Result<u8, KnapsackError> {
    CHAR_TO_CODE_MAP
        .get(&ch.to_ascii_uppercase())
        .copied()
        .ok_or(KnapsackError::InvalidCharacter { ch, position: 0 })
}

/// Returns the alphabet symbol for `code`, or `None` if `code >= ALPHABET_SIZE`.
pub fn code_to_char(code: u8) -> Option<char> {
    CODE_TO_CHAR_MAP.get(&code).copied()
}

/// Uppercases `text` and renders each character as its 5-bit code.
///
/// # Errors
///
/// Returns `KnapsackError::InvalidCharacter` on the first character outside
/// the alphabet, reporting its character index.
///
/// # Example
///
/// ```
/// # use knapsack_crypto::codec::{format_bits, text_to_bits};
/// let bits = text_to_bits("Hi").unwrap();
/// assert_eq!(format_bits(&bits), "0100001001");
/// ```
pub fn text_to_bits(text: &str) -> Result<Bits, KnapsackError> {
    let mut bits = Vec::with_capacity(text.len() * CODE_WIDTH);

    for (position, ch) in text.chars().enumerate() {
        let code = char_to_code(ch).map_err(|_| KnapsackError::InvalidCharacter { ch, position })?;
        for shift in (0..CODE_WIDTH).rev() {
            bits.push((code >> shift) & 1 == 1);
        }
    }

    Ok(bits)
}

/// Reads `bits` as consecutive 5-bit groups and maps them back to text.
///
/// Trailing bits that do not fill a whole group are dropped.
///
/// # Errors
///
/// Returns `KnapsackError::InvalidCode` if a group decodes above 26.
pub fn bits_to_text(bits: &[bool]) -> Result<String, KnapsackError> {
    let groups = bits.chunks_exact(CODE_WIDTH);
    let leftover = groups.remainder().len();
    if leftover != 0 {
        log::debug!("dropping {} trailing bits that do not form a character", leftover);
    }

    groups
        .map(|group| {
            let code = group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8);
            code_to_char(code).ok_or(KnapsackError::InvalidCode(code))
        })
        .collect()
}

/// Renders bits as a string of `'0'` and `'1'`.
pub fn format_bits(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

/// Parses a string of `'0'` and `'1'` into bits.
///
/// # Example
///
/// ```
/// # use knapsack_crypto::codec::parse_bits;
/// assert_eq!(parse_bits("101").unwrap(), vec![true, false, true]);
/// assert!(parse_bits("10a").is_err());
/// ```
pub fn parse_bits(text: &str) -> Result<Bits, KnapsackError> {
    text.chars()
        .map(|ch| match ch {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(KnapsackError::InvalidBit(other)),
        })
        .collect()
}
