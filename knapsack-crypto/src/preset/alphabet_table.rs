use lazy_static::lazy_static;
use std::collections::HashMap;

/// The 27-symbol plaintext alphabet: space followed by A-Z.
pub const ALPHABET: &str = " ABCDEFGHIJKLMNOPQRSTUVWXYZ";

lazy_static! {
    /// A static HashMap mapping a code (0 to 26) to its alphabet symbol.
    /// Code 0 is space, code i (1..=26) is the i-th letter.
    pub static ref CODE_TO_CHAR_MAP: HashMap<u8, char> = {
        let mut map = HashMap::new();

        for (i, ch) in ALPHABET.chars().enumerate() {
            map.insert(i as u8, ch);
        }

        map
    };

    /// A static HashMap mapping an alphabet symbol (space, A-Z) to its code
    /// (0 to 26).
    pub static ref CHAR_TO_CODE_MAP: HashMap<char, u8> = {
        let mut map = HashMap::new();

        for (&code, &ch) in CODE_TO_CHAR_MAP.iter() {
            map.insert(ch, code);
        }

        map
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn alphabet_layout() {
        assert_eq!(ALPHABET.len(), 27);
        assert_eq!(CODE_TO_CHAR_MAP.len(), 27);
        assert_eq!(CHAR_TO_CODE_MAP.len(), 27);
        assert_eq!(CODE_TO_CHAR_MAP[&0], ' ');
        assert_eq!(CODE_TO_CHAR_MAP[&1], 'A');
        assert_eq!(CODE_TO_CHAR_MAP[&26], 'Z');
        assert!(!CODE_TO_CHAR_MAP.contains_key(&27));
    }

    quickcheck! {
        fn prop_tables_are_inverse(code: u8) -> TestResult {
            match CODE_TO_CHAR_MAP.get(&code) {
                None => {
                    if code <= 26 {
                        return TestResult::error(format!("Code {} missing from CODE_TO_CHAR_MAP", code));
                    }
                    TestResult::discard()
                }
                Some(ch) => match CHAR_TO_CODE_MAP.get(ch) {
                    Some(&back) if back == code => TestResult::passed(),
                    Some(&back) => TestResult::error(format!(
                        "Mismatch for char '{}': expected code {}, found {}",
                        ch, code, back
                    )),
                    None => TestResult::error(format!(
                        "Character '{}' not found in CHAR_TO_CODE_MAP",
                        ch
                    )),
                },
            }
        }
    }
}
