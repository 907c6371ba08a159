//! Short code generation.
//!
//! Codes come from a fast non-cryptographic generator. They are stand-ins for
//! a real link identifier and carry no uniqueness guarantee.

use rand::Rng;

/// Number of characters in a generated short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Base-36 alphabet: digits followed by lowercase ASCII letters.
pub const SHORT_CODE_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a random short code using the thread-local generator.
///
/// # Examples
///
/// ```
/// use shortly::utils::code_generator::generate_short_code;
///
/// let code = generate_short_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_short_code() -> String {
    generate_short_code_with(&mut rand::rng())
}

/// Generates a short code from the given random source.
///
/// Every character is drawn uniformly from [`SHORT_CODE_ALPHABET`], so a
/// seeded generator always yields the same sequence of codes.
pub fn generate_short_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SHORT_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..SHORT_CODE_ALPHABET.len());
            SHORT_CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_short_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.bytes().all(|b| SHORT_CODE_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_short_code().len(), SHORT_CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_base36_characters() {
        for _ in 0..1000 {
            let code = generate_short_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_is_mostly_distinct() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_short_code()).collect();
        // 36^6 possible codes; a handful of collisions would already be suspicious.
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let first = generate_short_code_with(&mut StdRng::seed_from_u64(42));
        let second = generate_short_code_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert!(is_short_code(&first));
    }

    #[test]
    fn test_generator_reaches_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.extend(generate_short_code_with(&mut rng).bytes());
        }
        assert_eq!(seen.len(), SHORT_CODE_ALPHABET.len());
    }

    #[test]
    fn test_is_short_code() {
        assert!(is_short_code("abc123"));
        assert!(is_short_code("000000"));
        assert!(!is_short_code("abc12"));
        assert!(!is_short_code("abc1234"));
        assert!(!is_short_code("ABC123"));
        assert!(!is_short_code("abc-12"));
        assert!(!is_short_code(""));
    }
}
