//! String value generators.

use rand::Rng;

/// The 62-character alphabet strings are drawn from.
pub const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random string of exactly `length` alphanumeric characters.
pub fn random_alphanumeric<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHANUMERIC[rng.random_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}

/// Random string of exactly `length` characters from `{0, 1}`.
pub fn random_bits<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alphabet_has_62_distinct_characters() {
        let mut sorted = ALPHANUMERIC.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 62);
    }

    #[test]
    fn test_random_alphanumeric_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);

        for length in [0, 1, 8, 10, 100] {
            for _ in 0..200 {
                let s = random_alphanumeric(&mut rng, length);
                assert_eq!(s.chars().count(), length);
                assert!(s.bytes().all(|b| ALPHANUMERIC.contains(&b)));
            }
        }
    }

    #[test]
    fn test_random_bits() {
        let mut rng = StdRng::seed_from_u64(42);
        let bits = random_bits(&mut rng, 64);

        assert_eq!(bits.len(), 64);
        assert!(bits.chars().all(|c| c == '0' || c == '1'));
    }
}
