//! Binary value generator.

use loader_core::GeneratedValue;
use rand::Rng;

/// Generate `length` random bytes.
pub fn generate_bytes<R: Rng>(rng: &mut R, length: usize) -> GeneratedValue {
    let mut bytes = vec![0u8; length];
    rng.fill(bytes.as_mut_slice());
    GeneratedValue::Bytes(bytes)
}
