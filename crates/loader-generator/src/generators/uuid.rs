//! Random UUIDs drawn from the loader's RNG, so seeded runs repeat.

use loader_core::GeneratedValue;
use rand::Rng;
use uuid::Builder;

pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> GeneratedValue {
    let uuid = Builder::from_random_bytes(rng.random::<[u8; 16]>()).into_uuid();
    GeneratedValue::Uuid(uuid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn draw(rng: &mut StdRng) -> uuid::Uuid {
        match generate_uuid_v4(rng) {
            GeneratedValue::Uuid(uuid) => uuid,
            other => panic!("Expected Uuid value, got {other:?}"),
        }
    }

    #[test]
    fn test_every_value_is_v4() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let uuid = draw(&mut rng);
            assert_eq!(uuid.get_version_num(), 4);
            assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
        }
    }

    #[test]
    fn test_values_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<_> = (0..1000).map(|_| draw(&mut rng)).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(draw(&mut a), draw(&mut b));
        }
    }
}
