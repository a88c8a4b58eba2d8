//! IP address generator.

use loader_core::GeneratedValue;
use rand::Rng;

/// Generate a random IPv4 dotted quad, or eight hex groups for IPv6.
pub fn generate_ip_address<R: Rng>(rng: &mut R, ipv6: bool) -> GeneratedValue {
    let address = if ipv6 {
        (0..8)
            .map(|_| format!("{:x}", rng.random::<u16>()))
            .collect::<Vec<_>>()
            .join(":")
    } else {
        (0..4)
            .map(|_| rng.random::<u8>().to_string())
            .collect::<Vec<_>>()
            .join(".")
    };
    GeneratedValue::String(address)
}
