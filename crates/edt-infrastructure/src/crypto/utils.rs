//! Cryptographic utilities

use rand::RngCore;
use subtle::ConstantTimeEq;

/// Fill a fresh buffer with cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}

/// Constant-time comparison for cryptographic values
///
/// Slices of different lengths compare unequal; the length itself is not
/// treated as secret.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
