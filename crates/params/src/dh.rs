//! Constants for Diffie-Hellman key exchange

/// Largest accepted bit length for the prime modulus `p`.
///
/// Primality and primitive-root checks run trial division in O(sqrt(p)),
/// which is exact but becomes a latency cliff for large moduli. Parameter
/// validation rejects anything above this bound before the expensive work
/// starts.
pub const MAX_PRIME_BITS: u64 = 48;
