//! Diffie-Hellman key exchange over validated public parameters
//!
//! Parameters are checked in full before any exchange arithmetic runs: the
//! modulus must be a prime within the configured bit-length cap, the
//! generator a primitive root, and both private keys inside `[1, p)`. Each
//! violation fails fast with a domain error naming the offending value.
//!
//! The exchange itself is a pure function; both parties' shared secrets are
//! computed independently and their equality is recorded as a postcondition
//! flag rather than assumed.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;
use serde::{Serialize, Serializer};

use clcrypt_api::{Error, Result};
use clcrypt_params::dh::MAX_PRIME_BITS;

use crate::modular;

#[cfg(test)]
mod tests;

/// Validated Diffie-Hellman public parameters: a prime modulus `p` and a
/// primitive root `g` of the multiplicative group mod `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhParams {
    p: BigUint,
    g: BigUint,
}

impl DhParams {
    /// Validate `(p, g)` as exchange parameters.
    ///
    /// Checks run cheapest-first: the bit-length cap guards the O(sqrt(p))
    /// primality and primitive-root work behind it.
    pub fn new(p: BigUint, g: BigUint) -> Result<Self> {
        if p < BigUint::from(2u32) {
            return Err(Error::domain(
                "dh parameters",
                format!("prime p must be at least 2, got {p}"),
            ));
        }
        if p.bits() > MAX_PRIME_BITS {
            return Err(Error::domain(
                "dh parameters",
                format!(
                    "p has {} bits, which exceeds the supported maximum of {MAX_PRIME_BITS}",
                    p.bits()
                ),
            ));
        }
        if !modular::is_prime(&p) {
            return Err(Error::domain(
                "dh parameters",
                format!("{p} is not a prime number"),
            ));
        }
        if g.is_zero() || g >= p {
            return Err(Error::domain(
                "dh parameters",
                format!("generator g must satisfy 1 <= g < {p}, got {g}"),
            ));
        }
        if !modular::is_primitive_root(&g, &p)? {
            return Err(Error::domain(
                "dh parameters",
                format!("{g} is not a primitive root of {p}"),
            ));
        }
        Ok(Self { p, g })
    }

    /// The prime modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The generator.
    pub fn g(&self) -> &BigUint {
        &self.g
    }
}

/// One party's view of the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DhParty {
    /// The private key this party holds
    #[serde(serialize_with = "decimal")]
    pub private_key: BigUint,
    /// `g^private mod p`, shared with the peer
    #[serde(serialize_with = "decimal")]
    pub public_key: BigUint,
    /// `(peer public)^private mod p`
    #[serde(serialize_with = "decimal")]
    pub shared_secret: BigUint,
}

/// One line of the exchange narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DhStep {
    /// Who performs this step
    pub party: &'static str,
    /// The arithmetic performed
    pub calculation: String,
    /// What the step accomplishes
    pub description: &'static str,
}

/// Result of a complete Diffie-Hellman exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DhOutput {
    /// The prime modulus used
    #[serde(serialize_with = "decimal")]
    pub prime: BigUint,
    /// The generator used
    #[serde(serialize_with = "decimal")]
    pub generator: BigUint,
    /// Alice's keys and derived secret
    pub alice: DhParty,
    /// Bob's keys and derived secret
    pub bob: DhParty,
    /// The agreed secret (Alice's copy)
    #[serde(serialize_with = "decimal")]
    pub shared_secret: BigUint,
    /// Postcondition: both parties derived the same secret. Always true
    /// for valid parameters; a false here is a correctness bug.
    pub valid: bool,
    /// Step-by-step narration of the protocol
    pub steps: Vec<DhStep>,
}

/// Run the exchange for both parties.
///
/// Private keys must lie in `[1, p)`; violations fail with a domain error
/// naming the offending party before any exponentiation runs.
pub fn exchange(params: &DhParams, private_a: &BigUint, private_b: &BigUint) -> Result<DhOutput> {
    check_private_key("private key a", private_a, params.p())?;
    check_private_key("private key b", private_b, params.p())?;

    let (p, g) = (params.p(), params.g());
    let public_a = modular::mod_pow(g, private_a, p)?;
    let public_b = modular::mod_pow(g, private_b, p)?;
    let shared_a = modular::mod_pow(&public_b, private_a, p)?;
    let shared_b = modular::mod_pow(&public_a, private_b, p)?;
    let valid = shared_a == shared_b;

    let steps = narrate(
        p, g, private_a, private_b, &public_a, &public_b, &shared_a, &shared_b,
    );

    Ok(DhOutput {
        prime: p.clone(),
        generator: g.clone(),
        alice: DhParty {
            private_key: private_a.clone(),
            public_key: public_a,
            shared_secret: shared_a.clone(),
        },
        bob: DhParty {
            private_key: private_b.clone(),
            public_key: public_b,
            shared_secret: shared_b,
        },
        shared_secret: shared_a,
        valid,
        steps,
    })
}

/// Draw a uniformly random private key from `[1, p)`.
pub fn generate_private_key<R: Rng + ?Sized>(params: &DhParams, rng: &mut R) -> BigUint {
    rng.gen_biguint_range(&BigUint::one(), params.p())
}

fn check_private_key(name: &'static str, key: &BigUint, p: &BigUint) -> Result<()> {
    if key.is_zero() || key >= p {
        return Err(Error::domain(
            "dh exchange",
            format!("{name} must be between 1 and {}, got {key}", p - 1u32),
        ));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn narrate(
    p: &BigUint,
    g: &BigUint,
    private_a: &BigUint,
    private_b: &BigUint,
    public_a: &BigUint,
    public_b: &BigUint,
    shared_a: &BigUint,
    shared_b: &BigUint,
) -> Vec<DhStep> {
    vec![
        DhStep {
            party: "Setup",
            calculation: format!("Prime p = {p}"),
            description: "Publicly shared prime modulus",
        },
        DhStep {
            party: "Setup",
            calculation: format!("Primitive root g = {g}"),
            description: "Publicly shared generator modulo p",
        },
        DhStep {
            party: "Alice",
            calculation: format!("Private key a = {private_a}"),
            description: "Alice's private key, kept secret",
        },
        DhStep {
            party: "Alice",
            calculation: format!("Public key A = g^a mod p = {g}^{private_a} mod {p} = {public_a}"),
            description: "Alice computes and shares her public key",
        },
        DhStep {
            party: "Bob",
            calculation: format!("Private key b = {private_b}"),
            description: "Bob's private key, kept secret",
        },
        DhStep {
            party: "Bob",
            calculation: format!("Public key B = g^b mod p = {g}^{private_b} mod {p} = {public_b}"),
            description: "Bob computes and shares his public key",
        },
        DhStep {
            party: "Alice",
            calculation: format!(
                "Shared secret = B^a mod p = {public_b}^{private_a} mod {p} = {shared_a}"
            ),
            description: "Alice derives the secret from Bob's public key",
        },
        DhStep {
            party: "Bob",
            calculation: format!(
                "Shared secret = A^b mod p = {public_a}^{private_b} mod {p} = {shared_b}"
            ),
            description: "Bob derives the secret from Alice's public key",
        },
        DhStep {
            party: "Result",
            calculation: format!("Both parties now share the secret K = {shared_a}"),
            description: "The secret was established without ever being transmitted",
        },
    ]
}

/// Serialize a `BigUint` as its decimal string, matching the wire format
/// the boundary layer accepts for parameters.
fn decimal<S: Serializer>(value: &BigUint, serializer: S) -> core::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
