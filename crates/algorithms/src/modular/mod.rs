//! Modular arithmetic and elementary number theory
//!
//! Arbitrary-precision routines backing the Diffie-Hellman module, plus the
//! small fixed-modulus inverse search used by the Hill cipher. The primality
//! and factorization routines are exact trial division: correct for any
//! input, but O(sqrt(n)), so callers feeding them unbounded parameters are
//! expected to cap the bit length first (see `clcrypt_params::dh`).

use std::collections::BTreeSet;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use clcrypt_api::{Error, Result};


/// Modular exponentiation `base^exp mod modulus` by iterative
/// square-and-multiply.
///
/// Fails with a domain error when `modulus` is zero; negative moduli are
/// unrepresentable in `BigUint`.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::domain("mod_pow", "modulus must be positive"));
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();
    while !exp.is_zero() {
        if exp.bit(0) {
            result = &result * &base % modulus;
        }
        exp >>= 1;
        base = &base * &base % modulus;
    }
    Ok(result)
}

/// Smallest `x` in `[1, m)` with `(a * x) mod m == 1`, found by linear
/// search.
///
/// The scan is O(m) and only acceptable because the callers in this crate
/// use the small fixed modulus 26. A general-modulus caller should use the
/// extended Euclidean algorithm instead.
pub fn mod_inverse(a: i64, m: i64) -> Result<i64> {
    if m <= 1 {
        return Err(Error::domain(
            "mod_inverse",
            format!("modulus must be at least 2, got {m}"),
        ));
    }
    let a = a.rem_euclid(m);
    for x in 1..m {
        if (a * x).rem_euclid(m) == 1 {
            return Ok(x);
        }
    }
    Err(Error::NotInvertible {
        context: "mod_inverse",
        value: a,
        modulus: m,
    })
}

/// Exact primality test by trial division: factor 2 first, then odd
/// candidates while `i * i <= n`.
pub fn is_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    if n == &two {
        return true;
    }
    if (n % &two).is_zero() {
        return false;
    }

    let mut i = BigUint::from(3u32);
    while &i * &i <= *n {
        if (n % &i).is_zero() {
            return false;
        }
        i += 2u32;
    }
    true
}

/// Distinct prime factors of `n` (no multiplicities), by trial division.
///
/// Extracts the factor 2, then odd factors up to sqrt of the remainder;
/// whatever is left above 1 is itself prime. Returns the empty set for
/// `n < 2`.
pub fn prime_factors(n: &BigUint) -> BTreeSet<BigUint> {
    let mut factors = BTreeSet::new();
    let two = BigUint::from(2u32);
    if n < &two {
        return factors;
    }

    let mut rem = n.clone();
    if (&rem % &two).is_zero() {
        factors.insert(two.clone());
        while (&rem % &two).is_zero() {
            rem /= &two;
        }
    }

    let mut i = BigUint::from(3u32);
    while &i * &i <= rem {
        if (&rem % &i).is_zero() {
            factors.insert(i.clone());
            while (&rem % &i).is_zero() {
                rem /= &i;
            }
        }
        i += 2u32;
    }

    if rem > BigUint::one() {
        factors.insert(rem);
    }
    factors
}

/// Whether `g` is a primitive root of the multiplicative group modulo `p`.
///
/// Standard test: with `phi = p - 1`, `g` is a primitive root iff
/// `g^(phi/q) mod p != 1` for every prime factor `q` of `phi`. Exact
/// whenever [`prime_factors`] is exact, which it always is here. Requires
/// `p >= 2` and `1 <= g < p`.
pub fn is_primitive_root(g: &BigUint, p: &BigUint) -> Result<bool> {
    if p < &BigUint::from(2u32) {
        return Err(Error::domain(
            "is_primitive_root",
            format!("modulus must be at least 2, got {p}"),
        ));
    }
    if g.is_zero() || g >= p {
        return Err(Error::domain(
            "is_primitive_root",
            format!("generator must satisfy 1 <= g < {p}, got {g}"),
        ));
    }

    let phi = p - 1u32;
    for q in prime_factors(&phi) {
        let exponent = &phi / &q;
        if mod_pow(g, &exponent, p)?.is_one() {
            return Ok(false);
        }
    }
    Ok(true)
}
