use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

fn textbook_params() -> DhParams {
    DhParams::new(big(23), big(5)).unwrap()
}

#[test]
fn textbook_exchange() {
    let output = exchange(&textbook_params(), &big(6), &big(15)).unwrap();
    assert_eq!(output.alice.public_key, big(8));
    assert_eq!(output.bob.public_key, big(19));
    assert_eq!(output.alice.shared_secret, big(2));
    assert_eq!(output.bob.shared_secret, big(2));
    assert_eq!(output.shared_secret, big(2));
    assert!(output.valid);
}

#[test]
fn narration_walks_the_protocol() {
    let output = exchange(&textbook_params(), &big(6), &big(15)).unwrap();
    assert_eq!(output.steps.len(), 9);
    assert_eq!(output.steps[0].party, "Setup");
    assert_eq!(output.steps[3].calculation, "Public key A = g^a mod p = 5^6 mod 23 = 8");
    assert_eq!(output.steps[8].calculation, "Both parties now share the secret K = 2");
}

#[test]
fn composite_modulus_is_rejected_by_name() {
    let err = DhParams::new(big(15), big(2)).unwrap_err();
    assert!(matches!(err, Error::Domain { .. }));
    let message = err.to_string();
    assert!(message.contains("15"));
    assert!(message.contains("not a prime"));
}

#[test]
fn non_primitive_root_is_rejected() {
    let err = DhParams::new(big(23), big(4)).unwrap_err();
    assert!(err.to_string().contains("not a primitive root"));
}

#[test]
fn generator_range_is_checked() {
    assert!(DhParams::new(big(23), big(0)).is_err());
    assert!(DhParams::new(big(23), big(23)).is_err());
    assert!(DhParams::new(big(23), big(40)).is_err());
}

#[test]
fn oversized_modulus_fails_before_primality() {
    // 2^61 - 1 is prime, but 61 bits is over the cap; trial division at
    // that size would take hours, so the cap must fire first.
    let p = (BigUint::from(1u8) << 61) - 1u8;
    let err = DhParams::new(p, big(2)).unwrap_err();
    assert!(err.to_string().contains("exceeds"));
}

#[test]
fn tiny_modulus_is_rejected() {
    assert!(DhParams::new(big(0), big(1)).is_err());
    assert!(DhParams::new(big(1), big(1)).is_err());
}

#[test]
fn private_keys_must_be_in_range() {
    let params = textbook_params();
    let err = exchange(&params, &big(0), &big(15)).unwrap_err();
    assert!(err.to_string().contains("private key a"));

    let err = exchange(&params, &big(6), &big(23)).unwrap_err();
    assert!(err.to_string().contains("private key b"));

    assert!(exchange(&params, &big(1), &big(22)).is_ok());
}

#[test]
fn shared_secrets_agree_for_various_keys() {
    let params = DhParams::new(big(59), big(2)).unwrap();
    for (a, b) in [(1u64, 58), (7, 31), (29, 29), (42, 17)] {
        let output = exchange(&params, &big(a), &big(b)).unwrap();
        assert!(output.valid);
        assert_eq!(output.alice.shared_secret, output.bob.shared_secret);
    }
}

#[test]
fn generated_private_keys_are_in_range() {
    let params = textbook_params();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let key = generate_private_key(&params, &mut rng);
        assert!(key >= BigUint::one());
        assert!(&key < params.p());
    }
}

#[test]
fn generated_keys_complete_an_exchange() {
    let params = DhParams::new(big(467), big(2)).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let a = generate_private_key(&params, &mut rng);
    let b = generate_private_key(&params, &mut rng);
    let output = exchange(&params, &a, &b).unwrap();
    assert!(output.valid);
}

#[test]
fn output_serializes_with_decimal_strings() {
    let output = exchange(&textbook_params(), &big(6), &big(15)).unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["prime"], "23");
    assert_eq!(json["generator"], "5");
    assert_eq!(json["alice"]["public_key"], "8");
    assert_eq!(json["shared_secret"], "2");
    assert_eq!(json["valid"], true);
}
