//! Round-trip properties for every cipher, driven by proptest.

use clcrypt::algorithms::playfair;
use clcrypt::prelude::*;
use num_bigint::BigUint;
use proptest::prelude::*;

/// A fixed pool of key matrices covering every supported size, all with
/// determinants coprime to 26.
fn invertible_matrices() -> impl Strategy<Value = KeyMatrix> {
    prop_oneof![
        Just(vec![vec![3, 3], vec![2, 5]]),
        Just(vec![vec![1, 0], vec![0, 1]]),
        Just(vec![vec![5, 8], vec![17, 3]]),
        Just(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]),
        Just(vec![vec![2, 4, 5], vec![9, 2, 1], vec![3, 17, 7]]),
        Just(vec![
            vec![1, 1, 0, 0],
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 1],
            vec![0, 0, 0, 1],
        ]),
        Just(vec![
            vec![3, 3, 0, 0],
            vec![2, 5, 0, 0],
            vec![0, 0, 3, 3],
            vec![0, 0, 2, 5],
        ]),
    ]
    .prop_map(|rows| KeyMatrix::new(rows).expect("pool matrices are valid"))
}

proptest! {
    #[test]
    fn hill_decrypt_inverts_encrypt(key in invertible_matrices(), plaintext in "[A-Z]{1,48}") {
        let cipher = HillCipher::new(key);
        let encrypted = cipher.encrypt(&plaintext).unwrap();
        let decrypted = cipher.decrypt(&encrypted.text).unwrap();
        prop_assert_eq!(decrypted.text, cipher.prepare_text(&plaintext));
    }

    #[test]
    fn playfair_decrypt_inverts_encrypt(key in "[A-Za-z]{1,12}", plaintext in "[A-Za-z]{1,40}") {
        let cipher = PlayfairCipher::new(&key).unwrap();
        let encrypted = cipher.encrypt(&plaintext).unwrap();
        let decrypted = cipher.decrypt(&encrypted.text).unwrap();
        prop_assert_eq!(decrypted.text, playfair::prepare_text(&plaintext));
    }

    #[test]
    fn vigenere_decrypt_inverts_encrypt(key in "[A-Z]{1,10}", plaintext in "[A-Z]{1,60}") {
        let cipher = VigenereCipher::new(&key).unwrap();
        let encrypted = cipher.encrypt(&plaintext).unwrap();
        let decrypted = cipher.decrypt(&encrypted.text).unwrap();
        prop_assert_eq!(decrypted.text, plaintext);
    }

    #[test]
    fn dh_parties_always_agree(idx in 0usize..4, a_seed in 1u64..10_000, b_seed in 1u64..10_000) {
        // Small primes with known primitive roots keep validation fast
        let (p, g) = [(23u64, 5u64), (59, 2), (467, 2), (1019, 2)][idx];
        let a = 1 + a_seed % (p - 1);
        let b = 1 + b_seed % (p - 1);

        let params = DhParams::new(BigUint::from(p), BigUint::from(g)).unwrap();
        let output = exchange(&params, &BigUint::from(a), &BigUint::from(b)).unwrap();
        prop_assert!(output.valid);
        prop_assert_eq!(output.alice.shared_secret, output.bob.shared_secret);
    }

    #[test]
    fn outputs_are_deterministic(plaintext in "[A-Z]{2,30}") {
        let key = KeyMatrix::new(vec![vec![3, 3], vec![2, 5]]).unwrap();
        let cipher = HillCipher::new(key);
        let first = cipher.encrypt(&plaintext).unwrap();
        let second = cipher.encrypt(&plaintext).unwrap();
        prop_assert_eq!(first, second);
    }
}
