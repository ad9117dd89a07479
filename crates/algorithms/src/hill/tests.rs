use super::*;

fn cipher_2x2() -> HillCipher {
    HillCipher::new(KeyMatrix::new(vec![vec![3, 3], vec![2, 5]]).unwrap())
}

fn cipher_3x3() -> HillCipher {
    // GYBNQKURP, the classic 3x3 example key
    HillCipher::new(
        KeyMatrix::new(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]).unwrap(),
    )
}

#[test]
fn prepare_text_cleans_and_pads() {
    let cipher = cipher_2x2();
    assert_eq!(cipher.prepare_text("He lp!"), "HELP");
    assert_eq!(cipher.prepare_text("CAT"), "CATX");

    let cipher = cipher_3x3();
    assert_eq!(cipher.prepare_text("HI"), "HIX");
    assert_eq!(cipher.prepare_text("ACT"), "ACT");
}

#[test]
fn text_to_vectors_maps_letter_indices() {
    assert_eq!(text_to_vectors("HELP", 2), vec![vec![7, 4], vec![11, 15]]);
    assert_eq!(text_to_vectors("ACT", 3), vec![vec![0, 2, 19]]);
}

#[test]
fn encrypt_help_reference_vector() {
    // Hand-checked: [3,3][2,5] x [7,4] = [33,34] = [7,8] -> "HI",
    // and the second block [11,15] maps to [0,19] -> "AT".
    let output = cipher_2x2().encrypt("HELP").unwrap();
    assert_eq!(output.text, "HIAT");

    assert_eq!(output.steps.len(), 1);
    let step = &output.steps[0];
    assert_eq!(step.block, "HE");
    assert_eq!(step.vector, vec![7, 4]);
    assert_eq!(step.product, vec![7, 8]);
    assert_eq!(step.result_block, "HI");
    assert_eq!(step.calculation, "[3,3][2,5] x [7,4] = [7,8] (mod 26)");
    assert_eq!(output.key_matrix, vec![vec![3, 3], vec![2, 5]]);
}

#[test]
fn decrypt_reverses_encrypt() {
    let output = cipher_2x2().decrypt("HIAT").unwrap();
    assert_eq!(output.text, "HELP");
    // The trace echoes the inverse key that was applied
    assert_eq!(output.key_matrix, vec![vec![15, 17], vec![20, 9]]);
}

#[test]
fn encrypt_act_3x3_reference_vector() {
    let output = cipher_3x3().encrypt("ACT").unwrap();
    assert_eq!(output.text, "POH");
    assert_eq!(cipher_3x3().decrypt("POH").unwrap().text, "ACT");
}

#[test]
fn round_trip_with_padding() {
    let cipher = cipher_3x3();
    let encrypted = cipher.encrypt("PAY MORE MONEY").unwrap();
    let decrypted = cipher.decrypt(&encrypted.text).unwrap();
    assert_eq!(decrypted.text, cipher.prepare_text("PAY MORE MONEY"));
}

#[test]
fn singular_key_fails_only_on_decrypt() {
    let cipher = HillCipher::new(KeyMatrix::new(vec![vec![2, 4], vec![4, 8]]).unwrap());
    // Encryption is well-defined even for a singular key
    let encrypted = cipher.encrypt("HELP").unwrap();
    let err = cipher.decrypt(&encrypted.text).unwrap_err();
    assert!(matches!(err, Error::NotInvertible { value: 0, .. }));
}

#[test]
fn misaligned_ciphertext_is_rejected() {
    let err = cipher_2x2().decrypt("ABC").unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
    assert!(err.to_string().contains("multiple of the block size"));
}

#[test]
fn non_alphabetic_input_is_rejected() {
    let cipher = cipher_2x2();
    assert!(cipher.encrypt("HELP123").is_err());
    assert!(cipher.encrypt("").is_err());
    assert!(cipher.decrypt("HI-AT").is_err());
    // Whitespace is fine; it is stripped during cleaning
    assert!(cipher.encrypt("HE LP").is_ok());
}
