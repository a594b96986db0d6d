use passhash::credential::{
    EncodedHmac, EncodedScrypt, Password, SALT_LEN, ScryptHasher, check, check_hmac, create,
    create_hmac, verify, verify_hmac,
};
use passhash::derivation::scrypt::{ScryptParamError, ScryptParams, scrypt};
use passhash::{Error, FormatError, HmacAlgorithm};

#[test]
fn create_then_check_accepts_password() {
    let password = Password::from("correct horse battery staple");
    let encoded = create(&password, 4, 8, 1, 32).unwrap();

    assert!(encoded.starts_with("$s0$40801$"));
    assert!(check(&password, &encoded).unwrap());
    assert!(verify(&password, &encoded));
}

#[test]
fn check_rejects_other_password() {
    let encoded = create(&Password::from("secret"), 4, 2, 2, 32).unwrap();

    assert!(!check(&Password::from("Secret"), &encoded).unwrap());
    assert!(!verify(&Password::from(""), &encoded));
}

#[test]
fn create_uses_fresh_salts() {
    let password = Password::from("same password");
    let a = EncodedScrypt::parse(&create(&password, 4, 1, 1, 32).unwrap()).unwrap();
    let b = EncodedScrypt::parse(&create(&password, 4, 1, 1, 32).unwrap()).unwrap();

    assert_eq!(a.salt.len(), SALT_LEN);
    assert_ne!(a.salt, b.salt);
    assert_ne!(a.derived, b.derived);
    assert_ne!(a.to_string(), b.to_string());
}

#[test]
fn encoded_key_is_plain_scrypt_output() {
    let password = Password::from("pw");
    let encoded = EncodedScrypt::parse(&create(&password, 5, 3, 2, 24).unwrap()).unwrap();

    let expected = scrypt(
        HmacAlgorithm::Sha256,
        b"pw",
        &encoded.salt,
        32,
        3,
        2,
        24,
    )
    .unwrap();
    assert_eq!(encoded.derived, expected);
}

#[test]
fn format_then_parse_recovers_fields() {
    let original = EncodedScrypt {
        algorithm: HmacAlgorithm::Sha512,
        params: ScryptParams::new(15, 255, 7).unwrap(),
        salt: (0..16).collect(),
        derived: (100..164).collect(),
    };

    let parsed: EncodedScrypt = original.to_string().parse().unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn uppercase_hex_params_are_accepted() {
    let password = Password::from("pw");
    let encoded = create(&password, 10, 1, 1, 16).unwrap();
    let upper = encoded.replacen("$a0101$", "$A0101$", 1);

    assert_ne!(encoded, upper);
    assert!(check(&password, &upper).unwrap());
}

/// A credential in the classic layout (no algorithm bits) checks out.
#[test]
fn known_credential_verifies() {
    let salt = b"0123456789abcdef";
    let derived = scrypt(HmacAlgorithm::Sha256, b"hunter2", salt, 16, 1, 1, 32).unwrap();
    let encoded = EncodedScrypt {
        algorithm: HmacAlgorithm::Sha256,
        params: ScryptParams::new(4, 1, 1).unwrap(),
        salt: salt.to_vec(),
        derived,
    }
    .to_string();

    assert!(encoded.starts_with("$s0$40101$MDEyMzQ1Njc4OWFiY2RlZg$"));
    assert!(check(&Password::from("hunter2"), &encoded).unwrap());
}

#[test]
fn check_reports_wrong_field_count() {
    let password = Password::from("pw");
    assert_eq!(
        check(&password, "$s0$40101$AAAA"),
        Err(Error::Format(FormatError::FieldCount(4)))
    );
    assert!(!verify(&password, "not a credential"));
}

#[test]
fn check_reports_wrong_version_tag() {
    assert_eq!(
        check(&Password::from("pw"), "$s1$40101$AAAA$AAAA"),
        Err(Error::Format(FormatError::VersionTag {
            expected: "s0",
            found: "s1".to_owned(),
        }))
    );
}

#[test]
fn check_reports_unknown_algorithm() {
    assert_eq!(
        check(&Password::from("pw"), "$s0$940101$AAAA$AAAA"),
        Err(Error::UnsupportedAlgorithm(9))
    );
}

#[test]
fn check_reports_out_of_range_params() {
    assert_eq!(
        check(&Password::from("pw"), "$s0$40001$AAAA$AAAA"),
        Err(Error::InvalidParams(ScryptParamError::ZeroBlockSize))
    );
}

#[test]
fn check_reports_bad_base64() {
    let result = check(&Password::from("pw"), "$s0$40101$AA+A$AAAA");
    assert!(matches!(result, Err(Error::Format(FormatError::Salt(_)))));
}

#[test]
fn create_validates_params_before_hashing() {
    let password = Password::from("pw");
    assert_eq!(
        create(&password, 16, 8, 1, 32),
        Err(Error::InvalidParams(ScryptParamError::LogCostOutOfRange(16)))
    );
    assert_eq!(
        create(&password, 4, 8, 0, 32),
        Err(Error::InvalidParams(ScryptParamError::ZeroParallelism))
    );
    assert_eq!(create(&password, 4, 8, 1, 0), Err(Error::InvalidKeyLength));
}

#[test]
fn hasher_defaults_match_documented_values() {
    let hasher = ScryptHasher::default();
    assert_eq!(hasher.algorithm, HmacAlgorithm::Sha256);
    assert_eq!(hasher.params, ScryptParams::new(14, 8, 1).unwrap());
    assert_eq!(hasher.dk_len, 32);
}

#[test]
fn hmac_credential_round_trips() {
    let password = Password::from("light");
    let encoded = create_hmac(&password, 1000, 32).unwrap();

    assert!(encoded.starts_with("$h0$3e8$"));
    assert!(check_hmac(&password, &encoded).unwrap());
    assert!(!check_hmac(&Password::from("heavy"), &encoded).unwrap());

    let parsed = EncodedHmac::parse(&encoded).unwrap();
    assert_eq!(parsed.iterations, 1000);
    assert_eq!(parsed.salt.len(), SALT_LEN);
}

#[test]
fn formats_do_not_cross_verify() {
    let password = Password::from("pw");
    let scrypt_encoded = create(&password, 4, 1, 1, 32).unwrap();
    let hmac_encoded = create_hmac(&password, 10, 32).unwrap();

    assert!(!verify_hmac(&password, &scrypt_encoded));
    assert!(!verify(&password, &hmac_encoded));
}

#[test]
fn raw_byte_passwords_are_supported() {
    let password = Password::from_bytes(&[0xff, 0x00, 0xfe]);
    let encoded = create(&password, 4, 1, 1, 32).unwrap();

    assert!(check(&password, &encoded).unwrap());
    assert!(!check(&Password::from_bytes(&[0xff, 0x00]), &encoded).unwrap());
}
