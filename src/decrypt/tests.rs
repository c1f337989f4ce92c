use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::*;
use crate::cipher::GCM_STANDARD_NONCE_SIZE;
use crate::encrypt::{AesEncryptor, Encryptor};
use crate::error::CryptoError;
use crate::utils;

#[test]
fn test_roundtrip_auto_nonce() {
    let key = utils::random_bytes(32).unwrap();
    let ciphertext = AesEncryptor.encrypt(&key, b"auto nonce roundtrip").unwrap();

    let plaintext = AesDecryptor.decrypt(&key, &ciphertext).unwrap();
    assert_eq!(plaintext, b"auto nonce roundtrip");
}

#[test]
fn test_roundtrip_explicit_nonce() {
    let key = utils::random_bytes(32).unwrap();
    let nonce = utils::random_bytes(GCM_STANDARD_NONCE_SIZE).unwrap();

    let ciphertext = AesEncryptor
        .encrypt_with_nonce(&key, &nonce, b"explicit nonce roundtrip")
        .unwrap();
    let plaintext = AesDecryptor
        .decrypt_with_nonce(&key, &nonce, &ciphertext)
        .unwrap();
    assert_eq!(plaintext, b"explicit nonce roundtrip");
}

#[test]
fn test_roundtrip_empty_plaintext() {
    let key = utils::random_bytes(32).unwrap();
    let ciphertext = AesEncryptor.encrypt(&key, b"").unwrap();
    let plaintext = AesDecryptor.decrypt(&key, &ciphertext).unwrap();
    assert!(plaintext.is_empty());
}

#[test]
fn test_malformed_base64_fails_before_crypto() {
    // Even with a bad key, the decode error comes first
    let bad_key = [0u8; 7];
    let result = AesDecryptor.decrypt(&bad_key, "not//valid==base64!!");
    assert!(matches!(result, Err(CryptoError::Decode { .. })));

    let nonce = [0u8; GCM_STANDARD_NONCE_SIZE];
    let result = AesDecryptor.decrypt_with_nonce(&bad_key, &nonce, "@@@@");
    assert!(matches!(result, Err(CryptoError::Decode { .. })));
}

#[test]
fn test_invalid_key_rejected() {
    let ciphertext = BASE64.encode([0u8; 40]);
    for len in [31, 33] {
        let key = utils::random_bytes(len).unwrap();
        assert!(matches!(
            AesDecryptor.decrypt(&key, &ciphertext),
            Err(CryptoError::InvalidKeyLength { actual, .. }) if actual == len
        ));
    }
}

#[test]
fn test_tampered_ciphertext_fails_authentication() {
    let key = utils::random_bytes(32).unwrap();
    let ciphertext = AesEncryptor.encrypt(&key, b"tamper test").unwrap();

    let mut blob = BASE64.decode(&ciphertext).unwrap();
    let last = blob.len() - 1;
    blob[last] ^= 0x01;
    let tampered = BASE64.encode(&blob);

    assert!(matches!(
        AesDecryptor.decrypt(&key, &tampered),
        Err(CryptoError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_wrong_key_fails_authentication() {
    let key1 = utils::random_bytes(32).unwrap();
    let key2 = utils::random_bytes(32).unwrap();

    let ciphertext = AesEncryptor.encrypt(&key1, b"wrong key test").unwrap();
    assert!(matches!(
        AesDecryptor.decrypt(&key2, &ciphertext),
        Err(CryptoError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_nonce_extraction_boundary_twelve_bytes() {
    // A blob of exactly the nonce size is NOT split: the whole blob stays
    // ciphertext, the nonce stays empty, and the engine rejects the empty
    // nonce when parameterizing GCM
    let key = utils::random_bytes(32).unwrap();
    let blob = BASE64.encode([0u8; GCM_STANDARD_NONCE_SIZE]);

    let result = AesDecryptor.decrypt(&key, &blob);
    assert!(matches!(
        result,
        Err(CryptoError::CipherConstruction { .. })
    ));
}

#[test]
fn test_nonce_extraction_boundary_thirteen_bytes() {
    // One byte past the threshold IS split: twelve bytes of nonce, one byte
    // of ciphertext, which then fails tag verification (no room for a tag)
    let key = utils::random_bytes(32).unwrap();
    let blob = BASE64.encode([0u8; GCM_STANDARD_NONCE_SIZE + 1]);

    let result = AesDecryptor.decrypt(&key, &blob);
    assert!(matches!(
        result,
        Err(CryptoError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_decrypt_with_nonce_does_not_split() {
    // In explicit-nonce mode a long blob is never split; the sealed bytes
    // from encrypt_with_nonce open as-is
    let key = utils::random_bytes(32).unwrap();
    let nonce = utils::random_bytes(GCM_STANDARD_NONCE_SIZE).unwrap();

    let plaintext = vec![0x5A; 64];
    let ciphertext = AesEncryptor
        .encrypt_with_nonce(&key, &nonce, &plaintext)
        .unwrap();
    let opened = AesDecryptor
        .decrypt_with_nonce(&key, &nonce, &ciphertext)
        .unwrap();
    assert_eq!(opened, plaintext);
}

#[test]
fn test_file_roundtrip() {
    let key = utils::random_bytes(32).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.bin");
    let sealed = dir.path().join("sealed.bin");
    let opened = dir.path().join("opened.bin");

    let data = (0u8..=255).cycle().take(4096).collect::<Vec<_>>();
    std::fs::write(&plain, &data).unwrap();

    AesEncryptor.encrypt_file(&key, &plain, &sealed).unwrap();
    AesDecryptor.decrypt_file(&key, &sealed, &opened).unwrap();

    assert_eq!(std::fs::read(&opened).unwrap(), data);
}

#[test]
fn test_file_roundtrip_explicit_nonce() {
    let key = utils::random_bytes(32).unwrap();
    let nonce = utils::random_bytes(GCM_STANDARD_NONCE_SIZE).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.bin");
    let sealed = dir.path().join("sealed.bin");
    let opened = dir.path().join("opened.bin");

    std::fs::write(&plain, b"explicit nonce file roundtrip").unwrap();

    AesEncryptor
        .encrypt_file_with_nonce(&key, &nonce, &plain, &sealed)
        .unwrap();
    AesDecryptor
        .decrypt_file_with_nonce(&key, &nonce, &sealed, &opened)
        .unwrap();

    assert_eq!(
        std::fs::read(&opened).unwrap(),
        b"explicit nonce file roundtrip"
    );
}

#[test]
fn test_decrypt_file_tampered_writes_nothing() {
    let key = utils::random_bytes(32).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.bin");
    let sealed = dir.path().join("sealed.bin");
    let opened = dir.path().join("opened.bin");

    std::fs::write(&plain, b"tampered file test").unwrap();
    AesEncryptor.encrypt_file(&key, &plain, &sealed).unwrap();

    let mut blob = std::fs::read(&sealed).unwrap();
    let mid = blob.len() / 2;
    blob[mid] ^= 0x01;
    std::fs::write(&sealed, &blob).unwrap();

    let result = AesDecryptor.decrypt_file(&key, &sealed, &opened);
    assert!(matches!(
        result,
        Err(CryptoError::AuthenticationFailed { .. })
    ));
    assert!(!opened.exists());
}

#[test]
fn test_decrypt_file_missing_input() {
    let key = utils::random_bytes(32).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let result = AesDecryptor.decrypt_file(
        &key,
        &dir.path().join("does-not-exist"),
        &dir.path().join("opened.bin"),
    );
    assert!(matches!(result, Err(CryptoError::Io { .. })));
}
