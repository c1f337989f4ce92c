use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use log::debug;
use std::path::Path;

use crate::cipher::{generate_nonce, GcmCipher};
use crate::error::CryptoResult;
use crate::utils;

/// Capability interface for AES-256-GCM encryption
///
/// One concrete implementation exists ([`AesEncryptor`]); the trait is the
/// seam where test doubles substitute the real cipher.
///
/// Every method validates the key length before any cipher work. The
/// `*_with_nonce` methods seal with exactly the nonce given and leave nonce
/// transport to the caller; the others generate a fresh random nonce per
/// call and prepend it to the ciphertext so decryption can recover it.
pub trait Encryptor {
    /// Encrypt bytes with a caller-supplied nonce, returning base64 text of
    /// the sealed ciphertext (tag included, nonce not included)
    fn encrypt_with_nonce(&self, key: &[u8], nonce: &[u8], plaintext: &[u8])
        -> CryptoResult<String>;

    /// Encrypt a file with a caller-supplied nonce, writing the raw sealed
    /// ciphertext to `output_path`
    fn encrypt_file_with_nonce(
        &self,
        key: &[u8],
        nonce: &[u8],
        input_path: &Path,
        output_path: &Path,
    ) -> CryptoResult<()>;

    /// Encrypt bytes with a fresh random nonce, returning base64 text of
    /// `nonce ++ sealed ciphertext`
    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> CryptoResult<String>;

    /// Encrypt a file with a fresh random nonce, writing raw
    /// `nonce ++ sealed ciphertext` to `output_path`
    fn encrypt_file(&self, key: &[u8], input_path: &Path, output_path: &Path)
        -> CryptoResult<()>;
}

/// Stateless AES-256-GCM encryptor
///
/// Carries no state at all; key material is read-only input per call, so a
/// single instance is safe to use from any number of threads.
///
/// # Examples
///
/// ```
/// use sealkit::prelude::*;
///
/// let key = [0x42u8; 32];
/// let encryptor = AesEncryptor;
/// let ciphertext = encryptor.encrypt(&key, b"secret").unwrap();
///
/// let decryptor = AesDecryptor;
/// let plaintext = decryptor.decrypt(&key, &ciphertext).unwrap();
/// assert_eq!(plaintext, b"secret");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AesEncryptor;

impl Encryptor for AesEncryptor {
    fn encrypt_with_nonce(
        &self,
        key: &[u8],
        nonce: &[u8],
        plaintext: &[u8],
    ) -> CryptoResult<String> {
        let sealed = encrypt_aes256_gcm(key, Some(nonce), plaintext)?;
        Ok(BASE64.encode(sealed))
    }

    fn encrypt_file_with_nonce(
        &self,
        key: &[u8],
        nonce: &[u8],
        input_path: &Path,
        output_path: &Path,
    ) -> CryptoResult<()> {
        encrypt_file_aes256_gcm(key, Some(nonce), input_path, output_path)
    }

    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> CryptoResult<String> {
        let blob = encrypt_aes256_gcm(key, None, plaintext)?;
        Ok(BASE64.encode(blob))
    }

    fn encrypt_file(
        &self,
        key: &[u8],
        input_path: &Path,
        output_path: &Path,
    ) -> CryptoResult<()> {
        encrypt_file_aes256_gcm(key, None, input_path, output_path)
    }
}

/// Generate a fresh random key as base64 text
///
/// Draws 24 random bytes and base64-encodes them, yielding a 32-character
/// string whose bytes can be used directly as an AES-256 key.
///
/// # Errors
///
/// Returns [`CryptoError::RandomSource`](crate::error::CryptoError) if the
/// OS random source cannot supply enough bytes.
pub fn generate_key() -> CryptoResult<String> {
    // base64 turns every 3 bytes into 4 characters, so 24 random bytes
    // encode to exactly the 32 characters a key needs
    let key = utils::random_bytes(24)?;
    Ok(BASE64.encode(key))
}

/// Seal plaintext, generating and prepending a nonce when none is supplied
///
/// `nonce = None` selects auto-nonce mode: a fresh random nonce is drawn and
/// the output is `nonce ++ sealed`. With `Some(nonce)` the output is just
/// the sealed bytes and the caller transports the nonce separately.
fn encrypt_aes256_gcm(
    key: &[u8],
    nonce: Option<&[u8]>,
    plaintext: &[u8],
) -> CryptoResult<Vec<u8>> {
    let cipher = GcmCipher::new(key)?;

    match nonce {
        Some(supplied) => cipher.seal(supplied, plaintext),
        None => {
            let nonce = generate_nonce()?;
            let sealed = cipher.seal(&nonce, plaintext)?;

            let mut blob = Vec::with_capacity(nonce.len() + sealed.len());
            blob.extend_from_slice(&nonce);
            blob.extend_from_slice(&sealed);
            Ok(blob)
        }
    }
}

fn encrypt_file_aes256_gcm(
    key: &[u8],
    nonce: Option<&[u8]>,
    input_path: &Path,
    output_path: &Path,
) -> CryptoResult<()> {
    let plaintext = utils::read_file(input_path)?;
    debug!(
        "encrypting {} bytes from '{}'",
        plaintext.len(),
        input_path.display()
    );

    let blob = encrypt_aes256_gcm(key, nonce, &plaintext)?;
    utils::write_file_restricted(output_path, &blob)?;
    debug!(
        "wrote {} encrypted bytes to '{}'",
        blob.len(),
        output_path.display()
    );

    Ok(())
}
