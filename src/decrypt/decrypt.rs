use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use log::debug;
use std::path::Path;

use crate::cipher::{split_nonce, GcmCipher};
use crate::error::{CryptoError, CryptoResult};
use crate::utils;

/// Capability interface for AES-256-GCM decryption
///
/// One concrete implementation exists ([`AesDecryptor`]); the trait is the
/// seam where test doubles substitute the real cipher.
///
/// The `*_with_nonce` methods open the blob with exactly the nonce given.
/// The others expect the framing produced by auto-nonce encryption and
/// recover the nonce from the front of the blob, but only when the blob is
/// strictly longer than the nonce size — see
/// [`split_nonce`](crate::cipher::split_nonce) for the boundary rule.
pub trait Decryptor {
    /// Decrypt base64 ciphertext with a caller-supplied nonce
    fn decrypt_with_nonce(
        &self,
        key: &[u8],
        nonce: &[u8],
        ciphertext: &str,
    ) -> CryptoResult<Vec<u8>>;

    /// Decrypt a raw ciphertext file with a caller-supplied nonce, writing
    /// the plaintext to `output_path`
    fn decrypt_file_with_nonce(
        &self,
        key: &[u8],
        nonce: &[u8],
        input_path: &Path,
        output_path: &Path,
    ) -> CryptoResult<()>;

    /// Decrypt base64 of `nonce ++ sealed ciphertext`
    fn decrypt(&self, key: &[u8], nonce_ciphertext: &str) -> CryptoResult<Vec<u8>>;

    /// Decrypt a raw `nonce ++ sealed ciphertext` file, writing the
    /// plaintext to `output_path`
    fn decrypt_file(&self, key: &[u8], input_path: &Path, output_path: &Path)
        -> CryptoResult<()>;
}

/// Stateless AES-256-GCM decryptor
///
/// The mirror image of [`AesEncryptor`](crate::encrypt::AesEncryptor):
/// no state, safe to share and call concurrently.
#[derive(Debug, Default, Clone, Copy)]
pub struct AesDecryptor;

impl Decryptor for AesDecryptor {
    fn decrypt_with_nonce(
        &self,
        key: &[u8],
        nonce: &[u8],
        ciphertext: &str,
    ) -> CryptoResult<Vec<u8>> {
        let blob = decode_ciphertext(ciphertext)?;
        decrypt_aes256_gcm(key, Some(nonce), &blob)
    }

    fn decrypt_file_with_nonce(
        &self,
        key: &[u8],
        nonce: &[u8],
        input_path: &Path,
        output_path: &Path,
    ) -> CryptoResult<()> {
        decrypt_file_aes256_gcm(key, Some(nonce), input_path, output_path)
    }

    fn decrypt(&self, key: &[u8], nonce_ciphertext: &str) -> CryptoResult<Vec<u8>> {
        let blob = decode_ciphertext(nonce_ciphertext)?;
        decrypt_aes256_gcm(key, None, &blob)
    }

    fn decrypt_file(
        &self,
        key: &[u8],
        input_path: &Path,
        output_path: &Path,
    ) -> CryptoResult<()> {
        decrypt_file_aes256_gcm(key, None, input_path, output_path)
    }
}

/// Decode base64 ciphertext before any cipher work
fn decode_ciphertext(ciphertext: &str) -> CryptoResult<Vec<u8>> {
    BASE64
        .decode(ciphertext)
        .map_err(|e| CryptoError::decode("decode ciphertext", e))
}

/// Open a blob, recovering a prepended nonce when none is supplied
///
/// `nonce = None` selects auto-nonce mode: the leading bytes of the blob
/// are taken as the nonce per the [`split_nonce`] boundary rule. A blob at
/// or under the nonce size is passed whole to the AEAD with an empty nonce
/// and fails there, downstream of extraction.
fn decrypt_aes256_gcm(key: &[u8], nonce: Option<&[u8]>, blob: &[u8]) -> CryptoResult<Vec<u8>> {
    let cipher = GcmCipher::new(key)?;

    match nonce {
        Some(supplied) => cipher.open(supplied, blob),
        None => {
            let (nonce, ciphertext) = split_nonce(blob);
            cipher.open(nonce, ciphertext)
        }
    }
}

fn decrypt_file_aes256_gcm(
    key: &[u8],
    nonce: Option<&[u8]>,
    input_path: &Path,
    output_path: &Path,
) -> CryptoResult<()> {
    let blob = utils::read_file(input_path)?;
    debug!(
        "decrypting {} bytes from '{}'",
        blob.len(),
        input_path.display()
    );

    let mut plaintext = decrypt_aes256_gcm(key, nonce, &blob)?;
    let result = utils::write_file_restricted(output_path, &plaintext);
    utils::secure_zero(&mut plaintext);
    result?;

    debug!("wrote decrypted output to '{}'", output_path.display());
    Ok(())
}
