use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::{rngs::OsRng, RngCore};
use std::sync::Arc;

use crate::error::{CryptoError, CryptoResult};

/// Byte length of an AES-256 key (32 bytes = 256 bits)
pub const AES_KEY_LENGTH: usize = 32;

/// Standard GCM nonce size (12 bytes = 96 bits)
pub const GCM_STANDARD_NONCE_SIZE: usize = 12;

/// Validate that a key is usable for AES-256-GCM
///
/// Every entry point in this crate calls this before doing any cipher work,
/// so a bad key never reaches the AEAD.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKeyLength`] unless the key is exactly
/// [`AES_KEY_LENGTH`] bytes.
pub fn validate_key(key: &[u8]) -> CryptoResult<()> {
    if key.len() != AES_KEY_LENGTH {
        return Err(CryptoError::invalid_key_length(key.len()));
    }
    Ok(())
}

/// Split a ciphertext blob into `(nonce, ciphertext)`
///
/// Used on the decryption path in auto-nonce mode, where encryption
/// prepended a fresh nonce to the sealed bytes. The first
/// [`GCM_STANDARD_NONCE_SIZE`] bytes are taken as the nonce only when the
/// blob is strictly longer than the nonce size; a blob at or under the
/// threshold is assumed to carry no embedded nonce and is returned whole
/// with an empty nonce, leaving the failure to the AEAD open step.
///
/// The `length > GCM_STANDARD_NONCE_SIZE` boundary is deliberate and load
/// bearing; do not change it to `>=`.
///
/// # Examples
///
/// ```
/// use sealkit::cipher::{split_nonce, GCM_STANDARD_NONCE_SIZE};
///
/// let blob = vec![0u8; GCM_STANDARD_NONCE_SIZE + 4];
/// let (nonce, ciphertext) = split_nonce(&blob);
/// assert_eq!(nonce.len(), GCM_STANDARD_NONCE_SIZE);
/// assert_eq!(ciphertext.len(), 4);
///
/// let short = vec![0u8; GCM_STANDARD_NONCE_SIZE];
/// let (nonce, ciphertext) = split_nonce(&short);
/// assert!(nonce.is_empty());
/// assert_eq!(ciphertext.len(), GCM_STANDARD_NONCE_SIZE);
/// ```
pub fn split_nonce(blob: &[u8]) -> (&[u8], &[u8]) {
    if blob.len() > GCM_STANDARD_NONCE_SIZE {
        blob.split_at(GCM_STANDARD_NONCE_SIZE)
    } else {
        (&[], blob)
    }
}

/// Generate a random nonce of the standard GCM size
///
/// Draws [`GCM_STANDARD_NONCE_SIZE`] bytes from the OS secure random
/// source. Exhaustion of the source is fatal and propagates as
/// [`CryptoError::RandomSource`]; there is no retry and no fallback
/// generator.
pub fn generate_nonce() -> CryptoResult<Vec<u8>> {
    let mut nonce = vec![0u8; GCM_STANDARD_NONCE_SIZE];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| CryptoError::random_source(&format!("generate nonce: {}", e)))?;
    Ok(nonce)
}

/// AES-256-GCM cipher for authenticated encryption
///
/// Provides authenticated encryption (AEAD) over AES-256 in Galois/Counter
/// Mode: confidentiality from the block cipher, integrity and authenticity
/// from the GCM tag. The struct holds only the keyed cipher; it has no other
/// state, so a single instance is safe to share across threads.
///
/// # Examples
///
/// ```
/// use sealkit::cipher::{generate_nonce, GcmCipher};
///
/// let key = [0x42; 32];
/// let cipher = GcmCipher::new(&key).unwrap();
///
/// let nonce = generate_nonce().unwrap();
/// let sealed = cipher.seal(&nonce, b"secret message").unwrap();
/// let opened = cipher.open(&nonce, &sealed).unwrap();
/// assert_eq!(opened, b"secret message");
/// ```
#[derive(Clone)]
pub struct GcmCipher {
    cipher: Arc<Aes256Gcm>,
}

impl std::fmt::Debug for GcmCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GcmCipher")
            .field("cipher", &"[AES-256-GCM Cipher]")
            .finish()
    }
}

impl GcmCipher {
    /// Create a new AES-256-GCM cipher with the given key
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyLength`] if the key is not exactly
    /// [`AES_KEY_LENGTH`] bytes, and [`CryptoError::CipherConstruction`] if
    /// the block cipher rejects the key anyway (unreachable after the length
    /// check, but surfaced rather than assumed).
    pub fn new(key: &[u8]) -> CryptoResult<Self> {
        validate_key(key)?;

        let cipher = Aes256Gcm::new_from_slice(key).map_err(|e| {
            CryptoError::cipher_construction(&format!("create AES-256-GCM cipher: {}", e))
        })?;

        Ok(Self {
            cipher: Arc::new(cipher),
        })
    }

    /// Encrypt and authenticate plaintext
    ///
    /// Returns the ciphertext with the GCM authentication tag appended. The
    /// output is deterministic for a fixed key/nonce/plaintext; never seal
    /// two different plaintexts under the same (key, nonce) pair — nonce
    /// uniqueness is the caller's obligation and is not enforced here.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::CipherConstruction`] if the nonce length is
    /// not supported by the GCM parameterization in use
    /// ([`GCM_STANDARD_NONCE_SIZE`] bytes), or if the seal operation itself
    /// fails.
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
        if nonce.len() != GCM_STANDARD_NONCE_SIZE {
            return Err(CryptoError::cipher_construction(&format!(
                "unsupported nonce length for GCM: expected {} bytes, got {}",
                GCM_STANDARD_NONCE_SIZE,
                nonce.len()
            )));
        }

        let nonce = Nonce::from_slice(nonce);
        self.cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| CryptoError::cipher_construction(&format!("AES-256-GCM seal: {}", e)))
    }

    /// Verify and decrypt ciphertext
    ///
    /// The tag at the end of `ciphertext` is verified before any plaintext
    /// is released; on failure nothing is returned, never a partial or
    /// garbage buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::CipherConstruction`] if the nonce length is
    /// unsupported, and [`CryptoError::AuthenticationFailed`] if the tag
    /// does not verify (tampered ciphertext, wrong key, or wrong nonce).
    pub fn open(&self, nonce: &[u8], ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
        if nonce.len() != GCM_STANDARD_NONCE_SIZE {
            return Err(CryptoError::cipher_construction(&format!(
                "unsupported nonce length for GCM: expected {} bytes, got {}",
                GCM_STANDARD_NONCE_SIZE,
                nonce.len()
            )));
        }

        let nonce = Nonce::from_slice(nonce);
        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CryptoError::authentication_failed("AES-256-GCM open: tag mismatch"))
    }
}
