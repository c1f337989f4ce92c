/*!
 * sealkit — AES-256-GCM sealing of strings and files
 *
 * This crate encrypts and decrypts byte strings and whole files with
 * AES-256-GCM, in two nonce-handling modes:
 *
 * - *explicit nonce*: the caller supplies a 12-byte nonce and transports it
 *   out of band; the output is just the sealed ciphertext (tag included).
 * - *auto nonce*: a fresh random nonce is generated per call and prepended
 *   to the sealed ciphertext, so decryption can recover it by slicing the
 *   first 12 bytes off the blob.
 *
 * String entry points move ciphertext as base64 text (standard alphabet,
 * padded); file entry points read and write whole files, creating outputs
 * with owner-only permissions on Unix.
 *
 * All operations are pure functions over explicit inputs: no shared state,
 * no retries, every failure annotated with the step that failed and
 * propagated immediately.
 *
 * # Example
 *
 * ```
 * use sealkit::prelude::*;
 *
 * let key = [0x42u8; 32];
 *
 * let ciphertext = AesEncryptor.encrypt(&key, b"attack at dawn").unwrap();
 * let plaintext = AesDecryptor.decrypt(&key, &ciphertext).unwrap();
 * assert_eq!(plaintext, b"attack at dawn");
 * ```
 */

/// AES-256-GCM engine, key validation, and the nonce lifecycle
pub mod cipher;

/// Decryption capability and its text/file adapters
pub mod decrypt;

/// Encryption capability and its text/file adapters
pub mod encrypt;

/// Common error types for the library
pub mod error;

/// Utilities: secure randomness, zeroing, restricted file I/O
pub mod utils;

// Re-export main types for convenience
pub use cipher::{GcmCipher, AES_KEY_LENGTH, GCM_STANDARD_NONCE_SIZE};
pub use decrypt::{AesDecryptor, Decryptor};
pub use encrypt::{generate_key, AesEncryptor, Encryptor};
pub use error::{CryptoError, CryptoResult};

/// The most commonly used items, importable in one line
pub mod prelude {
    pub use crate::cipher::{AES_KEY_LENGTH, GCM_STANDARD_NONCE_SIZE};
    pub use crate::decrypt::{AesDecryptor, Decryptor};
    pub use crate::encrypt::{generate_key, AesEncryptor, Encryptor};
    pub use crate::error::{CryptoError, CryptoResult};
}
