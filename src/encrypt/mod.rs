/*!
 * Encryption half of the sealing API
 *
 * Provides the [`Encryptor`] capability trait and its AES-256-GCM
 * implementation, covering string (base64) and whole-file transport in both
 * caller-supplied-nonce and auto-generated-nonce modes.
 */

mod encrypt;

pub use encrypt::*;
