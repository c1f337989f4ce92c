/*!
 * Decryption half of the sealing API
 *
 * Provides the [`Decryptor`] capability trait and its AES-256-GCM
 * implementation. Base64 input is decoded before any cipher work; in
 * auto-nonce mode the nonce prepended by encryption is sliced off the blob
 * before the AEAD open.
 */

mod decrypt;

pub use decrypt::*;

#[cfg(test)]
mod tests;
