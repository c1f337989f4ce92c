/*!
 * AES-256-GCM engine for symmetric encryption
 *
 * This module wraps the AEAD cipher and owns the nonce lifecycle: key
 * validation, nonce generation, and recovery of a prepended nonce from a
 * ciphertext blob.
 */

mod cipher;

pub use cipher::*;
