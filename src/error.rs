/*!
 * Error Handling for the sealkit Cryptography Library
 *
 * Provides a single error type covering every failure surface of the
 * library, with a short context string identifying the step that failed.
 */

use thiserror::Error;

use crate::cipher::AES_KEY_LENGTH;

/// Convenience alias for results returned by this crate
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Error type for all cryptographic operations
///
/// Every variant carries a short human-readable context naming the step that
/// failed (key validation, decode, cipher construction, decrypt, file
/// read/write). Errors are propagated immediately; nothing in this crate
/// retries, downgrades, or swallows a failure.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The supplied key is not exactly [`AES_KEY_LENGTH`] bytes
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Base64 input could not be decoded; checked before any cipher work
    #[error("decode error: {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: base64::DecodeError,
    },

    /// The AEAD could not be parameterized (malformed key for the block
    /// cipher, or an unsupported nonce length for GCM)
    #[error("cipher construction error: {context}")]
    CipherConstruction { context: String },

    /// The authentication tag did not verify: tampered ciphertext, wrong
    /// key, or wrong nonce
    #[error("authentication failed: {context}")]
    AuthenticationFailed { context: String },

    /// The secure random source could not supply enough bytes
    #[error("random source exhausted: {context}")]
    RandomSource { context: String },

    /// A file read or write failed
    #[error("io error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CryptoError {
    pub fn invalid_key_length(actual: usize) -> Self {
        CryptoError::InvalidKeyLength {
            expected: AES_KEY_LENGTH,
            actual,
        }
    }

    pub fn decode(context: &str, source: base64::DecodeError) -> Self {
        CryptoError::Decode {
            context: context.to_string(),
            source,
        }
    }

    pub fn cipher_construction(context: &str) -> Self {
        CryptoError::CipherConstruction {
            context: context.to_string(),
        }
    }

    pub fn authentication_failed(context: &str) -> Self {
        CryptoError::AuthenticationFailed {
            context: context.to_string(),
        }
    }

    pub fn random_source(context: &str) -> Self {
        CryptoError::RandomSource {
            context: context.to_string(),
        }
    }

    pub fn io(context: &str, source: std::io::Error) -> Self {
        CryptoError::Io {
            context: context.to_string(),
            source,
        }
    }

    /// Short static name for the error category, useful in logs
    pub fn error_type(&self) -> &'static str {
        match self {
            CryptoError::InvalidKeyLength { .. } => "InvalidKeyLength",
            CryptoError::Decode { .. } => "Decode",
            CryptoError::CipherConstruction { .. } => "CipherConstruction",
            CryptoError::AuthenticationFailed { .. } => "AuthenticationFailed",
            CryptoError::RandomSource { .. } => "RandomSource",
            CryptoError::Io { .. } => "Io",
        }
    }
}
