use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

use crate::error::{CryptoError, CryptoResult};

/// File mode applied to every file this crate writes (owner read/write only).
///
/// Only enforced on Unix; other platforms fall back to the default mode.
pub const OUTPUT_FILE_MODE: u32 = 0o600;

/// Generate random bytes of the specified length
///
/// Draws from the operating system's secure random source. If the source
/// cannot supply enough bytes the error propagates; there is no fallback to
/// a weaker generator.
pub fn random_bytes(length: usize) -> CryptoResult<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::random_source(&format!("OS random source failed: {}", e)))?;
    Ok(bytes)
}

/// Securely zero out sensitive data from memory
///
/// Uses the zeroize crate so the write is not optimized away by the
/// compiler.
pub fn secure_zero(data: &mut [u8]) {
    data.zeroize();
}

/// Read an entire file into memory
pub fn read_file(path: &std::path::Path) -> CryptoResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        CryptoError::io(&format!("read source file '{}'", path.display()), e)
    })
}

/// Write an entire buffer to a file with restrictive permissions
///
/// The file is created (or truncated) with mode [`OUTPUT_FILE_MODE`] on
/// Unix. A failed write is not cleaned up; the error propagates and the
/// caller decides what to do with any partial output.
pub fn write_file_restricted(path: &std::path::Path, data: &[u8]) -> CryptoResult<()> {
    use std::io::Write;

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_FILE_MODE);
    }

    let mut file = options.open(path).map_err(|e| {
        CryptoError::io(&format!("create output file '{}'", path.display()), e)
    })?;

    file.write_all(data).map_err(|e| {
        CryptoError::io(&format!("write output file '{}'", path.display()), e)
    })?;

    Ok(())
}
