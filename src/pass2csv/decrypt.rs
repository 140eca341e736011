use crate::error::{Pass2CsvError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Decryption backend for secret files.
///
/// The export pipeline only ever calls `decrypt`; swapping the backend is
/// how tests run without a gpg keyring.
pub trait Decrypt {
    /// Produce the plaintext for one secret file.
    fn decrypt(&self, path: &Path) -> Result<String>;
}

/// Production backend: shells out to `gpg --decrypt --quiet` and captures
/// stdout. A non-zero exit (missing key, corrupt file, pinentry cancelled)
/// fails the whole export — there is no per-entry recovery.
pub struct GpgDecryptor;

impl Decrypt for GpgDecryptor {
    fn decrypt(&self, path: &Path) -> Result<String> {
        let output = Command::new("gpg")
            .arg("--decrypt")
            .arg("--quiet")
            .arg(path)
            .output()
            .map_err(|e| Pass2CsvError::Decrypt {
                path: path.to_path_buf(),
                detail: format!("failed to launch gpg: {}", e),
            })?;

        if !output.status.success() {
            return Err(Pass2CsvError::Decrypt {
                path: path.to_path_buf(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| Pass2CsvError::Decrypt {
            path: path.to_path_buf(),
            detail: format!("plaintext is not valid UTF-8: {}", e),
        })
    }
}

/// Reads entries as-is, no gpg involved. Used by tests and for stores that
/// were exported to plaintext beforehand.
pub struct PlainDecryptor;

impl Decrypt for PlainDecryptor {
    fn decrypt(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(Pass2CsvError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decryptor_reads_file_contents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("entry.gpg");
        fs::write(&path, "hunter2\nlogin: alice").unwrap();

        let plaintext = PlainDecryptor.decrypt(&path).unwrap();
        assert_eq!(plaintext, "hunter2\nlogin: alice");
    }

    #[test]
    fn test_plain_decryptor_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("gone.gpg");

        let err = PlainDecryptor.decrypt(&path).unwrap_err();
        assert!(matches!(err, Pass2CsvError::Io(_)));
    }
}
