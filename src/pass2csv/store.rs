use crate::error::{Pass2CsvError, Result};
use directories::BaseDirs;
use std::env;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension carried by every encrypted entry in a pass store.
pub const SECRET_FILE_EXT: &str = "gpg";

const STORE_DIR_ENV: &str = "PASSWORD_STORE_DIR";
const DEFAULT_STORE_DIR: &str = ".password-store";

/// Handle on a password store: the resolved root directory plus entry
/// enumeration. Read-only — this tool never writes into the store.
pub struct PasswordStore {
    root: PathBuf,
}

impl PasswordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the store root from `$PASSWORD_STORE_DIR` (tilde-expanded),
    /// falling back to `~/.password-store`.
    pub fn from_env() -> Result<Self> {
        let root = match env::var_os(STORE_DIR_ENV) {
            Some(dir) => expand_tilde(Path::new(&dir))?,
            None => home_dir()?.join(DEFAULT_STORE_DIR),
        };
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily enumerate every secret file under the store, or under a
    /// root-relative subfolder of it. Each file is yielded exactly once, in
    /// whatever order the filesystem walks. Errors up front if the scan base
    /// is not a directory.
    pub fn entries(
        &self,
        subfolder: Option<&Path>,
    ) -> Result<impl Iterator<Item = Result<PathBuf>>> {
        let base = match subfolder {
            Some(sub) => self.root.join(sub),
            None => self.root.clone(),
        };

        if !base.is_dir() {
            return Err(Pass2CsvError::StoreNotFound(base));
        }

        let iter = WalkDir::new(base).into_iter().filter_map(|entry| match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_secret_file(entry.path()) {
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e.into())),
        });

        Ok(iter)
    }
}

fn is_secret_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SECRET_FILE_EXT)
}

fn home_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| Pass2CsvError::Store("could not determine home directory".to_string()))
}

/// Expand a leading `~` component to the user's home directory. Paths
/// without one pass through untouched.
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home_dir()?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}
