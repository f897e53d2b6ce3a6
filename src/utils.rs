//! Small filesystem helpers

use crate::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_FOLDER: AtomicUsize = AtomicUsize::new(0);

/// File name with a local timestamp, e.g. `stl_ascii_20240101_120000.log`
pub fn date_time_filename(prefix: &str, postfix: &str) -> String {
    let now = chrono::Local::now();
    format!("{}{}{}", prefix, now.format("%Y%m%d_%H%M%S"), postfix)
}

/// Scratch directory for fixture files, removed with its contents on drop
pub struct TempFolder {
    path: PathBuf,
}

impl TempFolder {
    pub fn new() -> Result<Self> {
        let id = NEXT_FOLDER.fetch_add(1, Ordering::Relaxed);
        let path = env::temp_dir().join(format!("stl_ascii_{}_{}", std::process::id(), id));
        fs::create_dir_all(&path)
            .map_err(|e| Error::FileLoad(format!("Failed to create temp dir: {}", e)))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `data` to `name` inside the folder and return the full path
    pub fn write(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let path = self.path.join(name);
        fs::write(&path, data)?;
        Ok(path)
    }
}

impl Drop for TempFolder {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
