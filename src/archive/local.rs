use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs;

use super::{ArchiveEntry, ArchiveFileEntry};

pub const DAYS_DIR: &str = "days";
pub const INDEX_FILE: &str = "index.json";
const ENTRY_EXTENSION: &str = ".json";

/// Archive files on local disk: `<root>/days/<date>.json` plus `<root>/index.json`.
#[derive(Debug)]
pub struct DayStore(PathBuf);

impl DayStore {
    pub fn open(root: impl AsRef<Path>) -> Self {
        Self(root.as_ref().to_owned())
    }

    pub fn days_dir(&self) -> PathBuf {
        self.0.join(DAYS_DIR)
    }

    pub fn entry_path(&self, file_name: &str) -> PathBuf {
        self.days_dir().join(file_name)
    }

    pub fn index_path(&self) -> PathBuf {
        self.0.join(INDEX_FILE)
    }

    pub async fn create_dirs(&self) -> crate::Result<()> {
        fs::create_dir_all(self.days_dir()).await?;
        Ok(())
    }

    /// The entry previously written under `file_name`, if there is a readable one.
    pub async fn load(&self, file_name: &str) -> Option<ArchiveEntry> {
        let path = self.entry_path(file_name);
        let payload = match fs::read_to_string(&path).await {
            Ok(payload) => payload,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Could not read {}: {e}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&payload) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("{} is not a valid archive entry: {e}", path.display());
                None
            }
        }
    }

    pub async fn save(&self, file_name: &str, entry: &ArchiveEntry) -> crate::Result<()> {
        let payload = serde_json::to_string_pretty(entry)?;
        fs::write(self.entry_path(file_name), payload).await?;
        Ok(())
    }

    /// File names of every entry in the days directory, in no particular order.
    pub async fn list(&self) -> crate::Result<Vec<String>> {
        let mut dir = fs::read_dir(self.days_dir()).await?;
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(ENTRY_EXTENSION) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    pub async fn save_index(&self, index: &[ArchiveFileEntry]) -> crate::Result<()> {
        let payload = serde_json::to_string_pretty(index)?;
        fs::write(self.index_path(), payload).await?;
        Ok(())
    }
}

pub fn entry_title(file_name: &str) -> &str {
    file_name
        .strip_suffix(ENTRY_EXTENSION)
        .unwrap_or(file_name)
}
