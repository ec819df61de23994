use super::{EntryKind, Vault};
use crate::error::{FontGalleryError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Production vault backed by a directory tree.
///
/// Paths handed to the trait are vault-relative with `/` separators; they
/// are validated against traversal outside the root before touching disk.
pub struct FileVault {
    root: PathBuf,
}

impl FileVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(FontGalleryError::Store(format!(
                "Path escapes the vault: {}",
                path
            )));
        }
        Ok(self.root.join(relative))
    }

    fn collect_folders(&self, dir: &Path, out: &mut Vec<String>) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let name = name.to_string_lossy();
            // Hidden directories (including the settings dir) are not part
            // of the vault namespace.
            if name.starts_with('.') {
                continue;
            }
            let relative = path
                .strip_prefix(&self.root)
                .map_err(|e| FontGalleryError::Store(e.to_string()))?
                .to_string_lossy()
                .replace('\\', "/");
            out.push(relative);
            self.collect_folders(&path, out)?;
        }
        Ok(())
    }
}

impl Vault for FileVault {
    fn entry_kind(&self, path: &str) -> Option<EntryKind> {
        let full = self.resolve(path).ok()?;
        let meta = fs::metadata(full).ok()?;
        if meta.is_dir() {
            Some(EntryKind::Folder)
        } else {
            Some(EntryKind::File)
        }
    }

    fn read(&self, path: &str) -> Result<String> {
        let full = self.resolve(path)?;
        Ok(fs::read_to_string(full)?)
    }

    fn create(&mut self, path: &str, content: &str) -> Result<()> {
        let full = self.resolve(path)?;
        if full.exists() {
            return Err(FontGalleryError::Store(format!(
                "Already exists: {}",
                path
            )));
        }
        if let Some(parent) = full.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(full, content)?;
        Ok(())
    }

    fn modify(&mut self, path: &str, content: &str) -> Result<()> {
        let full = self.resolve(path)?;
        if !full.is_file() {
            return Err(FontGalleryError::Store(format!("Not a note: {}", path)));
        }
        fs::write(full, content)?;
        Ok(())
    }

    fn create_folder(&mut self, path: &str) -> Result<()> {
        let full = self.resolve(path)?;
        if full.exists() && !full.is_dir() {
            return Err(FontGalleryError::Store(format!(
                "{} exists but is not a folder",
                path
            )));
        }
        fs::create_dir_all(full)?;
        Ok(())
    }

    fn list_folders(&self) -> Result<Vec<String>> {
        let mut folders = Vec::new();
        if self.root.exists() {
            self.collect_folders(&self.root, &mut folders)?;
        }
        folders.sort();
        Ok(folders)
    }
}
