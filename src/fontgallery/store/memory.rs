use super::{EntryKind, Vault};
use crate::error::{FontGalleryError, Result};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// In-memory vault for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryVault {
    files: BTreeMap<String, String>,
    folders: BTreeSet<String>,
    failing_paths: HashSet<String>,
}

impl InMemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `path` fail, to exercise per-item error paths.
    pub fn fail_writes_at(&mut self, path: impl Into<String>) {
        self.failing_paths.insert(path.into());
    }

    fn check_failure(&self, path: &str) -> Result<()> {
        if self.failing_paths.contains(path) {
            return Err(FontGalleryError::Store(format!(
                "Injected write failure: {}",
                path
            )));
        }
        Ok(())
    }

    fn register_parents(&mut self, path: &str) {
        if let Some((dir, _)) = path.rsplit_once('/') {
            let mut prefix = String::new();
            for segment in dir.split('/') {
                if !prefix.is_empty() {
                    prefix.push('/');
                }
                prefix.push_str(segment);
                self.folders.insert(prefix.clone());
            }
        }
    }
}

impl Vault for InMemoryVault {
    fn entry_kind(&self, path: &str) -> Option<EntryKind> {
        if self.files.contains_key(path) {
            Some(EntryKind::File)
        } else if self.folders.contains(path) {
            Some(EntryKind::Folder)
        } else {
            None
        }
    }

    fn read(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FontGalleryError::Store(format!("Not a note: {}", path)))
    }

    fn create(&mut self, path: &str, content: &str) -> Result<()> {
        self.check_failure(path)?;
        if self.entry_kind(path).is_some() {
            return Err(FontGalleryError::Store(format!(
                "Already exists: {}",
                path
            )));
        }
        self.register_parents(path);
        self.files.insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn modify(&mut self, path: &str, content: &str) -> Result<()> {
        self.check_failure(path)?;
        match self.files.get_mut(path) {
            Some(existing) => {
                *existing = content.to_string();
                Ok(())
            }
            None => Err(FontGalleryError::Store(format!("Not a note: {}", path))),
        }
    }

    fn create_folder(&mut self, path: &str) -> Result<()> {
        self.check_failure(path)?;
        if self.files.contains_key(path) {
            return Err(FontGalleryError::Store(format!(
                "{} exists but is not a folder",
                path
            )));
        }
        let mut prefix = String::new();
        for segment in path.split('/') {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            self.folders.insert(prefix.clone());
        }
        Ok(())
    }

    fn list_folders(&self) -> Result<Vec<String>> {
        Ok(self.folders.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_modify_read() {
        let mut vault = InMemoryVault::new();
        vault.create("Arial.md", "one").unwrap();
        assert!(vault.create("Arial.md", "again").is_err());
        vault.modify("Arial.md", "two").unwrap();
        assert_eq!(vault.read("Arial.md").unwrap(), "two");
    }

    #[test]
    fn test_create_registers_parent_folders() {
        let mut vault = InMemoryVault::new();
        vault.create("Fonts/Serif/Arial.md", "x").unwrap();
        assert_eq!(vault.entry_kind("Fonts"), Some(EntryKind::Folder));
        assert_eq!(vault.entry_kind("Fonts/Serif"), Some(EntryKind::Folder));
        assert_eq!(
            vault.list_folders().unwrap(),
            vec!["Fonts".to_string(), "Fonts/Serif".to_string()]
        );
    }

    #[test]
    fn test_injected_failures() {
        let mut vault = InMemoryVault::new();
        vault.fail_writes_at("Broken.md");
        assert!(vault.create("Broken.md", "x").is_err());
        assert!(vault.entry_kind("Broken.md").is_none());
    }
}
