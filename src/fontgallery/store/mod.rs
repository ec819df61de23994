//! # Vault storage layer
//!
//! A vault is a flat namespace of notes and folders addressed by relative,
//! `/`-separated paths (`Fonts/Arial.md`). The [`Vault`] trait abstracts it
//! so the generation pipeline never touches the filesystem directly:
//!
//! - [`fs::FileVault`]: production vault rooted at a directory
//! - [`memory::InMemoryVault`]: in-memory vault for tests, with write
//!   failure injection
//!
//! Create and modify are deliberately separate operations: the orchestrator
//! checks what exists at a path first and picks one, preserving the identity
//! of notes that are regenerated.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// What currently occupies a vault path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

/// Abstract interface for the note store.
pub trait Vault {
    /// What exists at `path`, if anything.
    fn entry_kind(&self, path: &str) -> Option<EntryKind>;

    /// Read a note's content.
    fn read(&self, path: &str) -> Result<String>;

    /// Create a new note. Fails if the path is already occupied.
    fn create(&mut self, path: &str, content: &str) -> Result<()>;

    /// Overwrite an existing note in place.
    fn modify(&mut self, path: &str, content: &str) -> Result<()>;

    /// Create a folder (and any missing parents).
    fn create_folder(&mut self, path: &str) -> Result<()>;

    /// All folder paths currently in the vault.
    fn list_folders(&self) -> Result<Vec<String>>;
}
