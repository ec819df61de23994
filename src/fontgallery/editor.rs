//! External editor integration for template editing.
//!
//! The template is written to a temp file, the user's editor is launched on
//! it, and the buffer is read back once the editor exits. `$VISUAL` wins
//! over `$EDITOR`; `vi` is the last resort.

use crate::error::{FontGalleryError, Result};
use std::env;
use std::fs;
use std::process::Command;

pub fn edit_template(initial: &str) -> Result<String> {
    let editor = env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());

    let path = env::temp_dir().join(format!("fontgallery-template-{}.md", std::process::id()));
    fs::write(&path, initial)?;

    // The editor variable may carry arguments ("code --wait").
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| FontGalleryError::Editor("Editor command is empty".to_string()))?;
    let status = Command::new(program)
        .args(parts)
        .arg(&path)
        .status()
        .map_err(|e| FontGalleryError::Editor(format!("Failed to launch {}: {}", program, e)))?;

    if !status.success() {
        let _ = fs::remove_file(&path);
        return Err(FontGalleryError::Editor(
            "Editor exited with a non-zero status; template not saved".to_string(),
        ));
    }

    let edited = fs::read_to_string(&path)?;
    let _ = fs::remove_file(&path);
    Ok(edited)
}
